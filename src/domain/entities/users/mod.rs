//! Users Entity Module
//!
//! 인증 계정 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(
//!     "Display Name".to_string(),
//!     "user@example.com".to_string(),
//!     hashed_password,
//! );
//! ```

pub mod user;
