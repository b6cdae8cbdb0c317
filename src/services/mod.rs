//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 컴포지션 루트([`crate::core::AppContainer`])에서 리포지토리와
//! 설정값을 주입받아 생성되며, 전역 상태를 갖지 않습니다.
//!
//! # Features
//!
//! - 로컬 계정 회원가입/로그인 (bcrypt)
//! - JWT 토큰 발급과 검증
//! - 고객 레코드 CRUD
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, customers::CustomerService};
//!
//! let customers = container.customer_service.get_customer_list().await?;
//! ```

pub mod auth;
pub mod customers;
