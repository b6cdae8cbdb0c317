//! # Domain Models Module
//!
//! 영속화되지 않는 인증 모델을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB 문서와 매핑되며 `_id`를 가짐
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 객체
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── token/   ← JWT 클레임 (TokenClaims)
//! └── auth/    ← 요청 확장에 첨부되는 인증된 사용자 (AuthenticatedUser)
//! ```
//!
//! ## 흐름
//!
//! ```text
//! Authorization 헤더 → TokenService::verify_token → TokenClaims
//!                     → AuthenticatedUser (req.extensions) → 핸들러 추출자
//! ```

pub mod token;
pub mod auth;

pub use token::TokenClaims;
pub use auth::AuthenticatedUser;
