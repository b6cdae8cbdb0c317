//! 인증 및 보안 서비스 모듈
//!
//! JWT 토큰 발급/검증과 로컬 계정의 회원가입/로그인을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//! - bcrypt 비밀번호 해싱과 상수 시간 비교
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let token_service = Arc::new(TokenService::from_env());
//! let auth_service = AuthService::new(user_repo, token_service.clone(), PasswordConfig::bcrypt_cost());
//!
//! let result = auth_service.login(credentials).await?;
//! ```

pub mod token_service;
pub mod auth_service;

pub use token_service::*;
pub use auth_service::*;
