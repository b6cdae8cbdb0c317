//! 에러 모듈
//!
//! [`AppError`]와 HTTP 응답 변환 규칙을 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext, FieldError};
