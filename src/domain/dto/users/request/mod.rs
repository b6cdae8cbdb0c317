//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 검증합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! #[post("/signup")]
//! async fn signup(payload: web::Json<SignupRequest>) -> Result<HttpResponse, AppError> {
//!     let data = payload.into_inner().into_validated()?; // 실패 시 400
//!     ...
//! }
//! ```

pub mod auth_request;

pub use auth_request::{LoginCredentials, LoginRequest, SignupData, SignupRequest};
