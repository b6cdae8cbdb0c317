//! # 사용자 관련 응답 DTO 모듈
//!
//! - `UserResponse` - 표준 사용자 정보 응답 (비밀번호 제외)
//! - `SignupResponse` - 회원가입 완료 응답
//! - `LoginResponse` - JWT 토큰을 포함한 로그인 응답

pub mod user_response;

pub use user_response::{LoginResponse, SignupResponse, UserResponse};
