//! # 사용자 인증 DTO 모듈
//!
//! 회원가입/로그인 요청과 응답 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `name` | 필수, 3자 이상 | `Required` / `String must contain at least 3 character(s)` |
//! | `email` | 필수, 이메일 형식 | `Required` / `Invalid email` |
//! | `password` | 필수, 6자 이상 | `Required` / `String must contain at least 6 character(s)` |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
