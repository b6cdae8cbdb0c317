//! # 고객 관리 DTO 모듈
//!
//! `/customers` 리소스의 요청/응답 구조를 정의합니다.
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `name` | 필수, 3자 이상 | `String must contain at least 3 character(s)` |
//! | `email` | 필수, 이메일 형식 | `Invalid email` |
//! | `age` | 필수, 0 초과 | `Number must be greater than 0` |

pub mod request;
pub mod response;

pub use request::{CustomerData, CustomerRequest};
pub use response::{CustomerResponse, MessageResponse};
