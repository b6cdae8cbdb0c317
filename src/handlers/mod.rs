//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증, 상태 코드 결정        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! - 요청 본문은 `into_validated()`를 거친 뒤에만 서비스로 전달됩니다.
//! - 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//!   에러 응답 본문은 [`AppError`](crate::errors::AppError)가 결정합니다.
//! - 서비스는 `web::Data<T>`로 주입됩니다.
//!
//! | 모듈 | 엔드포인트 |
//! |------|-----------|
//! | [`auth`] | `POST /signup`, `POST /register`, `POST /login` |
//! | [`customers`] | `/customers` CRUD (인증 필요) |

pub mod auth;
pub mod customers;
