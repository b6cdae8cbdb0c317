//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: <scheme> <token>` 헤더에서 토큰 추출
//! - JWT 서명/만료 검증
//! - 사용자 정보를 request extension에 저장
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 헤더 없음, 공백 기준 2개 조각이 아님 | 401 `{"message": "Invalid token"}` |
//! | 토큰 검증 실패 (서명, 형식, 만료) | 403 `{"message": "Invalid token"}` |
//! | 검증 성공 | 다음 핸들러로 전달 |
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/customers")
//!             .wrap(AuthMiddleware::new(token_service.clone())) // 보호된 라우트에만 적용
//!             .route("", web::get().to(get_customer_list))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
