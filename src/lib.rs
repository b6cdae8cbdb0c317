//! 고객 관리 서비스 백엔드
//!
//! Rust 기반의 고객 레코드 관리 REST 서비스입니다.
//! 로컬 계정 회원가입/로그인으로 JWT를 발급하고,
//! 토큰을 가진 호출자만 고객 레코드를 조회하고 수정할 수 있습니다.
//!
//! # Features
//!
//! - **계정 관리**: 로컬 계정 회원가입, bcrypt 비밀번호 해싱
//! - **JWT 인증**: HS256 서명 토큰 기반 상태 없는 인증
//! - **고객 CRUD**: 인증된 호출자 전용 `/customers` 리소스
//! - **명시적 DI**: [`core::AppContainer`]에서 모든 의존성을 조립
//! - **MongoDB**: 공유 게이트웨이를 통한 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← BaseRepository<T> + 컬렉션 설정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← db::Database 게이트웨이
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use customer_service_backend::core::AppContainer;
//!
//! let container = AppContainer::from_env();
//! container.init().await?;
//!
//! let customers = container.customer_service.get_customer_list().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
