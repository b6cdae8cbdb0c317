//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 저장되는 문서 구조와
//! API 계약(요청/응답), 인증 모델을 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities      - MongoDB 문서와 1:1 매핑되는 엔티티 (User, Customer)
//! ├── dto           - 데이터 전송 객체 (Request/Response)
//! └── models        - 인증 모델 (토큰 클레임, 인증된 사용자)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 영속 엔티티
//!
//! 모든 엔티티는 [`entities::Entity`] trait을 구현하며,
//! 식별자(`_id`)와 생성 시각(`created_at`)을 공통으로 가집니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! - **Request DTO**: `validator`로 검증되는 입력 구조체. 누락 필드를
//!   필드 단위 에러(`Required`)로 보고하기 위해 모든 필드가 `Option`입니다.
//! - **Response DTO**: 식별자는 16진수 문자열, 비밀번호는 절대 포함하지 않습니다.
//!
//! ### [`models`] - 인증 모델
//!
//! JWT 클레임과 요청 컨텍스트에 첨부되는 인증된 사용자 정보입니다.
//!
//! ## 데이터 흐름
//!
//! ```text
//! JSON → SignupRequest (검증) → User (엔티티, 해시된 비밀번호) → MongoDB
//! MongoDB → User → UserResponse (비밀번호 제거) → JSON
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Customer, Entity, User};
pub use models::{AuthenticatedUser, TokenClaims};
