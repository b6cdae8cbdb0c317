//! 고객 관리 서비스 모듈
//!
//! 인증된 호출자만 접근하는 `/customers` 리소스의 비즈니스 로직입니다.

pub mod customer_service;

pub use customer_service::*;
