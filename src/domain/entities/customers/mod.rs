//! Customers Entity Module
//!
//! 관리 대상 고객 레코드를 정의합니다. 인증 계정과는 무관합니다.

pub mod customer;
