//! 고객 데이터 액세스 계층
pub mod customer_repo;

pub use customer_repo::CustomerRepository;
