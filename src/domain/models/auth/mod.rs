//! 인증된 사용자 모델
pub mod authenticated_user;

pub use authenticated_user::AuthenticatedUser;
