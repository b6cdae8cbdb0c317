//! # Configuration Module
//!
//! 고객 관리 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 모든 값은 로컬 개발 환경에서 바로 동작하는 기본값을 가집니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 실행 환경, 요청 제한 설정
//! - [`auth_config`] - JWT, 비밀번호 해싱 관련 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let uri = DatabaseConfig::uri();
//! let secret = JwtConfig::secret();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="customers"
//!
//! # JWT
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="1"
//!
//! # 보안
//! export BCRYPT_COST="10"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
