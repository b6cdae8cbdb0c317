//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 엔티티 리포지토리는 제네릭 [`BaseRepository`]를 감싸며,
//! 컬렉션 이름과 기본 프로젝션을 [`CollectionConfig`]로 전달합니다.
//! 리포지토리는 컴포지션 루트에서 `Arc<Database>`를 주입받아 생성됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(database.clone());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod base_repo;
pub mod users;
pub mod customers;

pub use base_repo::{BaseRepository, BulkOperation, BulkWriteSummary, CollectionConfig, DEFAULT_PAGE_SIZE};
pub use users::UserRepository;
pub use customers::CustomerRepository;
