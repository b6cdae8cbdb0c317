//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 직접 매핑되는 엔티티들을 정의합니다.
//!
//! ## 공통 필드
//!
//! 모든 컬렉션 문서는 다음 두 필드를 가집니다:
//!
//! - `_id`: 저장소가 할당하는 ObjectId (삽입 전에는 `None`)
//! - `created_at`: 생성 시각. 비어 있으면 리포지토리가 삽입 직전에 채웁니다.
//!
//! ## 엔티티 목록
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`users::user::User`] | `users` | 인증 계정 |
//! | [`customers::customer::Customer`] | `customers` | 관리 대상 고객 레코드 |

pub mod users;
pub mod customers;

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{de::DeserializeOwned, Serialize};

pub use users::user::User;
pub use customers::customer::Customer;

/// 컬렉션 문서 공통 인터페이스
///
/// [`BaseRepository`](crate::repositories::BaseRepository)가 타입 매개변수로 요구하며,
/// 생성 시각 자동 기록에 사용됩니다.
pub trait Entity: Serialize + DeserializeOwned + Unpin + Send + Sync {
    /// 저장소가 할당한 식별자
    fn id(&self) -> Option<ObjectId>;

    /// 저장소가 할당한 식별자를 기록합니다.
    fn set_id(&mut self, id: ObjectId);

    /// 생성 시각
    fn created_at(&self) -> Option<DateTime>;

    /// 생성 시각을 설정합니다.
    fn set_created_at(&mut self, created_at: DateTime);
}
