//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **제네릭 구현 공유**: CRUD는 [`BaseRepository`]에 위임
//! - **비밀번호 보호**: 기본 프로젝션 `{ password: 0 }`
//! - **데이터 무결성**: 이메일 유니크 인덱스 관리

use std::ops::Deref;
use std::sync::Arc;
use mongodb::{bson::doc, options::{FindOneOptions, IndexOptions}, IndexModel};
use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::AppResult,
    repositories::base_repo::{BaseRepository, CollectionConfig},
};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 저장소
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email (unique, `email_unique`)
/// - **기본 프로젝션**: `{ password: 0 }`
///
/// 프로젝션을 명시적으로 지정한 읽기만 비밀번호 해시를 받을 수 있습니다.
/// 로그인 검증 외에는 [`UserRepository::find_by_email_with_password`]를 사용하지 마세요.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database.clone());
///
/// // 비밀번호 없이 조회
/// let user = repo.find_by_email("john@example.com").await?;
///
/// // 제네릭 연산은 BaseRepository에서 그대로 사용
/// let removed = repo.delete_one(doc! { "email": "john@example.com" }).await?;
/// ```
pub struct UserRepository {
    base: BaseRepository<User>,
}

impl UserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    /// 사용자 리포지토리 설정
    pub fn collection_config() -> CollectionConfig {
        CollectionConfig::new(Self::COLLECTION_NAME).with_default_projection(doc! { "password": 0 })
    }

    pub fn new(db: Arc<Database>) -> Self {
        Self {
            base: BaseRepository::new(db, Self::collection_config()),
        }
    }

    /// 이메일 주소로 사용자 조회 (비밀번호 제외)
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우 (`password`는 `None`)
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.base.find_one(doc! { "email": email }, None).await
    }

    /// 비밀번호 해시를 포함하여 이메일로 사용자를 조회합니다.
    ///
    /// 비밀번호 비교 전용입니다.
    pub async fn find_by_email_with_password(&self, email: &str) -> AppResult<Option<User>> {
        let options = FindOneOptions::builder()
            .projection(doc! { "_id": 1, "name": 1, "email": 1, "password": 1, "created_at": 1 })
            .build();

        self.base.find_one(doc! { "email": email }, Some(options)).await
    }

    /// 새 사용자 저장
    ///
    /// 이메일 유니크 인덱스가 있으면 동시 가입 중 늦게 도착한 쪽은
    /// `ConflictError`로 실패합니다.
    pub async fn create(&self, user: User) -> AppResult<User> {
        self.base.insert_one(user).await
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** (`email_unique`)
    ///    - 목적: 가입 시 중복 확인과 삽입 사이의 경쟁 조건 차단
    ///
    /// # 주의사항
    ///
    /// - 이미 중복 이메일이 있는 컬렉션에서는 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.base.collection().await?
            .create_index(email_index)
            .await?;

        Ok(())
    }
}

impl Deref for UserRepository {
    type Target = BaseRepository<User>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
