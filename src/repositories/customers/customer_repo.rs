//! # 고객 리포지토리 구현
//!
//! `customers` 컬렉션에 대한 데이터 액세스. 기본 프로젝션은 없습니다.

use std::ops::Deref;
use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId, Document};
use crate::{
    db::Database,
    domain::entities::customers::customer::Customer,
    errors::AppResult,
    repositories::base_repo::{id_filter, BaseRepository, CollectionConfig},
};

pub struct CustomerRepository {
    base: BaseRepository<Customer>,
}

impl CustomerRepository {
    pub const COLLECTION_NAME: &'static str = "customers";

    pub fn new(db: Arc<Database>) -> Self {
        Self {
            base: BaseRepository::new(db, CollectionConfig::new(Self::COLLECTION_NAME)),
        }
    }

    /// 저장소 순서대로 모든 고객을 조회합니다.
    pub async fn find_all(&self) -> AppResult<Vec<Customer>> {
        self.base.find(doc! {}, None).await
    }

    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Customer>> {
        self.base.find_one(id_filter(id), None).await
    }

    /// `$set`으로 필드를 갱신하고 수정 후 문서를 반환합니다.
    pub async fn set_fields(&self, id: ObjectId, fields: Document) -> AppResult<Option<Customer>> {
        self.base
            .find_by_id_and_update(id_filter(id), doc! { "$set": fields })
            .await
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> AppResult<u64> {
        self.base.delete_one(id_filter(id)).await
    }
}

impl Deref for CustomerRepository {
    type Target = BaseRepository<Customer>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
