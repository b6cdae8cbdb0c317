//! # 제네릭 컬렉션 리포지토리
//!
//! 엔티티별 리포지토리가 공유하는 CRUD 구현입니다. 엔티티마다 다른 점
//! (컬렉션 이름, 기본 프로젝션)은 상속이 아니라 [`CollectionConfig`] 데이터로 전달합니다.
//!
//! ## 규칙
//!
//! - 모든 연산은 드라이버 호출을 그대로 전달합니다.
//! - 예외는 생성 시각 기록뿐입니다: `insert_one`/`insert_many`는 `created_at`이
//!   비어 있는 문서에 현재 시각을 채운 뒤 저장합니다.
//! - 기본 프로젝션은 호출자가 프로젝션을 지정하지 않은 읽기에만 적용됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let repo = BaseRepository::<Customer>::new(database, CollectionConfig::new("customers"));
//!
//! let adults = repo.find(doc! { "age": { "$gte": 18 } }, None).await?;
//! let removed = repo.delete_many(doc! { "age": { "$lt": 0 } }).await?;
//! ```

use std::marker::PhantomData;
use std::sync::Arc;
use futures_util::TryStreamExt;
use log::warn;
use mongodb::bson::{oid::ObjectId, Bson, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, FindOneOptions, FindOptions, ReturnDocument};
use mongodb::results::UpdateResult;
use mongodb::Collection;
use crate::db::Database;
use crate::domain::entities::Entity;
use crate::errors::AppResult;

/// `find`에 0 이하의 limit이 전달되었을 때 사용하는 페이지 크기
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// 엔티티별 컬렉션 설정
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    /// MongoDB 컬렉션 이름
    pub collection_name: &'static str,
    /// 호출자가 프로젝션을 지정하지 않은 읽기에 적용할 프로젝션
    pub default_projection: Option<Document>,
}

impl CollectionConfig {
    pub fn new(collection_name: &'static str) -> Self {
        Self {
            collection_name,
            default_projection: None,
        }
    }

    pub fn with_default_projection(mut self, projection: Document) -> Self {
        self.default_projection = Some(projection);
        self
    }

    /// 호출자가 지정한 프로젝션이 없으면 기본 프로젝션을 사용합니다.
    fn resolve_projection(&self, requested: Option<Document>) -> Option<Document> {
        requested.or_else(|| self.default_projection.clone())
    }
}

/// `bulk_write`에 전달되는 단일 쓰기 연산
#[derive(Debug, Clone)]
pub enum BulkOperation<T> {
    InsertOne(T),
    UpdateOne { filter: Document, update: Document },
    UpdateMany { filter: Document, update: Document },
    DeleteOne { filter: Document },
    DeleteMany { filter: Document },
}

/// `bulk_write` 집계 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkWriteSummary {
    pub inserted_count: u64,
    pub matched_count: u64,
    pub modified_count: u64,
    pub deleted_count: u64,
}

impl BulkWriteSummary {
    fn record_update(&mut self, result: &UpdateResult) {
        self.matched_count += result.matched_count;
        self.modified_count += result.modified_count;
    }
}

/// 생성 시각이 비어 있으면 `now`로 채웁니다. 이미 값이 있으면 유지합니다.
pub fn stamp_created_at<T: Entity>(document: &mut T, now: DateTime) {
    if document.created_at().is_none() {
        document.set_created_at(now);
    }
}

/// 0 이하의 limit을 기본 페이지 크기로 바꾸고 기본 프로젝션을 적용합니다.
fn normalize_find_options(options: Option<FindOptions>, config: &CollectionConfig) -> FindOptions {
    let mut options = options.unwrap_or_default();

    if matches!(options.limit, Some(limit) if limit <= 0) {
        options.limit = Some(DEFAULT_PAGE_SIZE);
    }
    options.projection = config.resolve_projection(options.projection.take());

    options
}

/// 제네릭 MongoDB 리포지토리
///
/// 게이트웨이는 `Arc`로 공유되며, 컬렉션 핸들은 매 호출마다 게이트웨이에서 얻습니다.
/// (게이트웨이가 데이터베이스 핸들을 캐시하므로 비용이 거의 없습니다.)
pub struct BaseRepository<T: Entity> {
    db: Arc<Database>,
    config: CollectionConfig,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> BaseRepository<T> {
    pub fn new(db: Arc<Database>, config: CollectionConfig) -> Self {
        Self {
            db,
            config,
            _entity: PhantomData,
        }
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn collection_name(&self) -> &'static str {
        self.config.collection_name
    }

    /// 타입이 지정된 컬렉션 핸들
    pub async fn collection(&self) -> AppResult<Collection<T>> {
        Ok(self.db.get_collection::<T>(self.config.collection_name).await?)
    }

    /// 조건에 맞는 첫 번째 문서를 조회합니다.
    ///
    /// `options`에 프로젝션이 없으면 컬렉션의 기본 프로젝션이 적용됩니다.
    pub async fn find_one(&self, filter: Document, options: Option<FindOneOptions>) -> AppResult<Option<T>> {
        let mut options = options.unwrap_or_default();
        options.projection = self.config.resolve_projection(options.projection.take());

        let document = self.collection().await?
            .find_one(filter)
            .with_options(options)
            .await?;

        Ok(document)
    }

    /// 조건에 맞는 문서를 저장소가 반환하는 순서대로 조회합니다.
    ///
    /// 0 이하의 `limit`은 [`DEFAULT_PAGE_SIZE`]로 대체됩니다.
    pub async fn find(&self, filter: Document, options: Option<FindOptions>) -> AppResult<Vec<T>> {
        let options = normalize_find_options(options, &self.config);

        let cursor = self.collection().await?
            .find(filter)
            .with_options(options)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// 문서 하나를 저장하고, 저장소가 할당한 ID를 채워 반환합니다.
    ///
    /// 저장소가 ObjectId가 아닌 ID를 돌려준 경우 반환값의 `id()`는 `None`입니다.
    pub async fn insert_one(&self, mut document: T) -> AppResult<T> {
        stamp_created_at(&mut document, DateTime::now());

        let result = self.collection().await?.insert_one(&document).await?;

        if let Bson::ObjectId(id) = result.inserted_id {
            document.set_id(id);
        }

        Ok(document)
    }

    /// 여러 문서를 순서대로 저장합니다.
    pub async fn insert_many(&self, mut documents: Vec<T>) -> AppResult<Vec<T>> {
        if documents.is_empty() {
            return Ok(documents);
        }

        let now = DateTime::now();
        for document in documents.iter_mut() {
            stamp_created_at(document, now);
        }

        let result = self.collection().await?.insert_many(&documents).await?;

        for (index, id) in result.inserted_ids {
            if let (Some(document), Bson::ObjectId(id)) = (documents.get_mut(index), id) {
                document.set_id(id);
            }
        }

        Ok(documents)
    }

    /// 조건에 맞는 문서를 수정하고 **수정 후** 문서를 반환합니다. 일치하는 문서가 없으면 `None`.
    pub async fn find_by_id_and_update(&self, filter: Document, update: Document) -> AppResult<Option<T>> {
        let mut options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        options.projection = self.config.resolve_projection(None);

        let document = self.collection().await?
            .find_one_and_update(filter, update)
            .with_options(options)
            .await?;

        Ok(document)
    }

    /// 조건에 맞는 첫 번째 문서를 삭제하고 삭제된 개수(0 또는 1)를 반환합니다.
    pub async fn delete_one(&self, filter: Document) -> AppResult<u64> {
        let result = self.collection().await?.delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    pub async fn delete_many(&self, filter: Document) -> AppResult<u64> {
        let result = self.collection().await?.delete_many(filter).await?;
        Ok(result.deleted_count)
    }

    pub async fn update_many(&self, filter: Document, update: Document) -> AppResult<UpdateResult> {
        Ok(self.collection().await?.update_many(filter, update).await?)
    }

    /// 쓰기 연산들을 주어진 순서대로 실행합니다.
    ///
    /// 첫 실패에서 멈추고 에러를 반환하며, 그 이전 연산의 결과는 되돌리지 않습니다.
    pub async fn bulk_write(&self, operations: Vec<BulkOperation<T>>) -> AppResult<BulkWriteSummary> {
        let collection = self.collection().await?;
        let mut summary = BulkWriteSummary::default();

        for (index, operation) in operations.into_iter().enumerate() {
            let outcome = match operation {
                BulkOperation::InsertOne(mut document) => {
                    stamp_created_at(&mut document, DateTime::now());
                    collection.insert_one(&document).await.map(|_| summary.inserted_count += 1)
                }
                BulkOperation::UpdateOne { filter, update } => collection
                    .update_one(filter, update)
                    .await
                    .map(|result| summary.record_update(&result)),
                BulkOperation::UpdateMany { filter, update } => collection
                    .update_many(filter, update)
                    .await
                    .map(|result| summary.record_update(&result)),
                BulkOperation::DeleteOne { filter } => collection
                    .delete_one(filter)
                    .await
                    .map(|result| summary.deleted_count += result.deleted_count),
                BulkOperation::DeleteMany { filter } => collection
                    .delete_many(filter)
                    .await
                    .map(|result| summary.deleted_count += result.deleted_count),
            };

            if let Err(error) = outcome {
                warn!(
                    "[{}] bulk_write {}번째 연산 실패, 이전 결과: {:?}",
                    self.config.collection_name, index, summary
                );
                return Err(error.into());
            }
        }

        Ok(summary)
    }
}

/// ObjectId 필터 문서
pub fn id_filter(id: ObjectId) -> Document {
    mongodb::bson::doc! { "_id": id }
}
