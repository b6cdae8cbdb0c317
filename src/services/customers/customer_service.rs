//! # 고객 관리 서비스 구현
//!
//! 고객 레코드의 조회, 생성, 수정, 삭제를 담당합니다.
//! 입력 검증은 핸들러 경계에서 끝나며, 이 서비스는 검증된 [`CustomerData`]만 받습니다.

use std::sync::Arc;
use log::info;
use mongodb::bson::{doc, oid::ObjectId};
use crate::{
    domain::dto::customers::request::CustomerData,
    domain::entities::customers::customer::Customer,
    errors::AppResult,
    repositories::customers::CustomerRepository,
};

pub struct CustomerService {
    customer_repo: Arc<CustomerRepository>,
}

impl CustomerService {
    pub fn new(customer_repo: Arc<CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    /// 모든 고객을 저장소 순서대로 반환합니다.
    pub async fn get_customer_list(&self) -> AppResult<Vec<Customer>> {
        self.customer_repo.find_all().await
    }

    pub async fn get_customer(&self, id: ObjectId) -> AppResult<Option<Customer>> {
        self.customer_repo.find_by_id(id).await
    }

    /// 고객을 생성하고 저장된 레코드(ID, 생성 시각 포함)를 반환합니다.
    pub async fn create_customer(&self, data: CustomerData) -> AppResult<Customer> {
        let CustomerData { name, email, age } = data;

        let created = self.customer_repo.insert_one(Customer::new(name, email, age)).await?;
        info!("고객 생성: {:?}", created.id);

        Ok(created)
    }

    /// `$set`으로 이름, 이메일, 나이를 갱신합니다.
    ///
    /// 수정 후 문서를 반환하며, 해당 ID가 없으면 `None`입니다.
    pub async fn update_customer(&self, id: ObjectId, data: CustomerData) -> AppResult<Option<Customer>> {
        let fields = doc! {
            "name": data.name,
            "email": data.email,
            "age": data.age,
        };

        self.customer_repo.set_fields(id, fields).await
    }

    /// 정확히 한 건이 삭제되었을 때만 `true`를 반환합니다.
    pub async fn remove_customer(&self, id: ObjectId) -> AppResult<bool> {
        let deleted_count = self.customer_repo.delete_by_id(id).await?;
        Ok(deleted_count == 1)
    }
}
