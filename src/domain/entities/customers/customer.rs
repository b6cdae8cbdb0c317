//! Customer Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::Entity;

/// 고객 엔티티
///
/// 이메일은 형식만 검증하며 전역 유니크 제약은 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub age: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

impl Customer {
    pub fn new(name: String, email: String, age: f64) -> Self {
        Self {
            id: None,
            name,
            email,
            age,
            created_at: None,
        }
    }
}

impl Entity for Customer {
    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn created_at(&self) -> Option<DateTime> {
        self.created_at
    }

    fn set_created_at(&mut self, created_at: DateTime) {
        self.created_at = Some(created_at);
    }
}
