//! User Entity Implementation
//!
//! 인증 계정을 표현하는 사용자 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::Entity;

/// 사용자 엔티티
///
/// 비밀번호는 저장 시점에 항상 bcrypt 해시입니다.
/// 사용자 리포지토리의 기본 프로젝션은 `password`를 제외하므로,
/// 조회 결과의 `password`는 명시적으로 요청한 경우에만 채워집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// 생성 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

impl User {
    /// 새 사용자 생성 (ID와 생성 시간은 저장 시점에 할당됨)
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password: Some(password_hash),
            created_at: None,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호를 제거한 사본을 반환합니다.
    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }
}

impl Entity for User {
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
