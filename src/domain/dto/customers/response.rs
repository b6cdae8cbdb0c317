//! 고객 응답 DTO
use serde::{Deserialize, Serialize, Serializer};
use crate::domain::dto::users::response::user_response::to_rfc3339;
use crate::domain::entities::customers::customer::Customer;

/// 고객 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_age")]
    pub age: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: customer.name,
            email: customer.email,
            age: customer.age,
            created_at: to_rfc3339(customer.created_at),
        }
    }
}

/// 정수 값인 나이는 `25.0`이 아닌 `25`로 직렬화합니다.
fn serialize_age<S: Serializer>(age: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let whole = age.trunc();
    if age.is_finite() && whole == *age && whole.abs() < i64::MAX as f64 {
        serializer.serialize_i64(whole as i64)
    } else {
        serializer.serialize_f64(*age)
    }
}

/// 단일 메시지 응답 (`{"message": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
