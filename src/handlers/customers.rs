//! Customer HTTP Handlers
//!
//! `/customers` 스코프의 핸들러입니다. 스코프 전체가 [`AuthMiddleware`](crate::middlewares::AuthMiddleware)로
//! 보호되므로 여기 도달한 요청은 이미 인증되어 있습니다.
use actix_web::{delete, get, post, put, web, HttpResponse};
use mongodb::bson::oid::ObjectId;
use crate::domain::dto::customers::{CustomerRequest, CustomerResponse, MessageResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::customers::CustomerService;

fn parse_customer_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound("Invalid customer id".to_string()))
}

fn customer_not_found() -> AppError {
    AppError::NotFound("Customer not found".to_string())
}

/// 원시 본문을 [`CustomerRequest`]로 역직렬화합니다. 실패는 필드 `body`의 검증 에러입니다.
fn parse_customer_body(body: &[u8]) -> Result<CustomerRequest, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::invalid_field("body", e.to_string()))
}

/// 고객 목록 조회 (`GET /customers`)
#[get("")]
pub async fn get_customer_list(
    customer_service: web::Data<CustomerService>,
) -> Result<HttpResponse, AppError> {
    let customers: Vec<CustomerResponse> = customer_service
        .get_customer_list()
        .await?
        .into_iter()
        .map(CustomerResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(customers))
}

/// 고객 단건 조회 (`GET /customers/{id}`)
#[get("/{id}")]
pub async fn get_customer(
    customer_service: web::Data<CustomerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_customer_id(&path)?;

    let customer = customer_service
        .get_customer(id)
        .await?
        .ok_or_else(customer_not_found)?;

    Ok(HttpResponse::Ok().json(CustomerResponse::from(customer)))
}

/// 고객 생성 (`POST /customers`)
#[post("")]
pub async fn create_customer(
    customer_service: web::Data<CustomerService>,
    user: AuthenticatedUser,
    payload: web::Json<CustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let data = payload.into_inner().into_validated()?;

    let created = customer_service.create_customer(data).await?;
    log::info!("고객 생성 요청자: {}", user.user_id);

    Ok(HttpResponse::Created().json(CustomerResponse::from(created)))
}

/// 고객 수정 (`PUT /customers/{id}`)
///
/// ID 확인(형식, 존재 여부)이 본문 검증보다 먼저 수행됩니다.
/// 본문은 `web::Bytes`로 받아 ID 확인 이후에 파싱합니다.
#[put("/{id}")]
pub async fn update_customer(
    customer_service: web::Data<CustomerService>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let id = parse_customer_id(&path)?;

    if customer_service.get_customer(id).await?.is_none() {
        return Err(customer_not_found());
    }

    let data = parse_customer_body(&body)?.into_validated()?;

    let updated = customer_service
        .update_customer(id, data)
        .await?
        .ok_or_else(customer_not_found)?;

    Ok(HttpResponse::Ok().json(CustomerResponse::from(updated)))
}

/// 고객 삭제 (`DELETE /customers/{id}`)
#[delete("/{id}")]
pub async fn delete_customer(
    customer_service: web::Data<CustomerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_customer_id(&path)?;

    if !customer_service.remove_customer(id).await? {
        return Err(customer_not_found());
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Customer deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_customer_id() {
        let id = ObjectId::new();
        assert_eq!(parse_customer_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_invalid_customer_id_is_not_found() {
        match parse_customer_id("not-an-object-id") {
            Err(AppError::NotFound(message)) => assert_eq!(message, "Invalid customer id"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_customer_body_parse_error_is_body_field() {
        match parse_customer_body(b"{ not json") {
            Err(AppError::ValidationError(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "body");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_customer_body_wrong_type_is_body_field() {
        let result = parse_customer_body(br#"{"name":"Ravi","email":"ravi@gmail.com","age":"old"}"#);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_customer_body_parses_valid_json() {
        let request = parse_customer_body(br#"{"name":"Ravi","email":"ravi@gmail.com","age":25}"#).unwrap();
        let data = request.into_validated().unwrap();
        assert_eq!(data.name, "Ravi");
        assert_eq!(data.age, 25.0);
    }
}
