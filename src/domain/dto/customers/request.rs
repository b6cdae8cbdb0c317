//! 고객 생성/수정 요청 DTO
use serde::Deserialize;
use validator::Validate;
use crate::errors::{AppError, AppResult};

/// 고객 생성 및 수정 요청 구조체
///
/// 수정 요청도 전체 필드를 요구합니다 (부분 수정 없음).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CustomerRequest {
    #[validate(
        required(message = "Required"),
        length(min = 3, message = "String must contain at least 3 character(s)")
    )]
    pub name: Option<String>,

    #[validate(required(message = "Required"), email(message = "Invalid email"))]
    pub email: Option<String>,

    #[validate(
        required(message = "Required"),
        range(exclusive_min = 0.0, message = "Number must be greater than 0")
    )]
    pub age: Option<f64>,
}

/// 검증을 통과한 고객 데이터
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerData {
    pub name: String,
    pub email: String,
    pub age: f64,
}

impl CustomerRequest {
    pub fn into_validated(self) -> AppResult<CustomerData> {
        self.validate()?;

        match (self.name, self.email, self.age) {
            (Some(name), Some(email), Some(age)) => Ok(CustomerData { name, email, age }),
            _ => Err(AppError::InternalError("검증된 고객 요청에 필드가 없습니다".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldError;

    fn errors_of(json: &str) -> Vec<FieldError> {
        let request: CustomerRequest = serde_json::from_str(json).unwrap();
        match request.into_validated() {
            Err(AppError::ValidationError(errors)) => errors,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_customer() {
        let request: CustomerRequest =
            serde_json::from_str(r#"{"name": "Raja", "email": "raja@gmail.com", "age": 25}"#).unwrap();

        let data = request.into_validated().unwrap();
        assert_eq!(
            data,
            CustomerData {
                name: "Raja".to_string(),
                email: "raja@gmail.com".to_string(),
                age: 25.0,
            }
        );
    }

    #[test]
    fn test_age_must_be_positive() {
        let errors = errors_of(r#"{"name": "Raja", "email": "raja@gmail.com", "age": 0}"#);
        assert_eq!(errors, vec![FieldError::new("age", "Number must be greater than 0")]);

        let errors = errors_of(r#"{"name": "Raja", "email": "raja@gmail.com", "age": -3}"#);
        assert_eq!(errors, vec![FieldError::new("age", "Number must be greater than 0")]);
    }

    #[test]
    fn test_short_name() {
        let errors = errors_of(r#"{"name": "Ra", "email": "raja@gmail.com", "age": 25}"#);
        assert_eq!(
            errors,
            vec![FieldError::new("name", "String must contain at least 3 character(s)")]
        );
    }

    #[test]
    fn test_missing_fields_are_required() {
        let errors = errors_of(r#"{"email": "raja"}"#);

        assert_eq!(
            errors,
            vec![
                FieldError::new("age", "Required"),
                FieldError::new("email", "Invalid email"),
                FieldError::new("name", "Required"),
            ]
        );
    }
}
