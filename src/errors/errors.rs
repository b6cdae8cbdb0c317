//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 | `{"errors": [{"field", "message"}]}` |
//! | `ConflictError` | 400 | `{"error": "..."}` |
//! | `InvalidCredentials` | 401 | `{"error": "Invalid Credentials"}` |
//! | `AuthenticationError` | 401 | `{"message": "Invalid token"}` |
//! | `AuthorizationError` | 403 | `{"message": "Invalid token"}` |
//! | `NotFound` | 404 | `{"errors": ["..."]}` |
//! | `DatabaseError` / `InternalError` | 500 | `{"errors": ["Internal Server Error"]}` |
//!
//! 내부 오류의 상세 내용은 로그에만 남기고 클라이언트에는 노출하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_customer(id: &str) -> Result<Customer, AppError> {
//!     let object_id = ObjectId::parse_str(id)
//!         .map_err(|_| AppError::NotFound("Invalid customer id".to_string()))?;
//!
//!     customer_repo.find_one(doc! { "_id": object_id }, None).await?
//!         .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 필드 단위 검증 실패 정보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0:?}")]
    ValidationError(Vec<FieldError>),

    /// 충돌/중복 에러 (400 Bad Request, 필드 단위가 아닌 단일 메시지)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 로그인 자격 증명 불일치 (401 Unauthorized)
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// 인증 헤더 누락/형식 오류 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 토큰은 있으나 유효하지 않음 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 필드 검증 실패를 생성합니다.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![FieldError::new(field, message)])
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => json!({ "errors": errors }),
            AppError::ConflictError(message) => json!({ "error": message }),
            AppError::InvalidCredentials => json!({ "error": "Invalid Credentials" }),
            AppError::AuthenticationError(_) | AppError::AuthorizationError(_) => {
                json!({ "message": "Invalid token" })
            }
            AppError::NotFound(message) => json!({ "errors": [message] }),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("{}", self);
                json!({ "errors": ["Internal Server Error"] })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ValidationErrors> for AppError {
    /// 필드마다 첫 번째 메시지만 사용하며, 필드 이름 순으로 정렬합니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                errors.first().map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    FieldError::new(field.to_string(), message)
                })
            })
            .collect();

        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationError(field_errors)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        if is_duplicate_key(&error) {
            return AppError::ConflictError(error.to_string());
        }
        AppError::DatabaseError(error.to_string())
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(error: actix_web::error::BlockingError) -> Self {
        AppError::InternalError(format!("블로킹 작업 실패: {}", error))
    }
}

/// 유니크 인덱스 위반(중복 키) 쓰기 에러인지 확인합니다.
pub fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::InsertMany(insert_many_error) => insert_many_error
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY_CODE)),
        _ => false,
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
