//! 인증 요청관련 DTO
//!
//! 회원가입과 로그인 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;
use crate::errors::{AppError, AppResult};

/// 회원가입 요청 구조체
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        required(message = "Required"),
        length(min = 3, message = "String must contain at least 3 character(s)")
    )]
    pub name: Option<String>,

    #[validate(required(message = "Required"), email(message = "Invalid email"))]
    pub email: Option<String>,

    #[validate(
        required(message = "Required"),
        length(min = 6, message = "String must contain at least 6 character(s)")
    )]
    pub password: Option<String>,
}

/// 검증을 통과한 회원가입 데이터
#[derive(Debug, Clone)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    /// 검증 후 회원가입 데이터로 변환합니다.
    pub fn into_validated(self) -> AppResult<SignupData> {
        self.validate()?;

        match (self.name, self.email, self.password) {
            (Some(name), Some(email), Some(password)) => Ok(SignupData { name, email, password }),
            _ => Err(AppError::InternalError("검증된 회원가입 요청에 필드가 없습니다".to_string())),
        }
    }
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required(message = "Required"), email(message = "Invalid email"))]
    pub email: Option<String>,

    #[validate(
        required(message = "Required"),
        length(min = 6, message = "String must contain at least 6 character(s)")
    )]
    pub password: Option<String>,
}

/// 검증을 통과한 로그인 자격 증명
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// 검증 후 로그인 자격 증명으로 변환합니다.
    pub fn into_validated(self) -> AppResult<LoginCredentials> {
        self.validate()?;

        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok(LoginCredentials { email, password }),
            _ => Err(AppError::InternalError("검증된 로그인 요청에 필드가 없습니다".to_string())),
        }
    }
}
