//! Authentication HTTP Handlers
//!
//! 로컬 계정 회원가입과 로그인 엔드포인트입니다.
//!
//! - **회원가입**: `POST /signup` (별칭 `POST /register`)
//! - **로그인**: `POST /login`
use actix_web::{post, routes, web, HttpResponse};
use crate::domain::dto::users::request::{LoginRequest, SignupRequest};
use crate::domain::dto::users::response::{LoginResponse, SignupResponse, UserResponse};
use crate::errors::AppError;
use crate::services::auth::{AuthService, LoginResult};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /signup`, `POST /register`
///
/// # Responses
/// - 200 `{"user": {...}}` (비밀번호 제외)
/// - 400 `{"errors": [...]}` 검증 실패
/// - 400 `{"error": "User already exists"}` 중복 이메일
#[routes]
#[post("/signup")]
#[post("/register")]
pub async fn signup(
    auth_service: web::Data<AuthService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let data = payload.into_inner().into_validated()?;

    let result = auth_service.signup_user(data).await?;

    Ok(HttpResponse::Ok().json(SignupResponse {
        user: UserResponse::from(result.user),
    }))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /login`
///
/// # Responses
/// - 200 `{"user": {...}, "token": "..."}`
/// - 401 `{"error": "Invalid Credentials"}` 이메일 없음 또는 비밀번호 불일치
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let credentials = payload.into_inner().into_validated()?;

    let LoginResult { user, token } = auth_service
        .login(credentials)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        user: UserResponse::from(user),
        token,
    }))
}
