//! # 자격 증명 서비스 구현
//!
//! 로컬 계정의 회원가입과 로그인을 담당합니다.
//!
//! ## 보안 규칙
//!
//! - **bcrypt 해싱**: 솔트가 포함된 적응형 해시, cost는 주입값 (기본 10)
//! - **상수 시간 비교**: `bcrypt::verify`로 해시를 비교
//! - **사용자 열거 방지**: 존재하지 않는 이메일과 틀린 비밀번호는 같은 결과(`None`)
//! - **블로킹 분리**: 해싱/검증은 `web::block`으로 블로킹 스레드 풀에서 실행

use std::sync::Arc;
use actix_web::web;
use bcrypt::{hash, verify};
use log::info;
use crate::{
    domain::dto::users::request::{LoginCredentials, SignupData},
    domain::entities::users::user::User,
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserRepository,
    services::auth::token_service::TokenService,
};

/// 로그인 성공 결과
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// 비밀번호가 제거된 사용자
    pub user: User,
    pub token: String,
}

/// 회원가입 결과
#[derive(Debug, Clone)]
pub struct SignupResult {
    /// 생성된 사용자. 비밀번호 해시를 포함하므로 응답 전에 DTO로 변환해야 합니다.
    pub user: User,
}

/// 회원가입/로그인 서비스
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(user_repo: Arc<UserRepository>, token_service: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            token_service,
            bcrypt_cost,
        }
    }

    /// 이메일과 비밀번호로 로그인합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(LoginResult))` - 자격 증명 일치, 토큰 발급됨
    /// * `Ok(None)` - 이메일이 없거나 비밀번호 불일치 (호출자는 두 경우를 구분하지 않음)
    /// * `Err(AppError)` - 저장소 또는 토큰 생성 오류
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// match auth_service.login(credentials).await? {
    ///     Some(LoginResult { user, token }) => { /* 200 */ }
    ///     None => return Err(AppError::InvalidCredentials),
    /// }
    /// ```
    pub async fn login(&self, credentials: LoginCredentials) -> AppResult<Option<LoginResult>> {
        let LoginCredentials { email, password } = credentials;
        info!("로그인 시도: {}", email);

        let Some(user) = self.user_repo.find_by_email_with_password(&email).await? else {
            return Ok(None);
        };

        let Some(password_hash) = user.password.clone() else {
            return Ok(None);
        };

        let matches = web::block(move || verify(&password, &password_hash)).await?;

        // 손상된 해시는 불일치로 취급합니다
        if !matches.unwrap_or(false) {
            return Ok(None);
        }

        let token = self.token_service.generate_token(&user)?;

        Ok(Some(LoginResult {
            user: user.without_password(),
            token,
        }))
    }

    /// 새 로컬 계정을 만듭니다.
    ///
    /// # 처리 순서
    ///
    /// 1. **중복 확인**: 같은 이메일이 있으면 `ConflictError("User already exists")`
    /// 2. **비밀번호 해싱**: bcrypt (블로킹 스레드 풀)
    /// 3. **저장**: 유니크 인덱스 충돌도 같은 `ConflictError`로 보고
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 가입된 이메일
    /// * `AppError::InternalError` - 해싱 실패 또는 저장소가 ID를 할당하지 않음 (`Unable to create user`)
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn signup_user(&self, data: SignupData) -> AppResult<SignupResult> {
        let start_time = std::time::Instant::now();
        let SignupData { name, email, password } = data;
        info!("회원가입 시도: {}", email);

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(user_already_exists());
        }

        let cost = self.bcrypt_cost;
        let hash_start = std::time::Instant::now();
        let password_hash = web::block(move || hash(password, cost))
            .await?
            .context("비밀번호 해싱 실패")?;
        info!("Password hashing took: {:?}", hash_start.elapsed());

        let created = match self.user_repo.create(User::new(name, email, password_hash)).await {
            Ok(user) => user,
            Err(AppError::ConflictError(_)) => return Err(user_already_exists()),
            Err(e) => return Err(e),
        };

        if created.id.is_none() {
            return Err(AppError::InternalError("Unable to create user".to_string()));
        }

        info!("Total user creation took: {:?}", start_time.elapsed());
        Ok(SignupResult { user: created })
    }
}

fn user_already_exists() -> AppError {
    AppError::ConflictError("User already exists".to_string())
}
