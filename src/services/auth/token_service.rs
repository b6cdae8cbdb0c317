//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256(HS256) 서명 토큰의 발급과 검증을 담당합니다.
//! 서명 키와 만료 시간은 생성 시점에 주입됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    domain::dto::users::response::user_response::to_rfc3339,
    domain::entities::users::user::User,
    domain::models::token::TokenClaims,
    errors::{AppError, AppResult, ErrorContext},
};

/// JWT 토큰 관리 서비스
///
/// 발급된 토큰에는 사용자의 공개 필드(ID, 이름, 이메일, 생성 시각)만 포함됩니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    /// 환경 변수(`JWT_SECRET`, `JWT_EXPIRATION_HOURS`)로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    pub fn expiration_hours(&self) -> i64 {
        self.expiration_hours
    }

    /// 사용자를 위한 JWT 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 사용자 (저장되어 ID가 있어야 함)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패, 사용자 ID 없음 또는 만료 시각 계산 범위 초과
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.generate_token(&user)?;
    /// ```
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = Duration::try_hours(self.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::InternalError(format!("토큰 만료 시간 범위 초과: {}시간", self.expiration_hours))
            })?;

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: to_rfc3339(user.created_at),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (스킴 접두사 제외)
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - 서명 불일치, 형식 오류, 만료 등 모든 검증 실패
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthorizationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthorizationError(format!("토큰 검증 실패: {}", e)),
            })
    }
}
