//! JWT 인증 토큰 클레임
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)과 사용자 공개 정보를 담습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID, 16진수 ObjectId)
/// - `name`, `email`: 사용자 공개 정보
/// - `created_at`: 계정 생성 시각 (RFC 3339, 선택사항)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
///
/// 비밀번호 해시는 절대 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub iat: i64,
    pub exp: i64,
}
