//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명/만료 설정과 비밀번호 해싱 비용을 관리합니다.

use std::env;
use crate::config::Environment;

/// 개발용 기본 JWT 서명 키. 배포 환경에서 사용되면 설정 오류입니다.
pub const DEFAULT_JWT_SECRET: &str = "json-secret-key";

/// JWT 토큰 설정을 관리하는 구조체
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 1시간
/// - **프로덕션**: 반드시 `JWT_SECRET`을 설정할 것
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 [`DEFAULT_JWT_SECRET`]을 사용합니다.
    /// 동작은 하지만 안전하지 않으므로 경고 로그가 출력되며,
    /// 프로덕션 환경에서는 에러 레벨로 기록됩니다.
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_SECRET="$(openssl rand -base64 32)"
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            if Environment::current().is_production() {
                log::error!("JWT_SECRET not set in production, using insecure default key!");
            } else {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            }
            DEFAULT_JWT_SECRET.to_string()
        })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 1시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|hours: &i64| *hours > 0)
            .unwrap_or(1)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 기본 bcrypt cost
    pub const DEFAULT_COST: u32 = 10;

    /// bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그 값을, 아니면 [`Self::DEFAULT_COST`]를 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref())
    }

    fn parse_cost(raw: Option<&str>) -> u32 {
        raw.and_then(|value| value.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or(Self::DEFAULT_COST)
    }
}
