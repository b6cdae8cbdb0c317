//! # Application Container
//!
//! 프로세스 전체에서 공유되는 컴포넌트를 생성하고 연결합니다.
//! 서비스는 리포지토리를, 리포지토리는 게이트웨이를 주입받습니다.

use std::sync::Arc;
use log::info;
use crate::config::PasswordConfig;
use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::{CustomerRepository, UserRepository};
use crate::services::auth::{AuthService, TokenService};
use crate::services::customers::CustomerService;

/// 컴포지션 루트
///
/// `Clone`은 `Arc` 포인터만 복제하므로 HTTP 워커마다 복사해도 같은 인스턴스를 공유합니다.
#[derive(Clone)]
pub struct AppContainer {
    pub database: Arc<Database>,
    pub user_repository: Arc<UserRepository>,
    pub customer_repository: Arc<CustomerRepository>,
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub customer_service: Arc<CustomerService>,
}

impl AppContainer {
    /// 주어진 게이트웨이와 토큰 서비스로 전체 그래프를 조립합니다.
    ///
    /// # Arguments
    ///
    /// * `database` - 공유 MongoDB 게이트웨이 (아직 연결되지 않아도 됨)
    /// * `token_service` - 토큰 발급/검증 서비스
    /// * `bcrypt_cost` - 회원가입 시 사용할 bcrypt cost
    pub fn new(database: Arc<Database>, token_service: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        let user_repository = Arc::new(UserRepository::new(database.clone()));
        let customer_repository = Arc::new(CustomerRepository::new(database.clone()));

        let auth_service = Arc::new(AuthService::new(
            user_repository.clone(),
            token_service.clone(),
            bcrypt_cost,
        ));
        let customer_service = Arc::new(CustomerService::new(customer_repository.clone()));

        Self {
            database,
            user_repository,
            customer_repository,
            token_service,
            auth_service,
            customer_service,
        }
    }

    /// 환경 변수 설정으로 조립합니다.
    pub fn from_env() -> Self {
        Self::new(
            Arc::new(Database::from_env()),
            Arc::new(TokenService::from_env()),
            PasswordConfig::bcrypt_cost(),
        )
    }

    /// 연결을 확인하고 인덱스를 생성합니다.
    ///
    /// 서버가 요청을 받기 전에 한 번 호출합니다.
    pub async fn init(&self) -> AppResult<()> {
        self.database.initiate_connection().await?;
        self.user_repository.create_indexes().await?;

        info!("✅ 인덱스 생성 완료: {}", UserRepository::COLLECTION_NAME);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_shares_one_gateway() {
        let database = Arc::new(Database::new("mongodb://localhost:27017", "customers_test"));
        let container = AppContainer::new(database.clone(), Arc::new(TokenService::new("secret", 1)), 4);

        assert!(Arc::ptr_eq(&container.database, &database));

        let cloned = container.clone();
        assert!(Arc::ptr_eq(&cloned.auth_service, &container.auth_service));
        assert!(Arc::ptr_eq(&cloned.token_service, &container.token_service));
    }
}
