//! # Core Module
//!
//! 애플리케이션의 컴포지션 루트를 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`container`] - 의존성 조립
//! - **AppContainer**: 게이트웨이, 리포지토리, 서비스를 한 곳에서 생성
//! - **명시적 주입**: 모든 의존성은 생성자 인자(`Arc<T>`)로 전달되며 전역 상태가 없습니다
//! - **초기화**: 연결 확인과 인덱스 생성을 서버 시작 전에 수행
//!
//! ## 의존성 그래프
//!
//! ```text
//! Database (게이트웨이)
//! ├── UserRepository ──────┐
//! │                        ├── AuthService
//! TokenService ────────────┤
//! │                        └── AuthMiddleware (/customers)
//! └── CustomerRepository ──── CustomerService
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! let container = AppContainer::from_env();
//! container.init().await?;
//!
//! HttpServer::new(move || {
//!     let container = container.clone();
//!     App::new().configure(move |cfg| configure_all_routes(cfg, &container))
//! })
//! ```

pub mod container;

pub use container::AppContainer;
