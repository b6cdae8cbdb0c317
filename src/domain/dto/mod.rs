//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 인증 관련 DTO
//! │   ├── request/        # SignupRequest, LoginRequest
//! │   └── response/       # UserResponse, SignupResponse, LoginResponse
//! └── customers/          # 고객 관리 DTO
//!     ├── request.rs      # CustomerRequest
//!     └── response.rs     # CustomerResponse, MessageResponse
//! ```
//!
//! ## 설계 원칙
//!
//! ### 1. 검증은 경계에서
//! 검증에 실패한 입력은 서비스/리포지토리 계층에 도달하지 않습니다.
//! 요청 DTO는 `into_validated()`를 통해서만 검증된 값으로 변환됩니다.
//!
//! ### 2. 필드 단위 에러
//! 누락된 필드도 `{"field": "email", "message": "Required"}` 형태로 보고하기 위해
//! 요청 DTO의 모든 필드는 `Option<T>`로 역직렬화됩니다.
//!
//! ### 3. 민감 정보 제외
//! 응답 DTO에는 비밀번호 해시가 존재하지 않습니다.

pub mod users;
pub mod customers;

pub use users::{LoginCredentials, LoginRequest, LoginResponse, SignupData, SignupRequest, SignupResponse, UserResponse};
pub use customers::{CustomerData, CustomerRequest, CustomerResponse, MessageResponse};
