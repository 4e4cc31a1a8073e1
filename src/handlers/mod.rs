//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로컬 인증 엔드포인트
//!   - 회원가입 (`POST /api/auth/signup`)
//!   - 로그인 (`POST /api/auth/login`)
//!
//! - **`oauth`**: 소셜 로그인 엔드포인트
//!   - 로그인 시작 (`GET /oauth2/authorization/{provider}`)
//!   - 콜백 처리 (`GET /login/oauth2/code/{provider}`)
//!
//! - **`accounts`**: 계정 관리 엔드포인트
//!   - 내 프로필 조회 (`GET /api/user/me`)
//!   - 내 프로필 수정 (`PUT /api/user/me`)
//!
//! - **`debug`**: 설정 진단 엔드포인트
//!   - OAuth 설정 요약 (`GET /api/debug/oauth-config`)
//!   - 클라이언트 등록 상태 (`GET /api/debug/oauth2-clients`)
//!
//! ## 주요 특징
//!
//! ### 1. 비동기 처리
//! - **Future 기반**: 모든 핸들러가 `async/await` 사용
//! - **논블로킹 I/O**: 데이터베이스, 외부 API 호출 시 블로킹 없음
//!
//! ### 2. 타입 안전성
//! - **컴파일 타임 검증**: 요청/응답 타입 검증
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **검증 통합**: validator 크레이트로 입력 검증
//!
//! ```rust,ignore
//! #[derive(Deserialize, Validate)]
//! pub struct SignupRequest {
//!     #[validate(email)]
//!     pub email: String,
//!
//!     #[validate(length(min = 6, max = 20))]
//!     pub password: String,
//! }
//! ```
//!
//! ### 3. 에러 처리
//! - **Result 패턴**: Rust의 에러 처리 관용구 활용
//! - **자동 변환**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: AppError로 모든 에러 통합 처리
//!
//! 단, 소셜 로그인 콜백은 브라우저 리다이렉트 플로우이므로
//! 에러를 JSON 대신 프론트엔드 리다이렉트로 전달합니다.

pub mod accounts;
pub mod auth;
pub mod debug;
pub mod oauth;
