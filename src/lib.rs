//! 소셜 로그인 서비스 백엔드
//!
//! Rust 기반의 현대적인 인증 및 계정 관리 서비스입니다.
//! JWT 토큰 기반 인증, Google/Kakao/Naver OAuth 2.0 소셜 로그인,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **계정 관리**: 로컬 회원가입, 프로필 조회/수정
//! - **JWT 인증**: HMAC-SHA256 서명 토큰 기반 상태 없는 인증
//! - **OAuth 2.0**: Google, Kakao, Naver 소셜 로그인 지원
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 계정 데이터 영구 저장
//! - **Redis**: 계정 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use login_service_backend::services::accounts::AccountService;
//! use login_service_backend::services::auth::TokenService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let account_service = AccountService::instance();
//! let token_service = TokenService::instance();
//!
//! // 로그인 검증 및 토큰 발급
//! let account = account_service.login(&request).await?;
//! let token = token_service.issue(&account)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
