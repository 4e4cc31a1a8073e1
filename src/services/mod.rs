//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 계정 관리와 인증/소셜 로그인 기능을 담당합니다.
//!
//! # Features
//!
//! - 로컬 회원가입/로그인 및 프로필 관리
//! - JWT 토큰 기반 인증 시스템
//! - OAuth 2.0 소셜 로그인 (Google, Kakao, Naver)
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{accounts::AccountService, auth::TokenService};
//!
//! let account_service = AccountService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod accounts;
pub mod auth;
pub mod oauth;
