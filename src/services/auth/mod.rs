//! 인증 서비스 모듈
//!
//! JWT 기반 토큰 발급과 검증을 담당하는 서비스를 제공합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let token = token_service.issue(&account)?;
//! ```

pub mod token_service;

pub use token_service::*;
