//! 계정 서비스 모듈
//!
//! 로컬 계정 관리(`account_service`)와 소셜 로그인 계정 연결(`account_resolver`)을
//! 제공합니다.

pub mod account_resolver;
pub mod account_service;

pub use account_resolver::AccountResolver;
pub use account_service::AccountService;
