//! 소셜 로그인 서비스 모듈

pub mod oauth_login_service;

pub use oauth_login_service::OAuthLoginService;
