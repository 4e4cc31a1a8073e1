//! 인증 DTO 모듈

pub mod request;
pub mod response;

pub use request::{LocalLoginRequest, OAuthCallbackQuery, SignupRequest};
pub use response::{LoginResponse, SignupResponse};
