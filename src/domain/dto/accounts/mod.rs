//! 계정 DTO 모듈

pub mod request;
pub mod response;

pub use request::UpdateProfileRequest;
pub use response::AccountResponse;
