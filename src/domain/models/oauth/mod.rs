//! OAuth 도메인 모델 모듈
//!
//! 제공자 원본 응답을 정규화한 신원 모델과 토큰 교환 응답을 정의합니다.

pub mod external_identity;
pub mod normalizer;
pub mod token_response;

pub use external_identity::ExternalIdentity;
pub use normalizer::normalize;
pub use token_response::OAuthTokenResponse;
