//! 인증 컨텍스트 모델 모듈

pub mod authenticated_account;
pub mod token_claims;

pub use authenticated_account::{AuthenticatedAccount, OptionalAccount};
pub use token_claims::TokenClaims;
