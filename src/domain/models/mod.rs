//! 도메인 모델 모듈
//!
//! 영속되지 않는 도메인 값 객체들을 정의합니다.

pub mod auth;
pub mod oauth;
