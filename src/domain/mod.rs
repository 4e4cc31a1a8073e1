//! 도메인 계층 모듈
//!
//! 엔티티, DTO, 도메인 모델을 묶는 상위 모듈입니다.

pub mod entities;
pub mod dto;
pub mod models;
