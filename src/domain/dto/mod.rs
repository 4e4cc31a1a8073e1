//! 데이터 전송 객체 (DTO) 모듈
//!
//! HTTP 요청/응답 경계에서 사용하는 타입들을 정의합니다.
//! 엔티티를 직접 노출하지 않고 민감 정보를 제거한 형태로 변환합니다.

pub mod auth;
pub mod accounts;
