//! JWT 클레임 모델

use serde::{Deserialize, Serialize};

/// 액세스 토큰에 담기는 클레임
///
/// subject, 발급 시각, 만료 시각 세 가지만 사용합니다.
/// subject는 계정 이메일이며, 이메일 없는 연합 계정은
/// `{provider}_{provider_id}` 합성 문자열입니다. 역할 같은
/// 변할 수 있는 정보는 토큰에 넣지 않고 매 요청 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 이메일 또는 제공자 합성 식별자
    pub sub: String,

    /// 발급 시각 (unix timestamp, 초)
    pub iat: i64,

    /// 만료 시각 (unix timestamp, 초)
    pub exp: i64,
}
