//! OAuth 토큰 교환 응답 모델

use serde::Deserialize;

/// 제공자 토큰 엔드포인트의 교환 응답
///
/// 세 제공자 모두 `access_token`을 공통으로 내려주며,
/// 나머지 필드는 제공자에 따라 존재 여부가 다릅니다.
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    #[serde(default)]
    pub expires_in: Option<i64>,

    #[serde(default)]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub scope: Option<String>,

    /// Google OIDC 응답에만 포함
    #[serde(default)]
    pub id_token: Option<String>,
}
