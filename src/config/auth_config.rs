//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰, 프론트엔드 리디렉션 등 인증 관련 설정을 관리하는 모듈입니다.
//! Spring Security의 OAuth2 Client Registration 및 JWT 설정과 유사한 역할을 수행합니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 인증
//! 2. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 3. **Kakao OAuth 2.0**: 카카오 계정을 통한 소셜 로그인
//! 4. **Naver OAuth 2.0**: 네이버 계정을 통한 소셜 로그인
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export KAKAO_CLIENT_ID="your-kakao-rest-api-key"
//! export NAVER_CLIENT_ID="your-naver-client-id"
//! export NAVER_CLIENT_SECRET="your-naver-client-secret"
//!
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! export FRONTEND_URL="http://localhost:3000"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{OAuthProvider, JwtConfig};
//!
//! let provider = OAuthProvider::from_str("kakao")?;
//! let auth_uri = provider.auth_uri();
//!
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//! ```

use std::env;

use crate::errors::AppError;

/// Google OAuth 2.0 설정
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
/// 승인된 리디렉션 URI 목록에 `{서버}/login/oauth2/code/google`이 등록되어 있어야 합니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// 환경 변수가 없으면 빈 문자열을 반환하고 경고를 남깁니다.
    /// 빈 Client ID로는 실제 인증 요청이 성립하지 않습니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID").unwrap_or_else(|_| {
            log::warn!("GOOGLE_CLIENT_ID not set, Google login will not work");
            String::new()
        })
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 서버 사이드 토큰 교환에서만 사용되는 민감한 값입니다.
    /// 로그에 출력하거나 API 응답에 포함해서는 안 됩니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default()
    }

    /// Client Secret 설정 여부를 반환합니다.
    ///
    /// 디버그 엔드포인트에서 secret 값 자체를 노출하지 않고
    /// 설정 상태만 확인할 때 사용합니다.
    pub fn has_client_secret() -> bool {
        env::var("GOOGLE_CLIENT_SECRET")
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }

    /// 인증 완료 후 콜백받을 리디렉션 URI를 반환합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/login/oauth2/code/google".to_string())
    }

    /// Google 인증 엔드포인트 URI (기본값 제공)
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google 토큰 교환 엔드포인트 URI (기본값 제공)
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// Google 사용자 정보 조회 엔드포인트 URI (기본값 제공)
    pub fn user_info_uri() -> String {
        env::var("GOOGLE_USER_INFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }

    /// 인증 요청에 포함할 scope
    pub fn scope() -> String {
        env::var("GOOGLE_SCOPE").unwrap_or_else(|_| "openid email profile".to_string())
    }
}

/// Kakao OAuth 2.0 설정
///
/// Kakao Developers 콘솔에서 발급받은 REST API 키를 Client ID로 사용합니다.
/// 카카오는 Client Secret이 선택 사항이므로, 설정된 경우에만 토큰 교환에 포함합니다.
pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    pub fn client_id() -> String {
        env::var("KAKAO_CLIENT_ID").unwrap_or_else(|_| {
            log::warn!("KAKAO_CLIENT_ID not set, Kakao login will not work");
            String::new()
        })
    }

    /// Kakao Client Secret (선택 사항, 미설정 시 빈 문자열)
    pub fn client_secret() -> String {
        env::var("KAKAO_CLIENT_SECRET").unwrap_or_default()
    }

    pub fn has_client_secret() -> bool {
        env::var("KAKAO_CLIENT_SECRET")
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }

    pub fn redirect_uri() -> String {
        env::var("KAKAO_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/login/oauth2/code/kakao".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("KAKAO_AUTH_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/authorize".to_string())
    }

    pub fn token_uri() -> String {
        env::var("KAKAO_TOKEN_URI")
            .unwrap_or_else(|_| "https://kauth.kakao.com/oauth/token".to_string())
    }

    pub fn user_info_uri() -> String {
        env::var("KAKAO_USER_INFO_URI")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string())
    }

    pub fn scope() -> String {
        env::var("KAKAO_SCOPE").unwrap_or_else(|_| "profile_nickname account_email".to_string())
    }
}

/// Naver OAuth 2.0 설정
///
/// 네이버 개발자 센터에서 발급받은 애플리케이션 정보를 관리합니다.
/// 네이버는 토큰 교환 시 `state` 매개변수를 함께 요구합니다.
pub struct NaverOAuthConfig;

impl NaverOAuthConfig {
    pub fn client_id() -> String {
        env::var("NAVER_CLIENT_ID").unwrap_or_else(|_| {
            log::warn!("NAVER_CLIENT_ID not set, Naver login will not work");
            String::new()
        })
    }

    pub fn client_secret() -> String {
        env::var("NAVER_CLIENT_SECRET").unwrap_or_default()
    }

    pub fn has_client_secret() -> bool {
        env::var("NAVER_CLIENT_SECRET")
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }

    pub fn redirect_uri() -> String {
        env::var("NAVER_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/login/oauth2/code/naver".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("NAVER_AUTH_URI")
            .unwrap_or_else(|_| "https://nid.naver.com/oauth2.0/authorize".to_string())
    }

    pub fn token_uri() -> String {
        env::var("NAVER_TOKEN_URI")
            .unwrap_or_else(|_| "https://nid.naver.com/oauth2.0/token".to_string())
    }

    pub fn user_info_uri() -> String {
        env::var("NAVER_USER_INFO_URI")
            .unwrap_or_else(|_| "https://openapi.naver.com/v1/nid/me".to_string())
    }

    pub fn scope() -> String {
        env::var("NAVER_SCOPE").unwrap_or_else(|_| "name email".to_string())
    }
}

/// JSON Web Token (JWT) 관련 설정
///
/// 토큰 서명 비밀키와 만료 시간을 관리합니다.
/// 토큰 클레임은 `sub`, `iat`, `exp` 세 가지만 사용합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다. 기본값은 24시간입니다.
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// OAuth 공통 보안 설정
///
/// CSRF 공격 방지를 위한 state 매개변수 생성에 사용되는 비밀키를 관리합니다.
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth State 생성용 비밀키를 반환합니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET").unwrap_or_else(|_| {
            log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
            "oauth-state-secret".to_string()
        })
    }
}

/// 프론트엔드 리디렉션 설정
///
/// 소셜 로그인 성공/실패 후 사용자를 돌려보낼 프론트엔드 주소를 관리합니다.
pub struct FrontendConfig;

impl FrontendConfig {
    /// 프론트엔드 베이스 URL (기본값: http://localhost:3000)
    pub fn base_url() -> String {
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
    }
}

/// 지원하는 OAuth 제공자를 나타내는 열거형
///
/// 지원 범위는 Google, Kakao, Naver 세 곳으로 닫혀 있으며,
/// 그 외의 제공자 이름은 `from_str`에서 타입 에러로 거부됩니다.
///
/// ## 직렬화 지원
///
/// `serde`를 통해 소문자 문자열("google", "kakao", "naver")로
/// 직렬화/역직렬화되므로 API 응답과 데이터베이스 저장에 그대로 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    /// Google OAuth 2.0 인증
    Google,

    /// Kakao OAuth 2.0 인증
    ///
    /// 이메일 제공 동의가 없는 계정이 존재하므로,
    /// 신규 계정 생성 시 이메일이 필수라는 점이 다른 제공자와 다릅니다.
    Kakao,

    /// Naver OAuth 2.0 인증
    ///
    /// 사용자 정보가 `response` 필드 아래에 중첩되어 내려옵니다.
    Naver,
}

impl OAuthProvider {
    /// 문자열에서 OAuthProvider를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 제공자 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(OAuthProvider)` - 유효한 제공자인 경우
    /// * `Err(AppError::UnsupportedProvider)` - 지원하지 않는 제공자인 경우
    pub fn from_str(s: &str) -> Result<Self, AppError> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "kakao" => Ok(OAuthProvider::Kakao),
            "naver" => Ok(OAuthProvider::Naver),
            _ => Err(AppError::UnsupportedProvider(s.to_string())),
        }
    }

    /// OAuthProvider를 소문자 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Kakao => "kakao",
            OAuthProvider::Naver => "naver",
        }
    }

    /// 제공자별 인증 엔드포인트 URI
    pub fn auth_uri(&self) -> String {
        match self {
            OAuthProvider::Google => GoogleOAuthConfig::auth_uri(),
            OAuthProvider::Kakao => KakaoOAuthConfig::auth_uri(),
            OAuthProvider::Naver => NaverOAuthConfig::auth_uri(),
        }
    }

    /// 제공자별 토큰 교환 엔드포인트 URI
    pub fn token_uri(&self) -> String {
        match self {
            OAuthProvider::Google => GoogleOAuthConfig::token_uri(),
            OAuthProvider::Kakao => KakaoOAuthConfig::token_uri(),
            OAuthProvider::Naver => NaverOAuthConfig::token_uri(),
        }
    }

    /// 제공자별 사용자 정보 조회 엔드포인트 URI
    pub fn user_info_uri(&self) -> String {
        match self {
            OAuthProvider::Google => GoogleOAuthConfig::user_info_uri(),
            OAuthProvider::Kakao => KakaoOAuthConfig::user_info_uri(),
            OAuthProvider::Naver => NaverOAuthConfig::user_info_uri(),
        }
    }

    pub fn client_id(&self) -> String {
        match self {
            OAuthProvider::Google => GoogleOAuthConfig::client_id(),
            OAuthProvider::Kakao => KakaoOAuthConfig::client_id(),
            OAuthProvider::Naver => NaverOAuthConfig::client_id(),
        }
    }

    pub fn client_secret(&self) -> String {
        match self {
            OAuthProvider::Google => GoogleOAuthConfig::client_secret(),
            OAuthProvider::Kakao => KakaoOAuthConfig::client_secret(),
            OAuthProvider::Naver => NaverOAuthConfig::client_secret(),
        }
    }

    pub fn has_client_secret(&self) -> bool {
        match self {
            OAuthProvider::Google => GoogleOAuthConfig::has_client_secret(),
            OAuthProvider::Kakao => KakaoOAuthConfig::has_client_secret(),
            OAuthProvider::Naver => NaverOAuthConfig::has_client_secret(),
        }
    }

    pub fn redirect_uri(&self) -> String {
        match self {
            OAuthProvider::Google => GoogleOAuthConfig::redirect_uri(),
            OAuthProvider::Kakao => KakaoOAuthConfig::redirect_uri(),
            OAuthProvider::Naver => NaverOAuthConfig::redirect_uri(),
        }
    }

    pub fn scope(&self) -> String {
        match self {
            OAuthProvider::Google => GoogleOAuthConfig::scope(),
            OAuthProvider::Kakao => KakaoOAuthConfig::scope(),
            OAuthProvider::Naver => NaverOAuthConfig::scope(),
        }
    }

    /// 지원하는 모든 제공자 목록
    pub fn all() -> [OAuthProvider; 3] {
        [
            OAuthProvider::Google,
            OAuthProvider::Kakao,
            OAuthProvider::Naver,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_provider_from_string() {
        assert_eq!(
            OAuthProvider::from_str("google").unwrap(),
            OAuthProvider::Google
        );
        assert_eq!(
            OAuthProvider::from_str("kakao").unwrap(),
            OAuthProvider::Kakao
        );
        assert_eq!(
            OAuthProvider::from_str("naver").unwrap(),
            OAuthProvider::Naver
        );

        // 대소문자 무관 테스트
        assert_eq!(
            OAuthProvider::from_str("GOOGLE").unwrap(),
            OAuthProvider::Google
        );
        assert_eq!(
            OAuthProvider::from_str("Kakao").unwrap(),
            OAuthProvider::Kakao
        );
    }

    #[test]
    fn test_oauth_provider_rejects_unknown() {
        assert!(matches!(
            OAuthProvider::from_str("github"),
            Err(AppError::UnsupportedProvider(_))
        ));
        assert!(matches!(
            OAuthProvider::from_str("facebook"),
            Err(AppError::UnsupportedProvider(_))
        ));
        assert!(matches!(
            OAuthProvider::from_str(""),
            Err(AppError::UnsupportedProvider(_))
        ));
    }

    #[test]
    fn test_oauth_provider_roundtrip() {
        for provider in OAuthProvider::all() {
            let parsed = OAuthProvider::from_str(provider.as_str()).unwrap();
            assert_eq!(parsed, provider);
        }
    }

    #[test]
    fn test_oauth_provider_serialization() {
        let provider = OAuthProvider::Kakao;
        let json = serde_json::to_string(&provider).unwrap();
        assert_eq!(json, "\"kakao\"");

        let deserialized: OAuthProvider = serde_json::from_str(&json).unwrap();
        assert_eq!(provider, deserialized);
    }
}
