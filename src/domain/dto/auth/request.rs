//! 인증 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 로컬 회원가입 요청
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, max = 20, message = "비밀번호는 6-20자 사이여야 합니다"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,
}

/// 로컬 로그인 요청
#[derive(Debug, Deserialize, Validate)]
pub struct LocalLoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// OAuth 콜백 쿼리 매개변수
///
/// 사용자가 제공자 화면에서 로그인을 거부하면 `code` 없이
/// `error`만 내려오므로 모든 필드가 선택적입니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            email: "user@example.com".to_string(),
            password: "secret1".to_string(),
            name: "홍길동".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
            name: "홍길동".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = SignupRequest {
            email: "user@example.com".to_string(),
            password: "12345".to_string(),
            name: "홍길동".to_string(),
        };
        assert!(short_password.validate().is_err());

        let long_password = SignupRequest {
            email: "user@example.com".to_string(),
            password: "a".repeat(21),
            name: "홍길동".to_string(),
        };
        assert!(long_password.validate().is_err());

        let long_name = SignupRequest {
            email: "user@example.com".to_string(),
            password: "secret1".to_string(),
            name: "가".repeat(51),
        };
        assert!(long_name.validate().is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LocalLoginRequest {
            email: "user@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_password = LocalLoginRequest {
            email: "user@example.com".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }
}
