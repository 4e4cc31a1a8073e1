//! 계정 프로필 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 내 프로필 수정 요청
///
/// 포함된 필드만 수정합니다. 연합 계정에 대한 `password` 필드는
/// 무시됩니다 (소셜 로그인 계정은 패스워드가 없음).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: Option<String>,

    #[validate(length(min = 6, max = 20, message = "비밀번호는 6-20자 사이여야 합니다"))]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_profile_validation() {
        let valid = UpdateProfileRequest {
            name: Some("새이름".to_string()),
            password: None,
        };
        assert!(valid.validate().is_ok());

        let empty = UpdateProfileRequest {
            name: None,
            password: None,
        };
        assert!(empty.validate().is_ok());

        let short_password = UpdateProfileRequest {
            name: None,
            password: Some("123".to_string()),
        };
        assert!(short_password.validate().is_err());
    }
}
