//! 제공자 중립적인 외부 신원 모델

use serde::{Deserialize, Serialize};

use crate::config::OAuthProvider;

/// 제공자별 사용자 정보 응답을 정규화한 결과
///
/// 어떤 제공자에서 왔든 동일한 형태로 다뤄지며,
/// 계정 생성/갱신 로직은 이 타입만 바라봅니다.
///
/// `email`은 제공자가 값을 주지 않은 경우 빈 문자열로 정규화됩니다.
/// 빈 문자열을 `None`으로 바꾸는 판단은 계정 생성 시점에 이뤄집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    pub provider: OAuthProvider,

    /// 제공자 쪽 사용자 식별자 (항상 문자열로 정규화)
    pub provider_id: String,

    /// 이메일. 제공자가 내려주지 않으면 빈 문자열
    pub email: String,

    /// 표시 이름. 제공자별 기본값이 적용된 후의 값
    pub name: String,
}

impl ExternalIdentity {
    /// 공백만 있는 이메일은 없는 것으로 취급합니다.
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// 이메일을 공백 제거 후 반환하며, 비어 있으면 `None`입니다.
    pub fn email_opt(&self) -> Option<String> {
        let trimmed = self.email.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_email_is_treated_as_absent() {
        let identity = ExternalIdentity {
            provider: OAuthProvider::Google,
            provider_id: "google-sub-1".to_string(),
            email: "   ".to_string(),
            name: "홍길동".to_string(),
        };

        assert!(!identity.has_email());
        assert_eq!(identity.email_opt(), None);
    }

    #[test]
    fn test_email_is_trimmed() {
        let identity = ExternalIdentity {
            provider: OAuthProvider::Kakao,
            provider_id: "1234".to_string(),
            email: " user@kakao.com ".to_string(),
            name: "카카오사용자".to_string(),
        };

        assert!(identity.has_email());
        assert_eq!(identity.email_opt(), Some("user@kakao.com".to_string()));
    }
}
