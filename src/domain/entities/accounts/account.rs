//! 계정 엔티티 정의
//!
//! 로컬 가입 계정과 소셜 로그인으로 생성된 연합(federated) 계정을
//! 하나의 `accounts` 컬렉션 문서로 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::config::OAuthProvider;

/// 계정 역할
///
/// MongoDB와 API 응답에는 "USER" / "ADMIN" 대문자 문자열로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// 프론트엔드 리디렉션에 사용하는 "ROLE_" 접두사 형태를 반환합니다.
    pub fn role_name(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// 계정 엔티티
///
/// ## 로컬 계정과 연합 계정의 구분
///
/// - 로컬 계정: `provider`와 `provider_id`가 `None`, `password_hash`는 bcrypt 해시
/// - 연합 계정: `provider`/`provider_id` 쌍이 존재하고 `password_hash`는 빈 문자열
///
/// ## 유니크 제약
///
/// - `email`: sparse unique 인덱스 (이메일이 없는 카카오 외 연합 계정 허용)
/// - `(provider, provider_id)`: sparse unique 복합 인덱스
///
/// 동시 생성 경합은 이 인덱스들의 duplicate key 에러로 감지합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 이메일 (연합 계정은 제공자가 이메일을 주지 않으면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// bcrypt 해시. 연합 계정은 빈 문자열로 저장되어 패스워드 로그인이 차단됩니다.
    pub password_hash: String,

    /// 표시 이름
    pub name: String,

    /// 소셜 로그인 제공자 (로컬 계정은 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<OAuthProvider>,

    /// 제공자 쪽 사용자 식별자 (로컬 계정은 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,

    /// 이메일까지 채워진 완전한 프로필인지 여부
    pub profile_completed: bool,

    pub role: Role,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Account {
    /// 로컬 가입 계정을 생성합니다.
    pub fn new_local(email: String, name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: Some(email),
            password_hash,
            name,
            provider: None,
            provider_id: None,
            profile_completed: true,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// 소셜 로그인으로 연합 계정을 생성합니다.
    ///
    /// 이메일이 없는 계정은 `profile_completed`가 false로 시작하며,
    /// 이후 로그인에서 제공자가 이메일을 내려주면 채워집니다.
    pub fn new_federated(
        provider: OAuthProvider,
        provider_id: String,
        email: Option<String>,
        name: String,
    ) -> Self {
        let now = DateTime::now();
        let profile_completed = email.is_some();

        Self {
            id: None,
            email,
            password_hash: String::new(),
            name,
            provider: Some(provider),
            provider_id: Some(provider_id),
            profile_completed,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 소셜 로그인으로 만들어진 계정인지 여부
    pub fn is_federated(&self) -> bool {
        self.provider.is_some()
    }

    /// 패스워드 로그인이 가능한 계정인지 여부
    pub fn can_authenticate_with_password(&self) -> bool {
        !self.is_federated() && !self.password_hash.is_empty()
    }

    /// 저장된 이메일을 빈 문자열 기준으로 정규화하여 반환합니다.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// 토큰 subject를 반환합니다.
    ///
    /// 이메일이 있으면 이메일, 없으면 `{provider}_{provider_id}` 합성 문자열입니다.
    /// 이메일 없는 연합 계정은 합성 subject로는 보호 API 인증이 불가능하며
    /// 이메일 설정을 완료해야 합니다.
    pub fn token_subject(&self) -> Option<String> {
        match self.email.as_deref() {
            Some(email) if !email.is_empty() => Some(email.to_string()),
            _ => match (&self.provider, &self.provider_id) {
                (Some(provider), Some(provider_id)) => {
                    Some(format!("{}_{}", provider.as_str(), provider_id))
                }
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_account_is_complete() {
        let account = Account::new_local(
            "user@example.com".to_string(),
            "홍길동".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(account.profile_completed);
        assert!(!account.is_federated());
        assert!(account.can_authenticate_with_password());
        assert_eq!(account.role, Role::User);
    }

    #[test]
    fn test_federated_account_without_email_is_incomplete() {
        let account = Account::new_federated(
            OAuthProvider::Naver,
            "naver-123".to_string(),
            None,
            "네이버사용자".to_string(),
        );

        assert!(!account.profile_completed);
        assert!(account.is_federated());
        assert!(!account.can_authenticate_with_password());
        assert_eq!(account.email_or_empty(), "");
        assert_eq!(
            account.token_subject(),
            Some("naver_naver-123".to_string())
        );
    }

    #[test]
    fn test_federated_account_with_email_is_complete() {
        let account = Account::new_federated(
            OAuthProvider::Google,
            "google-sub".to_string(),
            Some("user@gmail.com".to_string()),
            "홍길동".to_string(),
        );

        assert!(account.profile_completed);
        assert_eq!(
            account.token_subject(),
            Some("user@gmail.com".to_string())
        );
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
        assert_eq!(Role::User.role_name(), "ROLE_USER");
        assert_eq!(Role::Admin.role_name(), "ROLE_ADMIN");
    }
}
