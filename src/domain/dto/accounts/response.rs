//! 계정 프로필 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::config::OAuthProvider;
use crate::domain::entities::accounts::{Account, Role};

/// 민감 정보를 제거한 계정 프로필 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: Option<String>,
    pub name: String,

    /// 소셜 로그인 제공자 (로컬 계정은 null)
    pub provider: Option<OAuthProvider>,

    pub profile_completed: bool,
    pub role: Role,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            email,
            name,
            provider,
            profile_completed,
            role,
            created_at,
            updated_at,
            ..
        } = account;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            name,
            provider,
            profile_completed,
            role,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_not_exposed() {
        let account = Account::new_local(
            "user@example.com".to_string(),
            "홍길동".to_string(),
            "$2b$04$hash".to_string(),
        );

        let response = AccountResponse::from(account);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$04$hash"));
        assert!(json.contains("user@example.com"));
    }
}
