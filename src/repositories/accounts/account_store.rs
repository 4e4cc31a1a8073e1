//! 계정 저장소 추상화
//!
//! 계정 해석 로직이 MongoDB 구현에 직접 의존하지 않도록
//! 저장소 연산을 trait로 분리합니다. 프로덕션에서는
//! [`AccountRepository`](super::account_repo::AccountRepository)가 구현하고,
//! 테스트에서는 인메모리 구현을 사용합니다.

use async_trait::async_trait;
use mongodb::bson::{doc, Document};

use crate::config::OAuthProvider;
use crate::domain::entities::accounts::Account;
use crate::errors::AppResult;

/// 낙관적 삽입의 결과
///
/// 유니크 인덱스 충돌은 에러가 아니라 결과의 한 갈래로 표현합니다.
/// 동시 생성 경합에서 어느 인덱스가 충돌했는지에 따라 처리 방식이 다릅니다.
#[derive(Debug)]
pub enum InsertOutcome {
    /// 삽입 성공. `_id`가 채워진 계정을 담습니다.
    Created(Account),

    /// `(provider, provider_id)` 복합 인덱스 충돌.
    /// 동일 계정이 경합 중에 먼저 생성된 경우이므로 재조회 후 로그인으로 처리합니다.
    DuplicatePair,

    /// `email` 인덱스 충돌. 다른 계정이 이미 해당 이메일을 사용 중입니다.
    DuplicateEmail,
}

/// 부분 갱신 명세
///
/// `None` 필드는 건드리지 않습니다. `updated_at`은 항상 갱신됩니다.
#[derive(Debug, Default, Clone)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub profile_completed: Option<bool>,
}

impl AccountUpdate {
    /// MongoDB `$set` 문서로 변환합니다.
    pub fn into_document(self) -> Document {
        let mut set = doc! { "updated_at": mongodb::bson::DateTime::now() };

        if let Some(name) = self.name {
            set.insert("name", name);
        }
        if let Some(email) = self.email {
            set.insert("email", email);
        }
        if let Some(password_hash) = self.password_hash {
            set.insert("password_hash", password_hash);
        }
        if let Some(profile_completed) = self.profile_completed {
            set.insert("profile_completed", profile_completed);
        }

        set
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.profile_completed.is_none()
    }
}

/// 계정 해석 로직이 필요로 하는 저장소 연산
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    async fn find_by_provider_pair(
        &self,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> AppResult<Option<Account>>;

    /// 사전 중복 검사 없이 삽입을 시도하고, 인덱스 충돌을 결과로 보고합니다.
    async fn insert(&self, account: Account) -> AppResult<InsertOutcome>;

    /// id(hex)로 계정을 부분 갱신하고 갱신된 계정을 반환합니다.
    async fn apply_update(&self, id: &str, update: AccountUpdate) -> AppResult<Option<Account>>;
}

/// 테스트용 인메모리 저장소
///
/// MongoDB의 유니크 인덱스 의미론(sparse unique email, 복합 pair 인덱스)을
/// 그대로 흉내 내어 해석 로직을 단위 테스트할 수 있게 합니다.
#[cfg(test)]
pub mod in_memory {
    use std::sync::Mutex;

    use mongodb::bson::oid::ObjectId;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryAccountStore {
        accounts: Mutex<Vec<Account>>,
    }

    impl InMemoryAccountStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.accounts.lock().unwrap().len()
        }

        pub fn seed(&self, mut account: Account) -> Account {
            if account.id.is_none() {
                account.id = Some(ObjectId::new());
            }
            self.accounts.lock().unwrap().push(account.clone());
            account
        }
    }

    #[async_trait]
    impl AccountStore for InMemoryAccountStore {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts
                .iter()
                .find(|a| a.email.as_deref() == Some(email))
                .cloned())
        }

        async fn find_by_provider_pair(
            &self,
            provider: OAuthProvider,
            provider_id: &str,
        ) -> AppResult<Option<Account>> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts
                .iter()
                .find(|a| {
                    a.provider == Some(provider) && a.provider_id.as_deref() == Some(provider_id)
                })
                .cloned())
        }

        async fn insert(&self, mut account: Account) -> AppResult<InsertOutcome> {
            let mut accounts = self.accounts.lock().unwrap();

            if let (Some(provider), Some(provider_id)) = (account.provider, &account.provider_id) {
                let pair_taken = accounts.iter().any(|a| {
                    a.provider == Some(provider) && a.provider_id.as_ref() == Some(provider_id)
                });
                if pair_taken {
                    return Ok(InsertOutcome::DuplicatePair);
                }
            }

            if let Some(email) = &account.email {
                if accounts.iter().any(|a| a.email.as_ref() == Some(email)) {
                    return Ok(InsertOutcome::DuplicateEmail);
                }
            }

            account.id = Some(ObjectId::new());
            accounts.push(account.clone());
            Ok(InsertOutcome::Created(account))
        }

        async fn apply_update(
            &self,
            id: &str,
            update: AccountUpdate,
        ) -> AppResult<Option<Account>> {
            let mut accounts = self.accounts.lock().unwrap();
            let target = accounts
                .iter_mut()
                .find(|a| a.id_string().as_deref() == Some(id));

            let Some(account) = target else {
                return Ok(None);
            };

            if let Some(name) = update.name {
                account.name = name;
            }
            if let Some(email) = update.email {
                account.email = Some(email);
            }
            if let Some(password_hash) = update.password_hash {
                account.password_hash = password_hash;
            }
            if let Some(profile_completed) = update.profile_completed {
                account.profile_completed = profile_completed;
            }
            account.updated_at = mongodb::bson::DateTime::now();

            Ok(Some(account.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_document_contains_only_set_fields() {
        let update = AccountUpdate {
            name: Some("새이름".to_string()),
            email: None,
            password_hash: None,
            profile_completed: Some(true),
        };

        let doc = update.into_document();
        assert_eq!(doc.get_str("name").unwrap(), "새이름");
        assert!(doc.get_bool("profile_completed").unwrap());
        assert!(!doc.contains_key("email"));
        assert!(!doc.contains_key("password_hash"));
        assert!(doc.contains_key("updated_at"));
    }

    #[test]
    fn test_empty_update_detection() {
        assert!(AccountUpdate::default().is_empty());
        assert!(!AccountUpdate {
            name: Some("x".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
