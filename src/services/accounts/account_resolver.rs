//! 외부 신원을 계정으로 해석하는 로직
//!
//! 소셜 로그인 콜백에서 얻은 [`ExternalIdentity`]를 기존 계정과 연결하거나
//! 새 계정을 만들어 반환합니다. 같은 신원으로 몇 번을 호출해도
//! 계정은 하나만 존재합니다 (멱등).
//!
//! ## 동시 생성 경합 처리
//!
//! 같은 신원의 첫 로그인이 동시에 두 번 도착하면 두 요청 모두
//! "계정 없음"을 관측할 수 있습니다. 조회 후 삽입 사이의 이 경합은
//! 락 없이 낙관적 삽입으로 처리합니다: 둘 다 삽입을 시도하고,
//! `(provider, provider_id)` 유니크 인덱스에 충돌한 쪽이 재조회하여
//! 로그인 경로로 전환합니다. 삽입 전 이메일 중복 검사가 승자의 계정을
//! 먼저 발견한 경우에도 제공자 쌍이 일치하면 같은 방식으로 전환합니다.

use std::sync::Arc;

use crate::config::OAuthProvider;
use crate::domain::entities::accounts::Account;
use crate::domain::models::oauth::ExternalIdentity;
use crate::errors::{AppError, AppResult};
use crate::repositories::accounts::{AccountStore, AccountUpdate, InsertOutcome};
use crate::utils::string_utils::is_valid_string;

/// 기존 이메일과 충돌하는 소셜 첫 로그인에 대한 안내 메시지
const EMAIL_TAKEN_MESSAGE: &str = "이미 존재하는 이메일입니다. 일반 로그인을 사용해주세요.";

pub struct AccountResolver {
    store: Arc<dyn AccountStore>,
}

impl AccountResolver {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// 외부 신원에 해당하는 계정을 찾거나 생성합니다.
    ///
    /// # 에러
    ///
    /// * [`AppError::MissingProviderId`] - 제공자 식별자가 비어 있는 경우
    /// * [`AppError::MissingRequiredEmail`] - 카카오 신규 계정에 이메일이 없는 경우
    /// * [`AppError::DuplicateEmail`] - 이메일이 이미 다른 계정에서 사용 중인 경우
    pub async fn resolve(&self, identity: &ExternalIdentity) -> AppResult<Account> {
        if identity.provider_id.trim().is_empty() {
            return Err(AppError::MissingProviderId);
        }

        // 이름이 비어 있으면 제공자 식별자 기반의 자리표시 이름을 사용한다.
        // 생성과 갱신 양쪽에 같은 값을 적용해 멱등성을 지킨다.
        let effective_name = effective_name(identity);

        if let Some(existing) = self
            .store
            .find_by_provider_pair(identity.provider, &identity.provider_id)
            .await?
        {
            return self.apply_login(existing, identity, &effective_name).await;
        }

        self.create_account(identity, &effective_name).await
    }

    /// 기존 계정에 로그인을 반영합니다.
    ///
    /// 이름은 제공자의 최신 값으로 항상 덮어쓰고, 이메일은 저장된 값이
    /// 비어 있으면서 제공자가 값을 내려준 경우에만 채웁니다.
    async fn apply_login(
        &self,
        existing: Account,
        identity: &ExternalIdentity,
        effective_name: &str,
    ) -> AppResult<Account> {
        let mut update = AccountUpdate {
            name: Some(effective_name.to_string()),
            ..Default::default()
        };

        if existing.email_or_empty().is_empty() && identity.has_email() {
            update.email = identity.email_opt();
            update.profile_completed = Some(true);

            log::info!(
                "{} 계정 이메일 보완: provider_id={}",
                identity.provider.as_str(),
                identity.provider_id
            );
        }

        let id = existing
            .id_string()
            .ok_or_else(|| AppError::InternalError("계정 ID가 없습니다".to_string()))?;

        self.store
            .apply_update(&id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
    }

    async fn create_account(
        &self,
        identity: &ExternalIdentity,
        effective_name: &str,
    ) -> AppResult<Account> {
        // 카카오는 이메일 없이 계정을 만들 수 없다. 다른 제공자는 이메일 없이 생성한다.
        if identity.provider == OAuthProvider::Kakao && !identity.has_email() {
            return Err(AppError::MissingRequiredEmail);
        }

        if identity.has_email() {
            if let Some(owner) = self.store.find_by_email(identity.email.trim()).await? {
                // 경합에서 진 쪽이 승자의 계정을 이메일 조회로 먼저 발견할 수 있다.
                // 같은 제공자 쌍이면 내 계정이므로 로그인으로 전환한다.
                if owner.provider == Some(identity.provider)
                    && owner.provider_id.as_deref() == Some(identity.provider_id.as_str())
                {
                    return self.apply_login(owner, identity, effective_name).await;
                }

                return Err(AppError::DuplicateEmail(EMAIL_TAKEN_MESSAGE.to_string()));
            }
        }

        let account = Account::new_federated(
            identity.provider,
            identity.provider_id.clone(),
            identity.email_opt(),
            effective_name.to_string(),
        );

        match self.store.insert(account).await? {
            InsertOutcome::Created(created) => {
                log::info!(
                    "신규 {} 계정 생성: provider_id={}",
                    identity.provider.as_str(),
                    identity.provider_id
                );
                Ok(created)
            }

            // 경합에서 진 쪽: 같은 신원이 직전에 생성되었으므로 로그인으로 전환
            InsertOutcome::DuplicatePair => {
                let existing = self
                    .store
                    .find_by_provider_pair(identity.provider, &identity.provider_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::InternalError(
                            "중복 삽입이 감지되었으나 계정 재조회에 실패했습니다".to_string(),
                        )
                    })?;

                self.apply_login(existing, identity, effective_name).await
            }

            InsertOutcome::DuplicateEmail => {
                Err(AppError::DuplicateEmail(EMAIL_TAKEN_MESSAGE.to_string()))
            }
        }
    }
}

/// 비어 있는 이름을 제공자 식별자 앞 8자로 만든 자리표시 이름으로 대체합니다.
fn effective_name(identity: &ExternalIdentity) -> String {
    if is_valid_string(&identity.name) {
        identity.name.trim().to_string()
    } else {
        let prefix: String = identity.provider_id.chars().take(8).collect();
        format!("사용자_{}", prefix)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::repositories::accounts::account_store::in_memory::InMemoryAccountStore;

    fn google_identity() -> ExternalIdentity {
        ExternalIdentity {
            provider: OAuthProvider::Google,
            provider_id: "google-sub-1".to_string(),
            email: "user@gmail.com".to_string(),
            name: "홍길동".to_string(),
        }
    }

    fn resolver(store: Arc<InMemoryAccountStore>) -> AccountResolver {
        AccountResolver::new(store)
    }

    #[actix_web::test]
    async fn test_first_login_creates_account() {
        let store = Arc::new(InMemoryAccountStore::new());
        let resolver = resolver(store.clone());

        let account = resolver.resolve(&google_identity()).await.unwrap();

        assert_eq!(store.len(), 1);
        assert!(account.id.is_some());
        assert_eq!(account.email.as_deref(), Some("user@gmail.com"));
        assert_eq!(account.name, "홍길동");
        assert!(account.profile_completed);
        assert_eq!(account.password_hash, "");
    }

    #[actix_web::test]
    async fn test_resolve_is_idempotent() {
        let store = Arc::new(InMemoryAccountStore::new());
        let resolver = resolver(store.clone());

        let first = resolver.resolve(&google_identity()).await.unwrap();

        let mut renamed = google_identity();
        renamed.name = "새이름".to_string();
        let second = resolver.resolve(&renamed).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "새이름");
    }

    #[actix_web::test]
    async fn test_email_backfill_on_later_login() {
        let store = Arc::new(InMemoryAccountStore::new());
        let resolver = resolver(store.clone());

        let mut no_email = ExternalIdentity {
            provider: OAuthProvider::Naver,
            provider_id: "naver-1".to_string(),
            email: String::new(),
            name: "네이버사용자".to_string(),
        };

        let created = resolver.resolve(&no_email).await.unwrap();
        assert_eq!(created.email, None);
        assert!(!created.profile_completed);

        no_email.email = "user@naver.com".to_string();
        let updated = resolver.resolve(&no_email).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(updated.email.as_deref(), Some("user@naver.com"));
        assert!(updated.profile_completed);
    }

    #[actix_web::test]
    async fn test_kakao_without_email_is_rejected() {
        let store = Arc::new(InMemoryAccountStore::new());
        let resolver = resolver(store.clone());

        let identity = ExternalIdentity {
            provider: OAuthProvider::Kakao,
            provider_id: "kakao-1".to_string(),
            email: String::new(),
            name: "카카오사용자".to_string(),
        };

        assert!(matches!(
            resolver.resolve(&identity).await,
            Err(AppError::MissingRequiredEmail)
        ));
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_email_taken_by_local_account_is_rejected() {
        let store = Arc::new(InMemoryAccountStore::new());
        store.seed(Account::new_local(
            "user@gmail.com".to_string(),
            "기존사용자".to_string(),
            "$2b$04$hash".to_string(),
        ));
        let resolver = resolver(store.clone());

        let result = resolver.resolve(&google_identity()).await;

        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_empty_provider_id_is_rejected() {
        let store = Arc::new(InMemoryAccountStore::new());
        let resolver = resolver(store.clone());

        let mut identity = google_identity();
        identity.provider_id = "   ".to_string();

        assert!(matches!(
            resolver.resolve(&identity).await,
            Err(AppError::MissingProviderId)
        ));
    }

    #[actix_web::test]
    async fn test_blank_name_gets_placeholder() {
        let store = Arc::new(InMemoryAccountStore::new());
        let resolver = resolver(store.clone());

        let identity = ExternalIdentity {
            provider: OAuthProvider::Google,
            provider_id: "1234567890abc".to_string(),
            email: "user@gmail.com".to_string(),
            name: String::new(),
        };

        let account = resolver.resolve(&identity).await.unwrap();
        assert_eq!(account.name, "사용자_12345678");
    }

    /// 첫 조회에서만 "계정 없음"을 보고해 조회-삽입 경합을 재현하는 래퍼
    struct RacyStore {
        inner: Arc<InMemoryAccountStore>,
        first_lookup_misses: AtomicBool,
    }

    #[async_trait]
    impl AccountStore for RacyStore {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
            self.inner.find_by_email(email).await
        }

        async fn find_by_provider_pair(
            &self,
            provider: OAuthProvider,
            provider_id: &str,
        ) -> AppResult<Option<Account>> {
            if self.first_lookup_misses.swap(false, Ordering::SeqCst) {
                return Ok(None);
            }
            self.inner.find_by_provider_pair(provider, provider_id).await
        }

        async fn insert(&self, account: Account) -> AppResult<InsertOutcome> {
            self.inner.insert(account).await
        }

        async fn apply_update(
            &self,
            id: &str,
            update: AccountUpdate,
        ) -> AppResult<Option<Account>> {
            self.inner.apply_update(id, update).await
        }
    }

    #[actix_web::test]
    async fn test_concurrent_create_race_resolves_to_single_account() {
        let inner = Arc::new(InMemoryAccountStore::new());

        // 경쟁자가 먼저 같은 신원으로 계정을 생성해 둔 상황
        let identity = google_identity();
        inner.seed(Account::new_federated(
            identity.provider,
            identity.provider_id.clone(),
            Some(identity.email.clone()),
            "먼저생성됨".to_string(),
        ));

        let racy = Arc::new(RacyStore {
            inner: inner.clone(),
            first_lookup_misses: AtomicBool::new(true),
        });
        let resolver = AccountResolver::new(racy);

        // 조회는 놓치지만 이메일 조회가 같은 제공자 쌍의 계정을 찾으므로
        // 중복 이메일 에러가 아니라 로그인으로 전환되어야 한다
        let account = resolver.resolve(&identity).await.unwrap();

        assert_eq!(inner.len(), 1);
        assert_eq!(account.name, "홍길동");
        assert_eq!(account.provider_id.as_deref(), Some("google-sub-1"));
    }

    #[actix_web::test]
    async fn test_concurrent_create_race_without_email_resolves_via_insert() {
        let inner = Arc::new(InMemoryAccountStore::new());

        // 이메일 없는 네이버 신원: 경쟁자가 먼저 생성해 둔 상황
        let identity = ExternalIdentity {
            provider: OAuthProvider::Naver,
            provider_id: "naver-race-1".to_string(),
            email: String::new(),
            name: "네이버사용자".to_string(),
        };
        inner.seed(Account::new_federated(
            identity.provider,
            identity.provider_id.clone(),
            None,
            "먼저생성됨".to_string(),
        ));

        let racy = Arc::new(RacyStore {
            inner: inner.clone(),
            first_lookup_misses: AtomicBool::new(true),
        });
        let resolver = AccountResolver::new(racy);

        // 이메일이 없으면 삽입까지 진행하고, pair 충돌 보고로 로그인에 합류한다
        let account = resolver.resolve(&identity).await.unwrap();

        assert_eq!(inner.len(), 1);
        assert_eq!(account.name, "네이버사용자");
        assert_eq!(account.provider_id.as_deref(), Some("naver-race-1"));
    }
}
