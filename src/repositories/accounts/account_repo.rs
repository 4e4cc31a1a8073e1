//! 계정 리포지토리 구현
//!
//! MongoDB `accounts` 컬렉션에 대한 데이터 액세스와 Redis 캐싱을 담당합니다.
//! `#[repository]` 매크로를 통해 싱글톤으로 관리되며,
//! [`AccountStore`] trait의 프로덕션 구현체입니다.
//!
//! ## 캐시 키 규칙
//!
//! - `account:{id}` - id 기반 단건 캐시 (`cache_key` 헬퍼)
//! - `account:email:{email}` - 이메일 조회 캐시
//! - `account:pair:{provider}:{provider_id}` - 제공자 쌍 조회 캐시
//!
//! 모든 캐시는 10분 TTL로 저장되며, 갱신 시 관련 키를 함께 무효화합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    config::OAuthProvider,
    core::registry::Repository,
    db::Database,
    domain::entities::accounts::Account,
    errors::{AppError, AppResult},
};

use super::account_store::{AccountStore, AccountUpdate, InsertOutcome};

/// 이메일 유니크 인덱스 이름. duplicate key 에러 분류에 사용됩니다.
const EMAIL_INDEX: &str = "email_unique";

/// 제공자 쌍 유니크 인덱스 이름
const PAIR_INDEX: &str = "provider_pair_unique";

#[repository(name = "account", collection = "accounts")]
pub struct AccountRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl AccountRepository {
    fn email_cache_key(email: &str) -> String {
        format!("account:email:{}", email)
    }

    fn pair_cache_key(provider: OAuthProvider, provider_id: &str) -> String {
        format!("account:pair:{}:{}", provider.as_str(), provider_id)
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Account>(&cache_key).await {
            return Ok(Some(cached));
        }

        let account = self
            .collection::<Account>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref account) = account {
            let _ = self.redis.set_with_expiry(&cache_key, account, 600).await;
        }

        Ok(account)
    }

    /// 신규 로컬 계정을 저장합니다.
    ///
    /// 이메일 중복은 사전 조회와 유니크 인덱스 양쪽에서 걸러지며,
    /// 어느 쪽이든 같은 에러 메시지로 응답합니다.
    pub async fn create_local(&self, account: Account) -> AppResult<Account> {
        if let Some(email) = &account.email {
            if self.find_by_email(email).await?.is_some() {
                return Err(AppError::DuplicateEmail(
                    "이미 존재하는 이메일입니다.".to_string(),
                ));
            }
        }

        match self.insert(account).await? {
            InsertOutcome::Created(created) => Ok(created),
            // 사전 조회와 삽입 사이의 경합. 인덱스가 최종 심판자다.
            InsertOutcome::DuplicateEmail | InsertOutcome::DuplicatePair => Err(
                AppError::DuplicateEmail("이미 존재하는 이메일입니다.".to_string()),
            ),
        }
    }

    /// 컬렉션의 유니크 인덱스를 생성합니다. 서버 기동 시 1회 호출됩니다.
    ///
    /// 두 인덱스 모두 sparse로 선언하여 필드가 없는 문서
    /// (이메일 없는 연합 계정, provider가 없는 로컬 계정)를 허용합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<Account>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name(EMAIL_INDEX.to_string())
                    .build(),
            )
            .build();

        let pair_index = IndexModel::builder()
            .keys(doc! { "provider": 1, "provider_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name(PAIR_INDEX.to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([email_index, pair_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// duplicate key 에러(E11000)를 충돌한 인덱스 기준으로 분류합니다.
    fn classify_duplicate(e: &mongodb::error::Error) -> Option<InsertOutcome> {
        let ErrorKind::Write(WriteFailure::WriteError(write_error)) = &*e.kind else {
            return None;
        };

        if write_error.code != 11000 {
            return None;
        }

        if write_error.message.contains(PAIR_INDEX) {
            Some(InsertOutcome::DuplicatePair)
        } else if write_error.message.contains(EMAIL_INDEX) {
            Some(InsertOutcome::DuplicateEmail)
        } else {
            // 알 수 없는 인덱스 충돌은 이메일 충돌과 동일하게 처리
            Some(InsertOutcome::DuplicateEmail)
        }
    }

    async fn invalidate_account_caches(&self, account: &Account) {
        let mut keys = Vec::new();

        if let Some(id) = account.id_string() {
            keys.push(self.cache_key(&id));
        }
        if let Some(email) = &account.email {
            keys.push(Self::email_cache_key(email));
        }
        if let (Some(provider), Some(provider_id)) = (account.provider, &account.provider_id) {
            keys.push(Self::pair_cache_key(provider, provider_id));
        }

        let _ = self.redis.del_multiple(&keys).await;
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let cache_key = Self::email_cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<Account>(&cache_key).await {
            return Ok(Some(cached));
        }

        let account = self
            .collection::<Account>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref account) = account {
            let _ = self.redis.set_with_expiry(&cache_key, account, 600).await;
        }

        Ok(account)
    }

    async fn find_by_provider_pair(
        &self,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> AppResult<Option<Account>> {
        let cache_key = Self::pair_cache_key(provider, provider_id);

        if let Ok(Some(cached)) = self.redis.get::<Account>(&cache_key).await {
            return Ok(Some(cached));
        }

        let account = self
            .collection::<Account>()
            .find_one(doc! { "provider": provider.as_str(), "provider_id": provider_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref account) = account {
            let _ = self.redis.set_with_expiry(&cache_key, account, 600).await;
        }

        Ok(account)
    }

    async fn insert(&self, mut account: Account) -> AppResult<InsertOutcome> {
        let result = self.collection::<Account>().insert_one(&account).await;

        match result {
            Ok(inserted) => {
                account.id = inserted.inserted_id.as_object_id();

                let _ = self.invalidate_collection_cache(None).await;

                Ok(InsertOutcome::Created(account))
            }
            Err(e) => match Self::classify_duplicate(&e) {
                Some(outcome) => Ok(outcome),
                None => Err(AppError::DatabaseError(e.to_string())),
            },
        }
    }

    async fn apply_update(&self, id: &str, update: AccountUpdate) -> AppResult<Option<Account>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self
            .collection::<Account>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update.into_document() },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref account) = updated {
            self.invalidate_account_caches(account).await;
        }

        Ok(updated)
    }
}
