//! 계정 관리 비즈니스 로직 서비스
//!
//! 로컬 회원가입/로그인과 내 프로필 조회/수정을 담당합니다.
//! `#[service]` 매크로를 통해 싱글톤으로 관리되며 AccountRepository가 주입됩니다.
//!
//! ## 보안 특징
//!
//! - bcrypt 해싱 (환경별 cost 적용)
//! - 로그인 실패 시 이메일 존재 여부를 구분하지 않는 단일 에러 메시지
//! - 연합 계정의 패스워드 변경 시도 무시

use std::sync::Arc;

use bcrypt::{hash, verify};
use singleton_macro::service;

use crate::{
    config::PasswordConfig,
    domain::{
        dto::accounts::{AccountResponse, UpdateProfileRequest},
        dto::auth::{LocalLoginRequest, SignupRequest, SignupResponse},
        entities::accounts::Account,
    },
    errors::{AppError, AppResult},
    repositories::accounts::{AccountRepository, AccountStore, AccountUpdate},
    utils::string_utils::clean_optional_string,
};

/// 이메일 존재 여부가 드러나지 않도록 로그인 실패에 공통으로 쓰는 메시지
const LOGIN_FAILED_MESSAGE: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

#[service(name = "account")]
pub struct AccountService {
    /// 계정 데이터 액세스 리포지토리 (자동 주입)
    account_repo: Arc<AccountRepository>,
}

impl AccountService {
    /// 새 로컬 계정을 생성합니다.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<SignupResponse> {
        let start_time = std::time::Instant::now();

        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let account = Account::new_local(request.email, request.name, password_hash);
        let created = self.account_repo.create_local(account).await?;

        log::info!(
            "로컬 계정 생성 완료: {} ({:?})",
            created.email_or_empty(),
            start_time.elapsed()
        );

        Ok(SignupResponse {
            message: "회원가입이 완료되었습니다".to_string(),
            email: created.email_or_empty().to_string(),
        })
    }

    /// 이메일/패스워드로 로그인을 검증하고 계정을 반환합니다.
    ///
    /// 연합 계정은 패스워드가 없으므로 로그인할 수 없으며,
    /// 존재하지 않는 이메일과 동일한 에러로 응답합니다.
    pub async fn login(&self, request: &LocalLoginRequest) -> AppResult<Account> {
        let account = self
            .account_repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(LOGIN_FAILED_MESSAGE.to_string()))?;

        if !account.can_authenticate_with_password() {
            log::warn!("패스워드 로그인 불가 계정에 대한 로그인 시도: {}", request.email);
            return Err(AppError::AuthenticationError(
                LOGIN_FAILED_MESSAGE.to_string(),
            ));
        }

        let password_matches = verify(&request.password, &account.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !password_matches {
            return Err(AppError::AuthenticationError(
                LOGIN_FAILED_MESSAGE.to_string(),
            ));
        }

        Ok(account)
    }

    /// 내 프로필을 조회합니다.
    pub async fn get_profile(&self, account_id: &str) -> AppResult<AccountResponse> {
        let account = self
            .account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))?;

        Ok(AccountResponse::from(account))
    }

    /// 내 프로필을 수정합니다.
    ///
    /// 연합 계정의 `password` 필드는 조용히 무시됩니다.
    /// 수정할 내용이 없으면 현재 프로필을 그대로 반환합니다.
    pub async fn update_profile(
        &self,
        account_id: &str,
        request: UpdateProfileRequest,
    ) -> AppResult<AccountResponse> {
        let account = self
            .account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))?;

        let mut update = AccountUpdate {
            name: clean_optional_string(request.name),
            ..Default::default()
        };

        if let Some(password) = request.password {
            if account.is_federated() {
                log::info!(
                    "연합 계정의 비밀번호 변경 요청 무시: account_id={}",
                    account_id
                );
            } else {
                let password_hash = hash(&password, PasswordConfig::bcrypt_cost())
                    .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
                update.password_hash = Some(password_hash);
            }
        }

        if update.is_empty() {
            return Ok(AccountResponse::from(account));
        }

        let updated = self
            .account_repo
            .apply_update(account_id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))?;

        Ok(AccountResponse::from(updated))
    }
}
