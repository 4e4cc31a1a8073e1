//! Account HTTP Handlers
//!
//! 인증된 계정의 프로필 조회/수정 엔드포인트를 처리합니다.
//!
//! # Endpoints
//!
//! - `GET /api/user/me`: 내 프로필 조회
//! - `PUT /api/user/me`: 내 프로필 수정
//!
//! 두 엔드포인트 모두 [`AuthenticatedAccount`] 추출기를 사용하므로
//! 유효한 Bearer 토큰이 없으면 401로 응답합니다.

use actix_web::{get, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::accounts::UpdateProfileRequest;
use crate::domain::models::auth::AuthenticatedAccount;
use crate::errors::AppError;
use crate::services::accounts::AccountService;

/// 내 프로필 조회 핸들러
///
/// # Endpoint
/// `GET /api/user/me`
#[get("/me")]
pub async fn get_me(account: AuthenticatedAccount) -> Result<HttpResponse, AppError> {
    let account_service = AccountService::instance();
    let profile = account_service.get_profile(&account.account_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 내 프로필 수정 핸들러
///
/// 이름과 패스워드를 수정할 수 있습니다. 연합 계정의 패스워드 필드는 무시됩니다.
///
/// # Endpoint
/// `PUT /api/user/me`
#[put("/me")]
pub async fn update_me(
    account: AuthenticatedAccount,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account_service = AccountService::instance();
    let profile = account_service
        .update_profile(&account.account_id, payload.into_inner())
        .await?;

    log::info!("프로필 수정 완료: account_id={}", account.account_id);

    Ok(HttpResponse::Ok().json(profile))
}
