//! Authentication HTTP Handlers
//!
//! 로컬 인증(이메일/패스워드)과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - `POST /api/auth/signup`: 로컬 회원가입
//! - `POST /api/auth/login`: 이메일/패스워드 로그인

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::auth::{LocalLoginRequest, LoginResponse, SignupRequest};
use crate::errors::AppError;
use crate::services::accounts::AccountService;
use crate::services::auth::TokenService;

/// 로컬 회원가입 핸들러
///
/// 이메일, 패스워드, 이름으로 새 계정을 생성합니다.
///
/// # Endpoint
/// `POST /api/auth/signup`
#[post("/signup")]
pub async fn signup(payload: web::Json<SignupRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account_service = AccountService::instance();
    let response = account_service.signup(payload.into_inner()).await?;

    log::info!("회원가입 성공: {}", response.email);

    Ok(HttpResponse::Ok().json(response))
}

/// 로컬 로그인 핸들러
///
/// 이메일과 패스워드를 검증하고 JWT 토큰을 발급합니다.
/// 실패 응답은 이메일 존재 여부를 구분하지 않습니다.
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn local_login(payload: web::Json<LocalLoginRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account_service = AccountService::instance();
    let token_service = TokenService::instance();

    let account = account_service.login(&payload).await?;
    let token = token_service.issue(&account)?;

    log::info!(
        "로컬 로그인 성공: {}, account_id={}",
        payload.email,
        account.id_string().unwrap_or_default()
    );

    Ok(HttpResponse::Ok().json(LoginResponse::new(token, &account)))
}
