//! Debug HTTP Handlers
//!
//! 배포 환경에서 OAuth 설정 상태를 점검하기 위한 진단 엔드포인트입니다.
//!
//! 시크릿 값 자체는 절대 노출하지 않고 설정 여부(boolean)만 보여줍니다.
//!
//! # Endpoints
//!
//! - `GET /api/debug/oauth-config`: 제공자별 OAuth 설정 요약
//! - `GET /api/debug/oauth2-clients`: 제공자별 클라이언트 등록 상태

use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::config::OAuthProvider;
use crate::errors::AppError;

/// OAuth 설정 요약 핸들러
///
/// # Endpoint
/// `GET /api/debug/oauth-config`
#[get("/oauth-config")]
pub async fn oauth_config() -> Result<HttpResponse, AppError> {
    let mut providers = serde_json::Map::new();

    for provider in OAuthProvider::all() {
        providers.insert(
            provider.as_str().to_string(),
            json!({
                "clientId": provider.client_id(),
                "hasClientSecret": provider.has_client_secret(),
                "redirectUri": provider.redirect_uri(),
                "authorizationUri": provider.auth_uri(),
                "tokenUri": provider.token_uri(),
                "userInfoUri": provider.user_info_uri(),
                "scope": provider.scope(),
            }),
        );
    }

    Ok(HttpResponse::Ok().json(json!({ "providers": providers })))
}

/// OAuth 클라이언트 등록 상태 핸들러
///
/// 클라이언트 ID가 비어 있는 제공자를 빠르게 찾기 위한 요약 뷰입니다.
///
/// # Endpoint
/// `GET /api/debug/oauth2-clients`
#[get("/oauth2-clients")]
pub async fn oauth2_clients() -> Result<HttpResponse, AppError> {
    let clients: Vec<_> = OAuthProvider::all()
        .into_iter()
        .map(|provider| {
            json!({
                "provider": provider.as_str(),
                "registered": !provider.client_id().is_empty(),
                "hasClientSecret": provider.has_client_secret(),
                "redirectUri": provider.redirect_uri(),
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({ "clients": clients })))
}
