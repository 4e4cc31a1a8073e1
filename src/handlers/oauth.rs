//! OAuth HTTP Handlers
//!
//! 소셜 로그인(Google, Kakao, Naver)의 시작과 콜백 엔드포인트를 처리합니다.
//!
//! # Endpoints
//!
//! - `GET /oauth2/authorization/{provider}`: 제공자 인증 페이지로 리다이렉트
//! - `GET /login/oauth2/code/{provider}`: 제공자 콜백 처리 후 프론트엔드로 리다이렉트
//!
//! 콜백은 브라우저 리다이렉트 플로우의 일부이므로 실패해도 JSON 에러를
//! 반환하지 않고 프론트엔드 로그인 페이지로 리다이렉트합니다.

use actix_web::{get, web, HttpResponse};

use crate::config::OAuthProvider;
use crate::domain::dto::auth::OAuthCallbackQuery;
use crate::errors::AppError;
use crate::services::oauth::OAuthLoginService;

/// 소셜 로그인 시작 핸들러
///
/// 지원하지 않는 제공자 이름은 400으로 응답합니다.
///
/// # Endpoint
/// `GET /oauth2/authorization/{provider}`
#[get("/oauth2/authorization/{provider}")]
pub async fn authorize(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let provider = OAuthProvider::from_str(&path)?;

    let oauth_service = OAuthLoginService::instance();
    let authorization_url = oauth_service.get_authorization_url(provider)?;

    log::info!("{} 소셜 로그인 시작", provider.as_str());

    Ok(redirect_to(&authorization_url))
}

/// 소셜 로그인 콜백 핸들러
///
/// 제공자가 에러를 보냈거나 code가 없으면 실패 리다이렉트,
/// 로그인 플로우가 성공하면 토큰을 담은 성공 리다이렉트로 응답합니다.
///
/// # Endpoint
/// `GET /login/oauth2/code/{provider}?code={code}&state={state}`
#[get("/login/oauth2/code/{provider}")]
pub async fn callback(
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let oauth_service = OAuthLoginService::instance();

    let provider = match OAuthProvider::from_str(&path) {
        Ok(provider) => provider,
        Err(e) => {
            log::warn!("지원하지 않는 제공자 콜백: {}", path.as_str());
            return Ok(redirect_to(&oauth_service.build_failure_redirect(&e.to_string())));
        }
    };

    // 사용자가 거부했거나 제공자 측 에러
    if let Some(error) = &query.error {
        let message = query
            .error_description
            .as_deref()
            .unwrap_or("소셜 로그인이 취소되었거나 실패했습니다");
        log::warn!("{} OAuth 에러: {} - {}", provider.as_str(), error, message);
        return Ok(redirect_to(&oauth_service.build_failure_redirect(message)));
    }

    let code = match query.code.as_deref() {
        Some(code) if !code.is_empty() => code,
        _ => {
            log::warn!("{} 콜백에 인가 코드 없음", provider.as_str());
            return Ok(redirect_to(
                &oauth_service.build_failure_redirect("인가 코드가 전달되지 않았습니다"),
            ));
        }
    };
    let state = query.state.as_deref().unwrap_or_default();

    match oauth_service.login(provider, code, state).await {
        Ok((token, account)) => {
            let url = oauth_service.build_success_redirect(&token, &account, provider);
            Ok(redirect_to(&url))
        }
        Err(e) => {
            log::error!("{} 소셜 로그인 실패: {}", provider.as_str(), e);
            Ok(redirect_to(&oauth_service.build_failure_redirect(&e.to_string())))
        }
    }
}

/// 캐시 방지 헤더를 포함한 302 응답을 만듭니다.
///
/// 토큰이 URL에 실리므로 브라우저와 중간 캐시에 남지 않아야 합니다.
fn redirect_to(url: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header(("Location", url))
        .append_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .append_header(("Pragma", "no-cache"))
        .append_header(("Expires", "0"))
        .finish()
}
