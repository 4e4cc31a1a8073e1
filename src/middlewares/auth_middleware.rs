//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 계정 정보를 추출합니다.
//!
//! 이 미들웨어는 요청을 거부하지 않습니다. 토큰이 없거나 유효하지 않으면
//! 익명 상태로 다음 서비스에 전달하고, 보호가 필요한 핸들러는
//! [`AuthenticatedAccount`](crate::domain::models::auth::AuthenticatedAccount)
//! 추출기에서 401을 반환합니다. 공개 경로는 토큰 처리 자체를 건너뜁니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 토큰 처리를 건너뛰는 공개 경로 접두사
const BYPASS_PREFIXES: [&str; 4] = ["/oauth2/", "/login/oauth2/", "/api/auth/", "/api/debug/"];

/// 토큰 처리를 건너뛰는 공개 경로 (완전 일치)
const BYPASS_EXACT: [&str; 4] = ["/", "/error", "/favicon.ico", "/health"];

/// 요청 경로가 토큰 처리를 건너뛰는 공개 경로인지 판정합니다.
pub(crate) fn is_bypass_path(path: &str) -> bool {
    BYPASS_EXACT.contains(&path) || BYPASS_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// JWT 인증 미들웨어
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oauth_paths_are_bypassed() {
        assert!(is_bypass_path("/oauth2/authorization/google"));
        assert!(is_bypass_path("/login/oauth2/code/kakao"));
    }

    #[test]
    fn public_api_paths_are_bypassed() {
        assert!(is_bypass_path("/api/auth/login"));
        assert!(is_bypass_path("/api/auth/signup"));
        assert!(is_bypass_path("/api/debug/oauth-config"));
    }

    #[test]
    fn exact_public_paths_are_bypassed() {
        assert!(is_bypass_path("/"));
        assert!(is_bypass_path("/error"));
        assert!(is_bypass_path("/favicon.ico"));
        assert!(is_bypass_path("/health"));
    }

    #[test]
    fn protected_paths_are_not_bypassed() {
        assert!(!is_bypass_path("/api/user/me"));
        assert!(!is_bypass_path("/api/authx"));
        assert!(!is_bypass_path("/errors"));
    }

    #[actix_web::test]
    async fn expired_token_on_bypass_path_is_ignored() {
        use actix_web::{test, web, App, HttpResponse};
        use chrono::{Duration, Utc};
        use jsonwebtoken::{encode, EncodingKey, Header};

        use crate::config::JwtConfig;
        use crate::domain::models::auth::TokenClaims;

        let app = test::init_service(
            App::new().wrap(AuthMiddleware::new()).route(
                "/api/auth/login",
                web::post().to(|| async { HttpResponse::Ok().finish() }),
            ),
        )
        .await;

        // 만료된 토큰을 직접 서명해 헤더에 싣는다
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "user@example.com".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(JwtConfig::secret().as_ref()),
        )
        .unwrap();

        // 공개 경로는 헤더의 토큰 상태와 무관하게 그대로 통과한다
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("Authorization", format!("Bearer {}", expired)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
    }
}
