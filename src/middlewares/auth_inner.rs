//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::AuthenticatedAccount;
use crate::middlewares::auth_middleware::is_bypass_path;
use crate::repositories::accounts::{AccountRepository, AccountStore};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // 공개 경로는 토큰 처리 없이 통과
            if !is_bypass_path(req.path()) {
                if let Some(account) = authenticate_request(&req).await {
                    log::debug!("인증 성공: account_id={}", account.account_id);
                    req.extensions_mut().insert(account);
                }
                // 토큰이 없거나 유효하지 않으면 익명으로 진행
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 Bearer 토큰으로 계정을 조회합니다.
///
/// subject는 일반적으로 이메일이며 이메일로 계정을 찾습니다.
/// 이메일 없는 연합 계정의 합성 subject는 이메일 조회에 걸리지 않으므로
/// 익명으로 진행됩니다. 어떤 단계에서 실패해도 에러 대신 `None`을 반환합니다.
async fn authenticate_request(req: &ServiceRequest) -> Option<AuthenticatedAccount> {
    let auth_header = req.headers().get("Authorization")?.to_str().ok()?;

    let token_service = TokenService::instance();
    let token = token_service.extract_bearer_token(auth_header).ok()?;
    let subject = token_service.subject_if_valid(token)?;

    let account = match AccountRepository::instance().find_by_email(&subject).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            log::debug!("토큰 subject의 계정이 존재하지 않음: subject={}", subject);
            return None;
        }
        Err(e) => {
            log::warn!("인증 중 계정 조회 실패: {}", e);
            return None;
        }
    };

    AuthenticatedAccount::from_account(&account)
}
