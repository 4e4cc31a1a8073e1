//! 인증된 계정 컨텍스트와 요청 추출기
//!
//! 인증 미들웨어가 JWT 검증에 성공하면 요청 extensions에
//! [`AuthenticatedAccount`]를 저장하고, 핸들러는 추출기를 통해 꺼내 씁니다.
//! 미들웨어 자체는 요청을 거부하지 않으며, 401 응답은 보호된 핸들러의
//! 추출기 실패에서만 발생합니다.

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::entities::accounts::{Account, Role};

/// 요청 컨텍스트에 저장되는 인증된 계정 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedAccount {
    /// 계정 ObjectId의 hex 표현
    pub account_id: String,

    /// 이메일 (연합 계정은 없을 수 있음)
    pub email: Option<String>,

    pub name: String,

    pub role: Role,
}

impl AuthenticatedAccount {
    pub fn from_account(account: &Account) -> Option<Self> {
        Some(Self {
            account_id: account.id_string()?,
            email: account.email.clone(),
            name: account.name.clone(),
            role: account.role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl FromRequest for AuthenticatedAccount {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedAccount>() {
            Some(account) => ready(Ok(account.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}

/// 인증이 선택적인 엔드포인트를 위한 추출기
///
/// 인증 컨텍스트가 없어도 요청을 거부하지 않고 `None`을 전달합니다.
#[derive(Debug, Clone)]
pub struct OptionalAccount(pub Option<AuthenticatedAccount>);

impl FromRequest for OptionalAccount {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let account = req.extensions().get::<AuthenticatedAccount>().cloned();
        ready(Ok(OptionalAccount(account)))
    }
}
