//! 인증 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::accounts::{Account, Role};

/// 로컬 로그인 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl LoginResponse {
    pub fn new(token: String, account: &Account) -> Self {
        Self {
            token,
            email: account.email_or_empty().to_string(),
            name: account.name.clone(),
            role: account.role,
        }
    }
}

/// 회원가입 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub email: String,
}
