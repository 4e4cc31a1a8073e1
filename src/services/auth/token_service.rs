//! JWT 토큰 발급 및 검증 서비스
//!
//! HS256 대칭키 서명으로 액세스 토큰을 발급하고 검증합니다.
//! 클레임은 `sub`, `iat`, `exp` 세 가지로 고정됩니다.
//! subject는 계정 이메일이며, 이메일 없는 연합 계정은
//! `{provider}_{provider_id}` 합성 문자열을 사용합니다.
//!
//! 검증 API는 두 가지 형태를 제공합니다:
//!
//! - [`TokenService::verify_token`] - 실패 원인을 구분해야 하는 곳 (핸들러 등)
//! - [`TokenService::subject_if_valid`] - 실패를 삼키고 진행해야 하는 곳 (미들웨어)

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;

use crate::{
    config::JwtConfig,
    domain::entities::accounts::Account,
    domain::models::auth::TokenClaims,
    errors::AppError,
};

#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 계정에 대한 액세스 토큰을 발급합니다.
    ///
    /// subject는 이메일, 이메일이 없으면 `{provider}_{provider_id}`입니다.
    /// 둘 다 만들 수 없는 계정(이메일도 제공자 쌍도 없음)은 에러를 반환합니다.
    pub fn issue(&self, account: &Account) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: account
                .token_subject()
                .ok_or_else(|| AppError::InternalError("토큰 subject를 만들 수 없습니다".to_string()))?,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// 토큰이 유효하면 subject를, 아니면 `None`을 반환합니다.
    ///
    /// 서명 불일치, 만료, 형식 오류를 구분하지 않으며 절대 에러를 내지 않습니다.
    pub fn subject_if_valid(&self, token: &str) -> Option<String> {
        self.verify_token(token).ok().map(|claims| claims.sub)
    }

    /// `Authorization` 헤더에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn account_with_id() -> Account {
        let mut account = Account::new_local(
            "user@example.com".to_string(),
            "홍길동".to_string(),
            "$2b$04$hash".to_string(),
        );
        account.id = Some(ObjectId::new());
        account
    }

    fn service() -> std::sync::Arc<TokenService> {
        TokenService::instance()
    }

    #[test]
    fn test_issued_token_is_valid() {
        let service = service();
        let account = account_with_id();

        let token = service.issue(&account).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "user@example.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(
            service.subject_if_valid(&token),
            Some("user@example.com".to_string())
        );
    }

    #[test]
    fn test_emailless_federated_account_gets_composite_subject() {
        let service = service();
        let account = Account::new_federated(
            crate::config::OAuthProvider::Naver,
            "naver-77".to_string(),
            None,
            "네이버사용자".to_string(),
        );

        let token = service.issue(&account).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "naver_naver-77");
    }

    #[test]
    fn test_issue_without_subject_fails() {
        let service = service();
        // 이메일도 제공자 쌍도 없는 비정상 문서
        let mut account = Account::new_local(
            "user@example.com".to_string(),
            "홍길동".to_string(),
            "$2b$04$hash".to_string(),
        );
        account.email = None;

        assert!(service.issue(&account).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let now = Utc::now();

        // 과거 시점에 만료된 클레임을 직접 서명
        let claims = TokenClaims {
            sub: "user@example.com".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(JwtConfig::secret().as_ref()),
        )
        .unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
        assert_eq!(service.subject_if_valid(&token), None);
    }

    #[test]
    fn test_token_signed_with_wrong_key_is_rejected() {
        let service = service();
        let now = Utc::now();

        let claims = TokenClaims {
            sub: "user@example.com".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .unwrap();

        assert!(service.verify_token(&token).is_err());
        assert_eq!(service.subject_if_valid(&token), None);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = service();

        assert_eq!(service.subject_if_valid("not.a.jwt"), None);
        assert_eq!(service.subject_if_valid(""), None);
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc").is_err());
    }
}
