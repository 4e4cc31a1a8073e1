//! 제공자별 사용자 정보 응답 정규화
//!
//! Google, Kakao, Naver가 내려주는 서로 다른 JSON 구조를
//! [`ExternalIdentity`] 하나로 정규화합니다.
//!
//! ## 제공자별 응답 구조
//!
//! - **Google**: 평탄한 구조 (`sub`, `email`, `name`)
//! - **Kakao**: 숫자 `id` + `kakao_account.email` + `kakao_account.profile.nickname` 중첩 구조
//! - **Naver**: 전체 정보가 `response` 필드 아래에 중첩
//!
//! ## 결측값 처리 원칙
//!
//! - 사용자 식별자가 없으면 로그인 전체가 실패해야 합니다 (네이버는 예외적으로
//!   `naver_unknown_id` 폴백을 사용)
//! - 이메일 결측은 빈 문자열로 정규화하고, 치명 여부는 계정 생성 시점에 판단합니다
//! - 이름 결측은 제공자별 기본 표시 이름으로 대체합니다

use serde_json::Value;

use crate::config::OAuthProvider;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::trim_string;

use super::external_identity::ExternalIdentity;

/// 카카오 프로필에 닉네임이 없을 때 사용하는 기본 표시 이름
const KAKAO_DEFAULT_NAME: &str = "카카오사용자";

/// 네이버 프로필에 이름/닉네임이 없을 때 사용하는 기본 표시 이름
const NAVER_DEFAULT_NAME: &str = "네이버사용자";

/// 네이버 응답에 id가 없을 때 사용하는 폴백 식별자
const NAVER_UNKNOWN_ID: &str = "naver_unknown_id";

/// 제공자 원본 응답을 [`ExternalIdentity`]로 정규화합니다.
///
/// # 에러
///
/// * [`AppError::EmptyPayload`] - 응답 본문이 비어 있는 경우
/// * [`AppError::IdentityExtraction`] - 필수 필드 추출에 실패한 경우
pub fn normalize(provider: OAuthProvider, raw: &Value) -> AppResult<ExternalIdentity> {
    if is_empty_payload(raw) {
        return Err(AppError::EmptyPayload(provider.as_str().to_string()));
    }

    let result = match provider {
        OAuthProvider::Google => normalize_google(raw),
        OAuthProvider::Kakao => normalize_kakao(raw),
        OAuthProvider::Naver => Ok(normalize_naver(raw)),
    };

    result.map_err(|message| AppError::IdentityExtraction {
        provider: provider.as_str().to_string(),
        message,
    })
}

fn is_empty_payload(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// 문자열 또는 숫자 값을 문자열로 정규화합니다.
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn normalize_google(raw: &Value) -> Result<ExternalIdentity, String> {
    let provider_id = raw
        .get("sub")
        .and_then(value_to_string)
        .ok_or_else(|| "missing 'sub' in user info response".to_string())?;

    let email = raw
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Ok(ExternalIdentity {
        provider: OAuthProvider::Google,
        provider_id,
        email,
        name,
    })
}

fn normalize_kakao(raw: &Value) -> Result<ExternalIdentity, String> {
    // 카카오의 id는 최상위 숫자 필드이며, 없으면 로그인을 진행할 수 없다.
    let provider_id = raw
        .get("id")
        .and_then(value_to_string)
        .ok_or_else(|| "missing 'id' in user info response".to_string())?;

    let kakao_account = raw.get("kakao_account");

    let email = kakao_account
        .and_then(|acc| acc.get("email"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let name = kakao_account
        .and_then(|acc| acc.get("profile"))
        .and_then(|profile| profile.get("nickname"))
        .and_then(Value::as_str)
        .filter(|nickname| !nickname.is_empty())
        .unwrap_or(KAKAO_DEFAULT_NAME)
        .to_string();

    Ok(ExternalIdentity {
        provider: OAuthProvider::Kakao,
        provider_id,
        email,
        name,
    })
}

/// 네이버 정규화는 어떤 결측에도 실패하지 않고 폴백 값으로 채웁니다.
fn normalize_naver(raw: &Value) -> ExternalIdentity {
    // 전체 정보가 "response" 봉투 안에 들어 있다. 봉투가 없으면 전부 폴백.
    let response = raw.get("response").unwrap_or(&Value::Null);

    let provider_id = response
        .get("id")
        .and_then(value_to_string)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| NAVER_UNKNOWN_ID.to_string());

    let name_field = response
        .get("name")
        .and_then(Value::as_str)
        .map(trim_string)
        .filter(|name| !name.is_empty());

    let nickname_field = response
        .get("nickname")
        .and_then(Value::as_str)
        .map(trim_string)
        .filter(|nickname| !nickname.is_empty());

    let name = name_field
        .or(nickname_field)
        .unwrap_or_else(|| NAVER_DEFAULT_NAME.to_string());

    let email = response
        .get("email")
        .and_then(Value::as_str)
        .map(trim_string)
        .unwrap_or_default();

    ExternalIdentity {
        provider: OAuthProvider::Naver,
        provider_id,
        email,
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_payload_is_rejected() {
        for provider in OAuthProvider::all() {
            assert!(matches!(
                normalize(provider, &Value::Null),
                Err(AppError::EmptyPayload(_))
            ));
            assert!(matches!(
                normalize(provider, &json!({})),
                Err(AppError::EmptyPayload(_))
            ));
        }
    }

    #[test]
    fn test_google_normalization() {
        let raw = json!({
            "sub": "109876543210",
            "email": "user@gmail.com",
            "name": "홍길동"
        });

        let identity = normalize(OAuthProvider::Google, &raw).unwrap();
        assert_eq!(identity.provider, OAuthProvider::Google);
        assert_eq!(identity.provider_id, "109876543210");
        assert_eq!(identity.email, "user@gmail.com");
        assert_eq!(identity.name, "홍길동");
    }

    #[test]
    fn test_google_missing_sub_fails() {
        let raw = json!({ "email": "user@gmail.com" });

        assert!(matches!(
            normalize(OAuthProvider::Google, &raw),
            Err(AppError::IdentityExtraction { .. })
        ));
    }

    #[test]
    fn test_kakao_numeric_id_is_stringified() {
        let raw = json!({
            "id": 1234567890,
            "kakao_account": {
                "email": "user@kakao.com",
                "profile": { "nickname": "길동이" }
            }
        });

        let identity = normalize(OAuthProvider::Kakao, &raw).unwrap();
        assert_eq!(identity.provider_id, "1234567890");
        assert_eq!(identity.email, "user@kakao.com");
        assert_eq!(identity.name, "길동이");
    }

    #[test]
    fn test_kakao_missing_profile_falls_back_to_default_name() {
        let raw = json!({ "id": 42 });

        let identity = normalize(OAuthProvider::Kakao, &raw).unwrap();
        assert_eq!(identity.name, "카카오사용자");
        assert_eq!(identity.email, "");
        assert!(!identity.has_email());
    }

    #[test]
    fn test_kakao_missing_id_fails() {
        let raw = json!({
            "kakao_account": { "email": "user@kakao.com" }
        });

        assert!(matches!(
            normalize(OAuthProvider::Kakao, &raw),
            Err(AppError::IdentityExtraction { .. })
        ));
    }

    #[test]
    fn test_naver_envelope_extraction() {
        let raw = json!({
            "resultcode": "00",
            "message": "success",
            "response": {
                "id": "77",
                "email": "a@b.com"
            }
        });

        let identity = normalize(OAuthProvider::Naver, &raw).unwrap();
        assert_eq!(identity.provider_id, "77");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.name, "네이버사용자");
    }

    #[test]
    fn test_naver_missing_envelope_uses_fallbacks() {
        let raw = json!({ "resultcode": "00" });

        let identity = normalize(OAuthProvider::Naver, &raw).unwrap();
        assert_eq!(identity.provider_id, "naver_unknown_id");
        assert_eq!(identity.email, "");
        assert_eq!(identity.name, "네이버사용자");
    }

    #[test]
    fn test_naver_name_falls_back_to_nickname() {
        let raw = json!({
            "response": {
                "id": "abc",
                "name": "   ",
                "nickname": " 별명 "
            }
        });

        let identity = normalize(OAuthProvider::Naver, &raw).unwrap();
        assert_eq!(identity.name, "별명");
    }

    #[test]
    fn test_naver_email_is_trimmed() {
        let raw = json!({
            "response": {
                "id": "abc",
                "email": "  spaced@naver.com  "
            }
        });

        let identity = normalize(OAuthProvider::Naver, &raw).unwrap();
        assert_eq!(identity.email, "spaced@naver.com");
    }
}
