//! # OAuth Domain Models Module
//!
//! OAuth 2.0 인증 플로우에서 오가는 값들을 정의하는 모듈입니다.
//!
//! 토큰 응답과 사용자 정보는 프로바이더가 보낸 JSON을 **그대로** 전달합니다.
//! 필드 이름 변경, 필터링, 타입 변환을 하지 않기 때문에
//! 구조체가 아닌 [`serde_json::Value`] 별칭으로 표현합니다.
//!
//! ```text
//! POST /login/oauth/access_token  ──►  TokenResponse (JSON 원본)
//!                                         │ access_token
//!                                         ▼
//! GET  /user                      ──►  UserInfo      (JSON 원본)
//! ```

use serde_json::Value;

/// 토큰 교환 응답
///
/// GitHub은 보통 `access_token`, `token_type`, `scope`를 반환하지만
/// 이 타입은 어떤 필드도 보장하지 않습니다.
pub type TokenResponse = Value;

/// 인증된 사용자의 프로필 (GitHub `GET /user` 응답 원본)
pub type UserInfo = Value;

/// 토큰 응답에서 액세스 토큰 문자열을 꺼냅니다.
///
/// `token`이 객체가 아니거나 `access_token`이 문자열이 아니면 `None`을 반환합니다.
///
/// # Examples
///
/// ```rust
/// use github_oauth_client::domain::models::oauth::access_token_of;
/// use serde_json::json;
///
/// assert_eq!(access_token_of(&json!({"access_token": "gho_abc"})), Some("gho_abc"));
/// assert_eq!(access_token_of(&json!({"error": "bad_verification_code"})), None);
/// ```
pub fn access_token_of(token: &TokenResponse) -> Option<&str> {
    token.get("access_token").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_access_token_present() {
        let token = json!({"access_token": "T", "token_type": "bearer", "scope": ""});
        assert_eq!(access_token_of(&token), Some("T"));
    }

    #[test]
    fn test_access_token_missing_or_wrong_type() {
        assert_eq!(access_token_of(&json!({})), None);
        assert_eq!(access_token_of(&json!({"access_token": 42})), None);
        assert_eq!(access_token_of(&json!({"access_token": null})), None);
        assert_eq!(access_token_of(&json!("T")), None);
        assert_eq!(access_token_of(&json!([{"access_token": "T"}])), None);
    }

    #[test]
    fn test_empty_access_token_is_still_returned() {
        // 빈 문자열 판정은 호출하는 쪽의 몫
        assert_eq!(access_token_of(&json!({"access_token": ""})), Some(""));
    }
}
