use serde::Deserialize;
use validator::Validate;

/// GitHub OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의 화면에서 승인하면 `code`가, 거부하면 `error`가 전달됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_query_with_code_is_valid() {
        let query = OAuthCallbackQuery {
            code: "abc123".to_string(),
            error: None,
            error_description: None,
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_callback_query_without_code_is_invalid() {
        let query: OAuthCallbackQuery =
            serde_json::from_str(r#"{"error": "access_denied"}"#).unwrap();
        assert!(query.code.is_empty());
        assert_eq!(query.error.as_deref(), Some("access_denied"));
        assert!(query.validate().is_err());
    }
}
