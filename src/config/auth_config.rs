//! # Authentication Configuration Module
//!
//! GitHub OAuth App 자격 증명과 콜백 URI를 환경 변수에서 읽어옵니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GITHUB_CLIENT_ID="Iv1.0123456789abcdef"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! export GITHUB_REDIRECT_URI="http://localhost:8080/api/v1/auth/github/callback"
//! ```
//!
//! 라이브러리 타입([`GithubAuthLibrary`](crate::services::auth::GithubAuthLibrary) 등)은
//! 환경 변수를 직접 읽지 않습니다. 이 모듈은 콜백 서비스 바이너리에서만 사용됩니다.

use std::env;

use crate::errors::{AppError, AppResult};

/// GitHub OAuth App 설정
///
/// ## GitHub OAuth App 등록 가이드
///
/// 1. GitHub > Settings > Developer settings > OAuth Apps 이동
/// 2. New OAuth App 생성
/// 3. Authorization callback URL에 `GITHUB_REDIRECT_URI`와 같은 값 입력
///
/// `client_secret`은 로그에 출력하지 마세요.
pub struct GitHubOAuthConfig;

impl GitHubOAuthConfig {
    pub fn client_id() -> AppResult<String> {
        required_var("GITHUB_CLIENT_ID")
    }

    pub fn client_secret() -> AppResult<String> {
        required_var("GITHUB_CLIENT_SECRET")
    }

    /// GitHub OAuth App에 등록된 콜백 URI
    ///
    /// 토큰 교환 시 `redirect_uri` 파라미터로 그대로 전달되며,
    /// 등록된 값과 다르면 GitHub이 `redirect_uri_mismatch`를 반환합니다.
    pub fn redirect_uri() -> AppResult<String> {
        required_var("GITHUB_REDIRECT_URI")
    }
}

/// 비어 있지 않은 환경 변수 값을 읽습니다.
fn required_var(key: &str) -> AppResult<String> {
    non_empty(key, env::var(key).ok())
}

/// 공백뿐인 값은 누락으로 취급합니다.
fn non_empty(key: &str, value: Option<String>) -> AppResult<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_var_missing() {
        let result = required_var("GITHUB_OAUTH_CLIENT_TEST_SURELY_UNSET");

        match result {
            Err(AppError::ConfigError(msg)) => {
                assert_eq!(msg, "GITHUB_OAUTH_CLIENT_TEST_SURELY_UNSET must be set");
            }
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_empty_keeps_value() {
        let value = non_empty("GITHUB_CLIENT_ID", Some("Iv1.abc".to_string())).unwrap();
        assert_eq!(value, "Iv1.abc");
    }

    #[test]
    fn test_non_empty_rejects_blank_and_missing() {
        for value in [None, Some(String::new()), Some("   ".to_string())] {
            let err = non_empty("GITHUB_REDIRECT_URI", value).unwrap_err();
            assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("GITHUB_REDIRECT_URI")));
        }
    }
}
