//! GitHub 인증 파사드
//!
//! 호출 코드가 구체적인 프로바이더 구현에 묶이지 않도록 하는 간접 계층입니다.
//! 검증, 에러 처리, 로깅을 추가하지 않고 두 연산을 그대로 위임합니다.

use std::sync::Arc;

use crate::domain::models::oauth::{TokenResponse, UserInfo};
use crate::errors::AppResult;
use crate::services::auth::{GitHubOAuthService, OAuthProvider};

/// 인증 파사드
///
/// # 사용 예제
///
/// ```rust,ignore
/// use github_oauth_client::services::auth::GithubAuthLibrary;
///
/// let auth = GithubAuthLibrary::new(client_id, client_secret);
///
/// let token = auth.get_token(&code, &redirect_uri).await?;
/// let user = auth.get_user_info(&token).await?;
/// ```
///
/// 다른 프로바이더로 교체할 때는 [`GithubAuthLibrary::with_provider`]를 사용합니다.
#[derive(Clone)]
pub struct GithubAuthLibrary {
    oauth_service: Arc<dyn OAuthProvider>,
}

impl GithubAuthLibrary {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::with_provider(Arc::new(GitHubOAuthService::new(client_id, client_secret)))
    }

    pub fn with_provider(oauth_service: Arc<dyn OAuthProvider>) -> Self {
        Self { oauth_service }
    }

    pub fn provider_name(&self) -> &'static str {
        self.oauth_service.name()
    }

    pub async fn get_token(&self, code: &str, redirect_uri: &str) -> AppResult<TokenResponse> {
        self.oauth_service.get_token(code, redirect_uri).await
    }

    pub async fn get_user_info(&self, token: &TokenResponse) -> AppResult<UserInfo> {
        self.oauth_service.get_user_info(token).await
    }
}

impl std::fmt::Debug for GithubAuthLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubAuthLibrary")
            .field("provider", &self.oauth_service.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::services::auth::github_oauth_service::tests::{
        service_for, token_query, TOKEN_PATH, USER_PATH,
    };
    use crate::services::auth::GITHUB_USER_AGENT;
    use async_trait::async_trait;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::sync::Mutex;

    /// 호출 인자를 기록하는 프로바이더
    #[derive(Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl OAuthProvider for RecordingProvider {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn get_token(&self, code: &str, redirect_uri: &str) -> AppResult<TokenResponse> {
            self.calls.lock().unwrap().push(format!("get_token({code}, {redirect_uri})"));
            Ok(json!({"access_token": format!("token-for-{code}")}))
        }

        async fn get_user_info(&self, token: &TokenResponse) -> AppResult<UserInfo> {
            self.calls.lock().unwrap().push(format!("get_user_info({token})"));
            Err(AppError::ValidationError("forwarded unchanged".to_string()))
        }
    }

    #[test]
    fn test_new_uses_github_provider() {
        let library = GithubAuthLibrary::new("id", "secret");
        assert_eq!(library.provider_name(), "github");
        assert!(format!("{:?}", library).contains("github"));
    }

    #[actix_web::test]
    async fn test_forwards_arguments_and_results_unchanged() {
        let provider = Arc::new(RecordingProvider::default());
        let library = GithubAuthLibrary::with_provider(provider.clone());

        let token = library.get_token("c0de", "http://cb").await.unwrap();
        assert_eq!(token, json!({"access_token": "token-for-c0de"}));

        let err = library.get_user_info(&token).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(ref msg) if msg == "forwarded unchanged"));

        let calls = provider.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                "get_token(c0de, http://cb)".to_string(),
                r#"get_user_info({"access_token":"token-for-c0de"})"#.to_string(),
            ]
        );
        assert_eq!(library.provider_name(), "recording");
    }

    #[actix_web::test]
    async fn test_facade_requests_match_direct_provider_requests() {
        let mut server = Server::new_async().await;
        let token_body = json!({"access_token": "T", "token_type": "bearer", "scope": ""});
        let user_body = json!({"login": "octocat", "id": 1});

        // 직접 호출 1회 + 파사드 호출 1회가 같은 매처에 정확히 걸려야 함
        let token_mock = server
            .mock("POST", TOKEN_PATH)
            .match_query(token_query("code-1", "http://localhost/cb"))
            .match_header("accept", "application/json")
            .with_status(200)
            .with_body(token_body.to_string())
            .expect(2)
            .create_async()
            .await;
        let user_mock = server
            .mock("GET", USER_PATH)
            .match_header("authorization", "Bearer T")
            .match_header("user-agent", GITHUB_USER_AGENT)
            .with_status(200)
            .with_body(user_body.to_string())
            .expect(2)
            .create_async()
            .await;

        let direct = service_for(&server);
        let library = GithubAuthLibrary::with_provider(Arc::new(service_for(&server)));

        let direct_token = direct.get_token("code-1", "http://localhost/cb").await.unwrap();
        let facade_token = library.get_token("code-1", "http://localhost/cb").await.unwrap();
        assert_eq!(direct_token, facade_token);
        assert_eq!(facade_token, token_body);

        let direct_user = direct.get_user_info(&direct_token).await.unwrap();
        let facade_user = library.get_user_info(&facade_token).await.unwrap();
        assert_eq!(direct_user, facade_user);
        assert_eq!(facade_user, user_body);

        token_mock.assert_async().await;
        user_mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_facade_propagates_transport_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", TOKEN_PATH)
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let library = GithubAuthLibrary::with_provider(Arc::new(service_for(&server)));
        let err = library.get_token("code", "http://cb").await.unwrap_err();

        assert!(matches!(err, AppError::Http(ref e) if e.status().map(|s| s.as_u16()) == Some(401)));
    }
}
