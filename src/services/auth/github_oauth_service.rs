//! # GitHub OAuth 2.0 클라이언트
//!
//! GitHub OAuth App의 Authorization Code 플로우 중 서버 쪽 두 단계를 수행합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌─────────────┐              ┌─────────────────┐              ┌─────────────────┐
//! │   브라우저    │              │   호출자 (서버)    │              │     GitHub      │
//! └─────────────┘              └─────────────────┘              └─────────────────┘
//!        │ 1. 동의 화면에서 승인           │                                 │
//!        ├──────────────────────────────────────────────────────────────►│
//!        │ 2. redirect_uri?code=...       │                                 │
//!        ├──────────────────────────────►│                                 │
//!        │                                │ 3. POST /login/oauth/access_token│
//!        │                                ├────────────────────────────────►│
//!        │                                │◄──── { access_token, ... } ─────┤
//!        │                                │ 4. GET /user (Bearer)            │
//!        │                                ├────────────────────────────────►│
//!        │                                │◄──── { login, id, ... } ────────┤
//! ```
//!
//! 이 모듈은 3, 4단계만 담당합니다. state 검증, 토큰 저장, 갱신은 하지 않습니다.
//!
//! ## 에러 처리
//!
//! 네트워크 실패, 2xx 이외의 상태 코드, 잘못된 JSON은 모두 `reqwest::Error` 그대로
//! [`AppError::Http`]로 전달됩니다. 재시도하지 않습니다.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::domain::models::oauth::{access_token_of, TokenResponse, UserInfo};
use crate::errors::{AppError, AppResult};
use crate::services::auth::OAuthProvider;

/// GitHub 토큰 교환 엔드포인트
pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// GitHub 인증 사용자 조회 엔드포인트
pub const GITHUB_USER_URL: &str = "https://api.github.com/user";

/// GitHub API는 User-Agent 헤더가 없는 요청을 거부합니다
pub const GITHUB_USER_AGENT: &str = concat!("github-oauth-client/", env!("CARGO_PKG_VERSION"));

/// GitHub OAuth 서비스
///
/// 생성 시 받은 Client ID / Client Secret 외에는 상태가 없습니다.
/// 내부 `reqwest::Client`는 참조 카운트 기반이므로 `clone`이 가볍고,
/// 여러 태스크에서 동시에 호출해도 서로 영향을 주지 않습니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// use github_oauth_client::services::auth::{GitHubOAuthService, OAuthProvider};
///
/// let github = GitHubOAuthService::new(client_id, client_secret);
///
/// let token = github.get_token(&code, "https://example.com/auth/github/callback").await?;
/// let user = github.get_user_info(&token).await?;
///
/// log::info!("GitHub 로그인: {}", user["login"]);
/// ```
#[derive(Clone)]
pub struct GitHubOAuthService {
    client_id: String,
    client_secret: String,
    token_url: String,
    user_url: String,
    http: reqwest::Client,
}

impl GitHubOAuthService {
    /// GitHub에서 발급받은 OAuth App 자격 증명으로 서비스를 생성합니다.
    ///
    /// 자격 증명의 형식은 검증하지 않습니다. 잘못된 값이면 토큰 교환 시점에
    /// GitHub이 거부합니다.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: GITHUB_TOKEN_URL.to_string(),
            user_url: GITHUB_USER_URL.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// 시뮬레이션된 엔드포인트를 가리키는 서비스 (테스트 전용)
    #[cfg(test)]
    pub(crate) fn with_endpoints(
        client_id: &str,
        client_secret: &str,
        token_url: String,
        user_url: String,
    ) -> Self {
        Self {
            token_url,
            user_url,
            ..Self::new(client_id, client_secret)
        }
    }
}

impl std::fmt::Debug for GitHubOAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubOAuthService")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("user_url", &self.user_url)
            .finish()
    }
}

#[async_trait]
impl OAuthProvider for GitHubOAuthService {
    fn name(&self) -> &'static str {
        "github"
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST https://github.com/login/oauth/access_token
    ///   ?client_id=...&client_secret=...&code=...&redirect_uri=...
    /// Accept: application/json
    /// ```
    ///
    /// 본문 없이 쿼리 파라미터만 보냅니다. `Accept` 헤더가 없으면 GitHub은
    /// form-urlencoded로 응답하므로 반드시 포함합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenResponse)` - GitHub 응답 JSON 원본
    /// * `Err(AppError::ValidationError)` - `code` 또는 `redirect_uri`가 빈 문자열 (요청을 보내지 않음)
    /// * `Err(AppError::Http)` - 전송 실패, 2xx 이외의 상태, JSON 파싱 실패
    ///
    /// GitHub은 만료된 코드에 대해서도 `200 {"error": "bad_verification_code"}`를
    /// 돌려줍니다. 이 응답 역시 그대로 반환됩니다.
    async fn get_token(&self, code: &str, redirect_uri: &str) -> AppResult<TokenResponse> {
        if code.is_empty() {
            return Err(AppError::ValidationError(
                "authorization code must not be empty".to_string(),
            ));
        }
        if redirect_uri.is_empty() {
            return Err(AppError::ValidationError(
                "redirect_uri must not be empty".to_string(),
            ));
        }

        log::debug!("GitHub 토큰 교환 요청: POST {}", self.token_url);

        let response = self
            .http
            .post(&self.token_url)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        log::debug!("GitHub 토큰 교환 응답: {}", response.status());

        let token = response
            .error_for_status()?
            .json::<TokenResponse>()
            .await?;

        Ok(token)
    }

    /// Access Token으로 GitHub 사용자 정보 조회
    ///
    /// # API 호출 형식
    ///
    /// ```text
    /// GET https://api.github.com/user
    /// Authorization: Bearer ACCESS_TOKEN
    /// User-Agent: github-oauth-client/<version>
    /// ```
    ///
    /// # 반환값
    ///
    /// * `Ok(UserInfo)` - GitHub 응답 JSON 원본
    /// * `Err(AppError::ValidationError)` - `token`에 문자열 `access_token`이 없음 (요청을 보내지 않음)
    /// * `Err(AppError::Http)` - 401 (만료/폐기된 토큰), 403 등 모든 전송 계층 실패
    async fn get_user_info(&self, token: &TokenResponse) -> AppResult<UserInfo> {
        let access_token = access_token_of(token).ok_or_else(|| {
            AppError::ValidationError("token response has no access_token".to_string())
        })?;

        log::debug!("GitHub 사용자 정보 요청: GET {}", self.user_url);

        let response = self
            .http
            .get(&self.user_url)
            .bearer_auth(access_token)
            .header(USER_AGENT, GITHUB_USER_AGENT)
            .send()
            .await?;

        log::debug!("GitHub 사용자 정보 응답: {}", response.status());

        let user = response
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(user)
    }
}
