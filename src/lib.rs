//! GitHub OAuth 2.0 클라이언트
//!
//! GitHub OAuth App의 Authorization Code 플로우를 위한 최소한의 클라이언트입니다.
//! Authorization Code를 액세스 토큰으로 교환하고, 그 토큰으로 인증된 사용자의
//! 프로필을 조회합니다.
//!
//! # Features
//!
//! - **토큰 교환**: `POST https://github.com/login/oauth/access_token`
//! - **사용자 정보**: `GET https://api.github.com/user`
//! - **파사드**: 프로바이더를 교체해도 호출 코드가 바뀌지 않는 간접 계층
//! - **콜백 서비스**: 위 두 단계를 묶어 실행하는 Actix-web 바이너리
//!
//! 토큰 저장, 갱신, state(CSRF) 검증, 재시도, 캐싱은 하지 않습니다.
//! 응답 본문은 가공 없이 `serde_json::Value`로 반환되고,
//! 전송 계층 에러는 `reqwest::Error` 그대로 전달됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │  GithubAuthLibrary  │ ← 파사드
//! └─────────────────────┘
//!           │ Arc<dyn OAuthProvider>
//!           ▼
//! ┌─────────────────────┐
//! │ GitHubOAuthService  │ ← reqwest
//! └─────────────────────┘
//!           │
//!           ▼
//!   github.com / api.github.com
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use github_oauth_client::services::auth::GithubAuthLibrary;
//!
//! let auth = GithubAuthLibrary::new(client_id, client_secret);
//!
//! let token = auth.get_token(&code, "https://example.com/auth/github/callback").await?;
//! let user = auth.get_user_info(&token).await?;
//! ```

pub mod config;
pub mod domain;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
