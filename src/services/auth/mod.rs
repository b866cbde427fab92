//! 인증 서비스 모듈
//!
//! OAuth 2.0 Authorization Code 플로우의 서버 쪽 단계를 담당하는 서비스들을 제공합니다.
//!
//! # 구성
//!
//! - [`OAuthProvider`] - 프로바이더 공통 인터페이스 (`get_token`, `get_user_info`)
//! - [`GitHubOAuthService`] - GitHub 구현체
//! - [`GithubAuthLibrary`] - 프로바이더를 감싸는 파사드
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::GithubAuthLibrary;
//!
//! let auth = GithubAuthLibrary::new(client_id, client_secret);
//! let token = auth.get_token(&code, &redirect_uri).await?;
//! let user = auth.get_user_info(&token).await?;
//! ```

pub mod oauth_provider;
pub mod github_oauth_service;
pub mod github_auth_library;

pub use oauth_provider::*;
pub use github_oauth_service::*;
pub use github_auth_library::*;
