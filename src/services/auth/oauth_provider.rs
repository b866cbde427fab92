//! OAuth 프로바이더 공통 인터페이스
//!
//! 프로바이더마다 이 trait을 구현하고, [`GithubAuthLibrary`](super::GithubAuthLibrary)는
//! `Arc<dyn OAuthProvider>`로 구현체를 보관합니다. 새 프로바이더를 추가해도
//! 파사드를 사용하는 코드는 바뀌지 않습니다.

use async_trait::async_trait;

use crate::domain::models::oauth::{TokenResponse, UserInfo};
use crate::errors::AppResult;

/// Authorization Code Grant의 두 단계를 수행하는 프로바이더
///
/// 구현체는 응답 본문을 가공하지 않고 그대로 반환해야 하며,
/// 전송 계층 에러를 재시도하거나 삼키지 않아야 합니다.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// 로그 및 진단용 프로바이더 이름 (예: `"github"`)
    fn name(&self) -> &'static str;

    /// Authorization Code를 액세스 토큰으로 교환합니다.
    async fn get_token(&self, code: &str, redirect_uri: &str) -> AppResult<TokenResponse>;

    /// 토큰 응답의 `access_token`으로 사용자 정보를 조회합니다.
    async fn get_user_info(&self, token: &TokenResponse) -> AppResult<UserInfo>;
}
