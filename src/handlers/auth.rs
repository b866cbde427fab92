//! Authentication HTTP Handlers
//!
//! GitHub OAuth 동의 화면에서 리다이렉트되어 돌아오는 콜백을 처리합니다.
//!
//! # Endpoint
//!
//! - `GET /api/v1/auth/github/callback?code={code}`
use actix_web::{get, web, HttpResponse};
use serde_json::Value;
use validator::Validate;

use crate::domain::{GitHubLoginResponse, OAuthCallbackQuery};
use crate::errors::errors::AppError;
use crate::services::auth::GithubAuthLibrary;

/// 콜백 핸들러가 공유하는 상태
///
/// `redirect_uri`는 인가 요청 때 사용한 값과 같아야 하므로 설정에서 한 번 읽어 고정합니다.
#[derive(Debug, Clone)]
pub struct GitHubCallbackState {
    pub auth: GithubAuthLibrary,
    pub redirect_uri: String,
}

/// GitHub OAuth 콜백 처리 핸들러
///
/// Authorization Code를 토큰으로 교환하고, 그 토큰으로 사용자 정보를 조회한 뒤
/// 두 응답을 가공 없이 함께 반환합니다.
///
/// # Endpoint
/// `GET /auth/github/callback?code={code}`
///
/// # Errors
///
/// * `401` - 사용자가 동의를 거부함 (`error` 파라미터)
/// * `400` - `code` 누락, 또는 토큰 응답에 `access_token`이 없음
/// * `502` - GitHub 통신 실패 또는 2xx 이외의 응답
#[get("/github/callback")]
pub async fn github_oauth_callback(
    state: web::Data<GitHubCallbackState>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query.error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("GitHub OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token = state.auth
        .get_token(&query.code, &state.redirect_uri)
        .await
        .inspect_err(|e| log::error!("GitHub 토큰 교환 실패: {}", e))?;

    let user = state.auth
        .get_user_info(&token)
        .await
        .inspect_err(|e| log::error!("GitHub 사용자 정보 조회 실패: {}", e))?;

    log::info!(
        "GitHub 사용자 인증 완료: {}",
        user.get("login").and_then(Value::as_str).unwrap_or("<unknown>")
    );

    Ok(HttpResponse::Ok().json(GitHubLoginResponse { token, user }))
}
