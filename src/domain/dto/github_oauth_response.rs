//! GitHub OAuth 응답 DTO 모듈

use serde::Serialize;

use crate::domain::models::oauth::{TokenResponse, UserInfo};

/// GitHub 로그인 콜백 응답
///
/// 토큰 교환 결과와 사용자 정보를 가공 없이 함께 내려줍니다.
#[derive(Debug, Serialize)]
pub struct GitHubLoginResponse {
    /// 토큰 엔드포인트 응답 원본
    pub token: TokenResponse,
    /// `GET /user` 응답 원본
    pub user: UserInfo,
}
