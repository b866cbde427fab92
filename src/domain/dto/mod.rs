//! # Data Transfer Objects
//!
//! 콜백 서비스의 HTTP 요청/응답 계약을 정의합니다.
//!
//! - [`auth_request`] - GitHub 리다이렉트 쿼리
//! - [`github_oauth_response`] - 콜백 처리 결과

pub mod auth_request;
pub mod github_oauth_response;

pub use auth_request::*;
pub use github_oauth_response::*;
