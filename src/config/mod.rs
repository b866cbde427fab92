//! # Configuration Module
//!
//! 콜백 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩 설정
//! - [`auth_config`] - GitHub OAuth 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export GITHUB_CLIENT_ID="your-client-id"
//! export GITHUB_CLIENT_SECRET="your-client-secret"
//! export GITHUB_REDIRECT_URI="http://localhost:8080/api/v1/auth/github/callback"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export RUST_LOG="info,actix_web=debug"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
