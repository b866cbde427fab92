//! 외부 시스템 통합 모델
//!
//! - [`oauth`] - OAuth 토큰 응답 및 사용자 정보

pub mod oauth;

pub use oauth::*;
