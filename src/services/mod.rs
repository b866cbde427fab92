//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - OAuth 2.0 Authorization Code 교환 (GitHub)
//! - 인증된 사용자 정보 조회
//! - 프로바이더 교체가 가능한 파사드
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::GithubAuthLibrary;
//!
//! let auth = GithubAuthLibrary::new(client_id, client_secret);
//! ```

pub mod auth;
