//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (GitHub 동의 화면에서 리다이렉트)
//! └─────────────────────┬───────────────────────┘
//!                       │ GET /api/v1/auth/github/callback?code=...
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                 ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   GithubAuthLibrary → OAuthProvider  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   GitHub (github.com, api.github.com)
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 JSON 응답으로 변환됩니다.

pub mod auth;
