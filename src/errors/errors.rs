//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! OAuth 클라이언트와 콜백 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 전송 계층 에러(`reqwest::Error`)는 변환하지 않고 [`AppError::Http`]에
//! 그대로 담겨 호출자에게 전달됩니다. 상태 코드, 디코딩 실패 여부 등은
//! 원본 에러에서 직접 확인할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! match library.get_token(&code, &redirect_uri).await {
//!     Ok(token) => { /* ... */ }
//!     Err(AppError::Http(e)) if e.status().is_some() => {
//!         log::warn!("GitHub 응답 상태: {:?}", e.status());
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// OAuth 프로바이더가 인증을 거부함 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 필수 설정값 누락 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// HTTP 전송 계층 에러 (502 Bad Gateway)
    ///
    /// 네트워크 실패, 2xx 이외의 응답 상태, JSON 파싱 실패가 모두 여기에 해당합니다.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::Http(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
