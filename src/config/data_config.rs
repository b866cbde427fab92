//! 서버 설정 관리 모듈

use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// 서버 바인딩 설정
///
/// # Environment Variables
///
/// - `HOST`: 바인딩 주소 (기본값: `127.0.0.1`)
/// - `PORT`: 바인딩 포트 (기본값: `8080`, 숫자가 아니면 기본값 사용)
pub struct ServerConfig;

impl ServerConfig {
    pub fn host() -> String {
        host_or_default(env::var("HOST").ok())
    }

    pub fn port() -> u16 {
        port_or_default(env::var("PORT").ok())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

fn host_or_default(value: Option<String>) -> String {
    value
        .filter(|host| !host.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

fn port_or_default(value: Option<String>) -> u16 {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::warn!("PORT 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}
