//! GitHub OAuth 콜백 서비스
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 GitHub 인증 파사드를 초기화합니다.
//! GitHub 동의 화면에서 돌아온 Authorization Code를 토큰과 사용자 정보로 교환합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{debug, error, info};
use github_oauth_client::config::{GitHubOAuthConfig, ServerConfig};
use github_oauth_client::errors::AppResult;
use github_oauth_client::handlers::auth::GitHubCallbackState;
use github_oauth_client::routes::configure_all_routes;
use github_oauth_client::services::auth::GithubAuthLibrary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    init_logging();
    load_env_file();

    info!("🚀 GitHub OAuth 콜백 서비스 시작중...");

    let state = match build_callback_state() {
        Ok(state) => state,
        Err(e) => {
            error!("GitHub OAuth 설정 로드 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 인증 프로바이더 초기화 완료: {}", state.auth.provider_name());

    start_http_server(state).await
}

/// 환경 변수에서 GitHub 자격 증명을 읽어 콜백 상태를 구성합니다
///
/// # Errors
///
/// * `AppError::ConfigError` - `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET`,
///   `GITHUB_REDIRECT_URI` 중 하나라도 누락된 경우
fn build_callback_state() -> AppResult<GitHubCallbackState> {
    let auth = GithubAuthLibrary::new(
        GitHubOAuthConfig::client_id()?,
        GitHubOAuthConfig::client_secret()?,
    );

    Ok(GitHubCallbackState {
        auth,
        redirect_uri: GitHubOAuthConfig::redirect_uri()?,
    })
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: GitHubCallbackState) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 OAuth callback: {}", state.redirect_uri);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 작업 디렉터리의 `.env` 파일을 로드합니다
///
/// 이미 설정된 프로세스 환경 변수가 `.env` 값보다 우선합니다.
/// 파일이 없으면 프로세스 환경 변수만 사용합니다.
fn load_env_file() {
    match dotenv() {
        Ok(path) => info!("{} 로드 됨", path.display()),
        Err(e) => debug!(".env 파일을 사용하지 않음: {}", e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// # 토큰 교환 요청/응답 상태까지 확인
/// RUST_LOG=github_oauth_client=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 콜백은 브라우저 리다이렉트로 들어오지만, 로컬 프론트엔드가
/// 헬스체크나 콜백을 직접 호출하는 경우를 위해 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
