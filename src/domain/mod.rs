//! # Domain Layer Module
//!
//! 이 크레이트가 다루는 값들은 모두 요청/응답 사이에서만 존재하는 일시적인 값입니다.
//! 저장하거나 생명주기를 관리하는 엔티티는 없습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs    - 콜백 서비스의 요청/응답 계약
//! └── Models  - OAuth 프로바이더가 돌려주는 값 (토큰, 사용자 정보)
//! ```
//!
//! | 값 | 출처 | 비고 |
//! |----|------|------|
//! | Authorization Code | GitHub 동의 화면 → 호출자 | 일회용, 짧은 수명 |
//! | Redirect URI | 호출자 | GitHub에 등록된 URI와 일치해야 함 |
//! | [`TokenResponse`] | 토큰 엔드포인트 | JSON 원본, 검증하지 않음 |
//! | [`UserInfo`] | 사용자 정보 엔드포인트 | JSON 원본, 검증하지 않음 |

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
