//! 에러 타입 모듈
//!
//! - [`errors`] - `AppError`, `AppResult`

pub mod errors;

pub use errors::*;
