//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResponse`] - application error type and API envelope
//! - [`logger`] - tracing setup
//! - [`validation`] - input validation helpers
//! - [`time`] / [`id`] - timestamp and ID generation

pub mod error;
pub mod id;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse, ok, ok_with_message};
pub use result::AppResult;
