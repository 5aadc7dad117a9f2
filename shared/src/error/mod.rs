//! Unified error system for the attendance service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Attendance errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ApiResponse, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotAuthenticated);
//!
//! // Create an error with custom message and details
//! let err = AppError::validation("month must be YYYY-MM").with_detail("param", "month");
//!
//! // Convert to API response
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
