//! Error system of the coffee counter service
//!
//! - [`ErrorCode`]: numeric codes shared with clients
//! - [`ErrorCategory`]: grouping by code range
//! - [`AppError`]: code, message and details, convertible into a response
//! - [`ApiResponse`]: the JSON error body
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderNotReady).with_detail("order_id", "abc");
//! let body = ApiResponse::error(&err);
//! assert_eq!(body.code, 4003);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
