//! 统一错误处理
//!
//! The error surface is shared with clients through `shared::error`:
//!
//! | Range | Category | Example |
//! |------|------|------|
//! | 0xxx | General | E0002 validation failed |
//! | 4xxx | Order | E4003 order not ready |
//! | 9xxx | System | E9002 database error |
//!
//! ```ignore
//! Err(AppError::validation("count must be at least 1"))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
