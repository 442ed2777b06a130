//! Shared types for the coffee counter service
//!
//! Order and job models, the unified error system and small utilities used
//! by the server and by anything that talks to it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Job, Order, OrderEntry, OrderState, OrderStats, OrderSubmission};
