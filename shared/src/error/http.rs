//! HTTP status for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::OrderNotFound => StatusCode::NOT_FOUND,
            // Delivery already happened, the order is gone for good
            Self::OrderAlreadyRetrieved => StatusCode::GONE,
            // Brewing still in progress, caller retries later
            Self::OrderNotReady => StatusCode::SERVICE_UNAVAILABLE,
            Self::OrderIdExists => StatusCode::CONFLICT,
            Self::TimeoutError => StatusCode::REQUEST_TIMEOUT,
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
