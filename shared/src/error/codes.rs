//! Numeric error codes of the coffee counter service
//!
//! - 0xxx: request problems
//! - 4xxx: order outcomes
//! - 9xxx: system failures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code shared with clients, serialised as a bare number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    /// Malformed or out-of-range input
    ValidationFailed = 2,

    /// No order with the given id
    OrderNotFound = 4001,
    /// Order was already handed over to the customer
    OrderAlreadyRetrieved = 4002,
    /// Not every cup of the order has been brewed yet
    OrderNotReady = 4003,
    /// An order with the requested id already exists
    OrderIdExists = 4004,

    InternalError = 9001,
    DatabaseError = 9002,
    /// Handler did not finish within the request timeout
    TimeoutError = 9004,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default client-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::OrderNotFound => "Order not found!",
            ErrorCode::OrderAlreadyRetrieved => "Order already delivered",
            ErrorCode::OrderNotReady => "Order not ready",
            ErrorCode::OrderIdExists => "Order id already in use",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Request timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not one of the known codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            2 => ErrorCode::ValidationFailed,
            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::OrderAlreadyRetrieved,
            4003 => ErrorCode::OrderNotReady,
            4004 => ErrorCode::OrderIdExists,
            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            9004 => ErrorCode::TimeoutError,
            _ => return Err(InvalidErrorCode(value)),
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
