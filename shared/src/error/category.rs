//! Error categories

use super::codes::ErrorCode;

/// Grouping of error codes by range.
///
/// Only `System` errors are incidents. `General` and `Order` outcomes are
/// ordinary answers to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 0xxx
    General,
    /// 4xxx
    Order,
    /// everything else
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Order,
            _ => Self::System,
        }
    }

    pub fn is_incident(&self) -> bool {
        matches!(self, Self::System)
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
