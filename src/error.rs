//! Error types and handling for the `Raincheck` analysis engine

use thiserror::Error;

/// Main error type for the `Raincheck` library
///
/// Only two classes of failure can escape an analysis call: bad input
/// (`InvalidDate`, `Validation`) and internal faults (`Internal`).
/// `DataUnavailable` is produced by data sources and recovered at the engine
/// boundary via the synthetic fallback.
#[derive(Error, Debug)]
pub enum RaincheckError {
    /// Malformed or unparseable event date
    #[error("Invalid date: {message}")]
    InvalidDate { message: String },

    /// Input validation errors (coordinates out of range, bad thresholds)
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A data source cannot supply a series (archive down, credentials absent)
    #[error("Data unavailable: {message}")]
    DataUnavailable { message: String },

    /// Unexpected internal fault during analysis
    #[error("Analysis failed: {message}")]
    Internal { message: String },
}

impl RaincheckError {
    /// Create a new invalid-date error
    pub fn invalid_date<S: Into<String>>(message: S) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new data-unavailable error
    pub fn data_unavailable<S: Into<String>>(message: S) -> Self {
        Self::DataUnavailable {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error was caused by the caller's input rather than an
    /// internal fault
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RaincheckError::InvalidDate { .. } | RaincheckError::Validation { .. }
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RaincheckError::InvalidDate { message } => {
                format!("Invalid event date: {message}. Use ISO-8601, e.g. 2025-07-04.")
            }
            RaincheckError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            RaincheckError::DataUnavailable { .. } => {
                "Historical weather data is currently unavailable.".to_string()
            }
            RaincheckError::Internal { .. } => {
                "Weather analysis failed due to an internal error.".to_string()
            }
        }
    }
}

impl From<anyhow::Error> for RaincheckError {
    fn from(err: anyhow::Error) -> Self {
        RaincheckError::Internal {
            message: err.to_string(),
        }
    }
}
