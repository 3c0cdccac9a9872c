//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency code parsing
//! - `ValidationError`: Structural failures that abort a whole batch

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use trade_validation::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: '{input}' is not a YYYY-MM-DD date ({reason})")]
    ParseError {
        /// The rejected input
        input: String,
        /// Parser diagnostic
        reason: String,
    },
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use trade_validation::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Code is well formed but not an active ISO 4217 currency.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Code is not three upper-case ASCII letters.
    #[error("Currency parse error: {0}")]
    ParseError(String),
}

/// Structural batch errors.
///
/// These abort the whole request. Rule violations are never reported
/// through this type; they are collected in a
/// [`ValidationReport`](crate::report::ValidationReport).
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Request body is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Request body is valid JSON but not an array.
    #[error("Expected a JSON array of trades, found {found}")]
    NotABatch {
        /// JSON kind that was found instead
        found: &'static str,
    },

    /// A trade lacks a field (or carries an ill-typed one) that an
    /// applicable rule needs.
    #[error("Trade {trade_number} is malformed: {reason}")]
    MalformedTrade {
        /// 1-based position of the trade in the batch
        trade_number: usize,
        /// Decoder diagnostic
        reason: String,
    },
}

impl ValidationError {
    /// Create a malformed trade error
    pub fn malformed(trade_number: usize, reason: impl Into<String>) -> Self {
        Self::MalformedTrade {
            trade_number,
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidJson(_) => "invalid_json",
            ValidationError::NotABatch { .. } => "not_a_batch",
            ValidationError::MalformedTrade { .. } => "malformed_trade",
        }
    }
}
