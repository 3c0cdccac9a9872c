//! Date, currency and error types.
//!
//! This module provides:
//! - `time`: `Date` and the day-granularity predicates used by the rules
//! - `currency`: ISO 4217 reference table and `CurrencyCode`
//! - `error`: Structured error types for dates, currencies and batch decoding
//!
//! # Re-exports
//!
//! For convenience, commonly used items are re-exported at this module level.

pub mod currency;
pub mod error;
pub mod time;

pub use currency::{is_valid_currency_code, CurrencyCode};
pub use error::{CurrencyError, DateError, ValidationError};
pub use time::{is_before, is_weekend, parse_date, Date};
