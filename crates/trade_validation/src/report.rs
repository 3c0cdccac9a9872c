//! Violation entries and the per-run report.
//!
//! The wire form of a violation is the flat object
//! `{"ErrorType": "...", "TradeNumber": n}`; a report serializes as a JSON
//! array of those, in insertion order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Body returned to the caller when a batch produced no violations.
pub const SUCCESS_MESSAGE: &str = "Validation Successful :: No error found in trade data";

/// Enumerated violation codes. The serialized names are part of the wire
/// contract, misspellings included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    /// Value date is before trade date
    #[serde(rename = "valueDateNotbeforeTradeDate")]
    ValueDateBeforeTradeDate,
    /// Value date falls on Saturday or Sunday
    #[serde(rename = "valueDateFallinWeekend")]
    ValueDateOnWeekend,
    /// Payment currency is not an ISO 4217 code
    #[serde(rename = "payCcyNotValidISO4217")]
    PayCcyNotIso4217,
    /// Premium currency is not an ISO 4217 code
    #[serde(rename = "premiumCcyNotValidISO4217")]
    PremiumCcyNotIso4217,
    /// Customer is not on the whitelist
    #[serde(rename = "CustomerNotValid")]
    CustomerNotValid,
    /// Option style is neither AMERICAN nor EUROPEAN
    #[serde(rename = "StyleNotValid")]
    StyleNotValid,
    /// Exercise start date is outside (tradeDate, expiryDate)
    #[serde(rename = "InvalidExcerciseStartDate")]
    InvalidExerciseStartDate,
    /// Expiry or premium date is not before delivery date
    #[serde(rename = "InvalidExpiryAndPrimiumDate")]
    InvalidExpiryAndPremiumDate,
    /// A date field is not YYYY-MM-DD (strict date policy only)
    #[serde(rename = "InvalidDateFormat")]
    InvalidDateFormat,
}

impl ErrorType {
    /// Wire code for this violation.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorType::ValueDateBeforeTradeDate => "valueDateNotbeforeTradeDate",
            ErrorType::ValueDateOnWeekend => "valueDateFallinWeekend",
            ErrorType::PayCcyNotIso4217 => "payCcyNotValidISO4217",
            ErrorType::PremiumCcyNotIso4217 => "premiumCcyNotValidISO4217",
            ErrorType::CustomerNotValid => "CustomerNotValid",
            ErrorType::StyleNotValid => "StyleNotValid",
            ErrorType::InvalidExerciseStartDate => "InvalidExcerciseStartDate",
            ErrorType::InvalidExpiryAndPremiumDate => "InvalidExpiryAndPrimiumDate",
            ErrorType::InvalidDateFormat => "InvalidDateFormat",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One reported rule failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Violation code
    #[serde(rename = "ErrorType")]
    pub error_type: ErrorType,
    /// 1-based position of the offending trade in the batch
    #[serde(rename = "TradeNumber")]
    pub trade_number: usize,
}

impl Violation {
    /// Create a violation entry
    pub fn new(error_type: ErrorType, trade_number: usize) -> Self {
        Self {
            error_type,
            trade_number,
        }
    }
}

impl fmt::Display for Violation {
    /// Same text as the wire form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"ErrorType":"{}","TradeNumber":{}}}"#,
            self.error_type, self.trade_number
        )
    }
}

/// Ordered violations produced by one pipeline run.
///
/// Order is rule order within a trade, trades in batch order. There is no
/// deduplication and no grouping; an empty report means every trade passed
/// every applicable rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    /// True when no rule flagged any trade.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Violations in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterate violations in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations for one trade, in the order its rules reported them.
    pub fn for_trade(&self, trade_number: usize) -> Vec<Violation> {
        self.violations
            .iter()
            .filter(|v| v.trade_number == trade_number)
            .copied()
            .collect()
    }

    /// Violation counts per error type.
    pub fn summary(&self) -> BTreeMap<ErrorType, usize> {
        let mut counts = BTreeMap::new();
        for violation in &self.violations {
            *counts.entry(violation.error_type).or_insert(0) += 1;
        }
        counts
    }

    /// Consume the report, returning the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Text body for the caller: [`SUCCESS_MESSAGE`] when empty, otherwise
    /// the JSON array of violations.
    pub fn to_response_body(&self) -> Result<String, serde_json::Error> {
        if self.is_empty() {
            Ok(SUCCESS_MESSAGE.to_string())
        } else {
            serde_json::to_string(&self.violations)
        }
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
