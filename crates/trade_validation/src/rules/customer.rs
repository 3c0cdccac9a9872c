//! Customer whitelist.

use super::Rule;
use crate::report::{ErrorType, Violation};
use crate::trade::TradeRecord;

/// Customers accepted when no whitelist is configured.
pub const DEFAULT_CUSTOMERS: [&str; 2] = ["PLUTO1", "PLUTO2"];

/// Flags trades of any type whose customer is not on the whitelist.
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRule {
    allowed: Vec<String>,
}

impl CustomerRule {
    /// Create a rule accepting exactly `allowed`.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The accepted customers.
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// True if `customer` is on the whitelist.
    pub fn is_allowed(&self, customer: &str) -> bool {
        self.allowed.iter().any(|c| c == customer)
    }
}

impl Default for CustomerRule {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOMERS)
    }
}

impl Rule for CustomerRule {
    fn name(&self) -> &'static str {
        "customer"
    }

    fn applies_to(&self, _trade: &TradeRecord) -> bool {
        true
    }

    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation> {
        if self.is_allowed(&trade.customer) {
            return Vec::new();
        }
        tracing::debug!(trade_number, customer = %trade.customer, "customer is not valid");
        vec![Violation::new(ErrorType::CustomerNotValid, trade_number)]
    }
}
