//! The validation pipeline.
//!
//! A [`ValidationPipeline`] owns an ordered list of [`TradeRule`]s and runs
//! every rule against every trade of a batch, collecting the violations into
//! a [`ValidationReport`]. There is no short-circuiting between rules and no
//! state carried from one trade to the next, so the same pipeline can be
//! shared across concurrent requests.
//!
//! # Examples
//!
//! ```
//! use trade_validation::pipeline::ValidationPipeline;
//!
//! let pipeline = ValidationPipeline::new();
//! let report = pipeline
//!     .validate_json(r#"[{"customer": "Touraj", "type": "Spot",
//!                         "tradeDate": "2016-08-11", "valueDate": "2016-08-15"}]"#)
//!     .unwrap();
//!
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.violations()[0].trade_number, 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::report::ValidationReport;
use crate::rules::{CustomerRule, DateFormatRule, Rule, TradeRule, DEFAULT_CUSTOMERS};
use crate::trade::{decode_batch, TradeRecord};
use crate::types::ValidationError;

/// How unparsable date fields are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    /// An unparsable date makes the comparison that reads it false.
    #[default]
    Lenient,
    /// Additionally report `InvalidDateFormat` for the trade.
    Strict,
}

impl FromStr for DatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(DatePolicy::Lenient),
            "strict" => Ok(DatePolicy::Strict),
            _ => Err(format!(
                "Invalid date policy: {}. Must be one of: lenient, strict",
                s
            )),
        }
    }
}

impl fmt::Display for DatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatePolicy::Lenient => write!(f, "lenient"),
            DatePolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Customer whitelist
    pub allowed_customers: Vec<String>,
    /// Date parse policy
    pub date_policy: DatePolicy,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            allowed_customers: DEFAULT_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
            date_policy: DatePolicy::Lenient,
        }
    }
}

/// Ordered rule list applied to every trade of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPipeline {
    rules: Vec<TradeRule>,
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationPipeline {
    /// Pipeline with the seven standard rules and default configuration.
    pub fn new() -> Self {
        Self::with_rules(TradeRule::standard())
    }

    /// Pipeline built from configuration.
    ///
    /// Under [`DatePolicy::Strict`] the date format rule runs first, ahead
    /// of the standard seven.
    pub fn from_config(config: &RulesConfig) -> Self {
        let customers = CustomerRule::new(config.allowed_customers.iter().cloned());
        let mut rules = Vec::with_capacity(8);
        if config.date_policy == DatePolicy::Strict {
            rules.push(TradeRule::DateFormat(DateFormatRule));
        }
        rules.extend(TradeRule::standard_with_customers(customers));
        Self::with_rules(rules)
    }

    /// Pipeline evaluating exactly `rules`, in order.
    pub fn with_rules(rules: Vec<TradeRule>) -> Self {
        Self { rules }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[TradeRule] {
        &self.rules
    }

    /// Runs every rule against every trade.
    ///
    /// Trade `i` of the batch is reported as `TradeNumber = i + 1`.
    pub fn run(&self, batch: &[TradeRecord]) -> ValidationReport {
        let _span = tracing::debug_span!("validation_run", trades = batch.len()).entered();
        let mut report = ValidationReport::new();

        for (idx, trade) in batch.iter().enumerate() {
            let trade_number = idx + 1;
            for rule in &self.rules {
                let outcome = rule.evaluate(trade, trade_number);
                if let Some(message) = outcome.message() {
                    tracing::trace!(trade_number, rule = rule.name(), %message, "rule failed");
                }
                report.extend(outcome.violations);
            }
        }

        report
    }

    /// Decodes a JSON batch and runs it.
    ///
    /// Structural problems (invalid JSON, non-array body, a trade missing a
    /// field its rules need) fail the whole batch before any rule runs.
    pub fn validate_json(&self, body: &str) -> Result<ValidationReport, ValidationError> {
        let batch = decode_batch(body)?;
        Ok(self.run(&batch))
    }
}
