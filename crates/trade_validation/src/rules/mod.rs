//! Business rules applied to each trade.
//!
//! Every rule implements [`Rule`]: an applicability gate on the trade's type
//! (and for the exercise window, its style) plus a check that yields zero or
//! more [`Violation`]s. A rule that does not apply always passes.
//!
//! Rules are stateless values. The pipeline holds them as [`TradeRule`]
//! variants in a plain `Vec`, so the evaluation order is the vector order and
//! dispatch is static.
//!
//! | Rule | Applies to | Error type |
//! |---|---|---|
//! | [`ValueDateRule`] | Spot, Forward | `valueDateNotbeforeTradeDate` |
//! | [`WeekendValueDateRule`] | Spot, Forward | `valueDateFallinWeekend` |
//! | [`CurrencyCodeRule`] | VanillaOption | `payCcyNotValidISO4217`, `premiumCcyNotValidISO4217` |
//! | [`CustomerRule`] | all | `CustomerNotValid` |
//! | [`StyleRule`] | VanillaOption | `StyleNotValid` |
//! | [`ExerciseWindowRule`] | American VanillaOption | `InvalidExcerciseStartDate` |
//! | [`ExpiryPremiumRule`] | VanillaOption | `InvalidExpiryAndPrimiumDate` |
//! | [`DateFormatRule`] | Spot, Forward, VanillaOption | `InvalidDateFormat` (strict policy only) |

mod currency;
mod customer;
mod date_format;
mod exercise_window;
mod expiry_delivery;
mod style;
mod value_date;
mod weekend;

pub use currency::CurrencyCodeRule;
pub use customer::{CustomerRule, DEFAULT_CUSTOMERS};
pub use date_format::DateFormatRule;
pub use exercise_window::ExerciseWindowRule;
pub use expiry_delivery::ExpiryPremiumRule;
pub use style::{StyleRule, VALID_STYLES};
pub use value_date::ValueDateRule;
pub use weekend::WeekendValueDateRule;

use crate::report::Violation;
use crate::trade::TradeRecord;

/// Result of evaluating one rule against one trade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    /// False when at least one violation was produced
    pub passed: bool,
    /// Violations in the order the rule produced them
    pub violations: Vec<Violation>,
}

impl RuleOutcome {
    /// A passing outcome with no violations.
    pub fn pass() -> Self {
        Self {
            passed: true,
            violations: Vec::new(),
        }
    }

    /// Outcome for the given violations; passes iff there are none.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations,
        }
    }

    /// Diagnostic text: one wire-form violation per line, `None` on pass.
    pub fn message(&self) -> Option<String> {
        if self.violations.is_empty() {
            return None;
        }
        Some(
            self.violations
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

/// Contract shared by all trade rules.
pub trait Rule {
    /// Short stable identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Applicability gate.
    fn applies_to(&self, trade: &TradeRecord) -> bool;

    /// Checks an applicable trade. `trade_number` is the 1-based batch
    /// position stamped on every violation.
    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation>;

    /// Gate then check. Inapplicable trades always pass.
    fn evaluate(&self, trade: &TradeRecord, trade_number: usize) -> RuleOutcome {
        if !self.applies_to(trade) {
            return RuleOutcome::pass();
        }
        RuleOutcome::from_violations(self.check(trade, trade_number))
    }
}

/// Closed set of rules the pipeline can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeRule {
    /// Value date not before trade date
    ValueDate(ValueDateRule),
    /// Value date not on a weekend
    WeekendValueDate(WeekendValueDateRule),
    /// ISO 4217 pay and premium currencies
    CurrencyCode(CurrencyCodeRule),
    /// Customer whitelist
    Customer(CustomerRule),
    /// Option style whitelist
    Style(StyleRule),
    /// American exercise window
    ExerciseWindow(ExerciseWindowRule),
    /// Expiry and premium before delivery
    ExpiryPremium(ExpiryPremiumRule),
    /// Date fields parse as YYYY-MM-DD
    DateFormat(DateFormatRule),
}

impl TradeRule {
    /// The standard seven rules in evaluation order, with the default
    /// customer whitelist.
    pub fn standard() -> Vec<TradeRule> {
        Self::standard_with_customers(CustomerRule::default())
    }

    /// The standard seven rules with the given customer rule.
    pub fn standard_with_customers(customers: CustomerRule) -> Vec<TradeRule> {
        vec![
            TradeRule::ValueDate(ValueDateRule),
            TradeRule::WeekendValueDate(WeekendValueDateRule),
            TradeRule::CurrencyCode(CurrencyCodeRule),
            TradeRule::Customer(customers),
            TradeRule::Style(StyleRule),
            TradeRule::ExerciseWindow(ExerciseWindowRule),
            TradeRule::ExpiryPremium(ExpiryPremiumRule),
        ]
    }
}

impl Rule for TradeRule {
    fn name(&self) -> &'static str {
        match self {
            TradeRule::ValueDate(r) => r.name(),
            TradeRule::WeekendValueDate(r) => r.name(),
            TradeRule::CurrencyCode(r) => r.name(),
            TradeRule::Customer(r) => r.name(),
            TradeRule::Style(r) => r.name(),
            TradeRule::ExerciseWindow(r) => r.name(),
            TradeRule::ExpiryPremium(r) => r.name(),
            TradeRule::DateFormat(r) => r.name(),
        }
    }

    fn applies_to(&self, trade: &TradeRecord) -> bool {
        match self {
            TradeRule::ValueDate(r) => r.applies_to(trade),
            TradeRule::WeekendValueDate(r) => r.applies_to(trade),
            TradeRule::CurrencyCode(r) => r.applies_to(trade),
            TradeRule::Customer(r) => r.applies_to(trade),
            TradeRule::Style(r) => r.applies_to(trade),
            TradeRule::ExerciseWindow(r) => r.applies_to(trade),
            TradeRule::ExpiryPremium(r) => r.applies_to(trade),
            TradeRule::DateFormat(r) => r.applies_to(trade),
        }
    }

    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation> {
        match self {
            TradeRule::ValueDate(r) => r.check(trade, trade_number),
            TradeRule::WeekendValueDate(r) => r.check(trade, trade_number),
            TradeRule::CurrencyCode(r) => r.check(trade, trade_number),
            TradeRule::Customer(r) => r.check(trade, trade_number),
            TradeRule::Style(r) => r.check(trade, trade_number),
            TradeRule::ExerciseWindow(r) => r.check(trade, trade_number),
            TradeRule::ExpiryPremium(r) => r.check(trade, trade_number),
            TradeRule::DateFormat(r) => r.check(trade, trade_number),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Trade builders shared by the rule tests.

    use crate::trade::{FxDates, Product, TradeRecord, VanillaOption};

    pub fn spot(trade_date: &str, value_date: &str) -> TradeRecord {
        TradeRecord {
            customer: "PLUTO1".to_string(),
            product: Product::Spot(FxDates {
                trade_date: trade_date.to_string(),
                value_date: value_date.to_string(),
            }),
        }
    }

    pub fn forward(trade_date: &str, value_date: &str) -> TradeRecord {
        TradeRecord {
            customer: "PLUTO2".to_string(),
            product: Product::Forward(FxDates {
                trade_date: trade_date.to_string(),
                value_date: value_date.to_string(),
            }),
        }
    }

    pub fn option(style: &str) -> VanillaOption {
        VanillaOption {
            style: style.to_string(),
            pay_ccy: "USD".to_string(),
            premium_ccy: "USD".to_string(),
            expiry_date: "2016-08-19".to_string(),
            premium_date: "2016-08-12".to_string(),
            delivery_date: "2016-08-22".to_string(),
            trade_date: Some("2016-08-11".to_string()),
            excercise_start_date: Some("2016-08-12".to_string()),
        }
    }

    pub fn option_trade(option: VanillaOption) -> TradeRecord {
        TradeRecord {
            customer: "PLUTO1".to_string(),
            product: Product::VanillaOption(option),
        }
    }

    pub fn other(trade_type: &str) -> TradeRecord {
        TradeRecord {
            customer: "PLUTO1".to_string(),
            product: Product::Other(trade_type.to_string()),
        }
    }
}
