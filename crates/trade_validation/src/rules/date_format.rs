//! Strict date policy check.

use super::Rule;
use crate::report::{ErrorType, Violation};
use crate::trade::{Product, TradeRecord};
use crate::types::time::Date;

/// Reports one `InvalidDateFormat` per trade when any date field the trade
/// carries is not a valid `YYYY-MM-DD` date.
///
/// Only part of the pipeline under the strict date policy, where it runs
/// ahead of the standard rules. The other rules are unaffected and still
/// treat an unparsable date as a failed comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFormatRule;

fn date_fields(product: &Product) -> Vec<(&'static str, &str)> {
    match product {
        Product::Spot(dates) | Product::Forward(dates) => vec![
            ("tradeDate", dates.trade_date.as_str()),
            ("valueDate", dates.value_date.as_str()),
        ],
        Product::VanillaOption(option) => {
            let mut fields = vec![
                ("expiryDate", option.expiry_date.as_str()),
                ("premiumDate", option.premium_date.as_str()),
                ("deliveryDate", option.delivery_date.as_str()),
            ];
            if let Some(trade_date) = option.trade_date.as_deref() {
                fields.push(("tradeDate", trade_date));
            }
            if let Some(start) = option.excercise_start_date.as_deref() {
                fields.push(("excerciseStartDate", start));
            }
            fields
        }
        Product::Other(_) => Vec::new(),
    }
}

impl Rule for DateFormatRule {
    fn name(&self) -> &'static str {
        "date_format"
    }

    fn applies_to(&self, trade: &TradeRecord) -> bool {
        !matches!(trade.product, Product::Other(_))
    }

    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation> {
        let invalid: Vec<_> = date_fields(&trade.product)
            .into_iter()
            .filter(|(_, value)| Date::parse(value).is_err())
            .collect();

        if invalid.is_empty() {
            return Vec::new();
        }
        tracing::debug!(trade_number, fields = ?invalid, "date fields are not YYYY-MM-DD");
        vec![Violation::new(ErrorType::InvalidDateFormat, trade_number)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::*;

    #[test]
    fn test_well_formed_dates_pass() {
        assert!(DateFormatRule.evaluate(&spot("2016-08-11", "2016-08-15"), 1).passed);
        assert!(DateFormatRule.evaluate(&option_trade(option("AMERICAN")), 1).passed);
    }

    #[test]
    fn test_single_bad_field_reports_once() {
        let outcome = DateFormatRule.evaluate(&spot("11/08/2016", "15/08/2016"), 3);
        assert_eq!(
            outcome.violations,
            vec![Violation::new(ErrorType::InvalidDateFormat, 3)]
        );
    }

    #[test]
    fn test_loosely_shaped_dates_are_reported() {
        for value_date in ["2016-8-5", " 2016-08-15", "+2016-08-15", "16-08-15"] {
            let outcome = DateFormatRule.evaluate(&spot("2016-08-11", value_date), 2);
            assert_eq!(
                outcome.violations,
                vec![Violation::new(ErrorType::InvalidDateFormat, 2)],
                "{:?}",
                value_date
            );
        }
    }

    #[test]
    fn test_option_exercise_start_checked() {
        let mut opt = option("AMERICAN");
        opt.excercise_start_date = Some("2016-02-30".to_string());
        assert!(!DateFormatRule.evaluate(&option_trade(opt), 1).passed);
    }

    #[test]
    fn test_european_option_without_optional_dates() {
        let mut opt = option("EUROPEAN");
        opt.trade_date = None;
        opt.excercise_start_date = None;
        assert!(DateFormatRule.evaluate(&option_trade(opt), 1).passed);
    }

    #[test]
    fn test_other_types_not_applicable() {
        assert!(!DateFormatRule.applies_to(&other("Swap")));
    }
}
