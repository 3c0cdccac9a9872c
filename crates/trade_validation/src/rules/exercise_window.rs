//! American exercise window: tradeDate <= excerciseStartDate < expiryDate.

use super::Rule;
use crate::report::{ErrorType, Violation};
use crate::trade::TradeRecord;
use crate::types::time::date_before;

/// Flags American vanilla options whose exercise start date is before the
/// trade date, or not before the expiry date.
///
/// An exercise start equal to the trade date is not "before" it and so
/// passes the first half of the window; an unparsable date makes the second
/// half fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExerciseWindowRule;

impl Rule for ExerciseWindowRule {
    fn name(&self) -> &'static str {
        "exercise_start_window"
    }

    fn applies_to(&self, trade: &TradeRecord) -> bool {
        trade
            .product
            .vanilla_option()
            .is_some_and(|option| option.is_american())
    }

    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation> {
        let Some(option) = trade.product.vanilla_option() else {
            return Vec::new();
        };
        // Both are guaranteed for American options by decoding.
        let (Some(trade_date), Some(start)) = (
            option.trade_date.as_deref(),
            option.excercise_start_date.as_deref(),
        ) else {
            return Vec::new();
        };

        let starts_before_trade = date_before(start, trade_date);
        let starts_before_expiry = date_before(start, &option.expiry_date);

        if starts_before_trade || !starts_before_expiry {
            tracing::debug!(
                trade_number,
                excercise_start_date = %start,
                trade_date = %trade_date,
                expiry_date = %option.expiry_date,
                "exercise start date is outside the exercise window"
            );
            return vec![Violation::new(
                ErrorType::InvalidExerciseStartDate,
                trade_number,
            )];
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::*;
    use crate::trade::VanillaOption;

    fn american(trade_date: &str, start: &str, expiry: &str) -> VanillaOption {
        let mut opt = option("AMERICAN");
        opt.trade_date = Some(trade_date.to_string());
        opt.excercise_start_date = Some(start.to_string());
        opt.expiry_date = expiry.to_string();
        opt
    }

    #[test]
    fn test_start_inside_window_passes() {
        let trade = option_trade(american("2016-08-11", "2016-08-12", "2016-08-19"));
        assert!(ExerciseWindowRule.evaluate(&trade, 1).passed);
    }

    #[test]
    fn test_start_on_trade_date_passes() {
        let trade = option_trade(american("2016-08-11", "2016-08-11", "2016-08-19"));
        assert!(ExerciseWindowRule.evaluate(&trade, 1).passed);
    }

    #[test]
    fn test_start_before_trade_date_fails() {
        let trade = option_trade(american("2016-08-11", "2016-08-10", "2016-08-19"));
        assert_eq!(
            ExerciseWindowRule.evaluate(&trade, 6).violations,
            vec![Violation::new(ErrorType::InvalidExerciseStartDate, 6)]
        );
    }

    #[test]
    fn test_start_on_or_after_expiry_fails() {
        for start in ["2016-08-19", "2016-08-20"] {
            let trade = option_trade(american("2016-08-11", start, "2016-08-19"));
            assert!(!ExerciseWindowRule.evaluate(&trade, 1).passed, "{}", start);
        }
    }

    #[test]
    fn test_unparsable_start_fails() {
        let trade = option_trade(american("2016-08-11", "soon", "2016-08-19"));
        assert!(!ExerciseWindowRule.evaluate(&trade, 1).passed);
    }

    #[test]
    fn test_style_gate_is_case_insensitive() {
        let mut opt = american("2016-08-11", "2016-08-25", "2016-08-19");
        opt.style = "american".to_string();
        assert!(!ExerciseWindowRule.evaluate(&option_trade(opt), 1).passed);
    }

    #[test]
    fn test_european_option_not_applicable() {
        let mut opt = american("2016-08-11", "2016-08-25", "2016-08-19");
        opt.style = "EUROPEAN".to_string();
        let trade = option_trade(opt);
        assert!(!ExerciseWindowRule.applies_to(&trade));
        assert!(ExerciseWindowRule.evaluate(&trade, 1).passed);
    }

    #[test]
    fn test_spot_not_applicable() {
        assert!(!ExerciseWindowRule.applies_to(&spot("2016-08-11", "2016-08-15")));
    }
}
