//! Value date must be a weekday.

use super::Rule;
use crate::report::{ErrorType, Violation};
use crate::trade::TradeRecord;
use crate::types::time::falls_on_weekend;

/// Flags spot and forward trades whose value date is a Saturday or Sunday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekendValueDateRule;

impl Rule for WeekendValueDateRule {
    fn name(&self) -> &'static str {
        "weekend_value_date"
    }

    fn applies_to(&self, trade: &TradeRecord) -> bool {
        trade.product.fx_dates().is_some()
    }

    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation> {
        let Some(dates) = trade.product.fx_dates() else {
            return Vec::new();
        };

        if falls_on_weekend(&dates.value_date) {
            tracing::debug!(trade_number, value_date = %dates.value_date, "value date falls on a weekend");
            return vec![Violation::new(ErrorType::ValueDateOnWeekend, trade_number)];
        }
        Vec::new()
    }
}
