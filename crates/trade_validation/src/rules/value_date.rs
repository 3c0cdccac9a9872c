//! Value date must not be before trade date.

use super::Rule;
use crate::report::{ErrorType, Violation};
use crate::trade::TradeRecord;
use crate::types::time::date_before;

/// Flags spot and forward trades whose value date is strictly before the
/// trade date. Equal dates pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueDateRule;

impl Rule for ValueDateRule {
    fn name(&self) -> &'static str {
        "value_date_before_trade_date"
    }

    fn applies_to(&self, trade: &TradeRecord) -> bool {
        trade.product.fx_dates().is_some()
    }

    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation> {
        let Some(dates) = trade.product.fx_dates() else {
            return Vec::new();
        };

        if date_before(&dates.value_date, &dates.trade_date) {
            tracing::debug!(
                trade_number,
                value_date = %dates.value_date,
                trade_date = %dates.trade_date,
                "value date is before trade date"
            );
            return vec![Violation::new(
                ErrorType::ValueDateBeforeTradeDate,
                trade_number,
            )];
        }
        Vec::new()
    }
}
