//! Expiry and premium dates must precede delivery.

use super::Rule;
use crate::report::{ErrorType, Violation};
use crate::trade::TradeRecord;
use crate::types::time::date_before;

/// Flags vanilla options where the expiry date or the premium date is not
/// strictly before the delivery date. One violation at most.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpiryPremiumRule;

impl Rule for ExpiryPremiumRule {
    fn name(&self) -> &'static str {
        "expiry_premium_before_delivery"
    }

    fn applies_to(&self, trade: &TradeRecord) -> bool {
        trade.product.vanilla_option().is_some()
    }

    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation> {
        let Some(option) = trade.product.vanilla_option() else {
            return Vec::new();
        };

        let expiry_ok = date_before(&option.expiry_date, &option.delivery_date);
        let premium_ok = date_before(&option.premium_date, &option.delivery_date);

        if expiry_ok && premium_ok {
            return Vec::new();
        }
        tracing::debug!(
            trade_number,
            expiry_date = %option.expiry_date,
            premium_date = %option.premium_date,
            delivery_date = %option.delivery_date,
            "expiry or premium date is not before delivery date"
        );
        vec![Violation::new(
            ErrorType::InvalidExpiryAndPremiumDate,
            trade_number,
        )]
    }
}
