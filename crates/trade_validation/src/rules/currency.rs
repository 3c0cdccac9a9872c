//! Option pay and premium currencies must be ISO 4217 codes.

use super::Rule;
use crate::report::{ErrorType, Violation};
use crate::trade::TradeRecord;
use crate::types::currency::CurrencyCode;

/// Checks `payCcy` and `premiumCcy` of vanilla options independently; each
/// invalid code yields its own violation, pay currency first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyCodeRule;

impl Rule for CurrencyCodeRule {
    fn name(&self) -> &'static str {
        "currency_code"
    }

    fn applies_to(&self, trade: &TradeRecord) -> bool {
        trade.product.vanilla_option().is_some()
    }

    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation> {
        let Some(option) = trade.product.vanilla_option() else {
            return Vec::new();
        };

        let fields = [
            ("payCcy", option.pay_ccy.as_str(), ErrorType::PayCcyNotIso4217),
            ("premiumCcy", option.premium_ccy.as_str(), ErrorType::PremiumCcyNotIso4217),
        ];

        let mut violations = Vec::with_capacity(2);
        for (field, code, error_type) in fields {
            if let Err(err) = CurrencyCode::parse(code) {
                tracing::debug!(trade_number, field, %err, "currency is not valid ISO 4217");
                violations.push(Violation::new(error_type, trade_number));
            }
        }
        violations
    }
}
