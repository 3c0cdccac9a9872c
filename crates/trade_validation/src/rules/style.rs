//! Option style whitelist.

use super::Rule;
use crate::report::{ErrorType, Violation};
use crate::trade::TradeRecord;

/// Accepted option styles, upper case.
pub const VALID_STYLES: [&str; 2] = ["AMERICAN", "EUROPEAN"];

/// Flags vanilla options whose style is not AMERICAN or EUROPEAN, ignoring
/// case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleRule;

impl Rule for StyleRule {
    fn name(&self) -> &'static str {
        "option_style"
    }

    fn applies_to(&self, trade: &TradeRecord) -> bool {
        trade.product.vanilla_option().is_some()
    }

    fn check(&self, trade: &TradeRecord, trade_number: usize) -> Vec<Violation> {
        let Some(option) = trade.product.vanilla_option() else {
            return Vec::new();
        };

        let style = option.style.to_uppercase();
        if VALID_STYLES.iter().any(|valid| *valid == style) {
            return Vec::new();
        }
        tracing::debug!(trade_number, %style, "option style is not valid");
        vec![Violation::new(ErrorType::StyleNotValid, trade_number)]
    }
}
