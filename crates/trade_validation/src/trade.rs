//! Trade records and batch decoding.
//!
//! A batch arrives as a JSON array of flat objects. Each object is decoded
//! into a [`TradeRecord`] whose [`Product`] variant is selected by the `type`
//! field and carries only the fields the rules read for that type. Fields the
//! rules never look at (amounts, rates, trader, legal entity, ...) are
//! accepted and dropped.
//!
//! Decoding is where structural problems surface: a `VanillaOption` without
//! an `expiryDate`, a non-string `valueDate`, a body that is not an array.
//! Any such problem fails the whole batch with a [`ValidationError`].
//!
//! # Examples
//!
//! ```
//! use trade_validation::trade::{decode_batch, Product};
//!
//! let batch = decode_batch(r#"[
//!     {"customer": "PLUTO1", "type": "Spot", "tradeDate": "2016-08-11", "valueDate": "2016-08-15"},
//!     {"customer": "PLUTO2", "type": "Swap"}
//! ]"#).unwrap();
//!
//! assert!(matches!(batch[0].product, Product::Spot(_)));
//! assert_eq!(batch[1].trade_type(), "Swap");
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::types::ValidationError;

/// Option style for which the exercise window is checked.
pub const AMERICAN_STYLE: &str = "AMERICAN";

/// A decoded trade, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    /// Customer (counterparty) identifier, present on every trade type
    pub customer: String,
    /// Type-specific fields
    pub product: Product,
}

/// Product-specific payload keyed by the wire `type` discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Product {
    /// FX spot
    Spot(FxDates),
    /// FX forward
    Forward(FxDates),
    /// Vanilla FX option
    VanillaOption(VanillaOption),
    /// Any other trade type; passes through every type-gated rule
    Other(String),
}

/// Dates carried by spot and forward trades.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxDates {
    /// Trade date (YYYY-MM-DD)
    pub trade_date: String,
    /// Value (settlement) date (YYYY-MM-DD)
    pub value_date: String,
}

/// Fields of a vanilla option trade read by the rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VanillaOption {
    /// Exercise style, compared case-insensitively
    pub style: String,
    /// Payment currency
    pub pay_ccy: String,
    /// Premium currency
    pub premium_ccy: String,
    /// Expiry date
    pub expiry_date: String,
    /// Premium payment date
    pub premium_date: String,
    /// Delivery date
    pub delivery_date: String,
    /// Trade date; required for American options
    #[serde(default)]
    pub trade_date: Option<String>,
    /// Exercise start date; required for American options
    #[serde(default)]
    pub excercise_start_date: Option<String>,
}

impl VanillaOption {
    /// True when the style is American, ignoring case.
    pub fn is_american(&self) -> bool {
        self.style.eq_ignore_ascii_case(AMERICAN_STYLE)
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    trade_type: String,
    customer: String,
}

impl Product {
    /// The wire `type` value this product was decoded from.
    pub fn trade_type(&self) -> &str {
        match self {
            Product::Spot(_) => "Spot",
            Product::Forward(_) => "Forward",
            Product::VanillaOption(_) => "VanillaOption",
            Product::Other(name) => name,
        }
    }

    /// Spot/forward dates, if this is a spot or forward trade.
    pub fn fx_dates(&self) -> Option<&FxDates> {
        match self {
            Product::Spot(dates) | Product::Forward(dates) => Some(dates),
            _ => None,
        }
    }

    /// Option fields, if this is a vanilla option.
    pub fn vanilla_option(&self) -> Option<&VanillaOption> {
        match self {
            Product::VanillaOption(option) => Some(option),
            _ => None,
        }
    }
}

impl TradeRecord {
    /// Decodes one trade object.
    ///
    /// `trade_number` is the 1-based batch position, used only to label
    /// errors.
    pub fn from_json(trade_number: usize, value: &Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::malformed(
                trade_number,
                format!("expected an object, found {}", json_kind(value)),
            ));
        }

        let malformed = |e: serde_json::Error| ValidationError::malformed(trade_number, e.to_string());
        let envelope = Envelope::deserialize(value).map_err(malformed)?;

        let product = match envelope.trade_type.as_str() {
            "Spot" => Product::Spot(FxDates::deserialize(value).map_err(malformed)?),
            "Forward" => Product::Forward(FxDates::deserialize(value).map_err(malformed)?),
            "VanillaOption" => {
                let option = VanillaOption::deserialize(value).map_err(malformed)?;
                if option.is_american() {
                    if option.trade_date.is_none() {
                        return Err(ValidationError::malformed(
                            trade_number,
                            "missing field `tradeDate` for AMERICAN option",
                        ));
                    }
                    if option.excercise_start_date.is_none() {
                        return Err(ValidationError::malformed(
                            trade_number,
                            "missing field `excerciseStartDate` for AMERICAN option",
                        ));
                    }
                }
                Product::VanillaOption(option)
            }
            _ => Product::Other(envelope.trade_type),
        };

        Ok(TradeRecord {
            customer: envelope.customer,
            product,
        })
    }

    /// The wire `type` value.
    pub fn trade_type(&self) -> &str {
        self.product.trade_type()
    }
}

/// Decodes a JSON array of trade objects, preserving order.
pub fn decode_batch(body: &str) -> Result<Vec<TradeRecord>, ValidationError> {
    let value: Value = serde_json::from_str(body)?;
    decode_batch_value(&value)
}

/// Decodes an already-parsed JSON array of trade objects.
pub fn decode_batch_value(value: &Value) -> Result<Vec<TradeRecord>, ValidationError> {
    let items = value.as_array().ok_or(ValidationError::NotABatch {
        found: json_kind(value),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| TradeRecord::from_json(idx + 1, item))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
