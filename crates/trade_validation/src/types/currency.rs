//! ISO 4217 currency codes.
//!
//! This module provides the static table of active alphabetic codes and a
//! validated `CurrencyCode` newtype built on it.
//!
//! # Examples
//!
//! ```
//! use trade_validation::types::currency::{is_valid_currency_code, CurrencyCode};
//!
//! assert!(is_valid_currency_code("USD"));
//! assert!(!is_valid_currency_code("ZZZ"));
//!
//! let chf: CurrencyCode = "CHF".parse().unwrap();
//! assert_eq!(chf.code(), "CHF");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// Active ISO 4217 alphabetic codes, sorted for binary search.
///
/// Includes fund codes and the X-prefixed precious metal, SDR and
/// testing codes that the standard lists alongside national currencies.
pub const ISO_4217_ACTIVE: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD",
    "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP",
    "BYN", "BZD", "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU",
    "CRC", "CUC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB",
    "EUR", "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD",
    "HNL", "HTG", "HUF", "IDR", "ILS", "INR", "IQD", "IRR", "ISK", "JMD", "JOD", "JPY",
    "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR",
    "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR",
    "MVR", "MWK", "MXN", "MXV", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD",
    "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", "RON", "RSD", "RUB",
    "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE", "SLL", "SOS", "SRD",
    "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP", "TRY", "TTD",
    "TWD", "TZS", "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS", "VED", "VES",
    "VND", "VUV", "WST", "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XCG",
    "XDR", "XOF", "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX", "YER", "ZAR", "ZMW",
    "ZWG", "ZWL",
];

/// True iff `code` is an active ISO 4217 code.
///
/// Matching is exact: lower-case, padded or wrong-length input is simply
/// not a valid code. Never fails.
pub fn is_valid_currency_code(code: &str) -> bool {
    CurrencyCode::parse(code).is_ok()
}

/// A currency code known to be in [`ISO_4217_ACTIVE`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurrencyCode(&'static str);

impl CurrencyCode {
    /// Parses an ISO 4217 code.
    ///
    /// Returns `CurrencyError::ParseError` when the input is not three
    /// upper-case ASCII letters and `CurrencyError::UnknownCurrency` when it
    /// is well formed but not in the table.
    pub fn parse(s: &str) -> Result<Self, CurrencyError> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(CurrencyError::ParseError(s.to_string()));
        }
        ISO_4217_ACTIVE
            .binary_search_by(|entry| (*entry).cmp(s))
            .map(|idx| CurrencyCode(ISO_4217_ACTIVE[idx]))
            .map_err(|_| CurrencyError::UnknownCurrency(s.to_string()))
    }

    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        CurrencyCode::parse(s)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
