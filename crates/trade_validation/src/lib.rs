//! # trade_validation: Rule Pipeline for FX Trade Batches
//!
//! ## Layer Role
//!
//! trade_validation is the kernel of the trade validator. It provides:
//! - Date and currency reference utilities (`types`)
//! - Typed trade records decoded from JSON (`trade`)
//! - The business rules and their shared contract (`rules`)
//! - The pipeline that runs every rule over a batch (`pipeline`)
//! - The ordered violation report (`report`)
//!
//! The crate has no I/O and no async code. The HTTP transport lives in
//! `validation_server`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use trade_validation::pipeline::ValidationPipeline;
//! use trade_validation::report::SUCCESS_MESSAGE;
//!
//! let body = r#"[
//!   {"customer": "PLUTO1", "type": "Spot", "tradeDate": "2016-08-11", "valueDate": "2016-08-15"},
//!   {"customer": "PLUTO2", "type": "Forward", "tradeDate": "2016-08-11", "valueDate": "2016-08-13"}
//! ]"#;
//!
//! let report = ValidationPipeline::new().validate_json(body).unwrap();
//! assert_eq!(
//!     report.to_response_body().unwrap(),
//!     r#"[{"ErrorType":"valueDateFallinWeekend","TradeNumber":2}]"#
//! );
//!
//! let clean = ValidationPipeline::new().validate_json("[]").unwrap();
//! assert_eq!(clean.to_response_body().unwrap(), SUCCESS_MESSAGE);
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod pipeline;
pub mod report;
pub mod rules;
pub mod trade;
pub mod types;

pub use pipeline::{DatePolicy, RulesConfig, ValidationPipeline};
pub use report::{ErrorType, ValidationReport, Violation, SUCCESS_MESSAGE};
pub use trade::{decode_batch, Product, TradeRecord};
pub use types::ValidationError;
