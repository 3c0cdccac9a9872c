//! Integration tests for the validation pipeline.
//!
//! Runs the full decode-and-validate path over the sample batch in
//! `tests/data` and over small hand-built batches.

use trade_validation::pipeline::{DatePolicy, RulesConfig, ValidationPipeline};
use trade_validation::report::{ErrorType, ValidationReport, Violation, SUCCESS_MESSAGE};
use trade_validation::types::ValidationError;

const SAMPLE_TRADES: &str = include_str!("data/sample_trades.json");

fn spot_json(customer: &str, trade_date: &str, value_date: &str) -> String {
    format!(
        r#"{{"customer": "{}", "type": "Spot", "tradeDate": "{}", "valueDate": "{}", "rate": 1.12}}"#,
        customer, trade_date, value_date
    )
}

fn batch(items: &[String]) -> String {
    format!("[{}]", items.join(","))
}

fn validate(body: &str) -> ValidationReport {
    ValidationPipeline::new().validate_json(body).unwrap()
}

/// The sample batch yields exactly the expected violations, in order.
#[test]
fn test_sample_batch_report() {
    let report = validate(SAMPLE_TRADES);

    let expected = vec![
        Violation::new(ErrorType::ValueDateOnWeekend, 4),
        Violation::new(ErrorType::ValueDateBeforeTradeDate, 5),
        Violation::new(ErrorType::CustomerNotValid, 6),
        Violation::new(ErrorType::InvalidExpiryAndPremiumDate, 9),
        Violation::new(ErrorType::InvalidExerciseStartDate, 11),
        Violation::new(ErrorType::PayCcyNotIso4217, 12),
        Violation::new(ErrorType::CustomerNotValid, 12),
        Violation::new(ErrorType::StyleNotValid, 13),
    ];
    assert_eq!(report.into_violations(), expected);
}

/// Clean trades in the sample batch produce nothing.
#[test]
fn test_sample_batch_clean_trades() {
    let report = validate(SAMPLE_TRADES);
    for trade_number in [1, 2, 3, 7, 8, 10] {
        assert!(
            report.for_trade(trade_number).is_empty(),
            "trade {} should be clean",
            trade_number
        );
    }
}

/// Running twice gives identical reports.
#[test]
fn test_pipeline_is_idempotent() {
    let pipeline = ValidationPipeline::new();
    let first = pipeline.validate_json(SAMPLE_TRADES).unwrap();
    let second = pipeline.validate_json(SAMPLE_TRADES).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_clean_spot_passes_both_date_rules() {
    let report = validate(&batch(&[spot_json("PLUTO1", "2016-08-11", "2016-08-15")]));
    assert!(report.is_empty());
    assert_eq!(report.to_response_body().unwrap(), SUCCESS_MESSAGE);
}

#[test]
fn test_unknown_customer_single_entry() {
    let report = validate(&batch(&[spot_json("Touraj", "2016-08-11", "2016-08-15")]));
    assert_eq!(
        report.to_response_body().unwrap(),
        r#"[{"ErrorType":"CustomerNotValid","TradeNumber":1}]"#
    );
}

#[test]
fn test_single_invalid_currency_single_entry() {
    let body = r#"[{"customer": "PLUTO1", "type": "VanillaOption", "style": "EUROPEAN",
                    "payCcy": "XYZ", "premiumCcy": "USD", "expiryDate": "2016-08-19",
                    "premiumDate": "2016-08-12", "deliveryDate": "2016-08-22"}]"#;
    let report = validate(body);
    assert_eq!(
        report.violations(),
        &[Violation::new(ErrorType::PayCcyNotIso4217, 1)]
    );
}

/// Only the middle trade settles on a weekend.
#[test]
fn test_weekend_violation_is_tagged_with_position() {
    let report = validate(&batch(&[
        spot_json("PLUTO1", "2016-08-11", "2016-08-15"),
        spot_json("PLUTO1", "2016-08-11", "2016-08-13"),
        spot_json("PLUTO2", "2016-08-11", "2016-08-16"),
    ]));
    assert_eq!(
        report.violations(),
        &[Violation::new(ErrorType::ValueDateOnWeekend, 2)]
    );
}

/// Reordering the batch changes only the trade numbers and report order.
#[test]
fn test_records_are_independent() {
    let a = spot_json("PLUTO1", "2016-08-11", "2016-08-13");
    let b = spot_json("Touraj", "2016-08-11", "2016-08-15");

    let forward = validate(&batch(&[a.clone(), b.clone()]));
    let reversed = validate(&batch(&[b, a]));

    assert_eq!(
        forward.violations(),
        &[
            Violation::new(ErrorType::ValueDateOnWeekend, 1),
            Violation::new(ErrorType::CustomerNotValid, 2),
        ]
    );
    assert_eq!(
        reversed.violations(),
        &[
            Violation::new(ErrorType::CustomerNotValid, 1),
            Violation::new(ErrorType::ValueDateOnWeekend, 2),
        ]
    );
}

/// Unknown types pass every type-gated rule whatever their fields hold.
#[test]
fn test_unknown_type_only_checked_for_customer() {
    let body = r#"[
        {"customer": "PLUTO1", "type": "Swap", "valueDate": "2016-08-13", "payCcy": "XYZ", "style": "ODD"},
        {"customer": "NOBODY", "type": "Swap"}
    ]"#;
    let report = validate(body);
    assert_eq!(
        report.violations(),
        &[Violation::new(ErrorType::CustomerNotValid, 2)]
    );
}

#[test]
fn test_missing_field_fails_whole_batch() {
    let body = r#"[
        {"customer": "PLUTO1", "type": "Spot", "tradeDate": "2016-08-11", "valueDate": "2016-08-15"},
        {"customer": "PLUTO1", "type": "VanillaOption", "style": "EUROPEAN", "payCcy": "USD",
         "premiumCcy": "USD", "premiumDate": "2016-08-12", "deliveryDate": "2016-08-22"}
    ]"#;
    match ValidationPipeline::new().validate_json(body) {
        Err(ValidationError::MalformedTrade {
            trade_number,
            reason,
        }) => {
            assert_eq!(trade_number, 2);
            assert!(reason.contains("expiryDate"));
        }
        other => panic!("Expected MalformedTrade, got {:?}", other),
    }
}

#[test]
fn test_strict_policy_on_sample_batch_adds_nothing() {
    let config = RulesConfig {
        date_policy: DatePolicy::Strict,
        ..Default::default()
    };
    let strict = ValidationPipeline::from_config(&config)
        .validate_json(SAMPLE_TRADES)
        .unwrap();
    assert_eq!(strict, validate(SAMPLE_TRADES));
}

#[test]
fn test_summary_over_sample_batch() {
    let summary = validate(SAMPLE_TRADES).summary();
    assert_eq!(summary[&ErrorType::CustomerNotValid], 2);
    assert_eq!(summary.values().sum::<usize>(), 8);
}
