//! Trade batch validation endpoint
//!
//! `POST /validatetrades` takes the raw request body as a JSON array of
//! trades. A clean batch answers with the plain-text success message; any
//! violations come back as a JSON array of `{ErrorType, TradeNumber}`
//! objects, in trade order and then rule order.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use trade_validation::{decode_batch, ValidationError, ValidationPipeline, ValidationReport};
use uuid::Uuid;

use super::AppState;
use crate::error::ApiError;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const APPLICATION_JSON: &str = "application/json";

/// Build the validation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/validatetrades", post(validate_trades))
}

/// POST /validatetrades - Validate a batch of trades
async fn validate_trades(
    State(state): State<AppState>,
    body: String,
) -> Result<Response, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "validate_trades",
        %request_id,
        bytes = body.len(),
        trades = tracing::field::Empty,
    );

    span.in_scope(|| -> Result<Response, ApiError> {
        let (trades, report) = validate_batch(&state.pipeline, &body)?;
        span.record("trades", trades);

        let content_type = if report.is_empty() {
            TEXT_PLAIN
        } else {
            APPLICATION_JSON
        };
        tracing::info!(
            violations = report.len(),
            summary = ?report.summary(),
            "batch validated"
        );

        let rendered = report.to_response_body()?;
        Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], rendered).into_response())
    })
}

/// Decodes and validates `body`, returning the trade count with the report.
fn validate_batch(
    pipeline: &ValidationPipeline,
    body: &str,
) -> Result<(usize, ValidationReport), ValidationError> {
    let batch = decode_batch(body)?;
    Ok((batch.len(), pipeline.run(&batch)))
}
