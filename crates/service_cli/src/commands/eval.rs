//! Eval command implementation
//!
//! Evaluates a file of metric requests in parallel and prints one outcome per
//! request, in input order. A request that fails to parse or falls outside a
//! formula's domain is reported inline and does not stop the batch.

use std::path::Path;

use metrics_core::MarketAssumptions;
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::CliConfig;
use crate::output::{render, EvalOutcome};
use crate::request::MetricRequest;
use crate::{CliError, Result};

/// Placeholder metric name for requests without a `"metric"` field.
const MISSING_METRIC: &str = "<missing>";

/// Run the eval command
pub fn run(input: &Path, config: &CliConfig) -> Result<()> {
    info!(input = %input.display(), format = %config.output_format, "Evaluating metric requests");

    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    let raw = std::fs::read_to_string(input)?;
    let outcomes = evaluate_document(&raw, &config.market)?;

    println!("{}", render(&outcomes, config.output_format)?);

    let failures = outcomes.iter().filter(|o| !o.is_success()).count();
    info!(total = outcomes.len(), failures, "Evaluation complete");
    Ok(())
}

/// Splits a request document into individual requests.
///
/// Accepts a JSON array of objects or a single object.
pub fn parse_requests(raw: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => Ok(items),
        single @ Value::Object(_) => Ok(vec![single]),
        _ => Err(CliError::InvalidArgument(
            "Request file must contain a JSON object or an array of objects".to_string(),
        )),
    }
}

/// Parses and evaluates a whole request document.
pub fn evaluate_document(raw: &str, market: &MarketAssumptions) -> Result<Vec<EvalOutcome>> {
    let requests = parse_requests(raw)?;
    debug!(count = requests.len(), "Parsed request document");
    Ok(evaluate_all(&requests, market))
}

/// Evaluates requests in parallel, keeping input order.
pub fn evaluate_all(requests: &[Value], market: &MarketAssumptions) -> Vec<EvalOutcome> {
    requests
        .par_iter()
        .enumerate()
        .map(|(index, raw)| evaluate_one(index, raw, market))
        .collect()
}

fn evaluate_one(index: usize, raw: &Value, market: &MarketAssumptions) -> EvalOutcome {
    let metric = raw.get("metric").and_then(Value::as_str).unwrap_or(MISSING_METRIC);

    let request = match MetricRequest::deserialize(raw) {
        Ok(request) => request,
        Err(err) => {
            warn!(index, metric, error = %err, "Rejected malformed request");
            return EvalOutcome::invalid_request(index, metric, err.to_string());
        }
    };

    match request.evaluate(market) {
        Ok(result) => EvalOutcome::success(index, metric, result),
        Err(err) => {
            debug!(index, metric, error = %err, "Metric outside its domain");
            EvalOutcome::domain_error(index, metric, &err)
        }
    }
}
