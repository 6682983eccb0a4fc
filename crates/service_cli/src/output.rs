//! Rendering of evaluation outcomes as JSON or as a table.
//!
//! Non-finite numbers (the unbounded velocity of a zero growth base, an
//! infinite Sharpe ratio at zero volatility) are rendered as the strings
//! `"Infinity"`, `"-Infinity"` and `"NaN"` instead of JSON `null`.
//!
//! Composite results are emitted as the engine's serialised breakdown (for
//! example `{"total_score", "moat_rating", "components"}` for the moat score);
//! every other record is emitted as `{"value", "label", "components"}`.

use metrics_core::{DomainError, MetricRecord, MetricResult};
use serde_json::{Map, Value};

use crate::config::OutputFormat;
use crate::request::Evaluation;
use crate::Result;

/// Condition reported for requests that could not be parsed.
pub const INVALID_REQUEST: &str = "InvalidRequest";

/// Result or failure of one request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The metric evaluated
    Success(Evaluation),
    /// The request was rejected
    Failure {
        /// Machine-readable condition
        condition: String,
        /// Human-readable message
        message: String,
    },
}

/// Outcome of one request in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalOutcome {
    /// Position of the request in the input
    pub index: usize,
    /// Metric name as written in the request
    pub metric: String,
    /// What happened
    pub outcome: Outcome,
}

impl EvalOutcome {
    pub fn success(index: usize, metric: impl Into<String>, evaluation: impl Into<Evaluation>) -> Self {
        Self {
            index,
            metric: metric.into(),
            outcome: Outcome::Success(evaluation.into()),
        }
    }

    pub fn domain_error(index: usize, metric: impl Into<String>, err: &DomainError) -> Self {
        Self {
            index,
            metric: metric.into(),
            outcome: Outcome::Failure {
                condition: err.condition().to_string(),
                message: err.to_string(),
            },
        }
    }

    pub fn invalid_request(index: usize, metric: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            index,
            metric: metric.into(),
            outcome: Outcome::Failure {
                condition: INVALID_REQUEST.to_string(),
                message: message.into(),
            },
        }
    }

    /// Whether the request evaluated.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// The result, if the request evaluated.
    pub fn result(&self) -> Option<&MetricResult> {
        match &self.outcome {
            Outcome::Success(evaluation) => Some(&evaluation.result),
            Outcome::Failure { .. } => None,
        }
    }

    /// JSON form: `{"index", "metric", "result"}` or `{"index", "metric", "error"}`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("index".to_string(), Value::from(self.index));
        obj.insert("metric".to_string(), Value::String(self.metric.clone()));
        match &self.outcome {
            Outcome::Success(evaluation) => {
                obj.insert("result".to_string(), evaluation_to_json(evaluation));
            }
            Outcome::Failure { condition, message } => {
                let mut error = Map::new();
                error.insert("condition".to_string(), Value::String(condition.clone()));
                error.insert("message".to_string(), Value::String(message.clone()));
                obj.insert("error".to_string(), Value::Object(error));
            }
        }
        Value::Object(obj)
    }
}

fn non_finite_label(x: f64) -> &'static str {
    if x.is_nan() {
        "NaN"
    } else if x > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

/// A JSON number, or a label string when `x` is not finite.
pub fn number_to_json(x: f64) -> Value {
    serde_json::Number::from_f64(x)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(non_finite_label(x).to_string()))
}

fn record_to_json(record: &MetricRecord) -> Value {
    let mut obj = Map::new();
    obj.insert("value".to_string(), number_to_json(record.value));
    if let Some(label) = &record.label {
        obj.insert("label".to_string(), Value::String(label.clone()));
    }
    let components = record
        .components
        .iter()
        .map(|(name, value)| (name.clone(), number_to_json(*value)))
        .collect();
    obj.insert("components".to_string(), Value::Object(components));
    Value::Object(obj)
}

/// JSON form of a metric result.
pub fn result_to_json(result: &MetricResult) -> Value {
    match result {
        MetricResult::Value(value) => number_to_json(*value),
        MetricResult::Record(record) => record_to_json(record),
    }
}

/// Puts non-finite labels back where serialisation left `null`.
///
/// A `null` under a component's key takes that component's value; any other
/// `null` takes the record's headline value.
fn restore_non_finite(value: &mut Value, key: Option<&str>, record: &MetricRecord) {
    match value {
        Value::Object(map) => {
            for (name, field) in map.iter_mut() {
                restore_non_finite(field, Some(name.as_str()), record);
            }
        }
        Value::Array(items) => {
            for item in items {
                restore_non_finite(item, key, record);
            }
        }
        Value::Null => {
            let x = key
                .and_then(|name| record.component(name))
                .filter(|x| !x.is_finite())
                .unwrap_or(record.value);
            if !x.is_finite() {
                *value = Value::String(non_finite_label(x).to_string());
            }
        }
        _ => {}
    }
}

/// JSON form of a successful evaluation.
pub fn evaluation_to_json(evaluation: &Evaluation) -> Value {
    match (&evaluation.document, &evaluation.result) {
        (Some(document), MetricResult::Record(record)) => {
            let mut document = document.clone();
            restore_non_finite(&mut document, None, record);
            document
        }
        (Some(document), MetricResult::Value(_)) => document.clone(),
        (None, result) => result_to_json(result),
    }
}

/// Renders a batch as a pretty-printed JSON array.
pub fn render_json(outcomes: &[EvalOutcome]) -> Result<String> {
    let array = Value::Array(outcomes.iter().map(EvalOutcome::to_json).collect());
    Ok(serde_json::to_string_pretty(&array)?)
}

fn format_number(x: f64) -> String {
    if x.is_finite() {
        format!("{x:.6}")
    } else {
        non_finite_label(x).to_string()
    }
}

fn detail(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success(Evaluation {
            result: MetricResult::Value(_),
            ..
        }) => String::new(),
        Outcome::Success(Evaluation {
            result: MetricResult::Record(record),
            ..
        }) => {
            let components = record
                .components
                .iter()
                .map(|(name, value)| format!("{name}={}", format_number(*value)))
                .collect::<Vec<_>>()
                .join(", ");
            match &record.label {
                Some(label) if components.is_empty() => label.clone(),
                Some(label) => format!("{label}; {components}"),
                None => components,
            }
        }
        Outcome::Failure { condition, message } => format!("{condition}: {message}"),
    }
}

fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(mid))
}

fn line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!(" {cell}{} ", " ".repeat(width.saturating_sub(cell.chars().count()))))
        .collect();
    format!("│{}│", padded.join("│"))
}

/// Draws rows inside a box, sizing each column to its widest cell.
pub fn draw_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let placeholder;
    let rows = if rows.is_empty() {
        let mut row = vec![String::new(); header.len()];
        if let Some(first) = row.first_mut() {
            *first = "(no data)".to_string();
        }
        placeholder = vec![row];
        placeholder.as_slice()
    } else {
        rows
    };

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![
        rule(&widths, "┌", "┬", "┐"),
        line(&widths, header.iter().copied()),
        rule(&widths, "├", "┼", "┤"),
    ];
    lines.extend(rows.iter().map(|row| line(&widths, row.iter().map(String::as_str))));
    lines.push(rule(&widths, "└", "┴", "┘"));
    lines.join("\n")
}

/// Renders a batch as a table of index, metric, value and detail.
pub fn render_table(outcomes: &[EvalOutcome]) -> String {
    let rows: Vec<Vec<String>> = outcomes
        .iter()
        .map(|o| {
            let value = o.result().map_or_else(|| "error".to_string(), |r| format_number(r.value()));
            vec![o.index.to_string(), o.metric.clone(), value, detail(&o.outcome)]
        })
        .collect();
    draw_table(&["#", "Metric", "Value", "Detail"], &rows)
}

/// Renders a batch in `format`.
pub fn render(outcomes: &[EvalOutcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(outcomes),
        OutputFormat::Table => Ok(render_table(outcomes)),
    }
}
