//! Metric outputs.
//!
//! A metric evaluates either to a single number or to a structured record.
//! Records always carry the aggregate together with the named components
//! that produced it, so callers can explain a score rather than only report it.

use std::collections::BTreeMap;

use crate::traits::Breakdown;

/// Structured output of a composite metric.
///
/// # Example
///
/// ```
/// use metrics_core::types::MetricRecord;
///
/// let record = MetricRecord::new(1.0)
///     .with_component("lp_distribution", 0.75)
///     .with_component("gp_distribution", 0.25);
/// assert_eq!(record.component("gp_distribution"), Some(0.25));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRecord {
    /// Aggregate value of the metric.
    pub value: f64,
    /// Categorical label derived from the aggregate, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<String>,
    /// Named components keyed by their stable names.
    pub components: BTreeMap<String, f64>,
}

impl MetricRecord {
    /// Creates a record with an aggregate and no components.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            components: BTreeMap::new(),
        }
    }

    /// Adds a named component.
    pub fn with_component(mut self, name: impl Into<String>, value: f64) -> Self {
        self.components.insert(name.into(), value);
        self
    }

    /// Attaches a categorical label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Looks up a component by name.
    pub fn component(&self, name: &str) -> Option<f64> {
        self.components.get(name).copied()
    }

    /// Builds a record from any type exposing a [`Breakdown`].
    pub fn from_breakdown<B: Breakdown + ?Sized>(breakdown: &B) -> Self {
        let components = breakdown
            .components()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        Self {
            value: breakdown.aggregate(),
            label: breakdown.label().map(str::to_string),
            components,
        }
    }
}

/// Output of a single metric evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MetricResult {
    /// A single real number.
    Value(f64),
    /// A structured record of named real numbers.
    Record(MetricRecord),
}

impl MetricResult {
    /// Returns the scalar value, or the aggregate of a record.
    pub fn value(&self) -> f64 {
        match self {
            MetricResult::Value(v) => *v,
            MetricResult::Record(record) => record.value,
        }
    }

    /// Returns the record if this result is structured.
    pub fn as_record(&self) -> Option<&MetricRecord> {
        match self {
            MetricResult::Value(_) => None,
            MetricResult::Record(record) => Some(record),
        }
    }
}

impl From<f64> for MetricResult {
    fn from(value: f64) -> Self {
        MetricResult::Value(value)
    }
}

impl From<MetricRecord> for MetricResult {
    fn from(record: MetricRecord) -> Self {
        MetricResult::Record(record)
    }
}
