//! Composite metric exposure.

/// A composite metric that can explain its aggregate.
///
/// Implementors return the aggregate value together with the named
/// components that produced it. Component names are stable keys consumed by
/// serialisers and must not change between releases.
///
/// # Examples
/// ```
/// use metrics_core::traits::Breakdown;
/// use metrics_core::types::MetricRecord;
///
/// struct Earnings {
///     equity: f64,
///     debt: f64,
/// }
///
/// impl Breakdown for Earnings {
///     fn aggregate(&self) -> f64 {
///         self.equity + self.debt
///     }
///
///     fn components(&self) -> Vec<(&'static str, f64)> {
///         vec![("equity", self.equity), ("debt", self.debt)]
///     }
/// }
///
/// let record = MetricRecord::from_breakdown(&Earnings { equity: 8.0, debt: 2.0 });
/// assert_eq!(record.value, 10.0);
/// assert_eq!(record.components.len(), 2);
/// ```
pub trait Breakdown {
    /// The headline value of the metric.
    fn aggregate(&self) -> f64;

    /// Named components, in presentation order.
    fn components(&self) -> Vec<(&'static str, f64)>;

    /// Categorical label derived from the aggregate, if the metric has one.
    fn label(&self) -> Option<&str> {
        None
    }
}
