//! Configuration types for the report generator.
//!
//! This module provides the configuration struct that fixes the benchmark
//! harness constants: how many algorithms appear in each run record, their
//! display names, the audio workload length, and the chart bar width.

/// Configuration for log parsing and chart layout.
///
/// The defaults match the reference JUCE FIR benchmark harness: five
/// algorithms per run record, a 10-second audio workload, and 0.15-unit
/// chart bars.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Algorithm display names, in legend order.
    ///
    /// Each run record must contain exactly one measurement line per entry,
    /// in this order. The names are matched against the first token of each
    /// measurement line (with its trailing colon stripped).
    pub algorithms: Vec<String>,

    /// Length of the benchmarked audio workload, in seconds.
    ///
    /// Speed values are derived as `workload_seconds / duration_ms`, so a
    /// higher value means more audio processed per millisecond.
    ///
    /// Default: 10.0
    pub workload_seconds: f64,

    /// Width of one chart bar, in X-axis units.
    ///
    /// Default: 0.15
    pub bar_width: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            algorithms: [
                "JuceConv",
                "JuceFIR",
                "InnerProdFIR",
                "InnerProdNoWrapFIR",
                "SimdFIR",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            workload_seconds: 10.0,
            bar_width: 0.15,
        }
    }
}

impl ReportConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm display names (and thereby the measurement-line
    /// count per record).
    ///
    /// # Panics
    ///
    /// Panics if `algorithms` is empty.
    pub fn with_algorithms<I, S>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.algorithms = algorithms.into_iter().map(Into::into).collect();
        assert!(
            !self.algorithms.is_empty(),
            "at least one algorithm is required"
        );
        self
    }

    /// Set the audio workload length in seconds.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is not strictly positive.
    pub fn with_workload_seconds(mut self, seconds: f64) -> Self {
        assert!(seconds > 0.0, "workload length must be positive");
        self.workload_seconds = seconds;
        self
    }

    /// Set the chart bar width in X-axis units.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not strictly positive.
    pub fn with_bar_width(mut self, width: f64) -> Self {
        assert!(width > 0.0, "bar width must be positive");
        self.bar_width = width;
        self
    }

    /// Number of measurement lines expected after each trigger line.
    pub fn measurements_per_record(&self) -> usize {
        self.algorithms.len()
    }
}
