//! Result classification and accumulation.
//!
//! Run records are partitioned into two buckets, power-of-two IR sizes and
//! everything else, and accumulated into per-bucket [`ResultTable`]s that
//! keep IR sizes in first-seen order. The tables are the direct input to
//! chart rendering and summary export.

use crate::parse::RunRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Which of the two result tables a run record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// IR size is an exact power of two.
    Pow2,
    /// Any other IR size (the harness sweeps primes and near-powers).
    Other,
}

impl Bucket {
    /// Short identifier used in artifact file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Pow2 => "pow2",
            Bucket::Other => "other",
        }
    }

    /// Human-readable name used in chart titles and summary headings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Bucket::Pow2 => "Power of 2",
            Bucket::Other => "Prime",
        }
    }
}

/// Classify an IR size into its bucket.
///
/// Uses an exact bit-count test: a positive integer is a power of two iff it
/// has exactly one set bit. This is exact across the whole `u32` range,
/// unlike a floating-point `log2` check which can mis-round near large
/// powers of two.
pub fn classify(ir_size: u32) -> Bucket {
    if ir_size.count_ones() == 1 {
        Bucket::Pow2
    } else {
        Bucket::Other
    }
}

/// Accumulated speed values for one bucket of a single log source.
///
/// IR sizes keep their first-seen order from the log scan; chart X positions
/// reproduce that order rather than sorting numerically, matching the
/// reference figure layout. Recording the same `(ir_size, algorithm)` pair
/// twice overwrites the earlier value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultTable {
    /// IR sizes in first-seen order.
    ir_sizes: Vec<u32>,
    /// Speed values: IR size -> algorithm name -> speed.
    entries: HashMap<u32, HashMap<String, f64>>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one run into the table.
    ///
    /// The IR size is appended to the ordered list on first occurrence; each
    /// `(algorithm, speed)` pair is inserted, overwriting any previous value
    /// for that pair.
    pub fn record(&mut self, record: RunRecord) {
        if !self.entries.contains_key(&record.ir_size) {
            self.ir_sizes.push(record.ir_size);
        }
        let row = self.entries.entry(record.ir_size).or_default();
        for (name, speed) in record.timings {
            row.insert(name, speed);
        }
    }

    /// IR sizes in first-seen order.
    pub fn ir_sizes(&self) -> &[u32] {
        &self.ir_sizes
    }

    /// Look up the speed value for one `(ir_size, algorithm)` cell.
    pub fn speed(&self, ir_size: u32, algorithm: &str) -> Option<f64> {
        self.entries
            .get(&ir_size)
            .and_then(|row| row.get(algorithm))
            .copied()
    }

    /// Whether the table holds no IR sizes.
    pub fn is_empty(&self) -> bool {
        self.ir_sizes.is_empty()
    }

    /// Number of distinct IR sizes recorded.
    pub fn len(&self) -> usize {
        self.ir_sizes.len()
    }
}
