//! Benchmark log parsing.
//!
//! This module extracts run records from the plain-text log emitted by the
//! FIR benchmark harness.
//!
//! ## Log Format
//!
//! Each run record starts with a trigger line whose first whitespace token is
//! the literal `Running` and whose 5th token is the IR length in samples:
//!
//! ```text
//! Running with IR size: 128 samples
//! JuceConv: 4.21839
//! JuceFIR: 1.98215
//! InnerProdFIR: 1.52774
//! InnerProdNoWrapFIR: 1.3462
//! SimdFIR: 0.80125
//! ```
//!
//! The trigger is followed by exactly one measurement line per configured
//! algorithm: a name terminated by a colon, then the measured processing
//! duration in milliseconds for the fixed audio workload. Durations are
//! converted to display speed values (`workload_seconds / duration_ms`) at
//! parse time. Blank lines may appear between records and are skipped by the
//! scanning caller; they never count toward the measurement lines.

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use log::debug;

/// The literal first token that announces a new run record.
pub const TRIGGER_TOKEN: &str = "Running";

/// 0-indexed position of the IR-size token on the trigger line.
const IR_SIZE_TOKEN: usize = 4;

/// One parsed benchmark run: an IR size plus one speed value per algorithm.
///
/// Immutable once built; consumed by [`ResultTable::record`].
///
/// [`ResultTable::record`]: crate::table::ResultTable::record
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// IR length in samples.
    pub ir_size: u32,
    /// `(algorithm name, speed value)` pairs in log order.
    pub timings: Vec<(String, f64)>,
}

/// Check whether a line announces a new run record.
///
/// A trigger line's first whitespace-delimited token equals
/// [`TRIGGER_TOKEN`]. Leading whitespace is ignored.
pub fn is_trigger(line: &str) -> bool {
    line.split_whitespace().next() == Some(TRIGGER_TOKEN)
}

/// Parse one run record starting at the trigger line `lines[idx]`.
///
/// The caller must have verified `is_trigger(lines[idx])`. On success,
/// returns the record together with the index of the first line after it
/// (`idx + N + 1` for N configured algorithms), so the caller's scan resumes
/// without re-reading consumed lines.
///
/// # Errors
///
/// - [`ReportError::MalformedTrigger`] if the IR-size token is absent or not
///   a positive integer.
/// - [`ReportError::MalformedMeasurement`] if the log ends before all N
///   measurement lines, or a measurement line has fewer than two tokens, or
///   its duration is not a positive number.
pub fn parse_record(
    lines: &[&str],
    idx: usize,
    config: &ReportConfig,
) -> Result<(RunRecord, usize)> {
    let trigger = lines[idx];
    debug_assert!(is_trigger(trigger), "caller must pass a trigger line");

    let ir_token = trigger
        .split_whitespace()
        .nth(IR_SIZE_TOKEN)
        .ok_or_else(|| ReportError::MalformedTrigger {
            line: idx + 1,
            message: format!(
                "expected an IR size as token {}, found end of line",
                IR_SIZE_TOKEN + 1
            ),
        })?;
    let ir_size: u32 = ir_token.parse().map_err(|_| ReportError::MalformedTrigger {
        line: idx + 1,
        message: format!("IR size token '{}' is not a positive integer", ir_token),
    })?;
    if ir_size == 0 {
        return Err(ReportError::MalformedTrigger {
            line: idx + 1,
            message: "IR size must be positive".to_string(),
        });
    }

    let count = config.measurements_per_record();
    let mut timings = Vec::with_capacity(count);
    for offset in 1..=count {
        let line_idx = idx + offset;
        let line = lines
            .get(line_idx)
            .ok_or_else(|| ReportError::MalformedMeasurement {
                line: line_idx + 1,
                message: format!(
                    "log ended after {} of {} measurement lines",
                    offset - 1,
                    count
                ),
            })?;
        timings.push(parse_measurement(line, line_idx, config.workload_seconds)?);
    }

    debug!(
        "parsed run record: IR size {} with {} timings",
        ir_size,
        timings.len()
    );

    Ok((RunRecord { ir_size, timings }, idx + count + 1))
}

/// Parse a single `Name: duration_ms` measurement line into a
/// `(name, speed)` pair.
fn parse_measurement(line: &str, line_idx: usize, workload_seconds: f64) -> Result<(String, f64)> {
    let mut tokens = line.split_whitespace();
    let (Some(name), Some(value)) = (tokens.next(), tokens.next()) else {
        return Err(ReportError::MalformedMeasurement {
            line: line_idx + 1,
            message: format!(
                "expected 'Name: value', found {} token(s)",
                line.split_whitespace().count()
            ),
        });
    };

    let duration_ms: f64 = value
        .parse()
        .map_err(|_| ReportError::MalformedMeasurement {
            line: line_idx + 1,
            message: format!("duration '{}' is not a number", value),
        })?;
    if !duration_ms.is_finite() || duration_ms <= 0.0 {
        return Err(ReportError::MalformedMeasurement {
            line: line_idx + 1,
            message: format!("duration '{}' is not a positive number", value),
        });
    }

    let name = name.strip_suffix(':').unwrap_or(name);
    Ok((name.to_string(), workload_seconds / duration_ms))
}
