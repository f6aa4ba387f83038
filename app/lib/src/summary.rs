//! Summary exports for parsed benchmark results.
//!
//! Alongside the charts, each log source gets a Markdown summary table (one
//! row per IR size, one column per algorithm) and, on demand, a JSON export
//! of both bucketed tables for downstream tooling.

use serde::Serialize;
use std::fmt::Write;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::table::{Bucket, ResultTable};

/// Bucketed results of one log source in JSON-exportable form.
#[derive(Debug, Serialize)]
pub struct SourceSummary<'a> {
    /// Source label (platform name or file stem).
    pub label: &'a str,
    /// Table of power-of-two IR sizes.
    pub pow2: &'a ResultTable,
    /// Table of all other IR sizes.
    pub other: &'a ResultTable,
}

/// Serialize both bucketed tables of a source as pretty-printed JSON.
pub fn summary_json(label: &str, pow2: &ResultTable, other: &ResultTable) -> Result<String> {
    let summary = SourceSummary { label, pow2, other };
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Render the Markdown summary for one log source.
///
/// Tables keep the first-seen IR-size order, matching the charts. Cells
/// without a recorded value render as `n/a`; unlike chart rendering, the
/// summary tolerates ragged tables.
pub fn markdown_summary(
    label: &str,
    pow2: &ResultTable,
    other: &ResultTable,
    config: &ReportConfig,
) -> String {
    let mut out = String::new();
    writeln!(out, "# FIR Benchmark Summary: {}\n", label).unwrap();
    writeln!(
        out,
        "Speed values are seconds of audio processed per millisecond of \
         compute; higher is faster.\n"
    )
    .unwrap();

    write_bucket_table(&mut out, Bucket::Pow2, pow2, config);
    write_bucket_table(&mut out, Bucket::Other, other, config);
    out
}

fn write_bucket_table(out: &mut String, bucket: Bucket, table: &ResultTable, config: &ReportConfig) {
    writeln!(out, "## {} IR sizes\n", bucket.display_name()).unwrap();

    if table.is_empty() {
        writeln!(out, "_no records_\n").unwrap();
        return;
    }

    write!(out, "| IR length |").unwrap();
    for algorithm in &config.algorithms {
        write!(out, " {} |", algorithm).unwrap();
    }
    writeln!(out).unwrap();

    write!(out, "|-----------|").unwrap();
    for _ in &config.algorithms {
        write!(out, "---|").unwrap();
    }
    writeln!(out).unwrap();

    for &ir_size in table.ir_sizes() {
        write!(out, "| {} |", ir_size).unwrap();
        for algorithm in &config.algorithms {
            match table.speed(ir_size, algorithm) {
                Some(speed) => write!(out, " {:.3} |", speed).unwrap(),
                None => write!(out, " n/a |").unwrap(),
            }
        }
        writeln!(out).unwrap();
    }
    writeln!(out).unwrap();
}
