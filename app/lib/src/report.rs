//! Report driver: process one log source end to end.
//!
//! The driver owns the scan loop: it walks every line of a log, skips
//! blanks, parses run records at trigger lines, classifies each record by
//! its IR size, and accumulates the two bucketed tables. It then renders one
//! chart per non-empty bucket and writes the Markdown summary.
//!
//! Multiple sources are processed by calling [`run`] once per source; each
//! call owns an independent pair of tables, so sources never share state.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::chart::render_chart;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::parse::{is_trigger, parse_record};
use crate::summary::markdown_summary;
use crate::table::{classify, Bucket, ResultTable};

/// Everything produced by one [`run`] over one log source.
#[derive(Debug)]
pub struct ReportArtifacts {
    /// Accumulated table of power-of-two IR sizes.
    pub pow2: ResultTable,
    /// Accumulated table of all other IR sizes.
    pub other: ResultTable,
    /// Paths of the chart images written (one per non-empty bucket).
    pub charts: Vec<PathBuf>,
    /// Path of the Markdown summary.
    pub summary: PathBuf,
}

/// Scan a full log text into its two bucketed result tables.
///
/// Blank lines (after trimming) are skipped without reaching the trigger
/// check. Non-blank, non-trigger lines advance the scan by one. Any parse
/// failure aborts the scan; the log is a trusted batch artifact with no
/// defined recovery point.
pub fn scan_log(text: &str, config: &ReportConfig) -> Result<(ResultTable, ResultTable)> {
    let lines: Vec<&str> = text.lines().collect();
    let mut pow2 = ResultTable::new();
    let mut other = ResultTable::new();

    let mut idx = 0;
    while idx < lines.len() {
        let line = lines[idx].trim();
        if line.is_empty() || !is_trigger(line) {
            idx += 1;
            continue;
        }

        let (record, next) = parse_record(&lines, idx, config)?;
        match classify(record.ir_size) {
            Bucket::Pow2 => pow2.record(record),
            Bucket::Other => other.record(record),
        }
        idx = next;
    }

    info!(
        "scanned {} lines: {} power-of-two sizes, {} other sizes",
        lines.len(),
        pow2.len(),
        other.len()
    );
    Ok((pow2, other))
}

/// Process one log source: read, scan, chart, summarize.
///
/// Charts are written to `<output_dir>/<stem>_pow2.svg` and
/// `<output_dir>/<stem>_other.svg` (the stem comes from the source file
/// name); the Markdown summary goes to `<output_dir>/<stem>_summary.md`.
/// Chart titles are `"<bucket> Benchmarks (<label>)"`. An empty bucket gets
/// a warning instead of a degenerate empty chart.
///
/// # Errors
///
/// Any parse, render, or I/O failure aborts the run for this source.
pub fn run(
    source: &Path,
    label: &str,
    output_dir: &Path,
    config: &ReportConfig,
) -> Result<ReportArtifacts> {
    let text = fs::read_to_string(source)?;
    let (pow2, other) = scan_log(&text, config)?;

    fs::create_dir_all(output_dir)?;
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "log".to_string());

    let mut charts = Vec::new();
    for (bucket, table) in [(Bucket::Pow2, &pow2), (Bucket::Other, &other)] {
        if table.is_empty() {
            warn!(
                "{}: no {} IR sizes in log, skipping chart",
                source.display(),
                bucket.display_name()
            );
            continue;
        }
        let title = format!("{} Benchmarks ({})", bucket.display_name(), label);
        let path = output_dir.join(format!("{}_{}.svg", stem, bucket.as_str()));
        render_chart(table, config, &title, Some(&path))?;
        charts.push(path);
    }

    let summary = output_dir.join(format!("{}_summary.md", stem));
    fs::write(&summary, markdown_summary(label, &pow2, &other, config))?;
    info!("wrote summary: {}", summary.display());

    Ok(ReportArtifacts {
        pow2,
        other,
        charts,
        summary,
    })
}
