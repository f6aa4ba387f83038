//! # FIR Benchmark Report Library
//!
//! Report generator for the logs produced by a JUCE-based FIR filter
//! benchmark harness. The harness sweeps impulse-response (IR) lengths and
//! prints one run record per length: a trigger line carrying the IR size
//! followed by one timing line per algorithm. This library parses those
//! records, buckets them into power-of-two vs other ("prime") IR sizes, and
//! renders one grouped bar chart per bucket comparing algorithm speed.
//!
//! ## Pipeline
//!
//! Data flows one way: raw log text → [`RunRecord`]s → two bucketed
//! [`ResultTable`]s → SVG charts and a Markdown summary.
//!
//! - [`parse`] — trigger detection and multi-line record extraction
//! - [`table`] — power-of-two classification and insertion-ordered
//!   accumulation
//! - [`chart`] — grouped bar chart rendering (`plotters`, SVG backend)
//! - [`summary`] — Markdown and JSON exports
//! - [`report`] — the driver tying one log source end to end
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use firbench_report::{run, ReportConfig};
//! use std::path::Path;
//!
//! let config = ReportConfig::default();
//! let artifacts = run(
//!     Path::new("results/results_win.txt"),
//!     "Windows",
//!     Path::new("results/figures"),
//!     &config,
//! )?;
//! println!("{} charts written", artifacts.charts.len());
//! ```
//!
//! ### Scanning without rendering
//!
//! ```rust
//! use firbench_report::{scan_log, ReportConfig};
//!
//! let log = "Running with IR size: 16 samples\n\
//!            JuceConv: 4.0\nJuceFIR: 2.0\nInnerProdFIR: 1.6\n\
//!            InnerProdNoWrapFIR: 1.25\nSimdFIR: 0.8\n";
//! let (pow2, other) = scan_log(log, &ReportConfig::default()).unwrap();
//! assert_eq!(pow2.ir_sizes(), &[16]);
//! assert!(other.is_empty());
//! ```
//!
//! ## Error Model
//!
//! Logs are trusted, machine-generated batch artifacts: there are no
//! retries and no partial recovery. Every malformed line, ragged table, or
//! I/O failure aborts the run for its source with a descriptive
//! [`ReportError`].

pub mod chart;
pub mod config;
pub mod error;
pub mod parse;
pub mod report;
pub mod summary;
pub mod table;

pub use chart::render_chart;
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use parse::{is_trigger, parse_record, RunRecord};
pub use report::{run, scan_log, ReportArtifacts};
pub use summary::{markdown_summary, summary_json};
pub use table::{classify, Bucket, ResultTable};
