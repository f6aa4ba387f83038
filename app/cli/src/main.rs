use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use firbench_report::{markdown_summary, scan_log, summary_json, ReportConfig};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// FIR benchmark report generator: parse harness logs, render charts
#[derive(Parser)]
#[command(name = "firbench")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one or more benchmark logs and render charts plus summaries
    Report {
        /// Benchmark log files, one per platform/source
        #[arg(value_name = "LOG", required = true)]
        logs: Vec<PathBuf>,

        /// Directory for the generated charts and summaries
        #[arg(short, long, value_name = "DIR", default_value = "figures")]
        output_dir: PathBuf,

        /// Chart title label for each log, in order (defaults to file stems)
        #[arg(short, long, value_name = "LABEL")]
        label: Vec<String>,
    },

    /// Parse a benchmark log and print the bucketed tables without rendering
    Inspect {
        /// Benchmark log file
        #[arg(value_name = "LOG")]
        log: PathBuf,

        /// Emit JSON instead of a Markdown table
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = ReportConfig::default();

    match cli.command {
        Commands::Report {
            logs,
            output_dir,
            label,
        } => report_command(&logs, &output_dir, &label, &config, cli.quiet)?,
        Commands::Inspect { log, json } => inspect_command(&log, json, &config)?,
    }

    Ok(())
}

/// Set up logging based on verbosity flags
fn setup_logging(verbose: bool, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logging initialized at {} level", log_level);
}

/// Chart title label for a log: explicit label if given, file stem otherwise
fn source_label(log: &Path, labels: &[String], index: usize) -> String {
    labels.get(index).cloned().unwrap_or_else(|| {
        log.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("source {}", index + 1))
    })
}

/// Execute the report command
fn report_command(
    logs: &[PathBuf],
    output_dir: &Path,
    labels: &[String],
    config: &ReportConfig,
    quiet: bool,
) -> Result<()> {
    if labels.len() > logs.len() {
        bail!(
            "{} labels given for {} logs",
            labels.len(),
            logs.len()
        );
    }

    let start_time = Instant::now();
    info!("Generating report for {} log(s)", logs.len());

    let progress = create_progress_bar(quiet, logs.len() as u64);
    let mut chart_count = 0;
    for (index, log) in logs.iter().enumerate() {
        let label = source_label(log, labels, index);
        progress.set_message(label.clone());

        let artifacts = firbench_report::run(log, &label, output_dir, config)
            .with_context(|| format!("Failed to process log: {}", log.display()))?;
        chart_count += artifacts.charts.len();

        progress.inc(1);
    }
    progress.finish_and_clear();

    let total_duration = start_time.elapsed();
    if !quiet {
        eprintln!("✓ Report complete");
        eprintln!("  Logs:    {}", logs.len());
        eprintln!("  Charts:  {}", chart_count);
        eprintln!("  Output:  {}", output_dir.display());
        eprintln!("  Time:    {:.3}s", total_duration.as_secs_f64());
    }

    info!(
        "Report completed in {:.3}s",
        total_duration.as_secs_f64()
    );

    Ok(())
}

/// Execute the inspect command
fn inspect_command(log: &Path, json: bool, config: &ReportConfig) -> Result<()> {
    let text = fs::read_to_string(log)
        .with_context(|| format!("Failed to read log file: {}", log.display()))?;

    let (pow2, other) =
        scan_log(&text, config).with_context(|| format!("Failed to parse log: {}", log.display()))?;

    let label = source_label(log, &[], 0);
    let output = if json {
        summary_json(&label, &pow2, &other).context("Failed to serialize results")?
    } else {
        markdown_summary(&label, &pow2, &other, config)
    };

    println!("{}", output);
    Ok(())
}

/// Create a progress bar across log sources, hidden in quiet mode
fn create_progress_bar(quiet: bool, sources: u64) -> ProgressBar {
    if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(sources);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:30.green} {pos}/{len} {msg}")
                .unwrap(),
        );
        pb
    }
}
