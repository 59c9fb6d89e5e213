//! Command-line front end for PayCompute.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;

use paycompute::audit::AuditLog;
use paycompute::config::ConfigLoader;
use paycompute::ingest::{load_table, load_wage_mapping};
use paycompute::models::{CheckOutcome, PayPeriod};
use paycompute::processing::{PayrollOutcome, PayrollProcessor, PayrollRequest};

#[derive(Parser)]
#[command(name = "paycompute")]
#[command(about = "Convert a payroll deduction sheet into a spot-bonus upload CSV")]
#[command(version)]
struct Args {
    /// Payroll workbook or CSV (row 1: wage codes, row 3 onward: staff rows)
    #[arg(short, long)]
    input: PathBuf,

    /// Wage type mapping file (defaults to the configured path)
    #[arg(short, long)]
    mapping: Option<PathBuf>,

    /// Pay month, 1-12
    #[arg(long)]
    month: u32,

    /// Pay year
    #[arg(long)]
    year: i32,

    /// Name of the upload file, without the .csv extension
    #[arg(short, long, default_value = "1")]
    output_name: String,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Directory the upload file is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not append to the download audit log
    #[arg(long)]
    no_audit: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(args.verbose) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Returns whether the upload file was released.
fn run(args: &Args) -> anyhow::Result<bool> {
    if args.output_name.trim().is_empty() || args.output_name.contains(['/', '\\']) {
        bail!("output name must be a plain file name: '{}'", args.output_name);
    }

    let settings = ConfigLoader::load_or_default(args.config.as_ref())?.into_settings();
    let period = PayPeriod::new(args.month, args.year, &settings)?;

    let mapping_path = args
        .mapping
        .clone()
        .unwrap_or_else(|| settings.wage_mapping_path.clone());
    let mapping = load_wage_mapping(&mapping_path)?;
    let table = load_table(&args.input, args.sheet.as_deref())?;

    let mut processor = PayrollProcessor::new(settings.clone());
    if !args.no_audit {
        processor = processor.with_audit_log(AuditLog::new(&settings.audit_log_path));
    }

    let outcome = processor.process(&PayrollRequest {
        table: &table,
        mapping: &mapping,
        period,
        output_name: &args.output_name,
    })?;

    print_outcome(&outcome, &settings.currency);

    if !outcome.ready_to_download {
        println!();
        println!("Fix the errors above before downloading. No file was written.");
        return Ok(false);
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let out_path = args.out_dir.join(&outcome.filename);
    fs::write(&out_path, &outcome.csv)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    info!(run_id = %outcome.run_id, path = %out_path.display(), "Wrote upload file");
    println!();
    println!("Wrote {} ({} records)", out_path.display(), outcome.records.len());
    Ok(true)
}

fn print_outcome(outcome: &PayrollOutcome, currency: &str) {
    for check in &outcome.checks {
        print_check(check);
    }

    if let Some(report) = &outcome.report {
        println!();
        println!("Summary");
        println!("  Records:          {}", report.total_records);
        println!("  Employees:        {}", report.unique_employees);
        println!("  Components:       {}", report.unique_components);
        println!("  Total amount:     {:.2} {}", report.total_amount, currency);
        println!("  Average amount:   {:.2} {}", report.avg_amount, currency);
        println!(
            "  Range:            {:.2} - {:.2} {}",
            report.min_amount, report.max_amount, currency
        );
    }

    if !outcome.skipped_rows.is_empty() {
        println!("  Rows without Staff ID skipped: {}", outcome.skipped_rows.len());
    }

    let skipped = outcome.skip_counts();
    if skipped.total() > 0 {
        println!("  Mapped cells skipped: {}", skipped.total());
        println!("    Blank:            {}", skipped.blank);
        println!("    Not a number:     {}", skipped.non_numeric);
        println!("    Zero or negative: {}", skipped.non_positive);
    }
}

fn print_check(check: &CheckOutcome) {
    let status = if !check.passed() {
        "FAILED"
    } else if check.warnings.is_empty() {
        "passed"
    } else {
        "passed with warnings"
    };
    println!("{}: {}", check.check.title(), status);
    for error in &check.errors {
        println!("  ERROR: {}", error);
    }
    for warning in &check.warnings {
        println!("  WARNING: {}", warning);
    }
}
