//! testrun_sum_std: average and standard deviation of Kyber batch job timings.
//!
//! Run: `testrun_sum_std slurm-1234.out`

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use kyber_bench_utils::benchlog::collect::scan_bench_log;
use kyber_bench_utils::benchlog::stats::BenchReport;
use kyber_bench_utils::utils::print::print_boxed_section;
use kyber_bench_utils::{input, logging};

/// Sum the per-iteration timings of a batch benchmark run
#[derive(Parser, Debug)]
#[command(name = "testrun_sum_std")]
#[command(version)]
#[command(about = "Average and standard deviation per Kyber operation from a batch job's STDOUT", long_about = None)]
struct Cli {
    /// Path to the captured STDOUT of the batch job (slurm .out file)
    #[arg(value_name = "LOG")]
    log: PathBuf,

    /// Also print a boxed per-operation table with sample counts
    #[arg(long)]
    boxed: bool,

    /// More diagnostics on stderr (-v info, -vv every sample, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let reader = input::open(&cli.log)?;
    println!("Successfully opened slurm STDOUT");

    let log = scan_bench_log(reader, &cli.log)
        .with_context(|| format!("scanning {}", cli.log.display()))?;
    let report = BenchReport::from_log(&log);

    for line in report.report_lines() {
        println!("{}", line);
    }

    if cli.boxed {
        let (blocks, summary) = report.summary_blocks();
        print_boxed_section(&blocks, &summary, Some("Kyber Batch Timings"));
    }

    Ok(())
}
