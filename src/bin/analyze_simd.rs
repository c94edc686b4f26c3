//! analyze_simd: share of SIMD instructions in an `objdump -d` listing.
//!
//! Run: `analyze_simd kyber.dump.txt`

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use kyber_bench_utils::analysis::collect::{
    report_lines, scan_disassembly, summary_blocks, summary_title,
};
use kyber_bench_utils::utils::print::{print_boxed_section, print_instruction_sets};
use kyber_bench_utils::{input, logging};

/// Number of mnemonics listed under "Most common" in the boxed summary.
const TOP_MNEMONICS: usize = 5;

/// Count how many instructions of a disassembly listing are SIMD instructions
#[derive(Parser, Debug)]
#[command(name = "analyze_simd")]
#[command(version)]
#[command(about = "Find the percentage of an objdump listing's instructions that are SIMD instructions", long_about = None)]
struct Cli {
    /// Path to the .txt produced by objdump
    #[arg(value_name = "DUMP", required_unless_present = "info")]
    dump: Option<PathBuf>,

    /// Also print a boxed summary with the SIMD share and most common mnemonics
    #[arg(long)]
    boxed: bool,

    /// Print the recognized SIMD instruction sets and exit
    #[arg(long)]
    info: bool,

    /// More diagnostics on stderr (-v info, -vv every instruction, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if cli.info {
        print_instruction_sets();
        return Ok(());
    }

    let Some(path) = cli.dump else {
        bail!("Usage: analyze_simd <path to .txt from objdump>");
    };

    let reader = input::open(&path)?;
    println!("Successfully opened object dump. Investigating...");

    let output = scan_disassembly(reader, &path)
        .with_context(|| format!("scanning {}", path.display()))?;

    for line in report_lines(&output) {
        println!("{}", line);
    }

    if cli.boxed {
        let (blocks, summary) = summary_blocks(&output, TOP_MNEMONICS);
        print_boxed_section(&blocks, &summary, Some(&summary_title(&output)));
    }

    Ok(())
}
