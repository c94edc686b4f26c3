use crate::analysis::patterns::{extension_of, instruction_regex, is_simd};
use crate::analysis::types::{AnalysisOutput, Occurrence};
use crate::error::Result;
use crate::input;
use crate::utils::format::{format_number, format_percent};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

/// The instruction mnemonic of an objdump line, if the line holds one.
///
/// A line qualifies when it has at least two whitespace-separated fields and
/// the first one contains a colon (the address label). The mnemonic is the
/// first lowercase word of the whole line.
pub fn extract_instruction(line: &str) -> Option<&str> {
    let mut fields = line.split_whitespace();
    let first = fields.next()?;
    if fields.next().is_none() || !first.contains(':') {
        return None;
    }
    instruction_regex().find(line).map(|m| m.as_str())
}

/// Running counters of a single pass over a listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimdScan {
    pub lines: usize,
    pub total: usize,
    pub simd: usize,
    simd_frequency: BTreeMap<String, usize>,
}

impl SimdScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line. Lines without a mnemonic only bump `lines`.
    pub fn observe(&mut self, line: &str) {
        self.lines += 1;
        let Some(instr) = extract_instruction(line) else {
            return;
        };
        debug!("{}", instr);

        self.total += 1;
        if is_simd(instr) {
            self.simd += 1;
            *self.simd_frequency.entry(instr.to_string()).or_insert(0) += 1;
        }
    }

    pub fn into_output(self, file: &Path) -> AnalysisOutput {
        let mut occurrences: Vec<Occurrence> = self
            .simd_frequency
            .into_iter()
            .map(|(instruction, count)| Occurrence {
                extension: extension_of(&instruction).map_or("?", |e| e.name),
                instruction,
                count,
            })
            .collect();
        // stable: ties keep alphabetical order
        occurrences.sort_by(|a, b| b.count.cmp(&a.count));

        AnalysisOutput {
            file: file.to_path_buf(),
            lines_scanned: self.lines,
            simd: self.simd,
            total: self.total,
            occurrences,
        }
    }
}

/// Classify every line of `reader`. `path` labels errors and the output.
pub fn scan_disassembly<R: BufRead>(reader: R, path: &Path) -> Result<AnalysisOutput> {
    let mut scan = SimdScan::new();
    input::for_each_line(reader, path, |line| scan.observe(line))?;
    info!(
        file = %path.display(),
        lines = scan.lines,
        total = scan.total,
        simd = scan.simd,
        "disassembly scanned"
    );
    Ok(scan.into_output(path))
}

pub fn analyze_file(path: &Path) -> Result<AnalysisOutput> {
    scan_disassembly(input::open(path)?, path)
}

/// The plain report printed after a successful scan.
pub fn report_lines(output: &AnalysisOutput) -> Vec<String> {
    vec![
        "The result is:".to_string(),
        format!("{} SIMD instructions", output.simd),
        format!("{} Total instructions", output.total),
    ]
}

pub fn summary_title(output: &AnalysisOutput) -> String {
    format!("SIMD Usage: {}", output.file.display())
}

/// Content of the boxed summary: one block of counts, one block listing the
/// most common SIMD mnemonics, and the closing share line.
pub fn summary_blocks(output: &AnalysisOutput, top: usize) -> (Vec<Vec<String>>, Vec<String>) {
    let mut set_blocks = Vec::new();

    set_blocks.push(vec![
        format!("Lines scanned: {}", format_number(output.lines_scanned)),
        format!(
            "Total: {} instructions found",
            format_number(output.total)
        ),
        format!("SIMD: {} instructions found", format_number(output.simd)),
    ]);

    if !output.occurrences.is_empty() {
        let mut by_extension: BTreeMap<&str, usize> = BTreeMap::new();
        for occ in &output.occurrences {
            *by_extension.entry(occ.extension).or_insert(0) += occ.count;
        }
        let mut block: Vec<String> = by_extension
            .iter()
            .map(|(ext, count)| format!("{}: {} instructions found", ext, format_number(*count)))
            .collect();

        let common: Vec<String> = output
            .occurrences
            .iter()
            .take(top)
            .map(|occ| format!("{} ({})", occ.instruction, format_number(occ.count)))
            .collect();
        block.push(format!("  Most common: {}", common.join(", ")));
        set_blocks.push(block);
    }

    let summary_lines = if output.total == 0 {
        vec![String::from(
            "No instructions found in the object dump.",
        )]
    } else {
        vec![format!(
            "Total SIMD share: {} of {} instructions ({})",
            format_number(output.simd),
            format_number(output.total),
            format_percent(output.simd_percent())
        )]
    };

    (set_blocks, summary_lines)
}
