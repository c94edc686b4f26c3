use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutput {
    pub file: PathBuf,
    pub lines_scanned: usize,
    pub simd: usize,
    pub total: usize,
    pub occurrences: Vec<Occurrence>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub instruction: String,
    pub extension: &'static str,
    pub count: usize,
}

impl AnalysisOutput {
    /// SIMD share of all classified instructions, in percent.
    pub fn simd_percent(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.simd as f64 / self.total as f64 * 100.0)
        }
    }
}
