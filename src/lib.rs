//! Offline analysis of artifacts produced by the Kyber benchmark harness.
//!
//! Two independent scanners live here:
//! - [`analysis`] counts how many instructions of an `objdump -d` listing are
//!   SIMD instructions (the `analyze_simd` binary).
//! - [`benchlog`] aggregates the per-iteration timing figures of a captured
//!   batch-job log into mean and standard deviation per operation (the
//!   `testrun_sum_std` binary).

pub mod analysis {
    pub mod collect;
    pub mod patterns;
    pub mod types;
}

pub mod benchlog {
    pub mod collect;
    pub mod operation;
    pub mod stats;
}

pub mod utils {
    pub mod format;
    pub mod print;
}

pub mod error;
pub mod input;
pub mod logging;

pub use error::{Error, Result};
