//! The seven Kyber sub-operations timed by the batch benchmark.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    GenA,
    IndcpaKeypair,
    IndcpaEnc,
    KeypairDerand,
    Keypair,
    Encaps,
    Decaps,
}

impl Operation {
    /// Report order.
    pub const ALL: [Operation; 7] = [
        Operation::GenA,
        Operation::IndcpaKeypair,
        Operation::IndcpaEnc,
        Operation::KeypairDerand,
        Operation::Keypair,
        Operation::Encaps,
        Operation::Decaps,
    ];

    /// Label line announcing this operation in the log, trailing colon included.
    pub fn label(self) -> &'static str {
        match self {
            Operation::GenA => "gen_a:",
            Operation::IndcpaKeypair => "indcpa_keypair:",
            Operation::IndcpaEnc => "indcpa_enc:",
            Operation::KeypairDerand => "kyber_keypair_derand:",
            Operation::Keypair => "kyber_keypair:",
            Operation::Encaps => "kyber_encaps:",
            Operation::Decaps => "kyber_decaps:",
        }
    }

    /// Exact match against a trimmed label line.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.label() == label)
    }

    /// Prefix of the `avg:` report line.
    pub fn avg_caption(self) -> &'static str {
        match self {
            Operation::GenA => "gen_a avg:",
            Operation::IndcpaKeypair => "indcpa keypair avg:",
            Operation::IndcpaEnc => "indcpa enc avg:",
            Operation::KeypairDerand => "keypair_derand avg:",
            Operation::Keypair => "keypair avg:",
            Operation::Encaps => "encaps avg:",
            Operation::Decaps => "decaps avg:",
        }
    }

    /// Prefix of the `stddev:` report line. The last four carry a doubled
    /// colon; downstream scripts match on it.
    pub fn stddev_caption(self) -> &'static str {
        match self {
            Operation::GenA => "gen_a stddev:",
            Operation::IndcpaKeypair => "indcpa_keypair stddev:",
            Operation::IndcpaEnc => "indcpa_enc stddev:",
            Operation::KeypairDerand => "keypair_derand stddev::",
            Operation::Keypair => "keypair stddev::",
            Operation::Encaps => "encaps stddev::",
            Operation::Decaps => "decaps stddev::",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end_matches(':'))
    }
}
