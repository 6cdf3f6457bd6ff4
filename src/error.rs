use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClusterError>;

/// Errors raised while indexing, scoring, partitioning or labeling a corpus.
///
/// Stemming never fails, so nothing here originates in `analysis::stemmer`.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Corpus or stopword file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Threshold N is zero, negative or not finite.
    #[error("threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),

    /// Any other rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No documents were built, so there is no denominator for the rarity weights.
    #[error("empty corpus: no documents to score")]
    EmptyCorpus,

    /// The indexer and the builder disagree on how many documents exist.
    #[error("document count mismatch: indexed {indexed}, built {built}")]
    DocumentCountMismatch { indexed: u64, built: usize },

    /// A document holds a stem the frequency table has never seen.
    #[error("stem `{0}` is missing from the frequency table")]
    UnknownStem(String),

    /// A cluster has fewer than two distinct stems, so no label pair exists.
    #[error("cluster {cluster} too small to label: {distinct_stems} distinct stem(s)")]
    ClusterTooSmall { cluster: usize, distinct_stems: usize },
}
