/// This crate groups short documents into clusters of related entries
/// and names each cluster with two words taken from its vocabulary.
pub mod analysis;
pub mod cluster;
pub mod config;
pub mod corpus;
pub mod error;
pub mod report;
pub mod utils;

/// Porter Stemmer
/// Reduces a lowercase word to its stem.
/// Words of one or two letters are returned unchanged, and `-bli`/`-logi`
/// map to `-ble`/`-log`.
///
/// The stemmer holds no state between calls.
pub use analysis::stemmer::PorterStemmer;

/// Stopword Set
/// Case-insensitive set of words dropped before stemming.
/// `StopwordSet::empty()` disables filtering.
pub use analysis::stopwords::StopwordSet;

/// Corpus input
/// - `RawRecord`: a document name and its raw tokens
/// - `parse_corpus` / `load_corpus`: blank-line separated records, name on the first line
pub use corpus::{load_corpus, parse_corpus, RawRecord};

/// Frequency Table
/// The number of documents and, per stem, the number of documents containing it.
/// Built once by `CorpusIndexer` and read-only afterwards.
pub use corpus::{CorpusIndexer, FrequencyTable, Stem};

/// Cluster Pipeline
/// The top-level driver. It runs, in order:
/// - indexing (filter, stem, count document frequency)
/// - document building (prune stems found in at least half of the documents)
/// - scoring (`-ln(df / n)` summed over each document's words)
/// - graph building (connect pairs whose scores sum to at least the threshold)
/// - partitioning (connected components)
/// - naming (the two stems found in the most member documents)
///
/// `ClusterPipeline<N>` is generic over the score type:
/// - `N`: f32 or f64 (default)
pub use cluster::{ClusterPipeline, Clustering};

/// Documents, clusters and labels
pub use cluster::{document::Document, graph::Cluster, label::Label};

/// Score Engine Trait
/// Defines the per-stem weight summed into a document score.
/// `DefaultScoreEngine` uses `-ln(df / n)`.
pub use cluster::weight::{DefaultScoreEngine, ScoreEngine};

/// Configuration and errors
pub use config::{ClusterConfig, LabelPolicy};
pub use error::{ClusterError, Result};

/// Display-ready output, printable as text or JSON
pub use report::{ClusterReport, ReportCluster};
