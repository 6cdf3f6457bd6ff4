//! Word-level analysis
//!
//! Stemming and stopword filtering used by the corpus indexer.

pub mod stemmer;
pub mod stopwords;
