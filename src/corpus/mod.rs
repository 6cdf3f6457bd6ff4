pub mod parse;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::analysis::{stemmer::PorterStemmer, stopwords::StopwordSet};
use crate::config::DEFAULT_MIN_TOKEN_LEN;

pub use parse::{load_corpus, parse_corpus, RawRecord};

/// A stemmed word form; only ever produced by `PorterStemmer`
pub type Stem = Box<str>;

/// keep document count and per-stem document frequency
///
/// Stems are kept in first-seen order, so iterating the table is deterministic.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// number of documents added
    doc_num: u64,
    /// number of documents each stem appears in
    doc_freq: IndexMap<Stem, u64>,
}

impl FrequencyTable {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            doc_freq: IndexMap::new(),
        }
    }

    /// Add one document's stems
    /// repeats inside the slice are counted once
    pub fn add_set<T>(&mut self, stems: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        let distinct: IndexSet<&str> = stems.iter().map(AsRef::as_ref).collect();
        for stem in distinct {
            *self.doc_freq.entry(stem.into()).or_insert(0) += 1;
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn total_documents(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing `stem`, 0 if unseen
    #[inline]
    pub fn doc_freq(&self, stem: &str) -> u64 {
        self.doc_freq.get(stem).copied().unwrap_or(0)
    }

    /// Share of documents containing `stem`
    pub fn prevalence(&self, stem: &str) -> f64 {
        if self.doc_num == 0 {
            return 0.0;
        }
        self.doc_freq(stem) as f64 / self.doc_num as f64
    }

    /// Get the current vocabulary size (number of unique stems)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.doc_freq.len()
    }

    /// stems with their document frequency, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.doc_freq.iter().map(|(stem, &count)| (stem.as_ref(), count))
    }
}

/// A record after filtering and stemming, before prevalence pruning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemmedRecord {
    pub name: String,
    pub stems: Vec<Stem>,
}

/// Output of `CorpusIndexer::index`
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    pub table: FrequencyTable,
    /// stemmed records in corpus order; the builder walks these again
    pub records: Vec<StemmedRecord>,
    /// first raw token seen for each stem, used for display
    pub surfaces: IndexMap<Stem, String>,
}

/// Filters, stems and counts the tokens of a parsed corpus
#[derive(Debug, Clone)]
pub struct CorpusIndexer<'a> {
    stemmer: PorterStemmer,
    stopwords: &'a StopwordSet,
    min_token_len: usize,
}

impl<'a> CorpusIndexer<'a> {
    pub fn new(stopwords: &'a StopwordSet) -> Self {
        Self {
            stemmer: PorterStemmer::new(),
            stopwords,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }

    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Whether a raw token survives the length and stopword filters
    #[inline]
    pub fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= self.min_token_len && !self.stopwords.contains(token)
    }

    /// Surviving tokens of one record, stemmed, in order, paired with the raw token
    pub fn analyze<'r>(&'r self, words: &'r [String]) -> impl Iterator<Item = (Stem, &'r str)> + 'r {
        words
            .iter()
            .map(String::as_str)
            .filter(move |token| self.keeps(token))
            .map(move |token| (self.stemmer.stem(&token.to_lowercase()).into_boxed_str(), token))
    }

    /// Build the frequency table and the stemmed records
    ///
    /// Records with an empty name are skipped and not counted.
    pub fn index(&self, records: &[RawRecord]) -> CorpusIndex {
        let mut index = CorpusIndex::default();
        let mut names: IndexSet<&str> = IndexSet::new();
        for record in records {
            let name = record.name.trim();
            if name.is_empty() {
                debug!("skipping record without a name");
                continue;
            }
            if !names.insert(name) {
                warn!(name, "duplicate document name");
            }
            let mut stems = Vec::with_capacity(record.words.len());
            for (stem, surface) in self.analyze(&record.words) {
                index
                    .surfaces
                    .entry(stem.clone())
                    .or_insert_with(|| surface.to_string());
                stems.push(stem);
            }
            index.table.add_set(&stems);
            index.records.push(StemmedRecord {
                name: name.to_string(),
                stems,
            });
        }
        debug!(
            documents = index.table.total_documents(),
            vocabulary = index.table.vocab_size(),
            "indexed corpus"
        );
        index
    }
}
