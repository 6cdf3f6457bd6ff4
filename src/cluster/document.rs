use indexmap::IndexSet;
use num::Float;
use tracing::{debug, warn};

use crate::config::DEFAULT_PREVALENCE_CUTOFF;
use crate::corpus::{FrequencyTable, Stem, StemmedRecord};

/// One document in the clustering graph
///
/// `words` is set by `DocumentBuilder`, `score` by `assign_scores` and
/// `neighbors` by `connect`, in that order. Neighbors are indices into the
/// same document slice; the relation is symmetric and never reflexive.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<N = f64>
where
    N: Float,
{
    pub name: String,
    /// pruned stems in corpus order, duplicates kept
    pub words: Vec<Stem>,
    pub score: N,
    pub neighbors: IndexSet<usize>,
}

impl<N> Document<N>
where
    N: Float,
{
    pub fn new<S: Into<String>>(name: S, words: Vec<Stem>) -> Self {
        Self {
            name: name.into(),
            words,
            score: N::zero(),
            neighbors: IndexSet::new(),
        }
    }

    /// Distinct stems in first-seen order
    pub fn distinct_words(&self) -> IndexSet<&str> {
        self.words.iter().map(AsRef::as_ref).collect()
    }
}

/// Re-walks the stemmed corpus and drops stems that are too common
#[derive(Debug, Clone, Copy)]
pub struct DocumentBuilder<'a> {
    table: &'a FrequencyTable,
    prevalence_cutoff: f64,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(table: &'a FrequencyTable) -> Self {
        Self {
            table,
            prevalence_cutoff: DEFAULT_PREVALENCE_CUTOFF,
        }
    }

    pub fn with_prevalence_cutoff(mut self, cutoff: f64) -> Self {
        self.prevalence_cutoff = cutoff;
        self
    }

    /// df / total at or above the cutoff
    #[inline]
    pub fn is_common(&self, stem: &str) -> bool {
        self.table.prevalence(stem) >= self.prevalence_cutoff
    }

    /// One `Document` per named record, words pruned
    pub fn build<N: Float>(&self, records: &[StemmedRecord]) -> Vec<Document<N>> {
        let pruned = self
            .table
            .iter()
            .filter(|(stem, _)| self.is_common(stem))
            .count();
        debug!(pruned, cutoff = self.prevalence_cutoff, "pruning common stems");

        let documents: Vec<Document<N>> = records
            .iter()
            .filter(|record| !record.name.is_empty())
            .map(|record| {
                let words: Vec<Stem> = record
                    .stems
                    .iter()
                    .filter(|stem| !self.is_common(stem))
                    .cloned()
                    .collect();
                if words.is_empty() {
                    warn!(name = %record.name, "document has no words left after pruning");
                }
                Document::new(record.name.clone(), words)
            })
            .collect();
        debug!(documents = documents.len(), "built documents");
        documents
    }
}
