pub mod document;
pub mod graph;
pub mod label;
pub mod weight;

use indexmap::IndexMap;
use num::Float;
use tracing::info;

use crate::analysis::stopwords::StopwordSet;
use crate::config::ClusterConfig;
use crate::corpus::{CorpusIndexer, FrequencyTable, RawRecord, Stem};
use crate::error::{ClusterError, Result};
use crate::report::ClusterReport;

use self::document::{Document, DocumentBuilder};
use self::graph::Cluster;
use self::label::Label;

/// Batch clustering driver
///
/// Runs indexer, builder, scoring, graph, partition and naming in order,
/// each to completion before the next starts.
///
/// `ClusterPipeline<N>` is generic over the score type `N` (f32 or f64);
/// `ClusterPipeline::new` picks f64.
#[derive(Debug, Clone)]
pub struct ClusterPipeline<N = f64>
where
    N: Float,
{
    config: ClusterConfig,
    stopwords: StopwordSet,
    _marker: std::marker::PhantomData<N>,
}

impl ClusterPipeline {
    pub fn new(config: ClusterConfig) -> Self {
        Self::with_precision(config)
    }
}

impl<N> ClusterPipeline<N>
where
    N: Float,
{
    pub fn with_precision(config: ClusterConfig) -> Self {
        Self {
            config,
            stopwords: StopwordSet::empty(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Filter tokens through `stopwords`; turns stopword filtering on
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self.config.use_stopwords = true;
        self
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Cluster and label the records
    pub fn run(&self, records: &[RawRecord]) -> Result<Clustering<N>> {
        self.config.validate()?;
        let threshold: N = num::cast(self.config.threshold)
            .ok_or(ClusterError::InvalidThreshold(self.config.threshold))?;

        let no_stopwords = StopwordSet::empty();
        let stopwords = if self.config.use_stopwords {
            &self.stopwords
        } else {
            &no_stopwords
        };
        let index = CorpusIndexer::new(stopwords)
            .with_min_token_len(self.config.min_token_len)
            .index(records);

        let mut documents: Vec<Document<N>> = DocumentBuilder::new(&index.table)
            .with_prevalence_cutoff(self.config.prevalence_cutoff)
            .build(&index.records);

        weight::assign_scores(&mut documents, &index.table)?;
        graph::connect(&mut documents, threshold);
        let clusters = graph::components(&documents);

        let labels = clusters
            .iter()
            .enumerate()
            .map(|(id, cluster)| label::label_cluster(&documents, cluster, id, self.config.label_policy))
            .collect::<Result<Vec<Label>>>()?;

        info!(
            documents = documents.len(),
            clusters = clusters.len(),
            threshold = self.config.threshold,
            "clustering finished"
        );
        Ok(Clustering {
            table: index.table,
            surfaces: index.surfaces,
            documents,
            clusters,
            labels,
        })
    }
}

/// Result of `ClusterPipeline::run`
#[derive(Debug, Clone)]
pub struct Clustering<N = f64>
where
    N: Float,
{
    pub table: FrequencyTable,
    /// first raw token seen for each stem
    pub surfaces: IndexMap<Stem, String>,
    pub documents: Vec<Document<N>>,
    /// partition of `documents`, in discovery order
    pub clusters: Vec<Cluster>,
    /// one per cluster, same order
    pub labels: Vec<Label>,
}

impl<N> Clustering<N>
where
    N: Float,
{
    /// `(label, member names)` per cluster
    pub fn iter(&self) -> impl Iterator<Item = (&Label, Vec<&str>)> {
        self.clusters.iter().zip(self.labels.iter()).map(move |(cluster, label)| {
            let names = cluster
                .members
                .iter()
                .map(|&m| self.documents[m].name.as_str())
                .collect();
            (label, names)
        })
    }

    /// Raw token behind a stem, falling back to the stem itself
    pub fn surface(&self, stem: &str) -> String {
        self.surfaces
            .get(stem)
            .cloned()
            .unwrap_or_else(|| stem.to_string())
    }

    pub fn report(&self) -> ClusterReport {
        ClusterReport::from_clustering(self)
    }
}
