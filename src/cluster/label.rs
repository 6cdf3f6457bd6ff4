use indexmap::{IndexMap, IndexSet};
use num::Float;
use serde::{Deserialize, Serialize};

use crate::cluster::{document::Document, graph::Cluster};
use crate::config::LabelPolicy;
use crate::corpus::Stem;
use crate::error::{ClusterError, Result};
use crate::utils::sort::rank_ascending;

/// Two stems naming a cluster, highest-ranked first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub primary: Stem,
    pub secondary: Stem,
}

/// How many member documents contain each stem, in first-encountered order
pub fn stem_counts<'d, N: Float>(documents: &'d [Document<N>], cluster: &Cluster) -> IndexMap<&'d str, u32> {
    let mut counts: IndexMap<&str, u32> = IndexMap::new();
    for &member in &cluster.members {
        let distinct: IndexSet<&str> = documents[member].distinct_words();
        for stem in distinct {
            *counts.entry(stem).or_insert(0) += 1;
        }
    }
    counts
}

/// Label a cluster with its two most widespread stems
///
/// Stems are ranked by the number of member documents containing them,
/// ascending, ties in first-encountered order; the label is the last two.
/// `cluster_id` only feeds the error.
pub fn find_label<N: Float>(documents: &[Document<N>], cluster: &Cluster, cluster_id: usize) -> Result<Label> {
    label_cluster(documents, cluster, cluster_id, LabelPolicy::Strict)
}

/// `find_label` with a choice of what happens to clusters with one distinct stem
pub fn label_cluster<N: Float>(
    documents: &[Document<N>],
    cluster: &Cluster,
    cluster_id: usize,
    policy: LabelPolicy,
) -> Result<Label> {
    let counts = stem_counts(documents, cluster);
    let (stems, values): (Vec<&str>, Vec<u32>) = counts.into_iter().unzip();
    let order = rank_ascending(&values);

    let too_small = ClusterError::ClusterTooSmall {
        cluster: cluster_id,
        distinct_stems: stems.len(),
    };
    match (order.len(), policy) {
        (0, _) | (1, LabelPolicy::Strict) => Err(too_small),
        (1, LabelPolicy::Pad) => Ok(Label {
            primary: stems[order[0]].into(),
            secondary: stems[order[0]].into(),
        }),
        (n, _) => Ok(Label {
            primary: stems[order[n - 1]].into(),
            secondary: stems[order[n - 2]].into(),
        }),
    }
}
