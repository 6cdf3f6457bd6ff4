use num::Float;
use tracing::debug;

use crate::cluster::document::Document;

/// One connected component, as indices into the document slice in visit order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cluster {
    pub members: Vec<usize>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }
}

/// Connect every pair of distinct documents whose scores sum to at least `threshold`
///
/// Existing neighbors are cleared first. Each neighbor set ends up in
/// ascending document order. Returns the number of undirected edges.
pub fn connect<N: Float>(documents: &mut [Document<N>], threshold: N) -> usize {
    for doc in documents.iter_mut() {
        doc.neighbors.clear();
    }
    let scores: Vec<N> = documents.iter().map(|doc| doc.score).collect();
    let mut edges = 0;
    for i in 0..scores.len() {
        for j in (i + 1)..scores.len() {
            if scores[i] + scores[j] >= threshold {
                documents[i].neighbors.insert(j);
                documents[j].neighbors.insert(i);
                edges += 1;
            }
        }
    }
    debug!(edges, documents = documents.len(), "connected documents");
    edges
}

/// Connected components in document order
///
/// Uses an explicit stack; neighbors are pushed in reverse so the visit order
/// is the preorder of a recursive depth-first search over each neighbor set.
pub fn components<N: Float>(documents: &[Document<N>]) -> Vec<Cluster> {
    let mut visited = vec![false; documents.len()];
    let mut clusters = Vec::new();
    let mut stack = Vec::new();
    for start in 0..documents.len() {
        if visited[start] {
            continue;
        }
        let mut cluster = Cluster::default();
        stack.push(start);
        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            cluster.members.push(node);
            for &next in documents[node].neighbors.iter().rev() {
                if !visited[next] {
                    stack.push(next);
                }
            }
        }
        clusters.push(cluster);
    }
    debug!(clusters = clusters.len(), "partitioned documents");
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn scored(scores: &[f64]) -> Vec<Document> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let mut doc = Document::new(format!("d{i}"), Vec::new());
                doc.score = s;
                doc
            })
            .collect()
    }

    fn edge_set(docs: &[Document]) -> HashSet<(usize, usize)> {
        docs.iter()
            .enumerate()
            .flat_map(|(i, d)| d.neighbors.iter().map(move |&j| (i.min(j), i.max(j))))
            .collect()
    }

    /// xorshift32, deterministic
    fn pseudo_scores(seed: u32, n: usize) -> Vec<f64> {
        let mut x = seed;
        (0..n)
            .map(|_| {
                x ^= x << 13;
                x ^= x >> 17;
                x ^= x << 5;
                (x % 1000) as f64 / 100.0
            })
            .collect()
    }

    #[test]
    fn edges_need_the_threshold_sum() {
        let mut docs = scored(&[3.0, 2.0, 1.0, 0.5]);
        let edges = connect(&mut docs, 4.0);
        // 3+2, 3+1
        assert_eq!(edges, 2);
        assert_eq!(edge_set(&docs), HashSet::from([(0, 1), (0, 2)]));
        assert!(docs[3].neighbors.is_empty());
    }

    #[test]
    fn equal_sum_connects() {
        let mut docs = scored(&[2.5, 2.5]);
        assert_eq!(connect(&mut docs, 5.0), 1);
    }

    #[test]
    fn neighbors_are_symmetric_and_not_reflexive() {
        let mut docs = scored(&pseudo_scores(0xdead_beef, 40));
        connect(&mut docs, 10.0);
        for (i, doc) in docs.iter().enumerate() {
            assert!(!doc.neighbors.contains(&i));
            for &j in &doc.neighbors {
                assert!(docs[j].neighbors.contains(&i), "{j} missing back edge to {i}");
            }
        }
    }

    #[test]
    fn raising_the_threshold_only_removes_edges() {
        let scores = pseudo_scores(0x0bad_cafe, 30);
        let mut previous: Option<HashSet<(usize, usize)>> = None;
        for threshold in [2.0, 6.0, 10.0, 14.0, 18.0] {
            let mut docs = scored(&scores);
            connect(&mut docs, threshold);
            let edges = edge_set(&docs);
            if let Some(lower) = &previous {
                assert!(edges.is_subset(lower), "new edge at threshold {threshold}");
            }
            previous = Some(edges);
        }
    }

    #[test]
    fn reconnecting_clears_old_edges() {
        let mut docs = scored(&[3.0, 3.0]);
        connect(&mut docs, 1.0);
        connect(&mut docs, 100.0);
        assert!(docs.iter().all(|d| d.neighbors.is_empty()));
    }

    #[test]
    fn components_partition_the_documents() {
        for seed in [1u32, 7, 42, 0x1234_5678] {
            let mut docs = scored(&pseudo_scores(seed, 25));
            connect(&mut docs, 12.0);
            let clusters = components(&docs);
            let mut seen = vec![0usize; docs.len()];
            for cluster in &clusters {
                assert!(!cluster.is_empty());
                for &m in &cluster.members {
                    seen[m] += 1;
                }
            }
            assert!(seen.iter().all(|&c| c == 1), "seed {seed}: {seen:?}");
        }
    }

    #[test]
    fn members_are_reachable_and_clusters_are_closed() {
        let mut docs = scored(&pseudo_scores(99, 30));
        connect(&mut docs, 11.0);
        for cluster in components(&docs) {
            for &m in &cluster.members {
                for &n in &docs[m].neighbors {
                    assert!(cluster.contains(n));
                }
            }
        }
    }

    #[test]
    fn visit_order_is_recursive_preorder() {
        // 0-3, 0-1, 1-2, 4 isolated
        let mut docs = scored(&[0.0; 5]);
        for (a, b) in [(0, 1), (0, 3), (1, 2)] {
            docs[a].neighbors.insert(b);
            docs[b].neighbors.insert(a);
        }
        let clusters = components(&docs);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].members, vec![0, 1, 2, 3]);
        assert_eq!(clusters[1].members, vec![4]);
    }

    #[test]
    fn no_documents_no_clusters() {
        let docs: Vec<Document> = Vec::new();
        assert!(components(&docs).is_empty());
    }
}
