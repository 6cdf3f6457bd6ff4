use std::fmt;

use num::Float;
use serde::{Deserialize, Serialize};

use crate::cluster::Clustering;

/// Printable view of a clustering: display words and display names only
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClusterReport {
    pub clusters: Vec<ReportCluster>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCluster {
    pub label: (String, String),
    pub members: Vec<String>,
}

impl ClusterReport {
    pub fn from_clustering<N: Float>(clustering: &Clustering<N>) -> Self {
        let clusters = clustering
            .iter()
            .map(|(label, names)| ReportCluster {
                label: (
                    display_word(&clustering.surface(&label.primary)),
                    display_word(&clustering.surface(&label.secondary)),
                ),
                members: names.into_iter().map(display_name).collect(),
            })
            .collect();
        Self { clusters }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `Word1 and Word2:` then the comma-joined names, then a blank line
impl fmt::Display for ClusterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cluster in &self.clusters {
            writeln!(f, "{} and {}:", cluster.label.0, cluster.label.1)?;
            writeln!(f, "{}", cluster.members.join(", "))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Surface form for a label: one trailing non-letter dropped, first letter upper-cased
pub fn display_word(surface: &str) -> String {
    let trimmed = match surface.chars().last() {
        Some(last) if !last.is_alphabetic() => &surface[..surface.len() - last.len_utf8()],
        _ => surface,
    };
    capitalize(trimmed)
}

/// Every word of a document name capitalized
pub fn display_name(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
