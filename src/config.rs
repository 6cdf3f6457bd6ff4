use serde::{Deserialize, Serialize};

use crate::error::{ClusterError, Result};

/// Shortest token (in characters) the indexer keeps.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;
/// Stems present in at least this share of documents are pruned.
pub const DEFAULT_PREVALENCE_CUTOFF: f64 = 0.5;

/// What the cluster namer does with a cluster holding fewer than two distinct stems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// fail the run with `ClusterError::ClusterTooSmall`
    #[default]
    Strict,
    /// reuse the only stem for both halves of the label;
    /// a cluster with no stems at all still fails
    Pad,
}

/// Run parameters for `ClusterPipeline`
///
/// Built with `ClusterConfig::new(threshold)` and the `with_*` setters.
/// Nothing is checked until `validate`, which the pipeline calls before
/// touching the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// minimum combined score two documents need to be connected
    pub threshold: f64,
    /// tokens shorter than this are dropped before stemming
    pub min_token_len: usize,
    /// df / total at or above this value prunes a stem from every document
    pub prevalence_cutoff: f64,
    /// whether the stopword set handed to the pipeline is applied
    pub use_stopwords: bool,
    pub label_policy: LabelPolicy,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            // invalid on purpose, a threshold has to be supplied
            threshold: 0.0,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            prevalence_cutoff: DEFAULT_PREVALENCE_CUTOFF,
            use_stopwords: false,
            label_policy: LabelPolicy::Strict,
        }
    }
}

impl ClusterConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    pub fn with_prevalence_cutoff(mut self, cutoff: f64) -> Self {
        self.prevalence_cutoff = cutoff;
        self
    }

    pub fn with_stopwords(mut self, enabled: bool) -> Self {
        self.use_stopwords = enabled;
        self
    }

    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ClusterError::InvalidThreshold(self.threshold));
        }
        if self.min_token_len == 0 {
            return Err(ClusterError::InvalidConfig(
                "min_token_len must be at least 1".to_string(),
            ));
        }
        if !(self.prevalence_cutoff > 0.0 && self.prevalence_cutoff <= 1.0) {
            return Err(ClusterError::InvalidConfig(format!(
                "prevalence_cutoff must be in (0, 1], got {}",
                self.prevalence_cutoff
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_rejected() {
        let err = ClusterConfig::default().validate().unwrap_err();
        assert!(matches!(err, ClusterError::InvalidThreshold(t) if t == 0.0));
    }

    #[test]
    fn negative_and_nan_thresholds_are_rejected() {
        assert!(matches!(
            ClusterConfig::new(-1.0).validate(),
            Err(ClusterError::InvalidThreshold(_))
        ));
        assert!(matches!(
            ClusterConfig::new(f64::NAN).validate(),
            Err(ClusterError::InvalidThreshold(_))
        ));
        assert!(matches!(
            ClusterConfig::new(f64::INFINITY).validate(),
            Err(ClusterError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn cutoff_and_token_len_bounds() {
        assert!(ClusterConfig::new(5.0).validate().is_ok());
        assert!(ClusterConfig::new(5.0).with_prevalence_cutoff(1.0).validate().is_ok());
        assert!(matches!(
            ClusterConfig::new(5.0).with_prevalence_cutoff(0.0).validate(),
            Err(ClusterError::InvalidConfig(_))
        ));
        assert!(matches!(
            ClusterConfig::new(5.0).with_prevalence_cutoff(1.5).validate(),
            Err(ClusterError::InvalidConfig(_))
        ));
        assert!(matches!(
            ClusterConfig::new(5.0).with_min_token_len(0).validate(),
            Err(ClusterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: ClusterConfig =
            serde_json::from_str(r#"{"threshold": 7.5, "label_policy": "pad"}"#).unwrap();
        assert_eq!(cfg.threshold, 7.5);
        assert_eq!(cfg.min_token_len, DEFAULT_MIN_TOKEN_LEN);
        assert_eq!(cfg.prevalence_cutoff, DEFAULT_PREVALENCE_CUTOFF);
        assert!(!cfg.use_stopwords);
        assert_eq!(cfg.label_policy, LabelPolicy::Pad);
    }
}
