use num::Float;
use tracing::debug;

use crate::cluster::document::Document;
use crate::corpus::FrequencyTable;
use crate::error::{ClusterError, Result};

/// Per-stem weight strategy used by `assign_scores`
pub trait ScoreEngine<N>
where
    N: Float,
{
    /// Weight of one occurrence of a stem found in `doc_freq` of `doc_num` documents
    fn term_weight(doc_freq: u64, doc_num: u64) -> N;
}

/// Rarity weight `-ln(df / n)`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScoreEngine;

impl<N> ScoreEngine<N> for DefaultScoreEngine
where
    N: Float,
{
    #[inline]
    fn term_weight(doc_freq: u64, doc_num: u64) -> N {
        let df: N = num::cast(doc_freq).unwrap_or_else(N::zero);
        let total: N = num::cast(doc_num).unwrap_or_else(N::one);
        -(df / total).ln()
    }
}

/// Set `score` on every document with the default engine
pub fn assign_scores<N: Float>(documents: &mut [Document<N>], table: &FrequencyTable) -> Result<()> {
    assign_scores_with::<N, DefaultScoreEngine>(documents, table)
}

/// Set `score` on every document: the sum of `E::term_weight` over its words
///
/// Repeated stems count once per occurrence. The denominator is the number of
/// documents passed in, which must match the table's document count.
pub fn assign_scores_with<N, E>(documents: &mut [Document<N>], table: &FrequencyTable) -> Result<()>
where
    N: Float,
    E: ScoreEngine<N>,
{
    if documents.is_empty() {
        return Err(ClusterError::EmptyCorpus);
    }
    let doc_num = documents.len() as u64;
    if table.total_documents() != doc_num {
        return Err(ClusterError::DocumentCountMismatch {
            indexed: table.total_documents(),
            built: documents.len(),
        });
    }

    for doc in documents.iter_mut() {
        let mut score = N::zero();
        for word in &doc.words {
            let df = table.doc_freq(word);
            if df == 0 {
                return Err(ClusterError::UnknownStem(word.to_string()));
            }
            score = score + E::term_weight(df, doc_num);
        }
        doc.score = score;
    }
    debug!(documents = documents.len(), "assigned scores");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Stem;

    fn doc(name: &str, words: &[&str]) -> Document {
        Document::new(name, words.iter().map(|s| Stem::from(*s)).collect())
    }

    fn table(sets: &[&[&str]]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for set in sets {
            table.add_set(*set);
        }
        table
    }

    #[test]
    fn scores_match_closed_form() {
        // df: alpha 1, beta 2, gamma 3 over 3 documents
        let table = table(&[&["alpha", "beta", "gamma"], &["beta", "gamma"], &["gamma"]]);
        let mut docs = vec![
            doc("one", &["alpha", "beta", "beta"]),
            doc("two", &["beta", "gamma"]),
            doc("three", &[]),
        ];
        assign_scores(&mut docs, &table).unwrap();

        let expected_one = -(1.0f64 / 3.0).ln() + 2.0 * -(2.0f64 / 3.0).ln();
        let expected_two = -(2.0f64 / 3.0).ln() + -(3.0f64 / 3.0).ln();
        assert!((docs[0].score - expected_one).abs() < 1e-12);
        assert!((docs[1].score - expected_two).abs() < 1e-12);
        assert_eq!(docs[2].score, 0.0);
        // ln 3 + 2 ln 1.5
        assert!((docs[0].score - 1.909542504884439).abs() < 1e-9);
    }

    #[test]
    fn single_precision() {
        let table = table(&[&["a"], &["b"]]);
        let mut docs: Vec<Document<f32>> = vec![
            Document::new("x", vec![Stem::from("a")]),
            Document::new("y", vec![Stem::from("b")]),
        ];
        assign_scores(&mut docs, &table).unwrap();
        assert!((docs[0].score - std::f32::consts::LN_2).abs() < 1e-6);
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let mut docs: Vec<Document> = Vec::new();
        let err = assign_scores(&mut docs, &FrequencyTable::new()).unwrap_err();
        assert!(matches!(err, ClusterError::EmptyCorpus));
    }

    #[test]
    fn denominators_must_agree() {
        let table = table(&[&["a"], &["b"], &["c"]]);
        let mut docs = vec![doc("x", &["a"]), doc("y", &["b"])];
        let err = assign_scores(&mut docs, &table).unwrap_err();
        assert!(matches!(
            err,
            ClusterError::DocumentCountMismatch { indexed: 3, built: 2 }
        ));
    }

    #[test]
    fn unknown_stem_is_reported() {
        let table = table(&[&["a"]]);
        let mut docs = vec![doc("x", &["zzz"])];
        let err = assign_scores(&mut docs, &table).unwrap_err();
        assert!(matches!(err, ClusterError::UnknownStem(s) if s == "zzz"));
    }

    struct CountEngine;
    impl ScoreEngine<f64> for CountEngine {
        fn term_weight(_doc_freq: u64, _doc_num: u64) -> f64 {
            1.0
        }
    }

    #[test]
    fn custom_engine() {
        let table = table(&[&["a", "b"]]);
        let mut docs = vec![doc("x", &["a", "b", "a"])];
        assign_scores_with::<f64, CountEngine>(&mut docs, &table).unwrap();
        assert_eq!(docs[0].score, 3.0);
    }
}
