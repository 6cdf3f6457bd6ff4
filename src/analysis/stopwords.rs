use std::path::Path;

use indexmap::IndexSet;

use crate::error::{ClusterError, Result};

/// Case-insensitive stopword set
///
/// Words are stored lowercased. An empty set filters nothing, which is what
/// the pipeline uses when stopword filtering is switched off.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: IndexSet<Box<str>>,
}

impl StopwordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated stopwords, any number per line
    pub fn parse(text: &str) -> Self {
        let mut set = Self::empty();
        set.extend(text.split_whitespace());
        set
    }

    /// Read and parse a stopword file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ClusterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::parse(&text);
        tracing::debug!(path = %path.display(), words = set.len(), "loaded stopwords");
        Ok(set)
    }

    pub fn extend<I, T>(&mut self, words: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase().into_boxed_str());
        }
    }

    /// `word` is compared lowercased
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_merges_lines_case_insensitively() {
        let set = StopwordSet::parse("The and\nWAS\n\n  his her  \nthe");
        assert_eq!(set.len(), 5);
        assert!(set.contains("the"));
        assert!(set.contains("THE"));
        assert!(set.contains("Was"));
        assert!(!set.contains("with"));
    }

    #[test]
    fn empty_set_filters_nothing() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }
}
