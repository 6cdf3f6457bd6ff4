use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClusterError, Result};

/// One document as it appears in the corpus file: a name and its raw tokens in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub words: Vec<String>,
}

impl RawRecord {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            words: Vec::new(),
        }
    }

    pub fn with_words<I, T>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }
}

/// Split corpus text into records
///
/// A blank line (empty after trimming) closes the current record. The first
/// line after a blank line, or at the start of the text, is the record name;
/// the lines that follow are whitespace-tokenized content.
pub fn parse_corpus(text: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;
    for line in text.lines() {
        if line.trim().is_empty() {
            if let Some(record) = current.take() {
                records.push(record);
            }
            continue;
        }
        match current.as_mut() {
            None => current = Some(RawRecord::new(line.trim())),
            Some(record) => record
                .words
                .extend(line.split_whitespace().map(str::to_string)),
        }
    }
    if let Some(record) = current {
        records.push(record);
    }
    records
}

/// Read and parse a corpus file
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ClusterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_corpus(&text);
    tracing::debug!(path = %path.display(), records = records.len(), "parsed corpus");
    Ok(records)
}
