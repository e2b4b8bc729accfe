//! Core data models for textprof
//!
//! These models are used throughout the codebase for representing
//! tagged text and the numeric feature vectors derived from it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::profiler::ProfileError;
use crate::tagset::Tagset;

/// A single token paired with the POS tag the external tagger assigned it.
///
/// Read-only to the profiler: taggers produce these, aggregation only
/// inspects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface form exactly as it appeared in the text
    pub form: String,
    /// Raw POS tag, drawn from the fixed tagset
    pub tag: String,
}

impl TaggedToken {
    pub fn new(form: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            tag: tag.into(),
        }
    }
}

/// An ordered sequence of tagged tokens, as segmented by the tagger.
pub type Sentence = Vec<TaggedToken>;

/// A tagged document: ordered sentences, each an ordered token sequence.
///
/// Owns no state beyond the token data itself; all aggregation
/// accumulators are created fresh per profiling call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Total token count across all sentences.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(|s| s.len()).sum()
    }

    /// Iterate every token in document order, ignoring sentence boundaries.
    pub fn tokens(&self) -> impl Iterator<Item = &TaggedToken> {
        self.sentences.iter().flatten()
    }

    /// Validate the document against the tagset before any aggregation.
    ///
    /// Length normalization divides by sentence and document token counts,
    /// so empty documents and empty sentences must be rejected here rather
    /// than surfacing as an arithmetic fault mid-scan. Unknown tags are
    /// rejected upfront as well: the tagset is closed.
    pub fn validate(&self, tagset: &Tagset) -> Result<(), ProfileError> {
        if self.sentences.is_empty() {
            return Err(ProfileError::EmptyDocument);
        }
        for (index, sentence) in self.sentences.iter().enumerate() {
            if sentence.is_empty() {
                return Err(ProfileError::EmptySentence { index });
            }
            for token in sentence {
                if tagset.index_of(&token.tag).is_none() {
                    return Err(ProfileError::UnknownTag {
                        tag: token.tag.clone(),
                        sentence: index,
                    });
                }
            }
        }
        Ok(())
    }
}

/// A fixed-length feature mapping from deterministic keys to numeric values.
///
/// Keys are fully determined by the tagset and profiler variant, never by
/// the input text's content. Insertion order is preserved so serialized
/// output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: IndexMap<String, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate (key, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }
}
