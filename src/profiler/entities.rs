//! Named-entity density features
//!
//! The chunker's output is a forest: entity spans interleaved with plain
//! tokens. Entity collection walks the forest once, accumulating the
//! space-joined surface forms of consecutive entity spans and closing the
//! accumulation at each plain-token boundary.

use crate::models::TaggedToken;

/// One node of the chunk forest: either a contiguous span the chunker
/// recognized as a named entity, or a plain token outside any entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkNode {
    Entity(Vec<TaggedToken>),
    Token(TaggedToken),
}

/// Collect named-entity strings from a chunk forest.
///
/// Consecutive entity spans merge into one entity string (space-joined).
/// A plain token closes out a non-empty accumulation; plain tokens are
/// never emitted themselves. After the scan the in-progress accumulation
/// is always joined and appended, even when it is empty, so the result
/// may end with an empty string and is not deduplicated. Both behaviors
/// are kept for exact parity with the reference pipeline.
pub fn collect_named_entities(forest: &[ChunkNode]) -> Vec<String> {
    let mut entities = Vec::new();
    let mut current_chunk: Vec<String> = Vec::new();

    for node in forest {
        match node {
            ChunkNode::Entity(tokens) => {
                let span = tokens
                    .iter()
                    .map(|t| t.form.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                current_chunk.push(span);
            }
            ChunkNode::Token(_) => {
                if !current_chunk.is_empty() {
                    entities.push(current_chunk.join(" "));
                    current_chunk.clear();
                }
            }
        }
    }

    // Trailing accumulation is flushed unconditionally.
    entities.push(current_chunk.join(" "));
    entities
}

/// Per-sentence entity density derived from a chunk forest.
#[derive(Debug, Clone, Copy)]
pub struct DensityFeatures {
    pub per_sentence: f64,
    pub unique_per_sentence: f64,
}

pub fn density_features(forest: &[ChunkNode], num_sentences: usize) -> DensityFeatures {
    let entities = collect_named_entities(forest);
    let unique: std::collections::HashSet<&String> = entities.iter().collect();
    DensityFeatures {
        per_sentence: entities.len() as f64 / num_sentences as f64,
        unique_per_sentence: unique.len() as f64 / num_sentences as f64,
    }
}
