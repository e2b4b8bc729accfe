//! External NLP collaborators
//!
//! Tokenization, POS tagging, NE chunking, and dependency parsing are not
//! implemented here; they sit behind these seams:
//!
//! - [`Tagger`] — text in, sentence-segmented tagged tokens out
//! - [`Chunker`] — tagged tokens in, entity/plain chunk forest out
//! - [`conllu`] — the tagged-document interchange format
//! - [`external`] — subprocess adapter around an installed parser pipeline

pub mod conllu;
pub mod external;

pub use external::{ExternalParser, ResourceCatalog};

use crate::models::{Document, TaggedToken};
use crate::profiler::{ChunkNode, ProfileResult};

/// Sentence segmentation + tokenization + POS tagging, as one pass whose
/// sentence boundaries are preserved in the returned document.
pub trait Tagger {
    fn tag(&self, text: &str) -> ProfileResult<Document>;
}

/// Groups tagged tokens into a forest of entity spans and plain tokens.
/// Runs over a whole-document token stream.
pub trait Chunker {
    fn chunk(&self, tokens: &[TaggedToken]) -> ProfileResult<Vec<ChunkNode>>;
}

/// Baseline chunker: maximal contiguous runs of proper-noun tags (NNP,
/// NNPS) become entity spans. A stand-in so profiling works without an
/// external NE model; a real chunker plugs in through the [`Chunker`]
/// trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounChunker;

impl ProperNounChunker {
    fn is_entity_tag(tag: &str) -> bool {
        matches!(tag, "NNP" | "NNPS")
    }
}

impl Chunker for ProperNounChunker {
    fn chunk(&self, tokens: &[TaggedToken]) -> ProfileResult<Vec<ChunkNode>> {
        let mut forest = Vec::new();
        let mut span: Vec<TaggedToken> = Vec::new();
        for token in tokens {
            if Self::is_entity_tag(&token.tag) {
                span.push(token.clone());
            } else {
                if !span.is_empty() {
                    forest.push(ChunkNode::Entity(std::mem::take(&mut span)));
                }
                forest.push(ChunkNode::Token(token.clone()));
            }
        }
        if !span.is_empty() {
            forest.push(ChunkNode::Entity(span));
        }
        Ok(forest)
    }
}
