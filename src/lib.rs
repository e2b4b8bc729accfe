//! textprof - POS-tag feature profiling for text
//!
//! Computes fixed-length, deterministically-keyed numeric feature vectors
//! from POS-tagged text for downstream ML classification and ranking.
//! The aggregation engine produces TOTAL/MAX/MIN/MEAN statistics per tag
//! over a fixed tagset (with coarse "general tag" roll-ups), auxiliary
//! document statistics, and named-entity density. Tokenization, tagging,
//! chunking, and dependency parsing are external collaborators behind the
//! [`pipeline`] seams.
//!
//! ```
//! use textprof::models::{Document, TaggedToken};
//! use textprof::pipeline::ProperNounChunker;
//! use textprof::profiler::profile_frequencies;
//! use textprof::tagset::Tagset;
//!
//! let tagset = Tagset::penn();
//! let doc = Document::new(vec![vec![
//!     TaggedToken::new("John", "NNP"),
//!     TaggedToken::new("lives", "VBZ"),
//!     TaggedToken::new("in", "IN"),
//!     TaggedToken::new("Paris", "NNP"),
//!     TaggedToken::new(".", "."),
//! ]]);
//! let features = profile_frequencies(&doc, &tagset, &ProperNounChunker).unwrap();
//! assert_eq!(features.get("NUM_SENTENCES"), Some(1.0));
//! ```

pub mod cli;
pub mod models;
pub mod pipeline;
pub mod profiler;
pub mod tagset;

pub use models::{Document, FeatureVector, Sentence, TaggedToken};
pub use profiler::{profile_counts, profile_frequencies, ProfileError, ProfileResult};
pub use tagset::Tagset;
