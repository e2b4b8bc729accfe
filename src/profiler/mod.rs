//! Tag-profile feature extraction
//!
//! Two profiling variants share one aggregation engine:
//!
//! - **frequency** — each tag occurrence is weighted by inverse text /
//!   sentence length, so per-tag totals are frequency shares summing to 1.
//!   Carries the full auxiliary set: word-length stats, distinct-tag
//!   counts, and named-entity density.
//! - **count** — raw integer occurrence counts and a narrower auxiliary
//!   set (sentence statistics only).
//!
//! Both produce a [`FeatureVector`] whose key set depends only on the
//! tagset and variant, never on the input text.

mod aggregate;
mod entities;
pub(crate) mod stats;

pub use aggregate::{TagAccumulators, Weighting};
pub use entities::{collect_named_entities, ChunkNode};

use thiserror::Error;
use tracing::debug;

use crate::models::{Document, FeatureVector};
use crate::pipeline::Chunker;
use crate::tagset::Tagset;

/// Errors surfaced by profiling and by the external pipeline boundary.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("document contains no sentences")]
    EmptyDocument,

    #[error("sentence {index} contains no tokens")]
    EmptySentence { index: usize },

    #[error("tag '{tag}' in sentence {sentence} is not in the tagset")]
    UnknownTag { tag: String, sentence: usize },

    #[error("external pipeline failure: {0}")]
    ExternalPipeline(String),
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Frequency-share profile: length-normalized per-tag statistics plus the
/// full auxiliary set including named-entity density.
///
/// The chunker runs over the flattened document token stream; its failures
/// propagate as [`ProfileError::ExternalPipeline`].
pub fn profile_frequencies(
    document: &Document,
    tagset: &Tagset,
    chunker: &dyn Chunker,
) -> ProfileResult<FeatureVector> {
    document.validate(tagset)?;
    let num_sentences = document.sentences.len();
    debug!(sentences = num_sentences, words = document.word_count(), "profiling frequencies");

    let (acc, scan) = aggregate::aggregate(document, tagset, Weighting::InverseLength);
    let mut features = acc.into_features(tagset);

    let sentence_lengths: Vec<f64> = document.sentences.iter().map(|s| s.len() as f64).collect();
    let word_lengths: Vec<f64> = document
        .tokens()
        .map(|t| t.form.chars().count() as f64)
        .collect();

    features.insert("NUM_SENTENCES", num_sentences as f64);
    features.insert("MEAN_NUM_WORDS", stats::mean(&sentence_lengths));
    features.insert("STD_NUM_WORDS", stats::population_std(&sentence_lengths));
    features.insert("NUM_WORDS", word_lengths.len() as f64);
    features.insert("MEAN_WORD_LEN", stats::mean(&word_lengths));
    features.insert("STD_WORD_LEN", stats::population_std(&word_lengths));
    features.insert("TAGS_UNIQUE", scan.distinct_raw as f64);
    features.insert("GENERAL_TAGS_UNIQUE", scan.distinct_general as f64);

    let tokens: Vec<_> = document.tokens().cloned().collect();
    let forest = chunker.chunk(&tokens)?;
    let entity_features = entities::density_features(&forest, num_sentences);
    features.insert(
        "NAMED_ENTITIES_PER_SENTENCE",
        entity_features.per_sentence,
    );
    features.insert(
        "UNIQUE_NAMED_ENTITIES_PER_SENTENCE",
        entity_features.unique_per_sentence,
    );

    Ok(features)
}

/// Raw-count profile: unit-weighted per-tag statistics plus sentence-length
/// summaries. No word-length or named-entity features.
pub fn profile_counts(document: &Document, tagset: &Tagset) -> ProfileResult<FeatureVector> {
    document.validate(tagset)?;
    let num_sentences = document.sentences.len();
    debug!(sentences = num_sentences, words = document.word_count(), "profiling counts");

    let (acc, _scan) = aggregate::aggregate(document, tagset, Weighting::Unit);
    let mut features = acc.into_features(tagset);

    let sentence_lengths: Vec<f64> = document.sentences.iter().map(|s| s.len() as f64).collect();
    features.insert("NUM_SENTENCES", num_sentences as f64);
    features.insert("MEAN_NUM_WORDS", stats::mean(&sentence_lengths));
    features.insert("STD_NUM_WORDS", stats::population_std(&sentence_lengths));

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaggedToken;
    use crate::pipeline::ProperNounChunker;

    fn doc(sentences: &[&[(&str, &str)]]) -> Document {
        Document::new(
            sentences
                .iter()
                .map(|s| s.iter().map(|(f, t)| TaggedToken::new(*f, *t)).collect())
                .collect(),
        )
    }

    /// Tagger output for "John lives in Paris."
    fn john_lives_in_paris() -> Document {
        doc(&[&[
            ("John", "NNP"),
            ("lives", "VBZ"),
            ("in", "IN"),
            ("Paris", "NNP"),
            (".", "."),
        ]])
    }

    #[test]
    fn test_count_variant_end_to_end() {
        let tagset = Tagset::penn();
        let fv = profile_counts(&john_lives_in_paris(), &tagset).unwrap();

        assert_eq!(fv.get("NUM_SENTENCES"), Some(1.0));
        assert_eq!(fv.get("MEAN_NUM_WORDS"), Some(5.0));
        assert_eq!(fv.get("STD_NUM_WORDS"), Some(0.0));
        assert_eq!(fv.get("TOTAL_NNP"), Some(2.0));
        assert_eq!(fv.get("TOTAL_VBZ"), Some(1.0));
        assert_eq!(fv.get("TOTAL_gNN"), Some(2.0));
        assert_eq!(fv.get("TOTAL_gVB"), Some(1.0));
        // Narrow variant: no word-length or entity keys
        assert_eq!(fv.get("NUM_WORDS"), None);
        assert_eq!(fv.get("NAMED_ENTITIES_PER_SENTENCE"), None);
    }

    #[test]
    fn test_count_totals_sum_to_token_count() {
        let tagset = Tagset::penn();
        let d = doc(&[
            &[("The", "DT"), ("cat", "NN"), ("sat", "VBD"), (".", ".")],
            &[("Dogs", "NNS"), ("bark", "VBP"), ("loudly", "RB"), (".", ".")],
        ]);
        let fv = profile_counts(&d, &tagset).unwrap();
        let sum: f64 = tagset
            .raw_tags()
            .iter()
            .map(|t| fv.get(&format!("TOTAL_{t}")).unwrap())
            .sum();
        assert_eq!(sum, d.word_count() as f64);
    }

    #[test]
    fn test_frequency_totals_sum_to_one() {
        let tagset = Tagset::penn();
        let d = doc(&[
            &[("The", "DT"), ("cat", "NN"), ("sat", "VBD"), (".", ".")],
            &[("It", "PRP"), ("slept", "VBD"), (".", ".")],
        ]);
        let fv = profile_frequencies(&d, &tagset, &ProperNounChunker).unwrap();
        let sum: f64 = tagset
            .raw_tags()
            .iter()
            .map(|t| fv.get(&format!("TOTAL_{t}")).unwrap())
            .sum();
        assert!((sum - 1.0).abs() < 1e-9, "raw tag shares sum to {sum}");
    }

    #[test]
    fn test_frequency_variant_full_scalar_set() {
        let tagset = Tagset::penn();
        let fv =
            profile_frequencies(&john_lives_in_paris(), &tagset, &ProperNounChunker).unwrap();

        assert_eq!(fv.get("NUM_SENTENCES"), Some(1.0));
        assert_eq!(fv.get("NUM_WORDS"), Some(5.0));
        // "John"=4, "lives"=5, "in"=2, "Paris"=5, "."=1 -> mean 17/5
        assert!((fv.get("MEAN_WORD_LEN").unwrap() - 3.4).abs() < 1e-9);
        // Tags observed: NNP, VBZ, IN, . -> 4 distinct
        assert_eq!(fv.get("TAGS_UNIQUE"), Some(4.0));
        // gNN and gVB observed
        assert_eq!(fv.get("GENERAL_TAGS_UNIQUE"), Some(2.0));
        // Chunker finds [John], [Paris] -> 2 entities + trailing empty flush
        assert_eq!(fv.get("NAMED_ENTITIES_PER_SENTENCE"), Some(3.0));
        assert_eq!(fv.get("UNIQUE_NAMED_ENTITIES_PER_SENTENCE"), Some(3.0));
    }

    #[test]
    fn test_min_never_exceeds_mean_never_exceeds_max() {
        let tagset = Tagset::penn();
        let d = doc(&[
            &[("Run", "VB"), ("!", ".")],
            &[("We", "PRP"), ("run", "VBP"), ("fast", "RB"), (".", ".")],
            &[("Go", "VB"), (".", ".")],
        ]);
        let fv = profile_frequencies(&d, &tagset, &ProperNounChunker).unwrap();
        for tag in tagset.symbols() {
            let min = fv.get(&format!("MIN_{tag}")).unwrap();
            let mean = fv.get(&format!("MEAN_{tag}")).unwrap();
            let max = fv.get(&format!("MAX_{tag}")).unwrap();
            assert!(min <= mean + 1e-12, "{tag}: {min} > {mean}");
            assert!(mean <= max + 1e-12, "{tag}: {mean} > {max}");
        }
    }

    #[test]
    fn test_idempotent_across_runs() {
        let tagset = Tagset::penn();
        let d = john_lives_in_paris();
        let a = profile_frequencies(&d, &tagset, &ProperNounChunker).unwrap();
        let b = profile_frequencies(&d, &tagset, &ProperNounChunker).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_set_is_input_independent() {
        let tagset = Tagset::penn();
        let a = profile_counts(&john_lives_in_paris(), &tagset).unwrap();
        let b = profile_counts(&doc(&[&[("Hello", "UH")]]), &tagset).unwrap();
        let ka: Vec<&str> = a.keys().collect();
        let kb: Vec<&str> = b.keys().collect();
        assert_eq!(ka, kb);
        assert_eq!(ka.len(), 4 * tagset.len() + 3);
    }

    #[test]
    fn test_single_word_document_is_valid() {
        let tagset = Tagset::penn();
        let fv = profile_frequencies(&doc(&[&[("Hello", "UH")]]), &tagset, &ProperNounChunker)
            .unwrap();
        // Every per-tag accumulator is either 0 or 1.0
        for tag in tagset.symbols() {
            for prefix in ["TOTAL", "MAX", "MIN", "MEAN"] {
                let v = fv.get(&format!("{prefix}_{tag}")).unwrap();
                assert!(v == 0.0 || v == 1.0, "{prefix}_{tag} = {v}");
            }
        }
        assert_eq!(fv.get("TOTAL_UH"), Some(1.0));
        assert_eq!(fv.get("MAX_UH"), Some(1.0));
    }

    #[test]
    fn test_empty_document_rejected() {
        let tagset = Tagset::penn();
        let err = profile_counts(&Document::default(), &tagset).unwrap_err();
        assert!(matches!(err, ProfileError::EmptyDocument));
    }

    #[test]
    fn test_unknown_tag_rejected_before_aggregation() {
        let tagset = Tagset::penn();
        let err = profile_counts(&doc(&[&[("weird", "ZZZ")]]), &tagset).unwrap_err();
        assert!(matches!(err, ProfileError::UnknownTag { .. }));
    }
}
