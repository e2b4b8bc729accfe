//! The tag aggregation engine
//!
//! One parametrized scan serves both profiling variants; the only moving
//! part is the weighting strategy. Accumulators are tagset-length arrays
//! addressed by tagset index, created per call and consumed into the
//! feature vector.

use crate::models::{Document, FeatureVector, Sentence};
use crate::tagset::Tagset;

/// How much a single tag occurrence contributes to an accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// `1 / span_length` — occurrences become frequency shares of the
    /// document (for totals) or sentence (for snapshots).
    InverseLength,
    /// Plain occurrence counting.
    Unit,
}

impl Weighting {
    fn weight(self, span_len: usize) -> f64 {
        match self {
            Weighting::InverseLength => 1.0 / span_len as f64,
            Weighting::Unit => 1.0,
        }
    }
}

/// The four parallel per-tag statistics produced by a scan.
#[derive(Debug, Clone)]
pub struct TagAccumulators {
    total: Vec<f64>,
    max_in_sent: Vec<f64>,
    min_in_sent: Vec<f64>,
    mean_in_sent: Vec<f64>,
}

impl TagAccumulators {
    fn new(len: usize) -> Self {
        // MAX and MIN both start at zero. Starting MIN at zero means a tag
        // present in every sentence still reports MIN 0: the document-wide
        // minimum is floor-capped at the initial value. This mirrors the
        // reference behavior exactly and is intentional parity, not a fix.
        Self {
            total: vec![0.0; len],
            max_in_sent: vec![0.0; len],
            min_in_sent: vec![0.0; len],
            mean_in_sent: vec![0.0; len],
        }
    }

    /// Fold one sentence snapshot into the running per-sentence stats.
    fn fold_snapshot(&mut self, snapshot: &[f64], num_sentences: usize) {
        for (i, &v) in snapshot.iter().enumerate() {
            self.max_in_sent[i] = self.max_in_sent[i].max(v);
            self.min_in_sent[i] = self.min_in_sent[i].min(v);
            self.mean_in_sent[i] += v / num_sentences as f64;
        }
    }

    /// Merge the four statistics into a feature vector, prefixing each
    /// tagset symbol with TOTAL_/MAX_/MIN_/MEAN_ in that order.
    pub fn into_features(self, tagset: &Tagset) -> FeatureVector {
        let mut features = FeatureVector::new();
        for (prefix, values) in [
            ("TOTAL", &self.total),
            ("MAX", &self.max_in_sent),
            ("MIN", &self.min_in_sent),
            ("MEAN", &self.mean_in_sent),
        ] {
            for (tag, &value) in tagset.symbols().iter().zip(values.iter()) {
                features.insert(format!("{prefix}_{tag}"), value);
            }
        }
        features
    }
}

/// Distinct-tag counts observed during the sentence scan.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ScanStats {
    pub distinct_raw: usize,
    pub distinct_general: usize,
}

/// Add one token occurrence to a tagset-length array: the raw tag bucket
/// always, the general roll-up bucket when the tag's prefix class is
/// recognized. At most one bucket of each kind per token.
fn bump(values: &mut [f64], tagset: &Tagset, tag: &str, weight: f64) {
    // Caller has validated the document, so the raw lookup cannot miss.
    if let Some(raw) = tagset.index_of(tag) {
        values[raw] += weight;
        if let Some(general) = tagset.general_for(raw) {
            values[general] += weight;
        }
    }
}

/// Run the full aggregation scan over a validated document.
///
/// Document pass: totals against the whole-document normalizer.
/// Sentence pass: a fresh snapshot per sentence against the sentence
/// normalizer, folded into MAX/MIN/MEAN.
pub(crate) fn aggregate(
    document: &Document,
    tagset: &Tagset,
    weighting: Weighting,
) -> (TagAccumulators, ScanStats) {
    let mut acc = TagAccumulators::new(tagset.len());
    let num_sentences = document.sentences.len();

    let doc_weight = weighting.weight(document.word_count());
    for token in document.tokens() {
        bump(&mut acc.total, tagset, &token.tag, doc_weight);
    }

    let mut seen = vec![false; tagset.len()];
    for sentence in &document.sentences {
        let snapshot = sentence_snapshot(sentence, tagset, weighting, &mut seen);
        acc.fold_snapshot(&snapshot, num_sentences);
    }

    let mut scan = ScanStats::default();
    for (i, &hit) in seen.iter().enumerate() {
        if hit {
            if tagset.is_raw_index(i) {
                scan.distinct_raw += 1;
            } else {
                scan.distinct_general += 1;
            }
        }
    }
    (acc, scan)
}

/// Zero-initialized per-sentence snapshot over the full tagset, plus
/// observed-tag bookkeeping for the distinct-tag features.
fn sentence_snapshot(
    sentence: &Sentence,
    tagset: &Tagset,
    weighting: Weighting,
    seen: &mut [bool],
) -> Vec<f64> {
    let mut snapshot = vec![0.0; tagset.len()];
    let sent_weight = weighting.weight(sentence.len());
    for token in sentence {
        bump(&mut snapshot, tagset, &token.tag, sent_weight);
        if let Some(raw) = tagset.index_of(&token.tag) {
            seen[raw] = true;
            if let Some(general) = tagset.general_for(raw) {
                seen[general] = true;
            }
        }
    }
    snapshot
}
