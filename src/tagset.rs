//! The fixed POS tagset and its index lookup
//!
//! The engine recognizes a closed set of Penn Treebank raw tags plus six
//! "general" roll-up tags derived from a raw tag's first two characters
//! (all VB* forms roll up to gVB, and so on). The tagset is immutable:
//! build it once at startup and pass it by reference into every call.

use rustc_hash::FxHashMap;

/// Penn Treebank raw tags, in the fixed order used for feature keys.
/// Order matters: it defines accumulator indices and output key order.
pub const RAW_TAGS: &[&str] = &[
    "CC", "CD", "DT", "EX", "FW", "IN", "JJ", "JJR", "JJS", "LS", "MD", "NN", "NNS", "NNP",
    "NNPS", "PDT", "POS", "PRP", "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO", "UH", "VB", "VBD",
    "VBG", "VBN", "VBP", "VBZ", "WDT", "WP", "WP$", "WRB", ".", ",", ":", "(", ")", "``", "''",
    "--", "$",
];

/// Roll-up categories: `g` + the first two characters of a raw tag.
pub const GENERAL_TAGS: &[&str] = &["gVB", "gNN", "gPR", "gWP", "gRB", "gJJ"];

/// The closed tagset: raw tags followed by general tags, with a
/// symbol-to-index table built once.
#[derive(Debug, Clone)]
pub struct Tagset {
    symbols: Vec<&'static str>,
    index: FxHashMap<&'static str, usize>,
    /// Raw index -> general bucket index, precomputed so the aggregation
    /// loop never re-derives the prefix class per token.
    general: Vec<Option<usize>>,
    raw_len: usize,
}

impl Tagset {
    /// The Penn Treebank tagset used by standard English taggers.
    pub fn penn() -> Self {
        let symbols: Vec<&'static str> = RAW_TAGS
            .iter()
            .chain(GENERAL_TAGS.iter())
            .copied()
            .collect();
        let index: FxHashMap<&'static str, usize> =
            symbols.iter().enumerate().map(|(i, s)| (*s, i)).collect();
        let general = RAW_TAGS
            .iter()
            .map(|tag| {
                let prefix = tag.get(..2)?;
                index.get(format!("g{prefix}").as_str()).copied()
            })
            .collect();
        Self {
            symbols,
            index,
            general,
            raw_len: RAW_TAGS.len(),
        }
    }

    /// Total number of symbols (raw + general). Accumulator arrays are
    /// sized to this.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in fixed order, raw tags first.
    pub fn symbols(&self) -> &[&'static str] {
        &self.symbols
    }

    /// Raw tags only.
    pub fn raw_tags(&self) -> &[&'static str] {
        &self.symbols[..self.raw_len]
    }

    /// Accumulator index for a symbol (raw or general), if recognized.
    pub fn index_of(&self, tag: &str) -> Option<usize> {
        self.index.get(tag).copied()
    }

    /// True if the index addresses a raw tag rather than a general one.
    pub fn is_raw_index(&self, index: usize) -> bool {
        index < self.raw_len
    }

    /// General roll-up bucket for a raw tag index, if the tag's two-char
    /// prefix class is one of the recognized general tags. A plain array
    /// read; the table is built once in the constructor.
    pub fn general_for(&self, raw_index: usize) -> Option<usize> {
        self.general.get(raw_index).copied().flatten()
    }

    /// Index of the general roll-up bucket for a raw tag symbol.
    ///
    /// Derivation mirrors the aggregation rule: `general = "g" + tag[..2]`.
    /// Tags shorter than two characters (punctuation) have no roll-up.
    pub fn general_of(&self, tag: &str) -> Option<usize> {
        self.index_of(tag).and_then(|i| self.general_for(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagset_size() {
        let tagset = Tagset::penn();
        assert_eq!(tagset.raw_tags().len(), 45);
        assert_eq!(tagset.len(), 45 + 6);
    }

    #[test]
    fn test_index_of_round_trips_every_symbol() {
        let tagset = Tagset::penn();
        for (i, sym) in tagset.symbols().iter().enumerate() {
            assert_eq!(tagset.index_of(sym), Some(i));
        }
        assert_eq!(tagset.index_of("XYZ"), None);
    }

    #[test]
    fn test_general_rollup_classes() {
        let tagset = Tagset::penn();
        // Every verb form rolls up to gVB
        let gvb = tagset.index_of("gVB").unwrap();
        for tag in ["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"] {
            assert_eq!(tagset.general_of(tag), Some(gvb), "{tag}");
        }
        // Noun forms roll up to gNN
        let gnn = tagset.index_of("gNN").unwrap();
        for tag in ["NN", "NNS", "NNP", "NNPS"] {
            assert_eq!(tagset.general_of(tag), Some(gnn), "{tag}");
        }
        assert_eq!(tagset.general_of("PRP$"), tagset.index_of("gPR"));
        assert_eq!(tagset.general_of("WP"), tagset.index_of("gWP"));
        assert_eq!(tagset.general_of("RBS"), tagset.index_of("gRB"));
        assert_eq!(tagset.general_of("JJR"), tagset.index_of("gJJ"));
    }

    #[test]
    fn test_no_rollup_for_other_tags() {
        let tagset = Tagset::penn();
        // DT's prefix class gDT is not a general tag
        assert_eq!(tagset.general_of("DT"), None);
        // Single-char punctuation has no two-char prefix
        assert_eq!(tagset.general_of("."), None);
        assert_eq!(tagset.general_of("$"), None);
    }

    #[test]
    fn test_general_table_matches_prefix_derivation() {
        let tagset = Tagset::penn();
        for (i, tag) in tagset.raw_tags().iter().enumerate() {
            let derived = tag
                .get(..2)
                .and_then(|prefix| tagset.index_of(&format!("g{prefix}")));
            assert_eq!(tagset.general_for(i), derived, "{tag}");
            assert_eq!(tagset.general_of(tag), derived, "{tag}");
        }
        // General indices themselves have no roll-up entry
        let gvb = tagset.index_of("gVB").unwrap();
        assert_eq!(tagset.general_for(gvb), None);
    }

    #[test]
    fn test_each_raw_tag_has_at_most_one_class() {
        let tagset = Tagset::penn();
        for tag in tagset.raw_tags() {
            // general_of is a function, so uniqueness holds by construction;
            // check the derived bucket is never the raw tag itself.
            if let Some(idx) = tagset.general_of(tag) {
                assert!(!tagset.is_raw_index(idx));
            }
        }
    }
}
