//! Frequency indexing of words and glyphs.
//!
//! Two maps are built from annotated trees: word key to the set of places
//! it was seen (as provenance descriptors), and glyph key to the set of
//! word keys containing it. BTree containers keep reports deterministic.
//!
//! One index accumulates across a whole corpus: call [FrequencyIndex::scan]
//! once per document, in a stable file order, so location descriptors are
//! reproducible run to run. Indexing an unannotated tree is a programming
//! defect and fails fast.

use crate::trunic::ast::{Document, Line};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Occurrence maps for a scanned corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyIndex {
    /// Word key -> locations where the word was seen.
    pub words: BTreeMap<String, BTreeSet<String>>,
    /// Glyph key -> word keys containing the glyph.
    pub glyphs: BTreeMap<String, BTreeSet<String>>,
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a single annotated document.
    pub fn build(document: &Document) -> Self {
        let mut index = Self::new();
        index.scan(document);
        index
    }

    /// Fold one annotated document into the index.
    pub fn scan(&mut self, document: &Document) {
        document.visit_lines(&mut |line| self.scan_line(line));
    }

    fn scan_line(&mut self, line: &Line) {
        let provenance = line
            .provenance
            .as_ref()
            .expect("indexing requires an annotated tree; run annotate() first");
        for word in line.words() {
            let key = word.key();
            self.words
                .entry(key.clone())
                .or_default()
                .insert(provenance.to_string());
            for glyph in &word.glyphs {
                self.glyphs
                    .entry(glyph.as_str().to_string())
                    .or_default()
                    .insert(key.clone());
            }
        }
    }
}

/// Keys of `space` whose value set has at least `n` members.
///
/// Pure filter over either index map. `n` must be at least 1; a threshold
/// of 0 would select everything and is a caller bug.
pub fn points_of_interest<'a>(
    space: &'a BTreeMap<String, BTreeSet<String>>,
    n: usize,
) -> BTreeMap<&'a str, &'a BTreeSet<String>> {
    assert!(n >= 1, "points_of_interest threshold must be positive");
    space
        .iter()
        .filter(|(_, seen)| seen.len() >= n)
        .map(|(key, seen)| (key.as_str(), seen))
        .collect()
}
