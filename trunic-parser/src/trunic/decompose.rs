//! Subglyph decomposition search.
//!
//! Many composite glyphs look like overlays of simpler documented ones.
//! Given a canonical glyph key absent from the sound table, this module
//! searches for sequences of known sub-glyph components that together
//! reconstruct the glyph's character set, reading them off as a candidate
//! pronunciation.
//!
//! The search tries every permutation of the candidate components, not
//! every subset: greedy subtraction is order dependent, because removing a
//! larger overlapping component first can leave a residue no other
//! component matches. Only trying all orderings surfaces every maximal
//! decomposition.
//!
//! Complexity is factorial in the candidate count. That is tolerable
//! because any one glyph draws on at most 16 characters, but it is still
//! explicitly guarded: more than [MAX_COMPONENTS] candidates aborts with
//! an error instead of exploring a pathological ordering space. Each call
//! is pure and stateless.

use crate::trunic::alphabet::{rank, ALPHABET};
use crate::trunic::lexicon::SoundTable;
use std::collections::BTreeSet;
use std::fmt;

/// Hard cap on candidate components for one glyph (8! = 40320 orderings).
pub const MAX_COMPONENTS: usize = 8;

/// Separator between sound labels in a candidate reading.
pub const LABEL_SEPARATOR: &str = "+";

/// The character set of a glyph, as a bitmask over the 16-symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphSet(u16);

impl GlyphSet {
    pub const EMPTY: GlyphSet = GlyphSet(0);

    /// Parse a canonical key (or any run of alphabet characters).
    pub fn from_key(key: &str) -> Result<GlyphSet, DecomposeError> {
        let mut bits = 0u16;
        for c in key.chars() {
            match rank(c) {
                Some(r) => bits |= 1 << r,
                None => {
                    return Err(DecomposeError::InvalidKey {
                        key: key.to_string(),
                        found: c,
                    })
                }
            }
        }
        Ok(GlyphSet(bits))
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether every character of `self` is in `other`.
    pub fn is_subset_of(self, other: GlyphSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Subset of `other` and not equal to it.
    pub fn is_strict_subset_of(self, other: GlyphSet) -> bool {
        self.0 != other.0 && self.is_subset_of(other)
    }

    /// The characters of `self` not in `other`.
    pub fn remove(self, other: GlyphSet) -> GlyphSet {
        GlyphSet(self.0 & !other.0)
    }

    /// Render back to a canonical key (rank order is built in).
    pub fn to_key(self) -> String {
        ALPHABET
            .chars()
            .enumerate()
            .filter(|(i, _)| self.0 & (1 << i) != 0)
            .map(|(_, c)| c)
            .collect()
    }
}

/// Errors from the decomposition search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    /// A key contained a character outside the alphabet.
    InvalidKey { key: String, found: char },
    /// The candidate pool exceeded the termination guard.
    TooManyComponents { glyph: String, count: usize },
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecomposeError::InvalidKey { key, found } => {
                write!(f, "key {:?}: character {:?} is outside the alphabet", key, found)
            }
            DecomposeError::TooManyComponents { glyph, count } => {
                write!(
                    f,
                    "glyph {:?} has {} candidate components (limit {})",
                    glyph, count, MAX_COMPONENTS
                )
            }
        }
    }
}

impl std::error::Error for DecomposeError {}

/// Decompose with the default component cap.
pub fn decompose(glyph: &str, sounds: &SoundTable) -> Result<BTreeSet<String>, DecomposeError> {
    decompose_bounded(glyph, sounds, MAX_COMPONENTS)
}

/// Search for candidate readings of `glyph` against the sound table.
///
/// Returns the distinct readings found:
/// - the table's own label when the glyph is an exact entry;
/// - otherwise, for every ordering of the known strict-subset components,
///   the labels matched by greedy subtraction in that order, with any
///   unmatched residue appended as its canonical key;
/// - the glyph itself when no component matches at all (no hypothesis
///   available, not an error).
pub fn decompose_bounded(
    glyph: &str,
    sounds: &SoundTable,
    max_components: usize,
) -> Result<BTreeSet<String>, DecomposeError> {
    if let Some(label) = sounds.get(glyph) {
        return Ok(BTreeSet::from([label.to_string()]));
    }

    let target = GlyphSet::from_key(glyph)?;
    let mut components: Vec<(GlyphSet, &str)> = Vec::new();
    for (key, label) in sounds.iter() {
        let set = GlyphSet::from_key(key)?;
        if !set.is_empty() && set.is_strict_subset_of(target) {
            components.push((set, label));
        }
    }

    if components.is_empty() {
        return Ok(BTreeSet::from([glyph.to_string()]));
    }
    if components.len() > max_components {
        return Err(DecomposeError::TooManyComponents {
            glyph: glyph.to_string(),
            count: components.len(),
        });
    }

    let mut readings = BTreeSet::new();
    let mut order: Vec<usize> = (0..components.len()).collect();
    permute(&mut order, 0, &mut |order| {
        let mut remaining = target;
        let mut labels: Vec<String> = Vec::new();
        for &i in order {
            let (set, label) = components[i];
            if set.is_subset_of(remaining) {
                remaining = remaining.remove(set);
                labels.push(label.to_string());
                if remaining.is_empty() {
                    break;
                }
            }
        }
        if !remaining.is_empty() {
            labels.push(remaining.to_key());
        }
        readings.insert(labels.join(LABEL_SEPARATOR));
    });

    Ok(readings)
}

/// Visit every permutation of `items` (Heap-style swap recursion).
fn permute<F: FnMut(&[usize])>(items: &mut [usize], k: usize, visit: &mut F) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trunic::testing::factories::sound_table;

    #[test]
    fn glyph_set_round_trips_canonical_keys() {
        let set = GlyphSet::from_key("14WA").unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.to_key(), "14WA");
    }

    #[test]
    fn glyph_set_subset_relations() {
        let target = GlyphSet::from_key("12AS").unwrap();
        let sub = GlyphSet::from_key("1A").unwrap();
        assert!(sub.is_strict_subset_of(target));
        assert!(!target.is_strict_subset_of(target));
        assert!(target.is_subset_of(target));
        assert_eq!(target.remove(sub).to_key(), "2S");
    }

    #[test]
    fn exact_table_hit_returns_its_label() {
        let sounds = sound_table(&[("12", "ah")]);
        let readings = decompose("12", &sounds).unwrap();
        assert_eq!(readings, BTreeSet::from(["ah".to_string()]));
    }

    #[test]
    fn no_candidates_passes_the_glyph_through() {
        let sounds = sound_table(&[("QW", "n")]);
        let readings = decompose("12", &sounds).unwrap();
        assert_eq!(readings, BTreeSet::from(["12".to_string()]));
    }

    #[test]
    fn disjoint_components_concatenate_in_both_orders() {
        let sounds = sound_table(&[("12", "ka"), ("AS", "ru")]);
        let readings = decompose("12AS", &sounds).unwrap();
        assert_eq!(
            readings,
            BTreeSet::from(["ka+ru".to_string(), "ru+ka".to_string()])
        );
    }

    #[test]
    fn overlapping_components_yield_order_dependent_residues() {
        // Target {1,2,3}; components pairwise overlapping. Whichever is
        // subtracted first blocks the others, leaving a one-character
        // residue that differs per ordering.
        let sounds = sound_table(&[("12", "x"), ("23", "y"), ("13", "z")]);
        let readings = decompose("123", &sounds).unwrap();
        assert_eq!(
            readings,
            BTreeSet::from(["x+3".to_string(), "y+1".to_string(), "z+2".to_string()])
        );
    }

    #[test]
    fn unmatched_residue_is_appended_canonically() {
        let sounds = sound_table(&[("12", "ka")]);
        let readings = decompose("12QA", &sounds).unwrap();
        assert_eq!(readings, BTreeSet::from(["ka+QA".to_string()]));
    }

    #[test]
    fn component_pool_above_the_cap_is_rejected() {
        let sounds = sound_table(&[
            ("1", "a"),
            ("2", "b"),
            ("3", "c"),
            ("4", "d"),
            ("12", "e"),
            ("13", "f"),
            ("14", "g"),
            ("23", "h"),
            ("24", "i"),
        ]);
        let err = decompose("1234", &sounds).unwrap_err();
        assert_eq!(
            err,
            DecomposeError::TooManyComponents {
                glyph: "1234".to_string(),
                count: 9
            }
        );
        // A roomier bound lets the same search run.
        assert!(decompose_bounded("1234", &sounds, 9).is_ok());
    }

    #[test]
    fn early_stop_still_finds_full_covers() {
        let sounds = sound_table(&[("1", "a"), ("2", "b"), ("12", "ab")]);
        let readings = decompose("123", &sounds).unwrap();
        assert!(readings.contains("ab+3"));
        assert!(readings.contains("a+b+3"));
        assert!(readings.contains("b+a+3"));
    }
}
