//! Property-based tests for glyph canonicalization.
//!
//! The canonical key is a set identity: any ordering or duplication of the
//! same characters must produce the same key, the key must be rank-sorted
//! and duplicate-free, and canonicalization must be idempotent.

use proptest::prelude::*;
use proptest::sample::subsequence;
use trunic_parser::trunic::alphabet::{rank, ALPHABET};
use trunic_parser::trunic::canonical::canonicalize;

fn alphabet_chars() -> Vec<char> {
    ALPHABET.chars().collect()
}

proptest! {
    #[test]
    fn order_of_input_characters_is_irrelevant(
        chars in subsequence(alphabet_chars(), 1..=16).prop_shuffle()
    ) {
        let shuffled: String = chars.iter().collect();
        let mut sorted = chars.clone();
        sorted.sort_by_key(|&c| rank(c));
        let in_rank_order: String = sorted.iter().collect();

        prop_assert_eq!(
            canonicalize(&shuffled).unwrap(),
            canonicalize(&in_rank_order).unwrap()
        );
    }

    #[test]
    fn duplication_is_irrelevant(
        chars in subsequence(alphabet_chars(), 1..=16).prop_shuffle()
    ) {
        let once: String = chars.iter().collect();
        let doubled: String = format!("{}{}", once, once);

        prop_assert_eq!(canonicalize(&once).unwrap(), canonicalize(&doubled).unwrap());
    }

    #[test]
    fn output_is_rank_sorted_and_duplicate_free(
        chars in subsequence(alphabet_chars(), 1..=16).prop_shuffle()
    ) {
        let raw: String = chars.iter().collect();
        let key = canonicalize(&raw).unwrap();

        let ranks: Vec<usize> = key
            .as_str()
            .chars()
            .map(|c| rank(c).expect("canonical output stays in the alphabet"))
            .collect();
        prop_assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn canonicalization_is_idempotent(
        chars in subsequence(alphabet_chars(), 1..=16).prop_shuffle()
    ) {
        let raw: String = chars.iter().collect();
        let once = canonicalize(&raw).unwrap();
        // An all-linking-characters input reduces to the empty key, which
        // is no longer a parseable glyph run; idempotence applies to the
        // non-empty keys the parser actually produces.
        prop_assume!(!once.is_empty());
        let twice = canonicalize(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
