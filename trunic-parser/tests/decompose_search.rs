//! Scenario tests for the decomposition search against richer sound tables.

use std::collections::BTreeSet;
use trunic_parser::trunic::decompose::{decompose, decompose_bounded, DecomposeError};
use trunic_parser::trunic::testing::factories::sound_table;

#[test]
fn three_disjoint_components_cover_in_every_order() {
    let sounds = sound_table(&[("12", "ka"), ("AS", "ru"), ("QW", "n")]);
    let readings = decompose("12QWAS", &sounds).unwrap();

    // All components are disjoint and together cover the glyph exactly, so
    // every ordering is a full cover with no residue.
    assert_eq!(readings.len(), 6);
    assert!(readings.contains("ka+ru+n"));
    assert!(readings.contains("n+ka+ru"));
    assert!(readings.iter().all(|reading| !reading.contains("+Q")));
}

#[test]
fn larger_component_can_block_a_full_cover() {
    // {1,2,A,S} decomposes fully as 12 + AS, but subtracting 2A first
    // leaves {1,S}, which nothing matches. Both outcomes must be surfaced.
    let sounds = sound_table(&[("12", "ka"), ("AS", "ru"), ("2A", "zo")]);
    let readings = decompose("12AS", &sounds).unwrap();

    assert!(readings.contains("ka+ru"));
    assert!(readings.contains("ru+ka"));
    assert!(readings.contains("zo+1S"));
}

#[test]
fn unknown_glyph_with_empty_table_passes_through() {
    let sounds = sound_table(&[]);
    let readings = decompose("1234", &sounds).unwrap();
    assert_eq!(readings, BTreeSet::from(["1234".to_string()]));
}

#[test]
fn exact_entry_shortcuts_the_search() {
    let sounds = sound_table(&[("12AS", "door"), ("12", "ka"), ("AS", "ru")]);
    let readings = decompose("12AS", &sounds).unwrap();
    assert_eq!(readings, BTreeSet::from(["door".to_string()]));
}

#[test]
fn guard_rejects_pathological_candidate_pools() {
    let sounds = sound_table(&[
        ("1", "a"),
        ("2", "b"),
        ("3", "c"),
        ("4", "d"),
        ("Q", "e"),
        ("W", "f"),
        ("12", "g"),
        ("34", "h"),
        ("QW", "i"),
    ]);
    assert!(matches!(
        decompose("1234QW", &sounds),
        Err(DecomposeError::TooManyComponents { count: 9, .. })
    ));
    // The bound is a guard, not a correctness limit.
    let readings = decompose_bounded("1234QW", &sounds, 9).unwrap();
    assert!(readings.contains("g+h+i"));
}
