//! # trunic-parser
//!
//! Parser and analysis core for the trunic glyph script, a constructed
//! writing system transcribed with a fixed 16-symbol keyboard alphabet.
//!
//! The library is organized as a pipeline:
//!
//!     source text
//!         -> lexing        (line classification + logos tokenization)
//!         -> parsing       (section / line / word / glyph tree)
//!         -> annotate      (provenance stamping)
//!         -> index         (word and glyph occurrence maps)
//!
//! Glyphs are reduced to canonical keys during parsing (see
//! [canonical](trunic::canonical)), and the [decompose](trunic::decompose)
//! module runs independently of the indexing pass: it explains composite
//! glyphs as sequences of known sub-glyph sounds via bounded permutation
//! search.
//!
//! Presentation concerns (tree rendering, source re-emission, serialized
//! dumps) live in [formats](trunic::formats); interactive and file-walking
//! surfaces live in the `trunic-cli` crate and carry no decision logic.

pub mod trunic;
