//! Core modules for parsing and analyzing trunic transcriptions.

pub mod alphabet;
pub mod annotate;
pub mod ast;
pub mod canonical;
pub mod decompose;
pub mod formats;
pub mod index;
pub mod lexicon;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;

pub use annotate::annotate;
pub use ast::{Document, Line, LineItem, Provenance, Section, SectionBody, Word};
pub use canonical::{canonicalize, canonicalize_with, CanonicalGlyph, CanonicalOptions};
pub use decompose::{decompose, decompose_bounded, DecomposeError, GlyphSet};
pub use index::{points_of_interest, FrequencyIndex};
pub use lexicon::{translate_word, SoundTable, WordTable};
pub use parsing::{parse, parse_with, ParseError};
