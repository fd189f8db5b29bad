//! Shared test support.
//!
//! Factories for building fixtures without going through the full pipeline
//! in every test. Only test code should depend on this module; factories
//! panic on bad input rather than returning errors.

pub mod factories {
    use crate::trunic::ast::Word;
    use crate::trunic::canonical::{canonicalize, CanonicalOptions};
    use crate::trunic::lexicon::SoundTable;

    /// A word from already-canonical (or canonicalizable) glyph keys.
    pub fn word(keys: &[&str]) -> Word {
        Word {
            glyphs: keys
                .iter()
                .map(|key| canonicalize(key).expect("factory glyph must be valid"))
                .collect(),
        }
    }

    /// A sound table from key/label pairs.
    pub fn sound_table(pairs: &[(&str, &str)]) -> SoundTable {
        SoundTable::from_entries(pairs.iter().copied(), &CanonicalOptions::default())
            .expect("factory sound table must be valid")
    }

    /// A small well-formed corpus document used across tests.
    pub fn sample_source() -> &'static str {
        "# ruins\n# entrance\n12 12/34\n[a door opens] QW\n# altar\n12\nQW/AS\n"
    }
}
