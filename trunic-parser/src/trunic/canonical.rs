//! Glyph canonicalization.
//!
//! A glyph is an unordered set of alphabet characters; its canonical key is
//! that set deduplicated and sorted in keyboard rank order, with the half
//! separator and (configurably) the linking characters removed. The key is
//! the glyph's identity everywhere else in the crate: two transcriptions
//! denote the same glyph exactly when their canonical keys are equal.
//!
//! Canonicalization is deterministic, order-independent in its input, and
//! idempotent: feeding a canonical key back through produces the same key.

use crate::trunic::alphabet::{rank, ALPHABET, HALF_SEPARATOR, LINKED_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical glyph key: unique alphabet characters in rank order.
///
/// The key may be empty when the raw run contained only stripped
/// characters (a run of nothing but linking strokes).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalGlyph(String);

impl CanonicalGlyph {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Knobs controlling canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalOptions {
    /// Strip the linking characters `E` and `C`. The linking hypothesis is
    /// unverified domain speculation, so it stays a toggle.
    pub strip_linked: bool,
}

impl Default for CanonicalOptions {
    fn default() -> Self {
        Self { strip_linked: true }
    }
}

/// Errors from canonicalizing a raw glyph run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    /// The input held no alphabet characters: empty, or separators only.
    /// A run of only linking characters does NOT hit this; those are
    /// alphabet characters even when stripping reduces them to nothing.
    Empty,
    /// A character outside the 16-symbol alphabet.
    OutsideAlphabet(char),
}

impl fmt::Display for CanonicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalError::Empty => write!(f, "glyph contains no alphabet characters"),
            CanonicalError::OutsideAlphabet(c) => {
                write!(f, "character {:?} is outside the glyph alphabet", c)
            }
        }
    }
}

impl std::error::Error for CanonicalError {}

/// Canonicalize with the default options (linking characters stripped).
pub fn canonicalize(raw: &str) -> Result<CanonicalGlyph, CanonicalError> {
    canonicalize_with(raw, &CanonicalOptions::default())
}

/// Reduce a raw glyph run to its canonical key.
pub fn canonicalize_with(
    raw: &str,
    options: &CanonicalOptions,
) -> Result<CanonicalGlyph, CanonicalError> {
    let mut seen = [false; 16];
    let mut saw_alphabet = false;
    for c in raw.chars() {
        if c == HALF_SEPARATOR {
            continue;
        }
        if options.strip_linked && LINKED_CHARS.contains(&c) {
            saw_alphabet = true;
            continue;
        }
        match rank(c) {
            Some(r) => {
                seen[r] = true;
                saw_alphabet = true;
            }
            None => return Err(CanonicalError::OutsideAlphabet(c)),
        }
    }
    if !saw_alphabet {
        return Err(CanonicalError::Empty);
    }

    let key = ALPHABET
        .chars()
        .enumerate()
        .filter(|(i, _)| seen[*i])
        .map(|(_, c)| c)
        .collect();
    Ok(CanonicalGlyph(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_keyboard_rank() {
        assert_eq!(canonicalize("W1A4").unwrap().as_str(), "14WA");
    }

    #[test]
    fn deduplicates() {
        assert_eq!(canonicalize("1111").unwrap().as_str(), "1");
    }

    #[test]
    fn strips_half_separator() {
        assert_eq!(canonicalize("12-AS").unwrap().as_str(), "12AS");
    }

    #[test]
    fn strips_linked_chars_by_default() {
        assert_eq!(canonicalize("1E2C").unwrap().as_str(), "12");
    }

    #[test]
    fn linked_chars_survive_when_toggled_off() {
        let options = CanonicalOptions {
            strip_linked: false,
        };
        assert_eq!(canonicalize_with("1E2C", &options).unwrap().as_str(), "12EC");
    }

    #[test]
    fn run_of_only_linked_chars_yields_empty_key() {
        let glyph = canonicalize("EC").unwrap();
        assert!(glyph.is_empty());
    }

    #[test]
    fn idempotent() {
        let once = canonicalize("R4W1-ZXA").unwrap();
        let twice = canonicalize(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(canonicalize(""), Err(CanonicalError::Empty));
    }

    #[test]
    fn rejects_separator_only_runs() {
        assert_eq!(canonicalize("-"), Err(CanonicalError::Empty));
        assert_eq!(canonicalize("--"), Err(CanonicalError::Empty));
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert_eq!(
            canonicalize("12z"),
            Err(CanonicalError::OutsideAlphabet('z'))
        );
    }
}
