//! The fixed 16-symbol transcription alphabet.
//!
//! Trunic glyphs are transcribed on a QWERTY keyboard: the four number keys
//! plus the first four keys of the top, home, and bottom letter rows. That
//! keyboard order doubles as the canonical sort rank for glyph characters.
//! `1234QWER` transcribe strokes in the upper half of a glyph, `ASDFZXCV`
//! strokes in the lower half; a `-` inside a run separates the two halves.
//!
//! `E` and `C` are the "linking" characters: the working hypothesis is that
//! strokes transcribed with them belong to the following glyph rather than
//! the one they appear in, so canonicalization strips them by default. The
//! hypothesis is unverified, which is why stripping is a toggle on
//! [CanonicalOptions](crate::trunic::canonical::CanonicalOptions) rather
//! than a fixed rule.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// All alphabet characters in canonical (keyboard) rank order.
pub const ALPHABET: &str = "1234QWERASDFZXCV";

/// Characters transcribing the upper half of a glyph.
pub const TOP_HALF: &str = "1234QWER";

/// Characters transcribing the lower half of a glyph.
pub const BOTTOM_HALF: &str = "ASDFZXCV";

/// Separator between the two halves inside one glyph run.
pub const HALF_SEPARATOR: char = '-';

/// Characters hypothesized to link into the following glyph.
pub const LINKED_CHARS: [char; 2] = ['E', 'C'];

static RANKS: Lazy<HashMap<char, usize>> =
    Lazy::new(|| ALPHABET.chars().enumerate().map(|(i, c)| (c, i)).collect());

/// Canonical sort rank of an alphabet character, `None` outside the alphabet.
pub fn rank(c: char) -> Option<usize> {
    RANKS.get(&c).copied()
}

/// Whether `c` is one of the 16 alphabet characters.
pub fn contains(c: char) -> bool {
    RANKS.contains_key(&c)
}
