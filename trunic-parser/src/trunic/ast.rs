//! AST definitions for parsed trunic documents.
//!
//! A document is one top-level section. A section holds either nested
//! sections or lines, never both; the split is enforced in the types via
//! [SectionBody], so a mixed section cannot be constructed. Lines hold
//! words and verbatim literals. Words are ordered sequences of canonical
//! glyph keys, and a word's `/`-joined key string is its identity for
//! indexing.
//!
//! Provenance (owning section label + 1-based line ordinal) is `None` as
//! parsed and filled in exactly once by [annotate](crate::trunic::annotate).
//! It is used for reporting only, never for identity or ownership.

use crate::trunic::canonical::CanonicalGlyph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed source document: one top-level section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub root: Section,
}

impl Document {
    /// Visit every line in the document, depth first.
    pub fn visit_lines<F: FnMut(&Line)>(&self, f: &mut F) {
        self.root.visit_lines(f);
    }
}

/// A header-labeled grouping of lines or nested sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub body: SectionBody,
}

impl Section {
    pub fn visit_lines<F: FnMut(&Line)>(&self, f: &mut F) {
        match &self.body {
            SectionBody::Sections(children) => {
                for child in children {
                    child.visit_lines(f);
                }
            }
            SectionBody::Lines(lines) => {
                for line in lines {
                    f(line);
                }
            }
        }
    }
}

/// Section content: nested sections or lines, never a mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SectionBody {
    Sections(Vec<Section>),
    Lines(Vec<Line>),
}

/// One significant source line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub items: Vec<LineItem>,
    /// Set exactly once by annotation; `None` straight out of the parser.
    pub provenance: Option<Provenance>,
}

impl Line {
    /// The words on this line, skipping literals.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.items.iter().filter_map(|item| match item {
            LineItem::Word(word) => Some(word),
            LineItem::Literal(_) => None,
        })
    }
}

/// A word or an opaque literal annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LineItem {
    Word(Word),
    Literal(String),
}

/// An ordered sequence of canonical glyphs forming one lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub glyphs: Vec<CanonicalGlyph>,
}

impl Word {
    /// Canonical string form: glyph keys joined with `/`. This is the
    /// word's identity for indexing and translation lookup.
    pub fn key(&self) -> String {
        self.glyphs
            .iter()
            .map(CanonicalGlyph::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Where a line was seen: owning section and 1-based ordinal within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub section: String,
    pub line: usize,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, line {}", self.section, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trunic::testing::factories::word;

    #[test]
    fn word_key_joins_glyphs_with_slash() {
        assert_eq!(word(&["12", "34"]).key(), "12/34");
        assert_eq!(word(&["12"]).key(), "12");
    }

    #[test]
    fn provenance_display_matches_report_format() {
        let provenance = Provenance {
            section: "east shrine".to_string(),
            line: 3,
        };
        assert_eq!(provenance.to_string(), "east shrine, line 3");
    }

    #[test]
    fn line_words_skip_literals() {
        let line = Line {
            items: vec![
                LineItem::Literal("a door".to_string()),
                LineItem::Word(word(&["12"])),
            ],
            provenance: None,
        };
        let keys: Vec<String> = line.words().map(Word::key).collect();
        assert_eq!(keys, vec!["12".to_string()]);
    }
}
