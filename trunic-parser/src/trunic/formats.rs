//! Output formats for parsed trees.
//!
//! Two human-facing renderings live here: an indented tree view for
//! inspection, and re-emission of parseable source text. Re-emitted source
//! contains canonical words, so parsing it again reproduces the same
//! canonical word sequence (canonicalization is idempotent); that
//! round-trip is exercised in the integration tests.
//!
//! Structured dumps (JSON/YAML) come for free from the serde derives on
//! the AST and index types; the CLI drives those directly.

use crate::trunic::ast::{Document, Line, LineItem, Section, SectionBody};
use std::fmt::Write;

/// Render an indented tree view of the document.
pub fn to_treeviz_str(document: &Document) -> String {
    let mut out = String::new();
    render_section(&document.root, 0, &mut out);
    out
}

fn render_section(section: &Section, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    let _ = writeln!(out, "{}section {:?}", pad, section.label);
    match &section.body {
        SectionBody::Sections(children) => {
            for child in children {
                render_section(child, depth + 1, out);
            }
        }
        SectionBody::Lines(lines) => {
            for line in lines {
                render_line(line, depth + 1, out);
            }
        }
    }
}

fn render_line(line: &Line, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    let location = match &line.provenance {
        Some(provenance) => format!("  ({})", provenance),
        None => String::new(),
    };
    let _ = writeln!(out, "{}line{}", pad, location);
    for item in &line.items {
        match item {
            LineItem::Word(word) => {
                let _ = writeln!(out, "{}  word {}", pad, word.key());
            }
            LineItem::Literal(text) => {
                let _ = writeln!(out, "{}  literal [{}]", pad, text);
            }
        }
    }
}

/// Re-emit a document as parseable source text.
///
/// Words come out in canonical form and literals keep their brackets;
/// provenance is presentation-only and is not emitted.
pub fn to_source(document: &Document) -> String {
    let mut out = String::new();
    emit_section(&document.root, &mut out);
    out
}

fn emit_section(section: &Section, out: &mut String) {
    let _ = writeln!(out, "# {}", section.label);
    match &section.body {
        SectionBody::Sections(children) => {
            for child in children {
                emit_section(child, out);
            }
        }
        SectionBody::Lines(lines) => {
            for line in lines {
                let rendered: Vec<String> = line
                    .items
                    .iter()
                    .map(|item| match item {
                        LineItem::Word(word) => word.key(),
                        LineItem::Literal(text) => format!("[{}]", text),
                    })
                    .collect();
                let _ = writeln!(out, "{}", rendered.join(" "));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trunic::annotate::annotate;
    use crate::trunic::parsing::parse;

    #[test]
    fn treeviz_shows_structure_and_provenance() {
        let doc = annotate(parse("# notes\n12 [a door]\n").unwrap());
        let viz = to_treeviz_str(&doc);
        assert_eq!(
            viz,
            "section \"notes\"\n  line  (notes, line 1)\n    word 12\n    literal [a door]\n"
        );
    }

    #[test]
    fn documents_serialize_to_json_and_back() {
        let doc = annotate(parse("# notes\n12 [a door]\n").unwrap());
        let json = serde_json::to_string(&doc).unwrap();
        let restored: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, doc);
    }

    #[test]
    fn source_emission_is_parseable() {
        let doc = parse("# all\n# east\nW1 [hm] 12/34\n# west\nQW\n").unwrap();
        let emitted = to_source(&doc);
        assert_eq!(emitted, "# all\n# east\n1W [hm] 12/34\n# west\nQW\n");
        let reparsed = parse(&emitted).unwrap();
        assert_eq!(reparsed, doc);
    }
}
