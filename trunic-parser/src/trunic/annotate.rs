//! Provenance annotation.
//!
//! A pure transformation over a parsed tree: every line in a line-bodied
//! section is stamped with the owning section's label and its 1-based
//! ordinal within that section. The tree's logical content is unchanged.
//!
//! Each line is annotated exactly once. A line that already carries
//! provenance means the tree was annotated twice or constructed by hand in
//! a half-annotated state; both are programming defects, so the assertion
//! fails fast instead of recovering.

use crate::trunic::ast::{Document, Line, Provenance, Section, SectionBody};

/// Return a new document with every line stamped with provenance.
pub fn annotate(document: Document) -> Document {
    Document {
        root: annotate_section(document.root),
    }
}

fn annotate_section(section: Section) -> Section {
    let label = section.label;
    let body = match section.body {
        SectionBody::Sections(children) => {
            SectionBody::Sections(children.into_iter().map(annotate_section).collect())
        }
        SectionBody::Lines(lines) => SectionBody::Lines(
            lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| {
                    assert!(
                        line.provenance.is_none(),
                        "line {} in section {:?} annotated twice",
                        i + 1,
                        label
                    );
                    Line {
                        provenance: Some(Provenance {
                            section: label.clone(),
                            line: i + 1,
                        }),
                        ..line
                    }
                })
                .collect(),
        ),
    };
    Section { label, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trunic::parsing::parse;

    fn provenances(document: &Document) -> Vec<String> {
        let mut out = Vec::new();
        document.visit_lines(&mut |line| {
            out.push(
                line.provenance
                    .as_ref()
                    .expect("annotated line")
                    .to_string(),
            );
        });
        out
    }

    #[test]
    fn stamps_section_label_and_ordinal() {
        let doc = annotate(parse("# notes\n12\n34 QW\n").unwrap());
        assert_eq!(provenances(&doc), vec!["notes, line 1", "notes, line 2"]);
    }

    #[test]
    fn ordinals_restart_per_section() {
        let doc = annotate(parse("# all\n# east\n12\n# west\n34\nQW\n").unwrap());
        assert_eq!(
            provenances(&doc),
            vec!["east, line 1", "west, line 1", "west, line 2"]
        );
    }

    #[test]
    fn leaves_content_untouched() {
        let parsed = parse("# notes\n12 [a door]\n").unwrap();
        let annotated = annotate(parsed.clone());
        let mut before = Vec::new();
        parsed.visit_lines(&mut |line| before.push(line.items.clone()));
        let mut after = Vec::new();
        annotated.visit_lines(&mut |line| after.push(line.items.clone()));
        assert_eq!(before, after);
    }

    #[test]
    #[should_panic(expected = "annotated twice")]
    fn double_annotation_fails_fast() {
        let doc = annotate(parse("# notes\n12\n").unwrap());
        let _ = annotate(doc);
    }
}
