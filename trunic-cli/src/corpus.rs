//! Corpus scanning: walk a notes directory, parse each file, accumulate
//! one frequency index.
//!
//! Files are processed in lexicographic path order so location ordinals
//! and reported provenance are reproducible across runs. A malformed file
//! is reported on stderr and skipped; the scan continues with the next
//! file (file-level isolation), and no partial tree from it survives.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::Walk;
use trunic_parser::trunic::annotate::annotate;
use trunic_parser::trunic::ast::Document;
use trunic_parser::trunic::canonical::CanonicalOptions;
use trunic_parser::trunic::index::FrequencyIndex;
use trunic_parser::trunic::parsing::parse_with;

/// Everything a scan produced: the parsed documents and the shared index.
pub struct Corpus {
    pub documents: Vec<(PathBuf, Document)>,
    pub index: FrequencyIndex,
}

/// Parse every `.txt` file under `dir` and index the results.
pub fn scan_corpus(dir: &Path, options: &CanonicalOptions) -> Corpus {
    let mut paths: Vec<PathBuf> = Walk::new(dir)
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "txt"))
        .map(|entry| entry.into_path())
        .collect();
    paths.sort();

    let mut corpus = Corpus {
        documents: Vec::new(),
        index: FrequencyIndex::new(),
    };

    for path in paths {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                continue;
            }
        };
        match parse_with(&text, options) {
            Ok(document) => {
                let document = annotate(document);
                corpus.index.scan(&document);
                corpus.documents.push((path, document));
            }
            Err(err) => eprintln!("{}: {}", path.display(), err),
        }
    }

    corpus
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn scans_files_in_lexicographic_order() {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in [("b.txt", "# west\n12\n"), ("a.txt", "# east\n12\n")] {
            let mut file = fs::File::create(dir.path().join(name)).unwrap();
            file.write_all(body.as_bytes()).unwrap();
        }

        let corpus = scan_corpus(dir.path(), &CanonicalOptions::default());
        let labels: Vec<&str> = corpus
            .documents
            .iter()
            .map(|(_, doc)| doc.root.label.as_str())
            .collect();
        assert_eq!(labels, vec!["east", "west"]);
        assert_eq!(corpus.index.words["12"].len(), 2);
    }

    #[test]
    fn malformed_files_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), "12\n").unwrap();
        fs::write(dir.path().join("good.txt"), "# notes\n12\n").unwrap();

        let corpus = scan_corpus(dir.path(), &CanonicalOptions::default());
        assert_eq!(corpus.documents.len(), 1);
        assert_eq!(corpus.documents[0].1.root.label, "notes");
    }

    #[test]
    fn non_txt_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "not a corpus file").unwrap();

        let corpus = scan_corpus(dir.path(), &CanonicalOptions::default());
        assert!(corpus.documents.is_empty());
    }
}
