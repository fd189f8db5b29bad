//! Interactive read-line loop.
//!
//! A known word key replays where the corpus saw it, with its translation
//! when one exists. Anything else is treated as ad hoc glyph input: each
//! glyph run is canonicalized and pushed through the decomposition search.
//! All decision logic lives in trunic-parser; this loop only routes.

use std::io::{self, BufRead, Write};

use crate::corpus::Corpus;
use trunic_parser::trunic::canonical::{canonicalize_with, CanonicalOptions};
use trunic_parser::trunic::decompose::decompose_bounded;
use trunic_parser::trunic::lexicon::{translate_word, SoundTable, WordTable};

pub struct Repl<'a> {
    pub corpus: &'a Corpus,
    pub sounds: &'a SoundTable,
    pub words: &'a WordTable,
    pub options: &'a CanonicalOptions,
    pub max_components: usize,
}

impl<'a> Repl<'a> {
    pub fn run(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut input = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;
            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                break;
            }
            let query = input.trim();
            if query.is_empty() || query == "quit" || query == "exit" {
                break;
            }
            self.respond(query);
        }
        Ok(())
    }

    fn respond(&self, query: &str) {
        if let Some(locations) = self.corpus.index.words.get(query) {
            println!("{} -> {}", query, translate_word(query, self.words));
            for location in locations {
                println!("  seen at {}", location);
            }
            return;
        }

        for run in query.split_whitespace().flat_map(|w| w.split('/')) {
            match canonicalize_with(run, self.options) {
                Ok(glyph) if glyph.is_empty() => {
                    println!("{}: only linking strokes, nothing to decompose", run);
                }
                Ok(glyph) => match decompose_bounded(glyph.as_str(), self.sounds, self.max_components)
                {
                    Ok(readings) => {
                        let joined: Vec<String> = readings.into_iter().collect();
                        println!("{}: {}", glyph, joined.join(" | "));
                    }
                    Err(err) => eprintln!("{}: {}", glyph, err),
                },
                Err(err) => eprintln!("{}: {}", run, err),
            }
        }
    }
}
