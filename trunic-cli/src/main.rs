//! Command-line interface for trunic
//! This binary scans transcription corpora, renders glyphs, and runs the
//! decomposition search. It consumes the core's public outputs and holds
//! no decision logic of its own.
//!
//! Usage:
//!   trunic scan <dir> [--min N] [--trees] [--format <format>]  - Index a corpus and report points of interest
//!   trunic render <glyph>                                      - Draw one glyph as ASCII art
//!   trunic decompose <glyph> [--sounds <file>]                 - Search for candidate readings
//!   trunic repl [<dir>]                                        - Interactive lookup and decomposition

mod corpus;
mod render;
mod repl;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use trunic_config::{Loader, TrunicConfig};
use trunic_parser::trunic::canonical::{canonicalize_with, CanonicalGlyph, CanonicalOptions};
use trunic_parser::trunic::decompose::decompose_bounded;
use trunic_parser::trunic::formats::to_treeviz_str;
use trunic_parser::trunic::index::points_of_interest;
use trunic_parser::trunic::lexicon::{SoundTable, WordTable};

const DEFAULT_SOUNDS_YAML: &str = include_str!("../defaults/sounds.yaml");

fn main() {
    let matches = Command::new("trunic")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A toolkit for parsing and analyzing trunic transcriptions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("scan")
                .about("Parse a corpus directory and report points of interest")
                .arg(
                    Arg::new("dir")
                        .help("Directory of .txt transcriptions")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("min")
                        .long("min")
                        .short('n')
                        .value_parser(clap::value_parser!(usize))
                        .help("Occurrence threshold (default from config)"),
                )
                .arg(
                    Arg::new("trees")
                        .long("trees")
                        .action(ArgAction::SetTrue)
                        .help("Print each parsed tree before the report"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .default_value("text")
                        .help("Report format: text, json, or yaml"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Draw one glyph as ASCII art")
                .arg(Arg::new("glyph").required(true).index(1)),
        )
        .subcommand(
            Command::new("decompose")
                .about("Search for candidate readings of a glyph")
                .arg(Arg::new("glyph").required(true).index(1))
                .arg(
                    Arg::new("sounds")
                        .long("sounds")
                        .help("YAML sound table (defaults to the bundled table)"),
                ),
        )
        .subcommand(
            Command::new("repl")
                .about("Interactive lookup and decomposition")
                .arg(Arg::new("dir").help("Corpus directory to preload").index(1))
                .arg(
                    Arg::new("sounds")
                        .long("sounds")
                        .help("YAML sound table (defaults to the bundled table)"),
                )
                .arg(
                    Arg::new("words")
                        .long("words")
                        .help("YAML word-meaning table"),
                ),
        )
        .get_matches();

    let config = load_config(matches.get_one::<String>("config"));
    let options = CanonicalOptions {
        strip_linked: config.canonical.strip_linked,
    };

    match matches.subcommand() {
        Some(("scan", sub)) => handle_scan(sub, &config, &options),
        Some(("render", sub)) => handle_render(sub),
        Some(("decompose", sub)) => handle_decompose(sub, &config, &options),
        Some(("repl", sub)) => handle_repl(sub, &config, &options),
        _ => unreachable!("subcommand is required"),
    }
}

fn load_config(path: Option<&String>) -> TrunicConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|err| {
        eprintln!("Configuration error: {}", err);
        process::exit(1);
    })
}

#[derive(serde::Serialize)]
struct PointsReport<'a> {
    words: BTreeMap<&'a str, &'a BTreeSet<String>>,
    glyphs: BTreeMap<&'a str, &'a BTreeSet<String>>,
}

fn handle_scan(matches: &ArgMatches, config: &TrunicConfig, options: &CanonicalOptions) {
    let dir = matches.get_one::<String>("dir").expect("dir is required");
    let min = matches
        .get_one::<usize>("min")
        .copied()
        .unwrap_or(config.report.min_occurrences);
    if min == 0 {
        eprintln!("--min must be at least 1");
        process::exit(1);
    }

    let corpus = corpus::scan_corpus(Path::new(dir), options);

    if matches.get_flag("trees") {
        for (path, document) in &corpus.documents {
            println!("== {}", path.display());
            print!("{}", to_treeviz_str(document));
        }
    }

    let report = PointsReport {
        words: points_of_interest(&corpus.index.words, min),
        glyphs: points_of_interest(&corpus.index.glyphs, min),
    };
    let format = matches.get_one::<String>("format").expect("format has a default");
    match format.as_str() {
        "text" => {
            println!("words seen at least {} times:", min);
            for (key, locations) in &report.words {
                let joined: Vec<&str> = locations.iter().map(String::as_str).collect();
                println!("  {} [{}]", key, joined.join("; "));
            }
            println!("glyphs seen in at least {} words:", min);
            for (key, containing) in &report.glyphs {
                let joined: Vec<&str> = containing.iter().map(String::as_str).collect();
                println!("  {} [{}]", key, joined.join("; "));
            }
        }
        "json" => {
            let rendered = serde_json::to_string_pretty(&report).unwrap_or_else(|err| {
                eprintln!("Error formatting report: {}", err);
                process::exit(1);
            });
            println!("{}", rendered);
        }
        "yaml" => {
            let rendered = serde_yaml::to_string(&report).unwrap_or_else(|err| {
                eprintln!("Error formatting report: {}", err);
                process::exit(1);
            });
            print!("{}", rendered);
        }
        other => {
            eprintln!("Format {:?} not supported; use text, json, or yaml", other);
            process::exit(1);
        }
    }
}

fn handle_render(matches: &ArgMatches) {
    let raw = matches.get_one::<String>("glyph").expect("glyph is required");
    // Render what was written: the linking hypothesis never hides strokes.
    let keep_everything = CanonicalOptions {
        strip_linked: false,
    };
    let glyph = canonical_or_exit(raw, &keep_everything);
    print!("{}", render::render_glyph(glyph.as_str()));
}

fn handle_decompose(matches: &ArgMatches, config: &TrunicConfig, options: &CanonicalOptions) {
    let raw = matches.get_one::<String>("glyph").expect("glyph is required");
    let glyph = canonical_or_exit(raw, options);
    if glyph.is_empty() {
        eprintln!("{}: only linking strokes, nothing to decompose", raw);
        process::exit(1);
    }

    let sounds = load_sounds(matches.get_one::<String>("sounds"), options);
    match decompose_bounded(glyph.as_str(), &sounds, config.decompose.max_components) {
        Ok(readings) => {
            println!("{}", glyph);
            for reading in readings {
                println!("  {}", reading);
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn handle_repl(matches: &ArgMatches, config: &TrunicConfig, options: &CanonicalOptions) {
    let corpus = match matches.get_one::<String>("dir") {
        Some(dir) => corpus::scan_corpus(Path::new(dir), options),
        None => corpus::Corpus {
            documents: Vec::new(),
            index: Default::default(),
        },
    };
    let sounds = load_sounds(matches.get_one::<String>("sounds"), options);
    let words = match matches.get_one::<String>("words") {
        Some(path) => {
            let text = read_or_exit(path);
            WordTable::from_yaml(&text).unwrap_or_else(|err| {
                eprintln!("{}: {}", path, err);
                process::exit(1);
            })
        }
        None => WordTable::new(),
    };

    let repl = repl::Repl {
        corpus: &corpus,
        sounds: &sounds,
        words: &words,
        options,
        max_components: config.decompose.max_components,
    };
    if let Err(err) = repl.run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn canonical_or_exit(raw: &str, options: &CanonicalOptions) -> CanonicalGlyph {
    canonicalize_with(raw, options).unwrap_or_else(|err| {
        eprintln!("{}: {}", raw, err);
        process::exit(1);
    })
}

fn load_sounds(path: Option<&String>, options: &CanonicalOptions) -> SoundTable {
    let text = match path {
        Some(path) => read_or_exit(path),
        None => DEFAULT_SOUNDS_YAML.to_string(),
    };
    SoundTable::from_yaml(&text, options).unwrap_or_else(|err| {
        eprintln!("sound table: {}", err);
        process::exit(1);
    })
}

fn read_or_exit(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("{}: {}", path, err);
        process::exit(1);
    })
}
