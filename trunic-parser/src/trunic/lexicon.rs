//! Curated lookup tables: sounds and word meanings.
//!
//! Both tables are read-only ground truth supplied externally (YAML files
//! or literal pairs in code); the core only reads them. Sound-table keys
//! are canonicalized on load so lookups always compare canonical key to
//! canonical key, and a key that canonicalizes to nothing (for example a
//! key of only linking characters) is rejected as a curation mistake.
//!
//! Lookup misses are not errors anywhere in this module: unknown words
//! translate to themselves.

use crate::trunic::canonical::{canonicalize_with, CanonicalError, CanonicalOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Errors loading a curated table.
#[derive(Debug)]
pub enum LexiconError {
    /// The source text was not valid YAML mapping strings to strings.
    Yaml(serde_yaml::Error),
    /// A key was not a valid glyph transcription.
    InvalidKey { key: String, source: CanonicalError },
    /// A key canonicalized to the empty glyph.
    EmptyKey { key: String },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::Yaml(err) => write!(f, "table is not valid YAML: {}", err),
            LexiconError::InvalidKey { key, source } => {
                write!(f, "table key {:?}: {}", key, source)
            }
            LexiconError::EmptyKey { key } => {
                write!(f, "table key {:?} canonicalizes to an empty glyph", key)
            }
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexiconError::Yaml(err) => Some(err),
            LexiconError::InvalidKey { source, .. } => Some(source),
            LexiconError::EmptyKey { .. } => None,
        }
    }
}

impl From<serde_yaml::Error> for LexiconError {
    fn from(err: serde_yaml::Error) -> Self {
        LexiconError::Yaml(err)
    }
}

/// Canonical glyph key -> hypothesized phonetic label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundTable {
    entries: BTreeMap<String, String>,
}

impl SoundTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw key/label pairs, canonicalizing every key.
    pub fn from_entries<K, V, I>(
        entries: I,
        options: &CanonicalOptions,
    ) -> Result<Self, LexiconError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut table = BTreeMap::new();
        for (key, label) in entries {
            let raw = key.as_ref();
            let canonical =
                canonicalize_with(raw, options).map_err(|source| LexiconError::InvalidKey {
                    key: raw.to_string(),
                    source,
                })?;
            if canonical.is_empty() {
                return Err(LexiconError::EmptyKey {
                    key: raw.to_string(),
                });
            }
            table.insert(canonical.into_string(), label.into());
        }
        Ok(Self { entries: table })
    }

    /// Parse a YAML mapping of glyph keys to sound labels.
    pub fn from_yaml(text: &str, options: &CanonicalOptions) -> Result<Self, LexiconError> {
        let raw: BTreeMap<String, String> = serde_yaml::from_str(text)?;
        Self::from_entries(raw, options)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Word key -> hypothesized meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTable {
    entries: BTreeMap<String, String>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a YAML mapping of word keys to meanings.
    pub fn from_yaml(text: &str) -> Result<Self, LexiconError> {
        let entries: BTreeMap<String, String> = serde_yaml::from_str(text)?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The mapped meaning of a word, or the word itself when unknown.
///
/// Passthrough by design: an unknown word is reported as-is, never as an
/// error.
pub fn translate_word<'a>(word: &'a str, table: &'a WordTable) -> &'a str {
    table.get(word).unwrap_or(word)
}
