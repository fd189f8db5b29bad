//! Settings shared by the trunic tools.
//!
//! Configuration resolves in layers, later layers winning: the TOML
//! defaults compiled into the binary, then whatever files the caller adds,
//! then single-key overrides. The merged result deserializes into
//! [`TrunicConfig`] up front, so a mistyped key fails at startup instead of
//! partway through a corpus scan.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/trunic.default.toml");

/// Everything the trunic tools read from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TrunicConfig {
    pub canonical: CanonicalConfig,
    pub decompose: DecomposeConfig,
    pub report: ReportConfig,
}

/// Canonicalization knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct CanonicalConfig {
    /// Whether the linking characters E and C are stripped from glyphs.
    pub strip_linked: bool,
}

/// Decomposition search knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct DecomposeConfig {
    /// Candidate-component cap guarding the factorial search.
    pub max_components: usize,
}

/// Reporting thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub min_occurrences: usize,
}

/// Accumulates configuration layers and resolves them into a
/// [`TrunicConfig`].
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader carrying only the compiled-in defaults.
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    /// Add a TOML file that must exist; its absence surfaces from [`build`](Self::build).
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Add a TOML file that may be absent, in which case the layer is a no-op.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), false)
    }

    /// Pin one key to a value, taking precedence over every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize the result.
    pub fn build(self) -> Result<TrunicConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The default configuration, with no user layers.
pub fn load_defaults() -> Result<TrunicConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.canonical.strip_linked);
        assert_eq!(config.decompose.max_components, 8);
        assert_eq!(config.report.min_occurrences, 2);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("canonical.strip_linked", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.canonical.strip_linked);
    }
}
