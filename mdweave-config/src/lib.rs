//! Shared configuration loader for the mdweave toolchain.
//!
//! `defaults/mdweave.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`MdweaveConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdweave_core::StyleSettings;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdweave.default.toml");

/// Top-level configuration consumed by mdweave applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdweaveConfig {
    pub paths: PathsConfig,
    pub convert: ConvertConfig,
}

/// Optional path overrides. When unset, the CLI falls back to the
/// program-location convention documented in the defaults file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    pub input: Option<String>,
    pub output: Option<String>,
    pub assets_root: Option<String>,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub docx: DocxConfig,
}

/// Mirrors the style knobs exposed by the DOCX serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct DocxConfig {
    pub body_font: String,
    pub body_size_pt: u32,
    pub code_font: String,
    pub code_size_pt: u32,
    pub image_width_in: f64,
}

impl From<DocxConfig> for StyleSettings {
    fn from(config: DocxConfig) -> Self {
        StyleSettings {
            body_font: config.body_font,
            body_size_pt: config.body_size_pt,
            code_font: config.code_font,
            code_size_pt: config.code_size_pt,
            image_width_in: config.image_width_in,
        }
    }
}

impl From<&DocxConfig> for StyleSettings {
    fn from(config: &DocxConfig) -> Self {
        StyleSettings {
            body_font: config.body_font.clone(),
            body_size_pt: config.body_size_pt,
            code_font: config.code_font.clone(),
            code_size_pt: config.code_size_pt,
            image_width_in: config.image_width_in,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdweaveConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdweaveConfig, ConfigError> {
    Loader::new().build()
}
