//! Pipeline settings loaded from TOML.
//!
//! - `Settings::default_embedded()` parses the embedded `default_settings.toml`
//! - `parse_settings_toml(content)` parses and validates a custom document
//! - `load_settings(path)` reads a file, falling back to the embedded default

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub dataset: DatasetSettings,
    pub accent: AccentSettings,
    pub output: OutputSettings,
}

/// Source column name for each field of an accent record.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSettings {
    pub word_id: String,
    pub sem_word_id: String,
    pub headword: String,
    pub word: String,
    pub kanji: String,
    pub char_count: String,
    pub headword_alt: String,
    pub n_accents: String,
    pub accent: String,
    pub separator: char,
    pub on_error: RowErrorPolicy,
}

impl DatasetSettings {
    /// `(field, column)` pairs in record order.
    pub fn columns(&self) -> [(&'static str, &str); 9] {
        [
            ("word_id", self.word_id.as_str()),
            ("sem_word_id", self.sem_word_id.as_str()),
            ("headword", self.headword.as_str()),
            ("word", self.word.as_str()),
            ("kanji", self.kanji.as_str()),
            ("char_count", self.char_count.as_str()),
            ("headword_alt", self.headword_alt.as_str()),
            ("n_accents", self.n_accents.as_str()),
            ("accent", self.accent.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowErrorPolicy {
    /// Log the failure and leave the row out.
    Skip,
    /// Abort the whole batch.
    Strict,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccentSettings {
    pub pad_leading_zeros: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    pub pretty: bool,
}

impl Settings {
    pub fn default_embedded() -> Result<Self, SettingsError> {
        parse_settings_toml(DEFAULT_SETTINGS_TOML)
    }
}

/// Load settings from `path`, or the embedded defaults when `path` is `None`.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    match path {
        Some(p) => parse_settings_toml(&fs::read_to_string(p)?),
        None => Settings::default_embedded(),
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let mut seen = HashSet::new();
    for (field, column) in s.dataset.columns() {
        if column.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("dataset.{field}"),
                reason: "column name must be non-empty".to_string(),
            });
        }
        if !seen.insert(column) {
            return Err(SettingsError::InvalidValue {
                field: format!("dataset.{field}"),
                reason: format!("column {column:?} is already mapped"),
            });
        }
    }

    let sep = s.dataset.separator;
    if sep == '"' || sep == '\n' || sep == '\r' {
        return Err(SettingsError::InvalidValue {
            field: "dataset.separator".to_string(),
            reason: "must not be a quote or line break".to_string(),
        });
    }

    Ok(())
}
