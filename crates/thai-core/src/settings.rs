//! Segmenter settings loaded from TOML.
//!
//! Unlike a process-wide singleton, `Settings` is a plain value: parse it,
//! then hand it to whatever builds segmenters.
//!
//! - `Settings::default()` matches the embedded `default_settings.toml`
//! - `parse_settings_toml(str)` parses and validates
//! - `Settings::load(path)` reads a file, then parses

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::lexicon::{Lexicon, LexiconError, LexiconSource};
use crate::segmenter::{PathPolicy, PolicyError, Segmenter};
use crate::syllable::Syllabifier;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub policy: PathPolicy,
    pub words: LexiconSource,
    pub syllables: LexiconSource,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    #[serde(default)]
    segmenter: RawSegmenter,
    #[serde(default)]
    lexicon: RawLexicon,
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSegmenter {
    policy: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLexicon {
    #[serde(default)]
    words: LexiconSource,
    #[serde(default)]
    syllables: LexiconSource,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        parse_settings_toml(&std::fs::read_to_string(path)?)
    }

    /// Word segmenter over the configured word lexicon.
    pub fn build_segmenter(&self) -> Result<Segmenter, LexiconError> {
        let trie = self.words.build_trie(Lexicon::default_words)?;
        Ok(Segmenter::from_trie(Arc::new(trie), self.policy))
    }

    /// Word and syllable segmenters, both using the configured policy.
    pub fn build_syllabifier(&self) -> Result<Syllabifier, LexiconError> {
        let syllables = self.syllables.build_trie(Lexicon::default_syllables)?;
        Ok(Syllabifier::new(
            self.build_segmenter()?,
            Segmenter::from_trie(Arc::new(syllables), self.policy),
        ))
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let raw: RawSettings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    let policy = match raw.segmenter.policy {
        Some(name) => name.parse()?,
        None => PathPolicy::default(),
    };
    Ok(Settings {
        policy,
        words: raw.lexicon.words,
        syllables: raw.lexicon.syllables,
    })
}
