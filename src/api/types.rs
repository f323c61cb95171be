use thai_core::lexicon::LexiconError;
use thai_core::segmenter::{PolicyError, SegmentError, Token, TokenKind};
use thai_core::settings::SettingsError;
use thai_core::ScriptError;

use crate::RegistryError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ThaiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("empty input: {msg}")]
    EmptyInput { msg: String },
    #[error("unsupported policy: {msg}")]
    UnsupportedPolicy { msg: String },
}

impl From<LexiconError> for ThaiError {
    fn from(e: LexiconError) -> Self {
        match e {
            LexiconError::Load { .. } => ThaiError::Io { msg: e.to_string() },
            _ => ThaiError::InvalidData { msg: e.to_string() },
        }
    }
}

impl From<SegmentError> for ThaiError {
    fn from(e: SegmentError) -> Self {
        ThaiError::EmptyInput { msg: e.to_string() }
    }
}

impl From<ScriptError> for ThaiError {
    fn from(e: ScriptError) -> Self {
        ThaiError::EmptyInput { msg: e.to_string() }
    }
}

impl From<PolicyError> for ThaiError {
    fn from(e: PolicyError) -> Self {
        ThaiError::UnsupportedPolicy { msg: e.to_string() }
    }
}

impl From<SettingsError> for ThaiError {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::Io(_) => ThaiError::Io { msg: e.to_string() },
            SettingsError::Parse(_) => ThaiError::InvalidData { msg: e.to_string() },
            SettingsError::Policy(p) => p.into(),
        }
    }
}

impl From<RegistryError> for ThaiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Policy(p) => p.into(),
            RegistryError::Segment(s) => s.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, uniffi::Record)]
pub struct ThaiToken {
    pub text: String,
    /// Single-char fallback where no lexicon entry matched
    pub unknown: bool,
    /// Char offsets into the input
    pub start: u32,
    pub end: u32,
}

impl From<Token> for ThaiToken {
    fn from(t: Token) -> Self {
        Self {
            unknown: t.kind == TokenKind::Unknown,
            start: t.start as u32,
            end: t.end as u32,
            text: t.text,
        }
    }
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct ThaiCharClass {
    pub ch: String,
    pub thai: bool,
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct ThaiScriptRatio {
    pub ratio: f64,
    pub breakdown: Option<Vec<ThaiCharClass>>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, uniffi::Enum)]
pub enum ThaiSentenceMode {
    Whitespace,
    LineBreaks,
}
