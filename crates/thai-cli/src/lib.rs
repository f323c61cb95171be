pub mod commands;
pub mod render;

use thai_core::lexicon::LexiconError;
use thai_core::segmenter::{PolicyError, SegmentError};
use thai_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("{0}")]
    Policy(#[from] PolicyError),
    #[error("segmentation error: {0}")]
    Segment(#[from] SegmentError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
