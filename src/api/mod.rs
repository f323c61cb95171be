//! UniFFI export layer: bindings for the Thai segmentation engine.
//!
//! Each public type here maps to a generated foreign class, record, or enum.

mod tokenizer;
mod types;

pub use tokenizer::ThaiTokenizer;
pub use types::{ThaiCharClass, ThaiError, ThaiScriptRatio, ThaiSentenceMode, ThaiToken};

use std::path::Path;

use thai_core::sentence::{split_sentences as split, SentenceMode};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn script_ratio(text: String, per_character: bool) -> Result<ThaiScriptRatio, ThaiError> {
    let ratio = thai_core::script_ratio(&text, per_character)?;
    Ok(ThaiScriptRatio {
        ratio: ratio.ratio,
        breakdown: ratio.breakdown.map(|pairs| {
            pairs
                .into_iter()
                .map(|(c, thai)| ThaiCharClass {
                    ch: c.to_string(),
                    thai,
                })
                .collect()
        }),
    })
}

#[uniffi::export]
fn split_sentences(text: String, mode: ThaiSentenceMode) -> Vec<String> {
    let mode = match mode {
        ThaiSentenceMode::Whitespace => SentenceMode::Whitespace,
        ThaiSentenceMode::LineBreaks => SentenceMode::LineBreaks,
    };
    split(&text, mode).into_iter().map(str::to_string).collect()
}

#[uniffi::export]
fn settings_default_config() -> String {
    thai_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
