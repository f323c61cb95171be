//! Dictionary-driven Thai word and syllable segmentation.
//!
//! The pipeline is lexicon → trie → segmentation graph → path selection.
//! Syllable segmentation reuses the same machinery with a syllable lexicon.

pub mod lexicon;
pub mod script;
pub mod segmenter;
pub mod sentence;
pub mod settings;
pub mod syllable;

use lexicon::{Lexicon, LexiconError, LexiconSource};
use segmenter::{PathPolicy, SegmentError, Segmenter, Tokenize};
use syllable::Syllabifier;

pub use script::{script_ratio, ScriptError, ScriptRatio};

/// Errors from the convenience entry points, which may both load a lexicon
/// and segment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Segment(#[from] SegmentError),
}

/// Segment `text` into words with maximum matching over `source`.
pub fn tokenize_words(text: &str, source: &LexiconSource) -> Result<Vec<String>, Error> {
    let trie = source.build_trie(Lexicon::default_words)?;
    let segmenter = Segmenter::from_trie(trie.into(), PathPolicy::MaximumMatching);
    Ok(segmenter.tokenize_strs(text)?)
}

/// Segment `text` into syllables using the bundled word and syllable lists.
pub fn tokenize_syllables(text: &str) -> Result<Vec<String>, SegmentError> {
    Syllabifier::with_defaults().tokenize_strs(text)
}
