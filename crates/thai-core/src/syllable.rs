//! Syllable segmentation: word segmentation first, then each word is
//! segmented again against a syllable lexicon.

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::segmenter::{shift_tokens, PathPolicy, SegmentError, Segmenter, Token, Tokenize};

#[derive(Debug, Clone)]
pub struct Syllabifier {
    words: Segmenter,
    syllables: Segmenter,
}

impl Syllabifier {
    pub fn new(words: Segmenter, syllables: Segmenter) -> Self {
        Self { words, syllables }
    }

    /// Bundled word and syllable lists, maximum matching at both levels.
    pub fn with_defaults() -> Self {
        Self::new(
            Segmenter::with_default_words(PathPolicy::MaximumMatching),
            Segmenter::new(Lexicon::default_syllables(), PathPolicy::MaximumMatching),
        )
    }

    pub fn words(&self) -> &Segmenter {
        &self.words
    }

    pub fn syllabify(&self, text: &str) -> Result<Vec<Token>, SegmentError> {
        let words = match self.words.tokenize(text) {
            Ok(words) => words,
            Err(SegmentError::EmptyInput) => Vec::new(),
        };
        if words.is_empty() {
            // Nothing to split per word; the syllable segmenter decides.
            return self.syllables.tokenize(text);
        }

        let mut out = Vec::with_capacity(words.len());
        for word in &words {
            let sub = self.syllables.tokenize(&word.text)?;
            out.extend(shift_tokens(sub, word.start));
        }
        debug!(words = words.len(), syllables = out.len());
        Ok(out)
    }
}

impl Tokenize for Syllabifier {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, SegmentError> {
        self.syllabify(text)
    }
}
