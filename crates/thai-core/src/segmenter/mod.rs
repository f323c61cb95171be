//! Dictionary-driven word segmentation.
//!
//! Builds a graph of every dictionary match over char positions, then picks
//! one path through it with the configured `PathPolicy`. Positions with no
//! dictionary match fall back to single-char unknown tokens, so segmentation
//! never fails on non-empty input.

mod graph;
mod path;


use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::lexicon::{Lexicon, LexiconError, LexiconTrie};

pub use graph::{build_graph, Edge, SegmentGraph};
pub use path::{PathPolicy, PolicyError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("cannot segment empty input")]
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Matched a lexicon entry
    Dictionary,
    /// Single-char fallback where nothing matched
    Unknown,
}

/// A segment of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Start position (char index, inclusive)
    pub start: usize,
    /// End position (char index, exclusive)
    pub end: usize,
}

impl Token {
    pub fn is_unknown(&self) -> bool {
        self.kind == TokenKind::Unknown
    }

    pub fn char_len(&self) -> usize {
        self.end - self.start
    }

    fn shifted(mut self, offset: usize) -> Self {
        self.start += offset;
        self.end += offset;
        self
    }
}

/// Anything that turns text into an ordered token sequence.
///
/// Dictionary segmenters and external backends share this seam, so callers
/// can pick one by name without knowing how it works.
pub trait Tokenize: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, SegmentError>;

    /// Token texts only.
    fn tokenize_strs(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        Ok(self
            .tokenize(text)?
            .into_iter()
            .map(|t| t.text)
            .collect())
    }
}

/// Segmentation facade: one lexicon store plus one path policy.
///
/// Cheap to clone; the store is shared.
#[derive(Debug, Clone)]
pub struct Segmenter {
    trie: Arc<LexiconTrie>,
    policy: PathPolicy,
}

impl Segmenter {
    pub fn new(lexicon: Lexicon, policy: PathPolicy) -> Self {
        Self::from_trie(Arc::new(LexiconTrie::from_lexicon(lexicon)), policy)
    }

    /// Share an existing store.
    pub fn from_trie(trie: Arc<LexiconTrie>, policy: PathPolicy) -> Self {
        Self { trie, policy }
    }

    /// Segmenter over the bundled word list.
    pub fn with_default_words(policy: PathPolicy) -> Self {
        Self::new(Lexicon::default_words(), policy)
    }

    pub fn from_words<I, S>(words: I, policy: PathPolicy) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(Lexicon::new(words)?, policy))
    }

    pub fn from_file(path: &Path, policy: PathPolicy) -> Result<Self, LexiconError> {
        Ok(Self::new(Lexicon::load(path)?, policy))
    }

    pub fn policy(&self) -> PathPolicy {
        self.policy
    }

    /// Same store, different policy.
    pub fn with_policy(&self, policy: PathPolicy) -> Self {
        Self::from_trie(Arc::clone(&self.trie), policy)
    }

    pub fn trie(&self) -> &Arc<LexiconTrie> {
        &self.trie
    }

    fn segment(&self, text: &str) -> Vec<Token> {
        let graph = build_graph(&self.trie, text);
        self.policy
            .selector()
            .select_path(&graph)
            .into_iter()
            .map(|idx| {
                let edge = &graph.edges[idx];
                Token {
                    text: graph.surface(edge).to_string(),
                    kind: edge.kind,
                    start: edge.start,
                    end: edge.end,
                }
            })
            .collect()
    }
}

impl Tokenize for Segmenter {
    /// Segment `text`. Empty input is an error, never an empty result.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, SegmentError> {
        if text.is_empty() {
            return Err(SegmentError::EmptyInput);
        }
        Ok(self.segment(text))
    }
}

/// Shift sub-token offsets from word-relative to text-relative.
pub(crate) fn shift_tokens(tokens: Vec<Token>, offset: usize) -> impl Iterator<Item = Token> {
    tokens.into_iter().map(move |t| t.shifted(offset))
}
