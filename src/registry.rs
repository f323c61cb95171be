//! Name → engine dispatch.
//!
//! Dictionary engines are `Segmenter`s over one shared store; any other
//! backend plugs in through `Tokenize` and is opaque here.

use std::collections::BTreeMap;
use std::sync::Arc;

use thai_core::lexicon::LexiconTrie;
use thai_core::segmenter::{PathPolicy, PolicyError, SegmentError, Segmenter, Token, Tokenize};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Segment(#[from] SegmentError),
}

#[derive(Default, Clone)]
pub struct EngineRegistry {
    engines: BTreeMap<String, Arc<dyn Tokenize>>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `newmm` and `mm` (maximum matching) and `longest-matching` (greedy),
    /// all sharing `words`.
    pub fn with_defaults(words: Arc<LexiconTrie>) -> Self {
        let mm: Arc<dyn Tokenize> = Arc::new(Segmenter::from_trie(
            Arc::clone(&words),
            PathPolicy::MaximumMatching,
        ));
        let greedy: Arc<dyn Tokenize> =
            Arc::new(Segmenter::from_trie(words, PathPolicy::GreedyLongestMatch));

        let mut registry = Self::new();
        registry.register("newmm", Arc::clone(&mm));
        registry.register("mm", mm);
        registry.register("longest-matching", greedy);
        registry
    }

    /// Register `engine` under `name` (case-insensitive), returning the
    /// engine it replaced.
    pub fn register(
        &mut self,
        name: impl AsRef<str>,
        engine: Arc<dyn Tokenize>,
    ) -> Option<Arc<dyn Tokenize>> {
        self.engines.insert(normalize(name.as_ref()), engine)
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Tokenize>, PolicyError> {
        self.engines
            .get(&normalize(name))
            .cloned()
            .ok_or_else(|| PolicyError::Unsupported(name.to_string()))
    }

    pub fn tokenize(&self, name: &str, text: &str) -> Result<Vec<Token>, RegistryError> {
        Ok(self.get(name)?.tokenize(text)?)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.engines.keys().map(String::as_str).collect()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
