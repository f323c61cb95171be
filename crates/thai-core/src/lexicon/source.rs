use std::path::PathBuf;

use serde::Deserialize;

use super::{Lexicon, LexiconError, LexiconTrie};

/// Where a segmenter's lexicon comes from.
///
/// In TOML: `"default"`, `{ custom-list = [..] }`, `{ custom-file = "path" }`
/// or `{ compiled-file = "path" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexiconSource {
    /// The bundled list chosen by the caller (words or syllables).
    #[default]
    Default,
    CustomList(Vec<String>),
    /// Newline-delimited UTF-8 text file.
    CustomFile(PathBuf),
    /// File written by `LexiconTrie::save`.
    CompiledFile(PathBuf),
}

impl LexiconSource {
    /// Resolve into a store. `default` supplies the bundled lexicon for
    /// `LexiconSource::Default`. Empty entries in a custom list are skipped
    /// with a warning.
    pub fn build_trie(
        &self,
        default: impl FnOnce() -> Lexicon,
    ) -> Result<LexiconTrie, LexiconError> {
        match self {
            Self::Default => Ok(LexiconTrie::from_lexicon(default())),
            Self::CustomList(words) => {
                Ok(LexiconTrie::from_lexicon(Lexicon::collect_lossy(words)))
            }
            Self::CustomFile(path) => Ok(LexiconTrie::from_lexicon(Lexicon::load(path.clone())?)),
            Self::CompiledFile(path) => LexiconTrie::open(path),
        }
    }
}
