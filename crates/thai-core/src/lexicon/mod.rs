//! Lexicon storage.
//!
//! `Lexicon` is the normalised, deduplicated entry list a segmenter is built
//! from. `LexiconTrie` is the immutable prefix tree answering membership and
//! common-prefix queries over it.

mod io;
mod source;
mod trie;

pub use source::LexiconSource;
pub use trie::LexiconTrie;

use std::collections::HashSet;
use std::path::PathBuf;
use std::str::Utf8Error;

use tracing::{debug, info, warn};

pub const DEFAULT_WORDS: &str = include_str!("../../data/words_th.txt");
pub const DEFAULT_SYLLABLES: &str = include_str!("../../data/syllables_th.txt");

/// Errors raised while building, loading or decoding a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon entry {index} is empty")]
    InvalidEntry { index: usize },

    #[error("cannot read lexicon {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon {} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected THLX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("payload checksum mismatch")]
    ChecksumMismatch,

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),
}

/// An ordered list of distinct, non-empty entries (words or syllables).
///
/// Entries keep the order in which they were first seen. Surrounding
/// whitespace is trimmed before deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon, failing on the first empty entry.
    pub fn new<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Builder::default();
        for (index, entry) in entries.into_iter().enumerate() {
            if !builder.push(entry.as_ref()) {
                return Err(LexiconError::InvalidEntry { index });
            }
        }
        Ok(builder.finish())
    }

    /// Build a lexicon, skipping empty entries instead of failing.
    pub fn collect_lossy<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Builder::default();
        for (index, entry) in entries.into_iter().enumerate() {
            if !builder.push(entry.as_ref()) {
                warn!(index, "skipping empty lexicon entry");
            }
        }
        builder.finish()
    }

    /// Parse newline-delimited content: one entry per line, blank lines
    /// ignored. Every other line is an entry, including ones starting with `#`.
    pub fn parse_lines(content: &str) -> Self {
        Self::from_lines(content.lines())
    }

    /// Bundled lists open with `#` header lines; user files never get this.
    fn parse_bundled(content: &str) -> Self {
        Self::from_lines(
            content
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        )
    }

    fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Self {
        let mut builder = Builder::default();
        for line in lines {
            builder.push(line);
        }
        builder.finish()
    }

    /// Load a newline-delimited UTF-8 lexicon file.
    ///
    /// The whole file is read before parsing; an unreadable or undecodable
    /// file yields an error and no lexicon at all.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LexiconError> {
        let path = path.into();
        let bytes = std::fs::read(&path).map_err(|source| LexiconError::Load {
            path: path.clone(),
            source,
        })?;
        let content = std::str::from_utf8(&bytes).map_err(|source| LexiconError::Decode {
            path: path.clone(),
            source,
        })?;
        let lexicon = Self::parse_lines(content);
        info!(path = %path.display(), entries = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    /// The bundled Thai word list.
    pub fn default_words() -> Self {
        Self::parse_bundled(DEFAULT_WORDS)
    }

    /// The bundled Thai syllable list.
    pub fn default_syllables() -> Self {
        Self::parse_bundled(DEFAULT_SYLLABLES)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.index.contains(entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

#[derive(Default)]
struct Builder {
    entries: Vec<String>,
    seen: HashSet<String>,
    duplicates: usize,
}

impl Builder {
    /// Returns `false` if the entry is empty after normalisation.
    fn push(&mut self, raw: &str) -> bool {
        let entry = raw.trim();
        if entry.is_empty() {
            return false;
        }
        if self.seen.insert(entry.to_string()) {
            self.entries.push(entry.to_string());
        } else {
            self.duplicates += 1;
        }
        true
    }

    fn finish(self) -> Lexicon {
        if self.duplicates > 0 {
            debug!(duplicates = self.duplicates, "dropped duplicate lexicon entries");
        }
        Lexicon {
            entries: self.entries,
            index: self.seen,
        }
    }
}
