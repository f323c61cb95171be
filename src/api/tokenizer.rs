use std::path::Path;
use std::sync::Arc;

use thai_core::lexicon::LexiconSource;
use thai_core::segmenter::{Segmenter, Tokenize};
use thai_core::settings::Settings;
use thai_core::syllable::Syllabifier;

use super::{ThaiError, ThaiToken};
use crate::EngineRegistry;

#[derive(uniffi::Object)]
pub struct ThaiTokenizer {
    segmenter: Segmenter,
    syllabifier: Syllabifier,
    registry: EngineRegistry,
}

impl ThaiTokenizer {
    fn build(settings: &Settings) -> Result<Arc<Self>, ThaiError> {
        let syllabifier = settings.build_syllabifier()?;
        let segmenter = syllabifier.words().clone();
        let registry = EngineRegistry::with_defaults(Arc::clone(segmenter.trie()));
        Ok(Arc::new(Self {
            segmenter,
            syllabifier,
            registry,
        }))
    }
}

#[uniffi::export]
impl ThaiTokenizer {
    /// Bundled word and syllable lists, maximum matching.
    #[uniffi::constructor]
    fn new_default() -> Result<Arc<Self>, ThaiError> {
        Self::build(&Settings::default())
    }

    /// Empty entries in `words` are skipped.
    #[uniffi::constructor]
    fn from_words(words: Vec<String>) -> Result<Arc<Self>, ThaiError> {
        Self::build(&Settings {
            words: LexiconSource::CustomList(words),
            ..Settings::default()
        })
    }

    #[uniffi::constructor]
    fn from_file(path: String) -> Result<Arc<Self>, ThaiError> {
        Self::build(&Settings {
            words: LexiconSource::CustomFile(path.into()),
            ..Settings::default()
        })
    }

    /// Build from a settings TOML file.
    #[uniffi::constructor]
    fn from_settings(path: String) -> Result<Arc<Self>, ThaiError> {
        Self::build(&Settings::load(Path::new(&path))?)
    }

    /// Segment with the configured policy.
    fn tokenize(&self, text: String) -> Result<Vec<ThaiToken>, ThaiError> {
        Ok(self
            .segmenter
            .tokenize(&text)?
            .into_iter()
            .map(ThaiToken::from)
            .collect())
    }

    fn tokenize_words(&self, text: String) -> Result<Vec<String>, ThaiError> {
        Ok(self.segmenter.tokenize_strs(&text)?)
    }

    /// Segment with a named engine (`newmm`, `mm`, `longest-matching`).
    fn tokenize_with(&self, engine: String, text: String) -> Result<Vec<ThaiToken>, ThaiError> {
        Ok(self
            .registry
            .tokenize(&engine, &text)?
            .into_iter()
            .map(ThaiToken::from)
            .collect())
    }

    fn syllabify(&self, text: String) -> Result<Vec<String>, ThaiError> {
        Ok(self.syllabifier.tokenize_strs(&text)?)
    }

    fn engines(&self) -> Vec<String> {
        self.registry.names().into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_and_tokenize() {
        let tok = ThaiTokenizer::from_words(vec!["กิน".into(), "ข้าว".into()]).unwrap();
        let tokens = tok.tokenize("กินข้าวx".into()).unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["กิน", "ข้าว", "x"]);
        assert!(tokens[2].unknown);
        assert_eq!((tokens[1].start, tokens[1].end), (3, 7));
    }

    #[test]
    fn test_from_words_skips_empty() {
        let tok = ThaiTokenizer::from_words(vec!["กิน".into(), String::new(), "ข้าว".into()])
            .unwrap();
        assert_eq!(
            tok.tokenize_words("กินข้าว".into()).unwrap(),
            vec!["กิน", "ข้าว"]
        );
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            ThaiTokenizer::from_file("/nonexistent/words.txt".into()),
            Err(ThaiError::Io { .. })
        ));
    }

    #[test]
    fn test_defaults() {
        let tok = ThaiTokenizer::new_default().unwrap();
        assert_eq!(
            tok.tokenize_words("ฉันกินข้าว".into()).unwrap(),
            vec!["ฉัน", "กิน", "ข้าว"]
        );
        assert_eq!(
            tok.syllabify("ภาษาไทย".into()).unwrap(),
            vec!["ภา", "ษา", "ไทย"]
        );
        assert_eq!(tok.engines(), vec!["longest-matching", "mm", "newmm"]);
    }

    #[test]
    fn test_tokenize_with_unknown_engine() {
        let tok = ThaiTokenizer::new_default().unwrap();
        assert!(matches!(
            tok.tokenize_with("icu".into(), "ก".into()),
            Err(ThaiError::UnsupportedPolicy { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let tok = ThaiTokenizer::new_default().unwrap();
        assert!(matches!(
            tok.tokenize(String::new()),
            Err(ThaiError::EmptyInput { .. })
        ));
    }
}
