pub mod lexicon_ops;
pub mod segment_ops;

use std::path::{Path, PathBuf};

use thai_core::lexicon::{Lexicon, LexiconError, LexiconSource, LexiconTrie};
use thai_core::segmenter::PathPolicy;
use thai_core::settings::Settings;

use crate::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Word-lexicon and policy overrides shared by the segmenting commands.
#[derive(Debug, Default, Clone)]
pub struct SegmenterArgs {
    pub dict: Option<String>,
    pub compiled: Option<String>,
    pub policy: Option<String>,
    pub config: Option<String>,
}

impl SegmenterArgs {
    /// Settings from `--config` (or defaults), then `--dict`, `--compiled`
    /// and `--policy` applied on top.
    pub fn settings(&self) -> Result<Settings, CliError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(Path::new(path))?,
            None => Settings::default(),
        };
        if let Some(dict) = &self.dict {
            settings.words = LexiconSource::CustomFile(PathBuf::from(dict));
        }
        if let Some(compiled) = &self.compiled {
            settings.words = LexiconSource::CompiledFile(PathBuf::from(compiled));
        }
        if let Some(policy) = &self.policy {
            settings.policy = policy.parse::<PathPolicy>()?;
        }
        Ok(settings)
    }
}

/// Open a lexicon file, compiled or plain text.
pub fn open_lexicon(path: &str) -> Result<LexiconTrie, LexiconError> {
    match LexiconTrie::open(Path::new(path)) {
        Err(LexiconError::InvalidMagic | LexiconError::InvalidHeader) => {
            Ok(LexiconTrie::from_lexicon(Lexicon::load(path)?))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_settings_overrides() {
        let args = SegmenterArgs {
            dict: Some("/tmp/words.txt".into()),
            policy: Some("longest-matching".into()),
            ..Default::default()
        };
        let s = args.settings().unwrap();
        assert_eq!(s.policy, PathPolicy::GreedyLongestMatch);
        assert_eq!(s.words, LexiconSource::CustomFile("/tmp/words.txt".into()));
    }

    #[test]
    fn test_settings_bad_policy() {
        let args = SegmenterArgs {
            policy: Some("icu".into()),
            ..Default::default()
        };
        assert!(matches!(args.settings(), Err(CliError::Policy(_))));
    }

    #[test]
    fn test_open_lexicon_text_and_compiled() {
        let mut text = tempfile::NamedTempFile::new().unwrap();
        writeln!(text, "กิน\nข้าว").unwrap();
        let path = text.path().to_str().unwrap().to_string();
        let from_text = open_lexicon(&path).unwrap();
        assert_eq!(from_text.len(), 2);

        let dir = tempfile::tempdir().unwrap();
        let compiled = dir.path().join("w.thlx");
        from_text.save(&compiled).unwrap();
        let from_compiled = open_lexicon(compiled.to_str().unwrap()).unwrap();
        assert!(from_compiled.contains("ข้าว"));
    }
}
