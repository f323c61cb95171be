//! Script classification for Thai text.

use std::ops::RangeInclusive;

use serde::Serialize;

/// The Thai Unicode block (U+0E00..U+0E7F), including its unassigned
/// codepoints.
pub const THAI_BLOCK: RangeInclusive<char> = '\u{0E00}'..='\u{0E7F}';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("cannot compute a script ratio of empty text")]
    EmptyInput,
}

pub fn is_thai(c: char) -> bool {
    THAI_BLOCK.contains(&c)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptRatio {
    /// Percentage of Thai chars, 0.0..=100.0
    pub ratio: f64,
    /// Every input char paired with whether it is Thai; only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<(char, bool)>>,
}

/// Percentage of chars in `text` that fall in the Thai block.
pub fn script_ratio(text: &str, per_character: bool) -> Result<ScriptRatio, ScriptError> {
    let mut total = 0usize;
    let mut thai = 0usize;
    let mut breakdown = per_character.then(Vec::new);
    for c in text.chars() {
        let in_script = is_thai(c);
        total += 1;
        thai += usize::from(in_script);
        if let Some(pairs) = breakdown.as_mut() {
            pairs.push((c, in_script));
        }
    }
    if total == 0 {
        return Err(ScriptError::EmptyInput);
    }
    Ok(ScriptRatio {
        ratio: thai as f64 * 100.0 / total as f64,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_in_four() {
        let r = script_ratio("กabc", false).unwrap();
        assert_eq!(r.ratio, 25.0);
        assert!(r.breakdown.is_none());
    }

    #[test]
    fn test_breakdown() {
        let r = script_ratio("กa", true).unwrap();
        assert_eq!(r.ratio, 50.0);
        assert_eq!(r.breakdown, Some(vec![('ก', true), ('a', false)]));
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(script_ratio("", false), Err(ScriptError::EmptyInput));
        assert_eq!(script_ratio("", true), Err(ScriptError::EmptyInput));
    }

    #[test]
    fn test_all_and_none() {
        assert_eq!(script_ratio("ภาษาไทย", false).unwrap().ratio, 100.0);
        assert_eq!(script_ratio("hello", false).unwrap().ratio, 0.0);
    }

    #[test]
    fn test_block_edges() {
        // U+0E00 and U+0E7F are inside the block even though unassigned
        assert!(is_thai('\u{0E00}'));
        assert!(is_thai('\u{0E7F}'));
        assert!(!is_thai('\u{0DFF}'));
        assert!(!is_thai('\u{0E80}'));
        assert!(is_thai('๙'));
        assert!(is_thai('ฯ'));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // Thai chars are 3 bytes in UTF-8
        let r = script_ratio("ก ข", false).unwrap();
        assert!((r.ratio - 200.0 / 3.0).abs() < 1e-9);
    }
}
