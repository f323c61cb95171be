//! Coarse sentence splitting. Thai marks sentence breaks with spaces rather
//! than punctuation, so whitespace is the only signal used by default.
//! `LineBreaks` is for input that already holds one sentence per line.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentenceMode {
    /// Split on every run of whitespace, including line breaks.
    #[default]
    Whitespace,
    /// Split on line breaks only; spaces inside a line are kept.
    LineBreaks,
}

pub fn split_sentences(text: &str, mode: SentenceMode) -> Vec<&str> {
    match mode {
        SentenceMode::Whitespace => text.split_whitespace().collect(),
        SentenceMode::LineBreaks => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect(),
    }
}
