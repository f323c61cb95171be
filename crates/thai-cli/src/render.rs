//! Text rendering of segmentation results.

use unicode_width::UnicodeWidthStr;

use thai_core::segmenter::{Token, TokenKind};

/// Tokens joined with `|`.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("|")
}

/// Pad `s` with spaces to `width` display columns. Thai above/below marks
/// take no column, so char counts cannot be used for alignment.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// One row per token: text, kind, char span, display width.
pub fn token_table(tokens: &[Token]) -> String {
    let text_width = tokens
        .iter()
        .map(|t| UnicodeWidthStr::width(t.text.as_str()))
        .chain(std::iter::once("token".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{}  {:<10}  {:>9}  width\n", pad("token", text_width), "kind", "span");
    for t in tokens {
        let kind = match t.kind {
            TokenKind::Dictionary => "dictionary",
            TokenKind::Unknown => "unknown",
        };
        let span = format!("{}..{}", t.start, t.end);
        out.push_str(&format!(
            "{}  {:<10}  {:>9}  {}\n",
            pad(&t.text, text_width),
            kind,
            span,
            UnicodeWidthStr::width(t.text.as_str())
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, kind: TokenKind, start: usize) -> Token {
        Token {
            text: text.to_string(),
            kind,
            start,
            end: start + text.chars().count(),
        }
    }

    #[test]
    fn test_join_tokens() {
        let tokens = vec![
            token("กิน", TokenKind::Dictionary, 0),
            token("ข้าว", TokenKind::Dictionary, 3),
        ];
        assert_eq!(join_tokens(&tokens), "กิน|ข้าว");
        assert_eq!(join_tokens(&[]), "");
    }

    #[test]
    fn test_pad_uses_display_width() {
        // กิน is three chars but two columns
        assert_eq!(pad("กิน", 4), "กิน  ");
        assert_eq!(pad("abc", 2), "abc");
    }

    #[test]
    fn test_token_table_rows() {
        let tokens = vec![
            token("กิน", TokenKind::Dictionary, 0),
            token("x", TokenKind::Unknown, 3),
        ];
        let table = token_table(&tokens);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("token"));
        assert!(lines[1].contains("dictionary"));
        assert!(lines[1].contains("0..3"));
        assert!(lines[2].contains("unknown"));
        assert!(lines[2].ends_with(" 1"));
    }
}
