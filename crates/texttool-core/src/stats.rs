//! Word-counter statistics

use serde::Serialize;

/// Reading speed assumed by the word-counter page
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub chars: usize,
    pub chars_no_whitespace: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
    /// Rounded-up minutes at 200 words per minute; 0 for empty text
    pub reading_time_minutes: usize,
}

pub fn text_stats(text: &str) -> TextStats {
    let chars = text.chars().count();
    let chars_no_whitespace = text.chars().filter(|c| !c.is_whitespace()).count();
    let words = text.split_whitespace().count();
    let lines = if text.is_empty() { 0 } else { text.lines().count() };
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| s.chars().any(|c| c.is_alphanumeric()))
        .count();

    TextStats {
        chars,
        chars_no_whitespace,
        words,
        lines,
        sentences,
        reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}
