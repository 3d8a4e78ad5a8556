//! Plain-text fallback: greedy word wrap for messages without markup.

use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;

/// Line length, in characters, used when no width is configured.
pub const DEFAULT_WRAP_WIDTH: usize = 40;

/// A word measured in characters, one space after it.
#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    chars: usize,
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        self.chars as f64
    }

    fn whitespace_width(&self) -> f64 {
        1.0
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Greedily wrap whitespace-separated words into lines of at most `max_width`
/// characters, joined by `\n`. Words are never split, so a word longer than
/// `max_width` sits alone on its line. A width of 0 is treated as 1.
pub fn wrap(text: &str, max_width: usize) -> String {
    let words: Vec<Word<'_>> = text
        .split_whitespace()
        .map(|word| Word {
            text: word,
            chars: word.chars().count(),
        })
        .collect();
    if words.is_empty() {
        return String::new();
    }
    wrap_first_fit(&words, &[max_width.max(1) as f64])
        .into_iter()
        .map(|line| {
            line.iter()
                .map(|word| word.text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
