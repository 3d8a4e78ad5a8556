//! Formatting facade: detect, then normalize and segment, or wrap.

use serde::Serialize;

use super::detect::is_markup;
use super::hint::to_hinted;
use super::normalize::normalize;
use super::segment::{Segment, segment};
use super::wrap::{DEFAULT_WRAP_WIDTH, wrap};

/// Output of [`Formatter::format`]: styled segments for messages with markup,
/// wrapped text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum FormattingResult {
    Segments(Vec<Segment>),
    Plain(String),
}

impl Default for FormattingResult {
    fn default() -> Self {
        FormattingResult::Plain(String::new())
    }
}

impl FormattingResult {
    pub fn is_empty(&self) -> bool {
        match self {
            FormattingResult::Segments(segs) => segs.is_empty(),
            FormattingResult::Plain(text) => text.is_empty(),
        }
    }

    pub fn segments(&self) -> Option<&[Segment]> {
        match self {
            FormattingResult::Segments(segs) => Some(segs),
            FormattingResult::Plain(_) => None,
        }
    }

    pub fn plain(&self) -> Option<&str> {
        match self {
            FormattingResult::Plain(text) => Some(text),
            FormattingResult::Segments(_) => None,
        }
    }

    /// Visible text with all styling dropped.
    pub fn visible_text(&self) -> String {
        match self {
            FormattingResult::Segments(segs) => segs.iter().map(|s| s.text.as_str()).collect(),
            FormattingResult::Plain(text) => text.clone(),
        }
    }

    /// Single string for plain-text-only surfaces (see [`to_hinted`]).
    pub fn to_hinted(&self) -> String {
        match self {
            FormattingResult::Segments(segs) => to_hinted(segs),
            FormattingResult::Plain(text) => text.clone(),
        }
    }
}

/// Message formatter. Stateless apart from the wrap width, so one instance can
/// be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    wrap_width: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_WIDTH)
    }
}

impl Formatter {
    pub fn new(wrap_width: usize) -> Self {
        Self { wrap_width }
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    /// Format one message. `None`, empty and whitespace-only messages give an
    /// empty plain result.
    pub fn format<'a>(&self, message: impl Into<Option<&'a str>>) -> FormattingResult {
        let Some(message) = message.into().map(str::trim).filter(|m| !m.is_empty()) else {
            return FormattingResult::default();
        };
        if is_markup(message) {
            let segments = segment(&normalize(message));
            log::debug!("markup message: {} segment(s)", segments.len());
            FormattingResult::Segments(segments)
        } else {
            log::debug!("plain message: wrapping at {} columns", self.wrap_width);
            FormattingResult::Plain(wrap(message, self.wrap_width))
        }
    }
}

/// Format `message` with the default wrap width.
pub fn format_message<'a>(message: impl Into<Option<&'a str>>) -> FormattingResult {
    Formatter::default().format(message)
}
