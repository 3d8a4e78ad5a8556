//! Rich-text formatting pipeline for chat messages.
//!
//! A message is either classified as plain and word-wrapped, or normalized
//! into marker tokens and split into styled [`Segment`]s.

mod detect;
mod format;
mod hint;
mod normalize;
mod rules;
mod segment;
mod wrap;

pub use detect::is_markup;
pub use format::{FormattingResult, Formatter, format_message};
pub use hint::to_hinted;
pub use normalize::{BULLET, normalize};
pub use rules::{MARKER_CLOSE, MARKER_OPEN, MARKER_RULES, MarkerRule, StyleTag};
pub use segment::{MarkerKind, MarkerPosition, Segment, marker_positions, segment, strip_markers};
pub use wrap::{DEFAULT_WRAP_WIDTH, wrap};

#[cfg(test)]
mod tests;
