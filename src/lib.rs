//! # chat-markup
//!
//! Formatting pipeline for chat message bodies that may contain lightweight
//! markup (emphasis, code, headings, lists, quotes), for hosts that cannot
//! render markdown themselves.
//!
//! ## Features
//! - Markup detection
//! - Normalization of markdown syntax into paired marker tokens
//! - Segmentation into styled runs, or a hinted plain string
//! - Greedy word wrap for messages without markup
//!
//! ```
//! use chat_markup::text::{FormattingResult, StyleTag, format_message};
//!
//! let result = format_message("plain **bold** plain");
//! let segments = result.segments().unwrap();
//! assert_eq!(segments[1].text, "bold");
//! assert_eq!(segments[1].styles, [StyleTag::Bold]);
//!
//! assert_eq!(format_message("hello"), FormattingResult::Plain("hello".into()));
//! ```

pub mod core;
pub mod text;
