//! Style vocabulary: style tags, the marker token table, and the markup patterns
//! shared by detection and normalization.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// First character of every marker token (Unicode private use area).
pub const MARKER_OPEN: char = '\u{E000}';
/// Last character of every marker token.
pub const MARKER_CLOSE: char = '\u{E001}';

/// Visual style label applied to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    Bold,
    Italic,
    InlineCode,
    CodeBlock,
    #[serde(rename = "heading-1")]
    Heading1,
    #[serde(rename = "heading-2")]
    Heading2,
    #[serde(rename = "heading-3")]
    Heading3,
    Quote,
    Normal,
}

impl StyleTag {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleTag::Bold => "bold",
            StyleTag::Italic => "italic",
            StyleTag::InlineCode => "inline-code",
            StyleTag::CodeBlock => "code-block",
            StyleTag::Heading1 => "heading-1",
            StyleTag::Heading2 => "heading-2",
            StyleTag::Heading3 => "heading-3",
            StyleTag::Quote => "quote",
            StyleTag::Normal => "normal",
        }
    }

    /// Marker rule for this tag. `Normal` has none.
    pub fn rule(self) -> Option<&'static MarkerRule> {
        MARKER_RULES.iter().find(|r| r.tag == self)
    }

    /// Surround `content` with this tag's start and end tokens.
    pub fn wrap(self, content: &str) -> String {
        match self.rule() {
            Some(rule) => {
                let len = rule.start.len() + content.len() + rule.end.len();
                let mut out = String::with_capacity(len);
                out.push_str(rule.start);
                out.push_str(content);
                out.push_str(rule.end);
                out
            }
            None => content.to_string(),
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paired start/end tokens bounding a styled region in normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRule {
    pub tag: StyleTag,
    pub start: &'static str,
    pub end: &'static str,
    /// Whether a region may span newlines (only code blocks do).
    pub multiline: bool,
}

impl MarkerRule {
    const fn new(tag: StyleTag, start: &'static str, end: &'static str, multiline: bool) -> Self {
        Self {
            tag,
            start,
            end,
            multiline,
        }
    }

    /// Regex source matching one whole region, both tokens included.
    pub(crate) fn region_pattern(&self) -> String {
        let body = if self.multiline { "(?s:.*?)" } else { ".*?" };
        format!(
            "{}{}{}",
            regex::escape(self.start),
            body,
            regex::escape(self.end)
        )
    }
}

/// Every styled tag with its tokens. Tokens are pairwise distinct and none is a
/// substring of another.
pub static MARKER_RULES: [MarkerRule; 8] = [
    MarkerRule::new(StyleTag::Bold, "\u{E000}b\u{E001}", "\u{E000}/b\u{E001}", false),
    MarkerRule::new(StyleTag::Italic, "\u{E000}i\u{E001}", "\u{E000}/i\u{E001}", false),
    MarkerRule::new(
        StyleTag::InlineCode,
        "\u{E000}code\u{E001}",
        "\u{E000}/code\u{E001}",
        false,
    ),
    MarkerRule::new(
        StyleTag::CodeBlock,
        "\u{E000}pre\u{E001}",
        "\u{E000}/pre\u{E001}",
        true,
    ),
    MarkerRule::new(StyleTag::Heading1, "\u{E000}h1\u{E001}", "\u{E000}/h1\u{E001}", false),
    MarkerRule::new(StyleTag::Heading2, "\u{E000}h2\u{E001}", "\u{E000}/h2\u{E001}", false),
    MarkerRule::new(StyleTag::Heading3, "\u{E000}h3\u{E001}", "\u{E000}/h3\u{E001}", false),
    MarkerRule::new(
        StyleTag::Quote,
        "\u{E000}quote\u{E001}",
        "\u{E000}/quote\u{E001}",
        false,
    ),
];

/// Markup syntax patterns. Block patterns are anchored to a single line; the
/// detector compiles them in multi-line mode. Inline bodies exclude marker
/// characters so a rewrite never straddles an existing region boundary.
pub(crate) mod pattern {
    pub const FENCE: &str = r"(?s)```(?P<body>.*?)```";

    pub const HEADING_3: &str = r"^###[ \t]+(?P<body>.+)$";
    pub const HEADING_2: &str = r"^##[ \t]+(?P<body>.+)$";
    pub const HEADING_1: &str = r"^#[ \t]+(?P<body>.+)$";
    pub const QUOTE: &str = r"^[ \t]*>[ \t]+(?P<body>.+)$";
    pub const UNORDERED_ITEM: &str = r"^[ \t]*[-*+][ \t]+(?P<body>.+)$";
    pub const ORDERED_ITEM: &str = r"^[ \t]*(?P<num>\d+)\.[ \t]+(?P<body>.+)$";

    pub const CODE_SPAN: &str = r"`[^`\n\x{E000}\x{E001}]+`";
    pub const BOLD_STARS: &str = r"\*\*(?P<body>[^\n\x{E000}\x{E001}]+?)\*\*";
    pub const BOLD_UNDERSCORES: &str = r"__(?P<body>[^\n\x{E000}\x{E001}]+?)__";
    pub const ITALIC_STAR: &str = r"\*(?P<body>[^*\s\x{E000}\x{E001}](?:[^*\n\x{E000}\x{E001}]*?[^*\s\x{E000}\x{E001}])?)\*";
    pub const ITALIC_UNDERSCORE: &str = r"\b_(?P<body>[^_\s\x{E000}\x{E001}](?:[^_\n\x{E000}\x{E001}]*?[^_\s\x{E000}\x{E001}])?)_\b";
    pub const INLINE_CODE: &str = r"`(?P<body>[^`\n\x{E000}\x{E001}]+)`";
    pub const LINK: &str = r"\[(?P<body>[^\]\n]*)\]\([^)\n]*\)";
    pub const IMAGE: &str = r"!\[(?P<body>[^\]\n]*)\]\([^)\n]*\)";
    pub const IMAGE_SPAN: &str = r"!\[[^\]\n]*\]\([^)\n]*\)";
}

/// Compile `pattern` into `cell` on first use.
pub(crate) fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern).expect("markup pattern is valid and should always compile")
    })
}
