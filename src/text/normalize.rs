//! Markup normalization: rewrites markdown syntax into paired marker tokens.
//!
//! Three passes: fenced code blocks are lifted out untouched, then each
//! remaining line gets at most one block rewrite, then inline rules run over the
//! whole prose in a fixed order.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::rules::{MARKER_CLOSE, MARKER_OPEN, MarkerRule, StyleTag, compiled, pattern};

/// Glyph that replaces `-`, `*` and `+` list bullets.
pub const BULLET: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

/// Fold accumulator for the line pass. `None` means the previous line was not
/// a list item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ListState {
    kind: Option<ListKind>,
}

impl ListState {
    fn enter(self, kind: ListKind) -> Self {
        if self.kind != Some(kind) {
            log::trace!("list run started: {:?}", kind);
        }
        Self { kind: Some(kind) }
    }
}

/// Rewrite recognized markup in `text` into marker tokens.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = escape_marker_chars(text);
    let text: Cow<'_, str> = if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        text
    };

    static FENCE: OnceLock<Regex> = OnceLock::new();
    let fence = compiled(&FENCE, pattern::FENCE);

    let mut out = String::with_capacity(text.len());
    let mut prose_start = 0;
    for caps in fence.captures_iter(&text) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.name("body")) else {
            continue;
        };
        let prose = &text[prose_start..whole.start()];
        let prose = if prose_start == 0 {
            prose.trim_end()
        } else {
            prose.trim()
        };
        push_piece(&mut out, &transform_prose(prose));
        let code = fence_body(body.as_str());
        if !code.is_empty() {
            push_piece(&mut out, &StyleTag::CodeBlock.wrap(code));
        }
        prose_start = whole.end();
    }
    let tail = &text[prose_start..];
    let tail = if prose_start == 0 {
        tail
    } else {
        tail.trim_start()
    };
    push_piece(&mut out, &transform_prose(tail));
    out
}

/// Replace marker characters already present in user text so they cannot
/// form tokens.
fn escape_marker_chars(text: &str) -> Cow<'_, str> {
    if text.contains([MARKER_OPEN, MARKER_CLOSE]) {
        Cow::Owned(text.replace([MARKER_OPEN, MARKER_CLOSE], "\u{FFFD}"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Append a piece, separating it from earlier content with a blank line.
fn push_piece(out: &mut String, piece: &str) {
    if piece.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(piece);
}

/// Fence content without its language line and surrounding blank space. The
/// first line is a language line only when it is attached to the opening fence
/// and code follows it.
fn fence_body(raw: &str) -> &str {
    let code = match raw.split_once('\n') {
        Some((info, code)) if is_info_string(info.trim_end()) && !code.trim().is_empty() => {
            code
        }
        _ => raw,
    };
    code.trim_start_matches(['\r', '\n']).trim_end()
}

fn is_info_string(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '+' | '-' | '#' | '.' | '_'))
}

fn transform_prose(prose: &str) -> String {
    if prose.is_empty() {
        return String::new();
    }
    transform_inline(&transform_blocks(prose))
}

fn block_rules() -> &'static [(Regex, StyleTag)] {
    static RULES: OnceLock<Vec<(Regex, StyleTag)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (pattern::HEADING_3, StyleTag::Heading3),
            (pattern::HEADING_2, StyleTag::Heading2),
            (pattern::HEADING_1, StyleTag::Heading1),
            (pattern::QUOTE, StyleTag::Quote),
        ]
        .into_iter()
        .map(|(p, tag)| {
            let re = Regex::new(p)
                .expect("block_rules: pattern is valid and should always compile");
            (re, tag)
        })
        .collect()
    })
}

fn transform_blocks(prose: &str) -> String {
    let (lines, _) = prose.split('\n').fold(
        (Vec::new(), ListState::default()),
        |(mut lines, state), line| {
            let (rewritten, next) = transform_line(line, state);
            lines.push(rewritten);
            (lines, next)
        },
    );
    lines.join("\n")
}

/// Apply the first matching block rule to `line`.
fn transform_line(line: &str, state: ListState) -> (Cow<'_, str>, ListState) {
    static UNORDERED: OnceLock<Regex> = OnceLock::new();
    static ORDERED: OnceLock<Regex> = OnceLock::new();

    for (re, tag) in block_rules() {
        if let Some(body) = re.captures(line).and_then(|c| c.name("body")) {
            return (Cow::Owned(tag.wrap(body.as_str())), ListState::default());
        }
    }
    if let Some(caps) = compiled(&UNORDERED, pattern::UNORDERED_ITEM).captures(line) {
        let item = format!("{} {}", BULLET, &caps["body"]);
        return (Cow::Owned(item), state.enter(ListKind::Unordered));
    }
    if let Some(caps) = compiled(&ORDERED, pattern::ORDERED_ITEM).captures(line) {
        let item = format!("{}. {}", &caps["num"], &caps["body"]);
        return (Cow::Owned(item), state.enter(ListKind::Ordered));
    }
    (Cow::Borrowed(line), ListState::default())
}

/// One inline rewrite. A match of the `skip` alternative is left untouched;
/// a `body` match is replaced by the body, wrapped in `tag` markers if any.
struct InlineRule {
    regex: Regex,
    tag: Option<StyleTag>,
}

impl InlineRule {
    fn new(tag: Option<StyleTag>, body: &str, skip: Option<&str>) -> Self {
        let source = match skip {
            Some(skip) => format!("(?P<skip>{skip})|{body}"),
            None => body.to_string(),
        };
        let regex =
            Regex::new(&source).expect("inline_rules: pattern is valid and should always compile");
        Self { regex, tag }
    }

    fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| {
                match (caps.name("skip"), caps.name("body")) {
                    (None, Some(body)) => match self.tag {
                        Some(tag) => tag.wrap(body.as_str()),
                        None => body.as_str().to_string(),
                    },
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

fn inline_rules() -> &'static [InlineRule] {
    static RULES: OnceLock<Vec<InlineRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let code = StyleTag::InlineCode
            .rule()
            .map(MarkerRule::region_pattern)
            .expect("inline code has a marker rule");
        let marked_code_or_image = format!("{code}|{}", pattern::IMAGE_SPAN);
        let bold = StyleTag::Bold
            .rule()
            .map(MarkerRule::region_pattern)
            .expect("bold has a marker rule");
        let code_span_or_bold = format!("{}|{bold}", pattern::CODE_SPAN);
        vec![
            InlineRule::new(Some(StyleTag::Bold), pattern::BOLD_STARS, Some(pattern::CODE_SPAN)),
            InlineRule::new(
                Some(StyleTag::Bold),
                pattern::BOLD_UNDERSCORES,
                Some(pattern::CODE_SPAN),
            ),
            InlineRule::new(
                Some(StyleTag::Italic),
                pattern::ITALIC_STAR,
                Some(&code_span_or_bold),
            ),
            InlineRule::new(
                Some(StyleTag::Italic),
                pattern::ITALIC_UNDERSCORE,
                Some(&code_span_or_bold),
            ),
            InlineRule::new(Some(StyleTag::InlineCode), pattern::INLINE_CODE, None),
            InlineRule::new(None, pattern::LINK, Some(&marked_code_or_image)),
            InlineRule::new(None, pattern::IMAGE, Some(&code)),
        ]
    })
}

fn transform_inline(text: &str) -> String {
    inline_rules()
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
