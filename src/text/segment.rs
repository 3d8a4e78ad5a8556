//! Marker segmentation: split normalized text into maximal styled runs.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::rules::{MARKER_RULES, MarkerRule, StyleTag};

/// A run of visible text sharing one style set (outermost style first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub styles: Vec<StyleTag>,
}

impl Segment {
    pub fn new(text: impl Into<String>, styles: Vec<StyleTag>) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }

    /// Segment with only the `Normal` style.
    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, vec![StyleTag::Normal])
    }

    pub fn has_style(&self, tag: StyleTag) -> bool {
        self.styles.contains(&tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
    /// Token with no partner; removed from the text, no effect on styles.
    Orphan,
}

/// A marker token found while scanning one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPosition {
    pub offset: usize,
    pub kind: MarkerKind,
    pub tag: StyleTag,
    pub token_len: usize,
}

/// Styles opened and not yet closed, most recently opened last.
#[derive(Debug, Default)]
struct OpenStyles(Vec<StyleTag>);

impl OpenStyles {
    fn push(&mut self, tag: StyleTag) {
        self.0.push(tag);
    }

    /// Close the most recently opened `tag`. Linear in the number of open
    /// styles, which is bounded by the rule count.
    fn remove(&mut self, tag: StyleTag) -> bool {
        match self.0.iter().rposition(|t| *t == tag) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    fn current(&self) -> Vec<StyleTag> {
        if self.0.is_empty() {
            vec![StyleTag::Normal]
        } else {
            self.0.clone()
        }
    }
}

fn region_scanners() -> &'static [(&'static MarkerRule, Regex)] {
    static SCANNERS: OnceLock<Vec<(&'static MarkerRule, Regex)>> = OnceLock::new();
    SCANNERS.get_or_init(|| {
        MARKER_RULES
            .iter()
            .map(|rule| {
                let re = Regex::new(&rule.region_pattern())
                    .expect("region_scanners: pattern is valid and should always compile");
                (rule, re)
            })
            .collect()
    })
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternatives: Vec<String> = MARKER_RULES
            .iter()
            .flat_map(|r| [regex::escape(r.start), regex::escape(r.end)])
            .collect();
        Regex::new(&alternatives.join("|"))
            .expect("token_regex: pattern is valid and should always compile")
    })
}

fn token_tag(token: &str) -> Option<StyleTag> {
    MARKER_RULES
        .iter()
        .find(|r| r.start == token || r.end == token)
        .map(|r| r.tag)
}

/// All marker tokens in `text`, sorted by offset. Tokens never overlap, so
/// offsets are unique.
pub fn marker_positions(text: &str) -> Vec<MarkerPosition> {
    let mut positions = Vec::new();
    for (rule, re) in region_scanners() {
        for m in re.find_iter(text) {
            positions.push(MarkerPosition {
                offset: m.start(),
                kind: MarkerKind::Start,
                tag: rule.tag,
                token_len: rule.start.len(),
            });
            positions.push(MarkerPosition {
                offset: m.end() - rule.end.len(),
                kind: MarkerKind::End,
                tag: rule.tag,
                token_len: rule.end.len(),
            });
        }
    }

    let paired: HashSet<usize> = positions.iter().map(|p| p.offset).collect();
    for m in token_regex().find_iter(text) {
        if paired.contains(&m.start()) {
            continue;
        }
        if let Some(tag) = token_tag(m.as_str()) {
            positions.push(MarkerPosition {
                offset: m.start(),
                kind: MarkerKind::Orphan,
                tag,
                token_len: m.len(),
            });
        }
    }

    positions.sort_by_key(|p| p.offset);
    positions
}

/// Remove every marker token, leaving only visible text.
pub fn strip_markers(text: &str) -> String {
    token_regex().replace_all(text, "").into_owned()
}

/// Append a run, merging it into the previous segment when the styles match.
fn push_run(segments: &mut Vec<Segment>, text: &str, styles: Vec<StyleTag>) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(last) if last.styles == styles => last.text.push_str(text),
        _ => segments.push(Segment::new(text, styles)),
    }
}

/// Split normalized text into styled segments whose texts, concatenated, equal
/// `strip_markers(text)`.
pub fn segment(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    let positions = marker_positions(text);
    if positions.is_empty() {
        return vec![Segment::normal(text)];
    }

    let mut segments = Vec::new();
    let mut open = OpenStyles::default();
    let mut cursor = 0;
    for pos in &positions {
        if let Some(gap) = text.get(cursor..pos.offset) {
            push_run(&mut segments, gap, open.current());
        }
        match pos.kind {
            MarkerKind::Start => open.push(pos.tag),
            MarkerKind::End => {
                if !open.remove(pos.tag) {
                    log::debug!("dropping unbalanced {} end marker at {}", pos.tag, pos.offset);
                }
            }
            MarkerKind::Orphan => {
                log::debug!("dropping orphan {} marker at {}", pos.tag, pos.offset);
            }
        }
        cursor = pos.offset + pos.token_len;
    }
    if let Some(rest) = text.get(cursor..) {
        push_run(&mut segments, rest, open.current());
    }
    segments
}
