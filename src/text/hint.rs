//! Flatten segments into a single string with ASCII hints for surfaces that
//! cannot render styles: `*bold*`, `_italic_`, `"code"`.

use super::rules::StyleTag;
use super::segment::Segment;

fn hint(tag: StyleTag) -> &'static str {
    match tag {
        StyleTag::Bold => "*",
        StyleTag::Italic => "_",
        StyleTag::InlineCode => "\"",
        StyleTag::CodeBlock
        | StyleTag::Heading1
        | StyleTag::Heading2
        | StyleTag::Heading3
        | StyleTag::Quote
        | StyleTag::Normal => "",
    }
}

/// Render `segments` as hinted text. Hints open and close on style
/// transitions, so nested regions produce nested hints (`*a _b_ c*`).
pub fn to_hinted(segments: &[Segment]) -> String {
    let mut out = String::new();
    let mut open: Vec<StyleTag> = Vec::new();
    for seg in segments {
        let styles: Vec<StyleTag> = seg
            .styles
            .iter()
            .copied()
            .filter(|t| *t != StyleTag::Normal)
            .collect();
        let shared = open
            .iter()
            .zip(&styles)
            .take_while(|(a, b)| a == b)
            .count();
        for tag in open.drain(shared..).rev() {
            out.push_str(hint(tag));
        }
        for tag in &styles[shared..] {
            out.push_str(hint(*tag));
        }
        open = styles;
        out.push_str(&seg.text);
    }
    for tag in open.into_iter().rev() {
        out.push_str(hint(tag));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segments_pass_through() {
        let segs = vec![Segment::normal("hello")];
        assert_eq!(to_hinted(&segs), "hello");
    }

    #[test]
    fn inline_styles_get_hints() {
        let segs = vec![
            Segment::new("Note:", vec![StyleTag::Bold]),
            Segment::normal(" run "),
            Segment::new("cargo", vec![StyleTag::InlineCode]),
            Segment::normal(" with "),
            Segment::new("care", vec![StyleTag::Italic]),
        ];
        assert_eq!(to_hinted(&segs), "*Note:* run \"cargo\" with _care_");
    }

    #[test]
    fn nested_hints_close_in_order() {
        let segs = vec![
            Segment::new("a ", vec![StyleTag::Bold]),
            Segment::new("b", vec![StyleTag::Bold, StyleTag::Italic]),
            Segment::new(" c", vec![StyleTag::Bold]),
        ];
        assert_eq!(to_hinted(&segs), "*a _b_ c*");
    }

    #[test]
    fn block_styles_have_no_hint() {
        let segs = vec![
            Segment::new("Title", vec![StyleTag::Heading1]),
            Segment::normal("\n"),
            Segment::new("fn main() {}", vec![StyleTag::CodeBlock]),
        ];
        assert_eq!(to_hinted(&segs), "Title\nfn main() {}");
    }

    #[test]
    fn trailing_styles_are_closed() {
        let segs = vec![Segment::new("x", vec![StyleTag::Heading2, StyleTag::Bold])];
        assert_eq!(to_hinted(&segs), "*x*");
    }
}
