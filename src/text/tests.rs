use super::{
    FormattingResult, MARKER_RULES, Segment, StyleTag, format_message, is_markup, normalize,
    segment, strip_markers, wrap,
};

const CORPUS: &[&str] = &[
    "",
    "plain text only",
    "plain **bold** plain",
    "**a *b* c** and _d_",
    "***x***",
    "*a **b** c*",
    "**unclosed bold",
    "`code` then **bold `inside` bold**",
    "# Title\n## Sub\n### Minor\n#### Not a heading",
    "> quote with *emphasis*\n- item one\n- item **two**\n1. first\n2. second",
    "See [docs](https://example.com) and ![alt](img.png)",
    "Here:\n```rust\nfn main() { println!(\"**hi**\"); }\n```\nand `after`",
    "```unclosed fence *x*",
    "mixed _under_ and snake_case_name",
    "emoji 🎉 **bold 🎉** ünïcödé *ïtalic*",
    "stray \u{E000}b\u{E001} marker and \u{E000}/i\u{E001} end",
];

fn concat(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn segments_cover_normalized_text() {
    for input in CORPUS {
        let normalized = normalize(input);
        let segments = segment(&normalized);
        assert_eq!(
            concat(&segments),
            strip_markers(&normalized),
            "coverage failed for {input:?}"
        );
    }
}

#[test]
fn segments_are_maximal_and_non_empty() {
    for input in CORPUS {
        let segments = segment(&normalize(input));
        assert!(segments.iter().all(|s| !s.text.is_empty()), "{input:?}");
        assert!(segments.iter().all(|s| !s.styles.is_empty()), "{input:?}");
        assert!(
            segments.windows(2).all(|w| w[0].styles != w[1].styles),
            "adjacent runs share styles for {input:?}"
        );
    }
}

#[test]
fn no_marker_characters_leak_into_segments() {
    for input in CORPUS {
        for seg in segment(&normalize(input)) {
            for rule in &MARKER_RULES {
                assert!(!seg.text.contains(rule.start) && !seg.text.contains(rule.end));
            }
        }
    }
}

#[test]
fn plain_text_is_a_normalize_fixed_point() {
    for input in ["hello world", "2 * 3 * 4", "snake_case_name", "#hashtag"] {
        assert!(!is_markup(input));
        assert_eq!(normalize(input), input);
    }
}

#[test]
fn detection_literals() {
    assert!(!is_markup("hello world"));
    assert!(is_markup("**bold**"));
    assert!(is_markup("# Heading"));
}

#[test]
fn plain_bold_plain_segments() {
    assert_eq!(
        segment(&normalize("plain **bold** plain")),
        vec![
            Segment::normal("plain "),
            Segment::new("bold", vec![StyleTag::Bold]),
            Segment::normal(" plain"),
        ]
    );
}

#[test]
fn no_markup_fallback() {
    assert_eq!(segment("no markup here"), vec![Segment::normal("no markup here")]);
}

#[test]
fn triple_asterisks_are_bold_with_literal_stars() {
    assert_eq!(
        segment(&normalize("***x***")),
        vec![
            Segment::new("*x", vec![StyleTag::Bold]),
            Segment::normal("*"),
        ]
    );
}

#[test]
fn bold_inside_italic_keeps_outer_asterisks() {
    assert_eq!(
        segment(&normalize("*a **b** c*")),
        vec![
            Segment::normal("*a "),
            Segment::new("b", vec![StyleTag::Bold]),
            Segment::normal(" c*"),
        ]
    );
}

#[test]
fn italic_inside_bold_is_not_styled() {
    let segments = segment(&normalize("**a *b* c**"));
    assert_eq!(segments, vec![Segment::new("a *b* c", vec![StyleTag::Bold])]);
    assert!(!segments.iter().any(|s| s.has_style(StyleTag::Italic)));
}

#[test]
fn marker_chars_in_user_text_do_not_restyle() {
    let result = format_message("\u{E000}b\u{E001}hello **x**");
    assert_eq!(
        result,
        FormattingResult::Segments(vec![
            Segment::normal("\u{FFFD}b\u{FFFD}hello "),
            Segment::new("x", vec![StyleTag::Bold]),
        ])
    );
}

#[test]
fn stray_marker_chars_keep_their_text() {
    let input = "stray \u{E000}b\u{E001} marker and \u{E000}/i\u{E001} end **x**";
    let segments = segment(&normalize(input));
    assert!(segments[0].has_style(StyleTag::Normal));
    assert_eq!(
        concat(&segments),
        "stray \u{FFFD}b\u{FFFD} marker and \u{FFFD}/i\u{FFFD} end x"
    );
}

#[test]
fn single_word_fence_keeps_its_content() {
    assert_eq!(
        format_message("```cargo\n```"),
        FormattingResult::Segments(vec![Segment::new("cargo", vec![StyleTag::CodeBlock])])
    );
}

#[test]
fn italic_adjacent_to_bold() {
    assert_eq!(
        segment(&normalize("**b***i*")),
        vec![
            Segment::new("b", vec![StyleTag::Bold]),
            Segment::new("i", vec![StyleTag::Italic]),
        ]
    );
}

#[test]
fn block_and_inline_styles_nest() {
    let segments = segment(&normalize("# **Big** news\n> be *calm*"));
    assert_eq!(
        segments,
        vec![
            Segment::new("Big", vec![StyleTag::Heading1, StyleTag::Bold]),
            Segment::new(" news", vec![StyleTag::Heading1]),
            Segment::normal("\n"),
            Segment::new("be ", vec![StyleTag::Quote]),
            Segment::new("calm", vec![StyleTag::Quote, StyleTag::Italic]),
        ]
    );
}

#[test]
fn code_block_content_is_untouched() {
    let segments = segment(&normalize("Run:\n```sh\necho **not bold**\n- not a list\n```"));
    assert_eq!(
        segments,
        vec![
            Segment::normal("Run:\n\n"),
            Segment::new("echo **not bold**\n- not a list", vec![StyleTag::CodeBlock]),
        ]
    );
}

#[test]
fn list_items_render_with_bullets() {
    let result = format_message("Shopping:\n- milk\n- **eggs**\n3. bread");
    assert_eq!(
        result,
        FormattingResult::Segments(vec![
            Segment::normal("Shopping:\n• milk\n• "),
            Segment::new("eggs", vec![StyleTag::Bold]),
            Segment::normal("\n3. bread"),
        ])
    );
}

#[test]
fn wrap_boundary() {
    let out = wrap("aaaa bbbb cccc dddd eeee", 10);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines.iter().all(|l| l.len() <= 10));
    assert_eq!(lines.join(" "), "aaaa bbbb cccc dddd eeee");
}

#[test]
fn wrap_is_idempotent() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor";
    for width in [1, 8, 20, 40, 200] {
        let once = wrap(text, width);
        assert_eq!(wrap(&once, width), once, "width {width}");
    }
}

#[test]
fn empty_input_for_both_paths() {
    assert!(format_message("").is_empty());
    assert!(format_message(None).is_empty());
}
