//! Markup detection: does a message contain anything the normalizer would rewrite?

use std::sync::OnceLock;

use regex::RegexSet;

use super::rules::pattern;

fn markup_set() -> &'static RegexSet {
    static SET: OnceLock<RegexSet> = OnceLock::new();
    SET.get_or_init(|| {
        let block = [
            pattern::HEADING_3,
            pattern::HEADING_2,
            pattern::HEADING_1,
            pattern::QUOTE,
            pattern::UNORDERED_ITEM,
            pattern::ORDERED_ITEM,
        ]
        .map(|p| format!("(?m){p}"));
        let inline = [
            pattern::FENCE,
            pattern::BOLD_STARS,
            pattern::BOLD_UNDERSCORES,
            pattern::ITALIC_STAR,
            pattern::ITALIC_UNDERSCORE,
            pattern::INLINE_CODE,
            pattern::LINK,
            pattern::IMAGE,
        ]
        .map(str::to_string);
        RegexSet::new(block.into_iter().chain(inline))
            .expect("markup_set: patterns are valid and should always compile")
    })
}

/// Returns true if any recognized inline or block markup occurs in `text`.
pub fn is_markup(text: &str) -> bool {
    !text.is_empty() && markup_set().is_match(text)
}
