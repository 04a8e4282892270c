//! Display cleanup for model output.
//!
//! The upstream prompt asks for kanji and Latin letters only, but the model
//! is not trusted to comply, so callers run its output through
//! [`sanitize`] before showing it.

use std::ops::RangeInclusive;

/// Hiragana block.
pub const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';
/// Katakana block.
pub const KATAKANA: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';

pub fn is_forbidden(c: char) -> bool {
    HIRAGANA.contains(&c) || KATAKANA.contains(&c)
}

pub fn contains_forbidden(text: &str) -> bool {
    text.chars().any(is_forbidden)
}

/// Strips both syllabary blocks, collapses whitespace runs into a single
/// space and trims. Idempotent.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().filter(|&c| !is_forbidden(c)) {
        if is_space(c) {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    out
}

// BOM counts as whitespace for display purposes.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_hiragana_and_katakana() {
        let out = sanitize("今日は仕事をしてテストです");
        assert_eq!(out, "今日仕事");
        assert!(!contains_forbidden(&out));
    }

    #[test]
    fn block_edges_are_removed() {
        let edges = ['\u{3040}', '\u{309F}', '\u{30A0}', '\u{30FF}'];
        let input: String = edges.iter().collect();
        assert_eq!(sanitize(&input), "");
    }

    #[test]
    fn neighbours_of_blocks_survive() {
        // U+303F precedes hiragana, U+3100 follows katakana.
        assert_eq!(sanitize("\u{303F}\u{3100}"), "\u{303F}\u{3100}");
    }

    #[test]
    fn collapses_whitespace_and_line_breaks() {
        let out = sanitize("  我 \n\n daily\t\tstudy\u{3000}日本語  ");
        assert_eq!(out, "我 daily study 日本語");
        assert!(!out.contains("  "));
    }

    #[test]
    fn kana_between_spaces_leaves_one_space() {
        assert_eq!(sanitize("食事 です and"), "食事 and");
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize(" \r\n\t\u{FEFF}"), "");
        assert_eq!(sanitize("ひらがな"), "");
    }

    #[test]
    fn clean_text_is_unchanged() {
        let text = "我 daily study 日本語";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn idempotent_over_mixed_samples() {
        let samples = [
            "",
            "   ",
            "こんにちは。今日は仕事をして疲れました。",
            "挨拶. 今日 work and feel 疲労.",
            "\tカタカナ  と\nひらがな\u{3000}\u{3000}漢字 ",
            "a\u{FEFF}b  c",
        ];
        for sample in samples {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once, "not idempotent for {sample:?}");
            assert!(!once.starts_with(' ') && !once.ends_with(' '));
            assert!(!once.contains("  "));
            assert!(!contains_forbidden(&once));
        }
    }
}
