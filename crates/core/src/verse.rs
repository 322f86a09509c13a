//! Lyric verse splitting and pagination.
//!
//! Stored lyrics separate verses with a blank line. Texts imported without
//! blank lines fall back to one verse per line.

use crate::filter::Page;

/// Replace literal `\n` escape sequences (backslash + `n`) and CRLF with real
/// newlines.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\\n", "\n").replace("\r\n", "\n")
}

/// Split lyrics into verses.
///
/// Verses are separated by blank lines. When that yields at most one block the
/// text is split on single newlines instead. Blocks are trimmed, empty ones
/// dropped, and line breaks inside a verse collapse to single spaces.
pub fn split_verses(text: &str) -> Vec<String> {
    let text = normalize_newlines(text);
    let mut blocks: Vec<&str> = text.split("\n\n").collect();
    if blocks.len() <= 1 {
        blocks = text.split('\n').collect();
    }
    blocks
        .into_iter()
        .map(|block| {
            block.lines().map(str::trim).filter(|line| !line.is_empty()).collect::<Vec<_>>().join(" ")
        })
        .filter(|verse| !verse.is_empty())
        .collect()
}

/// The `[offset, offset + limit)` window of `items`, clipped to its length.
/// An offset past the end yields an empty vector.
pub fn paginate<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    let start = page.offset();
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page.limit()).min(items.len());
    items.get(start..end).map(<[T]>::to_vec).unwrap_or_default()
}

/// Split `text` into verses and return one page of them.
pub fn verse_page(text: &str, page: Page) -> Vec<String> {
    paginate(&split_verses(text), page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(limit: usize, offset: usize) -> Page {
        Page::new(limit, offset).expect("valid page")
    }

    #[test]
    fn splits_on_blank_lines() {
        assert_eq!(split_verses("line1\n\nline2\n\nline3"), vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn pages_through_verses() {
        let text = "line1\n\nline2\n\nline3";
        assert_eq!(verse_page(text, page(2, 0)), vec!["line1", "line2"]);
        assert_eq!(verse_page(text, page(2, 2)), vec!["line3"]);
        assert!(verse_page(text, page(2, 5)).is_empty());
        assert!(verse_page(text, page(2, 3)).is_empty());
    }

    #[test]
    fn falls_back_to_single_newlines() {
        assert_eq!(split_verses("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn escaped_newlines_are_normalized() {
        let stored = r"Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?\n\nI thought I was a fool for no one";
        assert_eq!(
            split_verses(stored),
            vec![
                "Ooh baby, don't you know I suffer? Ooh baby, can you hear me moan?",
                "I thought I was a fool for no one",
            ]
        );
    }

    #[test]
    fn drops_empty_and_whitespace_verses() {
        assert_eq!(split_verses("\n\n first \n\n\n\n  \n\nsecond\n\n"), vec!["first", "second"]);
        assert!(split_verses("").is_empty());
        assert!(split_verses("   ").is_empty());
    }

    #[test]
    fn crlf_text_splits_like_lf() {
        assert_eq!(split_verses("a\r\nb\r\n\r\nc"), vec!["a b", "c"]);
    }

    #[test]
    fn single_verse_without_newlines() {
        assert_eq!(split_verses("just one line"), vec!["just one line"]);
    }

    #[test]
    fn paginate_clips_large_limit() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, page(1000, 1)), vec![2, 3]);
    }
}
