//! Title text fitting.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

/// Appended to a shortened title.
pub const ELLIPSIS: &str = "...";

/// Fit `text` into `max_width` pixels.
///
/// Text that fits is returned unchanged. Otherwise the text is shortened one
/// grapheme at a time until the prefix followed by [`ELLIPSIS`] fits, which
/// yields the longest such prefix. Returns `None` when there is nothing to
/// draw: the text is empty or not even the ellipsis fits.
pub fn fit_text<'a>(
    text: &'a str,
    max_width: i32,
    mut measure: impl FnMut(&str) -> i32,
) -> Option<Cow<'a, str>> {
    if text.is_empty() || max_width <= 0 {
        return None;
    }
    if measure(text) <= max_width {
        return Some(Cow::Borrowed(text));
    }
    if measure(ELLIPSIS) > max_width {
        return None;
    }

    let mut candidate = String::with_capacity(text.len() + ELLIPSIS.len());
    for (end, _) in text.grapheme_indices(true).rev() {
        candidate.clear();
        candidate.push_str(&text[..end]);
        candidate.push_str(ELLIPSIS);
        if measure(&candidate) <= max_width {
            return Some(Cow::Owned(candidate));
        }
    }

    // Only reachable with a measure that is not monotonic
    Some(Cow::Borrowed(ELLIPSIS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(width: i32) -> impl FnMut(&str) -> i32 {
        move |text: &str| text.graphemes(true).count() as i32 * width
    }

    #[test]
    fn test_text_that_fits_is_borrowed() {
        let fitted = fit_text("Simple Window", 200, chars(7)).unwrap();
        assert!(matches!(fitted, Cow::Borrowed("Simple Window")));
    }

    #[test]
    fn test_truncates_to_longest_prefix() {
        // 10 px per grapheme, 60 px allows 3 graphemes plus the ellipsis
        let fitted = fit_text("abcdefghij", 60, chars(10)).unwrap();
        assert_eq!(fitted, "abc...");
    }

    #[test]
    fn test_only_ellipsis_fits() {
        assert_eq!(fit_text("abcdef", 30, chars(10)).unwrap(), "...");
        assert_eq!(fit_text("abcdef", 29, chars(10)), None);
    }

    #[test]
    fn test_empty_or_zero_width() {
        assert_eq!(fit_text("", 100, chars(7)), None);
        assert_eq!(fit_text("abc", 0, chars(7)), None);
    }

    #[test]
    fn test_keeps_graphemes_whole() {
        // "e" + combining acute must not be split
        let text = "e\u{301}".repeat(6);
        let fitted = fit_text(&text, 50, chars(10)).unwrap();
        assert_eq!(fitted, "e\u{301}e\u{301}...");
    }
}
