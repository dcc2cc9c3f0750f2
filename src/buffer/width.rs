//! Fixed glyph width classification
//!
//! Terminals disagree about widths outside these ranges, so the table is
//! deliberately small: ASCII and control characters are narrow, CJK,
//! Hangul, Kana, fullwidth forms and the common emoji blocks are wide,
//! everything else is narrow.

const WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115F),   // Hangul Jamo initial consonants
    (0x2E80, 0x303E),   // CJK radicals, Kangxi, CJK symbols and punctuation
    (0x3041, 0x33FF),   // Hiragana, Katakana, Bopomofo, CJK compatibility
    (0x3400, 0x4DBF),   // CJK extension A
    (0x4E00, 0x9FFF),   // CJK unified ideographs
    (0xA000, 0xA4CF),   // Yi
    (0xAC00, 0xD7A3),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE30, 0xFE4F),   // CJK compatibility forms
    (0xFF00, 0xFF60),   // Fullwidth forms
    (0xFFE0, 0xFFE6),   // Fullwidth signs
    (0x1F300, 0x1F64F), // Misc symbols and pictographs, emoticons
    (0x1F680, 0x1F6FF), // Transport and map symbols
    (0x1F900, 0x1F9FF), // Supplemental symbols and pictographs
    (0x20000, 0x2FFFD), // CJK extensions B..F
    (0x30000, 0x3FFFD), // CJK extension G
];

/// Number of columns a glyph occupies: 1 or 2
pub fn glyph_width(c: char) -> u16 {
    let cp = c as u32;
    if cp < 0x1100 {
        return 1;
    }
    let wide = WIDE_RANGES
        .binary_search_by(|&(lo, hi)| {
            if cp < lo {
                std::cmp::Ordering::Greater
            } else if cp > hi {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok();
    if wide {
        2
    } else {
        1
    }
}

/// Columns a string occupies when written left to right
pub fn text_width(text: &str) -> u16 {
    text.chars()
        .fold(0u16, |acc, c| acc.saturating_add(glyph_width(c)))
}

/// Cut `text` to at most `max_width` columns, marking the cut with '…'
pub fn truncate(text: &str, max_width: u16) -> String {
    if text_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0u16;
    for c in text.chars() {
        let w = glyph_width(c);
        if used + w + 1 > max_width {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_and_controls_are_narrow() {
        assert_eq!(glyph_width('a'), 1);
        assert_eq!(glyph_width('\t'), 1);
        assert_eq!(glyph_width('\u{7f}'), 1);
        assert_eq!(glyph_width('é'), 1);
    }

    #[test]
    fn test_wide_ranges() {
        assert_eq!(glyph_width('中'), 2);
        assert_eq!(glyph_width('한'), 2);
        assert_eq!(glyph_width('カ'), 2);
        assert_eq!(glyph_width('Ａ'), 2);
        assert_eq!(glyph_width('😀'), 2);
        assert_eq!(glyph_width('🚀'), 2);
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(glyph_width('\u{10FF}'), 1);
        assert_eq!(glyph_width('\u{1100}'), 2);
        assert_eq!(glyph_width('\u{115F}'), 2);
        assert_eq!(glyph_width('\u{1160}'), 1);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("a中b"), 4);
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("中文字", 4), "中…");
        assert_eq!(truncate("abc", 0), "");
    }
}
