// Chunk: docs/chunks/grapheme_cluster_awareness - Grapheme cluster boundary helpers

//! Grapheme cluster boundaries within a single line.
//!
//! The buffer stores `char`s but the cursor should step over what the user
//! sees as one character: `e` + combining accent, flag pairs, ZWJ emoji.

use unicode_segmentation::UnicodeSegmentation;

/// Char offsets at which graphemes start, plus the end of the line.
fn boundaries(chars: &[char]) -> Vec<usize> {
    let line: String = chars.iter().collect();
    let mut offsets = Vec::with_capacity(chars.len() + 1);
    let mut offset = 0;
    for grapheme in line.graphemes(true) {
        offsets.push(offset);
        offset += grapheme.chars().count();
    }
    offsets.push(offset);
    offsets
}

/// Char offset of the grapheme boundary strictly before `col` (0 at line start).
pub fn boundary_left(chars: &[char], col: usize) -> usize {
    let col = col.min(chars.len());
    if col == 0 {
        return 0;
    }
    if chars[col - 1].is_ascii() && chars.get(col).map_or(true, |c| c.is_ascii()) {
        return col - 1;
    }
    boundaries(chars)
        .into_iter()
        .take_while(|&b| b < col)
        .last()
        .unwrap_or(0)
}

/// Char offset of the grapheme boundary strictly after `col` (line length at the end).
pub fn boundary_right(chars: &[char], col: usize) -> usize {
    if col >= chars.len() {
        return chars.len();
    }
    if chars[col].is_ascii() && chars.get(col + 1).map_or(true, |c| c.is_ascii()) {
        return col + 1;
    }
    boundaries(chars)
        .into_iter()
        .find(|&b| b > col)
        .unwrap_or(chars.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn ascii_steps_one_char() {
        let line = chars("abc");
        assert_eq!(boundary_left(&line, 2), 1);
        assert_eq!(boundary_right(&line, 1), 2);
    }

    #[test]
    fn edges_are_clamped() {
        let line = chars("abc");
        assert_eq!(boundary_left(&line, 0), 0);
        assert_eq!(boundary_right(&line, 3), 3);
        assert_eq!(boundary_right(&line, 10), 3);
    }

    #[test]
    fn combining_mark_is_one_grapheme() {
        // "e" + COMBINING ACUTE ACCENT, then "x"
        let line = chars("e\u{301}x");
        assert_eq!(line.len(), 3);
        assert_eq!(boundary_left(&line, 2), 0);
        assert_eq!(boundary_right(&line, 0), 2);
    }

    #[test]
    fn flag_pair_is_one_grapheme() {
        let line = chars("a\u{1F1FA}\u{1F1F8}");
        assert_eq!(boundary_left(&line, 3), 1);
        assert_eq!(boundary_right(&line, 1), 3);
    }

    #[test]
    fn ascii_before_combining_mark_takes_slow_path() {
        let line = chars("ae\u{301}");
        assert_eq!(boundary_right(&line, 1), 3);
        assert_eq!(boundary_left(&line, 3), 1);
    }
}
