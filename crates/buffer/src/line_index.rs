// Chunk: docs/chunks/body_buffer - Note body buffer with gap buffer backing

//! Line start offsets for the body buffer.
//!
//! Offsets are character offsets into the logical text. The index is patched
//! after every insert or removal instead of being rebuilt.

#[derive(Debug, Clone)]
pub struct LineIndex {
    /// `line_starts[0]` is always 0; sorted ascending.
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the index from scratch. Used when a note body is loaded.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);
        for (offset, ch) in content.into_iter().enumerate() {
            if ch == '\n' {
                self.line_starts.push(offset + 1);
            }
        }
    }

    /// Always at least 1.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Length of `line` excluding its newline.
    pub fn line_len(&self, line: usize, total_len: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => total_len,
        };
        Some(end - start)
    }

    /// Line containing `offset`.
    pub fn line_of_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Patches the index after `inserted` was placed at `offset`.
    pub fn on_insert(&mut self, offset: usize, inserted: &[char]) {
        if inserted.is_empty() {
            return;
        }
        let line = self.line_of_offset(offset);
        for start in self.line_starts.iter_mut().skip(line + 1) {
            *start += inserted.len();
        }
        let new_starts: Vec<usize> = inserted
            .iter()
            .enumerate()
            .filter(|(_, ch)| **ch == '\n')
            .map(|(i, _)| offset + i + 1)
            .collect();
        let at = line + 1;
        self.line_starts.splice(at..at, new_starts);
    }

    /// Patches the index after `removed` was taken out starting at `offset`.
    pub fn on_remove(&mut self, offset: usize, removed: &[char]) {
        if removed.is_empty() {
            return;
        }
        let end = offset + removed.len();
        // A line whose preceding newline was removed starts in (offset, end].
        self.line_starts.retain(|&start| start <= offset || start > end);
        for start in self.line_starts.iter_mut() {
            if *start > end {
                *start -= removed.len();
            }
        }
    }

    #[cfg(test)]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(text: &str) -> LineIndex {
        let mut index = LineIndex::new();
        index.rebuild(text.chars());
        index
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_text_has_one_line() {
        let index = index_of("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_len(0, 0), Some(0));
    }

    #[test]
    fn rebuild_finds_line_starts() {
        let index = index_of("ab\ncde\n\nf");
        assert_eq!(index.line_starts(), &[0, 3, 7, 8]);
        assert_eq!(index.line_len(1, 9), Some(3));
        assert_eq!(index.line_len(2, 9), Some(0));
        assert_eq!(index.line_len(3, 9), Some(1));
        assert_eq!(index.line_len(4, 9), None);
    }

    #[test]
    fn line_of_offset_maps_into_lines() {
        let index = index_of("ab\ncd");
        assert_eq!(index.line_of_offset(0), 0);
        assert_eq!(index.line_of_offset(2), 0);
        assert_eq!(index.line_of_offset(3), 1);
        assert_eq!(index.line_of_offset(5), 1);
    }

    #[test]
    fn insert_plain_text_shifts_following_lines() {
        let mut index = index_of("ab\ncd");
        index.on_insert(1, &chars("xyz"));
        assert_eq!(index.line_starts(), index_of("axyzb\ncd").line_starts());
    }

    #[test]
    fn insert_with_newlines_adds_lines() {
        let mut index = index_of("ab\ncd");
        index.on_insert(1, &chars("1\n2\n"));
        assert_eq!(index.line_starts(), index_of("a1\n2\nb\ncd").line_starts());
    }

    #[test]
    fn insert_at_line_start_stays_on_that_line() {
        let mut index = index_of("ab\ncd");
        index.on_insert(3, &chars("\n"));
        assert_eq!(index.line_starts(), index_of("ab\n\ncd").line_starts());
    }

    #[test]
    fn remove_newline_joins_lines() {
        let mut index = index_of("ab\ncd\nef");
        index.on_remove(2, &chars("\n"));
        assert_eq!(index.line_starts(), index_of("abcd\nef").line_starts());
    }

    #[test]
    fn remove_span_across_lines() {
        let mut index = index_of("ab\ncd\nef\ngh");
        // removes "b\ncd\ne"
        index.on_remove(1, &chars("b\ncd\ne"));
        assert_eq!(index.line_starts(), index_of("af\ngh").line_starts());
    }
}
