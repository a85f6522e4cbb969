// Chunk: docs/chunks/body_buffer - Note body buffer with gap buffer backing

//! Gap buffer storage for the note body.
//!
//! Characters live in one `Vec<char>` split by a movable gap. Typing happens at
//! the cursor, so the gap almost always sits where the next edit lands and
//! inserts and deletes there are O(1).

const MIN_GAP: usize = 64;

#[derive(Debug)]
pub struct GapBuffer {
    /// [text before gap | gap | text after gap]
    data: Vec<char>,
    gap_start: usize,
    gap_end: usize,
}

impl GapBuffer {
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; MIN_GAP],
            gap_start: 0,
            gap_end: MIN_GAP,
        }
    }

    /// Creates a buffer holding `text` with the gap at the end.
    pub fn from_str(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        data.resize(len + MIN_GAP, '\0');
        Self {
            data,
            gap_start: len,
            gap_end: len + MIN_GAP,
        }
    }

    /// Number of characters stored (the gap is not counted).
    pub fn len(&self) -> usize {
        self.data.len() - (self.gap_end - self.gap_start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves the gap so that it starts at logical offset `pos` (clamped to `len`).
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        if pos < self.gap_start {
            let count = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - count);
            self.gap_start -= count;
            self.gap_end -= count;
        } else if pos > self.gap_start {
            let count = pos - self.gap_start;
            self.data.copy_within(self.gap_end..self.gap_end + count, self.gap_start);
            self.gap_start += count;
            self.gap_end += count;
        }
    }

    /// Grows the gap in place until it can hold `needed` more characters.
    fn reserve(&mut self, needed: usize) {
        let gap = self.gap_end - self.gap_start;
        if gap >= needed {
            return;
        }
        let extra = (needed - gap).max(self.data.len()).max(MIN_GAP);
        let tail = self.data.len() - self.gap_end;
        self.data.resize(self.data.len() + extra, '\0');
        let new_gap_end = self.data.len() - tail;
        self.data.copy_within(self.gap_end..self.gap_end + tail, new_gap_end);
        self.gap_end = new_gap_end;
    }

    /// Inserts characters at the gap; the gap ends up after them.
    pub fn insert_chars(&mut self, chars: &[char]) {
        self.reserve(chars.len());
        self.data[self.gap_start..self.gap_start + chars.len()].copy_from_slice(chars);
        self.gap_start += chars.len();
    }

    /// Removes up to `count` characters before the gap and returns them in order.
    pub fn remove_before(&mut self, count: usize) -> Vec<char> {
        let count = count.min(self.gap_start);
        let removed = self.data[self.gap_start - count..self.gap_start].to_vec();
        self.gap_start -= count;
        removed
    }

    /// Removes up to `count` characters after the gap and returns them in order.
    pub fn remove_after(&mut self, count: usize) -> Vec<char> {
        let count = count.min(self.data.len() - self.gap_end);
        let removed = self.data[self.gap_end..self.gap_end + count].to_vec();
        self.gap_end += count;
        removed
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the characters in the logical range `start..end` (clamped).
    pub fn slice(&self, start: usize, end: usize) -> Vec<char> {
        let end = end.min(self.len());
        if start >= end {
            return Vec::new();
        }
        self.chars().skip(start).take(end - start).collect()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self.chars().collect();
        f.write_str(&text)
    }
}
