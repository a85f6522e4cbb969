// Chunk: docs/chunks/body_buffer - Note body buffer with gap buffer backing

//! TextBuffer is the public editing API for a note body.
//!
//! It combines the gap buffer with a line index and tracks the cursor as
//! `(line, col)`. Mutations return `true` when the text changed so callers can
//! skip a redraw for no-ops such as Backspace at the start of the buffer.

use crate::gap_buffer::GapBuffer;
use crate::grapheme::{boundary_left, boundary_right};
use crate::line_index::LineIndex;
use crate::types::Position;

#[derive(Debug)]
pub struct TextBuffer {
    buffer: GapBuffer,
    line_index: LineIndex,
    cursor: Position,
}

impl TextBuffer {
    /// Creates a new empty text buffer.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            line_index: LineIndex::new(),
            cursor: Position::default(),
        }
    }

    /// Creates a buffer holding `content` with the cursor at the start.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let buffer = GapBuffer::from_str(content);
        let mut line_index = LineIndex::new();
        line_index.rebuild(content.chars());
        Self {
            buffer,
            line_index,
            cursor: Position::default(),
        }
    }

    // ==================== Accessors ====================

    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    /// Always at least 1 (even for an empty buffer).
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Content of `line` without its newline; empty when out of bounds.
    pub fn line_content(&self, line: usize) -> String {
        self.line_chars(line).into_iter().collect()
    }

    pub fn line_len(&self, line: usize) -> usize {
        self.line_index
            .line_len(line, self.buffer.len())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    fn line_chars(&self, line: usize) -> Vec<char> {
        match self.line_index.line_start(line) {
            Some(start) => self.buffer.slice(start, start + self.line_len(line)),
            None => Vec::new(),
        }
    }

    fn cursor_offset(&self) -> usize {
        self.line_index.line_start(self.cursor.line).unwrap_or(0) + self.cursor.col
    }

    // ==================== Cursor Movement ====================

    /// Moves left by one grapheme, wrapping to the end of the previous line.
    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            let line = self.line_chars(self.cursor.line);
            self.cursor.col = boundary_left(&line, self.cursor.col);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.line_len(self.cursor.line);
        }
    }

    /// Moves right by one grapheme, wrapping to the start of the next line.
    pub fn move_right(&mut self) {
        let len = self.line_len(self.cursor.line);
        if self.cursor.col < len {
            let line = self.line_chars(self.cursor.line);
            self.cursor.col = boundary_right(&line, self.cursor.col);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.line);
    }

    pub fn move_to_buffer_end(&mut self) {
        let last = self.line_count() - 1;
        self.cursor = Position::new(last, self.line_len(last));
    }

    /// Places the cursor at `pos`, clamped to the text.
    pub fn set_cursor(&mut self, pos: Position) {
        let line = pos.line.min(self.line_count() - 1);
        self.cursor = Position::new(line, pos.col.min(self.line_len(line)));
    }

    // ==================== Mutations ====================

    /// Inserts `s` at the cursor and leaves the cursor after it.
    pub fn insert_str(&mut self, s: &str) -> bool {
        let inserted: Vec<char> = s.chars().collect();
        if inserted.is_empty() {
            return false;
        }
        let offset = self.cursor_offset();
        self.buffer.move_gap_to(offset);
        self.buffer.insert_chars(&inserted);
        self.line_index.on_insert(offset, &inserted);

        let end = offset + inserted.len();
        let line = self.line_index.line_of_offset(end);
        let start = self.line_index.line_start(line).unwrap_or(0);
        self.cursor = Position::new(line, end - start);
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut utf8 = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut utf8))
    }

    pub fn insert_newline(&mut self) -> bool {
        self.insert_str("\n")
    }

    /// Backspace: removes the grapheme before the cursor, or joins with the
    /// previous line when the cursor is at column 0.
    pub fn delete_backward(&mut self) -> bool {
        let offset = self.cursor_offset();
        let count = if self.cursor.col > 0 {
            let line = self.line_chars(self.cursor.line);
            self.cursor.col - boundary_left(&line, self.cursor.col)
        } else if self.cursor.line > 0 {
            1
        } else {
            return false;
        };

        self.buffer.move_gap_to(offset);
        let removed = self.buffer.remove_before(count);
        let start = offset - removed.len();
        self.line_index.on_remove(start, &removed);

        let line = self.line_index.line_of_offset(start);
        let line_start = self.line_index.line_start(line).unwrap_or(0);
        self.cursor = Position::new(line, start - line_start);
        true
    }

    /// Delete: removes the grapheme after the cursor, or joins with the next
    /// line when the cursor is at the end of a line. The cursor stays put.
    pub fn delete_forward(&mut self) -> bool {
        let len = self.line_len(self.cursor.line);
        let count = if self.cursor.col < len {
            let line = self.line_chars(self.cursor.line);
            boundary_right(&line, self.cursor.col) - self.cursor.col
        } else if self.cursor.line + 1 < self.line_count() {
            1
        } else {
            return false;
        };

        let offset = self.cursor_offset();
        self.buffer.move_gap_to(offset);
        let removed = self.buffer.remove_after(count);
        self.line_index.on_remove(offset, &removed);
        true
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
