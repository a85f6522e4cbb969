// Chunk: docs/chunks/body_buffer - Note body buffer with gap buffer backing

/// Position in the buffer as (line, column) where both are 0-indexed.
///
/// `col` counts `char`s, not bytes and not display cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}
