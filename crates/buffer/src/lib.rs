// Chunk: docs/chunks/body_buffer - Note body buffer with gap buffer backing

//! noots-buffer: the editable body of the note currently on screen.
//!
//! The main type is [`TextBuffer`], a multi-line buffer with a `(line, col)`
//! cursor. It is what the editor pane types into and what gets written to disk
//! when the user saves.
//!
//! # Example
//!
//! ```
//! use noots_buffer::{Position, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_str("groceries");
//! buffer.move_to_buffer_end();
//! buffer.insert_newline();
//! buffer.insert_str("- eggs");
//!
//! assert_eq!(buffer.content(), "groceries\n- eggs");
//! assert_eq!(buffer.line_count(), 2);
//! assert_eq!(buffer.cursor_position(), Position::new(1, 6));
//! ```
//!
//! Cursor movement and deletion step over whole grapheme clusters, so an
//! accented letter typed as `e` + combining accent is removed by one Backspace.

mod gap_buffer;
mod grapheme;
mod line_index;
mod text_buffer;
mod types;

pub use text_buffer::TextBuffer;
pub use types::Position;
