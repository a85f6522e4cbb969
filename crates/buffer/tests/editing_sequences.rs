// Chunk: docs/chunks/body_buffer - Note body buffer with gap buffer backing

//! Integration tests for realistic note editing sequences.
//!
//! These check that the gap buffer and the line index agree after the kind of
//! edits a user makes while writing a note.

use noots_buffer::{Position, TextBuffer};

/// Rebuilding from the content must give the same lines as incremental edits.
fn assert_lines_consistent(buf: &TextBuffer) {
    let fresh = TextBuffer::from_str(&buf.content());
    assert_eq!(buf.line_count(), fresh.line_count());
    for line in 0..buf.line_count() {
        assert_eq!(buf.line_content(line), fresh.line_content(line));
    }
}

#[test]
fn test_type_word_then_delete_entirely() {
    let mut buf = TextBuffer::new();
    for ch in "hello".chars() {
        buf.insert_char(ch);
    }
    for _ in 0..5 {
        buf.delete_backward();
    }
    assert!(buf.is_empty());
    assert_eq!(buf.cursor_position(), Position::new(0, 0));
}

#[test]
fn test_write_checklist_note() {
    let mut buf = TextBuffer::new();
    buf.insert_str("todo");
    buf.insert_newline();
    buf.insert_str("- milk");
    buf.insert_newline();
    buf.insert_str("- bread");

    assert_eq!(buf.content(), "todo\n- milk\n- bread");
    assert_eq!(buf.line_count(), 3);
    assert_lines_consistent(&buf);

    // Go back and fix a typo on the middle line
    buf.move_up();
    buf.move_to_line_end();
    buf.insert_str("k");
    assert_eq!(buf.line_content(1), "- milkk");
    buf.delete_backward();
    assert_eq!(buf.content(), "todo\n- milk\n- bread");
    assert_lines_consistent(&buf);
}

#[test]
fn test_join_and_split_repeatedly() {
    let mut buf = TextBuffer::from_str("alpha\nbeta\ngamma");
    buf.set_cursor(Position::new(1, 0));
    buf.delete_backward();
    assert_eq!(buf.content(), "alphabeta\ngamma");
    buf.insert_newline();
    assert_eq!(buf.content(), "alpha\nbeta\ngamma");
    buf.move_to_buffer_end();
    buf.insert_newline();
    buf.insert_newline();
    assert_eq!(buf.line_count(), 5);
    assert_lines_consistent(&buf);
}

#[test]
fn test_loaded_note_edit_in_middle() {
    let mut buf = TextBuffer::from_str("line one\nline two\nline three\n");
    buf.set_cursor(Position::new(1, 5));
    buf.delete_forward();
    buf.delete_forward();
    buf.delete_forward();
    buf.insert_str("2");
    assert_eq!(buf.content(), "line one\nline 2\nline three\n");
    assert_lines_consistent(&buf);
}

#[test]
fn test_unicode_note_round_trips() {
    let text = "日本語のメモ\nnaïve café 👍\n";
    let mut buf = TextBuffer::from_str(text);
    assert_eq!(buf.content(), text);
    buf.set_cursor(Position::new(1, 13));
    assert!(buf.delete_backward());
    assert_eq!(buf.line_content(1), "naïve café ");
    assert_lines_consistent(&buf);
}
