// Chunk: docs/chunks/session_controller - Keystroke-driven session state machine
//! Which pane currently receives keystrokes.

/// The three focusable panes of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// The search line; printable keys extend the query.
    #[default]
    Search,
    /// The note body; keys edit the body buffer.
    Editor,
    /// The suggestion list; arrows move the highlighted title.
    Suggestions,
}
