// Chunk: docs/chunks/session_controller - Keystroke-driven session state machine
//! Discrete events consumed by the session controller.
//!
//! The terminal host turns raw key, mouse and resize input into these through
//! the keymap and its own hit-testing. The controller never sees terminal
//! types, so every session behavior can be driven from tests.

use noots_input::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A printable character for the query
    TypeChar(char),
    /// Remove the last query character
    Backspace,
    /// Move the suggestion highlight down
    NextSuggestion,
    /// Move the suggestion highlight up
    PrevSuggestion,
    /// Select the highlighted suggestion
    ActivateSelected,
    /// A suggestion was clicked or otherwise chosen by title
    SelectSuggestion(String),
    FocusEditor,
    FocusSearch,
    FocusSuggestions,
    /// Write the body buffer to the effective title
    Save,
    /// Hand the effective note to the external editor
    OpenInEditor,
    /// Back to an empty search
    Clear,
    ShowHelp,
    /// A key for the body buffer while the editor pane has focus
    Edit(KeyEvent),
    /// Repaint everything, e.g. after a resize
    Redraw,
    Quit,
}

impl SessionEvent {
    /// Returns true if this event changes the query and re-runs ranking.
    pub fn mutates_query(&self) -> bool {
        matches!(
            self,
            SessionEvent::TypeChar(_)
                | SessionEvent::Backspace
                | SessionEvent::SelectSuggestion(_)
                | SessionEvent::ActivateSelected
                | SessionEvent::Clear
        )
    }
}
