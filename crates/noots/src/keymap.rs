// Chunk: docs/chunks/keymap - Key bindings per focused pane
//!
//! Translates a key press into a [`SessionEvent`] given the focused pane.
//!
//! Control chords and Escape are global. Everything else depends on focus:
//! the search line and suggestion list both feed printable characters into the
//! query, while the editor pane passes every remaining key through as
//! [`SessionEvent::Edit`].

use noots_input::{Key, KeyEvent};

use crate::focus::Pane;
use crate::session_event::SessionEvent;

/// Returns the session event bound to `event` in `focus`, if any.
pub fn map_key(event: &KeyEvent, focus: Pane) -> Option<SessionEvent> {
    if let Some(global) = map_global(event) {
        return Some(global);
    }

    match focus {
        Pane::Editor => Some(SessionEvent::Edit(event.clone())),
        Pane::Search | Pane::Suggestions => {
            if event.printable() == Some('?') {
                return Some(SessionEvent::ShowHelp);
            }
            if let Some(ch) = event.printable() {
                return Some(SessionEvent::TypeChar(ch));
            }
            if !event.modifiers.is_empty() && !event.modifiers.is_shift_only() {
                return None;
            }
            match (focus, &event.key) {
                (_, Key::Backspace) => Some(SessionEvent::Backspace),
                (Pane::Search, Key::Up) => Some(SessionEvent::FocusEditor),
                (Pane::Search, Key::Down | Key::Tab) => Some(SessionEvent::FocusSuggestions),
                (Pane::Search, Key::Return) => Some(SessionEvent::FocusEditor),
                (Pane::Suggestions, Key::Up) => Some(SessionEvent::PrevSuggestion),
                (Pane::Suggestions, Key::Down) => Some(SessionEvent::NextSuggestion),
                (Pane::Suggestions, Key::Return) => Some(SessionEvent::ActivateSelected),
                (Pane::Suggestions, Key::Tab) => Some(SessionEvent::FocusEditor),
                (Pane::Suggestions, Key::BackTab) => Some(SessionEvent::FocusSearch),
                _ => None,
            }
        }
    }
}

fn map_global(event: &KeyEvent) -> Option<SessionEvent> {
    if event.key == Key::Escape {
        return Some(SessionEvent::Clear);
    }
    if !event.modifiers.control || event.modifiers.alt {
        return None;
    }
    match event.key {
        Key::Char('c') | Key::Char('q') => Some(SessionEvent::Quit),
        Key::Char('d') => Some(SessionEvent::Save),
        Key::Char('o') => Some(SessionEvent::OpenInEditor),
        Key::Char('e') => Some(SessionEvent::FocusEditor),
        Key::Char('p') => Some(SessionEvent::FocusSearch),
        Key::Char('l') => Some(SessionEvent::Redraw),
        _ => None,
    }
}
