// Chunk: docs/chunks/input_types - Shared input types crate
//!
//! Input event types for keyboard and mouse handling.
//!
//! These types abstract over the terminal backend's event structs and provide
//! a small Rust-native vocabulary for the session core. Keeping them in their
//! own crate lets the core be driven from tests without a terminal.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a character with control held (e.g. Ctrl-D).
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }

    /// Creates a KeyEvent for a non-character key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Returns the character if this is an unmodified (or shift-only) printable key.
    pub fn printable(&self) -> Option<char> {
        match self.key {
            Key::Char(ch)
                if !ch.is_control() && (self.modifiers.is_empty() || self.modifiers.is_shift_only()) =>
            {
                Some(ch)
            }
            _ => None,
        }
    }
}

/// Modifier keys that can be held during a key event.
///
/// Terminals only report shift, alt and control reliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Alt / Meta key
    pub alt: bool,
    /// Control key
    pub control: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.alt && !self.control
    }

    /// Returns true if only shift is held (for uppercase letters).
    pub fn is_shift_only(&self) -> bool {
        self.shift && !self.alt && !self.control
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Tab key
    Tab,
    /// Shift-Tab as reported by most terminals
    BackTab,
    /// Escape key
    Escape,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
}

/// A mouse event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The type of mouse event
    pub kind: MouseEventKind,
    /// Zero-based terminal column
    pub column: u16,
    /// Zero-based terminal row
    pub row: u16,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, column: u16, row: u16) -> Self {
        Self { kind, column, row }
    }
}

/// Kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Left button pressed
    Down,
    /// Left button released
    Up,
    /// Mouse moved (with or without a button held)
    Moved,
}
