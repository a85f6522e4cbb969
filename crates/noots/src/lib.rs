// Chunk: docs/chunks/subsequence_ranking - Title ranking by shortest subsequence span
// Chunk: docs/chunks/session_controller - Keystroke-driven session state machine
//!
//! noots: a keystroke-driven fuzzy finder for plain text notes.
//!
//! Every keystroke re-ranks the note titles against the typed query and shows
//! the best match's body. The crate is split along the data flow:
//!
//! - [`match_engine`] ranks titles by shortest subsequence span
//! - [`note_store`] lists, reads and writes `.noot` files
//! - [`session_state`] holds the query, ranking, body and focus
//! - [`controller`] applies [`SessionEvent`]s and returns [`RenderIntent`]s
//! - [`terminal_host`] draws render intents with ratatui and turns crossterm
//!   input back into session events
//!
//! The session core never touches the terminal, so it can be driven from
//! tests with a recording [`Host`].

pub mod config;
pub mod controller;
pub mod external_editor;
pub mod focus;
pub mod help;
pub mod keymap;
pub mod logging;
pub mod match_engine;
pub mod note_store;
pub mod render_intent;
pub mod session_event;
pub mod session_state;
mod shell_escape;
pub mod suggestions;
pub mod terminal_host;

pub use config::{Config, ConfigError};
pub use controller::SessionController;
pub use external_editor::{EditorLauncher, LaunchError, ShellEditor};
pub use focus::Pane;
pub use match_engine::{rank, MatchResult};
pub use note_store::{NoteError, NoteStore};
pub use render_intent::{BodyView, Host, RenderIntent, SuggestionView};
pub use session_event::SessionEvent;
pub use session_state::SessionState;
pub use terminal_host::TerminalHost;
