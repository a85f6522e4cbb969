// Chunk: docs/chunks/session_controller - Keystroke-driven session state machine
//!
//! The session controller.
//!
//! [`SessionController::handle`] takes one [`SessionEvent`], mutates the
//! [`SessionState`], and returns the [`RenderIntent`] describing what changed.
//! Events are processed to completion one at a time; the only blocking step
//! is waiting for the external editor.
//!
//! Every query change goes through the same update pipeline:
//!
//! 1. normalize the query (trim, whitespace to `_`)
//! 2. rank the title cache against it
//! 3. take the first ranked title as the match (none for an empty query)
//! 4. load the match's body, or show an empty body for a new note
//! 5. publish the ranking to the suggestion list, unless the list was the
//!    source of the change
//!
//! `handle` is infallible. A failed read leaves the body as it was; a failed
//! save or editor launch is reported in the header.

use noots_input::{Key, KeyEvent};

use crate::config::Config;
use crate::external_editor::{EditorLauncher, ShellEditor};
use crate::focus::Pane;
use crate::help::help_text;
use crate::match_engine;
use crate::note_store::{NoteStore, NOTE_EXTENSION};
use crate::render_intent::{Host, RenderIntent};
use crate::session_event::SessionEvent;
use crate::session_state::SessionState;

/// Spaces inserted for Tab in the body.
const TAB_WIDTH: usize = 4;

pub struct SessionController<L = ShellEditor> {
    state: SessionState,
    store: NoteStore,
    /// Titles on disk as of the last refresh.
    titles: Vec<String>,
    launcher: L,
}

impl SessionController<ShellEditor> {
    /// Creates a controller that opens notes with the configured editor.
    pub fn new(config: &Config) -> Self {
        Self::with_launcher(config, ShellEditor::new(config.editor.as_str()))
    }
}

impl<L: EditorLauncher> SessionController<L> {
    pub fn with_launcher(config: &Config, launcher: L) -> Self {
        Self {
            state: SessionState::new(),
            store: NoteStore::new(config.note_path.as_path()),
            titles: Vec::new(),
            launcher,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// The title cache.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Loads the title cache and returns the initial screen.
    pub fn startup(&mut self) -> RenderIntent {
        self.refresh_titles();
        self.run_pipeline(true);
        self.snapshot()
    }

    /// Everything currently on screen, for a full repaint.
    pub fn snapshot(&self) -> RenderIntent {
        RenderIntent {
            body: Some(self.state.body_view()),
            header: Some(self.state.header().to_string()),
            search_line: Some(self.state.search_line()),
            suggestions: Some(self.state.suggestion_view()),
            focus: Some(self.state.focus()),
            quit: false,
        }
    }

    /// Processes one event. `host` is only used to hand the terminal over
    /// while the external editor runs.
    pub fn handle(&mut self, event: SessionEvent, host: &mut dyn Host) -> RenderIntent {
        tracing::trace!(?event, "session event");
        let mutates_query = event.mutates_query();

        let intent = match event {
            SessionEvent::TypeChar(ch) => {
                self.state.push_char(ch);
                self.state.set_focus(Pane::Search);
                let mut intent = self.update(true);
                intent.focus = Some(Pane::Search);
                intent
            }
            SessionEvent::Backspace => {
                if !self.state.pop_char() {
                    return RenderIntent::none();
                }
                self.update(true)
            }
            SessionEvent::NextSuggestion => {
                self.state.suggestions_mut().select_next();
                self.suggestions_intent()
            }
            SessionEvent::PrevSuggestion => {
                self.state.suggestions_mut().select_prev();
                self.suggestions_intent()
            }
            SessionEvent::ActivateSelected => {
                let selected = self.state.suggestions().selected_title().map(str::to_string);
                match selected {
                    Some(title) => self.select(&title),
                    None => RenderIntent::none(),
                }
            }
            SessionEvent::SelectSuggestion(title) => self.select(&title),
            SessionEvent::FocusEditor => self.focus(Pane::Editor),
            SessionEvent::FocusSearch => self.focus(Pane::Search),
            SessionEvent::FocusSuggestions => self.focus(Pane::Suggestions),
            SessionEvent::Save => self.save(),
            SessionEvent::OpenInEditor => self.open_in_editor(host),
            SessionEvent::Clear => self.clear(),
            SessionEvent::ShowHelp => {
                self.state.set_header(help_text());
                self.header_intent()
            }
            SessionEvent::Edit(key) => self.edit(&key),
            SessionEvent::Redraw => self.snapshot(),
            SessionEvent::Quit => RenderIntent {
                quit: true,
                ..Default::default()
            },
        };

        if mutates_query {
            tracing::debug!(
                query = %self.state.raw_query(),
                matches = self.state.ranked_titles().len(),
                matched = %self.state.matched_title(),
                "re-ranked"
            );
        }
        intent
    }

    // ==================== Update pipeline ====================

    fn refresh_titles(&mut self) {
        self.titles = self.store.list_titles();
        tracing::debug!(count = self.titles.len(), "title cache refreshed");
    }

    /// Re-ranks and reloads the body. Returns whether the body changed.
    fn run_pipeline(&mut self, rebuild_list: bool) -> bool {
        // A query spelling out a listed title is matched as is.
        let raw = self.state.raw_query();
        let search = if self.titles.contains(&raw) {
            raw
        } else {
            self.state.search_string()
        };
        let ranked = match_engine::rank(&search, &self.titles);
        self.state.set_ranking(ranked, search.is_empty());
        let matched = self.state.matched_title().to_string();

        let body_changed = if search.is_empty() {
            self.state.set_header(help_text());
            self.state.load_body("")
        } else if matched.is_empty() {
            self.state.set_header(format!("(New): {search}.{NOTE_EXTENSION}"));
            self.state.load_body("")
        } else {
            self.state.set_header(matched.as_str());
            match self.store.read(&matched) {
                Ok(body) => self.state.load_body(&body),
                Err(err) => {
                    tracing::debug!(title = %matched, %err, "note body unavailable");
                    false
                }
            }
        };

        if rebuild_list {
            self.state.publish_ranking();
        }
        body_changed
    }

    fn update(&mut self, rebuild_list: bool) -> RenderIntent {
        let body_changed = self.run_pipeline(rebuild_list);
        RenderIntent {
            body: body_changed.then(|| self.state.body_view()),
            header: Some(self.state.header().to_string()),
            search_line: Some(self.state.search_line()),
            suggestions: rebuild_list.then(|| self.state.suggestion_view()),
            ..Default::default()
        }
    }

    // ==================== Event handlers ====================

    /// Makes `title` the query without rebuilding the list it came from.
    fn select(&mut self, title: &str) -> RenderIntent {
        self.state.set_query(title);
        let mut intent = self.update(false);
        if self.state.suggestions_mut().select_title(title) {
            intent.suggestions = Some(self.state.suggestion_view());
        }
        intent
    }

    fn focus(&mut self, pane: Pane) -> RenderIntent {
        self.state.set_focus(pane);
        RenderIntent {
            focus: Some(pane),
            ..Default::default()
        }
    }

    fn save(&mut self) -> RenderIntent {
        let title = self.state.effective_title();
        if title.is_empty() {
            self.state.set_header("Type a title first");
            return self.header_intent();
        }

        let body = self.state.body_text();
        let written = if self.state.matched_title().is_empty() {
            self.store.write(&title, &body)
        } else {
            self.store.overwrite(&title, &body)
        };
        match written {
            Ok(path) => {
                tracing::info!(path = %path.display(), "note saved");
                self.refresh_titles();
                let intent = self.update(true);
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.state.set_header(format!("Saved: {file_name}"));
                intent.merge(self.header_intent())
            }
            Err(err) => {
                tracing::warn!(%title, %err, "save failed");
                self.state.set_header(format!("Save failed: {err}"));
                self.header_intent()
            }
        }
    }

    fn open_in_editor(&mut self, host: &mut dyn Host) -> RenderIntent {
        let title = self.state.effective_title();
        if title.is_empty() {
            self.state.set_header("Type a title first");
            return self.header_intent();
        }
        let path = match self.store.note_path(&title) {
            Ok(path) => path,
            Err(err) => {
                self.state.set_header(format!("Editor failed: {err}"));
                return self.header_intent();
            }
        };

        if let Err(err) = host.suspend_terminal() {
            tracing::warn!(%err, "failed to release terminal");
        }
        let launched = self.launcher.launch(&path);
        if let Err(err) = host.resume_terminal() {
            tracing::error!(%err, "failed to reacquire terminal");
        }

        // The editor may have created or changed the note.
        self.refresh_titles();
        self.run_pipeline(true);
        if let Err(err) = launched {
            tracing::warn!(%err, "external editor failed");
            self.state.set_header(format!("Editor failed: {err}"));
        }
        self.snapshot()
    }

    fn clear(&mut self) -> RenderIntent {
        self.state.clear_query();
        self.state.set_focus(Pane::Search);
        self.run_pipeline(true);
        self.state.suggestions_mut().select_first();
        self.snapshot()
    }

    fn edit(&mut self, key: &KeyEvent) -> RenderIntent {
        let buffer = self.state.buffer_mut();
        let cursor_before = buffer.cursor_position();
        let plain = !key.modifiers.control && !key.modifiers.alt;

        let changed = if let Some(ch) = key.printable() {
            buffer.insert_char(ch)
        } else if !plain {
            false
        } else {
            match key.key {
                Key::Return => buffer.insert_newline(),
                Key::Tab => buffer.insert_str(&" ".repeat(TAB_WIDTH)),
                Key::Backspace => buffer.delete_backward(),
                Key::Delete => buffer.delete_forward(),
                Key::Left => {
                    buffer.move_left();
                    false
                }
                Key::Right => {
                    buffer.move_right();
                    false
                }
                Key::Up => {
                    buffer.move_up();
                    false
                }
                Key::Down => {
                    buffer.move_down();
                    false
                }
                Key::Home => {
                    buffer.move_to_line_start();
                    false
                }
                Key::End => {
                    buffer.move_to_line_end();
                    false
                }
                _ => false,
            }
        };

        if changed || buffer.cursor_position() != cursor_before {
            RenderIntent {
                body: Some(self.state.body_view()),
                ..Default::default()
            }
        } else {
            RenderIntent::none()
        }
    }

    fn header_intent(&self) -> RenderIntent {
        RenderIntent {
            header: Some(self.state.header().to_string()),
            ..Default::default()
        }
    }

    fn suggestions_intent(&self) -> RenderIntent {
        RenderIntent {
            suggestions: Some(self.state.suggestion_view()),
            ..Default::default()
        }
    }
}
