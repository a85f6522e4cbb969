// Chunk: docs/chunks/render_intents - What the host should draw after an event
//!
//! Render intents and the presentation host interface.
//!
//! The controller never draws. After each event it returns a [`RenderIntent`]
//! listing only the parts of the screen that changed; [`RenderIntent::apply`]
//! forwards those parts to a [`Host`]. The terminal host is one implementation;
//! tests use a recording host.

use std::io;

use noots_buffer::Position;

use crate::focus::Pane;
use crate::session_event::SessionEvent;

/// The note body and the cursor inside it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BodyView {
    pub text: String,
    pub cursor: Position,
}

/// Callback the host invokes when the user activates a suggestion row.
pub type ActivateFn = fn(String) -> SessionEvent;

/// The ordered suggestion titles plus the highlighted row.
#[derive(Debug, Clone)]
pub struct SuggestionView {
    pub titles: Vec<String>,
    pub selected: usize,
    /// Turns the activated title back into an event for the controller.
    pub on_activate: ActivateFn,
}

impl SuggestionView {
    pub fn new(titles: Vec<String>, selected: usize) -> Self {
        Self {
            titles,
            selected,
            on_activate: SessionEvent::SelectSuggestion,
        }
    }

    /// Event for activating `title`.
    pub fn activate(&self, title: &str) -> SessionEvent {
        (self.on_activate)(title.to_string())
    }
}

/// Display updates produced by one controller step. `None` means unchanged.
#[derive(Debug, Clone, Default)]
pub struct RenderIntent {
    pub body: Option<BodyView>,
    pub header: Option<String>,
    pub search_line: Option<String>,
    pub suggestions: Option<SuggestionView>,
    pub focus: Option<Pane>,
    /// The session is over; the host loop should stop.
    pub quit: bool,
}

impl RenderIntent {
    /// An intent that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_none()
            && self.header.is_none()
            && self.search_line.is_none()
            && self.suggestions.is_none()
            && self.focus.is_none()
            && !self.quit
    }

    /// Folds `later` into `self`; fields set in `later` win.
    pub fn merge(mut self, later: RenderIntent) -> Self {
        if later.body.is_some() {
            self.body = later.body;
        }
        if later.header.is_some() {
            self.header = later.header;
        }
        if later.search_line.is_some() {
            self.search_line = later.search_line;
        }
        if later.suggestions.is_some() {
            self.suggestions = later.suggestions;
        }
        if later.focus.is_some() {
            self.focus = later.focus;
        }
        self.quit |= later.quit;
        self
    }

    /// Sends every changed part to `host`.
    pub fn apply(&self, host: &mut dyn Host) {
        if let Some(body) = &self.body {
            host.render_body(body);
        }
        if let Some(header) = &self.header {
            host.render_header(header);
        }
        if let Some(line) = &self.search_line {
            host.render_search_line(line);
        }
        if let Some(suggestions) = &self.suggestions {
            host.render_suggestion_list(suggestions);
        }
        if let Some(pane) = self.focus {
            if host.focus() != pane {
                host.set_focus(pane);
            }
        }
    }
}

/// The presentation layer as seen from the session core.
///
/// Input flows the other way: the host turns raw terminal input into
/// [`SessionEvent`]s and feeds them to the controller.
pub trait Host {
    fn render_body(&mut self, body: &BodyView);

    fn render_header(&mut self, text: &str);

    fn render_search_line(&mut self, text: &str);

    /// Shows `list`; activating a row must yield `list.activate(title)`.
    fn render_suggestion_list(&mut self, list: &SuggestionView);

    fn focus(&self) -> Pane;

    fn set_focus(&mut self, pane: Pane);

    /// Gives the terminal back to the shell while an external program runs.
    fn suspend_terminal(&mut self) -> io::Result<()>;

    /// Takes the terminal back and repaints from scratch.
    fn resume_terminal(&mut self) -> io::Result<()>;
}
