// Chunk: docs/chunks/session_controller - Keystroke-driven session state machine
//!
//! The single mutable state of a running session.
//!
//! Read access is public so hosts and tests can inspect it. Mutation is
//! crate-private; only the controller changes the session.

use noots_buffer::TextBuffer;

use crate::focus::Pane;
use crate::note_store::normalize_title;
use crate::render_intent::{BodyView, SuggestionView};
use crate::suggestions::SuggestionList;

#[derive(Debug, Default)]
pub struct SessionState {
    query_chars: Vec<char>,
    ranked_titles: Vec<String>,
    matched_title: String,
    buffer: TextBuffer,
    focus: Pane,
    header: String,
    suggestions: SuggestionList,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    pub fn query_chars(&self) -> &[char] {
        &self.query_chars
    }

    /// The query as typed, trimmed. This is what the search line shows.
    pub fn raw_query(&self) -> String {
        let query: String = self.query_chars.iter().collect();
        query.trim().to_string()
    }

    /// The query with whitespace turned into underscores, used for matching.
    pub fn search_string(&self) -> String {
        normalize_title(&self.raw_query())
    }

    pub fn ranked_titles(&self) -> &[String] {
        &self.ranked_titles
    }

    /// Best-ranked title, or empty when nothing matched or the query is empty.
    pub fn matched_title(&self) -> &str {
        &self.matched_title
    }

    /// Title a save or external edit applies to: the match, else the query.
    pub fn effective_title(&self) -> String {
        if self.matched_title.is_empty() {
            self.search_string()
        } else {
            self.matched_title.clone()
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn body_text(&self) -> String {
        self.buffer.content()
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn search_line(&self) -> String {
        format!("Search:  {}", self.raw_query())
    }

    pub fn body_view(&self) -> BodyView {
        BodyView {
            text: self.buffer.content(),
            cursor: self.buffer.cursor_position(),
        }
    }

    pub fn suggestion_view(&self) -> SuggestionView {
        SuggestionView::new(
            self.suggestions.items().to_vec(),
            self.suggestions.selected_index(),
        )
    }

    // ==================== Mutations ====================

    pub(crate) fn push_char(&mut self, ch: char) {
        self.query_chars.push(ch);
    }

    /// Returns false when the query was already empty.
    pub(crate) fn pop_char(&mut self) -> bool {
        self.query_chars.pop().is_some()
    }

    pub(crate) fn set_query(&mut self, text: &str) {
        self.query_chars = text.chars().collect();
    }

    pub(crate) fn clear_query(&mut self) {
        self.query_chars.clear();
    }

    /// Stores a fresh ranking; the first title becomes the match.
    ///
    /// With `keep_match_empty` the match stays empty even if titles came back,
    /// which is how an empty query lists everything without selecting a note.
    pub(crate) fn set_ranking(&mut self, ranked: Vec<String>, keep_match_empty: bool) {
        self.matched_title = match ranked.first() {
            Some(first) if !keep_match_empty => first.clone(),
            _ => String::new(),
        };
        self.ranked_titles = ranked;
    }

    /// Replaces the displayed list with the current ranking.
    pub(crate) fn publish_ranking(&mut self) {
        self.suggestions.set_items(self.ranked_titles.clone());
    }

    pub(crate) fn suggestions_mut(&mut self) -> &mut SuggestionList {
        &mut self.suggestions
    }

    /// Loads `text` as the body. Returns false if the buffer already held it,
    /// in which case the buffer and its cursor are left alone.
    pub(crate) fn load_body(&mut self, text: &str) -> bool {
        if self.buffer.content() == text {
            return false;
        }
        self.buffer = TextBuffer::from_str(text);
        true
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub(crate) fn set_focus(&mut self, pane: Pane) {
        self.focus = pane;
    }

    pub(crate) fn set_header(&mut self, text: impl Into<String>) {
        self.header = text.into();
    }
}
