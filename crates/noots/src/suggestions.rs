// Chunk: docs/chunks/suggestion_list - Ranked title list with a highlighted row
//!
//! The suggestion list model.
//!
//! [`SuggestionList`] holds the titles currently offered to the user and which
//! one is highlighted. It knows nothing about ranking or rendering: the
//! controller replaces its items after every re-rank and the host draws it.
//! The highlight is always clamped to the items so `selected_title` never
//! indexes out of bounds.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<String>,
    /// Always within `0..items.len()`, or 0 when empty.
    selected_index: usize,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the items.
    ///
    /// When the list actually changes the highlight goes back to the top (the
    /// best match); an identical list keeps it where the user left it.
    pub fn set_items(&mut self, items: Vec<String>) {
        if items != self.items {
            self.items = items;
            self.selected_index = 0;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Moves the highlight down, stopping at the last item.
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
        }
    }

    /// Moves the highlight up, stopping at the first item.
    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Highlights `title` if it is in the list. Returns whether it was found.
    pub fn select_title(&mut self, title: &str) -> bool {
        match self.items.iter().position(|item| item == title) {
            Some(index) => {
                self.selected_index = index;
                true
            }
            None => false,
        }
    }

    pub fn selected_title(&self) -> Option<&str> {
        self.items.get(self.selected_index).map(String::as_str)
    }
}
