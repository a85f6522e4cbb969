// Chunk: docs/chunks/terminal_host - ratatui/crossterm presentation layer
//!
//! The terminal implementation of [`Host`].
//!
//! Layout, left to right:
//!
//! ```text
//! +-- search ---+ +-- main --------------------------+
//! | Search: ap  | | header (title, help, status)     |
//! +-------------+ | ................................ |
//! +-- list -----+ | note body                        |
//! | apple       | |                                  |
//! | apt         | | Noots  |  (?) help menu          |
//! +-------------+ +----------------------------------+
//! ```
//!
//! The host keeps a plain screen model that render calls update; [`draw`]
//! paints it. Raw crossterm events go through [`handle_terminal_event`], which
//! applies the keymap for the focused pane and hit-tests mouse clicks against
//! the suggestion list.
//!
//! [`draw`]: TerminalHost::draw
//! [`handle_terminal_event`]: TerminalHost::handle_terminal_event

use std::io::{self, Stdout};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use noots_input::{Key, KeyEvent, Modifiers, MouseEvent, MouseEventKind};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};
use unicode_width::UnicodeWidthStr;

use crate::focus::Pane;
use crate::help::FOOTER;
use crate::keymap::map_key;
use crate::render_intent::{ActivateFn, BodyView, Host, SuggestionView};
use crate::session_event::SessionEvent;

/// What is currently on screen, independent of the backend.
#[derive(Debug, Default)]
struct ScreenModel {
    header: String,
    search_line: String,
    body: BodyView,
    titles: Vec<String>,
    selected: usize,
}

pub struct TerminalHost<B: Backend> {
    terminal: Terminal<B>,
    screen: ScreenModel,
    focus: Pane,
    list_state: ListState,
    /// Inner area of the suggestion list as last drawn, for mouse hit-testing.
    list_area: Rect,
    /// Row under the last left-button press.
    pressed_row: Option<usize>,
    on_activate: ActivateFn,
    /// Whether this host put the real terminal into raw/alternate mode.
    owns_tty: bool,
}

impl TerminalHost<CrosstermBackend<Stdout>> {
    /// Takes over stdout: raw mode, alternate screen and mouse capture.
    pub fn stdout() -> io::Result<Self> {
        enter_tty()?;
        match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => Ok(Self::with_terminal(terminal, true)),
            Err(err) => {
                let _ = leave_tty();
                Err(err)
            }
        }
    }
}

impl<B: Backend> TerminalHost<B> {
    /// Creates a host over any backend. Suspend and resume leave the real
    /// terminal alone; this is what tests use with `TestBackend`.
    pub fn new(backend: B) -> io::Result<Self> {
        Ok(Self::with_terminal(Terminal::new(backend)?, false))
    }

    fn with_terminal(terminal: Terminal<B>, owns_tty: bool) -> Self {
        Self {
            terminal,
            screen: ScreenModel::default(),
            focus: Pane::default(),
            list_state: ListState::default(),
            list_area: Rect::default(),
            pressed_row: None,
            on_activate: SessionEvent::SelectSuggestion,
            owns_tty,
        }
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Hands the terminal back to the shell for good.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.owns_tty {
            self.owns_tty = false;
            self.terminal.show_cursor()?;
            leave_tty()?;
        }
        Ok(())
    }

    /// Paints the screen model.
    pub fn draw(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            screen,
            focus,
            list_state,
            list_area,
            ..
        } = self;
        terminal.draw(|frame| {
            *list_area = draw_screen(frame, screen, *focus, list_state);
        })?;
        Ok(())
    }

    /// Turns one raw terminal event into a session event, if it means one.
    pub fn handle_terminal_event(&mut self, event: Event) -> Option<SessionEvent> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                map_key(&translate_key(key)?, self.focus)
            }
            Event::Mouse(mouse) => self.handle_mouse(translate_mouse(mouse)?),
            Event::Resize(_, _) => Some(SessionEvent::Redraw),
            _ => None,
        }
    }

    /// Press highlights a row; release on the same row activates it.
    fn handle_mouse(&mut self, event: MouseEvent) -> Option<SessionEvent> {
        let row = self.row_at(event.column, event.row);
        match event.kind {
            MouseEventKind::Down => {
                self.pressed_row = row;
                if let Some(row) = row {
                    self.screen.selected = row;
                    self.list_state.select(Some(row));
                }
                None
            }
            MouseEventKind::Up => match (self.pressed_row.take(), row) {
                (Some(pressed), Some(released)) if pressed == released => self
                    .screen
                    .titles
                    .get(released)
                    .map(|title| (self.on_activate)(title.clone())),
                _ => None,
            },
            MouseEventKind::Moved => None,
        }
    }

    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        let inside = column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height);
        if !inside {
            return None;
        }
        let index = (row - area.y) as usize + self.list_state.offset();
        (index < self.screen.titles.len()).then_some(index)
    }
}

impl<B: Backend> Host for TerminalHost<B> {
    fn render_body(&mut self, body: &BodyView) {
        self.screen.body = body.clone();
    }

    fn render_header(&mut self, text: &str) {
        self.screen.header = text.to_string();
    }

    fn render_search_line(&mut self, text: &str) {
        self.screen.search_line = text.to_string();
    }

    fn render_suggestion_list(&mut self, list: &SuggestionView) {
        if list.titles != self.screen.titles {
            self.screen.titles = list.titles.clone();
            *self.list_state.offset_mut() = 0;
            self.pressed_row = None;
        }
        self.screen.selected = list.selected;
        let selected = (!list.titles.is_empty()).then_some(list.selected);
        self.list_state.select(selected);
        self.on_activate = list.on_activate;
    }

    fn focus(&self) -> Pane {
        self.focus
    }

    fn set_focus(&mut self, pane: Pane) {
        self.focus = pane;
    }

    fn suspend_terminal(&mut self) -> io::Result<()> {
        if self.owns_tty {
            self.terminal.show_cursor()?;
            leave_tty()?;
        }
        Ok(())
    }

    fn resume_terminal(&mut self) -> io::Result<()> {
        if self.owns_tty {
            enter_tty()?;
        }
        // Forget the previous frame so the next draw repaints every cell.
        self.terminal.clear()
    }
}

impl<B: Backend> Drop for TerminalHost<B> {
    fn drop(&mut self) {
        if self.owns_tty {
            let _ = leave_tty();
        }
    }
}

fn enter_tty() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
}

fn leave_tty() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

// =============================================================================
// Event translation
// =============================================================================

/// Converts a crossterm key event. Keys without a counterpart yield `None`.
pub fn translate_key(event: crossterm::event::KeyEvent) -> Option<KeyEvent> {
    let key = match event.code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Enter => Key::Return,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Esc => Key::Escape,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    };
    let modifiers = Modifiers {
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
        alt: event.modifiers.contains(KeyModifiers::ALT),
        control: event.modifiers.contains(KeyModifiers::CONTROL),
    };
    Some(KeyEvent::new(key, modifiers))
}

/// Converts a crossterm mouse event. Only the left button is tracked.
pub fn translate_mouse(event: crossterm::event::MouseEvent) -> Option<MouseEvent> {
    use crossterm::event::MouseEventKind as Kind;

    let kind = match event.kind {
        Kind::Down(MouseButton::Left) => MouseEventKind::Down,
        Kind::Up(MouseButton::Left) => MouseEventKind::Up,
        Kind::Moved | Kind::Drag(_) => MouseEventKind::Moved,
        _ => return None,
    };
    Some(MouseEvent::new(kind, event.column, event.row))
}

// =============================================================================
// Drawing
// =============================================================================

fn pane_block(focused: bool) -> Block<'static> {
    let style = if focused {
        Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::new()
    };
    Block::bordered().border_style(style)
}

/// First body line to show so the cursor line stays visible.
fn body_scroll(cursor_line: usize, height: u16) -> u16 {
    if height == 0 {
        return 0;
    }
    let scroll = cursor_line.saturating_sub(height as usize - 1);
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

/// Screen cell of the body cursor, if it falls inside `area`.
fn body_cursor(body: &BodyView, area: Rect, scroll: u16) -> Option<(u16, u16)> {
    let line = body.text.split('\n').nth(body.cursor.line).unwrap_or("");
    let prefix: String = line.chars().take(body.cursor.col).collect();
    let width = u16::try_from(prefix.width()).unwrap_or(u16::MAX);
    let row = u16::try_from(body.cursor.line).ok()?.checked_sub(scroll)?;
    if row >= area.height || area.width == 0 {
        return None;
    }
    let x = area.x.saturating_add(width).min(area.x + area.width - 1);
    Some((x, area.y + row))
}

/// Paints the whole screen. Returns the inner area of the suggestion list.
fn draw_screen(frame: &mut Frame, screen: &ScreenModel, focus: Pane, list_state: &mut ListState) -> Rect {
    let [left, right] =
        Layout::horizontal([Constraint::Ratio(2, 7), Constraint::Ratio(5, 7)]).areas(frame.area());
    let [search_area, list_outer] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(left);

    // Search line
    let search_block = pane_block(focus == Pane::Search);
    let search_inner = search_block.inner(search_area);
    frame.render_widget(
        Paragraph::new(screen.search_line.as_str()).block(search_block),
        search_area,
    );

    // Suggestions
    let list_block = pane_block(focus == Pane::Suggestions);
    let list_inner = list_block.inner(list_outer);
    let items: Vec<ListItem> = screen
        .titles
        .iter()
        .map(|title| ListItem::new(title.as_str()))
        .collect();
    let list = List::new(items)
        .block(list_block)
        .highlight_style(Style::new().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, list_outer, list_state);

    // Main box: header, divider, body, footer
    let main_block = pane_block(focus == Pane::Editor);
    let main_inner = main_block.inner(right);
    frame.render_widget(main_block, right);

    let header_height = u16::try_from(screen.header.lines().count().max(1)).unwrap_or(u16::MAX);
    let [header_area, divider_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(main_inner);

    frame.render_widget(Paragraph::new(screen.header.as_str()), header_area);
    frame.render_widget(
        Paragraph::new(".".repeat(divider_area.width as usize)),
        divider_area,
    );
    let scroll = body_scroll(screen.body.cursor.line, body_area.height);
    frame.render_widget(
        Paragraph::new(screen.body.text.as_str()).scroll((scroll, 0)),
        body_area,
    );
    frame.render_widget(Paragraph::new(FOOTER), footer_area);

    match focus {
        Pane::Search if search_inner.width > 0 => {
            let width = u16::try_from(screen.search_line.width()).unwrap_or(u16::MAX);
            let x = search_inner
                .x
                .saturating_add(width)
                .min(search_inner.x + search_inner.width - 1);
            frame.set_cursor_position((x, search_inner.y));
        }
        Pane::Editor => {
            if let Some(position) = body_cursor(&screen.body, body_area, scroll) {
                frame.set_cursor_position(position);
            }
        }
        _ => {}
    }

    list_inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent as TermKey, MouseEvent as TermMouse, MouseEventKind as TermKind};
    use noots_buffer::Position;
    use ratatui::backend::TestBackend;

    fn host() -> TerminalHost<TestBackend> {
        TerminalHost::new(TestBackend::new(70, 20)).unwrap()
    }

    fn screen_text(host: &TerminalHost<TestBackend>) -> String {
        let buffer = host.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()));
            }
            text.push('\n');
        }
        text
    }

    fn mouse(kind: TermKind, column: u16, row: u16) -> Event {
        Event::Mouse(TermMouse {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn with_titles(host: &mut TerminalHost<TestBackend>, titles: &[&str]) {
        let view = SuggestionView::new(titles.iter().map(|t| t.to_string()).collect(), 0);
        host.render_suggestion_list(&view);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    #[test]
    fn draws_all_regions() {
        let mut host = host();
        host.render_search_line("Search:  ap");
        host.render_header("apple");
        host.render_body(&BodyView {
            text: "red fruit".into(),
            cursor: Position::default(),
        });
        with_titles(&mut host, &["apple", "apt"]);
        host.draw().unwrap();

        let text = screen_text(&host);
        assert!(text.contains("Search:  ap"));
        assert!(text.contains("apple"));
        assert!(text.contains("apt"));
        assert!(text.contains("red fruit"));
        assert!(text.contains("....."));
        assert!(text.contains(FOOTER));
    }

    #[test]
    fn selected_suggestion_is_reversed() {
        let mut host = host();
        let view = SuggestionView::new(vec!["first".into(), "second".into()], 1);
        host.render_suggestion_list(&view);
        host.draw().unwrap();

        let buffer = host.backend().buffer();
        let list_area = host.list_area;
        let first = buffer.cell((list_area.x, list_area.y)).unwrap();
        let second = buffer.cell((list_area.x, list_area.y + 1)).unwrap();
        assert!(!first.modifier.contains(Modifier::REVERSED));
        assert!(second.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn search_focus_puts_cursor_after_query() {
        let mut host = host();
        host.render_search_line("Search:  ab");
        host.draw().unwrap();
        let cursor = host.terminal.get_cursor_position().unwrap();
        // border column + "Search:  ab"
        assert_eq!((cursor.x, cursor.y), (1 + 11, 1));
    }

    #[test]
    fn editor_cursor_counts_display_width() {
        let mut host = host();
        host.set_focus(Pane::Editor);
        host.render_header("note");
        host.render_body(&BodyView {
            text: "first\n漢字x".into(),
            cursor: Position::new(1, 2),
        });
        host.draw().unwrap();
        let before = host.terminal.get_cursor_position().unwrap();

        host.render_body(&BodyView {
            text: "first\n漢字x".into(),
            cursor: Position::new(1, 0),
        });
        host.draw().unwrap();
        let start = host.terminal.get_cursor_position().unwrap();

        assert_eq!(before.y, start.y);
        assert_eq!(before.x - start.x, 4);
    }

    #[test]
    fn body_scroll_keeps_cursor_line_visible() {
        assert_eq!(body_scroll(0, 5), 0);
        assert_eq!(body_scroll(4, 5), 0);
        assert_eq!(body_scroll(9, 5), 5);
        assert_eq!(body_scroll(3, 0), 0);
    }

    #[test]
    fn identical_list_keeps_scroll_offset() {
        let mut host = host();
        with_titles(&mut host, &["a", "b"]);
        *host.list_state.offset_mut() = 1;
        with_titles(&mut host, &["a", "b"]);
        assert_eq!(host.list_state.offset(), 1);
        with_titles(&mut host, &["c"]);
        assert_eq!(host.list_state.offset(), 0);
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    #[test]
    fn click_on_row_activates_that_title() {
        let mut host = host();
        with_titles(&mut host, &["apple", "apt"]);
        host.draw().unwrap();
        let area = host.list_area;

        let down = host.handle_terminal_event(mouse(
            TermKind::Down(MouseButton::Left),
            area.x,
            area.y + 1,
        ));
        assert_eq!(down, None);
        assert_eq!(host.screen.selected, 1);

        let up = host.handle_terminal_event(mouse(
            TermKind::Up(MouseButton::Left),
            area.x + 2,
            area.y + 1,
        ));
        assert_eq!(up, Some(SessionEvent::SelectSuggestion("apt".into())));
    }

    #[test]
    fn release_on_other_row_does_nothing() {
        let mut host = host();
        with_titles(&mut host, &["apple", "apt"]);
        host.draw().unwrap();
        let area = host.list_area;

        host.handle_terminal_event(mouse(TermKind::Down(MouseButton::Left), area.x, area.y));
        let up = host.handle_terminal_event(mouse(
            TermKind::Up(MouseButton::Left),
            area.x,
            area.y + 1,
        ));
        assert_eq!(up, None);
    }

    #[test]
    fn click_below_last_title_is_ignored() {
        let mut host = host();
        with_titles(&mut host, &["only"]);
        host.draw().unwrap();
        let area = host.list_area;

        host.handle_terminal_event(mouse(TermKind::Down(MouseButton::Left), area.x, area.y + 3));
        let up =
            host.handle_terminal_event(mouse(TermKind::Up(MouseButton::Left), area.x, area.y + 3));
        assert_eq!(up, None);
    }

    #[test]
    fn keys_follow_focus() {
        let mut host = host();
        let key = Event::Key(TermKey::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(
            host.handle_terminal_event(key.clone()),
            Some(SessionEvent::FocusEditor)
        );
        host.set_focus(Pane::Suggestions);
        assert_eq!(
            host.handle_terminal_event(key),
            Some(SessionEvent::PrevSuggestion)
        );
    }

    #[test]
    fn control_chord_translates() {
        let mut host = host();
        let key = Event::Key(TermKey::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(host.handle_terminal_event(key), Some(SessionEvent::Save));
    }

    #[test]
    fn resize_requests_redraw() {
        let mut host = host();
        assert_eq!(
            host.handle_terminal_event(Event::Resize(100, 40)),
            Some(SessionEvent::Redraw)
        );
    }

    #[test]
    fn translate_key_keeps_modifiers() {
        let event = translate_key(TermKey::new(
            KeyCode::Char('X'),
            KeyModifiers::SHIFT | KeyModifiers::ALT,
        ))
        .unwrap();
        assert_eq!(event.key, Key::Char('X'));
        assert!(event.modifiers.shift && event.modifiers.alt && !event.modifiers.control);
        assert_eq!(translate_key(TermKey::new(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn translate_mouse_ignores_other_buttons() {
        let right = TermMouse {
            kind: TermKind::Down(MouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(translate_mouse(right), None);
    }

    #[test]
    fn suspend_and_resume_are_noops_without_tty() {
        let mut host = host();
        host.suspend_terminal().unwrap();
        host.resume_terminal().unwrap();
        host.draw().unwrap();
    }
}
