//! # InputField Component
//!
//! Single-line text field used by the lost & found form and the route lookup.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `focused` is a prop the owning
//! page sets each frame; only the focused field shows the terminal cursor and
//! a highlighted border.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const BORDER_OFFSET: u16 = 1;

/// High-level events emitted by the InputField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Text content or cursor position changed
    Changed,
}

/// Single-line text input.
///
/// # Props
///
/// - `title`: block title shown on the border
/// - `focused`: whether this field currently receives input
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: byte offset into the buffer
/// - `scroll`: display columns scrolled off the left edge
pub struct InputField {
    buffer: String,
    cursor: usize,
    scroll: u16,
    pub title: String,
    pub focused: bool,
}

impl InputField {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll: 0,
            title: title.into(),
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Take the buffer contents, resetting the field.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.scroll = 0;
        std::mem::take(&mut self.buffer)
    }

    fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Display column of the cursor (unicode-aware).
    fn cursor_col(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// Keep the cursor inside the viewport, then return the visible slice.
    fn visible_text(&mut self, inner_width: u16) -> String {
        if inner_width == 0 {
            return String::new();
        }
        let col = self.cursor_col();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + inner_width {
            self.scroll = col - inner_width + 1;
        }

        // Skip `scroll` display columns, then take what fits.
        let mut skipped = 0u16;
        let mut taken = 0u16;
        let mut out = String::new();
        for c in self.buffer.chars() {
            let w = c.width().unwrap_or(0) as u16;
            if skipped < self.scroll {
                skipped += w;
                continue;
            }
            if taken + w > inner_width {
                break;
            }
            taken += w;
            out.push(c);
        }
        out
    }
}

impl Component for InputField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let inner_width = area.width.saturating_sub(2 * BORDER_OFFSET);
        let visible = self.visible_text(inner_width);

        let block = Block::bordered()
            .border_style(border_style)
            .title(self.title.as_str());
        let field = Paragraph::new(visible).block(block);
        frame.render_widget(field, area);

        if self.focused && inner_width > 0 {
            let cursor_x =
                area.x + BORDER_OFFSET + self.cursor_col().saturating_sub(self.scroll);
            frame.set_cursor_position((cursor_x, area.y + BORDER_OFFSET));
        }
    }
}

impl EventHandler for InputField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.insert_char(*c);
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: flatten pasted newlines to spaces.
                for c in text.chars() {
                    self.insert_char(if c == '\n' || c == '\r' { ' ' } else { c });
                }
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldEvent::Changed
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FieldEvent::Changed
            }),
            _ => None,
        }
    }
}

/// Byte offset of the previous char boundary before `pos`.
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().last().map(|(i, _)| i).unwrap_or(0)
}

/// Byte offset of the next char boundary after `pos`.
fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or_else(|| s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_and_backspace() {
        let mut field = InputField::new("Title");

        let res = field.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(FieldEvent::Changed));
        assert_eq!(field.value(), "a");

        field.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(field.value(), "ab");

        field.handle_event(&TuiEvent::Backspace);
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn test_backspace_on_empty_is_ignored() {
        let mut field = InputField::new("Title");
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut field = InputField::new("Title");
        for c in "water".chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
        field.handle_event(&TuiEvent::CursorHome);
        field.handle_event(&TuiEvent::CursorRight);
        field.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(field.value(), "w!ater");

        field.handle_event(&TuiEvent::CursorEnd);
        field.handle_event(&TuiEvent::Delete);
        assert_eq!(field.value(), "w!ater");
    }

    #[test]
    fn test_multibyte_boundaries() {
        let mut field = InputField::new("Title");
        field.handle_event(&TuiEvent::InputChar('é'));
        field.handle_event(&TuiEvent::InputChar('列'));
        assert_eq!(field.value(), "é列");

        field.handle_event(&TuiEvent::Backspace);
        assert_eq!(field.value(), "é");
        field.handle_event(&TuiEvent::Backspace);
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut field = InputField::new("Title");
        field.handle_event(&TuiEvent::Paste("red\nscarf".to_string()));
        assert_eq!(field.value(), "red scarf");
    }

    #[test]
    fn test_take_resets_field() {
        let mut field = InputField::new("Title");
        field.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(field.take(), "x");
        assert!(field.value().is_empty());
        assert!(field.is_empty());
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut field = InputField::new("Title");
        assert_eq!(field.handle_event(&TuiEvent::InputChar('\n')), None);
        assert!(field.value().is_empty());
    }

    #[test]
    fn test_render_shows_title() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut field = InputField::new("Report title");
        field.focused = true;
        field.handle_event(&TuiEvent::InputChar('k'));

        terminal
            .draw(|f| {
                field.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Report title"));
        assert!(text.contains('k'));
    }
}
