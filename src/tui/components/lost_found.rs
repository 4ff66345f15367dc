//! # Lost & Found Component
//!
//! Report form (title required, description optional) above the board list.
//!
//! Two focus zones: the form fields (editing) and the report list (browsing).
//! Esc leaves the form for the list; typing while browsing jumps back into
//! the title field, so a new report is never more than a keystroke away.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use uuid::Uuid;

use crate::core::model::LostFoundItem;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_field::InputField;
use crate::tui::event::TuiEvent;

/// Which part of the page receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LostFoundFocus {
    Title,
    Description,
    List,
}

/// Persistent state for the lost & found page.
pub struct LostFoundState {
    pub title: InputField,
    pub description: InputField,
    pub focus: LostFoundFocus,
    pub selected: usize,
    pub list_state: ListState,
}

impl LostFoundState {
    pub fn new() -> Self {
        Self {
            title: InputField::new("Item title (required)"),
            description: InputField::new("Description"),
            focus: LostFoundFocus::Title, // User expects to type immediately
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// True while one of the form fields has focus.
    pub fn is_editing(&self) -> bool {
        matches!(self.focus, LostFoundFocus::Title | LostFoundFocus::Description)
    }

    fn focused_field(&mut self) -> Option<&mut InputField> {
        match self.focus {
            LostFoundFocus::Title => Some(&mut self.title),
            LostFoundFocus::Description => Some(&mut self.description),
            LostFoundFocus::List => None,
        }
    }

    /// Handle a key event, returning a LostFoundEvent if the page should act.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        reports: &[LostFoundItem],
    ) -> Option<LostFoundEvent> {
        if self.is_editing() {
            match event {
                // Esc → drop to the list
                TuiEvent::Escape => {
                    self.focus = LostFoundFocus::List;
                    if !reports.is_empty() {
                        self.selected = self.selected.min(reports.len() - 1);
                        self.list_state.select(Some(self.selected));
                    }
                    None
                }
                // Tab cycles between the two fields
                TuiEvent::NextTab | TuiEvent::PrevTab => {
                    self.focus = match self.focus {
                        LostFoundFocus::Title => LostFoundFocus::Description,
                        _ => LostFoundFocus::Title,
                    };
                    None
                }
                // Enter submits from either field; an empty title never clears
                // the form (the reducer would drop it anyway)
                TuiEvent::Submit => {
                    if self.title.is_empty() {
                        return None;
                    }
                    let title = self.title.take();
                    let description = self.description.take();
                    self.focus = LostFoundFocus::Title;
                    Some(LostFoundEvent::Submit { title, description })
                }
                _ => {
                    self.focused_field()?.handle_event(event);
                    None
                }
            }
        } else {
            match event {
                TuiEvent::CursorUp => {
                    if reports.is_empty() {
                        self.focus = LostFoundFocus::Title;
                    } else {
                        self.selected = self.selected.saturating_sub(1);
                        self.list_state.select(Some(self.selected));
                    }
                    None
                }
                TuiEvent::CursorDown => {
                    if !reports.is_empty() {
                        self.selected = (self.selected + 1).min(reports.len() - 1);
                        self.list_state.select(Some(self.selected));
                    }
                    None
                }
                // Space toggles the selected report's claim flag
                TuiEvent::InputChar(' ') => reports
                    .get(self.selected)
                    .map(|item| LostFoundEvent::ToggleClaim(item.id)),
                // Typing auto-switches back to the title field
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                    self.focus = LostFoundFocus::Title;
                    self.title.handle_event(event);
                    None
                }
                TuiEvent::Submit => {
                    self.focus = LostFoundFocus::Title;
                    None
                }
                _ => None,
            }
        }
    }
}

/// Events emitted by the lost & found page.
pub enum LostFoundEvent {
    Submit { title: String, description: String },
    ToggleClaim(Uuid),
}

/// Transient render wrapper for the lost & found page.
pub struct LostFoundPage<'a> {
    state: &'a mut LostFoundState,
    reports: &'a [LostFoundItem],
}

impl<'a> LostFoundPage<'a> {
    pub fn new(state: &'a mut LostFoundState, reports: &'a [LostFoundItem]) -> Self {
        Self { state, reports }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, description_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        self.state.title.focused = self.state.focus == LostFoundFocus::Title;
        self.state.description.focused = self.state.focus == LostFoundFocus::Description;
        self.state.title.render(frame, title_area);
        self.state.description.render(frame, description_area);

        let browsing = self.state.focus == LostFoundFocus::List;
        let block = Block::bordered().title(" Reported Items ");

        if self.reports.is_empty() {
            let empty = Paragraph::new("No reports yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        let items: Vec<ListItem> = self
            .reports
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if item.claimed { "✓ " } else { "● " };
                let style = if browsing && i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if item.claimed {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let mut spans = vec![
                    Span::styled(marker, style),
                    Span::styled(item.title.clone(), style),
                ];
                if !item.description.is_empty() {
                    spans.push(Span::styled(
                        format!("  — {}", item.description),
                        style.add_modifier(Modifier::DIM),
                    ));
                }
                spans.push(Span::styled(
                    format!("  · {}", item.reported_at.format("%b %d %H:%M")),
                    style.add_modifier(Modifier::DIM),
                ));
                if item.claimed {
                    spans.push(Span::styled("  [claimed]", style));
                }

                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
