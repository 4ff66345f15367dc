//! # Events Page Component
//!
//! Selectable list of the sample events with per-event check-in.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EventsPageState` lives in `TuiState`
//! - `EventsPage` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::model::Event;
use crate::tui::event::TuiEvent;

/// Persistent selection state for the events list.
pub struct EventsPageState {
    pub selected: usize,
    pub list_state: ListState,
}

impl EventsPageState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Handle a key event, returning an EventsPageEvent if the page should act.
    pub fn handle_event(&mut self, event: &TuiEvent, events: &[Event]) -> Option<EventsPageEvent> {
        if events.is_empty() {
            return None;
        }
        self.selected = self.selected.min(events.len() - 1);

        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(events.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::InputChar(' ') => Some(EventsPageEvent::ToggleCheckIn(events[self.selected].id)),
            TuiEvent::Submit => Some(EventsPageEvent::OpenDetail(events[self.selected].id)),
            _ => None,
        }
    }
}

/// Events emitted by the events page.
pub enum EventsPageEvent {
    ToggleCheckIn(u32),
    OpenDetail(u32),
}

/// Transient render wrapper for the events list.
pub struct EventsPage<'a> {
    state: &'a mut EventsPageState,
    events: &'a [Event],
}

impl<'a> EventsPage<'a> {
    pub fn new(state: &'a mut EventsPageState, events: &'a [Event]) -> Self {
        Self { state, events }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Campus Events ");

        if self.events.is_empty() {
            let empty = Paragraph::new("No events scheduled.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .events
            .iter()
            .enumerate()
            .map(|(i, event)| {
                let marker = if event.checked_in { "✓ " } else { "  " };
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if event.checked_in {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let line = Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(event.title.clone(), style),
                    Span::styled(
                        format!("  — {} · {}", event.place, event.starts_label()),
                        style.add_modifier(Modifier::DIM),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
