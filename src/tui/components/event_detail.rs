//! # Event Detail Component
//!
//! Centered overlay pushed above the events list. Dismissed with Esc;
//! check-in can be toggled without leaving the view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::model::Event;
use crate::tui::component::Component;

pub struct EventDetail<'a> {
    pub event: &'a Event,
}

impl<'a> EventDetail<'a> {
    pub fn new(event: &'a Event) -> Self {
        Self { event }
    }
}

impl Component for EventDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Event ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Space Check-in  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let check_in = if self.event.checked_in {
            Span::styled("✓ Checked in", Style::default().fg(Color::Green))
        } else {
            Span::styled("Not checked in", Style::default().fg(Color::DarkGray))
        };

        let lines = vec![
            Line::from(Span::styled(
                self.event.title.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Where  ", Style::default().fg(Color::DarkGray)),
                Span::raw(self.event.place.clone()),
            ]),
            Line::from(vec![
                Span::styled("When   ", Style::default().fg(Color::DarkGray)),
                Span::raw(self.event.starts_at.format("%A %d %B, %H:%M").to_string()),
            ]),
            Line::from(check_in),
            Line::raw(""),
            Line::from(self.event.description.clone()),
        ];

        let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(detail, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
