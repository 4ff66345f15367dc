//! # Home Page Component
//!
//! Welcome header plus the live queue board.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::feed::QueueSnapshot;
use crate::tui::component::Component;
use crate::tui::components::queue_board::QueueBoard;

pub struct HomePage<'a> {
    pub campus_name: &'a str,
    pub snapshot: Option<&'a QueueSnapshot>,
    pub feed_live: bool,
}

impl<'a> HomePage<'a> {
    pub fn new(campus_name: &'a str, snapshot: Option<&'a QueueSnapshot>, feed_live: bool) -> Self {
        Self {
            campus_name,
            snapshot,
            feed_live,
        }
    }
}

impl Component for HomePage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, board_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let header = vec![
            Line::from(Span::styled(
                format!("Welcome to {}", self.campus_name),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                Local::now().format("%A, %d %B").to_string(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                "Check a queue before you go, browse events, or report a lost item.",
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(header).alignment(Alignment::Center),
            header_area,
        );

        QueueBoard::new(self.snapshot, self.feed_live).render(frame, board_area);
    }
}
