//! # QueueBoard Component
//!
//! Renders the latest cafeteria queue snapshot: one row per cafeteria with a
//! load bar and the waiting count, plus a freshness line underneath.
//! Stateless: the snapshot and feed liveness are props from core state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::feed::{QueueSnapshot, QUEUE_MAX};
use crate::tui::component::Component;

/// Width reserved for the cafeteria name column.
const NAME_COLUMN: usize = 22;

pub struct QueueBoard<'a> {
    pub snapshot: Option<&'a QueueSnapshot>,
    pub feed_live: bool,
}

impl<'a> QueueBoard<'a> {
    pub fn new(snapshot: Option<&'a QueueSnapshot>, feed_live: bool) -> Self {
        Self {
            snapshot,
            feed_live,
        }
    }
}

/// Color a waiting count by load.
fn load_style(waiting: u8) -> Style {
    match waiting {
        0..=8 => Style::default().fg(Color::Green),
        9..=16 => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Red),
    }
}

impl Component for QueueBoard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Cafeteria Queues ");

        let Some(snapshot) = self.snapshot else {
            let waiting = Paragraph::new("Waiting for the first queue update...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(waiting, area);
            return;
        };

        let mut lines: Vec<Line> = snapshot
            .queues
            .iter()
            .map(|queue| {
                let style = load_style(queue.waiting);
                let bar = "█".repeat(queue.waiting as usize);
                let headroom = " ".repeat((QUEUE_MAX - queue.waiting) as usize);
                Line::from(vec![
                    Span::raw(format!("{:<NAME_COLUMN$}", queue.name)),
                    Span::styled(bar, style),
                    Span::raw(headroom),
                    Span::styled(format!(" {:>2} waiting", queue.waiting), style),
                ])
            })
            .collect();

        lines.push(Line::raw(""));
        let freshness = if self.feed_live {
            Span::styled(
                format!("updated {}", snapshot.taken_at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::styled(
                format!(
                    "feed offline — last update {}",
                    snapshot.taken_at.format("%H:%M:%S")
                ),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(freshness));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
