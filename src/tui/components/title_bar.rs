//! # TitleBar Component
//!
//! Top status bar showing the campus name and transient status messages.
//!
//! Purely presentational: all fields are props from core state, which keeps
//! it trivial to test. Construct, render, check the text.
//!
//! The text changes based on state:
//!
//! 1. **Feed offline**: `"Campus Hub — Northfield Campus | Report posted | ⚠ feed offline"`
//! 2. **Status message**: `"Campus Hub — Northfield Campus | Report posted"`
//! 3. **Default**: `"Campus Hub — Northfield Campus"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `campus_name`: display name from config
/// - `status_message`: transient status (e.g., "Report posted: Keys")
/// - `feed_live`: false once the queue feed channel has closed
pub struct TitleBar {
    pub campus_name: String,
    pub status_message: String,
    pub feed_live: bool,
}

impl TitleBar {
    pub fn new(campus_name: String, status_message: String, feed_live: bool) -> Self {
        Self {
            campus_name,
            status_message,
            feed_live,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if !self.feed_live {
            format!(
                "Campus Hub — {} | {} | ⚠ feed offline",
                self.campus_name, self.status_message
            )
        } else if self.status_message.is_empty() {
            format!("Campus Hub — {}", self.campus_name)
        } else {
            format!("Campus Hub — {} | {}", self.campus_name, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "Northfield Campus".to_string(),
            "Report posted: Keys".to_string(),
            true,
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Campus Hub"));
        assert!(text.contains("Northfield Campus"));
        assert!(text.contains("Report posted: Keys"));
        assert!(!text.contains("feed offline"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Northfield Campus".to_string(), String::new(), true);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Campus Hub"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_shows_feed_offline() {
        let mut title_bar = TitleBar::new(
            "Northfield Campus".to_string(),
            "Queue feed offline".to_string(),
            false,
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("feed offline"));
    }
}
