//! Page tabs. Stateless: the selected page is a prop from core state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::core::state::Page;
use crate::tui::component::Component;

pub struct TabBar {
    pub selected: Page,
}

impl TabBar {
    pub fn new(selected: Page) -> Self {
        Self { selected }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Page::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| format!("{} {}", i + 1, page.title()));

        let tabs = Tabs::new(titles)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|")
            .select(self.selected.index());

        frame.render_widget(tabs, area);
    }
}
