//! # Navigation Page Component
//!
//! From/To fields over the computed route steps. Same focus model as the
//! lost & found page: Esc drops out of the form, typing jumps back in.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::route::RoutePlan;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_field::InputField;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavFocus {
    From,
    To,
    Steps,
}

/// Persistent state for the navigation page.
pub struct NavPageState {
    pub from: InputField,
    pub to: InputField,
    pub focus: NavFocus,
}

impl NavPageState {
    pub fn new() -> Self {
        Self {
            from: InputField::new("From"),
            to: InputField::new("To"),
            focus: NavFocus::From,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.focus, NavFocus::From | NavFocus::To)
    }

    /// Handle a key event, returning a NavPageEvent if the page should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<NavPageEvent> {
        if self.is_editing() {
            match event {
                TuiEvent::Escape => {
                    self.focus = NavFocus::Steps;
                    None
                }
                TuiEvent::NextTab | TuiEvent::PrevTab => {
                    self.focus = match self.focus {
                        NavFocus::From => NavFocus::To,
                        _ => NavFocus::From,
                    };
                    None
                }
                // Enter asks for a route; the reducer ignores empty endpoints.
                // Fields are kept so the user can tweak and re-plan.
                TuiEvent::Submit => Some(NavPageEvent::PlanRoute {
                    from: self.from.value().to_string(),
                    to: self.to.value().to_string(),
                }),
                _ => {
                    let field = match self.focus {
                        NavFocus::From => &mut self.from,
                        _ => &mut self.to,
                    };
                    field.handle_event(event);
                    None
                }
            }
        } else {
            match event {
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                    self.focus = NavFocus::From;
                    self.from.handle_event(event);
                    None
                }
                TuiEvent::Submit | TuiEvent::CursorUp => {
                    self.focus = NavFocus::From;
                    None
                }
                _ => None,
            }
        }
    }
}

/// Events emitted by the navigation page.
pub enum NavPageEvent {
    PlanRoute { from: String, to: String },
}

/// Transient render wrapper for the navigation page.
pub struct NavPage<'a> {
    state: &'a mut NavPageState,
    route: Option<&'a RoutePlan>,
}

impl<'a> NavPage<'a> {
    pub fn new(state: &'a mut NavPageState, route: Option<&'a RoutePlan>) -> Self {
        Self { state, route }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [from_area, to_area, steps_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        self.state.from.focused = self.state.focus == NavFocus::From;
        self.state.to.focused = self.state.focus == NavFocus::To;
        self.state.from.render(frame, from_area);
        self.state.to.render(frame, to_area);

        let block = Block::bordered().title(" Route ");

        let Some(plan) = self.route else {
            let hint = Paragraph::new("Enter a start and a destination, then press Enter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, steps_area);
            return;
        };

        let mut lines = vec![Line::from(Span::styled(
            format!("{} → {}", plan.from, plan.to),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::raw(""));
        for (i, step) in plan.steps.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(step.clone()),
            ]));
        }

        let steps = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(steps, steps_area);
    }
}
