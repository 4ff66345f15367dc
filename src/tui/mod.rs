//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! The loop polls the terminal, routes events through the page that owns the
//! current focus, and maps the page's high-level events onto core actions.
//! Queue snapshots arrive on a separate path: the feed task publishes on a
//! broadcast channel, and a forwarder task relays each snapshot into the
//! loop's mpsc action channel, so all mutation still happens in `update()`
//! on the UI thread.
//!
//! ## Redraw Strategy
//!
//! Frames are drawn only when something happened: an input event, a forwarded
//! action, or a resize. Otherwise the loop sleeps in `poll_event_timeout`.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::broadcast;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{DEFAULT_BASELINE, ResolvedConfig};
use crate::core::state::{App, Page};
use crate::feed::{CafeteriaQueue, QueueFeed, QueueSnapshot};
use crate::tui::components::{
    EventsPageEvent, EventsPageState, LostFoundEvent, LostFoundState, NavPageEvent, NavPageState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long the loop sleeps waiting for input before checking the action
/// channel again.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub lost_found: LostFoundState,
    pub nav: NavPageState,
    pub events: EventsPageState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            lost_found: LostFoundState::new(),
            nav: NavPageState::new(),
            events: EventsPageState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for the input fields
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let cafeterias: Vec<CafeteriaQueue> = config
        .cafeterias
        .iter()
        .map(|entry| {
            CafeteriaQueue::new(entry.name.clone(), entry.baseline.unwrap_or(DEFAULT_BASELINE))
        })
        .collect();
    let (mut feed, feed_rx) = QueueFeed::start(
        cafeterias,
        Duration::from_secs(config.tick_seconds),
        config.queue_seed,
    );
    spawn_feed_forwarder(feed_rx, tx.clone());

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the detail view is open, it captures all events
            if let Some(id) = app.event_detail {
                match event {
                    TuiEvent::Escape | TuiEvent::Submit => {
                        update(&mut app, Action::CloseEventDetail);
                    }
                    TuiEvent::InputChar(' ') => {
                        update(&mut app, Action::ToggleCheckIn(id));
                    }
                    _ => {}
                }
                continue;
            }

            // Page-level keys (tab cycling, digit jumps, quit) apply whenever
            // the current page is not editing a text field.
            let editing = match app.page {
                Page::LostFound => tui.lost_found.is_editing(),
                Page::Navigation => tui.nav.is_editing(),
                _ => false,
            };
            if !editing {
                match event {
                    TuiEvent::NextTab => {
                        update(&mut app, Action::NextPage);
                        continue;
                    }
                    TuiEvent::PrevTab => {
                        update(&mut app, Action::PrevPage);
                        continue;
                    }
                    TuiEvent::InputChar(c) if Page::from_digit(c).is_some() => {
                        if let Some(page) = Page::from_digit(c) {
                            update(&mut app, Action::SelectPage(page));
                        }
                        continue;
                    }
                    TuiEvent::Escape => {
                        if update(&mut app, Action::Quit) == Effect::Quit {
                            should_quit = true;
                        }
                        continue;
                    }
                    _ => {}
                }
            }

            // Everything else goes to the visible page
            match app.page {
                Page::Home => {}
                Page::Events => {
                    if let Some(page_event) = tui.events.handle_event(&event, &app.events) {
                        let action = match page_event {
                            EventsPageEvent::ToggleCheckIn(id) => Action::ToggleCheckIn(id),
                            EventsPageEvent::OpenDetail(id) => Action::OpenEventDetail(id),
                        };
                        update(&mut app, action);
                    }
                }
                Page::LostFound => {
                    if let Some(page_event) = tui.lost_found.handle_event(&event, &app.reports) {
                        let action = match page_event {
                            LostFoundEvent::Submit { title, description } => {
                                Action::SubmitReport { title, description }
                            }
                            LostFoundEvent::ToggleClaim(id) => Action::ToggleClaim(id),
                        };
                        update(&mut app, action);
                    }
                }
                Page::Navigation => {
                    if let Some(NavPageEvent::PlanRoute { from, to }) =
                        tui.nav.handle_event(&event)
                    {
                        update(&mut app, Action::PlanRoute { from, to });
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (queue snapshots, feed shutdown)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    feed.stop();
    ratatui::restore();
    Ok(())
}

/// Relay feed snapshots into the action channel until either side closes.
fn spawn_feed_forwarder(
    mut feed_rx: broadcast::Receiver<QueueSnapshot>,
    tx: mpsc::Sender<Action>,
) {
    tokio::spawn(async move {
        loop {
            match feed_rx.recv().await {
                Ok(snapshot) => {
                    debug!(
                        "Forwarding queue snapshot ({} queues, taken {})",
                        snapshot.queues.len(),
                        snapshot.taken_at.format("%H:%M:%S"),
                    );
                    if tx.send(Action::QueueRefresh(snapshot)).is_err() {
                        warn!("Failed to forward queue snapshot: receiver dropped");
                        return;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Queue feed forwarder lagged, skipped {} snapshots", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("Queue feed channel closed");
                    if tx.send(Action::FeedClosed).is_err() {
                        warn!("Failed to send FeedClosed: receiver dropped");
                    }
                    return;
                }
            }
        }
    });
}
