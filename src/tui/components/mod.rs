//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: top status bar (campus name, status message, feed liveness)
//! - `TabBar`: the four page tabs
//! - `QueueBoard`: latest queue snapshot rows
//! - `HomePage`: welcome header + queue board
//! - `EventDetail`: centered event overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components with persistent state living in `TuiState`, rendered through a
//! transient wrapper each frame:
//! - `InputField`: single-line text field
//! - `EventsPageState` / `EventsPage`: selectable event list
//! - `LostFoundState` / `LostFoundPage`: report form + claim list
//! - `NavPageState` / `NavPage`: route form + step list
//!
//! Stateful pages expose an inherent `handle_event` that takes the domain
//! data it needs as an explicit argument and returns a page-level event enum;
//! the main loop maps those onto core `Action`s. This keeps dependencies
//! visible and the pages testable without a terminal.

pub mod event_detail;
pub mod events_page;
pub mod home;
pub mod input_field;
pub mod lost_found;
pub mod nav_page;
pub mod queue_board;
pub mod tab_bar;
pub mod title_bar;

pub use event_detail::EventDetail;
pub use events_page::{EventsPage, EventsPageEvent, EventsPageState};
pub use home::HomePage;
pub use input_field::{FieldEvent, InputField};
pub use lost_found::{LostFoundEvent, LostFoundPage, LostFoundState};
pub use nav_page::{NavPage, NavPageEvent, NavPageState};
pub use queue_board::QueueBoard;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;
