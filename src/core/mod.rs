//! # Core Application Logic
//!
//! This module contains Campus Hub's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Feed    │      │   (tests)  │
//!     │  Adapter   │      │  (queue    │      │            │
//!     │ (ratatui)  │      │  ticker)   │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`model`]: The `Event` and `LostFoundItem` records
//! - [`route`]: The five-step route template
//! - [`config`]: Layered configuration loading

pub mod action;
pub mod config;
pub mod model;
pub mod route;
pub mod state;
