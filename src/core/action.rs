//! # Actions
//!
//! Everything that can happen in Campus Hub becomes an `Action`.
//! User submits the report form? That's `Action::SubmitReport`.
//! The feed ticks? That's `Action::QueueRefresh(snapshot)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: `assert_eq!(update(state, action), expected)`.
//! And debuggable: log every action, replay the exact session.

use uuid::Uuid;

use crate::core::model::LostFoundItem;
use crate::core::route;
use crate::core::state::{App, Page};
use crate::feed::QueueSnapshot;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    SelectPage(Page),
    NextPage,
    PrevPage,
    OpenEventDetail(u32),
    CloseEventDetail,
    ToggleCheckIn(u32),
    SubmitReport { title: String, description: String },
    ToggleClaim(Uuid),
    PlanRoute { from: String, to: String },
    QueueRefresh(QueueSnapshot),
    FeedClosed,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The reducer: applies `action` to `app` and reports the follow-up effect.
///
/// Invalid input (empty report title, empty route endpoint, unknown id) is a
/// silent no-op; nothing in here produces an error.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,

        Action::SelectPage(page) => {
            app.page = page;
            // The detail view belongs to the Events page's lifecycle.
            app.event_detail = None;
        }
        Action::NextPage => {
            app.page = app.page.next();
            app.event_detail = None;
        }
        Action::PrevPage => {
            app.page = app.page.prev();
            app.event_detail = None;
        }

        Action::OpenEventDetail(id) => {
            if app.event(id).is_some() {
                app.event_detail = Some(id);
            }
        }
        Action::CloseEventDetail => {
            app.event_detail = None;
        }

        Action::ToggleCheckIn(id) => {
            if let Some(event) = app.events.iter_mut().find(|e| e.id == id) {
                event.checked_in = !event.checked_in;
                app.status_message = if event.checked_in {
                    format!("Checked in to {}", event.title)
                } else {
                    format!("Check-in removed for {}", event.title)
                };
            }
        }

        Action::SubmitReport { title, description } => {
            let title = title.trim();
            if title.is_empty() {
                return Effect::None;
            }
            let item = LostFoundItem::new(title.to_string(), description.trim().to_string());
            app.status_message = format!("Report posted: {}", item.title);
            app.reports.insert(0, item);
        }

        Action::ToggleClaim(id) => {
            if let Some(item) = app.reports.iter_mut().find(|r| r.id == id) {
                item.claimed = !item.claimed;
                app.status_message = if item.claimed {
                    format!("Item claimed: {}", item.title)
                } else {
                    format!("Claim cleared: {}", item.title)
                };
            }
        }

        Action::PlanRoute { from, to } => {
            if let Some(plan) = route::plan_route(&from, &to) {
                app.status_message = format!("Route ready: {} → {}", plan.from, plan.to);
                app.route = Some(plan);
            }
        }

        Action::QueueRefresh(snapshot) => {
            app.queues = Some(snapshot);
            app.feed_live = true;
        }
        Action::FeedClosed => {
            app.feed_live = false;
            app.status_message = String::from("Queue feed offline");
        }
    }

    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::CafeteriaQueue;
    use crate::test_support::test_app;
    use chrono::Local;

    fn snapshot(counts: &[(&str, u8)]) -> QueueSnapshot {
        QueueSnapshot {
            taken_at: Local::now(),
            queues: counts
                .iter()
                .map(|(name, waiting)| CafeteriaQueue::new(*name, *waiting))
                .collect(),
        }
    }

    #[test]
    fn test_quit_produces_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_page_selection_and_cycling() {
        let mut app = test_app();
        update(&mut app, Action::SelectPage(Page::Events));
        assert_eq!(app.page, Page::Events);
        update(&mut app, Action::NextPage);
        assert_eq!(app.page, Page::Home);
        update(&mut app, Action::PrevPage);
        assert_eq!(app.page, Page::Events);
    }

    #[test]
    fn test_page_switch_closes_detail() {
        let mut app = test_app();
        let id = app.events[0].id;
        update(&mut app, Action::SelectPage(Page::Events));
        update(&mut app, Action::OpenEventDetail(id));
        assert_eq!(app.event_detail, Some(id));
        update(&mut app, Action::NextPage);
        assert!(app.event_detail.is_none());
    }

    #[test]
    fn test_open_detail_for_unknown_event_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::OpenEventDetail(9999));
        assert!(app.event_detail.is_none());
    }

    #[test]
    fn test_submit_report_inserts_at_head() {
        let mut app = test_app();
        update(
            &mut app,
            Action::SubmitReport {
                title: "Black umbrella".to_string(),
                description: "Left in lecture hall 2".to_string(),
            },
        );
        update(
            &mut app,
            Action::SubmitReport {
                title: "Student ID card".to_string(),
                description: String::new(),
            },
        );
        assert_eq!(app.reports.len(), 2);
        assert_eq!(app.reports[0].title, "Student ID card");
        assert_eq!(app.reports[1].title, "Black umbrella");
    }

    #[test]
    fn test_submit_report_with_empty_title_is_noop() {
        let mut app = test_app();
        let before = app.status_message.clone();
        update(
            &mut app,
            Action::SubmitReport {
                title: "   ".to_string(),
                description: "orphan description".to_string(),
            },
        );
        assert!(app.reports.is_empty());
        assert_eq!(app.status_message, before);
    }

    #[test]
    fn test_submit_report_trims_fields() {
        let mut app = test_app();
        update(
            &mut app,
            Action::SubmitReport {
                title: "  Keys  ".to_string(),
                description: "  on a red lanyard  ".to_string(),
            },
        );
        assert_eq!(app.reports[0].title, "Keys");
        assert_eq!(app.reports[0].description, "on a red lanyard");
    }

    #[test]
    fn test_toggle_claim_twice_restores_state() {
        let mut app = test_app();
        update(
            &mut app,
            Action::SubmitReport {
                title: "Scarf".to_string(),
                description: String::new(),
            },
        );
        let id = app.reports[0].id;
        update(&mut app, Action::ToggleClaim(id));
        assert!(app.reports[0].claimed);
        update(&mut app, Action::ToggleClaim(id));
        assert!(!app.reports[0].claimed);
    }

    #[test]
    fn test_toggle_claim_for_unknown_id_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::ToggleClaim(Uuid::new_v4()));
        assert!(app.reports.is_empty());
    }

    #[test]
    fn test_toggle_check_in_twice_restores_state() {
        let mut app = test_app();
        let id = app.events[0].id;
        update(&mut app, Action::ToggleCheckIn(id));
        assert!(app.event(id).unwrap().checked_in);
        update(&mut app, Action::ToggleCheckIn(id));
        assert!(!app.event(id).unwrap().checked_in);
    }

    #[test]
    fn test_plan_route_sets_five_steps() {
        let mut app = test_app();
        update(
            &mut app,
            Action::PlanRoute {
                from: "Dorm A".to_string(),
                to: "Gym".to_string(),
            },
        );
        let plan = app.route.as_ref().unwrap();
        assert_eq!(plan.steps.len(), route::ROUTE_STEPS);
        assert!(plan.steps[0].contains("Dorm A"));
        assert!(plan.steps.last().unwrap().contains("Gym"));
    }

    #[test]
    fn test_plan_route_with_empty_endpoint_keeps_previous() {
        let mut app = test_app();
        update(
            &mut app,
            Action::PlanRoute {
                from: "Dorm A".to_string(),
                to: "Gym".to_string(),
            },
        );
        update(
            &mut app,
            Action::PlanRoute {
                from: String::new(),
                to: "Pool".to_string(),
            },
        );
        let plan = app.route.as_ref().unwrap();
        assert_eq!(plan.to, "Gym");
    }

    #[test]
    fn test_queue_refresh_replaces_snapshot() {
        let mut app = test_app();
        update(&mut app, Action::QueueRefresh(snapshot(&[("North", 4)])));
        update(&mut app, Action::QueueRefresh(snapshot(&[("North", 7)])));
        let queues = &app.queues.as_ref().unwrap().queues;
        assert_eq!(queues.len(), 1);
        assert_eq!(queues[0].waiting, 7);
    }

    #[test]
    fn test_feed_closed_marks_feed_offline() {
        let mut app = test_app();
        update(&mut app, Action::QueueRefresh(snapshot(&[("North", 4)])));
        update(&mut app, Action::FeedClosed);
        assert!(!app.feed_live);
        // Last snapshot stays visible.
        assert!(app.queues.is_some());
    }
}
