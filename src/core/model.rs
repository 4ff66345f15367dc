//! # Domain Records
//!
//! Plain data records for the two user-facing collections: campus events and
//! lost-and-found reports. No behavior beyond construction; all mutation
//! goes through `update()` in action.rs.

use chrono::{DateTime, Duration, Local};
use uuid::Uuid;

/// A campus event the user can check in to.
#[derive(Debug, Clone)]
pub struct Event {
    /// Identifier, unique within the sample list (assumed, not enforced).
    pub id: u32,
    pub title: String,
    pub place: String,
    pub starts_at: DateTime<Local>,
    pub description: String,
    /// True once the user has registered presence.
    pub checked_in: bool,
}

impl Event {
    /// Short "Fri 18:00" style start time for list rows.
    pub fn starts_label(&self) -> String {
        self.starts_at.format("%a %H:%M").to_string()
    }
}

/// A lost-and-found report submitted through the board form.
#[derive(Debug, Clone)]
pub struct LostFoundItem {
    pub id: Uuid,
    pub title: String,
    /// Optional free text; empty string when the user left it blank.
    pub description: String,
    pub reported_at: DateTime<Local>,
    /// True once the item has been matched to an owner.
    pub claimed: bool,
}

impl LostFoundItem {
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            reported_at: Local::now(),
            claimed: false,
        }
    }
}

/// The fixed event list shown at startup. Start times are relative to launch
/// so the demo always shows upcoming events.
pub fn sample_events() -> Vec<Event> {
    let now = Local::now();
    let event = |id: u32, title: &str, place: &str, hours: i64, description: &str| Event {
        id,
        title: title.to_string(),
        place: place.to_string(),
        starts_at: now + Duration::hours(hours),
        description: description.to_string(),
        checked_in: false,
    };

    vec![
        event(
            1,
            "Open-Air Film Night",
            "Main Quad",
            3,
            "Blankets and projectors on the quad. Popcorn from the student \
             union while it lasts; the film starts at dusk.",
        ),
        event(
            2,
            "Robotics Club Demo",
            "Engineering Hall B12",
            5,
            "The club shows off this semester's line-following robots and a \
             very temperamental quadruped. Drop in any time.",
        ),
        event(
            3,
            "Career Fair: STEM Day",
            "Sports Center",
            26,
            "Forty employers, CV review corner, and free lanyards. Bring a \
             printed resume if you want the review queue.",
        ),
        event(
            4,
            "Acoustic Open Mic",
            "Campus Cafe Stage",
            29,
            "Sign-up sheet at the counter from 18:00. Two songs per act, \
             house guitar available.",
        ),
        event(
            5,
            "Intro to Bouldering",
            "Rec Center Wall",
            49,
            "Beginner session with shoes provided. Limited to whoever shows \
             up first, so come early.",
        ),
        event(
            6,
            "Farmers Market",
            "West Gate Plaza",
            75,
            "Local produce, bread, and honey. Card payments accepted at most \
             stalls this year.",
        ),
    ]
}
