//! Route lookup: a fixed five-step walking template with the two endpoints
//! substituted in. There is no campus map and no graph search behind this;
//! the template is the whole feature.

/// Number of steps every computed route has.
pub const ROUTE_STEPS: usize = 5;

/// A computed walking route between two free-text endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub from: String,
    pub to: String,
    pub steps: Vec<String>,
}

/// Build the five-step route for `from` → `to`.
///
/// Both endpoints are trimmed; if either is empty no route is computed and
/// `None` is returned.
pub fn plan_route(from: &str, to: &str) -> Option<RoutePlan> {
    let from = from.trim();
    let to = to.trim();
    if from.is_empty() || to.is_empty() {
        return None;
    }

    let steps = vec![
        format!("Start at the main entrance of {from}."),
        "Head along the central walkway toward the quad.".to_string(),
        "Cross the quad, keeping the library on your left.".to_string(),
        "Follow the signposted path past the student center.".to_string(),
        format!("Arrive at {to}."),
    ];

    Some(RoutePlan {
        from: from.to_string(),
        to: to.to_string(),
        steps,
    })
}
