//! Order-tracking state and the deterministic progress simulation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where tracking updates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    /// Nothing is being tracked.
    #[default]
    None,
    /// Steps come from the backend tracking endpoint.
    Api,
    /// Steps come from the local time-based simulation.
    Mock,
}

/// One step of the tracking timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingStep {
    pub key: String,
    pub title: String,
    pub meta: String,
    pub active: bool,
}

/// Tracking timeline for the active order.
///
/// Recreated on each checkout, updated by refresh, reset when the order is
/// cleared. `started_at` anchors the simulation clock and is seeded on the
/// first refresh that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackingState {
    pub mode: TrackingMode,
    pub steps: Vec<TrackingStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl TrackingState {
    /// State between orders: nothing tracked, no steps.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            mode: TrackingMode::None,
            steps: Vec::new(),
            started_at: None,
        }
    }
}

/// Stages of a delivery and the elapsed minute each one unlocks at.
const STAGES: [(&str, i64, &str, &str); 4] = [
    ("confirmed", 0, "Order confirmed", "We're preparing your order."),
    ("preparing", 4, "Preparing", "The kitchen is working on it."),
    ("picked_up", 10, "Picked up", "Courier is on the way."),
    ("delivered", 18, "Delivered", "Enjoy your meal!"),
];

/// Progress timeline derived purely from minutes elapsed since checkout.
///
/// The current stage is the last whose threshold has been reached (the
/// first stage when none has); it and every earlier stage are active.
/// Monotonic in `elapsed_minutes`: more time never deactivates a stage.
#[must_use]
pub fn simulated_steps(elapsed_minutes: i64) -> Vec<TrackingStep> {
    let current = STAGES
        .iter()
        .rposition(|(_, threshold, _, _)| *threshold <= elapsed_minutes)
        .unwrap_or(0);

    STAGES
        .iter()
        .enumerate()
        .map(|(idx, (key, _, title, meta))| TrackingStep {
            key: (*key).to_owned(),
            title: (*title).to_owned(),
            meta: (*meta).to_owned(),
            active: idx <= current,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn active_keys(elapsed: i64) -> Vec<String> {
        simulated_steps(elapsed)
            .into_iter()
            .filter(|step| step.active)
            .map(|step| step.key)
            .collect()
    }

    #[test]
    fn test_only_confirmed_at_zero() {
        assert_eq!(active_keys(0), ["confirmed"]);
    }

    #[test]
    fn test_negative_elapsed_clamps_to_first_stage() {
        assert_eq!(active_keys(-5), ["confirmed"]);
    }

    #[test]
    fn test_all_stages_at_eighteen() {
        assert_eq!(
            active_keys(18),
            ["confirmed", "preparing", "picked_up", "delivered"]
        );
        assert_eq!(active_keys(18), active_keys(500));
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(active_keys(3), ["confirmed"]);
        assert_eq!(active_keys(4), ["confirmed", "preparing"]);
        assert_eq!(active_keys(10), ["confirmed", "preparing", "picked_up"]);
        assert_eq!(active_keys(17), ["confirmed", "preparing", "picked_up"]);
    }

    #[test]
    fn test_monotonic_over_elapsed_time() {
        for earlier in 0..30 {
            let before = active_keys(earlier);
            let after = active_keys(earlier + 1);
            assert!(
                before.iter().all(|key| after.contains(key)),
                "stage regressed between minute {earlier} and {}",
                earlier + 1
            );
        }
    }

    #[test]
    fn test_step_order_is_stable() {
        let steps = simulated_steps(9);
        let keys: Vec<_> = steps.iter().map(|step| step.key.as_str()).collect();
        assert_eq!(keys, ["confirmed", "preparing", "picked_up", "delivered"]);
    }

    #[test]
    fn test_idle_state() {
        let idle = TrackingState::idle();
        assert_eq!(idle.mode, TrackingMode::None);
        assert!(idle.steps.is_empty());
        assert!(idle.started_at.is_none());
    }
}
