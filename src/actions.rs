use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::alert::{Alert, AlertStatus, TimelineEntry};

/// Identity recorded on analyst-initiated mutations.
pub const ACTION_USER: &str = "Current User";

pub const FALSE_POSITIVE_REASON: &str = "Marked as false positive by analyst";

/// How long a snoozed alert stays out of the queue.
pub const SNOOZE_DURATION_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertAction {
    Resolve,
    Snooze,
    FalsePositive,
}

impl AlertAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertAction::Resolve => "resolve",
            AlertAction::Snooze => "snooze",
            AlertAction::FalsePositive => "false_positive",
        }
    }
}

/// Apply one analyst action to one alert, returning a new collection.
///
/// Pure transform: only the entry matching `alert_id` is replaced, every
/// other entry is carried over unchanged, and an unknown id is a no-op. The
/// current time is injected by the caller. Status is not gated here; the
/// presentation layer decides which actions to offer. Any previously set
/// completion fields are cleared first so exactly one group is populated
/// after the action.
pub fn apply_alert_action(
    alerts: &[Alert],
    alert_id: &str,
    action: AlertAction,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    alerts
        .iter()
        .map(|alert| {
            if alert.id != alert_id {
                return alert.clone();
            }

            let mut updated = alert.clone();
            updated.resolved_at = None;
            updated.resolved_by = None;
            updated.snooze_until = None;
            updated.false_positive_reason = None;

            match action {
                AlertAction::Resolve => {
                    updated.status = AlertStatus::Resolved;
                    updated.resolved_at = Some(now);
                    updated.resolved_by = Some(ACTION_USER.to_string());
                }
                AlertAction::Snooze => {
                    updated.status = AlertStatus::Snoozed;
                    updated.snooze_until = Some(now + Duration::hours(SNOOZE_DURATION_HOURS));
                }
                AlertAction::FalsePositive => {
                    updated.status = AlertStatus::FalsePositive;
                    updated.false_positive_reason = Some(FALSE_POSITIVE_REASON.to_string());
                }
            }

            updated.timeline.push(TimelineEntry {
                timestamp: now,
                action: format!("Alert {}", action.as_str()),
                user: ACTION_USER.to_string(),
                details: Some(format!("Alert marked as {}", action.as_str())),
            });

            updated
        })
        .collect()
}
