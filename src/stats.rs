use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::alert::{Alert, AlertSeverity, AlertStatus};
use crate::case::{Case, CaseStatus};
use crate::log_entry::{LogEntry, LogLevel};

/// Cosmetic system-health figures shown on the dashboard header. They are
/// fixed values, refreshed by a presentation-layer timer, not measured.
pub const UPTIME_PERCENT: f64 = 99.7;
pub const RESPONSE_TIME_MS: u32 = 245;
pub const AVG_RESOLUTION_TIME_HOURS: f64 = 24.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStats {
    pub total: usize,
    pub open: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub resolved_24h: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed_24h: usize,
    pub avg_resolution_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStats {
    pub total_24h: usize,
    pub errors: usize,
    pub warnings: usize,
    pub critical_events: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub uptime_percent: f64,
    pub response_time: u32,
    pub active_incidents: usize,
}

/// Aggregate counts over the three collections. Never mutated in place:
/// recompute from the current collections whenever they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub alerts: AlertStats,
    pub cases: CaseStats,
    pub logs: LogStats,
    pub system: SystemStats,
}

/// Full re-scan of the collections. All 24-hour windows are relative to the
/// injected anchor timestamp, never the wall clock.
pub fn compute_stats(
    alerts: &[Alert],
    logs: &[LogEntry],
    cases: &[Case],
    anchor: DateTime<Utc>,
) -> DashboardStats {
    let last_24h = anchor - Duration::hours(24);

    let severity_count =
        |severity: AlertSeverity| alerts.iter().filter(|a| a.severity == severity).count();

    DashboardStats {
        alerts: AlertStats {
            total: alerts.len(),
            open: alerts.iter().filter(|a| a.status == AlertStatus::Open).count(),
            critical: severity_count(AlertSeverity::Critical),
            high: severity_count(AlertSeverity::High),
            medium: severity_count(AlertSeverity::Medium),
            low: severity_count(AlertSeverity::Low),
            resolved_24h: alerts
                .iter()
                .filter(|a| a.resolved_at.is_some_and(|t| t > last_24h))
                .count(),
        },
        cases: CaseStats {
            total: cases.len(),
            open: cases.iter().filter(|c| c.status == CaseStatus::Open).count(),
            in_progress: cases
                .iter()
                .filter(|c| c.status == CaseStatus::InProgress)
                .count(),
            closed_24h: cases
                .iter()
                .filter(|c| c.closed_at.is_some_and(|t| t > last_24h))
                .count(),
            avg_resolution_time: AVG_RESOLUTION_TIME_HOURS,
        },
        logs: LogStats {
            total_24h: logs.iter().filter(|l| l.timestamp > last_24h).count(),
            errors: logs.iter().filter(|l| l.level == LogLevel::Error).count(),
            warnings: logs.iter().filter(|l| l.level == LogLevel::Warn).count(),
            critical_events: logs.iter().filter(|l| l.has_related_alerts()).count(),
        },
        system: SystemStats {
            uptime_percent: UPTIME_PERCENT,
            response_time: RESPONSE_TIME_MS,
            active_incidents: cases.iter().filter(|c| c.is_active()).count(),
        },
    }
}
