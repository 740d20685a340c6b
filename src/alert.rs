use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered urgency classification, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    /// Case priority: lower number, higher urgency.
    pub fn priority(&self) -> u8 {
        match self {
            AlertSeverity::Critical => 1,
            AlertSeverity::High => 2,
            AlertSeverity::Medium => 3,
            AlertSeverity::Low => 4,
            AlertSeverity::Info => 5,
        }
    }

    /// Risk-score baseline for standalone alerts.
    pub fn risk_weight(&self) -> u32 {
        match self {
            AlertSeverity::Critical => 90,
            AlertSeverity::High => 70,
            AlertSeverity::Medium => 50,
            AlertSeverity::Low => 30,
            AlertSeverity::Info => 10,
        }
    }

    /// Risk-score baseline for case-derived alerts, which add a wider
    /// random component on top.
    pub fn contextual_risk_base(&self) -> u32 {
        match self {
            AlertSeverity::Critical => 80,
            AlertSeverity::High => 60,
            AlertSeverity::Medium => 40,
            AlertSeverity::Low | AlertSeverity::Info => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Open,
    Investigating,
    Resolved,
    Snoozed,
    FalsePositive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Network,
    Endpoint,
    Application,
    Identity,
    Data,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    #[serde(rename = "type")]
    pub indicator_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A discrete security detection event with a severity/status lifecycle.
///
/// Status drives the optional fields: an open alert carries none of the
/// assignment/completion fields, and exactly one of the resolved/snoozed/
/// false-positive field groups is set once the alert leaves the open state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ip: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub tags: Vec<String>,
    pub related_logs: Vec<String>,
    pub related_cases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snooze_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub false_positive_reason: Option<String>,
    pub category: AlertCategory,
    pub risk_score: u32,
    pub indicators: Vec<Indicator>,
    pub timeline: Vec<TimelineEntry>,
}

impl Alert {
    pub fn is_open(&self) -> bool {
        self.status == AlertStatus::Open
    }

    pub fn is_critical(&self) -> bool {
        self.severity >= AlertSeverity::High
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn relates_to_case(&self, case_id: &str) -> bool {
        self.related_cases.iter().any(|c| c == case_id)
    }
}
