use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::alert::{AlertSeverity, TimelineEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Open,
    InProgress,
    Closed,
    Escalated,
}

/// An investigation grouping alerts and logs under one incident narrative.
///
/// The timeline follows a fixed progression: "Case created" first, then
/// "Investigation started" once the case is no longer open, "Case escalated"
/// for escalated cases and "Case resolved" for closed ones, each entry
/// strictly later than the previous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CaseStatus,
    pub severity: AlertSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    pub related_alerts: Vec<String>,
    pub related_logs: Vec<String>,
    pub tags: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub priority: u8,
    pub category: String,
    pub estimated_hours: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<u32>,
}

impl Case {
    /// Open and in-progress cases count as active incidents.
    pub fn is_active(&self) -> bool {
        matches!(self.status, CaseStatus::Open | CaseStatus::InProgress)
    }

    pub fn is_closed(&self) -> bool {
        self.status == CaseStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&CaseStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let parsed: CaseStatus = serde_json::from_str("\"escalated\"").unwrap();
        assert_eq!(parsed, CaseStatus::Escalated);
    }

    #[test]
    fn test_is_active() {
        for (status, active) in [
            (CaseStatus::Open, true),
            (CaseStatus::InProgress, true),
            (CaseStatus::Closed, false),
            (CaseStatus::Escalated, false),
        ] {
            let case = Case {
                id: "case-1".to_string(),
                title: "test".to_string(),
                description: String::new(),
                status,
                severity: AlertSeverity::High,
                assigned_to: None,
                created_by: "Sarah Johnson".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
                closed_at: None,
                related_alerts: vec![],
                related_logs: vec![],
                tags: vec![],
                timeline: vec![],
                priority: 2,
                category: "Security Incident".to_string(),
                estimated_hours: 24,
                actual_hours: None,
            };
            assert_eq!(case.is_active(), active);
        }
    }
}
