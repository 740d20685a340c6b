use anyhow::{Result, bail};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::alert::{
    Alert, AlertCategory, AlertSeverity, AlertStatus, Indicator, TimelineEntry,
};
use crate::case::{Case, CaseStatus};
use crate::config::GeneratorConfig;
use crate::log_entry::{LogEntry, LogLevel};
use crate::rng::SeededRng;
use crate::stats::{DashboardStats, compute_stats};
use crate::templates::{
    ALERT_TAGS, ALERT_TITLES, ANALYSTS, CATALOG, CaseTemplate, DESTINATION_IPS, EVENT_TYPES,
    IncidentKind, LOG_MESSAGES, PROCESSES, SOURCE_IPS, SOURCES, USER_AGENT, USERS,
};

/// Severity ladder used when varying a case alert's severity around the
/// template baseline. Info never appears on case-derived alerts.
const SEVERITY_LADDER: [AlertSeverity; 4] = [
    AlertSeverity::Critical,
    AlertSeverity::High,
    AlertSeverity::Medium,
    AlertSeverity::Low,
];

const ALERT_CATEGORIES: [AlertCategory; 5] = [
    AlertCategory::Network,
    AlertCategory::Endpoint,
    AlertCategory::Application,
    AlertCategory::Identity,
    AlertCategory::Data,
];

/// The complete generated dataset. Produced once at startup; only the alert
/// collection is ever replaced afterwards (via `apply_alert_action`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub cases: Vec<Case>,
    pub alerts: Vec<Alert>,
    pub logs: Vec<LogEntry>,
    pub stats: DashboardStats,
}

/// Deterministic synthetic-data generator. A single seeded PRNG instance is
/// threaded through every random choice, so identical configuration yields a
/// field-for-field identical dataset.
pub struct Generator {
    config: GeneratorConfig,
    templates: Vec<CaseTemplate>,
    rng: SeededRng,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_templates(config, CATALOG.to_vec())
    }

    pub fn with_templates(config: GeneratorConfig, templates: Vec<CaseTemplate>) -> Result<Self> {
        if templates.is_empty() {
            bail!("template catalog is empty");
        }
        let rng = SeededRng::new(config.seed);
        Ok(Self {
            config,
            templates,
            rng,
        })
    }

    /// Produce the full dataset: cases with their contextual alerts and logs,
    /// then standalone alerts and logs, then a stats snapshot.
    pub fn generate(mut self) -> Dataset {
        let mut cases = Vec::with_capacity(self.config.case_count);
        let mut alerts = Vec::new();
        let mut logs = Vec::new();

        for i in 0..self.config.case_count {
            let case_id = format!("case-{}", i + 1);
            let (case, case_alerts, case_logs) = self.generate_case(&case_id);
            cases.push(case);
            alerts.extend(case_alerts);
            logs.extend(case_logs);
        }

        // standalone entity ids continue past the ranges the case-derived
        // entities occupy in the original dashboard
        for i in 0..self.config.standalone_alert_count {
            let id = format!("alert-{}", i + 501);
            let alert = self.standalone_alert(id);
            alerts.push(alert);
        }
        for i in 0..self.config.standalone_log_count {
            let id = format!("log-{}", i + 1501);
            let log = self.standalone_log(id);
            logs.push(log);
        }

        let stats = compute_stats(&alerts, &logs, &cases, self.config.anchor);

        Dataset {
            cases,
            alerts,
            logs,
            stats,
        }
    }

    fn generate_case(&mut self, case_id: &str) -> (Case, Vec<Alert>, Vec<LogEntry>) {
        let anchor = self.config.anchor;
        let template = self.rng.choose(&self.templates).clone();
        let status = *self.rng.choose(&[
            CaseStatus::Open,
            CaseStatus::InProgress,
            CaseStatus::Closed,
            CaseStatus::Escalated,
        ]);
        let created_at = self
            .rng
            .datetime_between(anchor - Duration::days(30), anchor);

        let alerts = self.case_alerts(&template, case_id);
        let logs = self.case_logs(&template, case_id, &alerts);

        let mut timeline = vec![TimelineEntry {
            timestamp: created_at,
            action: "Case created".to_string(),
            user: self.rng.choose(&ANALYSTS).to_string(),
            details: Some("Initial security incident reported and case opened".to_string()),
        }];

        // each progression step is drawn strictly after the previous entry
        if status != CaseStatus::Open {
            let assigned_at =
                created_at + Duration::minutes(30 + (self.rng.next_f64() * 120.0) as i64);
            timeline.push(TimelineEntry {
                timestamp: assigned_at,
                action: "Investigation started".to_string(),
                user: self.rng.choose(&ANALYSTS).to_string(),
                details: Some("Case assigned to security analyst for investigation".to_string()),
            });
        }

        if status == CaseStatus::Escalated {
            let investigation_at = timeline.last().map(|e| e.timestamp).unwrap_or(created_at);
            let escalated_at = investigation_at
                + Duration::minutes(((2.0 + self.rng.next_f64() * 6.0) * 60.0) as i64);
            timeline.push(TimelineEntry {
                timestamp: escalated_at,
                action: "Case escalated".to_string(),
                user: self.rng.choose(&ANALYSTS).to_string(),
                details: Some("Escalated to senior analyst due to severity".to_string()),
            });
        }

        if status == CaseStatus::Closed {
            let investigation_at = timeline.last().map(|e| e.timestamp).unwrap_or(created_at);
            let closed_at = investigation_at
                + Duration::minutes(
                    1 + ((template.estimated_hours as f64 + self.rng.next_f64() * 12.0) * 60.0)
                        as i64,
                );
            timeline.push(TimelineEntry {
                timestamp: closed_at,
                action: "Case resolved".to_string(),
                user: self.rng.choose(&ANALYSTS).to_string(),
                details: Some("Investigation completed and incident resolved".to_string()),
            });
        }

        let updated_at = timeline.last().map(|e| e.timestamp).unwrap_or(created_at);
        let actual_hours = (status == CaseStatus::Closed).then(|| {
            (template.estimated_hours as i64 + self.rng.next_usize(10) as i64 - 5).max(0) as u32
        });
        let assigned_to =
            (status != CaseStatus::Open).then(|| self.rng.choose(&ANALYSTS).to_string());

        let case = Case {
            id: case_id.to_string(),
            title: template.title.to_string(),
            description: template.description.to_string(),
            status,
            severity: template.severity,
            assigned_to,
            created_by: self.rng.choose(&ANALYSTS).to_string(),
            created_at,
            updated_at,
            closed_at: (status == CaseStatus::Closed).then_some(updated_at),
            related_alerts: alerts.iter().map(|a| a.id.clone()).collect(),
            related_logs: logs.iter().map(|l| l.id.clone()).collect(),
            tags: template.tags.iter().map(|t| t.to_string()).collect(),
            timeline,
            priority: template.severity.priority(),
            category: template.category.to_string(),
            estimated_hours: template.estimated_hours,
            actual_hours,
        };

        (case, alerts, logs)
    }

    /// 2-4 alerts whose free text is built from the case's incident kind.
    fn case_alerts(&mut self, template: &CaseTemplate, case_id: &str) -> Vec<Alert> {
        let anchor = self.config.anchor;
        let count = self.rng.next_usize(3) + 2;
        let mut alerts = Vec::with_capacity(count);

        for i in 0..count {
            let title = self.rng.choose(template.alert_types).to_string();
            let (description, tags) = self.alert_context(template.kind, &title);

            let mut severity = template.severity;
            if i > 0 && self.rng.next_f64() > 0.6 {
                severity = self.shifted_severity(template.severity);
            }

            let timestamp = self
                .rng
                .datetime_between(anchor - Duration::hours(48), anchor - Duration::hours(2));
            let status = *self.rng.choose(&[
                AlertStatus::Open,
                AlertStatus::Investigating,
                AlertStatus::Resolved,
            ]);

            let assigned_to =
                (status != AlertStatus::Open).then(|| self.rng.choose(&ANALYSTS).to_string());
            let resolved_at = (status == AlertStatus::Resolved)
                .then(|| self.rng.datetime_between(timestamp, anchor));
            let resolved_by = (status == AlertStatus::Resolved)
                .then(|| self.rng.choose(&ANALYSTS).to_string());

            let risk_score =
                (severity.contextual_risk_base() + self.rng.next_usize(30) as u32).min(100);
            let indicators = self.draw_indicators();

            alerts.push(Alert {
                id: format!("{}-alert-{}", case_id, i + 1),
                title,
                description,
                severity,
                status,
                source: self.rng.choose(&SOURCES).to_string(),
                source_ip: Some(self.rng.choose(&SOURCE_IPS).to_string()),
                destination_ip: Some(self.rng.choose(&DESTINATION_IPS).to_string()),
                timestamp,
                assigned_to,
                tags,
                related_logs: vec![],
                related_cases: vec![case_id.to_string()],
                snooze_until: None,
                resolved_at,
                resolved_by,
                false_positive_reason: None,
                category: *self.rng.choose(&ALERT_CATEGORIES),
                risk_score,
                indicators,
                timeline: vec![TimelineEntry {
                    timestamp,
                    action: "Alert triggered".to_string(),
                    user: "System".to_string(),
                    details: Some("Automated detection".to_string()),
                }],
            });
        }

        alerts
    }

    /// 3-10 logs whose messages and detail maps follow the incident kind,
    /// each back-referencing the case and 1-2 of its alerts.
    fn case_logs(
        &mut self,
        template: &CaseTemplate,
        case_id: &str,
        alerts: &[Alert],
    ) -> Vec<LogEntry> {
        let anchor = self.config.anchor;
        let count = self.rng.next_usize(8) + 3;
        let mut logs = Vec::with_capacity(count);

        for i in 0..count {
            let (message, level, event_type, mut details) = self.log_context(template.kind);
            details.insert("user_agent".to_string(), Value::from(USER_AGENT));
            details.insert(
                "bytes_transferred".to_string(),
                Value::from(self.rng.next_usize(10_000) as u64),
            );

            let timestamp = self
                .rng
                .datetime_between(anchor - Duration::hours(72), anchor - Duration::hours(1));
            let related_count = (self.rng.next_usize(2) + 1).min(alerts.len());
            let related_alerts = alerts[..related_count]
                .iter()
                .map(|a| a.id.clone())
                .collect();
            let raw_log = LogEntry::format_raw(timestamp, level, &message);

            logs.push(LogEntry {
                id: format!("{}-log-{}", case_id, i + 1),
                timestamp,
                level,
                source: self.rng.choose(&SOURCES).to_string(),
                source_ip: Some(self.rng.choose(&SOURCE_IPS).to_string()),
                message,
                details,
                related_alerts,
                related_cases: vec![case_id.to_string()],
                user_id: Some(self.rng.choose(&USERS).to_string()),
                session_id: Some(format!("session-{}", self.rng.alphanumeric(13))),
                event_type: event_type.to_string(),
                raw_log,
            });
        }

        logs
    }

    /// A fully standalone alert with no case linkage.
    fn standalone_alert(&mut self, id: String) -> Alert {
        let anchor = self.config.anchor;
        let severity = *self.rng.choose(&[
            AlertSeverity::Critical,
            AlertSeverity::High,
            AlertSeverity::Medium,
            AlertSeverity::Low,
            AlertSeverity::Info,
        ]);
        let status = *self.rng.choose(&[
            AlertStatus::Open,
            AlertStatus::Investigating,
            AlertStatus::Resolved,
            AlertStatus::Snoozed,
            AlertStatus::FalsePositive,
        ]);
        let timestamp = self
            .rng
            .datetime_between(anchor - Duration::days(7), anchor);
        let risk_score = severity.risk_weight() + self.rng.next_usize(10) as u32;

        let title = self.rng.choose(&ALERT_TITLES).to_string();
        let description = format!(
            "Detected {} from {}",
            self.rng.choose(&ALERT_TITLES).to_lowercase(),
            self.rng.choose(&SOURCE_IPS)
        );

        let assigned_to =
            (status != AlertStatus::Open).then(|| self.rng.choose(&ANALYSTS).to_string());
        let related_cases = if status == AlertStatus::Investigating {
            vec![format!("case-{}", self.rng.next_usize(100))]
        } else {
            vec![]
        };
        let snooze_until =
            (status == AlertStatus::Snoozed).then(|| anchor + Duration::hours(24));
        let resolved_at = (status == AlertStatus::Resolved)
            .then(|| self.rng.datetime_between(timestamp, anchor));
        let resolved_by =
            (status == AlertStatus::Resolved).then(|| self.rng.choose(&ANALYSTS).to_string());
        let false_positive_reason = (status == AlertStatus::FalsePositive)
            .then(|| "Authorized maintenance activity".to_string());
        let indicators = self.draw_indicators();

        Alert {
            id,
            title,
            description,
            severity,
            status,
            source: self.rng.choose(&SOURCES).to_string(),
            source_ip: Some(self.rng.choose(&SOURCE_IPS).to_string()),
            destination_ip: Some(self.rng.choose(&DESTINATION_IPS).to_string()),
            timestamp,
            assigned_to,
            tags: vec![self.rng.choose(&ALERT_TAGS).to_string()],
            related_logs: vec![format!("log-{}", self.rng.next_usize(1000))],
            related_cases,
            snooze_until,
            resolved_at,
            resolved_by,
            false_positive_reason,
            category: *self.rng.choose(&ALERT_CATEGORIES),
            risk_score,
            indicators,
            timeline: vec![TimelineEntry {
                timestamp,
                action: "Alert triggered".to_string(),
                user: "System".to_string(),
                details: Some("Automated detection".to_string()),
            }],
        }
    }

    /// A fully standalone log with no case linkage.
    fn standalone_log(&mut self, id: String) -> LogEntry {
        let anchor = self.config.anchor;
        let level = *self.rng.choose(&[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
        ]);
        let timestamp = self
            .rng
            .datetime_between(anchor - Duration::hours(24), anchor);
        let message = self.rng.choose(&LOG_MESSAGES).to_string();

        let mut details = Map::new();
        details.insert(
            "process".to_string(),
            Value::from(*self.rng.choose(&PROCESSES)),
        );
        details.insert("user_agent".to_string(), Value::from(USER_AGENT));
        details.insert(
            "response_code".to_string(),
            Value::from(*self.rng.choose(&[200u64, 401, 403, 404, 500])),
        );
        details.insert(
            "bytes_transferred".to_string(),
            Value::from(self.rng.next_usize(10_000) as u64),
        );

        let related_alerts = if self.rng.next_f64() > 0.7 {
            vec![format!("alert-{}", self.rng.next_usize(500))]
        } else {
            vec![]
        };
        let related_cases = if self.rng.next_f64() > 0.9 {
            vec![format!("case-{}", self.rng.next_usize(100))]
        } else {
            vec![]
        };
        let raw_log = LogEntry::format_raw(timestamp, level, &message);

        LogEntry {
            id,
            timestamp,
            level,
            source: self.rng.choose(&SOURCES).to_string(),
            source_ip: Some(self.rng.choose(&SOURCE_IPS).to_string()),
            message,
            details,
            related_alerts,
            related_cases,
            user_id: Some(self.rng.choose(&USERS).to_string()),
            session_id: Some(format!("session-{}", self.rng.alphanumeric(13))),
            event_type: self.rng.choose(&EVENT_TYPES).to_string(),
            raw_log,
        }
    }

    fn draw_indicators(&mut self) -> Vec<Indicator> {
        vec![
            Indicator {
                indicator_type: "IP".to_string(),
                value: self.rng.choose(&SOURCE_IPS).to_string(),
            },
            Indicator {
                indicator_type: "Hash".to_string(),
                value: format!("sha256:{}", self.rng.alphanumeric(13)),
            },
        ]
    }

    /// One step up or down the severity ladder from the template baseline.
    fn shifted_severity(&mut self, base: AlertSeverity) -> AlertSeverity {
        let index = SEVERITY_LADDER
            .iter()
            .position(|s| *s == base)
            .unwrap_or(SEVERITY_LADDER.len() - 1);
        if index > 0 && self.rng.next_f64() > 0.5 {
            SEVERITY_LADDER[index - 1]
        } else if index < SEVERITY_LADDER.len() - 1 {
            SEVERITY_LADDER[index + 1]
        } else {
            base
        }
    }

    /// Contextual description and tags for a case-derived alert.
    fn alert_context(&mut self, kind: IncidentKind, title: &str) -> (String, Vec<String>) {
        let (description, tags): (String, &[&str]) = match kind {
            IncidentKind::Ransomware => (
                format!(
                    "{} - Files with .crypto extension detected on {}. Suspicious encryption activity observed.",
                    title,
                    self.rng.choose(&SOURCE_IPS)
                ),
                &["ransomware", "malware", "encryption"],
            ),
            IncidentKind::UsbExfiltration => (
                format!(
                    "{} - Large data transfer to external USB device detected. {}MB transferred.",
                    title,
                    self.rng.next_usize(5000) + 1000
                ),
                &["data-exfiltration", "usb", "policy-violation"],
            ),
            IncidentKind::SqlInjection => (
                format!(
                    "{} - Malicious SQL commands detected in web application requests from {}.",
                    title,
                    self.rng.choose(&SOURCE_IPS)
                ),
                &["sql-injection", "web-security", "database"],
            ),
            IncidentKind::InsiderThreat => (
                format!(
                    "{} - Employee {} accessing sensitive files outside normal hours from {}.",
                    title,
                    self.rng.choose(&USERS),
                    self.rng.choose(&SOURCE_IPS)
                ),
                &["insider-threat", "access-anomaly", "policy"],
            ),
            IncidentKind::Phishing => (
                format!(
                    "{} - Suspicious email with credential harvesting link sent to {} employees.",
                    title,
                    self.rng.next_usize(50) + 10
                ),
                &["phishing", "email-security", "credentials"],
            ),
            IncidentKind::Ddos => (
                format!(
                    "{} - {} requests/second from {}. Service degradation detected.",
                    title,
                    self.rng.next_usize(10_000) + 5000,
                    self.rng.choose(&SOURCE_IPS)
                ),
                &["ddos", "network-attack", "availability"],
            ),
            IncidentKind::CryptoMining => (
                format!(
                    "{} - Unauthorized mining process detected on workstation. CPU usage at {}%.",
                    title,
                    self.rng.next_usize(30) + 70
                ),
                &["cryptomining", "malware", "performance"],
            ),
            IncidentKind::SshBruteForce => (
                format!(
                    "{} - {} failed login attempts from {} in 10 minutes.",
                    title,
                    self.rng.next_usize(500) + 100,
                    self.rng.choose(&SOURCE_IPS)
                ),
                &["brute-force", "ssh", "authentication"],
            ),
            IncidentKind::VpnAnomaly => (
                format!(
                    "{} - VPN connection from {} using credentials of {}.",
                    title,
                    self.rng
                        .choose(&["China", "Russia", "North Korea", "Iran"]),
                    self.rng.choose(&USERS)
                ),
                &["vpn", "geo-anomaly", "unauthorized-access"],
            ),
            IncidentKind::EmailCompromise => (
                format!(
                    "{} - Email server relaying {} spam messages. Suspicious outbound traffic detected.",
                    title,
                    self.rng.next_usize(1000) + 500
                ),
                &["email-compromise", "spam", "server-security"],
            ),
            IncidentKind::CloudLeak => (
                format!(
                    "{} - S3 bucket containing {} customer records exposed to public access.",
                    title,
                    self.rng.next_usize(100_000) + 10_000
                ),
                &["cloud-security", "data-leak", "misconfiguration"],
            ),
            IncidentKind::PrivilegeEscalation => (
                format!(
                    "{} - Security event detected from {}",
                    title,
                    self.rng.choose(&SOURCE_IPS)
                ),
                &["security-event"],
            ),
        };

        (description, tags.iter().map(|t| t.to_string()).collect())
    }

    /// Contextual message, level, event type and detail map for a
    /// case-derived log.
    fn log_context(
        &mut self,
        kind: IncidentKind,
    ) -> (String, LogLevel, &'static str, Map<String, Value>) {
        let mut details = Map::new();

        match kind {
            IncidentKind::Ransomware => {
                let message = self
                    .rng
                    .choose(&[
                        "File encryption process detected",
                        "Suspicious .crypto file extension created",
                        "Multiple file modifications in short timespan",
                        "Backup service connection failed",
                        "Volume shadow copy deletion attempted",
                    ])
                    .to_string();
                let level = *self.rng.choose(&[LogLevel::Error, LogLevel::Warn]);
                details.insert("process".to_string(), Value::from("file-encryption"));
                details.insert(
                    "files_affected".to_string(),
                    Value::from((self.rng.next_usize(5000) + 100) as u64),
                );
                details.insert(
                    "response_code".to_string(),
                    Value::from(*self.rng.choose(&[200u64, 403, 500])),
                );
                (message, level, "data_access", details)
            }
            IncidentKind::UsbExfiltration => {
                let message = self
                    .rng
                    .choose(&[
                        "USB device connection detected",
                        "Large file transfer to external device",
                        "Data Loss Prevention rule triggered",
                        "Unauthorized data copy attempt",
                        "USB device policy violation",
                    ])
                    .to_string();
                let level = *self.rng.choose(&[LogLevel::Warn, LogLevel::Error]);
                details.insert("device_type".to_string(), Value::from("USB_STORAGE"));
                details.insert(
                    "bytes_transferred".to_string(),
                    Value::from(self.rng.next_usize(5_000_000_000) as u64),
                );
                details.insert("response_code".to_string(), Value::from(403u64));
                (message, level, "data_access", details)
            }
            IncidentKind::SqlInjection => {
                let message = self
                    .rng
                    .choose(&[
                        "Malicious SQL command in HTTP request",
                        "Database query with suspicious pattern",
                        "Web application firewall triggered",
                        "Invalid SQL syntax in user input",
                        "Database access denied due to suspicious query",
                    ])
                    .to_string();
                let level = *self.rng.choose(&[LogLevel::Error, LogLevel::Warn]);
                details.insert("process".to_string(), Value::from("web-app"));
                details.insert(
                    "response_code".to_string(),
                    Value::from(*self.rng.choose(&[400u64, 403, 500])),
                );
                (message, level, "authentication", details)
            }
            IncidentKind::InsiderThreat => {
                let message = self
                    .rng
                    .choose(&[
                        "After-hours file access detected",
                        "Unusual data access pattern",
                        "Multiple sensitive file downloads",
                        "Access to restricted directory",
                        "Privilege escalation attempt",
                    ])
                    .to_string();
                details.insert("process".to_string(), Value::from("file-access"));
                details.insert("access_time".to_string(), Value::from("outside_hours"));
                details.insert("response_code".to_string(), Value::from(200u64));
                (message, LogLevel::Warn, "data_access", details)
            }
            IncidentKind::Phishing => {
                let message = self
                    .rng
                    .choose(&[
                        "Suspicious email link clicked",
                        "Credential harvesting attempt detected",
                        "Email security filter triggered",
                        "Malicious attachment quarantined",
                        "User reported suspicious email",
                    ])
                    .to_string();
                let level = *self.rng.choose(&[LogLevel::Warn, LogLevel::Info]);
                details.insert("process".to_string(), Value::from("email-security"));
                details.insert(
                    "email_subject".to_string(),
                    Value::from("Urgent: Verify Your Account"),
                );
                details.insert("response_code".to_string(), Value::from(200u64));
                (message, level, "authentication", details)
            }
            IncidentKind::Ddos => {
                let message = self
                    .rng
                    .choose(&[
                        "High volume of requests detected",
                        "Service response time degraded",
                        "Rate limiting activated",
                        "Connection pool exhausted",
                        "Load balancer failover triggered",
                    ])
                    .to_string();
                let level = *self.rng.choose(&[LogLevel::Error, LogLevel::Warn]);
                details.insert("process".to_string(), Value::from("web-server"));
                details.insert(
                    "requests_per_second".to_string(),
                    Value::from((self.rng.next_usize(10_000) + 1000) as u64),
                );
                details.insert(
                    "response_code".to_string(),
                    Value::from(*self.rng.choose(&[503u64, 504, 429])),
                );
                (message, level, "system_event", details)
            }
            _ => {
                let message = self.rng.choose(&LOG_MESSAGES).to_string();
                let level = *self
                    .rng
                    .choose(&[LogLevel::Error, LogLevel::Warn, LogLevel::Info]);
                details.insert(
                    "process".to_string(),
                    Value::from(*self.rng.choose(&["auth-service", "web-server", "database"])),
                );
                details.insert(
                    "response_code".to_string(),
                    Value::from(*self.rng.choose(&[200u64, 401, 403, 500])),
                );
                (message, level, "system_event", details)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            case_count: 10,
            standalone_alert_count: 20,
            standalone_log_count: 30,
            ..GeneratorConfig::default()
        }
    }

    fn ransomware_template() -> CaseTemplate {
        CATALOG
            .iter()
            .find(|t| t.kind == IncidentKind::Ransomware)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = Generator::new(small_config()).unwrap().generate();
        let b = Generator::new(small_config()).unwrap().generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Generator::new(small_config()).unwrap().generate();
        let mut config = small_config();
        config.seed = 99999;
        let b = Generator::new(config).unwrap().generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_catalog_fails_fast() {
        let result = Generator::with_templates(small_config(), vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_entity_counts() {
        let dataset = Generator::new(small_config()).unwrap().generate();

        assert_eq!(dataset.cases.len(), 10);
        // each case contributes 2-4 alerts and 3-10 logs on top of the
        // standalone entities
        assert!(dataset.alerts.len() >= 20 + 10 * 2);
        assert!(dataset.alerts.len() <= 20 + 10 * 4);
        assert!(dataset.logs.len() >= 30 + 10 * 3);
        assert!(dataset.logs.len() <= 30 + 10 * 10);
        assert_eq!(dataset.stats.alerts.total, dataset.alerts.len());
    }

    #[test]
    fn test_referential_integrity() {
        let dataset = Generator::new(small_config()).unwrap().generate();

        for case in &dataset.cases {
            for alert_id in &case.related_alerts {
                let alert = dataset
                    .alerts
                    .iter()
                    .find(|a| &a.id == alert_id)
                    .unwrap_or_else(|| panic!("missing alert {alert_id}"));
                assert!(alert.relates_to_case(&case.id));
            }
            for log_id in &case.related_logs {
                let log = dataset
                    .logs
                    .iter()
                    .find(|l| &l.id == log_id)
                    .unwrap_or_else(|| panic!("missing log {log_id}"));
                assert!(log.related_cases.contains(&case.id));
            }
        }
    }

    #[test]
    fn test_alert_status_invariant() {
        let dataset = Generator::new(small_config()).unwrap().generate();

        for alert in &dataset.alerts {
            match alert.status {
                AlertStatus::Open => {
                    assert!(alert.assigned_to.is_none(), "{}", alert.id);
                    assert!(alert.resolved_at.is_none());
                    assert!(alert.resolved_by.is_none());
                    assert!(alert.snooze_until.is_none());
                    assert!(alert.false_positive_reason.is_none());
                }
                AlertStatus::Investigating => {
                    assert!(alert.assigned_to.is_some());
                    assert!(alert.resolved_at.is_none());
                    assert!(alert.snooze_until.is_none());
                    assert!(alert.false_positive_reason.is_none());
                }
                AlertStatus::Resolved => {
                    assert!(alert.resolved_at.is_some() && alert.resolved_by.is_some());
                    assert!(alert.snooze_until.is_none());
                    assert!(alert.false_positive_reason.is_none());
                }
                AlertStatus::Snoozed => {
                    assert!(alert.snooze_until.is_some());
                    assert!(alert.resolved_at.is_none());
                    assert!(alert.false_positive_reason.is_none());
                }
                AlertStatus::FalsePositive => {
                    assert!(alert.false_positive_reason.is_some());
                    assert!(alert.resolved_at.is_none());
                    assert!(alert.snooze_until.is_none());
                }
            }
        }
    }

    #[test]
    fn test_alert_timeline_and_risk_bounds() {
        let dataset = Generator::new(small_config()).unwrap().generate();

        for alert in &dataset.alerts {
            assert!(!alert.timeline.is_empty());
            assert_eq!(alert.timeline[0].action, "Alert triggered");
            for pair in alert.timeline.windows(2) {
                assert!(pair[0].timestamp <= pair[1].timestamp);
            }
            assert!(alert.risk_score <= 100);
        }
    }

    #[test]
    fn test_case_timeline_state_machine() {
        let mut config = small_config();
        config.case_count = 50;
        let dataset = Generator::new(config).unwrap().generate();

        for case in &dataset.cases {
            assert_eq!(case.timeline[0].action, "Case created");
            assert_eq!(case.timeline[0].timestamp, case.created_at);

            let actions: Vec<&str> = case.timeline.iter().map(|e| e.action.as_str()).collect();
            match case.status {
                CaseStatus::Open => {
                    assert_eq!(actions, ["Case created"]);
                    assert!(case.assigned_to.is_none());
                }
                CaseStatus::InProgress => {
                    assert_eq!(actions, ["Case created", "Investigation started"]);
                }
                CaseStatus::Escalated => {
                    assert_eq!(
                        actions,
                        ["Case created", "Investigation started", "Case escalated"]
                    );
                }
                CaseStatus::Closed => {
                    assert_eq!(
                        actions,
                        ["Case created", "Investigation started", "Case resolved"]
                    );
                    assert_eq!(case.closed_at, Some(case.updated_at));
                    assert!(case.actual_hours.is_some());
                }
            }

            if case.status != CaseStatus::Open {
                assert!(case.assigned_to.is_some());
            }
            if case.status != CaseStatus::Closed {
                assert!(case.closed_at.is_none());
                assert!(case.actual_hours.is_none());
            }

            for pair in case.timeline.windows(2) {
                assert!(pair[0].timestamp < pair[1].timestamp);
            }
            let last = case.timeline.last().unwrap();
            assert_eq!(case.updated_at, last.timestamp);
            assert_eq!(case.priority, case.severity.priority());
        }
    }

    #[test]
    fn test_single_ransomware_case_scenario() {
        let config = GeneratorConfig {
            seed: 12345,
            case_count: 1,
            standalone_alert_count: 0,
            standalone_log_count: 0,
            ..GeneratorConfig::default()
        };
        let dataset = Generator::with_templates(config, vec![ransomware_template()])
            .unwrap()
            .generate();

        assert_eq!(dataset.cases.len(), 1);
        let case = &dataset.cases[0];
        assert_eq!(case.title, "Ransomware Infection - Production Servers");

        assert!((2..=4).contains(&dataset.alerts.len()));
        assert!((3..=10).contains(&dataset.logs.len()));
        assert_eq!(case.related_alerts.len(), dataset.alerts.len());

        for alert in &dataset.alerts {
            assert_eq!(alert.related_cases, vec![case.id.clone()]);
        }
        for log in &dataset.logs {
            assert_eq!(log.related_cases, vec![case.id.clone()]);
            assert!(!log.related_alerts.is_empty());
        }
    }

    #[test]
    fn test_raw_log_consistency() {
        let dataset = Generator::new(small_config()).unwrap().generate();

        for log in &dataset.logs {
            assert_eq!(
                log.raw_log,
                LogEntry::format_raw(log.timestamp, log.level, &log.message)
            );
        }
    }

    #[test]
    fn test_timestamps_bounded_by_anchor() {
        let config = small_config();
        let anchor = config.anchor;
        let dataset = Generator::new(config).unwrap().generate();

        for alert in &dataset.alerts {
            assert!(alert.timestamp < anchor);
        }
        for log in &dataset.logs {
            assert!(log.timestamp < anchor);
        }
        for case in &dataset.cases {
            assert!(case.created_at < anchor);
        }
    }

    #[test]
    fn test_case_alert_severity_stays_on_ladder() {
        let dataset = Generator::new(small_config()).unwrap().generate();

        for case in &dataset.cases {
            for alert_id in &case.related_alerts {
                let alert = dataset.alerts.iter().find(|a| &a.id == alert_id).unwrap();
                assert_ne!(alert.severity, AlertSeverity::Info);
            }
        }
    }

    #[test]
    fn test_word_lists_respected() {
        let dataset = Generator::new(small_config()).unwrap().generate();

        for alert in &dataset.alerts {
            assert!(templates::SOURCES.contains(&alert.source.as_str()));
            if let Some(ip) = &alert.source_ip {
                assert!(templates::SOURCE_IPS.contains(&ip.as_str()));
            }
        }
        for log in &dataset.logs {
            if let Some(user) = &log.user_id {
                assert!(templates::USERS.contains(&user.as_str()));
            }
        }
    }
}
