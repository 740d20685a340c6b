use crate::alert::AlertSeverity;

/// Shared vocabulary the generator draws from.
pub const SOURCES: [&str; 10] = [
    "Firewall",
    "IDS/IPS",
    "SIEM",
    "Endpoint Protection",
    "Web Application Firewall",
    "DNS Security",
    "Email Security",
    "Network Monitor",
    "Database Security",
    "Cloud Security",
];

pub const SOURCE_IPS: [&str; 10] = [
    "192.168.1.100",
    "10.0.0.45",
    "172.16.0.23",
    "203.0.113.15",
    "198.51.100.42",
    "192.168.50.10",
    "10.10.10.5",
    "172.31.1.200",
    "203.0.113.200",
    "198.51.100.99",
];

pub const DESTINATION_IPS: [&str; 10] = [
    "192.168.1.1",
    "10.0.0.1",
    "172.16.0.1",
    "8.8.8.8",
    "1.1.1.1",
    "192.168.1.254",
    "10.0.0.254",
    "172.16.0.254",
    "208.67.222.222",
    "9.9.9.9",
];

pub const USERS: [&str; 5] = [
    "john.doe",
    "jane.smith",
    "admin",
    "security.analyst",
    "network.admin",
];

pub const ANALYSTS: [&str; 5] = [
    "Sarah Johnson",
    "Mike Chen",
    "Alex Rodriguez",
    "Lisa Wang",
    "David Kumar",
];

pub const ALERT_TITLES: [&str; 15] = [
    "Suspicious Login Attempt",
    "Brute Force Attack Detected",
    "Malware Detection",
    "DDoS Attack in Progress",
    "Unauthorized Access Attempt",
    "Data Exfiltration Detected",
    "Privilege Escalation",
    "SQL Injection Attempt",
    "Network Anomaly Detected",
    "Suspicious File Upload",
    "Failed Authentication Spike",
    "Port Scan Detected",
    "Unusual Network Traffic",
    "Ransomware Indicators",
    "Command Injection Attempt",
];

pub const LOG_MESSAGES: [&str; 14] = [
    "User authentication failed",
    "Network connection established",
    "File access denied",
    "Service started successfully",
    "Database query executed",
    "API request processed",
    "Cache cleared",
    "Session expired",
    "Permission denied",
    "Resource not found",
    "Service unavailable",
    "Connection timeout",
    "Invalid request format",
    "Rate limit exceeded",
];

pub const ALERT_TAGS: [&str; 5] = ["malware", "bruteforce", "injection", "ddos", "phishing"];

pub const PROCESSES: [&str; 4] = ["auth-service", "web-server", "database", "api-gateway"];

pub const EVENT_TYPES: [&str; 4] = [
    "authentication",
    "authorization",
    "data_access",
    "system_event",
];

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Incident family a template belongs to. Drives the contextual alert
/// descriptions and log messages generated for its cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentKind {
    Ransomware,
    UsbExfiltration,
    PrivilegeEscalation,
    SqlInjection,
    InsiderThreat,
    Phishing,
    Ddos,
    CryptoMining,
    SshBruteForce,
    VpnAnomaly,
    EmailCompromise,
    CloudLeak,
}

/// A reusable incident narrative: everything needed to spin up one case with
/// contextually consistent alerts and logs.
#[derive(Debug, Clone)]
pub struct CaseTemplate {
    pub kind: IncidentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub severity: AlertSeverity,
    pub tags: &'static [&'static str],
    pub alert_types: &'static [&'static str],
    pub estimated_hours: u32,
}

/// The fixed incident catalog.
pub const CATALOG: &[CaseTemplate] = &[
    CaseTemplate {
        kind: IncidentKind::Ransomware,
        title: "Ransomware Infection - Production Servers",
        description: "Multiple production servers showing signs of ransomware encryption activity. File systems compromised with .crypto extension files detected.",
        category: "Security Incident",
        severity: AlertSeverity::Critical,
        tags: &["ransomware", "malware", "production"],
        alert_types: &["Malware Detection", "Suspicious File Upload", "Ransomware Indicators"],
        estimated_hours: 72,
    },
    CaseTemplate {
        kind: IncidentKind::UsbExfiltration,
        title: "Data Exfiltration via External USB",
        description: "Unauthorized data transfer detected to external USB device. Sensitive customer data may have been compromised.",
        category: "Data Breach",
        severity: AlertSeverity::High,
        tags: &["data-breach", "exfiltration", "usb"],
        alert_types: &["Data Exfiltration Detected", "Unauthorized Access Attempt"],
        estimated_hours: 48,
    },
    CaseTemplate {
        kind: IncidentKind::PrivilegeEscalation,
        title: "Privilege Escalation Attack",
        description: "Standard user account gained administrative privileges through exploitation of system vulnerability.",
        category: "System Compromise",
        severity: AlertSeverity::High,
        tags: &["privilege-escalation", "vulnerability"],
        alert_types: &["Privilege Escalation", "Unauthorized Access Attempt"],
        estimated_hours: 24,
    },
    CaseTemplate {
        kind: IncidentKind::SqlInjection,
        title: "SQL Injection on Customer Portal",
        description: "Web application vulnerability exploited to access customer database. Potential unauthorized data access detected.",
        category: "Security Incident",
        severity: AlertSeverity::High,
        tags: &["sql-injection", "web-app", "database"],
        alert_types: &["SQL Injection Attempt", "Database Anomaly Detected"],
        estimated_hours: 36,
    },
    CaseTemplate {
        kind: IncidentKind::InsiderThreat,
        title: "Insider Threat - Unusual Data Access",
        description: "Employee accessing large volumes of sensitive data outside normal work hours and responsibilities.",
        category: "Policy Violation",
        severity: AlertSeverity::Medium,
        tags: &["insider-threat", "policy-violation"],
        alert_types: &["Unusual Network Traffic", "Unauthorized Access Attempt"],
        estimated_hours: 20,
    },
    CaseTemplate {
        kind: IncidentKind::Phishing,
        title: "Phishing Campaign Targeting Employees",
        description: "Coordinated phishing attack targeting multiple employees with credential harvesting attempts.",
        category: "Security Incident",
        severity: AlertSeverity::Medium,
        tags: &["phishing", "social-engineering"],
        alert_types: &["Suspicious Login Attempt", "Failed Authentication Spike"],
        estimated_hours: 16,
    },
    CaseTemplate {
        kind: IncidentKind::Ddos,
        title: "DDoS Attack on Web Services",
        description: "Distributed denial of service attack overwhelming web infrastructure, causing service unavailability.",
        category: "Security Incident",
        severity: AlertSeverity::High,
        tags: &["ddos", "availability"],
        alert_types: &["DDoS Attack in Progress", "Network Anomaly Detected"],
        estimated_hours: 12,
    },
    CaseTemplate {
        kind: IncidentKind::CryptoMining,
        title: "Cryptocurrency Mining Malware",
        description: "Unauthorized cryptocurrency mining software detected on corporate workstations, degrading system performance.",
        category: "System Compromise",
        severity: AlertSeverity::Medium,
        tags: &["cryptomining", "malware"],
        alert_types: &["Malware Detection", "Unusual Network Traffic"],
        estimated_hours: 18,
    },
    CaseTemplate {
        kind: IncidentKind::SshBruteForce,
        title: "Brute Force Attack on SSH Services",
        description: "Persistent brute force attempts targeting SSH services across multiple servers from distributed IP addresses.",
        category: "Security Incident",
        severity: AlertSeverity::Medium,
        tags: &["brute-force", "ssh"],
        alert_types: &["Brute Force Attack Detected", "Failed Authentication Spike"],
        estimated_hours: 14,
    },
    CaseTemplate {
        kind: IncidentKind::VpnAnomaly,
        title: "Unauthorized VPN Access",
        description: "VPN connection established from suspicious geographic location using compromised credentials.",
        category: "Security Incident",
        severity: AlertSeverity::High,
        tags: &["vpn", "geo-anomaly"],
        alert_types: &["Suspicious Login Attempt", "Network Anomaly Detected"],
        estimated_hours: 24,
    },
    CaseTemplate {
        kind: IncidentKind::EmailCompromise,
        title: "Email Server Compromise",
        description: "Email server showing signs of compromise with unauthorized mail relay activity and suspicious outbound traffic.",
        category: "System Compromise",
        severity: AlertSeverity::High,
        tags: &["email", "server-compromise"],
        alert_types: &["Malware Detection", "Unusual Network Traffic"],
        estimated_hours: 40,
    },
    CaseTemplate {
        kind: IncidentKind::CloudLeak,
        title: "Cloud Storage Data Leak",
        description: "Misconfigured cloud storage bucket exposing sensitive customer data to public internet access.",
        category: "Data Breach",
        severity: AlertSeverity::Critical,
        tags: &["cloud", "data-leak", "misconfiguration"],
        alert_types: &["Data Exfiltration Detected", "Unauthorized Access Attempt"],
        estimated_hours: 32,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        assert_eq!(CATALOG.len(), 12);
        for template in CATALOG {
            assert!(!template.alert_types.is_empty());
            assert!(!template.tags.is_empty());
            assert!(template.estimated_hours >= 12);
        }
    }

    #[test]
    fn test_catalog_titles_unique() {
        let mut titles: Vec<_> = CATALOG.iter().map(|t| t.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), CATALOG.len());
    }
}
