pub mod actions;
pub mod alert;
pub mod case;
pub mod config;
pub mod generator;
pub mod log_entry;
pub mod rng;
pub mod stats;
pub mod templates;

pub use actions::{AlertAction, apply_alert_action};
pub use alert::{Alert, AlertCategory, AlertSeverity, AlertStatus, Indicator, TimelineEntry};
pub use case::{Case, CaseStatus};
pub use config::GeneratorConfig;
pub use generator::{Dataset, Generator};
pub use log_entry::{LogEntry, LogLevel};
pub use stats::{DashboardStats, compute_stats};
pub use templates::{CATALOG, CaseTemplate, IncidentKind};
