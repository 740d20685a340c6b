use anyhow::Result;
use log::info;

use socdash::{Generator, GeneratorConfig};

fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Generating security-operations dashboard dataset...");

    let config = GeneratorConfig::from_file("config.toml").unwrap_or_else(|e| {
        log::warn!(
            "Failed to load config.toml: {}. Using default configuration.",
            e
        );
        GeneratorConfig::default()
    });

    info!(
        "🎲 Seed: {}, cases: {}, standalone alerts: {}, standalone logs: {}",
        config.seed, config.case_count, config.standalone_alert_count, config.standalone_log_count
    );

    let dataset = Generator::new(config)?.generate();

    info!(
        "✅ Generated {} cases, {} alerts, {} logs",
        dataset.cases.len(),
        dataset.alerts.len(),
        dataset.logs.len()
    );
    info!(
        "📊 Alerts: {} open, {} critical, {} resolved in last 24h",
        dataset.stats.alerts.open, dataset.stats.alerts.critical, dataset.stats.alerts.resolved_24h
    );
    info!(
        "📊 Cases: {} open, {} in progress, {} active incidents",
        dataset.stats.cases.open,
        dataset.stats.cases.in_progress,
        dataset.stats.system.active_incidents
    );
    info!(
        "📊 Logs: {} in last 24h, {} errors, {} warnings",
        dataset.stats.logs.total_24h, dataset.stats.logs.errors, dataset.stats.logs.warnings
    );

    Ok(())
}
