use anyhow::Result;
use clap::Parser;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use socdash::{Generator, GeneratorConfig};

#[derive(Parser)]
#[command(name = "dataset-export")]
#[command(about = "Generate the dashboard dataset and export it as JSONL files")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the configured seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(short, long, default_value = "export")]
    output: PathBuf,

    /// Pretty-print stats.json
    #[arg(short, long)]
    pretty: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    info!("🚀 Starting dataset export");

    let mut config = match GeneratorConfig::from_file(&args.config.to_string_lossy()) {
        Ok(config) => {
            info!("✅ Loaded configuration from {:?}", args.config);
            config
        }
        Err(e) => {
            log::warn!(
                "Failed to load config from {:?}: {}. Using default configuration.",
                args.config,
                e
            );
            GeneratorConfig::default()
        }
    };

    if let Some(seed) = args.seed {
        info!("🎲 Overriding seed: {}", seed);
        config.seed = seed;
    }

    let dataset = Generator::new(config)?.generate();
    info!(
        "✅ Generated {} cases, {} alerts, {} logs",
        dataset.cases.len(),
        dataset.alerts.len(),
        dataset.logs.len()
    );

    tokio::fs::create_dir_all(&args.output).await?;

    write_jsonl(&args.output.join("cases.jsonl"), &dataset.cases).await?;
    write_jsonl(&args.output.join("alerts.jsonl"), &dataset.alerts).await?;
    write_jsonl(&args.output.join("logs.jsonl"), &dataset.logs).await?;

    let stats_json = if args.pretty {
        serde_json::to_string_pretty(&dataset.stats)?
    } else {
        serde_json::to_string(&dataset.stats)?
    };
    tokio::fs::write(args.output.join("stats.json"), stats_json).await?;

    info!("🎉 Export complete: {:?}", args.output);

    Ok(())
}

async fn write_jsonl<T: Serialize>(path: &std::path::Path, items: &[T]) -> Result<()> {
    let mut lines = String::new();
    for item in items {
        lines.push_str(&serde_json::to_string(item)?);
        lines.push('\n');
    }
    tokio::fs::write(path, lines).await?;
    info!("📄 Wrote {} records to {:?}", items.len(), path);
    Ok(())
}
