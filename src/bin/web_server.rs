use anyhow::Result;
use axum::{
    Router,
    extract::{Json, Path, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use socdash::{
    Alert, AlertAction, Case, DashboardStats, Generator, GeneratorConfig, LogEntry,
    apply_alert_action, compute_stats,
};

/// Only the alert collection mutates after startup. The mutation function is
/// pure; this lock is the single writer that serializes concurrent requests.
struct AppState {
    anchor: DateTime<Utc>,
    alerts: RwLock<Vec<Alert>>,
    logs: Vec<LogEntry>,
    cases: Vec<Case>,
}

#[derive(Deserialize)]
struct AlertActionRequest {
    action: AlertAction,
}

#[derive(Serialize)]
struct AlertActionResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<Alert>,
}

#[derive(Serialize)]
struct DashboardResponse {
    alerts: Vec<Alert>,
    logs: Vec<LogEntry>,
    cases: Vec<Case>,
    stats: DashboardStats,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("🚀 Starting SOC Dashboard Web Server");

    let config = match GeneratorConfig::from_file("config.toml") {
        Ok(config) => {
            info!("✅ Loaded configuration from config.toml");
            config
        }
        Err(e) => {
            info!("Failed to load config: {}. Using default configuration.", e);
            GeneratorConfig::default()
        }
    };

    let anchor = config.anchor;
    info!("🎲 Generating dataset with seed {}", config.seed);
    let dataset = Generator::new(config)?.generate();
    info!(
        "✅ Dataset ready: {} cases, {} alerts, {} logs",
        dataset.cases.len(),
        dataset.alerts.len(),
        dataset.logs.len()
    );

    let state = AppState {
        anchor,
        alerts: RwLock::new(dataset.alerts),
        logs: dataset.logs,
        cases: dataset.cases,
    };

    let app = Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/alerts", get(get_alerts))
        .route("/api/logs", get(get_logs))
        .route("/api/cases", get(get_cases))
        .route("/api/stats", get(get_stats))
        .route("/api/alerts/:id/action", post(alert_action))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(Arc::new(state));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!("🌐 Web server running on http://localhost:3000");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn get_dashboard(State(state): State<Arc<AppState>>) -> ResponseJson<DashboardResponse> {
    let alerts = state.alerts.read().await.clone();
    let stats = compute_stats(&alerts, &state.logs, &state.cases, state.anchor);

    ResponseJson(DashboardResponse {
        alerts,
        logs: state.logs.clone(),
        cases: state.cases.clone(),
        stats,
    })
}

async fn get_alerts(State(state): State<Arc<AppState>>) -> ResponseJson<Vec<Alert>> {
    ResponseJson(state.alerts.read().await.clone())
}

async fn get_logs(State(state): State<Arc<AppState>>) -> ResponseJson<Vec<LogEntry>> {
    ResponseJson(state.logs.clone())
}

async fn get_cases(State(state): State<Arc<AppState>>) -> ResponseJson<Vec<Case>> {
    ResponseJson(state.cases.clone())
}

/// Stats are recomputed from the current collections on every request, so
/// they never go stale after alert mutations.
async fn get_stats(State(state): State<Arc<AppState>>) -> ResponseJson<DashboardStats> {
    let alerts = state.alerts.read().await;
    let stats = compute_stats(&alerts, &state.logs, &state.cases, state.anchor);
    ResponseJson(stats)
}

async fn alert_action(
    State(state): State<Arc<AppState>>,
    Path(alert_id): Path<String>,
    Json(request): Json<AlertActionRequest>,
) -> ResponseJson<AlertActionResponse> {
    info!(
        "Applying action '{}' to alert {}",
        request.action.as_str(),
        alert_id
    );

    let mut alerts = state.alerts.write().await;
    if !alerts.iter().any(|a| a.id == alert_id) {
        error!("❌ Alert not found: {}", alert_id);
        return ResponseJson(AlertActionResponse {
            success: false,
            message: format!("Alert not found: {}", alert_id),
            alert: None,
        });
    }

    let updated = apply_alert_action(&alerts, &alert_id, request.action, Utc::now());
    let alert = updated.iter().find(|a| a.id == alert_id).cloned();
    *alerts = updated;

    info!("✅ Alert {} marked as {}", alert_id, request.action.as_str());
    ResponseJson(AlertActionResponse {
        success: true,
        message: format!("Alert marked as {}", request.action.as_str()),
        alert,
    })
}
