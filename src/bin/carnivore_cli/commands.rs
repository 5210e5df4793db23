// ABOUTME: Command implementations for carnivore-cli
// ABOUTME: Each command returns a JSON value that main prints

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use carnivore_tracker::config::EngineConfig;
use carnivore_tracker::intelligence::{
    calculate_all_metrics, classify_entries, detect_violation_type, estimate_vitamin_d_iu,
    total_vitamin_d_iu, SunExposure, TrophyCatalog, WeatherFactor,
};
use carnivore_tracker::models::{FoodEntry, UserProfile};
use carnivore_tracker::notifications::RecordingScheduler;
use carnivore_tracker::services::RecoveryService;
use carnivore_tracker::storage::InMemoryLogStore;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn metrics(
    config: &EngineConfig,
    entries_path: &Path,
    profile_path: Option<&Path>,
    sun_minutes: Option<f64>,
) -> Result<Value> {
    let entries: Vec<FoodEntry> = read_json(entries_path)?;
    let profile: Option<UserProfile> = profile_path.map(read_json::<UserProfile>).transpose()?;

    let metrics = calculate_all_metrics(&entries, profile.as_ref(), &config.bioavailability);
    let exposure = sun_minutes.map(|minutes| SunExposure::new(minutes, true));
    let vitamin_d_total = total_vitamin_d_iu(&metrics, exposure.as_ref(), &config.vitamin_d);

    Ok(json!({
        "metrics": metrics,
        "vitamin_d_total_iu": vitamin_d_total,
        "violations": classify_entries(&entries),
    }))
}

pub fn classify(text: &str) -> Value {
    json!({
        "text": text,
        "category": detect_violation_type(text),
    })
}

pub async fn protocol(config: &EngineConfig, text: &str, hours: Option<u32>) -> Result<Value> {
    let logs = Arc::new(InMemoryLogStore::new());
    let scheduler = Arc::new(RecordingScheduler::new());
    let service = RecoveryService::new(logs, Arc::clone(&scheduler), config.recovery.clone());

    let now = Utc::now();
    let mut report = service.report_violation(text, now).await?;
    if let (Some(hours), Some(_)) = (hours, report.protocol.as_ref()) {
        report.protocol = Some(
            service
                .update_fasting_hours(report.log_date, hours, now)
                .await?,
        );
    }

    Ok(json!({
        "report": report,
        "reminders": scheduler.scheduled().await,
    }))
}

pub fn exposure(
    minutes: f64,
    sunny: bool,
    uv_index: Option<f64>,
    cloud_cover_percent: Option<f64>,
    exposure_fraction: f64,
) -> SunExposure {
    let weather = (uv_index.is_some() || cloud_cover_percent.is_some()).then_some(WeatherFactor {
        uv_index,
        cloud_cover_percent,
    });
    SunExposure {
        minutes,
        sunny,
        exposure_fraction,
        weather,
    }
}

pub fn vitamin_d(config: &EngineConfig, exposure: SunExposure) -> Value {
    json!({
        "exposure": exposure,
        "estimated_iu": estimate_vitamin_d_iu(&exposure, &config.vitamin_d),
        "ceiling_iu": config.vitamin_d.ceiling_iu(),
    })
}

pub fn trophies() -> Value {
    json!(TrophyCatalog::default_catalog().definitions())
}
