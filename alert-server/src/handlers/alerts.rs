//! Alert feed handlers
//!
//! Feed the simulated scan through the detection engine and publish the
//! surviving verdicts as GeoJSON features. Sites the engine rejects are
//! dropped here without a trace in the payload.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::models::{region_for, AlertFeature};
use crate::scenarios::simulated_scan;

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<AlertFeature>,
}

/// Current alert feed
pub async fn list() -> Json<AlertsResponse> {
    let alerts = current_alerts();
    tracing::debug!("scan produced {} alerts", alerts.len());
    Json(AlertsResponse { alerts })
}

pub(crate) fn current_alerts() -> Vec<AlertFeature> {
    let now = Utc::now();
    let scan_tag = now.format("%Y%m%d").to_string();

    simulated_scan()
        .iter()
        .enumerate()
        .filter_map(|(idx, scenario)| {
            let verdict = scenario.evaluate()?;
            let alert_id = format!("CGD-{}-{}-{:03}", scan_tag, scenario.site_code, idx + 1);
            let region = scenario
                .region
                .unwrap_or_else(|| region_for(scenario.lat, scenario.lon));

            Some(AlertFeature::from_verdict(
                alert_id,
                &verdict,
                scenario.lat,
                scenario.lon,
                scenario.mapped_area_ha,
                region.to_string(),
                scenario.in_protected_area(),
                scenario.notes.iter().map(|n| n.to_string()).collect(),
                now,
            ))
        })
        .collect()
}

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SensorStatus {
    pub sentinel_1: &'static str,
    pub sentinel_2: &'static str,
    pub viirs: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub scan_date: String,
    pub total_alerts: usize,
    pub total_area_ha: f32,
    pub total_carbon_tonnes: f32,
    pub sensor_status: SensorStatus,
}

/// Scan-level roll-up of the current alert feed
pub async fn summary() -> Json<SummaryResponse> {
    let alerts = current_alerts();

    Json(SummaryResponse {
        scan_date: Utc::now().format("%Y-%m-%d").to_string(),
        total_alerts: alerts.len(),
        total_area_ha: alerts.iter().map(|a| a.properties.area_affected_ha).sum(),
        total_carbon_tonnes: alerts
            .iter()
            .map(|a| a.properties.carbon_estimate_tonnes)
            .sum(),
        sensor_status: SensorStatus {
            sentinel_1: "active",
            sentinel_2: "active",
            viirs: "active",
        },
    })
}

// ============================================================================
// TESTS
// ============================================================================
