//! Detection handlers
//!
//! The boundary where caller-supplied sensor metrics meet the engine.
//! Payload shape and ranges are checked here; the classifiers themselves
//! never error - an observation that does not clear the gates comes back
//! as `detected: false` with a null verdict, which is a normal 200.

use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use canopyguard_core::{
    classify_deforestation, classify_fire, classify_mining, DeforestationObservation,
    FireObservation, MiningObservation, Verdict, ViirsConfidence,
};

use crate::AppResult;

// ============================================================================
// RESPONSE
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub event_id: Uuid,
    pub detected: bool,
    /// Null whenever the observation does not clear the minimum gates
    pub verdict: Option<Verdict>,
}

impl DetectResponse {
    fn new(verdict: Option<Verdict>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            detected: verdict.is_some(),
            verdict,
        }
    }
}

// ============================================================================
// DEFORESTATION
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct DeforestationRequest {
    #[validate(range(min = -2.0, max = 2.0))]
    pub delta_ndvi: f32,
    #[validate(range(min = -2.0, max = 2.0))]
    pub delta_evi: f32,
    pub sar_vh_change_db: f32,
    pub sar_vv_change_db: f32,
    pub persistence_windows: u32,
    #[validate(range(min = 0.0))]
    pub area_ha: f32,
    #[serde(default)]
    pub in_protected_area: bool,
}

pub async fn deforestation(
    Json(req): Json<DeforestationRequest>,
) -> AppResult<Json<DetectResponse>> {
    req.validate()?;

    let obs = DeforestationObservation {
        delta_ndvi: req.delta_ndvi,
        delta_evi: req.delta_evi,
        sar_vh_change_db: req.sar_vh_change_db,
        sar_vv_change_db: req.sar_vv_change_db,
        persistence_windows: req.persistence_windows,
        area_ha: req.area_ha,
        in_protected_area: req.in_protected_area,
    };

    Ok(Json(DetectResponse::new(classify_deforestation(&obs))))
}

// ============================================================================
// MINING
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct MiningRequest {
    #[validate(range(min = -1.0, max = 1.0))]
    pub bsi: f32,
    #[validate(range(min = -2.0, max = 2.0))]
    pub bsi_change: f32,
    #[serde(default)]
    pub has_water_adjacent: bool,
    #[serde(default)]
    pub has_dihedral_increase: bool,
    #[validate(range(min = 0.0))]
    pub dist_to_road_m: f32,
    #[serde(default)]
    pub in_licensed_concession: bool,
    #[validate(range(min = 0.0))]
    pub area_ha: f32,
}

pub async fn mining(Json(req): Json<MiningRequest>) -> AppResult<Json<DetectResponse>> {
    req.validate()?;

    let obs = MiningObservation {
        bsi: req.bsi,
        bsi_change: req.bsi_change,
        has_water_adjacent: req.has_water_adjacent,
        has_dihedral_increase: req.has_dihedral_increase,
        dist_to_road_m: req.dist_to_road_m,
        in_licensed_concession: req.in_licensed_concession,
        area_ha: req.area_ha,
    };

    Ok(Json(DetectResponse::new(classify_mining(&obs))))
}

// ============================================================================
// FIRE
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct FireRequest {
    /// Categorical sensor label; unrecognized values score a zero base
    pub viirs_confidence_level: String,
    #[validate(range(min = 0.0, max = 10000.0))]
    pub frp_mw: f32,
    pub persistence_passes: u32,
    #[validate(range(min = 0.0))]
    pub spread_rate_ha_6h: f32,
    #[serde(default)]
    pub in_protected_area: bool,
}

pub async fn fire(Json(req): Json<FireRequest>) -> AppResult<Json<DetectResponse>> {
    req.validate()?;

    let obs = FireObservation {
        viirs_confidence: ViirsConfidence::from_label(&req.viirs_confidence_level),
        frp_mw: req.frp_mw,
        persistence_passes: req.persistence_passes,
        spread_rate_ha_6h: req.spread_rate_ha_6h,
        in_protected_area: req.in_protected_area,
    };

    Ok(Json(DetectResponse::new(classify_fire(&obs))))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use canopyguard_core::SeverityTier;

    #[test]
    fn test_deforestation_roundtrip() {
        let req = DeforestationRequest {
            delta_ndvi: -0.41,
            delta_evi: -0.35,
            sar_vh_change_db: -4.2,
            sar_vv_change_db: -3.1,
            persistence_windows: 3,
            area_ha: 620.4,
            in_protected_area: true,
        };
        let Json(resp) = tokio_test::block_on(deforestation(Json(req))).unwrap();

        assert!(resp.detected);
        let verdict = resp.verdict.unwrap();
        assert_eq!(verdict.confidence, 1.0);
        assert_eq!(verdict.severity, SeverityTier::Critical);
        assert_eq!(verdict.area_ha, Some(620.4));
    }

    #[test]
    fn test_absent_verdict_is_a_normal_response() {
        let req = FireRequest {
            viirs_confidence_level: "low".to_string(),
            frp_mw: 5.0,
            persistence_passes: 1,
            spread_rate_ha_6h: 0.0,
            in_protected_area: false,
        };
        let Json(resp) = tokio_test::block_on(fire(Json(req))).unwrap();

        assert!(!resp.detected);
        assert!(resp.verdict.is_none());
    }

    #[test]
    fn test_unknown_viirs_label_reaches_the_engine_as_unknown() {
        let req = FireRequest {
            viirs_confidence_level: "garbled".to_string(),
            frp_mw: 150.0,
            persistence_passes: 4,
            spread_rate_ha_6h: 0.0,
            in_protected_area: false,
        };
        // Base 0.0 + 0.20 + 0.15 = 0.35: exactly at the floor, survives
        let Json(resp) = tokio_test::block_on(fire(Json(req))).unwrap();
        assert!(resp.detected);
        assert_eq!(resp.verdict.unwrap().confidence, 0.35);
    }

    #[test]
    fn test_licensed_concession_roundtrip_is_absent() {
        let req = MiningRequest {
            bsi: 0.22,
            bsi_change: 0.15,
            has_water_adjacent: true,
            has_dihedral_increase: true,
            dist_to_road_m: 450.0,
            in_licensed_concession: true,
            area_ha: 12.5,
        };
        let Json(resp) = tokio_test::block_on(mining(Json(req))).unwrap();
        assert!(!resp.detected);
    }

    #[test]
    fn test_out_of_range_metrics_are_rejected_at_the_boundary() {
        let req = MiningRequest {
            bsi: 3.0, // BSI is an index, bounded
            bsi_change: 0.15,
            has_water_adjacent: false,
            has_dihedral_increase: false,
            dist_to_road_m: 450.0,
            in_licensed_concession: false,
            area_ha: 12.5,
        };
        assert!(tokio_test::block_on(mining(Json(req))).is_err());
    }
}
