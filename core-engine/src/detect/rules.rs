//! Detection Rules & Thresholds
//!
//! Score weights and classification cut-offs for the three hazard kinds.
//! No classification logic here - constants and config only.

use serde::{Deserialize, Serialize};

// ============================================================================
// SCORE WEIGHTS (Constants - fixed evidence contributions)
// ============================================================================

// --- Deforestation ---

/// Strong paired NDVI/EVI drop
pub const SPECTRAL_STRONG_SCORE: f32 = 0.30;
/// Moderate paired NDVI/EVI drop
pub const SPECTRAL_MODERATE_SCORE: f32 = 0.18;
/// Paired VH/VV backscatter collapse
pub const STRUCTURAL_SCORE: f32 = 0.30;
/// Anomaly confirmed across enough observation windows
pub const PERSISTENCE_WINDOW_SCORE: f32 = 0.20;
/// Running-score factor for single-date observations
pub const SINGLE_WINDOW_FACTOR: f32 = 0.5;
/// Mapped extent past the area-bonus threshold
pub const AREA_BONUS_SCORE: f32 = 0.10;
/// Mapped extent past the large-area threshold (stacks with the bonus)
pub const LARGE_AREA_SCORE: f32 = 0.20;
/// Escalation inside protected areas, capped at 1.0
pub const PROTECTED_AREA_SCORE: f32 = 0.10;

// --- Mining ---

/// Bare-soil signature (mandatory evidence)
pub const BARE_SOIL_SCORE: f32 = 0.25;
/// Standing water adjacent to the disturbance
pub const WATER_ADJACENT_SCORE: f32 = 0.15;
/// SAR dihedral return increase
pub const DIHEDRAL_SCORE: f32 = 0.15;
/// Disturbance close to a mapped road
pub const ROAD_NEAR_SCORE: f32 = 0.15;
/// Disturbance within haul distance of a road
pub const ROAD_MID_SCORE: f32 = 0.08;
/// Penalty for sites far from any road
pub const ROAD_FAR_PENALTY: f32 = 0.10;
/// Site outside every licensed concession
pub const UNLICENSED_SCORE: f32 = 0.10;

// --- Fire ---

/// Base confidence per categorical sensor label
pub const VIIRS_HIGH_BASE: f32 = 0.70;
pub const VIIRS_NOMINAL_BASE: f32 = 0.50;
pub const VIIRS_LOW_BASE: f32 = 0.25;

/// FRP magnitude contributions
pub const FRP_EXTREME_SCORE: f32 = 0.20;
pub const FRP_STRONG_SCORE: f32 = 0.12;
pub const FRP_MODERATE_SCORE: f32 = 0.05;
/// Penalty when FRP is below the weakest band
pub const FRP_WEAK_PENALTY: f32 = 0.10;

/// Hotspot confirmed across enough passes
pub const PERSISTENCE_PASS_SCORE: f32 = 0.15;
/// Hotspot seen on a pair of passes
pub const PERSISTENCE_PAIR_SCORE: f32 = 0.08;
/// Running-score factor for single-pass detections
pub const SINGLE_PASS_FACTOR: f32 = 0.6;

// ============================================================================
// DEFORESTATION RULES
// ============================================================================

/// Gates and cut-offs for the deforestation classifier (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeforestationRules {
    /// NDVI drop for the strong spectral tier
    pub strong_ndvi_drop: f32,
    /// EVI drop for the strong spectral tier
    pub strong_evi_drop: f32,
    /// NDVI drop for the moderate spectral tier
    pub moderate_ndvi_drop: f32,
    /// EVI drop for the moderate spectral tier
    pub moderate_evi_drop: f32,
    /// VH backscatter drop marking structural loss (dB)
    pub vh_drop_db: f32,
    /// VV backscatter drop marking structural loss (dB)
    pub vv_drop_db: f32,
    /// Windows needed to count as persistent
    pub persistence_min_windows: u32,
    /// Minimum mappable unit - smaller anomalies are discarded outright
    pub min_mappable_ha: f32,
    /// Extent earning the area bonus
    pub area_bonus_ha: f32,
    /// Extent earning the large-area bonus on top
    pub large_area_ha: f32,
    /// At or above = Critical
    pub critical_min: f32,
    /// At or above = High
    pub high_min: f32,
    /// Below this no verdict is issued
    pub verdict_min: f32,
}

impl Default for DeforestationRules {
    fn default() -> Self {
        Self {
            strong_ndvi_drop: -0.15,
            strong_evi_drop: -0.12,
            moderate_ndvi_drop: -0.10,
            moderate_evi_drop: -0.08,
            vh_drop_db: -3.0,
            vv_drop_db: -2.0,
            persistence_min_windows: 2,
            min_mappable_ha: 1.0,
            area_bonus_ha: 5.0,
            large_area_ha: 50.0,
            critical_min: 0.75,
            high_min: 0.55,
            verdict_min: 0.35,
        }
    }
}

impl DeforestationRules {
    /// High sensitivity - lower cut-offs, more alerts
    pub fn high_sensitivity() -> Self {
        Self {
            critical_min: 0.65,
            high_min: 0.45,
            verdict_min: 0.25,
            ..Default::default()
        }
    }

    /// Low sensitivity - higher cut-offs, fewer alerts
    pub fn low_sensitivity() -> Self {
        Self {
            critical_min: 0.85,
            high_min: 0.65,
            verdict_min: 0.45,
            ..Default::default()
        }
    }
}

// ============================================================================
// MINING RULES
// ============================================================================

/// Gates and cut-offs for the mining classifier (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningRules {
    /// Minimum BSI for the mandatory bare-soil signature
    pub bsi_min: f32,
    /// Minimum BSI change for the mandatory bare-soil signature
    pub bsi_change_min: f32,
    /// Road distance counting as near (meters)
    pub road_near_m: f32,
    /// Road distance counting as haul range (meters)
    pub road_mid_m: f32,
    /// At or above = Critical
    pub critical_min: f32,
    /// At or above = High
    pub high_min: f32,
    /// Below this no verdict is issued
    pub verdict_min: f32,
}

impl Default for MiningRules {
    fn default() -> Self {
        Self {
            bsi_min: 0.15,
            bsi_change_min: 0.10,
            road_near_m: 500.0,
            road_mid_m: 2000.0,
            critical_min: 0.70,
            high_min: 0.50,
            verdict_min: 0.30,
        }
    }
}

impl MiningRules {
    /// High sensitivity - lower cut-offs, more alerts
    pub fn high_sensitivity() -> Self {
        Self {
            critical_min: 0.60,
            high_min: 0.40,
            verdict_min: 0.20,
            ..Default::default()
        }
    }

    /// Low sensitivity - higher cut-offs, fewer alerts
    pub fn low_sensitivity() -> Self {
        Self {
            critical_min: 0.80,
            high_min: 0.60,
            verdict_min: 0.40,
            ..Default::default()
        }
    }
}

// ============================================================================
// FIRE RULES
// ============================================================================

/// Gates and cut-offs for the fire classifier (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireRules {
    /// FRP band edges (megawatts)
    pub frp_extreme_mw: f32,
    pub frp_strong_mw: f32,
    pub frp_moderate_mw: f32,
    /// Passes needed to count as confirmed
    pub persistence_min_passes: u32,
    /// Spread rate forcing Critical + immediate (ha / 6h)
    pub spread_critical_ha_6h: f32,
    /// Spread rate forcing High (ha / 6h)
    pub spread_high_ha_6h: f32,
    /// Below this no verdict is issued (checked last, after escalation)
    pub verdict_min: f32,
}

impl Default for FireRules {
    fn default() -> Self {
        Self {
            frp_extreme_mw: 100.0,
            frp_strong_mw: 50.0,
            frp_moderate_mw: 10.0,
            persistence_min_passes: 3,
            spread_critical_ha_6h: 500.0,
            spread_high_ha_6h: 100.0,
            verdict_min: 0.35,
        }
    }
}

impl FireRules {
    /// High sensitivity - lower final gate, more alerts
    pub fn high_sensitivity() -> Self {
        Self {
            verdict_min: 0.25,
            ..Default::default()
        }
    }

    /// Low sensitivity - higher final gate, fewer alerts
    pub fn low_sensitivity() -> Self {
        Self {
            verdict_min: 0.50,
            ..Default::default()
        }
    }
}
