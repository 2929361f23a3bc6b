//! Sensor Observations
//!
//! Input bundles for the classifiers, one per hazard kind. Every field is
//! mandatory: there is no "missing" reading, callers supply an explicit
//! neutral value (0 / false) when a sensor channel has no data for the
//! window. Bundles are built once per detection cycle, passed into exactly
//! one classifier call, and discarded.

use serde::{Deserialize, Serialize};

// ============================================================================
// VIIRS CONFIDENCE
// ============================================================================

/// Categorical detection confidence reported by the thermal sensor.
/// Anything outside the three published labels maps to `Unknown`, which
/// contributes zero base confidence - bad labels are not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViirsConfidence {
    High,
    Nominal,
    Low,
    #[serde(other)]
    Unknown,
}

impl ViirsConfidence {
    /// Parse the sensor's label; unrecognized values become `Unknown`
    pub fn from_label(label: &str) -> Self {
        match label {
            "high" => ViirsConfidence::High,
            "nominal" => ViirsConfidence::Nominal,
            "low" => ViirsConfidence::Low,
            _ => ViirsConfidence::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViirsConfidence::High => "high",
            ViirsConfidence::Nominal => "nominal",
            ViirsConfidence::Low => "low",
            ViirsConfidence::Unknown => "unknown",
        }
    }
}

impl Default for ViirsConfidence {
    fn default() -> Self {
        ViirsConfidence::Unknown
    }
}

// ============================================================================
// DEFORESTATION OBSERVATION
// ============================================================================

/// One candidate site/time-window of deforestation evidence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeforestationObservation {
    /// NDVI change versus the reference composite (negative = greenness loss)
    pub delta_ndvi: f32,
    /// EVI change versus the reference composite
    pub delta_evi: f32,
    /// SAR cross-pol backscatter change in dB (negative = canopy collapse)
    pub sar_vh_change_db: f32,
    /// SAR co-pol backscatter change in dB
    pub sar_vv_change_db: f32,
    /// Consecutive observation windows confirming the anomaly
    pub persistence_windows: u32,
    /// Mapped anomaly extent in hectares
    pub area_ha: f32,
    pub in_protected_area: bool,
}

impl DeforestationObservation {
    pub fn new(delta_ndvi: f32, delta_evi: f32) -> Self {
        Self {
            delta_ndvi,
            delta_evi,
            ..Default::default()
        }
    }

    pub fn with_sar_change(mut self, vh_db: f32, vv_db: f32) -> Self {
        self.sar_vh_change_db = vh_db;
        self.sar_vv_change_db = vv_db;
        self
    }

    pub fn with_persistence(mut self, windows: u32) -> Self {
        self.persistence_windows = windows;
        self
    }

    pub fn with_area(mut self, area_ha: f32) -> Self {
        self.area_ha = area_ha;
        self
    }

    pub fn with_protected_area(mut self, flag: bool) -> Self {
        self.in_protected_area = flag;
        self
    }
}

// ============================================================================
// MINING OBSERVATION
// ============================================================================

/// One candidate site/time-window of surface-mining evidence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MiningObservation {
    /// Bare Soil Index for the window
    pub bsi: f32,
    /// BSI change versus the reference composite
    pub bsi_change: f32,
    /// Standing water detected next to the disturbance (wash ponds)
    pub has_water_adjacent: bool,
    /// SAR dihedral return increase (vertical pit walls)
    pub has_dihedral_increase: bool,
    /// Distance to the nearest mapped road, meters
    pub dist_to_road_m: f32,
    /// Site falls inside a licensed mining concession
    pub in_licensed_concession: bool,
    /// Mapped disturbance extent in hectares
    pub area_ha: f32,
}

impl MiningObservation {
    pub fn new(bsi: f32, bsi_change: f32) -> Self {
        Self {
            bsi,
            bsi_change,
            ..Default::default()
        }
    }

    pub fn with_water_adjacent(mut self, flag: bool) -> Self {
        self.has_water_adjacent = flag;
        self
    }

    pub fn with_dihedral_increase(mut self, flag: bool) -> Self {
        self.has_dihedral_increase = flag;
        self
    }

    pub fn with_road_distance(mut self, meters: f32) -> Self {
        self.dist_to_road_m = meters;
        self
    }

    pub fn with_licensed_concession(mut self, flag: bool) -> Self {
        self.in_licensed_concession = flag;
        self
    }

    pub fn with_area(mut self, area_ha: f32) -> Self {
        self.area_ha = area_ha;
        self
    }
}

// ============================================================================
// FIRE OBSERVATION
// ============================================================================

/// One candidate thermal anomaly
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FireObservation {
    /// Categorical confidence from the thermal sensor
    pub viirs_confidence: ViirsConfidence,
    /// Fire Radiative Power, megawatts
    pub frp_mw: f32,
    /// Satellite passes confirming the hotspot
    pub persistence_passes: u32,
    /// Estimated spread, hectares per 6 hours
    pub spread_rate_ha_6h: f32,
    pub in_protected_area: bool,
}

impl FireObservation {
    pub fn new(viirs_confidence: ViirsConfidence, frp_mw: f32) -> Self {
        Self {
            viirs_confidence,
            frp_mw,
            ..Default::default()
        }
    }

    pub fn with_persistence(mut self, passes: u32) -> Self {
        self.persistence_passes = passes;
        self
    }

    pub fn with_spread_rate(mut self, ha_per_6h: f32) -> Self {
        self.spread_rate_ha_6h = ha_per_6h;
        self
    }

    pub fn with_protected_area(mut self, flag: bool) -> Self {
        self.in_protected_area = flag;
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viirs_label_parsing() {
        assert_eq!(ViirsConfidence::from_label("high"), ViirsConfidence::High);
        assert_eq!(ViirsConfidence::from_label("nominal"), ViirsConfidence::Nominal);
        assert_eq!(ViirsConfidence::from_label("low"), ViirsConfidence::Low);
        assert_eq!(ViirsConfidence::from_label("unknown"), ViirsConfidence::Unknown);
        // Labels are exact: no case folding, no aliases
        assert_eq!(ViirsConfidence::from_label("High"), ViirsConfidence::Unknown);
        assert_eq!(ViirsConfidence::from_label("h"), ViirsConfidence::Unknown);
    }

    #[test]
    fn test_observation_builders() {
        let obs = DeforestationObservation::new(-0.41, -0.35)
            .with_sar_change(-4.2, -3.1)
            .with_persistence(3)
            .with_area(620.4)
            .with_protected_area(true);

        assert_eq!(obs.delta_ndvi, -0.41);
        assert_eq!(obs.sar_vv_change_db, -3.1);
        assert_eq!(obs.persistence_windows, 3);
        assert!(obs.in_protected_area);

        let obs = MiningObservation::new(0.22, 0.15)
            .with_water_adjacent(true)
            .with_road_distance(450.0)
            .with_area(12.5);

        assert!(obs.has_water_adjacent);
        assert!(!obs.has_dihedral_increase);
        assert_eq!(obs.dist_to_road_m, 450.0);
    }

    #[test]
    fn test_neutral_defaults() {
        // A defaulted bundle means "no reading on any channel"
        let obs = FireObservation::default();
        assert_eq!(obs.viirs_confidence, ViirsConfidence::Unknown);
        assert_eq!(obs.frp_mw, 0.0);
        assert_eq!(obs.persistence_passes, 0);
    }
}
