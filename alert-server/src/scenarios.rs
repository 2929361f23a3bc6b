//! Simulated sensor feeds
//!
//! Stand-in for the upstream imagery pipelines: four candidate sites with
//! pre-computed sensor metrics, fed through the real detection engine every
//! scan. Only the metrics are canned - scoring, severity and accept/reject
//! all come from the classifiers.

use canopyguard_core::{
    classify_deforestation, classify_fire, classify_mining, DeforestationObservation,
    FireObservation, MiningObservation, Verdict, ViirsConfidence,
};

// ============================================================================
// SCENARIO
// ============================================================================

/// Sensor metrics for one hazard kind
#[derive(Debug, Clone)]
pub enum SensorReading {
    Deforestation(DeforestationObservation),
    Mining(MiningObservation),
    Fire(FireObservation),
}

/// One candidate site with its current sensor readings
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Two-letter site code used in alert ids
    pub site_code: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Region label override where the coarse geocoder has no box
    pub region: Option<&'static str>,
    /// Mapped extent for the envelope when the verdict carries no area
    pub mapped_area_ha: f32,
    pub notes: &'static [&'static str],
    pub reading: SensorReading,
}

impl Scenario {
    /// Run this site's reading through its classifier
    pub fn evaluate(&self) -> Option<Verdict> {
        match &self.reading {
            SensorReading::Deforestation(obs) => classify_deforestation(obs),
            SensorReading::Mining(obs) => classify_mining(obs),
            SensorReading::Fire(obs) => classify_fire(obs),
        }
    }

    pub fn in_protected_area(&self) -> bool {
        match &self.reading {
            SensorReading::Deforestation(obs) => obs.in_protected_area,
            SensorReading::Mining(_) => false,
            SensorReading::Fire(obs) => obs.in_protected_area,
        }
    }
}

// ============================================================================
// SIMULATED SCAN
// ============================================================================

/// The current scan: four sites across the monitored regions
pub fn simulated_scan() -> Vec<Scenario> {
    vec![
        // Clear-cutting on a protected ridge
        Scenario {
            site_code: "MH",
            lat: 17.9,
            lon: 73.7,
            region: None,
            mapped_area_ha: 42.5,
            notes: &[
                "NDVI anomaly: -0.42 drop in dense evergreen canopy",
                "Sentinel-1 SAR coherence loss: -5.8 dB (structural collapse)",
                "Estimated canopy height loss: 12 m (GEDI-fused estimate)",
                "Spatial cluster confirmed across 3 consecutive Sentinel tracks",
            ],
            reading: SensorReading::Deforestation(
                DeforestationObservation::new(-0.42, -0.31)
                    .with_sar_change(-5.8, -4.1)
                    .with_persistence(3)
                    .with_area(42.5)
                    .with_protected_area(true),
            ),
        },
        // Open-pit quarrying in the Aravalli range
        Scenario {
            site_code: "RJ",
            lat: 27.3,
            lon: 76.2,
            region: Some("Aravallis, Rajasthan"),
            mapped_area_ha: 8.2,
            notes: &[
                "Bare Soil Index extreme spike: +0.38 index value",
                "Spectral match: open-pit granite/marble signature",
                "Dihedral radar return increase: vertical pit walls detected",
            ],
            reading: SensorReading::Mining(
                MiningObservation::new(0.38, 0.21)
                    .with_dihedral_increase(true)
                    .with_road_distance(350.0)
                    .with_area(8.2),
            ),
        },
        // Riverine sand mining in the Jhelum basin
        Scenario {
            site_code: "JK",
            lat: 34.1,
            lon: 74.8,
            region: Some("Jhelum Basin, J&K"),
            mapped_area_ha: 3.5,
            notes: &[
                "Riverbed geomorphology change: high turbidity detected",
                "Sentinel-2 SWIR: fresh sand bar disturbance",
                "Major river channel alteration detected in 10 days",
            ],
            reading: SensorReading::Mining(
                MiningObservation::new(0.22, 0.14)
                    .with_water_adjacent(true)
                    .with_road_distance(2600.0)
                    .with_area(3.5),
            ),
        },
        // Fast-spreading canopy fire in a reserve forest
        Scenario {
            site_code: "CI",
            lat: 21.2,
            lon: 82.5,
            region: None,
            mapped_area_ha: 120.0,
            notes: &[
                "FRP (Fire Radiative Power): 185 MW - extreme intensity",
                "VIIRS confirmed: thermal anomaly at 375 m resolution",
                "Spread direction: northeast, est. 4.2 km/h",
                "Sentinel-5P carbon monoxide spike over the hotspot",
            ],
            reading: SensorReading::Fire(
                FireObservation::new(ViirsConfidence::High, 185.0)
                    .with_persistence(2)
                    .with_spread_rate(140.0)
                    .with_protected_area(true),
            ),
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================
