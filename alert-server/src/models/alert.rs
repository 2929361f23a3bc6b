//! Alert model
//!
//! GeoJSON Feature envelope wrapping an engine verdict for transport. The
//! detection core knows nothing about this shape - rendering a verdict into
//! a feature is strictly a server concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use canopyguard_core::Verdict;

use super::region::carbon_estimate_tonnes;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Centroid {
    pub lat: f64,
    pub lon: f64,
}

/// GeoJSON point geometry, coordinates in [lon, lat] order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: [f64; 2],
}

impl Geometry {
    pub fn point(lat: f64, lon: f64) -> Self {
        Self {
            geometry_type: "Point".to_string(),
            coordinates: [lon, lat],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertProperties {
    pub alert_id: String,
    pub alert_type: String,
    pub severity: String,
    /// Engine confidence, 0..1 (clients scale for display)
    pub confidence_score: f32,
    pub centroid: Centroid,
    pub area_affected_ha: f32,
    pub detection_date: DateTime<Utc>,
    pub region: String,
    pub protected_area: bool,
    pub carbon_estimate_tonnes: f32,
    /// Human-readable per-sensor notes backing the alert
    pub observations: Vec<String>,
    pub immediate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Geometry,
    pub properties: AlertProperties,
}

impl AlertFeature {
    /// Render an engine verdict into a transport feature.
    ///
    /// `area_ha` is the mapped extent used for fire alerts, whose verdicts
    /// carry no area of their own; area-bearing verdicts override it.
    #[allow(clippy::too_many_arguments)]
    pub fn from_verdict(
        alert_id: String,
        verdict: &Verdict,
        lat: f64,
        lon: f64,
        area_ha: f32,
        region: String,
        protected_area: bool,
        observations: Vec<String>,
        detection_date: DateTime<Utc>,
    ) -> Self {
        let area_affected_ha = verdict.area_ha.unwrap_or(area_ha);
        Self {
            feature_type: "Feature".to_string(),
            geometry: Geometry::point(lat, lon),
            properties: AlertProperties {
                alert_id,
                alert_type: verdict.kind.as_str().to_string(),
                severity: verdict.severity.as_str().to_string(),
                confidence_score: verdict.confidence,
                centroid: Centroid { lat, lon },
                area_affected_ha,
                detection_date,
                region,
                protected_area,
                carbon_estimate_tonnes: carbon_estimate_tonnes(verdict.kind, area_affected_ha),
                observations,
                immediate: verdict.immediate.unwrap_or(false),
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use canopyguard_core::{HazardKind, SeverityTier};

    #[test]
    fn test_feature_geometry_is_lon_lat() {
        let g = Geometry::point(17.9, 73.7);
        assert_eq!(g.coordinates, [73.7, 17.9]);
        assert_eq!(g.geometry_type, "Point");
    }

    #[test]
    fn test_area_verdict_overrides_mapped_extent() {
        let verdict = Verdict::with_area(HazardKind::Deforestation, 0.9, SeverityTier::Critical, 42.5);
        let f = AlertFeature::from_verdict(
            "CGD-20250101-MH-001".to_string(),
            &verdict,
            17.9,
            73.7,
            999.0,
            "Western Ghats, Maharashtra".to_string(),
            true,
            vec![],
            Utc::now(),
        );
        assert_eq!(f.properties.area_affected_ha, 42.5);
        assert_eq!(f.properties.alert_type, "Deforestation");
        assert!(!f.properties.immediate);
    }

    #[test]
    fn test_fire_feature_uses_mapped_extent_and_immediate_flag() {
        let verdict = Verdict::fire(0.98, SeverityTier::Critical, true);
        let f = AlertFeature::from_verdict(
            "CGD-20250101-CI-004".to_string(),
            &verdict,
            21.2,
            82.5,
            120.0,
            "Central India".to_string(),
            true,
            vec!["FRP 185 MW".to_string()],
            Utc::now(),
        );
        assert_eq!(f.properties.area_affected_ha, 120.0);
        assert!(f.properties.immediate);
        assert_eq!(f.properties.severity, "CRITICAL");
    }
}
