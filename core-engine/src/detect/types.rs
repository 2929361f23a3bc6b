//! Detection Types
//!
//! Core types for hazard classification. No logic - data structures only.

use serde::{Deserialize, Serialize};

// ============================================================================
// HAZARD KIND
// ============================================================================

/// The three hazard classes the engine can alert on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Deforestation,
    #[serde(rename = "Illegal Mining")]
    IllegalMining,
    #[serde(rename = "Active Fire")]
    ActiveFire,
}

impl HazardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardKind::Deforestation => "Deforestation",
            HazardKind::IllegalMining => "Illegal Mining",
            HazardKind::ActiveFire => "Active Fire",
        }
    }
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SEVERITY TIER
// ============================================================================

/// Alert severity, ordered. Below-threshold observations never get a tier -
/// they collapse to an absent verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityTier {
    Med,
    High,
    Critical,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Med => "MED",
            SeverityTier::High => "HIGH",
            SeverityTier::Critical => "CRITICAL",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            SeverityTier::Med => 1,
            SeverityTier::High => 2,
            SeverityTier::Critical => 3,
        }
    }

    /// One tier up; Critical saturates.
    pub fn step_up(&self) -> Self {
        match self {
            SeverityTier::Med => SeverityTier::High,
            SeverityTier::High => SeverityTier::Critical,
            SeverityTier::Critical => SeverityTier::Critical,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::Med => "#C0B87A",      // Khaki
            SeverityTier::High => "#c87a3a",     // Amber
            SeverityTier::Critical => "#cc4444", // Red
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VERDICT
// ============================================================================

/// Output of a classifier. Either fully populated for its hazard kind or
/// not produced at all - rejection is `None` at the call site, never a
/// half-filled record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "type")]
    pub kind: HazardKind,
    /// Always within [0, 1], rounded to 2 decimal places
    pub confidence: f32,
    pub severity: SeverityTier,
    /// Affected area - deforestation and mining only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_ha: Option<f32>,
    /// Immediate-response flag - fire only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate: Option<bool>,
}

impl Verdict {
    /// Verdict for an area-bearing hazard (deforestation, mining)
    pub fn with_area(
        kind: HazardKind,
        confidence: f32,
        severity: SeverityTier,
        area_ha: f32,
    ) -> Self {
        Self {
            kind,
            confidence: finalize_confidence(confidence),
            severity,
            area_ha: Some(area_ha),
            immediate: None,
        }
    }

    /// Fire verdict - carries the immediate flag instead of an area
    pub fn fire(confidence: f32, severity: SeverityTier, immediate: bool) -> Self {
        Self {
            kind: HazardKind::ActiveFire,
            confidence: finalize_confidence(confidence),
            severity,
            area_ha: None,
            immediate: Some(immediate),
        }
    }
}

/// Clamp an accumulated score into [0, 1] and round to 2 decimal places.
/// Evidence stacking can push the raw sum past 1.0; the published
/// confidence never does.
fn finalize_confidence(raw: f32) -> f32 {
    (raw.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(SeverityTier::Med < SeverityTier::High);
        assert!(SeverityTier::High < SeverityTier::Critical);
        assert_eq!(SeverityTier::Critical.level(), 3);
    }

    #[test]
    fn test_severity_step_up_saturates() {
        assert_eq!(SeverityTier::Med.step_up(), SeverityTier::High);
        assert_eq!(SeverityTier::High.step_up(), SeverityTier::Critical);
        assert_eq!(SeverityTier::Critical.step_up(), SeverityTier::Critical);
    }

    #[test]
    fn test_confidence_clamped_and_rounded() {
        let v = Verdict::fire(1.05, SeverityTier::Critical, true);
        assert_eq!(v.confidence, 1.0);

        let v = Verdict::with_area(HazardKind::IllegalMining, 0.654_321, SeverityTier::High, 3.5);
        assert_eq!(v.confidence, 0.65);

        let v = Verdict::fire(-0.2, SeverityTier::Med, false);
        assert_eq!(v.confidence, 0.0);
    }

    #[test]
    fn test_verdict_wire_shape_per_kind() {
        let fire = Verdict::fire(0.98, SeverityTier::Critical, true);
        let json = serde_json::to_value(&fire).unwrap();
        assert_eq!(json["type"], "Active Fire");
        assert_eq!(json["severity"], "CRITICAL");
        assert_eq!(json["immediate"], true);
        assert!(json.get("area_ha").is_none());

        let defo = Verdict::with_area(HazardKind::Deforestation, 0.8, SeverityTier::Critical, 620.4);
        let json = serde_json::to_value(&defo).unwrap();
        assert_eq!(json["type"], "Deforestation");
        assert_eq!(json["area_ha"], 620.4_f32 as f64);
        assert!(json.get("immediate").is_none());
    }
}
