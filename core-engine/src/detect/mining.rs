//! Illegal Mining Classifier
//!
//! Bare-soil signature is mandatory evidence - without it the candidate is
//! discarded before any other channel is read. The remaining stages stack
//! water adjacency, SAR dihedral returns and road proximity; a licensed
//! concession discards the candidate unconditionally, whatever the score.

use super::observation::MiningObservation;
use super::rules::{
    MiningRules, BARE_SOIL_SCORE, DIHEDRAL_SCORE, ROAD_FAR_PENALTY, ROAD_MID_SCORE,
    ROAD_NEAR_SCORE, UNLICENSED_SCORE, WATER_ADJACENT_SCORE,
};
use super::types::{HazardKind, SeverityTier, Verdict};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify one mining observation with the default rules
pub fn classify_mining(obs: &MiningObservation) -> Option<Verdict> {
    classify_mining_with_rules(obs, &MiningRules::default())
}

/// Classification with custom rules
pub fn classify_mining_with_rules(obs: &MiningObservation, rules: &MiningRules) -> Option<Verdict> {
    let mut confidence = 0.0f32;

    // Stage 1: bare-soil signature, mandatory
    let (bare_soil_delta, bare_soil) = bare_soil_stage(obs, rules);
    if !bare_soil {
        return None;
    }
    confidence += bare_soil_delta;

    // Stage 2: water adjacency (wash ponds)
    if obs.has_water_adjacent {
        confidence += WATER_ADJACENT_SCORE;
    }

    // Stage 3: SAR dihedral increase (vertical pit walls)
    if obs.has_dihedral_increase {
        confidence += DIHEDRAL_SCORE;
    }

    // Stage 4: road proximity; remote sites are penalized and the running
    // score may go negative here - it is not clamped mid-computation
    if obs.dist_to_road_m < rules.road_near_m {
        confidence += ROAD_NEAR_SCORE;
    } else if obs.dist_to_road_m < rules.road_mid_m {
        confidence += ROAD_MID_SCORE;
    } else {
        confidence -= ROAD_FAR_PENALTY;
    }

    // Stage 5: legal check - licensed activity is never alerted
    if obs.in_licensed_concession {
        log::debug!("mining candidate discarded: inside a licensed concession");
        return None;
    }
    confidence += UNLICENSED_SCORE;

    // Stage 6: severity cut-offs
    let severity = if confidence >= rules.critical_min {
        SeverityTier::Critical
    } else if confidence >= rules.high_min {
        SeverityTier::High
    } else if confidence < rules.verdict_min {
        return None;
    } else {
        SeverityTier::Med
    };

    Some(Verdict::with_area(
        HazardKind::IllegalMining,
        confidence,
        severity,
        obs.area_ha,
    ))
}

// ============================================================================
// STAGES
// ============================================================================

/// Exposed-earth spectral check -> (confidence delta, bare-soil flag)
fn bare_soil_stage(obs: &MiningObservation, rules: &MiningRules) -> (f32, bool) {
    if obs.bsi > rules.bsi_min && obs.bsi_change > rules.bsi_change_min {
        (BARE_SOIL_SCORE, true)
    } else {
        (0.0, false)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pit_site() -> MiningObservation {
        MiningObservation::new(0.22, 0.15)
            .with_water_adjacent(true)
            .with_dihedral_increase(true)
            .with_road_distance(450.0)
            .with_area(12.5)
    }

    #[test]
    fn test_full_evidence_site_is_critical() {
        // 0.25 + 0.15 + 0.15 + 0.15 + 0.10 = 0.80
        let v = classify_mining(&pit_site()).expect("verdict");
        assert_eq!(v.kind, HazardKind::IllegalMining);
        assert_eq!(v.confidence, 0.80);
        assert_eq!(v.severity, SeverityTier::Critical);
        assert_eq!(v.area_ha, Some(12.5));
        assert_eq!(v.immediate, None);
    }

    #[test]
    fn test_licensed_concession_never_alerted() {
        // Same maximal evidence, but inside a concession
        let obs = pit_site().with_licensed_concession(true);
        assert!(classify_mining(&obs).is_none());

        let extreme = MiningObservation::new(0.9, 0.9)
            .with_water_adjacent(true)
            .with_dihedral_increase(true)
            .with_road_distance(10.0)
            .with_licensed_concession(true);
        assert!(classify_mining(&extreme).is_none());
    }

    #[test]
    fn test_bare_soil_evidence_is_mandatory() {
        let weak_bsi = MiningObservation::new(0.15, 0.15)
            .with_water_adjacent(true)
            .with_dihedral_increase(true)
            .with_road_distance(100.0);
        assert!(classify_mining(&weak_bsi).is_none());

        let weak_change = MiningObservation::new(0.22, 0.10)
            .with_water_adjacent(true)
            .with_dihedral_increase(true)
            .with_road_distance(100.0);
        assert!(classify_mining(&weak_change).is_none());
    }

    #[test]
    fn test_road_distance_bands() {
        // Near: 0.25 + 0.15 + 0.10 = 0.50 -> High
        let near = MiningObservation::new(0.22, 0.15).with_road_distance(499.0);
        let v = classify_mining(&near).expect("verdict");
        assert_eq!(v.confidence, 0.50);
        assert_eq!(v.severity, SeverityTier::High);

        // Haul range: 0.25 + 0.08 + 0.10 = 0.43 -> Med
        let mid = MiningObservation::new(0.22, 0.15).with_road_distance(1500.0);
        let v = classify_mining(&mid).expect("verdict");
        assert_eq!(v.confidence, 0.43);
        assert_eq!(v.severity, SeverityTier::Med);

        // Remote: 0.25 - 0.10 + 0.10 = 0.25, under the verdict floor
        let far = MiningObservation::new(0.22, 0.15).with_road_distance(5000.0);
        assert!(classify_mining(&far).is_none());
    }

    #[test]
    fn test_remote_site_with_water_still_alerts() {
        // 0.25 + 0.15 - 0.10 + 0.10 = 0.40 -> Med
        let obs = MiningObservation::new(0.22, 0.15)
            .with_water_adjacent(true)
            .with_road_distance(2600.0)
            .with_area(3.5);
        let v = classify_mining(&obs).expect("verdict");
        assert_eq!(v.confidence, 0.40);
        assert_eq!(v.severity, SeverityTier::Med);
    }

    #[test]
    fn test_low_sensitivity_raises_the_bar() {
        // 0.50 raw: High by default, Med under low sensitivity
        let obs = MiningObservation::new(0.22, 0.15).with_road_distance(499.0);
        let v = classify_mining_with_rules(&obs, &MiningRules::low_sensitivity())
            .expect("verdict");
        assert_eq!(v.severity, SeverityTier::Med);
    }
}
