//! Deforestation Classifier
//!
//! Fuses optical greenness loss, SAR structural collapse, temporal
//! persistence and mapped extent into one verdict. Confidence accumulates
//! additively from independent evidence stages; the gates run in a fixed
//! order because the minimum-mappable-unit and dual-evidence checks can
//! override an otherwise high raw score.

use super::observation::DeforestationObservation;
use super::rules::{
    DeforestationRules, AREA_BONUS_SCORE, LARGE_AREA_SCORE, PERSISTENCE_WINDOW_SCORE,
    PROTECTED_AREA_SCORE, SINGLE_WINDOW_FACTOR, SPECTRAL_MODERATE_SCORE, SPECTRAL_STRONG_SCORE,
    STRUCTURAL_SCORE,
};
use super::types::{HazardKind, SeverityTier, Verdict};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify one deforestation observation with the default rules
pub fn classify_deforestation(obs: &DeforestationObservation) -> Option<Verdict> {
    classify_deforestation_with_rules(obs, &DeforestationRules::default())
}

/// Classification with custom rules
pub fn classify_deforestation_with_rules(
    obs: &DeforestationObservation,
    rules: &DeforestationRules,
) -> Option<Verdict> {
    let mut confidence = 0.0f32;

    // Stage 1: spectral vegetation loss, two-tier
    let (spectral_delta, spectral_loss) = spectral_stage(obs, rules);
    confidence += spectral_delta;

    // Stage 2: SAR structural confirmation
    let (structural_delta, structural_loss) = structural_stage(obs, rules);
    confidence += structural_delta;

    // Stage 3: temporal persistence, applied to the running score after
    // the evidence stages
    if obs.persistence_windows >= rules.persistence_min_windows {
        confidence += PERSISTENCE_WINDOW_SCORE;
    } else {
        confidence *= SINGLE_WINDOW_FACTOR;
    }

    // Stage 4: minimum mappable unit - discards the candidate outright
    if obs.area_ha < rules.min_mappable_ha {
        log::debug!(
            "deforestation candidate discarded: {:.2} ha below minimum mappable unit",
            obs.area_ha
        );
        return None;
    }

    // Stage 5: area bonuses, cumulative
    if obs.area_ha >= rules.area_bonus_ha {
        confidence += AREA_BONUS_SCORE;
    }
    if obs.area_ha >= rules.large_area_ha {
        confidence += LARGE_AREA_SCORE;
    }

    // Stage 6: both evidence channels are required
    if !(spectral_loss && structural_loss) {
        return None;
    }

    // Stage 7: protected-area escalation
    if obs.in_protected_area {
        confidence = (confidence + PROTECTED_AREA_SCORE).min(1.0);
    }

    // Stage 8: severity cut-offs
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
        HazardKind::Deforestation,
        confidence,
        severity,
        obs.area_ha,
    ))
}

// ============================================================================
// STAGES
// ============================================================================

/// Paired NDVI/EVI drop -> (confidence delta, spectral-loss flag)
fn spectral_stage(obs: &DeforestationObservation, rules: &DeforestationRules) -> (f32, bool) {
    if obs.delta_ndvi < rules.strong_ndvi_drop && obs.delta_evi < rules.strong_evi_drop {
        (SPECTRAL_STRONG_SCORE, true)
    } else if obs.delta_ndvi < rules.moderate_ndvi_drop && obs.delta_evi < rules.moderate_evi_drop {
        (SPECTRAL_MODERATE_SCORE, true)
    } else {
        (0.0, false)
    }
}

/// Paired VH/VV backscatter drop -> (confidence delta, structural-loss flag)
fn structural_stage(obs: &DeforestationObservation, rules: &DeforestationRules) -> (f32, bool) {
    if obs.sar_vh_change_db < rules.vh_drop_db && obs.sar_vv_change_db < rules.vv_drop_db {
        (STRUCTURAL_SCORE, true)
    } else {
        (0.0, false)
    }
}

// ============================================================================
// TESTS
// ============================================================================
