//! Active Fire Classifier
//!
//! Base confidence comes from the thermal sensor's categorical label, then
//! FRP magnitude and pass-to-pass persistence adjust it. Severity and the
//! immediate flag derive from spread rate and protected-area status BEFORE
//! the confidence gate runs - the gate is checked last, so escalation always
//! reads the spread-rate branch, and a low-confidence detection is discarded
//! only at the very end.

use super::observation::{FireObservation, ViirsConfidence};
use super::rules::{
    FireRules, FRP_EXTREME_SCORE, FRP_MODERATE_SCORE, FRP_STRONG_SCORE, FRP_WEAK_PENALTY,
    PERSISTENCE_PAIR_SCORE, PERSISTENCE_PASS_SCORE, SINGLE_PASS_FACTOR, VIIRS_HIGH_BASE,
    VIIRS_LOW_BASE, VIIRS_NOMINAL_BASE,
};
use super::types::{SeverityTier, Verdict};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify one thermal anomaly with the default rules
pub fn classify_fire(obs: &FireObservation) -> Option<Verdict> {
    classify_fire_with_rules(obs, &FireRules::default())
}

/// Classification with custom rules
pub fn classify_fire_with_rules(obs: &FireObservation, rules: &FireRules) -> Option<Verdict> {
    // Stage 1: base confidence from the categorical sensor label
    let mut confidence = base_confidence(obs.viirs_confidence);

    // Stage 2: FRP magnitude
    confidence += frp_stage(obs, rules);

    // Stage 3: pass-to-pass persistence, applied to the running score
    if obs.persistence_passes >= rules.persistence_min_passes {
        confidence += PERSISTENCE_PASS_SCORE;
    } else if obs.persistence_passes >= 2 {
        confidence += PERSISTENCE_PAIR_SCORE;
    } else {
        confidence *= SINGLE_PASS_FACTOR;
    }

    // Stage 4: severity and immediacy from spread rate
    let mut severity = SeverityTier::Med;
    let mut immediate = false;
    if obs.spread_rate_ha_6h > rules.spread_critical_ha_6h {
        severity = SeverityTier::Critical;
        immediate = true;
    } else if obs.spread_rate_ha_6h > rules.spread_high_ha_6h {
        severity = SeverityTier::High;
    }

    // Stage 5: protected-area escalation
    if obs.in_protected_area {
        immediate = true;
        severity = severity.step_up();
    }

    // Stage 6: final confidence gate, checked after escalation
    if confidence < rules.verdict_min {
        log::debug!(
            "fire candidate discarded: confidence {:.2} under the floor",
            confidence
        );
        return None;
    }

    Some(Verdict::fire(confidence, severity, immediate))
}

// ============================================================================
// STAGES
// ============================================================================

fn base_confidence(label: ViirsConfidence) -> f32 {
    match label {
        ViirsConfidence::High => VIIRS_HIGH_BASE,
        ViirsConfidence::Nominal => VIIRS_NOMINAL_BASE,
        ViirsConfidence::Low => VIIRS_LOW_BASE,
        ViirsConfidence::Unknown => 0.0,
    }
}

/// Radiative-power band -> confidence delta
fn frp_stage(obs: &FireObservation, rules: &FireRules) -> f32 {
    if obs.frp_mw >= rules.frp_extreme_mw {
        FRP_EXTREME_SCORE
    } else if obs.frp_mw >= rules.frp_strong_mw {
        FRP_STRONG_SCORE
    } else if obs.frp_mw >= rules.frp_moderate_mw {
        FRP_MODERATE_SCORE
    } else {
        -FRP_WEAK_PENALTY
    }
}

// ============================================================================
// TESTS
// ============================================================================
