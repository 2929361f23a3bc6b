//! CanopyGuard Core - Detection Engine
//!
//! Scores multi-sensor satellite observations (optical vegetation indices,
//! SAR backscatter, thermal radiance, persistence counts) into
//! environmental-incident verdicts: deforestation, illegal mining, and
//! active fire.
//!
//! The engine is a library of pure, stateless functions. Callers construct
//! an observation bundle per candidate site and time window, invoke the
//! matching classifier, and receive either a fully-populated [`Verdict`]
//! or `None` when the evidence does not clear the minimum gates. No I/O,
//! no shared state, safe to call from any number of threads.
//!
//! [`Verdict`]: detect::Verdict

pub mod detect;

pub use detect::{
    classify_deforestation, classify_fire, classify_mining, DeforestationObservation,
    FireObservation, HazardKind, MiningObservation, SeverityTier, Verdict, ViirsConfidence,
};
