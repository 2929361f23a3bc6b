//! Detection Module
//!
//! Turns per-observation sensor metrics into hazard verdicts. This is the
//! CORE STEP - the only place that decides alert / no-alert.
//!
//! ## Structure
//! - `types`: Core types (HazardKind, SeverityTier, Verdict)
//! - `observation`: Per-hazard sensor observation bundles
//! - `rules`: Thresholds and score weights
//! - `deforestation` / `mining` / `fire`: One classifier per hazard kind
//!
//! ## Usage
//! ```ignore
//! use canopyguard_core::detect::{classify_fire, FireObservation, ViirsConfidence};
//!
//! let obs = FireObservation::new(ViirsConfidence::High, 125.0)
//!     .with_persistence(4)
//!     .with_spread_rate(650.0)
//!     .with_protected_area(true);
//!
//! match classify_fire(&obs) {
//!     Some(verdict) => println!("{} {}", verdict.severity, verdict.confidence),
//!     None => println!("below alert threshold"),
//! }
//! ```

pub mod types;
pub mod observation;
pub mod rules;
pub mod deforestation;
pub mod mining;
pub mod fire;

// Re-export main types for convenience
pub use types::{HazardKind, SeverityTier, Verdict};

pub use observation::{
    DeforestationObservation, FireObservation, MiningObservation, ViirsConfidence,
};

pub use rules::{DeforestationRules, FireRules, MiningRules};

pub use deforestation::{classify_deforestation, classify_deforestation_with_rules};
pub use mining::{classify_mining, classify_mining_with_rules};
pub use fire::{classify_fire, classify_fire_with_rules};
