//! Region labelling and impact derivation
//!
//! Coarse reverse-geocoding of alert centroids into monitoring-region
//! labels, and the carbon figure derived from affected area. Both feed the
//! alert envelope only - the detection core never sees coordinates.

use canopyguard_core::HazardKind;

/// Approximate region name for a centroid, first matching box wins
pub fn region_for(lat: f64, lon: f64) -> &'static str {
    if lat >= 26.0 && (88.0..=96.0).contains(&lon) {
        return "Northeast India";
    }
    if (8.0..=12.0).contains(&lat) && (75.0..=78.0).contains(&lon) {
        return "Western Ghats, Kerala";
    }
    if (12.0..=16.0).contains(&lat) && (73.0..=76.0).contains(&lon) {
        return "Western Ghats, Karnataka";
    }
    if (16.0..=22.0).contains(&lat) && (72.0..=75.0).contains(&lon) {
        return "Western Ghats, Maharashtra";
    }
    if (21.0..=23.0).contains(&lat) && (88.0..=90.0).contains(&lon) {
        return "Sundarbans, West Bengal";
    }
    if (18.0..=24.0).contains(&lat) && (78.0..=84.0).contains(&lon) {
        return "Central India";
    }
    if (10.0..=14.0).contains(&lat) && (92.0..=94.0).contains(&lon) {
        return "Andaman Islands";
    }
    if (8.0..=14.0).contains(&lat) && (76.0..=80.0).contains(&lon) {
        return "Tamil Nadu";
    }
    if (14.0..=18.0).contains(&lat) && (77.0..=81.0).contains(&lon) {
        return "Telangana / AP";
    }
    if (20.0..=26.0).contains(&lat) && (84.0..=88.0).contains(&lon) {
        return "Odisha / Jharkhand";
    }
    "India"
}

/// Tonnes of carbon stock at stake per affected hectare
fn carbon_factor(kind: HazardKind) -> f32 {
    match kind {
        // Standing biomass lost outright
        HazardKind::Deforestation => 127.0,
        // Topsoil stripping, far less standing stock
        HazardKind::IllegalMining => 14.5,
        // Burned-area emission estimate
        HazardKind::ActiveFire => 17.5,
    }
}

/// Carbon estimate for the alert envelope, whole tonnes
pub fn carbon_estimate_tonnes(kind: HazardKind, area_ha: f32) -> f32 {
    (area_ha * carbon_factor(kind)).round().max(0.0)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_boxes() {
        assert_eq!(region_for(17.9, 73.7), "Western Ghats, Maharashtra");
        assert_eq!(region_for(26.14, 91.74), "Northeast India");
        assert_eq!(region_for(21.94, 89.18), "Sundarbans, West Bengal");
        assert_eq!(region_for(21.2, 82.5), "Central India");
        assert_eq!(region_for(12.92, 92.84), "Andaman Islands");
        // Aravallis fall outside every box
        assert_eq!(region_for(27.3, 76.2), "India");
    }

    #[test]
    fn test_carbon_scales_with_area_and_kind() {
        assert_eq!(carbon_estimate_tonnes(HazardKind::Deforestation, 42.5), 5398.0);
        assert_eq!(carbon_estimate_tonnes(HazardKind::ActiveFire, 120.0), 2100.0);
        assert_eq!(carbon_estimate_tonnes(HazardKind::IllegalMining, 0.0), 0.0);
    }
}
