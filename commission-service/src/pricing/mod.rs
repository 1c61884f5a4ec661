//! Price-estimate computation for commission requests.
//!
//! The calculator is a pure function over caller-supplied inputs: a base
//! (box) price, a service tier, and a list of optional add-ons. It reads
//! and writes no external state and has no failure mode.

/// Multiplier for the lower "shikai" tier.
const SHIKAI_MULTIPLIER: f64 = 2.0;

/// Multiplier for every other tier label, recognized or not.
const BASE_MULTIPLIER: f64 = 4.0;

/// Surcharge fraction of the box price for a known add-on label.
///
/// Unknown labels carry no surcharge.
pub fn addon_surcharge(label: &str) -> f64 {
    match label {
        "OSL Effects" => 0.20,
        "Weathering / Battle Damage" => 0.15,
        "Advanced Basing" => 0.15,
        "Fine Freehand Details" => 0.25,
        "Conversions / Kitbashing" => 0.30,
        "Magnetization" => 0.10,
        _ => 0.0,
    }
}

/// Whether a tier label names one of the published service tiers.
///
/// The calculator accepts any tier; this exists so the HTTP boundary can
/// flag typos and unexpected values before computing with them.
pub fn is_known_tier(tier: &str) -> bool {
    matches!(tier.to_lowercase().as_str(), "shikai" | "bankai")
}

/// Compute the estimated total for a commission.
///
/// The tier comparison is case-insensitive: `"shikai"` selects the lower
/// multiplier, every other label (including an empty string) the higher
/// one. Add-on surcharges apply once per occurrence, so a repeated label
/// stacks. The result is rounded to two decimals, ties away from zero.
///
/// Negative box prices are not rejected here; the sign propagates
/// arithmetically. Validation is the boundary's concern.
pub fn estimate_total(box_price: f64, tier: &str, addons: &[String]) -> f64 {
    let multiplier = if tier.to_lowercase() == "shikai" {
        SHIKAI_MULTIPLIER
    } else {
        BASE_MULTIPLIER
    };

    let mut total = box_price * multiplier;
    for addon in addons {
        total += box_price * addon_surcharge(addon);
    }

    (total * 100.0).round() / 100.0
}
