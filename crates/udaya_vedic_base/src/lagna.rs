//! Bhava and Hora Lagna progression.
//!
//! Both special lagnas progress linearly with clock time elapsed since a
//! sunrise anchor:
//! - Bhava Lagna advances 0.25 deg per minute, one full revolution per
//!   civil day (1440 minutes), starting from the Sun's longitude at
//!   sunrise.
//! - Hora Lagna advances 0.5 deg per minute, one full revolution per
//!   half day (720 minutes), starting from the ascendant at sunrise.
//!
//! The two systems share all table data and resolution logic; they differ
//! only in progression rate, reference-longitude source, and how the
//! anchoring sunrise is searched for. [`VariantConfig`] captures those
//! three knobs so a single pipeline serves both.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Minutes in one civil day; also the wrap modulus for elapsed time.
const MINUTES_PER_DAY: f64 = 1440.0;

/// The two special lagna variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LagnaVariant {
    BhavaLagna,
    HoraLagna,
}

impl LagnaVariant {
    /// Name of the variant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BhavaLagna => "Bhava Lagna",
            Self::HoraLagna => "Hora Lagna",
        }
    }

    /// Progression rate in degrees per elapsed minute.
    ///
    /// These are the defining constants of the two systems: 0.25 (360 deg
    /// per 1440 min) for Bhava, 0.5 (360 deg per 720 min) for Hora.
    pub const fn rate_deg_per_minute(self) -> f64 {
        match self {
            Self::BhavaLagna => 0.25,
            Self::HoraLagna => 0.5,
        }
    }
}

/// Which ephemeris quantity seeds the progression at the anchor moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceSource {
    /// The Sun's ecliptic longitude at the anchor.
    SunLongitude,
    /// The ascendant (rising degree) at the anchor.
    AscendantLongitude,
}

/// How the anchoring sunrise is searched for around the birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunriseSearchPolicy {
    /// Probe day offsets -3..=+3 around the birth day, first hit wins.
    SymmetricWindow,
    /// Probe offsets 0, -1; accept only a sunrise not after the birth.
    BackwardOnly,
}

/// The three knobs that distinguish the two lagna systems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub reference_source: ReferenceSource,
    pub rate_deg_per_minute: f64,
    pub sunrise_search_policy: SunriseSearchPolicy,
}

impl VariantConfig {
    /// Configuration for a variant.
    pub const fn for_variant(variant: LagnaVariant) -> Self {
        match variant {
            LagnaVariant::BhavaLagna => Self {
                reference_source: ReferenceSource::SunLongitude,
                rate_deg_per_minute: LagnaVariant::BhavaLagna.rate_deg_per_minute(),
                sunrise_search_policy: SunriseSearchPolicy::SymmetricWindow,
            },
            LagnaVariant::HoraLagna => Self {
                reference_source: ReferenceSource::AscendantLongitude,
                rate_deg_per_minute: LagnaVariant::HoraLagna.rate_deg_per_minute(),
                sunrise_search_policy: SunriseSearchPolicy::BackwardOnly,
            },
        }
    }
}

/// Minutes elapsed from an anchor moment to the birth moment, wrapped
/// into [0, 1440).
///
/// Both moments are JD UT. A birth slightly before its anchor wraps by
/// adding a full day; anchors further away reduce modulo a full day, so
/// the result holds the [0, 1440) range for every anchor the locator can
/// produce.
pub fn elapsed_minutes(birth_jd: f64, anchor_jd: f64) -> f64 {
    ((birth_jd - anchor_jd) * MINUTES_PER_DAY).rem_euclid(MINUTES_PER_DAY)
}

/// Progress a reference longitude by elapsed minutes at a variant rate.
///
/// Returns `(reference + minutes * rate) mod 360`.
pub fn progress_longitude(reference_lon_deg: f64, minutes: f64, rate_deg_per_minute: f64) -> f64 {
    normalize_360(reference_lon_deg + minutes * rate_deg_per_minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_are_exact() {
        assert_eq!(LagnaVariant::BhavaLagna.rate_deg_per_minute(), 0.25);
        assert_eq!(LagnaVariant::HoraLagna.rate_deg_per_minute(), 0.5);
    }

    #[test]
    fn variant_names() {
        assert_eq!(LagnaVariant::BhavaLagna.name(), "Bhava Lagna");
        assert_eq!(LagnaVariant::HoraLagna.name(), "Hora Lagna");
    }

    #[test]
    fn bhava_config() {
        let c = VariantConfig::for_variant(LagnaVariant::BhavaLagna);
        assert_eq!(c.reference_source, ReferenceSource::SunLongitude);
        assert_eq!(c.rate_deg_per_minute, 0.25);
        assert_eq!(c.sunrise_search_policy, SunriseSearchPolicy::SymmetricWindow);
    }

    #[test]
    fn hora_config() {
        let c = VariantConfig::for_variant(LagnaVariant::HoraLagna);
        assert_eq!(c.reference_source, ReferenceSource::AscendantLongitude);
        assert_eq!(c.rate_deg_per_minute, 0.5);
        assert_eq!(c.sunrise_search_policy, SunriseSearchPolicy::BackwardOnly);
    }

    #[test]
    fn elapsed_zero_at_anchor() {
        assert!(elapsed_minutes(2_460_000.25, 2_460_000.25).abs() < 1e-9);
    }

    #[test]
    fn elapsed_six_hours() {
        let m = elapsed_minutes(2_460_000.5, 2_460_000.25);
        assert!((m - 360.0).abs() < 1e-6);
    }

    #[test]
    fn elapsed_negative_wraps_by_full_day() {
        // Birth 10 minutes before the anchor wraps to 1430
        let m = elapsed_minutes(2_460_000.25 - 10.0 / 1440.0, 2_460_000.25);
        assert!((m - 1430.0).abs() < 1e-6);
    }

    #[test]
    fn elapsed_far_anchor_stays_in_range() {
        // Anchor 3 days before the birth still yields [0, 1440)
        let m = elapsed_minutes(2_460_003.3, 2_460_000.25);
        assert!((0.0..1440.0).contains(&m));
        assert!((m - 0.05 * 1440.0).abs() < 1e-6);
    }

    #[test]
    fn bhava_zero_elapsed_is_reference() {
        let lon = progress_longitude(0.0, 0.0, 0.25);
        assert!(lon.abs() < 1e-12);
    }

    #[test]
    fn bhava_full_day_is_full_turn() {
        let lon = progress_longitude(45.0, 1440.0, 0.25);
        assert!((lon - 45.0).abs() < 1e-9);
    }

    #[test]
    fn hora_48_minutes_progresses_24_degrees() {
        let lon = progress_longitude(350.0, 48.0, 0.5);
        assert!((lon - 14.0).abs() < 1e-9);
    }

    #[test]
    fn progression_wraps() {
        let lon = progress_longitude(350.0, 120.0, 0.25);
        assert!((lon - 20.0).abs() < 1e-9);
    }
}
