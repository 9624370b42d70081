//! Reference-point location: finding the anchoring sunrise.
//!
//! Each chart variant anchors its progression at a sunrise moment and the
//! reference longitude observed there. The search over candidate days is
//! bounded, provider failures advance to the next candidate, and a
//! synthesized 06:00 local-civil anchor guarantees the search always
//! yields an anchor.

use tracing::{debug, warn};
use udaya_time::{CivilTime, civil_to_jd_ut};
use udaya_vedic_base::{Graha, ReferenceSource, SunriseSearchPolicy, VariantConfig};

use crate::error::ChartError;
use crate::provider::{EphemerisError, EphemerisProvider, GeoLocation};
use crate::types::BirthInput;

/// Tolerance, in days, when testing a sunrise against the birth moment.
const SUNRISE_TOLERANCE_DAYS: f64 = 1e-4;

/// Wall-clock hour of the synthesized local-civil fallback anchor.
const FALLBACK_ANCHOR_HOUR: u32 = 6;

/// An anchor moment and the reference longitude observed at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceAnchor {
    /// Anchor moment, JD UT.
    pub jd_ut: f64,
    /// Reference longitude at the anchor, degrees [0, 360).
    pub reference_lon_deg: f64,
}

/// Locate the variant's anchoring sunrise for a birth.
///
/// Candidate days are probed at `birth + offset` per the variant's search
/// policy; the first candidate with a usable sunrise and reference
/// longitude wins. If every candidate fails, the 06:00 local-civil
/// fallback applies; only a provider failure at the fallback moment
/// itself surfaces as an error.
pub fn locate_anchor<P: EphemerisProvider + ?Sized>(
    provider: &P,
    config: &VariantConfig,
    input: &BirthInput,
    sidereal: bool,
) -> Result<ReferenceAnchor, ChartError> {
    let birth_jd = input.moment();
    let location = input.location();

    let offsets: &[i32] = match config.sunrise_search_policy {
        SunriseSearchPolicy::SymmetricWindow => &[-3, -2, -1, 0, 1, 2, 3],
        SunriseSearchPolicy::BackwardOnly => &[0, -1],
    };

    for &offset in offsets {
        let probe_jd = birth_jd + offset as f64;
        let rise_jd = match provider.find_sunrise(probe_jd, &location) {
            Ok(Some(jd)) => jd,
            Ok(None) => {
                debug!(offset, "no sunrise for candidate day");
                continue;
            }
            Err(e) => {
                warn!(offset, error = %e, "sunrise query failed, advancing");
                continue;
            }
        };

        if config.sunrise_search_policy == SunriseSearchPolicy::BackwardOnly
            && rise_jd > birth_jd + SUNRISE_TOLERANCE_DAYS
        {
            debug!(offset, "candidate sunrise is after the birth moment");
            continue;
        }

        match reference_longitude(provider, config.reference_source, rise_jd, &location, sidereal)
        {
            Ok(lon) => {
                return Ok(ReferenceAnchor {
                    jd_ut: rise_jd,
                    reference_lon_deg: lon,
                });
            }
            Err(e) => {
                warn!(offset, error = %e, "reference longitude query failed, advancing");
            }
        }
    }

    // Guaranteed fallback: 06:00 local civil on the birth's civil date.
    let fallback_jd = civil_to_jd_ut(
        input.date,
        CivilTime::new(FALLBACK_ANCHOR_HOUR, 0, 0.0),
        input.tz_offset_hours,
    );
    debug!(fallback_jd, "no sunrise candidate usable, anchoring at 06:00 civil");
    let lon =
        reference_longitude(provider, config.reference_source, fallback_jd, &location, sidereal)?;
    Ok(ReferenceAnchor {
        jd_ut: fallback_jd,
        reference_lon_deg: lon,
    })
}

/// Fetch the reference longitude for a source at a moment.
fn reference_longitude<P: EphemerisProvider + ?Sized>(
    provider: &P,
    source: ReferenceSource,
    jd_ut: f64,
    location: &GeoLocation,
    sidereal: bool,
) -> Result<f64, EphemerisError> {
    match source {
        ReferenceSource::SunLongitude => Ok(provider
            .body_longitude(jd_ut, Graha::Surya, sidereal)?
            .longitude_deg),
        ReferenceSource::AscendantLongitude => provider.ascendant_longitude(jd_ut, location),
    }
}
