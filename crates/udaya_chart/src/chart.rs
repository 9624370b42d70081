//! Chart assembly: queries the provider for graha states and places each
//! graha relative to the variant's lagna.
//!
//! Retrograde flagging and Ketu mirroring are domain rules, not provider
//! artifacts: a negative longitude rate marks a body retrograde, and Ketu
//! is always Rahu + 180 deg, never independently queried and never
//! retrograde.

use udaya_vedic_base::{
    Graha, LagnaVariant, SAPTA_GRAHAS, VariantConfig, elapsed_minutes, normalize_360,
    progress_longitude,
};

use crate::anchor::locate_anchor;
use crate::error::ChartError;
use crate::provider::EphemerisProvider;
use crate::types::{BirthInput, Chart, ChartConfig, LongitudePoint, PlanetPosition};

/// Compute a special-lagna chart from raw request fields.
///
/// Parses and validates the civil date/time, then delegates to
/// [`compute_chart_with_config`] with sidereal defaults.
pub fn compute_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    variant: LagnaVariant,
    birth_date: &str,
    birth_time: &str,
    latitude_deg: f64,
    longitude_deg: f64,
    tz_offset_hours: f64,
) -> Result<Chart, ChartError> {
    let input = BirthInput::parse(
        birth_date,
        birth_time,
        latitude_deg,
        longitude_deg,
        tz_offset_hours,
    )?;
    compute_chart_with_config(provider, &ChartConfig::new(variant), &input)
}

/// Compute a special-lagna chart for a validated birth input.
pub fn compute_chart_with_config<P: EphemerisProvider + ?Sized>(
    provider: &P,
    config: &ChartConfig,
    input: &BirthInput,
) -> Result<Chart, ChartError> {
    let birth_jd = input.moment();
    let variant_config = VariantConfig::for_variant(config.variant);

    let anchor = locate_anchor(provider, &variant_config, input, config.sidereal)?;
    let minutes = elapsed_minutes(birth_jd, anchor.jd_ut);
    let lagna_lon = progress_longitude(
        anchor.reference_lon_deg,
        minutes,
        variant_config.rate_deg_per_minute,
    );
    let lagna = LongitudePoint::from_longitude(lagna_lon);
    let lagna_rashi_index = lagna.rashi.index();

    let mut planets = [PlanetPosition::sentinel(); 9];
    for graha in SAPTA_GRAHAS {
        let state = provider.body_longitude(birth_jd, graha, config.sidereal)?;
        planets[graha.index() as usize] = PlanetPosition::place(
            graha,
            state.longitude_deg,
            state.speed_deg_per_day < 0.0,
            lagna_rashi_index,
        );
    }

    let rahu = provider.body_longitude(birth_jd, Graha::Rahu, config.sidereal)?;
    planets[Graha::Rahu.index() as usize] = PlanetPosition::place(
        Graha::Rahu,
        rahu.longitude_deg,
        rahu.speed_deg_per_day < 0.0,
        lagna_rashi_index,
    );

    // Ketu: the mirror node. Nodal points carry no independent
    // retrograde state in this model.
    let ketu_lon = normalize_360(rahu.longitude_deg + 180.0);
    planets[Graha::Ketu.index() as usize] =
        PlanetPosition::place(Graha::Ketu, ketu_lon, false, lagna_rashi_index);

    Ok(Chart {
        variant: config.variant,
        lagna,
        planets,
    })
}
