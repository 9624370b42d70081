//! Pure-math Vedic reference tables and derivations.
//!
//! This crate provides:
//! - The 12 rashis and 27 nakshatras as immutable lookup tables
//! - The 9 grahas and the sapta-graha subset
//! - Longitude → rashi / nakshatra / pada / house resolution
//! - Bhava and Hora Lagna progression from a sunrise anchor
//!
//! Everything here is total arithmetic over longitudes in degrees; no
//! ephemeris access, no I/O, no shared state.

pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use lagna::{
    LagnaVariant, ReferenceSource, SunriseSearchPolicy, VariantConfig, elapsed_minutes,
    progress_longitude,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, house_from_rashi,
    rashi_from_longitude,
};
pub use util::normalize_360;
