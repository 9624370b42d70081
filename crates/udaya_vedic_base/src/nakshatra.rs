//! Nakshatra (lunar mansion) resolution.
//!
//! The ecliptic circle divides into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, from Ashwini to Revati. Each nakshatra has 4
//! padas (quarters) of 3 deg 20'. Every nakshatra carries a ruling graha
//! per the universal Vimshottari assignment: the nine-graha cycle
//! Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh
//! repeats three times across the 27.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: NAKSHATRA_SPAN/4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini .. 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// Ruling graha (Vimshottari lordship cycle).
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ashwini | Self::Magha | Self::Mula => Graha::Ketu,
            Self::Bharani | Self::PurvaPhalguni | Self::PurvaAshadha => Graha::Shukra,
            Self::Krittika | Self::UttaraPhalguni | Self::UttaraAshadha => Graha::Surya,
            Self::Rohini | Self::Hasta | Self::Shravana => Graha::Chandra,
            Self::Mrigashira | Self::Chitra | Self::Dhanishtha => Graha::Mangal,
            Self::Ardra | Self::Swati | Self::Shatabhisha => Graha::Rahu,
            Self::Punarvasu | Self::Vishakha | Self::PurvaBhadrapada => Graha::Guru,
            Self::Pushya | Self::Anuradha | Self::UttaraBhadrapada => Graha::Shani,
            Self::Ashlesha | Self::Jyeshtha | Self::Revati => Graha::Buddh,
        }
    }
}

/// Result of nakshatra resolution for a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    /// The nakshatra the longitude falls in.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Ruling graha of the nakshatra.
    pub lord: Graha,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra, [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Resolve a longitude in degrees into its nakshatra and pada.
///
/// Input outside [0, 360) is normalized first.
pub fn nakshatra_from_longitude(lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(lon_deg);
    // Clamp guards the exact-360.0 floating point edge.
    let nakshatra_index = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - nakshatra_index as f64 * NAKSHATRA_SPAN;
    let pada_index = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let nakshatra = ALL_NAKSHATRAS[nakshatra_index as usize];

    NakshatraInfo {
        nakshatra,
        nakshatra_index,
        lord: nakshatra.lord(),
        pada: pada_index + 1,
        degrees_in_nakshatra,
    }
}
