//! Rashi (zodiac sign) resolution and whole-sign house placement.
//!
//! The ecliptic circle divides into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 degrees. House numbers are counted
//! whole-sign from the lagna's rashi: the lagna sign is house 1.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 rashis in fixed order from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha .. 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }
}

/// Degrees-minutes-seconds representation of an angle within a sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds, may carry a fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem = (d - degrees as f64) * 60.0;
    let minutes = rem.floor() as u8;
    let seconds = (rem - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Convert degrees-minutes-seconds back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Result of rashi resolution for a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    /// The rashi the longitude falls in.
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi, [0.0, 30.0).
    pub degrees_in_rashi: f64,
    /// Position within the rashi as DMS.
    pub dms: Dms,
}

/// Resolve a longitude in degrees into its rashi.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), ... Meena = [330, 360). Input
/// outside [0, 360) is normalized first.
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(lon_deg);
    // Clamp guards the exact-360.0 floating point edge.
    let rashi_index = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - rashi_index as f64 * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}

/// Whole-sign house number of a planet's rashi relative to the lagna rashi.
///
/// `((planet - lagna) mod 12) + 1`, always in [1, 12]. A planet sharing
/// the lagna's rashi occupies house 1.
pub fn house_from_rashi(planet_rashi_index: u8, lagna_rashi_index: u8) -> u8 {
    ((planet_rashi_index as i32 - lagna_rashi_index as i32).rem_euclid(12)) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn rashi_names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
            assert!(!r.western_name().is_empty());
        }
    }

    #[test]
    fn rashi_at_zero() {
        let info = rashi_from_longitude(0.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert!(info.degrees_in_rashi.abs() < 1e-12);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let info = rashi_from_longitude(i as f64 * 30.0);
            assert_eq!(info.rashi_index, i, "boundary at {}", i as f64 * 30.0);
            assert!(info.degrees_in_rashi.abs() < 1e-12);
        }
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(194.0);
        assert_eq!(info.rashi, Rashi::Tula);
        assert!((info.degrees_in_rashi - 14.0).abs() < 1e-12);
    }

    #[test]
    fn rashi_wraps_and_normalizes() {
        let info = rashi_from_longitude(370.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        let info = rashi_from_longitude(-15.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 15.0).abs() < 1e-12);
    }

    #[test]
    fn longitude_roundtrip_from_sign_and_degree() {
        // sign_index * 30 + degrees_in_rashi recovers the longitude exactly
        for i in 0..3600 {
            let lon = i as f64 * 0.1;
            let info = rashi_from_longitude(lon);
            let rebuilt = info.rashi_index as f64 * 30.0 + info.degrees_in_rashi;
            assert!(
                (rebuilt - normalize_360(lon)).abs() < 1e-9,
                "roundtrip failed at {lon}"
            );
        }
    }

    #[test]
    fn dms_known_value() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn dms_roundtrip() {
        let d = deg_to_dms(15.5);
        assert!((dms_to_deg(&d) - 15.5).abs() < 1e-9);
    }

    #[test]
    fn house_of_lagna_sign_is_one() {
        for i in 0..12 {
            assert_eq!(house_from_rashi(i, i), 1);
        }
    }

    #[test]
    fn house_wraps_below_lagna() {
        // Planet one sign behind the lagna sits in house 12
        assert_eq!(house_from_rashi(0, 1), 12);
        assert_eq!(house_from_rashi(5, 9), 9);
    }

    #[test]
    fn houses_partition_twelve() {
        let lagna = 7u8;
        let mut seen = [false; 12];
        for planet in 0..12u8 {
            let h = house_from_rashi(planet, lagna);
            assert!((1..=12).contains(&h));
            seen[(h - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
