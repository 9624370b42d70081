//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Standard algorithm from Meeus, "Astronomical Algorithms" (2nd ed),
//! Chapter 7. Gregorian calendar only; all dates of interest to birth
//! charts are well past the 1582 reform.

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Julian Date from a Gregorian calendar date.
///
/// `day_frac` is the day-of-month plus the fractional day (hours/24 etc.).
/// The fraction may be negative or exceed 1; the continuous day-fraction
/// term absorbs timezone-induced rollover.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Gregorian calendar date from a Julian Date.
///
/// Returns `(year, month, day_frac)` where `day_frac` carries the
/// fractional day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Whole calendar date (year, month, day) containing a Julian Date.
pub fn jd_to_calendar_date(jd: f64) -> (i32, u32, u32) {
    let (year, month, day_frac) = jd_to_calendar(jd);
    (year, month, day_frac.floor() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        // 2000-01-01 12:00 UT = JD 2451545.0
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn known_date_2024() {
        // 2024-01-15 00:00 UT = JD 2460324.5
        let jd = calendar_to_jd(2024, 1, 15.0);
        assert!((jd - 2_460_324.5).abs() < 1e-9);
    }

    #[test]
    fn january_february_fold() {
        // Month <= 2 folds into the previous year; check continuity
        let jd_dec31 = calendar_to_jd(2023, 12, 31.0);
        let jd_jan1 = calendar_to_jd(2024, 1, 1.0);
        assert!((jd_jan1 - jd_dec31 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_whole_days() {
        let jd = calendar_to_jd(1987, 6, 19.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (1987, 6));
        assert!((d - 19.0).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_fractional_day() {
        let jd = calendar_to_jd(2024, 3, 20.0 + 18.75 / 24.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 3));
        assert!((d - (20.0 + 18.75 / 24.0)).abs() < 1e-8);
    }

    #[test]
    fn negative_day_fraction_rolls_back() {
        // day 15 with -6h fraction lands on the 14th, 18:00
        let jd = calendar_to_jd(2024, 1, 15.0 - 6.0 / 24.0);
        let (_, _, day) = jd_to_calendar(jd);
        assert!((day - 14.75).abs() < 1e-8);
    }

    #[test]
    fn calendar_date_truncates() {
        let jd = calendar_to_jd(2024, 1, 15.0 + 23.9 / 24.0);
        assert_eq!(jd_to_calendar_date(jd), (2024, 1, 15));
    }
}
