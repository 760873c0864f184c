//! Truncated series for new moons and the sun's longitude.
//!
//! Both are low-order approximations: new moons come out within a few
//! minutes and the solar longitude within about 0.01° for the centuries
//! around 1900, which is what the civil calendar needs. Everything past
//! [`SUPPORTED_YEARS`](crate::SUPPORTED_YEARS) degrades gradually.

use std::f64::consts::PI;

use tracing::trace;

use crate::date::Date;
use crate::error::Error;
use crate::time_scales::{TimeZone, Tt, Ut};

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;
/// JD (UT) of new moon number 0, 1900 January 1.
pub const EPOCH_NEW_MOON: f64 = 2415021.076998695;

const DR: f64 = PI / 180.0;

/// Estimated instant of new moon number `k`, counted from [`EPOCH_NEW_MOON`].
///
/// # Example
///
/// ```
/// use amlich::lunar::astro::new_moon_instant;
///
/// // 2000-01-06T18:14Z
/// assert!((new_moon_instant(1237).0 - 2451550.26).abs() < 0.01);
/// ```
pub fn new_moon_instant(k: i32) -> Ut {
    let k = f64::from(k);
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;

    let mean = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3
        + 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DR).sin();
    // sun's mean anomaly, moon's mean anomaly, moon's argument of latitude
    let m = (359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3) * DR;
    let mpr = (306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3) * DR;
    let f = (21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3) * DR;

    let c1 = (0.1734 - 0.000393 * t) * m.sin() + 0.0021 * (2.0 * m).sin()
        - 0.4068 * mpr.sin()
        + 0.0161 * (2.0 * mpr).sin()
        - 0.0004 * (3.0 * mpr).sin()
        + 0.0104 * (2.0 * f).sin()
        - 0.0051 * (m + mpr).sin()
        - 0.0074 * (m - mpr).sin()
        + 0.0004 * (2.0 * f + m).sin()
        - 0.0004 * (2.0 * f - m).sin()
        - 0.0006 * (2.0 * f + mpr).sin()
        + 0.0010 * (2.0 * f - mpr).sin()
        + 0.0005 * (2.0 * mpr + m).sin();

    Ut::from_tt(Tt(mean + c1), t)
}

/// Local civil day of new moon number `k`.
pub fn new_moon_day(k: i32, tz: TimeZone) -> Date {
    new_moon_instant(k).date_in_timezone(tz)
}

/// Index of the last mean new moon at or before `date`; the true new moon
/// may be one off.
pub fn lunation_index_near(date: Date) -> i32 {
    ((f64::from(date.jdn()) - EPOCH_NEW_MOON) / SYNODIC_MONTH).floor() as i32
}

/// The sun's longitude in degrees, `0.0..360.0`, at Julian date `jd`.
///
/// Mean longitude plus the equation of center; aberration and nutation are
/// left out.
///
/// ```
/// use amlich::lunar::astro::sun_longitude;
///
/// // J2000.0
/// assert!((sun_longitude(2451545.0) - 280.38).abs() < 0.01);
/// ```
pub fn sun_longitude(jd: f64) -> f64 {
    let t = (jd - 2451545.0) / 36525.0;
    let t2 = t * t;
    let m = (357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2) * DR;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000290 * (3.0 * m).sin();
    (l0 + dl).rem_euclid(360.0)
}

/// The 30° sector (`0..=11`, 0 from the vernal equinox) the sun is in at
/// local midnight opening `date`.
///
/// A month whose first day and the next month's first day share a sector
/// contains no major solar term. Sector 9 begins at the winter solstice.
pub fn sun_sector(date: Date, tz: TimeZone) -> u32 {
    (sun_longitude(Ut::local_midnight(date, tz).0) / 30.0).floor() as u32
}

/// The 15° solar term (`0..=23`, 0 for 春分 / Xuân phân) in effect at the
/// end of local day `date`.
pub fn solar_term(date: Date, tz: TimeZone) -> u32 {
    (sun_longitude(Ut::local_midnight(date + 1, tz).0) / 15.0).floor() as u32
}

/// One new moon, identified by index, with the civil day it falls on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Lunation {
    pub index: i32,
    pub day: Date,
}

impl Lunation {
    pub fn new(index: i32, tz: TimeZone) -> Self {
        Self {
            index,
            day: new_moon_day(index, tz),
        }
    }
    fn sector(&self, tz: TimeZone) -> u32 {
        sun_sector(self.day, tz)
    }
}

/// Finds the lunation beginning month 11 of Gregorian `year`, i.e. the one
/// whose month contains the December solstice.
///
/// Starts from the mean new moon before 31 December and looks back at most
/// three lunations for the last one beginning before the solstice sector.
pub(crate) fn month_eleven(year: i32, tz: TimeZone) -> Result<Lunation, Error> {
    let dec31 = Date::from_gregorian(year, 12, 31)?;
    let k = lunation_index_near(dec31);
    for index in (k - 2..=k + 1).rev() {
        let lunation = Lunation::new(index, tz);
        let sector = lunation.sector(tz);
        trace!(year, index, day = %lunation.day.iso_gregorian(), sector, "month 11 candidate");
        if sector >= 9 {
            continue;
        }
        let next = Lunation::new(index + 1, tz);
        if next.sector(tz) < 9 {
            break;
        }
        return Ok(lunation);
    }
    Err(Error::Computation(format!(
        "no lunation around lunation {k} contains the winter solstice of {year}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn new_moons() {
        let ict = TimeZone::ICT;
        let k = lunation_index_near(date(2000, 1, 7));
        assert_eq!(1237, k);
        assert_eq!("2000-01-07", new_moon_day(k, ict).iso_gregorian());
        // 2000-01-06T18:14Z is still the 6th in UTC
        assert_eq!("2000-01-06", new_moon_day(k, TimeZone::UTC).iso_gregorian());
        assert_eq!("2025-11-20", new_moon_day(lunation_index_near(date(2025, 11, 24)), ict).iso_gregorian());
    }

    #[test]
    fn epoch_new_moon() {
        assert!((new_moon_instant(0).0 - EPOCH_NEW_MOON).abs() < 0.05);
        assert_eq!("1900-01-01", new_moon_day(0, TimeZone::ICT).iso_gregorian());
    }

    #[test]
    fn lunation_lengths() {
        for k in 1000..1100 {
            let len = new_moon_day(k + 1, TimeZone::ICT) - new_moon_day(k, TimeZone::ICT);
            assert!((29..=30).contains(&len), "lunation {k} lasts {len} days");
        }
    }

    #[test]
    fn sun_longitude_range() {
        for i in 0..1000 {
            let l = sun_longitude(2451545.0 + f64::from(i) * 3.7);
            assert!((0.0..360.0).contains(&l));
        }
    }

    #[test]
    fn solstice_sectors() {
        // December solstice 2024: 09:20 UTC on the 21st
        assert_eq!(8, sun_sector(date(2024, 12, 21), TimeZone::ICT));
        assert_eq!(9, sun_sector(date(2024, 12, 22), TimeZone::ICT));
        // March equinox 2024: 03:06 UTC on the 20th
        assert_eq!(11, sun_sector(date(2024, 3, 20), TimeZone::ICT));
        assert_eq!(0, sun_sector(date(2024, 3, 21), TimeZone::ICT));
    }

    #[test]
    fn solar_terms() {
        // Đông chí (270°) falls on 2024-12-21
        assert_eq!(18, solar_term(date(2024, 12, 21), TimeZone::ICT));
        assert_eq!(17, solar_term(date(2024, 12, 20), TimeZone::ICT));
        // Xuân phân 2024-03-20
        assert_eq!(0, solar_term(date(2024, 3, 20), TimeZone::ICT));
    }

    #[test]
    fn month_eleven_start() {
        for (year, expected) in [
            (1999, "1999-12-08"),
            (2000, "2000-11-26"),
            (2016, "2016-11-29"),
            (2017, "2017-12-18"),
            (2024, "2024-12-01"),
        ] {
            let lunation = month_eleven(year, TimeZone::ICT).unwrap();
            assert_eq!(expected, lunation.day.iso_gregorian(), "{year}");
        }
    }
}
