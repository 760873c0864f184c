//! Time scales and local civil days.
//!
//! Astronomical instants are carried as Julian dates (real-valued, day
//! boundaries at noon). The series used by [`crate::lunar::astro`] produce
//! Terrestrial Time; [`Ut::from_tt`] removes ΔT, and [`Ut::date_in_timezone`]
//! truncates to the civil day of an observer east of Greenwich by a fixed
//! [`TimeZone`] offset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::error::Error;

/// [Terrestrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time),
/// represented in Julian date (JD). Determines the civil date of an instant.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Converts a TT instant into UT with the polynomial ΔT estimate.
    ///
    /// `t` is the epoch of the instant in Julian centuries since 1900 January
    /// 0.5, as used by the new moon series.
    pub fn from_tt(tt: Tt, t: f64) -> Self {
        Ut(tt.0 - delta_t(t))
    }
    /// Returns the date at the time point in `tz`.
    ///
    /// Civil days run from local midnight to local midnight, so the JD is
    /// shifted by half a day plus the offset and floored.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::time_scales::{TimeZone, Ut};
    ///
    /// // 2000-01-06T18:14Z
    /// let ut = Ut(2451550.26);
    /// assert_eq!("2000-01-06", ut.date_in_timezone(TimeZone::UTC).iso_gregorian());
    /// let ict = TimeZone::from_hours(7.0).unwrap();
    /// assert_eq!("2000-01-07", ut.date_in_timezone(ict).iso_gregorian());
    /// ```
    pub fn date_in_timezone(&self, tz: TimeZone) -> Date {
        Date::from_jdn((self.0 + 0.5 + tz.day_fraction()).floor() as i32)
    }
    /// The instant of local midnight opening `date` in `tz`.
    pub fn local_midnight(date: Date, tz: TimeZone) -> Self {
        Ut(date.jdn() as f64 - 0.5 - tz.day_fraction())
    }
}

/// ΔT = TT - UT in days, `t` in Julian centuries since 1900.
///
/// Two polynomial fits: one for the historical era (`t < -11`, i.e. before
/// about 800 CE) and one for the recent past and near future.
pub fn delta_t(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    }
}

/// A fixed offset east of UTC, in whole minutes.
///
/// Vietnam has used +07:00 since 1968 and +08:00 before; which one applies is
/// a decision for the caller.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TimeZone {
    minutes: i32,
}

impl TimeZone {
    pub const UTC: TimeZone = TimeZone { minutes: 0 };
    /// Indochina Time, UTC+7.
    pub const ICT: TimeZone = TimeZone { minutes: 420 };
    /// China Standard Time, UTC+8.
    pub const CST: TimeZone = TimeZone { minutes: 480 };

    const RANGE: std::ops::RangeInclusive<i32> = -12 * 60..=14 * 60;

    /// Creates an offset from minutes east of UTC, e.g. `420` for UTC+7.
    pub fn from_minutes(minutes: i32) -> Result<Self, Error> {
        if !Self::RANGE.contains(&minutes) {
            return Err(Error::InvalidTimeZone(format!("{minutes} minutes")));
        }
        Ok(Self { minutes })
    }
    /// Creates an offset from hours east of UTC, rounded to the minute.
    ///
    /// ```
    /// use amlich::time_scales::TimeZone;
    ///
    /// assert_eq!(345, TimeZone::from_hours(5.75).unwrap().minutes());
    /// assert!(TimeZone::from_hours(f64::NAN).is_err());
    /// assert!(TimeZone::from_hours(15.0).is_err());
    /// ```
    pub fn from_hours(hours: f64) -> Result<Self, Error> {
        if !hours.is_finite() {
            return Err(Error::InvalidTimeZone(format!("{hours} hours")));
        }
        let minutes = (hours * 60.0).round();
        if minutes < f64::from(*Self::RANGE.start()) || minutes > f64::from(*Self::RANGE.end()) {
            return Err(Error::InvalidTimeZone(format!("{hours} hours")));
        }
        Self::from_minutes(minutes as i32)
    }
    pub fn minutes(&self) -> i32 {
        self.minutes
    }
    pub fn hours(&self) -> f64 {
        f64::from(self.minutes) / 60.0
    }
    /// The offset as a fraction of a day.
    pub fn day_fraction(&self) -> f64 {
        f64::from(self.minutes) / 1440.0
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::ICT
    }
}

impl TryFrom<f64> for TimeZone {
    type Error = Error;
    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        Self::from_hours(hours)
    }
}

impl From<TimeZone> for f64 {
    fn from(tz: TimeZone) -> f64 {
        tz.hours()
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let m = self.minutes.abs();
        write!(f, "UTC{sign}{:02}:{:02}", m / 60, m % 60)
    }
}
