//! Calendar-independent date and the proleptic Gregorian calendar.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A calendar-independent date, stored as its Julian day number (JDN).
///
/// JDN 0 is January 1, 4713 BC in the proleptic Julian calendar. Dates before
/// it have negative numbers; nothing here assumes the count is positive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` from a proleptic Gregorian calendar date.
    ///
    /// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is `-1`,
    /// etc. The calendar reform of 1582 is not applied.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDate`] if the month is not `1..=12` or the day does not
    /// exist in that month.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 4, 31).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(Error::InvalidDate { year, month, day });
        }
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
        let a = (14 - m).div_euclid(12);
        let y = y + 4800 - a;
        let m = m + 12 * a - 3;
        let jdn = d + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045;
        i32::try_from(jdn)
            .map(Self::from_jdn)
            .map_err(|_| Error::InvalidDate { year, month, day })
    }

    /// Represents the date in the proleptic Gregorian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{CalendarDate, Date};
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!(CalendarDate { year: 2000, month: 1, day: 1 }, date.gregorian());
    /// ```
    pub fn gregorian(&self) -> CalendarDate {
        let a = i64::from(self.jdn) + 32044;
        let b = (4 * a + 3).div_euclid(146097);
        let c = a - (146097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);
        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4800 + m.div_euclid(10);
        CalendarDate {
            // |year| stays below 2**31 / 365 for every i32 JDN
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        self.gregorian().to_string()
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn.rem_euclid(7) as u32 + 1
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// A day of the proleptic Gregorian calendar.
///
/// Values built through [`CalendarDate::new`], [`FromStr`] or
/// [`Date::gregorian`] are always valid; the fields are public, so one built
/// literally is checked again when converted with [`CalendarDate::to_date`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Validates and creates a Gregorian date.
    ///
    /// ```
    /// use amlich::{CalendarDate, Error};
    ///
    /// assert!(CalendarDate::new(2024, 2, 29).is_ok());
    /// assert_eq!(
    ///     Err(Error::InvalidDate { year: 2023, month: 2, day: 29 }),
    ///     CalendarDate::new(2023, 2, 29)
    /// );
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        Date::from_gregorian(year, month, day)?;
        Ok(Self { year, month, day })
    }
    /// Converts to the Julian day timeline.
    pub fn to_date(&self) -> Result<Date, Error> {
        Date::from_gregorian(self.year, self.month, self.day)
    }
}

impl From<Date> for CalendarDate {
    fn from(date: Date) -> Self {
        date.gregorian()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parses `YYYY-MM-DD`; a leading `-` marks a negative (astronomical) year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || Error::Parse(s.to_owned());
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let mut it = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (it.next(), it.next(), it.next()) else {
            return Err(parse_err());
        };
        let year: i32 = y.parse().map_err(|_| parse_err())?;
        let month = m.parse().map_err(|_| parse_err())?;
        let day = d.parse().map_err(|_| parse_err())?;
        Self::new(sign * year, month, day)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in a Gregorian month; 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        _ => 0,
    }
}
