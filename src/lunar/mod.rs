//! Vietnamese lunar calendar.
//!
//! The calendar is the Chinese lunisolar one evaluated at a caller-chosen
//! [`TimeZone`]: a month starts on the local civil day of a new moon, month 11
//! is the month containing the December solstice, and a year with 13 months
//! between two month-11 starts repeats the first month that contains no major
//! solar term.
//!
//! New moons and solar longitudes come from the truncated series in
//! [`astro`]; see [`SUPPORTED_YEARS`] for the range they are trusted in.

use std::fmt as std_fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::date::{CalendarDate, Date};
use crate::error::Error;
use crate::time_scales::TimeZone;

pub mod astro;
pub mod cache;
pub mod fmt;
pub mod sexagenary;

pub use cache::LunarYearCache;
pub use sexagenary::{Branch, SexagenaryName, Stem};

/// Gregorian years for which the astronomical series are considered
/// accurate enough to fix month boundaries.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1200..=2199;

/// Whether `year` lies in [`SUPPORTED_YEARS`].
pub fn is_supported_year(year: i32) -> bool {
    SUPPORTED_YEARS.contains(&year)
}

/// What to do with a year outside [`SUPPORTED_YEARS`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangePolicy {
    /// Fail with [`Error::UnsupportedRange`].
    #[default]
    Strict,
    /// Compute anyway and log a warning.
    BestEffort,
}

impl RangePolicy {
    fn check(self, year: i32, range: RangeInclusive<i32>) -> Result<(), Error> {
        if range.contains(&year) {
            return Ok(());
        }
        match self {
            RangePolicy::Strict => Err(Error::UnsupportedRange { year }),
            RangePolicy::BestEffort => {
                warn!(year, "year outside the supported range, result is best effort");
                Ok(())
            }
        }
    }
    /// A Gregorian year given by the caller.
    fn check_year(self, year: i32) -> Result<(), Error> {
        self.check(year, SUPPORTED_YEARS)
    }
    /// A lunar year (annus); the one ending in December after the last
    /// supported year is still needed to cover it.
    fn check_annus(self, annus: i32) -> Result<(), Error> {
        self.check(annus, *SUPPORTED_YEARS.start()..=*SUPPORTED_YEARS.end() + 1)
    }
}

/// A lunar year as the calendar computes it: the span from one month 11
/// (inclusive) to the next (exclusive), i.e. between the months of two
/// consecutive December solstices.
///
/// This differs from the year as people count it, which begins with month 1
/// (Tết); [`LunarYear::lunar_date_for`] maps dates to the counted year.
///
/// # Example
///
/// ```
/// use amlich::Date;
/// use amlich::lunar::{LunarYear, Month::*};
/// use amlich::time_scales::TimeZone;
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// let year = LunarYear::from_date(date, TimeZone::ICT).unwrap();
/// let lunar = year.lunar_date_for(date).unwrap();
///
/// assert_eq!((1999, Common(11), 25), (lunar.year, lunar.month, lunar.day));
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// Gregorian year in which the span ends (and mostly falls).
    pub annus: i32,
    pub time_zone: TimeZone,
    /// Every month start, plus the next year's month 11 to mark the end.
    pub months: Vec<NewMoon>,
}

/// Start of one lunar month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewMoon {
    pub month: Month,
    /// Index of the new moon counted from 1900 January 1.
    pub lunation: i32,
    /// Local civil day of the new moon; day 1 of the month.
    pub date: Date,
}

/// Month name. `Common` for ordinary months, `Leap` for the intercalary month,
/// which repeats the number of the month before it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// Month number, leap or not.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for a leap month.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// Name of the month, see [`fmt::month`].
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

impl std_fmt::Display for Month {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        match self.num() {
            1..=12 => f.write_str(&self.name()),
            n => write!(f, "month {n}{}", if self.is_leap() { " (leap)" } else { "" }),
        }
    }
}

/// A day of the lunar calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Year as counted from Tết, numbered like the Gregorian year it starts
    /// in.
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl LunarDate {
    /// Creates a lunar date without checking it exists; [`to_solar`] does.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        let month = if is_leap_month {
            Month::Leap(month)
        } else {
            Month::Common(month)
        };
        Self { year, month, day }
    }
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
    /// The [`LunarYear::annus`] whose span contains this date.
    fn annus(&self) -> i32 {
        if self.month.num() >= 11 {
            self.year + 1
        } else {
            self.year
        }
    }
    /// Can-Chi of the month.
    pub fn month_can_chi(&self) -> SexagenaryName {
        sexagenary::month_can_chi(self.year, self.month.num())
    }
    /// Can-Chi of the year.
    pub fn year_can_chi(&self) -> SexagenaryName {
        sexagenary::year_can_chi(self.year)
    }
    fn invalid(&self) -> Error {
        Error::InvalidLunarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

impl std_fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        match self.day {
            1..=30 => write!(f, "{} {} năm {}", fmt::day(self.day), self.month, self.year),
            d => write!(f, "day {d} {} năm {}", self.month, self.year),
        }
    }
}

/// The date lies outside the lunar year, before or after it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

impl LunarYear {
    /// Builds the lunar year ending with the month 11 of Gregorian year
    /// `annus`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedRange`] outside [`SUPPORTED_YEARS`], and
    /// [`Error::Computation`] if the estimates do not yield 12 or 13 months
    /// with a well-placed leap month.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::lunar::{LunarYear, Month};
    /// use amlich::time_scales::TimeZone;
    ///
    /// let year = LunarYear::new(2017, TimeZone::ICT).unwrap();
    /// assert_eq!(Some(Month::Leap(6)), year.leap_month());
    /// ```
    pub fn new(annus: i32, tz: TimeZone) -> Result<Self, Error> {
        Self::with_policy(annus, tz, RangePolicy::Strict)
    }

    /// Like [`LunarYear::new`], with an explicit [`RangePolicy`].
    pub fn with_policy(annus: i32, tz: TimeZone, policy: RangePolicy) -> Result<Self, Error> {
        use Month::*;

        policy.check_annus(annus)?;
        let first = astro::month_eleven(annus - 1, tz)?;
        let last = astro::month_eleven(annus, tz)?;
        let count = last.index - first.index;
        let needs_leap = match count {
            12 => false,
            13 => true,
            _ => {
                return Err(Error::Computation(format!(
                    "{count} months between the winter solstices of {} and {annus}",
                    annus - 1
                )));
            }
        };

        let lunations: Vec<_> = (first.index..=last.index)
            .map(|k| astro::Lunation::new(k, tz))
            .collect();
        let leap_idx = if needs_leap {
            let sectors: Vec<_> = lunations
                .iter()
                .map(|l| astro::sun_sector(l.day, tz))
                .collect();
            let idx = (1..lunations.len() - 1)
                .find(|&i| sectors[i] == sectors[i + 1])
                .ok_or_else(|| {
                    Error::Computation(format!(
                        "13 months but none without a major term in lunar year {annus}"
                    ))
                })?;
            Some(idx)
        } else {
            None
        };

        let mut months = Vec::with_capacity(lunations.len());
        let mut month = 10;
        for (i, lunation) in lunations.iter().enumerate() {
            let name = if Some(i) == leap_idx {
                Leap(month)
            } else {
                month = month % 12 + 1;
                Common(month)
            };
            months.push(NewMoon {
                month: name,
                lunation: lunation.index,
                date: lunation.day,
            });
        }

        debug!(
            annus,
            tz = %tz,
            months = count,
            leap = ?leap_idx.map(|i| months[i].month),
            "built lunar year"
        );
        Ok(LunarYear {
            annus,
            time_zone: tz,
            months,
        })
    }

    /// The lunar year containing `date`.
    ///
    /// ```
    /// use amlich::Date;
    /// use amlich::lunar::LunarYear;
    /// use amlich::time_scales::TimeZone;
    ///
    /// let date = Date::from_gregorian(2017, 12, 18).unwrap();
    /// let year = LunarYear::from_date(date, TimeZone::ICT).unwrap();
    ///
    /// assert_eq!(2018, year.annus);
    /// ```
    pub fn from_date(date: Date, tz: TimeZone) -> Result<Self, Error> {
        Self::from_date_with_policy(date, tz, RangePolicy::Strict)
    }

    /// Like [`LunarYear::from_date`], with an explicit [`RangePolicy`].
    pub fn from_date_with_policy(
        date: Date,
        tz: TimeZone,
        policy: RangePolicy,
    ) -> Result<Self, Error> {
        let mut annus = date.gregorian().year;
        // a date falls in the lunar year of its Gregorian year or the next
        for _ in 0..3 {
            let year = Self::with_policy(annus, tz, policy)?;
            match year.lunar_date_for(date) {
                Ok(_) => return Ok(year),
                Err(OtherYear::Before) => annus -= 1,
                Err(OtherYear::After) => annus += 1,
            }
        }
        Err(Error::Computation(format!(
            "no lunar year around {annus} contains {}",
            date.iso_gregorian()
        )))
    }

    /// First day of the lunar year (month 11).
    pub fn start(&self) -> Date {
        self.months[0].date
    }
    /// First day after the lunar year.
    pub fn end(&self) -> Date {
        self.months[self.months.len() - 1].date
    }
    /// Number of months, 12 or 13.
    pub fn month_count(&self) -> usize {
        self.months.len() - 1
    }
    /// Whether the year has an intercalary month.
    pub fn is_leap_year(&self) -> bool {
        self.month_count() == 13
    }
    /// The intercalary month, if any.
    pub fn leap_month(&self) -> Option<Month> {
        self.months[..self.month_count()]
            .iter()
            .map(|m| m.month)
            .find(Month::is_leap)
    }
    /// Length in days of the `i`-th month (0 is month 11), 29 or 30.
    ///
    /// # Panics
    ///
    /// If `i >= self.month_count()`.
    pub fn month_length(&self, i: usize) -> u32 {
        (self.months[i + 1].date - self.months[i].date) as u32
    }

    /// The lunar date of `date`.
    ///
    /// Reports `Err` telling whether the date comes before or after this lunar
    /// year if it is not inside.
    ///
    /// ```
    /// use amlich::Date;
    /// use amlich::lunar::{LunarYear, LunarDate, OtherYear};
    /// use amlich::time_scales::TimeZone;
    ///
    /// let year = LunarYear::new(2017, TimeZone::ICT).unwrap();
    /// let date = Date::from_gregorian(2017, 7, 23).unwrap();
    ///
    /// assert_eq!(Ok(LunarDate::new(2017, 6, 1, true)), year.lunar_date_for(date));
    /// assert_eq!(Err(OtherYear::After), year.lunar_date_for(date + 200));
    /// ```
    pub fn lunar_date_for(&self, date: Date) -> Result<LunarDate, OtherYear> {
        if date < self.start() {
            return Err(OtherYear::Before);
        } else if date >= self.end() {
            return Err(OtherYear::After);
        }

        let m = &self.months[self.months.partition_point(|m| m.date <= date) - 1];
        let day = (date - m.date + 1) as u32;
        let year = if m.month.num() >= 11 {
            self.annus - 1
        } else {
            self.annus
        };
        Ok(LunarDate {
            year,
            month: m.month,
            day,
        })
    }

    /// The day on which `lunar` falls.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLunarDate`] if the date belongs to another lunar year,
    /// names a month this year lacks (e.g. a leap month that is not there),
    /// or a day past the end of the month.
    pub fn date_for(&self, lunar: LunarDate) -> Result<Date, Error> {
        if lunar.annus() != self.annus {
            return Err(lunar.invalid());
        }
        let i = self.months[..self.month_count()]
            .iter()
            .position(|m| m.month == lunar.month)
            .ok_or_else(|| lunar.invalid())?;
        if lunar.day == 0 || lunar.day > self.month_length(i) {
            return Err(lunar.invalid());
        }
        Ok(self.months[i].date + (lunar.day as i32 - 1))
    }
}

/// Converts a Gregorian date to the lunar calendar at `tz`.
///
/// # Example
///
/// ```
/// use amlich::{to_lunar, CalendarDate, LunarDate};
/// use amlich::time_scales::TimeZone;
///
/// let date = CalendarDate::new(2025, 11, 24).unwrap();
/// assert_eq!(Ok(LunarDate::new(2025, 10, 5, false)), to_lunar(date, TimeZone::ICT));
/// ```
pub fn to_lunar(date: CalendarDate, tz: TimeZone) -> Result<LunarDate, Error> {
    to_lunar_with_policy(date, tz, RangePolicy::Strict)
}

/// Like [`to_lunar`], with an explicit [`RangePolicy`].
pub fn to_lunar_with_policy(
    date: CalendarDate,
    tz: TimeZone,
    policy: RangePolicy,
) -> Result<LunarDate, Error> {
    let day = date.to_date()?;
    policy.check_year(date.year)?;
    let year = LunarYear::from_date_with_policy(day, tz, policy)?;
    year.lunar_date_for(day)
        .map_err(|_| Error::Computation(format!("{date} left lunar year {}", year.annus)))
}

/// Converts a lunar date at `tz` back to the Gregorian calendar.
///
/// # Example
///
/// ```
/// use amlich::{to_solar, CalendarDate, LunarDate};
/// use amlich::time_scales::TimeZone;
///
/// // Tết Ất Tỵ
/// let tet = LunarDate::new(2025, 1, 1, false);
/// assert_eq!(CalendarDate::new(2025, 1, 29), to_solar(tet, TimeZone::ICT));
/// ```
pub fn to_solar(lunar: LunarDate, tz: TimeZone) -> Result<CalendarDate, Error> {
    to_solar_with_policy(lunar, tz, RangePolicy::Strict)
}

/// Like [`to_solar`], with an explicit [`RangePolicy`].
pub fn to_solar_with_policy(
    lunar: LunarDate,
    tz: TimeZone,
    policy: RangePolicy,
) -> Result<CalendarDate, Error> {
    let year = LunarYear::with_policy(lunar.annus(), tz, policy)?;
    Ok(year.date_for(lunar)?.gregorian())
}

/// Can-Chi of a Gregorian day.
pub fn day_can_chi(date: CalendarDate) -> Result<SexagenaryName, Error> {
    Ok(sexagenary::for_date(date.to_date()?))
}

/// Can-Chi of the month of a lunar date.
pub fn month_can_chi(lunar: LunarDate) -> SexagenaryName {
    lunar.month_can_chi()
}

/// Can-Chi of the year of a lunar date.
pub fn year_can_chi(lunar: LunarDate) -> SexagenaryName {
    lunar.year_can_chi()
}

/// Solar term in effect at the end of `date` at `tz`, `0..=23` from the
/// vernal equinox; see [`fmt::solar_term`] for names.
pub fn solar_term(date: CalendarDate, tz: TimeZone) -> Result<u32, Error> {
    Ok(astro::solar_term(date.to_date()?, tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    fn cal(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn month_of(n: i32) -> Month {
        if n > 0 {
            Month::Common(n as u32)
        } else {
            Month::Leap(-n as u32)
        }
    }

    #[test]
    fn from_date() {
        let dataset = [
            (2017, (2017, 1, 27)),
            (2017, (2017, 12, 17)),
            (2018, (2017, 12, 18)),
            (2000, (2000, 1, 1)),
        ];
        for (std, (y, m, d)) in dataset {
            assert_eq!(
                Ok(std),
                LunarYear::from_date(date(y, m, d), TimeZone::ICT).map(|a| a.annus)
            );
        }
    }

    #[test]
    fn months() {
        let year = LunarYear::new(2000, TimeZone::ICT).unwrap();
        let stds = [
            (11, "1999-12-08"),
            (12, "2000-01-07"),
            (1, "2000-02-05"),
            (2, "2000-03-06"),
            (3, "2000-04-05"),
            (4, "2000-05-04"),
            (5, "2000-06-02"),
            (6, "2000-07-02"),
            (7, "2000-07-31"),
            (8, "2000-08-29"),
            (9, "2000-09-28"),
            (10, "2000-10-27"),
            (11, "2000-11-26"),
        ];
        assert_eq!(stds.len(), year.months.len());
        assert!(!year.is_leap_year());
        assert_eq!(None, year.leap_month());
        for (std, month) in stds.iter().zip(&year.months) {
            assert_eq!(Month::Common(std.0), month.month);
            assert_eq!(std.1, month.date.iso_gregorian());
        }
    }

    #[test]
    fn leap_months() {
        let stds = [
            (11, "2016-11-29"),
            (12, "2016-12-29"),
            (1, "2017-01-28"),
            (2, "2017-02-26"),
            (3, "2017-03-28"),
            (4, "2017-04-26"),
            (5, "2017-05-26"),
            (6, "2017-06-24"),
            (-6, "2017-07-23"),
            (7, "2017-08-22"),
            (8, "2017-09-20"),
            (9, "2017-10-20"),
            (10, "2017-11-18"),
            (11, "2017-12-18"),
        ];
        let year = LunarYear::new(2017, TimeZone::ICT).unwrap();
        for (std, month) in stds.iter().zip(&year.months) {
            assert_eq!(
                (month_of(std.0), std.1.into()),
                (month.month, month.date.iso_gregorian())
            );
        }
        assert_eq!(stds.len(), year.months.len());
        assert!(year.is_leap_year());
        for pair in year.months.windows(2) {
            assert_eq!(1, pair[1].lunation - pair[0].lunation);
        }
    }

    #[test]
    fn leap_month_2025() {
        let year = LunarYear::new(2025, TimeZone::ICT).unwrap();
        assert_eq!(Some(Month::Leap(6)), year.leap_month());
        assert_eq!("2024-12-01", year.start().iso_gregorian());
        assert_eq!("2025-12-20", year.end().iso_gregorian());
        let leap = LunarDate::new(2025, 6, 1, true);
        assert_eq!(Ok(date(2025, 7, 25)), year.date_for(leap));
        assert_eq!(Ok(date(2025, 6, 25)), year.date_for(LunarDate::new(2025, 6, 1, false)));
    }

    #[test]
    fn dates() {
        use Month::*;
        use OtherYear::*;
        let data = [
            ((2016, 11, 29), Ok((2016, Common(11), 1))),
            ((2017, 1, 27), Ok((2016, Common(12), 30))),
            ((2017, 1, 28), Ok((2017, Common(1), 1))),
            ((2017, 7, 22), Ok((2017, Common(6), 29))),
            ((2017, 7, 23), Ok((2017, Leap(6), 1))),
            ((2017, 12, 17), Ok((2017, Common(10), 30))),
            ((2016, 11, 28), Err(Before)),
            ((2017, 12, 18), Err(After)),
        ];
        let year = LunarYear::new(2017, TimeZone::ICT).unwrap();
        for ((y, m, d), std) in data {
            assert_eq!(
                std,
                year.lunar_date_for(date(y, m, d)).map(|l| (l.year, l.month, l.day)),
                "{y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn golden_date() {
        let d = cal(2025, 11, 24);
        let lunar = to_lunar(d, TimeZone::ICT).unwrap();
        assert_eq!(LunarDate::new(2025, 10, 5, false), lunar);
        assert!(!lunar.is_leap_month());
        assert_eq!("Đinh Dậu", day_can_chi(d).unwrap().to_string());
        assert_eq!("Đinh Hợi", month_can_chi(lunar).to_string());
        assert_eq!("Ất Tỵ", year_can_chi(lunar).to_string());
        assert_eq!("Mùng 5 tháng 10 năm 2025", lunar.to_string());
        assert_eq!(Ok(d), to_solar(lunar, TimeZone::ICT));
    }

    #[test]
    fn before_new_year() {
        let lunar = to_lunar(cal(2000, 1, 1), TimeZone::ICT).unwrap();
        assert_eq!(LunarDate::new(1999, 11, 25, false), lunar);
        assert_eq!("Kỷ Mão", lunar.year_can_chi().to_string());
    }

    #[test]
    fn invalid_input() {
        let bad = CalendarDate {
            year: 2025,
            month: 1,
            day: 32,
        };
        assert_eq!(
            Err(Error::InvalidDate {
                year: 2025,
                month: 1,
                day: 32
            }),
            to_lunar(bad, TimeZone::ICT)
        );
        assert!(matches!(day_can_chi(bad), Err(Error::InvalidDate { .. })));
    }

    #[test]
    fn tet() {
        let ict = TimeZone::ICT;
        for (year, (y, m, d)) in [
            (2000, (2000, 2, 5)),
            (2017, (2017, 1, 28)),
            (2020, (2020, 1, 25)),
            (2021, (2021, 2, 12)),
            (2022, (2022, 2, 1)),
            (2023, (2023, 1, 22)),
            (2024, (2024, 2, 10)),
            (2025, (2025, 1, 29)),
            (2007, (2007, 2, 17)),
            (1985, (1985, 1, 21)),
        ] {
            let tet = LunarDate::new(year, 1, 1, false);
            assert_eq!(Ok(cal(y, m, d)), to_solar(tet, ict), "Tết {year}");
            assert_eq!(Ok(tet), to_lunar(cal(y, m, d), ict), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn time_zone_changes_new_year() {
        // the new moon of 2007-02-17T16:14Z falls on different days
        let tet = LunarDate::new(2007, 1, 1, false);
        assert_eq!(Ok(cal(2007, 2, 17)), to_solar(tet, TimeZone::ICT));
        assert_eq!(Ok(cal(2007, 2, 18)), to_solar(tet, TimeZone::CST));
    }

    #[test]
    fn invalid_lunar_dates() {
        let ict = TimeZone::ICT;
        // 2017 has a leap 6th month, not a leap 5th
        let no_leap = LunarDate::new(2017, 5, 1, true);
        assert_eq!(
            Err(Error::InvalidLunarDate {
                year: 2017,
                month: Month::Leap(5),
                day: 1
            }),
            to_solar(no_leap, ict)
        );
        // month 6 of 2017 has 29 days
        assert!(to_solar(LunarDate::new(2017, 6, 29, false), ict).is_ok());
        assert!(matches!(
            to_solar(LunarDate::new(2017, 6, 30, false), ict),
            Err(Error::InvalidLunarDate { .. })
        ));
        for bad in [
            LunarDate::new(2017, 6, 0, false),
            LunarDate::new(2017, 13, 1, false),
            LunarDate::new(2017, 0, 1, false),
        ] {
            assert!(matches!(to_solar(bad, ict), Err(Error::InvalidLunarDate { .. })), "{bad:?}");
        }
        // a date from another lunar year
        let year = LunarYear::new(2017, ict).unwrap();
        assert!(year.date_for(LunarDate::new(2018, 1, 1, false)).is_err());
    }

    #[test]
    fn month_lengths() {
        let year = LunarYear::new(2017, TimeZone::ICT).unwrap();
        let total: u32 = (0..year.month_count()).map(|i| year.month_length(i)).sum();
        assert_eq!((year.end() - year.start()) as u32, total);
        assert_eq!(29, year.month_length(7));
    }

    #[test]
    fn range_policy() {
        assert!(is_supported_year(1200));
        assert!(!is_supported_year(2200));
        assert_eq!(
            Err(Error::UnsupportedRange { year: 1100 }),
            to_lunar(cal(1100, 6, 1), TimeZone::ICT)
        );
        assert_eq!(
            Err(Error::UnsupportedRange { year: 3000 }),
            LunarYear::new(3000, TimeZone::ICT).map(|y| y.annus)
        );
        let lunar =
            to_lunar_with_policy(cal(1100, 6, 1), TimeZone::ICT, RangePolicy::BestEffort).unwrap();
        assert_eq!(1100, lunar.year);
        // the last supported December still resolves
        assert!(to_lunar(cal(2199, 12, 31), TimeZone::ICT).is_ok());
    }

    #[test]
    fn solar_term_names() {
        let term = solar_term(cal(2024, 12, 21), TimeZone::ICT).unwrap();
        assert_eq!("Đông chí", fmt::solar_term(term));
    }
}
