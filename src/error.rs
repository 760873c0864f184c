//! Error type shared by every fallible operation of the crate.

use crate::lunar::Month;

/// Errors reported by date construction and calendar conversion.
///
/// User input problems (`InvalidDate`, `InvalidLunarDate`, `InvalidTimeZone`,
/// `Parse`) are kept apart from `Computation`, which means the astronomical
/// estimates broke one of the calendar's structural rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The fields do not name a day of the proleptic Gregorian calendar.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The lunar year has no such month, or the month is shorter than `day`.
    #[error("invalid lunar date: day {day} of {month} in lunar year {year}")]
    InvalidLunarDate { year: i32, month: Month, day: u32 },

    /// The year lies outside [`SUPPORTED_YEARS`](crate::SUPPORTED_YEARS).
    #[error("year {year} is outside the supported range")]
    UnsupportedRange { year: i32 },

    /// Offsets must be finite and within -12:00..=+14:00.
    #[error("invalid time zone offset: {0}")]
    InvalidTimeZone(String),

    /// Text could not be read as a `YYYY-MM-DD` date.
    #[error("cannot parse {0:?} as YYYY-MM-DD")]
    Parse(String),

    /// The estimators produced a calendar that violates its own rules.
    #[error("calendar computation failed: {0}")]
    Computation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::InvalidDate {
            year: 2023,
            month: 4,
            day: 31,
        };
        assert_eq!("invalid date: 2023-04-31", err.to_string());

        let err = Error::InvalidLunarDate {
            year: 2017,
            month: Month::Leap(5),
            day: 1,
        };
        assert_eq!(
            "invalid lunar date: day 1 of tháng 5 nhuận in lunar year 2017",
            err.to_string()
        );

        let err = Error::UnsupportedRange { year: 1000 };
        assert_eq!("year 1000 is outside the supported range", err.to_string());
    }

    #[test]
    fn is_send_sync_error() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<Error>();
    }
}
