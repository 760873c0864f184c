//! Conversion between the Gregorian calendar and the Vietnamese lunar
//! calendar, with sexagenary (Can-Chi) names for days, months and years.
//!
//! Month boundaries come from truncated astronomical series for new moons
//! and the sun's longitude, evaluated at a fixed time zone chosen by the
//! caller: +07:00 reproduces the modern Vietnamese calendar, +08:00 the
//! Chinese one (and the Vietnamese calendar before 1968).
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use amlich::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Lunar calendar:
//!
//! ```
//! use amlich::{to_lunar, to_solar, CalendarDate, LunarDate};
//! use amlich::time_scales::TimeZone;
//!
//! let date = CalendarDate::new(2000, 1, 1).unwrap();
//! let lunar = to_lunar(date, TimeZone::ICT).unwrap();
//!
//! assert_eq!(LunarDate::new(1999, 11, 25, false), lunar);
//! assert_eq!("Kỷ Mão", lunar.year_can_chi().to_string());
//! assert_eq!(Ok(date), to_solar(lunar, TimeZone::ICT));
//! ```
//!
//! Results are trusted for Gregorian years in [`SUPPORTED_YEARS`]; outside
//! it the conversions fail with [`Error::UnsupportedRange`] unless asked for
//! [`RangePolicy::BestEffort`].

pub mod date;
pub mod error;
pub mod lunar;
pub mod time_scales;

pub use date::{CalendarDate, Date, YearType};
pub use error::Error;
pub use lunar::{
    LunarDate, LunarYear, LunarYearCache, Month, RangePolicy, SUPPORTED_YEARS, SexagenaryName,
    day_can_chi, is_supported_year, month_can_chi, to_lunar, to_solar, year_can_chi,
};
pub use time_scales::TimeZone;
