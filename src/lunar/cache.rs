//! Read-through memoization of [`LunarYear`]s.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::trace;

use super::{LunarDate, LunarYear, OtherYear, RangePolicy};
use crate::date::{CalendarDate, Date};
use crate::error::Error;
use crate::time_scales::TimeZone;

type Slot = Arc<OnceLock<Result<Arc<LunarYear>, Error>>>;

/// Caches lunar years by `(annus, time zone)`.
///
/// Each key is computed at most once: concurrent callers asking for the same
/// year wait for the first one to finish instead of building their own copy.
/// The map lock is only held while looking up the slot, never while
/// computing. Failures are cached like successes.
///
/// ```
/// use amlich::{CalendarDate, LunarYearCache};
/// use amlich::time_scales::TimeZone;
///
/// let cache = LunarYearCache::default();
/// let date = CalendarDate::new(2025, 11, 24).unwrap();
/// let lunar = cache.to_lunar(date, TimeZone::ICT).unwrap();
/// assert_eq!(Ok(date), cache.to_solar(lunar, TimeZone::ICT));
/// ```
#[derive(Debug, Default)]
pub struct LunarYearCache {
    policy: RangePolicy,
    slots: Mutex<HashMap<(i32, i32), Slot>>,
}

impl LunarYearCache {
    pub fn new(policy: RangePolicy) -> Self {
        Self {
            policy,
            slots: Mutex::default(),
        }
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    /// The lunar year `annus` at `tz`, built on first use.
    pub fn year(&self, annus: i32, tz: TimeZone) -> Result<Arc<LunarYear>, Error> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(slots.entry((annus, tz.minutes())).or_default())
        };
        slot.get_or_init(|| {
            trace!(annus, tz = %tz, "lunar year cache miss");
            LunarYear::with_policy(annus, tz, self.policy).map(Arc::new)
        })
        .clone()
    }

    /// Number of cached keys, finished or still being built.
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cached lunar year containing `date`.
    pub fn year_of(&self, date: Date, tz: TimeZone) -> Result<Arc<LunarYear>, Error> {
        let mut annus = date.gregorian().year;
        for _ in 0..3 {
            let year = self.year(annus, tz)?;
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

    /// [`to_lunar`](super::to_lunar) through the cache.
    pub fn to_lunar(&self, date: CalendarDate, tz: TimeZone) -> Result<LunarDate, Error> {
        let day = date.to_date()?;
        self.policy.check_year(date.year)?;
        self.year_of(day, tz)?
            .lunar_date_for(day)
            .map_err(|_| Error::Computation(format!("{date} left its lunar year")))
    }

    /// [`to_solar`](super::to_solar) through the cache.
    pub fn to_solar(&self, lunar: LunarDate, tz: TimeZone) -> Result<CalendarDate, Error> {
        let year = self.year(lunar.annus(), tz)?;
        Ok(year.date_for(lunar)?.gregorian())
    }
}
