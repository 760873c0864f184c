//! Heavenly stems, earthly branches and the sexagenary (Can-Chi) cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fmt as names;
use crate::date::Date;

/// Heavenly stem (Can), in cycle order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Stem {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// Earthly branch (Chi), in cycle order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Branch {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

impl Stem {
    const ALL: [Stem; 10] = [
        Stem::Giap,
        Stem::At,
        Stem::Binh,
        Stem::Dinh,
        Stem::Mau,
        Stem::Ky,
        Stem::Canh,
        Stem::Tan,
        Stem::Nham,
        Stem::Quy,
    ];
    /// The stem at `n` modulo 10; negative `n` wraps around.
    pub fn from_index(n: i64) -> Self {
        Self::ALL[n.rem_euclid(10) as usize]
    }
    /// Position in the cycle, `0..=9`.
    pub fn index(self) -> u32 {
        self as u32
    }
    pub fn name(self) -> &'static str {
        names::STEMS[self as usize]
    }
    pub fn han(self) -> &'static str {
        names::STEMS_HAN[self as usize]
    }
}

impl Branch {
    const ALL: [Branch; 12] = [
        Branch::Ty,
        Branch::Suu,
        Branch::Dan,
        Branch::Mao,
        Branch::Thin,
        Branch::Ti,
        Branch::Ngo,
        Branch::Mui,
        Branch::Than,
        Branch::Dau,
        Branch::Tuat,
        Branch::Hoi,
    ];
    /// The branch at `n` modulo 12; negative `n` wraps around.
    pub fn from_index(n: i64) -> Self {
        Self::ALL[n.rem_euclid(12) as usize]
    }
    /// Position in the cycle, `0..=11`.
    pub fn index(self) -> u32 {
        self as u32
    }
    pub fn name(self) -> &'static str {
        names::BRANCHES[self as usize]
    }
    pub fn han(self) -> &'static str {
        names::BRANCHES_HAN[self as usize]
    }
}

/// A stem-branch pair. Only pairs of equal parity occur, so there are 60.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SexagenaryName {
    pub stem: Stem,
    pub branch: Branch,
}

impl SexagenaryName {
    fn new(stem: i64, branch: i64) -> Self {
        Self {
            stem: Stem::from_index(stem),
            branch: Branch::from_index(branch),
        }
    }
    /// Position in the sexagenary cycle, numbered from 1 (Giáp Tý) to 60
    /// (Quý Hợi).
    ///
    /// ```
    /// use amlich::lunar::sexagenary::year_can_chi;
    ///
    /// assert_eq!(1, year_can_chi(1984).ordinal());
    /// assert_eq!(17, year_can_chi(2000).ordinal());
    /// ```
    pub fn ordinal(&self) -> u32 {
        let (s, b) = (self.stem.index() as i32, self.branch.index() as i32);
        (6 * s - 5 * b).rem_euclid(60) as u32 + 1
    }
    /// Han-character form, e.g. `甲子`.
    pub fn han(&self) -> String {
        self.stem.han().to_owned() + self.branch.han()
    }
}

impl fmt::Display for SexagenaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stem.name(), self.branch.name())
    }
}

/// Name of the day with Julian day number `jdn`.
///
/// ```
/// use amlich::Date;
/// use amlich::lunar::sexagenary::day_can_chi;
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// assert_eq!("Mậu Ngọ", day_can_chi(date.jdn()).to_string());
/// ```
pub fn day_can_chi(jdn: i32) -> SexagenaryName {
    let jdn = i64::from(jdn);
    SexagenaryName::new(jdn + 9, jdn + 1)
}

/// Name of the lunar year `year` (numbered like the Gregorian year in which
/// it mostly falls).
pub fn year_can_chi(year: i32) -> SexagenaryName {
    let year = i64::from(year);
    SexagenaryName::new(year + 6, year + 8)
}

/// Name of month `month` (`1..=12`) of lunar year `year`. A leap month takes
/// the name of the month it repeats.
///
/// Month 1 is always a Dần month; its stem is fixed by the year's stem
/// (Giáp and Kỷ years open with Bính Dần) and advances by one each month.
pub fn month_can_chi(year: i32, month: u32) -> SexagenaryName {
    let month = i64::from(month);
    let year_stem = i64::from(year_can_chi(year).stem.index());
    SexagenaryName::new(year_stem * 2 + month + 1, month + 1)
}

/// Name of the first double hour (giờ Tý, 23:00-01:00) of day `jdn`.
pub fn hour_zero_can_chi(jdn: i32) -> SexagenaryName {
    SexagenaryName::new((i64::from(jdn) - 1) * 2, 0)
}

/// Day name for a [`Date`].
pub fn for_date(date: Date) -> SexagenaryName {
    day_can_chi(date.jdn())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_names() {
        let jdn = Date::from_gregorian(2025, 11, 24).unwrap().jdn();
        let name = day_can_chi(jdn);
        assert_eq!((Stem::Dinh, Branch::Dau), (name.stem, name.branch));
        assert_eq!("Đinh Dậu", name.to_string());
        assert_eq!("丁酉", name.han());

        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(56, for_date(date).ordinal());
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(18, for_date(date).ordinal());
    }

    #[test]
    fn day_names_before_epoch() {
        for jdn in [-1, -59, -60, -12345] {
            let name = day_can_chi(jdn);
            assert!(name.stem.index() < 10 && name.branch.index() < 12);
            assert_eq!(name, day_can_chi(jdn + 60));
        }
        assert_eq!(day_can_chi(0), day_can_chi(-60));
    }

    #[test]
    fn year_names() {
        for (year, stem, branch) in [
            (1984, Stem::Giap, Branch::Ty),
            (2000, Stem::Canh, Branch::Thin),
            (2025, Stem::At, Branch::Ti),
            (1945, Stem::At, Branch::Dau),
            (-2696, Stem::Giap, Branch::Ty),
        ] {
            assert_eq!(SexagenaryName { stem, branch }, year_can_chi(year), "{year}");
        }
        assert_eq!(60, year_can_chi(-2697).ordinal());
    }

    #[test]
    fn month_names() {
        // Ất Tỵ: month 1 Mậu Dần, month 10 Đinh Hợi
        assert_eq!("Mậu Dần", month_can_chi(2025, 1).to_string());
        assert_eq!("Đinh Hợi", month_can_chi(2025, 10).to_string());
        // Giáp Thìn: month 1 Bính Dần, month 12 Đinh Sửu
        assert_eq!("Bính Dần", month_can_chi(2024, 1).to_string());
        assert_eq!("Đinh Sửu", month_can_chi(2024, 12).to_string());
        // Kỷ Hợi opens with Bính Dần as well
        assert_eq!("Bính Dần", month_can_chi(2019, 1).to_string());
    }

    #[test]
    fn hour_zero() {
        let jdn = Date::from_gregorian(2025, 11, 24).unwrap().jdn();
        let name = hour_zero_can_chi(jdn);
        assert_eq!(Branch::Ty, name.branch);
        // Đinh days start with Canh Tý
        assert_eq!(Stem::Canh, name.stem);
    }

    #[test]
    fn ordinals() {
        for n in 0..60 {
            assert_eq!(n as u32 + 1, SexagenaryName::new(n, n).ordinal());
        }
    }
}
