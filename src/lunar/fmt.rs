//! Vietnamese (and Han-character) names for calendar values.

/// Heavenly stems, Giáp first.
pub const STEMS: &[&str] = &[
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];
pub const STEMS_HAN: &[&str] = &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// Earthly branches, Tý first.
pub const BRANCHES: &[&str] = &[
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];
pub const BRANCHES_HAN: &[&str] = &[
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Month name. Month 1 is "tháng Giêng", month 12 "tháng Chạp"; a leap month
/// gets a trailing "nhuận".
///
/// # Example
///
/// ```
/// use amlich::lunar::{self, Month::*};
///
/// assert_eq!("tháng Giêng", lunar::fmt::month(Common(1)));
/// assert_eq!("tháng 6 nhuận", lunar::fmt::month(Leap(6)));
/// ```
///
/// # Panics
///
/// If the month number is not in `1..=12`.
pub fn month(m: super::Month) -> String {
    let num = m.num();
    let mut rt = match num {
        1 => "tháng Giêng".to_owned(),
        2..=11 => format!("tháng {num}"),
        12 => "tháng Chạp".to_owned(),
        _ => panic!("month {num} not in 1..=12"),
    };
    if m.is_leap() {
        rt += " nhuận";
    }
    rt
}

/// Day name: the first ten days are "Mùng 1" to "Mùng 10".
///
/// ```
/// use amlich::lunar;
///
/// assert_eq!("Mùng 5", lunar::fmt::day(5));
/// assert_eq!("15", lunar::fmt::day(15));
/// ```
///
/// # Panics
///
/// If the day is not in `1..=30`.
pub fn day(d: u32) -> String {
    match d {
        1..=10 => format!("Mùng {d}"),
        11..=30 => d.to_string(),
        _ => panic!("day {d} not in 1..=30"),
    }
}

/// Solar term (tiết khí) name; `0..=23` from the vernal equinox, in steps of
/// 15°.
///
/// ```
/// use amlich::lunar;
///
/// assert_eq!("Đông chí", lunar::fmt::solar_term(18));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "Xuân phân",
        "Thanh minh",
        "Cốc vũ",
        "Lập hạ",
        "Tiểu mãn",
        "Mang chủng",
        "Hạ chí",
        "Tiểu thử",
        "Đại thử",
        "Lập thu",
        "Xử thử",
        "Bạch lộ",
        "Thu phân",
        "Hàn lộ",
        "Sương giáng",
        "Lập đông",
        "Tiểu tuyết",
        "Đại tuyết",
        "Đông chí",
        "Tiểu hàn",
        "Đại hàn",
        "Lập xuân",
        "Vũ thủy",
        "Kinh trập",
    ];
    NAMES[(term % 24) as usize]
}
