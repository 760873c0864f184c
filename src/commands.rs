use amlich::lunar::{self, LunarYear, sexagenary};
use amlich::{CalendarDate, LunarDate, LunarYearCache, RangePolicy, TimeZone};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::{OutputFormat, TimeZonePolicy};

const WEEKDAYS: &[&str] = &[
    "Thứ Hai", "Thứ Ba", "Thứ Tư", "Thứ Năm", "Thứ Sáu", "Thứ Bảy", "Chủ Nhật",
];

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub time_zone: TimeZonePolicy,
    pub range: RangePolicy,
    pub output: OutputFormat,
}

/// Everything shown for one Gregorian day.
#[derive(Debug, Serialize)]
struct DayReport {
    date: CalendarDate,
    weekday: &'static str,
    lunar_year: i32,
    lunar_month: u32,
    lunar_day: u32,
    leap_month: bool,
    lunar_text: String,
    day_can_chi: String,
    month_can_chi: String,
    year_can_chi: String,
    hour_zero_can_chi: String,
    solar_term: &'static str,
    time_zone: TimeZone,
}

impl DayReport {
    fn new(date: CalendarDate, lunar: LunarDate, tz: TimeZone) -> Result<Self> {
        let day = date.to_date()?;
        let term = lunar::solar_term(date, tz)?;
        Ok(Self {
            date,
            weekday: WEEKDAYS[day.day_of_week() as usize - 1],
            lunar_year: lunar.year,
            lunar_month: lunar.month.num(),
            lunar_day: lunar.day,
            leap_month: lunar.is_leap_month(),
            lunar_text: lunar.to_string(),
            day_can_chi: sexagenary::for_date(day).to_string(),
            month_can_chi: lunar.month_can_chi().to_string(),
            year_can_chi: lunar.year_can_chi().to_string(),
            hour_zero_can_chi: sexagenary::hour_zero_can_chi(day.jdn()).to_string(),
            solar_term: lunar::fmt::solar_term(term),
            time_zone: tz,
        })
    }

    fn print_text(&self) {
        println!("Dương lịch: {} ({})", self.date, self.weekday);
        println!("Âm lịch:    {}", self.lunar_text);
        println!(
            "Can-Chi:    ngày {}, tháng {}, năm {}",
            self.day_can_chi, self.month_can_chi, self.year_can_chi
        );
        println!("Giờ Tý:     {}", self.hour_zero_can_chi);
        println!("Tiết khí:   {}", self.solar_term);
        println!("Múi giờ:    {}", self.time_zone);
    }
}

/// One month row of a year listing.
#[derive(Debug, Serialize)]
struct MonthRow {
    year: i32,
    month: u32,
    leap: bool,
    name: String,
    start: CalendarDate,
    days: u32,
    can_chi: String,
}

#[derive(Debug, Serialize)]
struct YearReport {
    year: i32,
    can_chi: String,
    time_zone: TimeZone,
    leap_month: Option<u32>,
    months: Vec<MonthRow>,
}

impl YearReport {
    fn new(year: &LunarYear) -> Self {
        let months = (0..year.month_count())
            .map(|i| {
                let m = year.months[i];
                let num = m.month.num();
                let y = if num >= 11 { year.annus - 1 } else { year.annus };
                MonthRow {
                    year: y,
                    month: num,
                    leap: m.month.is_leap(),
                    name: lunar::fmt::month(m.month),
                    start: m.date.gregorian(),
                    days: year.month_length(i),
                    can_chi: sexagenary::month_can_chi(y, num).to_string(),
                }
            })
            .collect();
        Self {
            year: year.annus,
            can_chi: sexagenary::year_can_chi(year.annus).to_string(),
            time_zone: year.time_zone,
            leap_month: year.leap_month().map(|m| m.num()),
            months,
        }
    }

    fn print_text(&self) {
        print!("Năm {} ({}), {}", self.can_chi, self.year, self.time_zone);
        match self.leap_month {
            Some(n) => println!(", nhuận tháng {n}"),
            None => println!(),
        }
        for row in &self.months {
            println!(
                "{:<16} {:>5}  {}  {} ngày  {}",
                row.name, row.year, row.start, row.days, row.can_chi
            );
        }
    }
}

fn emit<T: Serialize>(output: OutputFormat, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    match output {
        OutputFormat::Text => text(value),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
    }
    Ok(())
}

pub fn run_lunar(settings: &Settings, dates: &[CalendarDate]) -> Result<()> {
    let cache = LunarYearCache::new(settings.range);
    let mut reports = Vec::with_capacity(dates.len());
    for &date in dates {
        let tz = settings.time_zone.for_year(date.year);
        let lunar = cache
            .to_lunar(date, tz)
            .with_context(|| format!("cannot convert {date}"))?;
        info!(%date, %lunar, %tz, "converted to lunar");
        reports.push(DayReport::new(date, lunar, tz)?);
    }
    match settings.output {
        OutputFormat::Json => emit(settings.output, &reports, |_| {}),
        OutputFormat::Text => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                report.print_text();
            }
            Ok(())
        }
    }
}

pub fn run_solar(settings: &Settings, lunar: LunarDate) -> Result<()> {
    let tz = settings.time_zone.for_year(lunar.year);
    let date = lunar::to_solar_with_policy(lunar, tz, settings.range)
        .with_context(|| format!("cannot convert {lunar}"))?;
    info!(%lunar, %date, %tz, "converted to solar");
    let report = DayReport::new(date, lunar, tz)?;
    emit(settings.output, &report, DayReport::print_text)
}

pub fn run_year(settings: &Settings, annus: i32) -> Result<()> {
    let tz = settings.time_zone.for_year(annus);
    let year = LunarYear::with_policy(annus, tz, settings.range)
        .with_context(|| format!("cannot compute lunar year {annus}"))?;
    emit(settings.output, &YearReport::new(&year), YearReport::print_text)
}
