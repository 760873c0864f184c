use std::path::PathBuf;

use amlich::CalendarDate;
use clap::{Parser, Subcommand};

/// Vietnamese lunar calendar converter.
#[derive(Parser)]
#[command(
    name = "amlich",
    version,
    about = "Convert between Gregorian and Vietnamese lunar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixed time zone offset in hours, overriding the configured policy.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub tz: Option<f64>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the lunar date and Can-Chi names of Gregorian dates.
    Lunar(LunarArgs),
    /// Find the Gregorian date of a lunar date.
    Solar(SolarArgs),
    /// List the months of a lunar year.
    Year(YearArgs),
}

/// Arguments for the `lunar` subcommand.
#[derive(clap::Args)]
pub struct LunarArgs {
    /// Gregorian dates as YYYY-MM-DD.
    #[arg(required = true)]
    pub dates: Vec<CalendarDate>,
}

/// Arguments for the `solar` subcommand.
#[derive(clap::Args)]
pub struct SolarArgs {
    /// Lunar year, counted from Tết.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
    /// Lunar month, 1..=12.
    pub month: u32,
    /// Day of the lunar month, 1..=30.
    pub day: u32,
    /// The month is the leap (intercalary) month.
    #[arg(long)]
    pub leap: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Lunar year, counted from Tết; months 11 and 12 of the year before
    /// are listed first.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}
