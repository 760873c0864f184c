mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use amlich::{LunarDate, TimeZone};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands::Settings;
use crate::config::{OutputFormat, TimeZonePolicy};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;

    let time_zone = match cli.tz {
        Some(hours) => TimeZonePolicy::Fixed(
            TimeZone::from_hours(hours).with_context(|| format!("bad --tz {hours}"))?,
        ),
        None => config.time_zone,
    };
    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    let settings = Settings {
        time_zone,
        range: config.range,
        output,
    };
    debug!(?settings, "resolved settings");

    match cli.command {
        Command::Lunar(args) => commands::run_lunar(&settings, &args.dates),
        Command::Solar(args) => {
            let lunar = LunarDate::new(args.year, args.month, args.day, args.leap);
            commands::run_solar(&settings, lunar)
        }
        Command::Year(args) => commands::run_year(&settings, args.year),
    }
}
