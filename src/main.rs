mod commands;
mod render;

use anyhow::{Context, Result};
use campus_secretary_core::{CalendarDate, Route, SecretaryConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "campus-secretary")]
#[command(about = "Browse a month, schedule meetings and track department responses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month grid
    Month {
        /// Year to show (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Print the number of days in a month
    DaysInMonth {
        year: i32,

        /// Month, 1-12
        month: u32,
    },
    /// Start an interactive scheduling session
    Session {
        #[arg(short, long)]
        year: Option<i32>,

        /// Month, 1-12
        #[arg(short, long)]
        month: Option<u32>,

        /// Screen to open first (e.g. "/add_schedule?day=12")
        #[arg(short, long, default_value = "/")]
        route: String,

        /// Print the session as JSON on exit
        #[arg(long)]
        dump: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a commented default config
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Month { year, month } => {
            let date = resolve_date(year, month)?;
            commands::month::run(date)
        }
        Commands::DaysInMonth { year, month } => {
            let date = resolve_date(Some(year), Some(month))?;
            println!("{}", date.days_in_month());
            Ok(())
        }
        Commands::Session {
            year,
            month,
            route,
            dump,
        } => {
            let date = resolve_date(year, month)?;
            let route = Route::parse(&route)?;
            let config = SecretaryConfig::load().context("Failed to load config")?;
            commands::session::run(date, route, &config, dump)
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(force),
            ConfigAction::Path => commands::config::path(),
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CAMPUS_SECRETARY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Build a reference date from one-based CLI arguments, defaulting to today.
fn resolve_date(year: Option<i32>, month: Option<u32>) -> Result<CalendarDate> {
    let today = CalendarDate::today();
    let year = year.unwrap_or(today.year());

    let month = match month {
        Some(m) if (1..=12).contains(&m) => m - 1,
        Some(m) => anyhow::bail!("Month must be between 1 and 12, got {}", m),
        None => today.month(),
    };

    Ok(CalendarDate::new(year, month)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_date_converts_to_zero_based() {
        let date = resolve_date(Some(2024), Some(12)).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 11).unwrap());
    }

    #[test]
    fn resolve_date_rejects_month_zero() {
        assert!(resolve_date(Some(2024), Some(0)).is_err());
        assert!(resolve_date(Some(2024), Some(13)).is_err());
    }

    #[test]
    fn cli_parses_session_route() {
        let cli = Cli::try_parse_from([
            "campus-secretary",
            "session",
            "--route",
            "/add_schedule?day=12",
        ])
        .unwrap();

        match cli.command {
            Commands::Session { route, dump, .. } => {
                assert_eq!(Route::parse(&route).unwrap(), Route::AddSchedule { day: Some(12) });
                assert!(!dump);
            }
            _ => panic!("expected session command"),
        }
    }
}
