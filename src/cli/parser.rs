use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for volhours
/// CLI application to record volunteer hours with SQLite
#[derive(Parser)]
#[command(
    name = "volhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple volunteer hours CLI: record hours worked and chart monthly totals using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Enroll a new volunteer
    Enroll {
        /// First name
        first_name: String,

        /// Last name
        last_name: String,
    },

    /// List enrolled volunteers
    Roster,

    /// Log hours worked by a volunteer and redraw the monthly chart
    Log {
        /// Volunteer id
        volunteer_id: i32,

        /// Date worked (YYYY-MM-DD); defaults to today
        #[arg(long = "date", help = "Date worked (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        /// Hours worked on that date
        #[arg(
            long = "hours",
            default_value_t = 8,
            value_parser = clap::value_parser!(i64).range(0..=18),
            help = "Hours worked (0-18)"
        )]
        hours: i64,
    },

    /// Show the monthly hours chart for a volunteer
    Chart {
        /// Volunteer id
        volunteer_id: i32,

        /// Year to chart; defaults to the current year
        #[arg(long = "year", help = "Year to chart (defaults to the current year)")]
        year: Option<i32>,
    },

    /// Export a volunteer's monthly totals to a file
    Export {
        /// Volunteer id
        volunteer_id: i32,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Year to export; defaults to the current year
        #[arg(long = "year", help = "Year to export (defaults to the current year)")]
        year: Option<i32>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Audit {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
