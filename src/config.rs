//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "study-planner", version, about = "Weekly study timetable generator")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence.
    #[arg(long, global = true, env = "PLANNER_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the planner HTTP API.
    Serve {
        #[arg(long, env = "PLANNER_BIND", default_value = "0.0.0.0")]
        bind: String,

        #[arg(long, short, env = "PLANNER_PORT", default_value_t = 8080)]
        port: u16,
    },

    /// Plan a week from a CSV file of subjects (name,hours,difficulty,priority).
    Plan {
        subjects_csv: PathBuf,

        /// Study hours available per day (1-24).
        #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
        hours_per_day: i64,

        /// Also write the timetable text to this file.
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Also export the sessions as CSV to this file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}
