mod config;
mod display;
mod error;
mod form;
mod parser;
mod schedule;
mod web;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Cli, Command};
use display::{print_schedule, write_schedule_to_file};
use error::PlannerError;
use form::{export_schedule_to_csv, validate_request, ScheduleRequest};
use parser::load_subjects;
use schedule::allocate;

#[tokio::main]
async fn main() -> Result<(), PlannerError> {
    let cli = Cli::parse();

    // Prefer RUST_LOG, fall back to --log-level
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Command::Serve { bind, port } => {
            info!("Access the planner at http://localhost:{}", port);
            web::start_server(&bind, port).await?;
        }
        Command::Plan { subjects_csv, hours_per_day, output, csv } => {
            info!(path = %subjects_csv.display(), "loading subjects");
            let request = ScheduleRequest {
                subjects: load_subjects(&subjects_csv)?,
                study_hours_per_day: hours_per_day,
                preferred_study_times: Vec::new(),
            };
            validate_request(&request)?;
            info!(subjects = request.subjects.len(), "loaded subjects");

            let budget = request.daily_budget();
            let schedule = allocate(&request.subjects, budget)?;
            print_schedule(&schedule, budget);

            if let Some(path) = output {
                write_schedule_to_file(&schedule, budget, &path)?;
                info!(path = %path.display(), "timetable written");
            }
            if let Some(path) = csv {
                export_schedule_to_csv(&schedule, &path)?;
                info!(path = %path.display(), "sessions exported");
            }
        }
    }

    Ok(())
}
