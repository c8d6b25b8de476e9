use std::io::Write;
use std::path::Path;
use csv::WriterBuilder;
use crate::schedule::WeeklySchedule;

/// Writes the sessions of a schedule as CSV rows: day,time_slot,subject,hours,notes
pub fn write_sessions_csv<W: Write>(schedule: &WeeklySchedule, writer: W) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(["day", "time_slot", "subject", "hours", "notes"])?;

    for session in &schedule.sessions {
        let hours = format!("{:.1}", session.hours);
        wtr.write_record([
            session.day.label(),
            session.time_slot.label(),
            session.subject.as_str(),
            hours.as_str(),
            session.notes.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports a schedule to a CSV file, replacing any previous export
pub fn export_schedule_to_csv(schedule: &WeeklySchedule, csv_path: &Path) -> Result<(), csv::Error> {
    let file = std::fs::File::create(csv_path)?;
    write_sessions_csv(schedule, file)
}
