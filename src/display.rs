use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::schedule::{Day, TimeSlot, WeeklySchedule};

/// Formats a slot with its class periods, e.g. "Morning (periods 1-3)"
pub fn format_slot(slot: TimeSlot) -> String {
    let periods = slot.periods();
    format!("{} (periods {}-{})", slot.label(), periods.start(), periods.end())
}

/// Renders the week as plain text, one block per day.
///
/// Days whose placed hours exceed `daily_budget` are flagged; nothing is moved.
pub fn render_schedule(schedule: &WeeklySchedule, daily_budget: u32) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    if write_schedule(&mut out, schedule, daily_budget).is_err() {
        out.clear();
    }
    out
}

fn write_schedule(out: &mut String, schedule: &WeeklySchedule, daily_budget: u32) -> fmt::Result {
    let per_day = schedule.hours_by_day();

    writeln!(out, "=== Weekly Study Schedule ===")?;
    writeln!(out, "{}", schedule.message)?;

    for day in Day::ALL {
        let hours = per_day[day.index()];
        let flag = if hours > f64::from(daily_budget) {
            format!("  [over daily budget of {}h]", daily_budget)
        } else {
            String::new()
        };
        writeln!(out, "\n** {} ** {:.1}h{}", day.label(), hours, flag)?;

        let mut any = false;
        for session in schedule.sessions.iter().filter(|s| s.day == day) {
            any = true;
            writeln!(
                out,
                "  {:<26} {:<20} {:>4.1}h  {}",
                format_slot(session.time_slot),
                session.subject,
                session.hours,
                session.notes
            )?;
        }
        if !any {
            writeln!(out, "  [FREE]")?;
        }
    }

    writeln!(out, "\nPer subject:")?;
    let mut seen: Vec<&str> = Vec::new();
    for session in &schedule.sessions {
        if !seen.contains(&session.subject.as_str()) {
            seen.push(&session.subject);
        }
    }
    for subject in seen {
        let (count, hours) = schedule
            .sessions_for(subject)
            .fold((0, 0.0), |(c, h), s| (c + 1, h + s.hours));
        writeln!(out, "  {:<20} {:>4.1}h in {} sessions", subject, hours, count)?;
    }

    writeln!(out, "\nTotal: {:.1}h", schedule.total_hours)
}

/// Prints a weekly schedule in a readable format
pub fn print_schedule(schedule: &WeeklySchedule, daily_budget: u32) {
    print!("{}", render_schedule(schedule, daily_budget));
}

/// Writes the rendered schedule to a file
pub fn write_schedule_to_file(
    schedule: &WeeklySchedule,
    daily_budget: u32,
    path: &Path,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(render_schedule(schedule, daily_budget).as_bytes())
}
