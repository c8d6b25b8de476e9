use std::collections::HashSet;
use tracing::debug;
use crate::error::AllocationError;
use super::slot_utils::{Day, TimeSlot};
use super::types::{StudySession, Subject, WeeklySchedule};

/// Longest single session; larger demands are split into chunks of this size
pub const MAX_SESSION_HOURS: f64 = 2.0;

/// Round-robin position shared by every subject in one allocation pass.
///
/// Never reset between subjects, so where one subject lands depends on how
/// many sessions were placed before it.
#[derive(Debug, Default)]
struct Cursor {
    day: usize,
    slot: usize,
}

impl Cursor {
    /// Moves the day cursor forward until it rests on a day not in `used`.
    /// Gives up after one full week.
    fn claim_day(&mut self, used: &HashSet<Day>) -> Option<Day> {
        for _ in 0..Day::ALL.len() {
            let day = Day::from_index(self.day);
            if !used.contains(&day) {
                return Some(day);
            }
            self.day = (self.day + 1) % Day::ALL.len();
        }
        None
    }

    fn time_slot(&self) -> TimeSlot {
        TimeSlot::from_index(self.slot)
    }

    /// Next slot; wrapping past Night also moves to the next day
    fn advance(&mut self) {
        self.slot = (self.slot + 1) % TimeSlot::ALL.len();
        if self.slot == 0 {
            self.day = (self.day + 1) % Day::ALL.len();
        }
    }
}

fn round_to_tenth(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// Builds the weekly timetable for `subjects`.
///
/// Subjects are taken in descending priority (stable for ties) and each is cut
/// into sessions of at most [`MAX_SESSION_HOURS`], no two on the same day.
/// `daily_hour_budget` is accepted for the caller's benefit but does not cap
/// what gets placed on a day.
///
/// Fails with [`AllocationError::NotEnoughDays`] when a subject needs more
/// sessions than there are days in the week.
pub fn allocate(subjects: &[Subject], daily_hour_budget: u32) -> Result<WeeklySchedule, AllocationError> {
    debug!(subjects = subjects.len(), daily_hour_budget, "allocating weekly schedule");

    let mut ordered: Vec<&Subject> = subjects.iter().collect();
    ordered.sort_by(|a, b| b.priority_rank().cmp(&a.priority_rank()));

    let mut cursor = Cursor::default();
    let mut sessions = Vec::new();
    let mut total_hours = 0.0;

    for subject in ordered {
        debug!(
            subject = %subject.name,
            hours_per_week = subject.hours_per_week,
            priority_rank = subject.priority_rank(),
            difficulty_rank = subject.difficulty_rank(),
            "placing subject"
        );

        let notes = subject.notes();
        let mut used_days = HashSet::new();
        let mut remaining = f64::from(subject.hours_per_week);

        while remaining > 0.0 {
            let hours = round_to_tenth(remaining.min(MAX_SESSION_HOURS));

            let day = cursor.claim_day(&used_days).ok_or_else(|| AllocationError::NotEnoughDays {
                subject: subject.name.clone(),
                hours_per_week: subject.hours_per_week,
            })?;

            sessions.push(StudySession {
                day,
                time_slot: cursor.time_slot(),
                subject: subject.name.clone(),
                hours,
                notes: notes.clone(),
            });

            total_hours += hours;
            remaining -= hours;
            used_days.insert(day);
            cursor.advance();
        }
    }

    sessions.sort_by_key(|s| (s.day, s.time_slot));

    let message = format!(
        "Created {} study sessions totalling {:.1} hours",
        sessions.len(),
        total_hours
    );

    Ok(WeeklySchedule {
        sessions,
        total_hours,
        message,
    })
}
