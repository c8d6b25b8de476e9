use serde::{Serialize, Deserialize};
use super::slot_utils::{Day, TimeSlot};

/// A course to plan for, as submitted by the student.
///
/// Difficulty and priority stay as the raw labels so they can be echoed back
/// verbatim; use [`Subject::priority_rank`] and [`Subject::difficulty_rank`]
/// for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    pub name: String,
    pub hours_per_week: u32,
    pub difficulty: String,
    pub priority: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Priority {
    pub fn from_label(label: &str) -> Option<Priority> {
        match label.to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl Difficulty {
    pub fn from_label(label: &str) -> Option<Difficulty> {
        match label.to_lowercase().as_str() {
            "hard" => Some(Difficulty::Hard),
            "medium" => Some(Difficulty::Medium),
            "easy" => Some(Difficulty::Easy),
            _ => None,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Difficulty::Hard => 3,
            Difficulty::Medium => 2,
            Difficulty::Easy => 1,
        }
    }
}

impl Subject {
    pub fn new(name: &str, hours_per_week: u32, difficulty: &str, priority: &str) -> Self {
        Subject {
            name: name.to_string(),
            hours_per_week,
            difficulty: difficulty.to_string(),
            priority: priority.to_string(),
        }
    }

    /// Rank used for allocation order; unrecognized labels rank 0, below "low"
    pub fn priority_rank(&self) -> u8 {
        Priority::from_label(&self.priority).map(Priority::rank).unwrap_or(0)
    }

    pub fn difficulty_rank(&self) -> u8 {
        Difficulty::from_label(&self.difficulty).map(Difficulty::rank).unwrap_or(0)
    }

    /// Free-text summary attached to every session of this subject
    pub fn notes(&self) -> String {
        format!("{} - {} priority", self.difficulty, self.priority)
    }
}

/// One block of study for one subject in one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub day: Day,
    pub time_slot: TimeSlot,
    pub subject: String,
    pub hours: f64,
    pub notes: String,
}

/// The generated week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub sessions: Vec<StudySession>,
    pub total_hours: f64,
    pub message: String,
}

impl WeeklySchedule {
    /// Placed hours per day, Monday first
    pub fn hours_by_day(&self) -> [f64; 7] {
        let mut totals = [0.0; 7];
        for session in &self.sessions {
            totals[session.day.index()] += session.hours;
        }
        totals
    }

    pub fn sessions_for<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a StudySession> + 'a {
        self.sessions.iter().filter(move |s| s.subject == subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ranks() {
        assert_eq!(Subject::new("A", 1, "easy", "HIGH").priority_rank(), 3);
        assert_eq!(Subject::new("A", 1, "easy", "medium").priority_rank(), 2);
        assert_eq!(Subject::new("A", 1, "easy", "Low").priority_rank(), 1);
        assert_eq!(Subject::new("A", 1, "easy", "urgent").priority_rank(), 0);
        assert_eq!(Subject::new("A", 1, "easy", "").priority_rank(), 0);
    }

    #[test]
    fn padded_labels_are_not_recognized() {
        assert_eq!(Subject::new("A", 1, "easy", " high ").priority_rank(), 0);
        assert_eq!(Subject::new("A", 1, " hard", "low").difficulty_rank(), 0);
    }

    #[test]
    fn difficulty_ranks() {
        assert_eq!(Subject::new("A", 1, "Hard", "low").difficulty_rank(), 3);
        assert_eq!(Subject::new("A", 1, "easy", "low").difficulty_rank(), 1);
        assert_eq!(Subject::new("A", 1, "brutal", "low").difficulty_rank(), 0);
    }

    #[test]
    fn notes_keep_raw_labels() {
        let subject = Subject::new("Art", 2, "Tricky", "urgent");
        assert_eq!(subject.notes(), "Tricky - urgent priority");
    }

    #[test]
    fn subject_wire_format_is_camel_case() {
        let subject: Subject = serde_json::from_str(
            r#"{"name":"Math","hoursPerWeek":4,"difficulty":"hard","priority":"high"}"#,
        )
        .unwrap();
        assert_eq!(subject, Subject::new("Math", 4, "hard", "high"));

        let partial: Subject = serde_json::from_str(r#"{"name":"Bio"}"#).unwrap();
        assert_eq!(partial.hours_per_week, 0);
        assert_eq!(partial.priority_rank(), 0);
    }

    #[test]
    fn hours_by_day_sums_sessions() {
        let session = |day, hours| StudySession {
            day,
            time_slot: TimeSlot::Morning,
            subject: "X".to_string(),
            hours,
            notes: String::new(),
        };
        let schedule = WeeklySchedule {
            sessions: vec![session(Day::Monday, 2.0), session(Day::Monday, 1.0), session(Day::Sunday, 2.0)],
            total_hours: 5.0,
            message: String::new(),
        };
        let totals = schedule.hours_by_day();
        assert_eq!(totals[0], 3.0);
        assert_eq!(totals[6], 2.0);
        assert_eq!(schedule.sessions_for("X").count(), 3);
    }
}
