use std::ops::RangeInclusive;
use serde::{Serialize, Deserialize};

/// Days of the planning week, in their fixed reference order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// The four study periods of a day, in their fixed reference order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wraps any index onto the week
    pub fn from_index(index: usize) -> Day {
        Day::ALL[index % Day::ALL.len()]
    }

    /// Case-insensitive lookup against the fixed day labels
    pub fn from_label(label: &str) -> Option<Day> {
        let label = label.trim();
        Day::ALL.iter().copied().find(|d| d.label().eq_ignore_ascii_case(label))
    }
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> TimeSlot {
        TimeSlot::ALL[index % TimeSlot::ALL.len()]
    }

    pub fn from_label(label: &str) -> Option<TimeSlot> {
        let label = label.trim();
        TimeSlot::ALL.iter().copied().find(|s| s.label().eq_ignore_ascii_case(label))
    }

    /// Class periods covered by this slot, three per slot
    pub fn periods(self) -> RangeInclusive<u8> {
        let first = self.index() as u8 * 3 + 1;
        first..=first + 2
    }
}

impl TryFrom<String> for Day {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Day::from_label(&value).ok_or_else(|| format!("unknown day: {}", value))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeSlot::from_label(&value).ok_or_else(|| format!("unknown time slot: {}", value))
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.label().to_string()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label().to_string()
    }
}
