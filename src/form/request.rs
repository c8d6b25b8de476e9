use serde::Deserialize;
use crate::error::ValidationError;
use crate::schedule::Subject;

/// Schedule request from the frontend
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub study_hours_per_day: i64,
    /// "morning", "afternoon", "evening", "night"; accepted but not used for placement
    #[serde(default)]
    pub preferred_study_times: Vec<String>,
}

/// Validates a schedule request before it reaches the allocator
pub fn validate_request(req: &ScheduleRequest) -> Result<(), ValidationError> {
    if req.subjects.is_empty() {
        return Err(ValidationError::NoSubjects);
    }

    if req.study_hours_per_day < 1 {
        return Err(ValidationError::DailyHoursTooLow);
    }
    if req.study_hours_per_day > 24 {
        return Err(ValidationError::DailyHoursTooHigh);
    }

    Ok(())
}

impl ScheduleRequest {
    /// Daily budget once validated; only meaningful after [`validate_request`] passed
    pub fn daily_budget(&self) -> u32 {
        self.study_hours_per_day.clamp(1, 24) as u32
    }
}
