//! Error types for the study planner.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Rejections raised before the allocator runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Subjects list cannot be empty")]
    NoSubjects,

    #[error("Study hours per day must be at least 1")]
    DailyHoursTooLow,

    #[error("Study hours per day cannot exceed 24")]
    DailyHoursTooHigh,
}

/// Allocation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Every day of the week already holds a session of this subject.
    #[error("cannot schedule {subject}: {hours_per_week} hours need more than one session per day")]
    NotEnoughDays { subject: String, hours_per_week: u32 },
}

/// Subject file import failures.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error("failed to read subjects: {0}")]
    Parse(#[from] ParseError),

    #[error("malformed request: {0}")]
    BadRequest(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlannerError {
    pub fn reason_code(&self) -> &'static str {
        match self {
            PlannerError::Validation(_) => "validation_failed",
            PlannerError::Allocation(_) => "allocation_failed",
            PlannerError::Parse(_) => "parse_failed",
            PlannerError::BadRequest(_) => "bad_request",
            PlannerError::Io(_) => "io_error",
            PlannerError::Csv(_) => "csv_error",
        }
    }
}

impl ResponseError for PlannerError {
    fn status_code(&self) -> StatusCode {
        match self {
            PlannerError::Validation(_) | PlannerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PlannerError::Allocation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlannerError::Parse(_) | PlannerError::Io(_) | PlannerError::Csv(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.reason_code(),
            "message": self.to_string(),
        }))
    }
}
