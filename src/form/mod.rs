pub mod request;
pub mod export;

pub use request::{ScheduleRequest, validate_request};
pub use export::export_schedule_to_csv;
