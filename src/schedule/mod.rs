pub mod types;
pub mod slot_utils;
pub mod allocator;

pub use types::{Subject, WeeklySchedule};
pub use slot_utils::{Day, TimeSlot};
pub use allocator::allocate;
