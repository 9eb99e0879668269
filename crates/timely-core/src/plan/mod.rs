//! Work-day plan data model and schedule generator.

mod entry;
mod generator;
mod request;

pub use entry::{BlockKind, DayPlan, ScheduleEntry};
pub use generator::generate;
pub use request::{parse_start_hour, PlanDefaults, PlanForm, PlanRequest};
