//! Work-day schedule generator.
//!
//! A pure, synchronous simulation over an explicit cursor record: starting
//! from the requested start time, it lays down work sessions and short
//! breaks until the work-hour budget is spent, inserting a single lunch
//! break once the wall clock reaches the lunch window (hour 12 or 13).
//!
//! The generator performs no input validation. Non-positive durations are
//! undefined behavior in the contract sense, but generation is still
//! guaranteed to terminate: an iteration that makes no forward progress
//! ends the plan with whatever was accumulated so far.

use chrono::{Duration, NaiveTime, Timelike};

use super::entry::{BlockKind, DayPlan, ScheduleEntry};
use super::request::PlanRequest;

/// Simulation state threaded through the generation loop.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    /// Minutes consumed by the plan so far.
    elapsed_min: f64,
    /// Current wall-clock position, wrapping at midnight.
    at: NaiveTime,
    lunch_taken: bool,
}

impl Cursor {
    fn start(at: NaiveTime) -> Self {
        Self {
            elapsed_min: 0.0,
            at,
            lunch_taken: false,
        }
    }

    /// Move the clock and the budget forward. Fractional minutes advance
    /// the clock by rounded whole seconds.
    fn advance(&mut self, minutes: f64) {
        let seconds = (minutes * 60.0).round() as i64;
        self.at = self.at.overflowing_add_signed(Duration::seconds(seconds)).0;
        self.elapsed_min += minutes;
    }

    fn in_lunch_window(&self) -> bool {
        matches!(self.at.hour(), 12 | 13)
    }
}

/// Generate the day plan for a resolved request.
///
/// Per iteration: the lunch break preempts everything once its window
/// (hour 12 or 13) is open and it still fits in the budget; otherwise a
/// work session is attempted first and a short break second, independently,
/// so both may land in the same iteration.
pub fn generate(request: &PlanRequest) -> DayPlan {
    let total_min = request.work_hours * 60.0;
    let lunch_min = request.lunch_break * 60.0;
    let short_min = request.short_break;
    let session_min = request.work_session;

    let mut entries = Vec::new();
    let mut cursor = Cursor::start(request.start);

    while cursor.elapsed_min < total_min {
        let elapsed_before = cursor.elapsed_min;
        let mut stalled = false;

        if !cursor.lunch_taken
            && cursor.in_lunch_window()
            && cursor.elapsed_min + lunch_min <= total_min
        {
            entries.push(ScheduleEntry::new(BlockKind::LunchBreak, cursor.at));
            cursor.advance(lunch_min);
            cursor.lunch_taken = true;
            if cursor.elapsed_min <= elapsed_before {
                break;
            }
            continue;
        }

        if cursor.elapsed_min + session_min <= total_min {
            entries.push(ScheduleEntry::new(BlockKind::WorkSession, cursor.at));
            cursor.advance(session_min);
            stalled |= session_min <= 0.0;
        }

        if cursor.elapsed_min + short_min <= total_min {
            entries.push(ScheduleEntry::new(BlockKind::ShortBreak, cursor.at));
            cursor.advance(short_min);
            stalled |= short_min <= 0.0;
        }

        // Termination guard: without strict forward progress the loop
        // would spin forever on degenerate durations.
        if stalled || cursor.elapsed_min <= elapsed_before {
            break;
        }
    }

    DayPlan::new(entries)
}
