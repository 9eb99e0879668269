use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    WorkSession,
    ShortBreak,
    LunchBreak,
}

impl BlockKind {
    /// Human-readable label used in rendered schedule lines.
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::WorkSession => "Work session",
            BlockKind::ShortBreak => "Short break",
            BlockKind::LunchBreak => "Lunch break",
        }
    }
}

/// One block of the generated day plan.
///
/// Start times are wall-clock local times with no timezone attached;
/// rendering is 12-hour with AM/PM and no seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub kind: BlockKind,
    pub start: NaiveTime,
}

impl ScheduleEntry {
    pub fn new(kind: BlockKind, start: NaiveTime) -> Self {
        Self { kind, start }
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {}",
            self.kind.label(),
            self.start.format("%I:%M %p")
        )
    }
}

/// An ordered day plan. Insertion order is chronological order; a plan is
/// produced once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub entries: Vec<ScheduleEntry>,
}

impl DayPlan {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lunch blocks in the plan (the generator emits at most one).
    pub fn lunch_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind == BlockKind::LunchBreak)
            .count()
    }

    /// Rendered display lines, one per entry, in order.
    pub fn display_lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.to_string()).collect()
    }
}
