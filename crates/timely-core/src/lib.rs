//! # Timely Core Library
//!
//! Core business logic for Timely, a work-day planner: the user supplies
//! total work hours, break lengths, a work-session length, and a start
//! time, and Timely expands them into an ordered list of labeled time
//! blocks covering the day. The CLI binary is a thin presentation layer
//! over this library.
//!
//! ## Architecture
//!
//! - **Plan**: input defaulting/parsing and the pure schedule generator --
//!   one synchronous call per form submission, no shared state between
//!   calls
//! - **Clock**: a cancellable periodic task that renders the current local
//!   time for display, fully decoupled from plan generation
//! - **Storage**: TOML-based configuration holding the plan defaults
//!
//! ## Key Components
//!
//! - [`plan::generate`]: the schedule generator
//! - [`PlanForm`] / [`PlanRequest`]: the input boundary
//! - [`DayPlan`]: the generated, immutable schedule
//! - [`Config`]: application configuration management

pub mod clock;
pub mod error;
pub mod plan;
pub mod storage;

pub use clock::{ClockConfig, ClockHandle};
pub use error::{ConfigError, CoreError, PlanError, Result};
pub use plan::{BlockKind, DayPlan, PlanDefaults, PlanForm, PlanRequest, ScheduleEntry};
pub use storage::Config;
