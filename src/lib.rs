//! Critical path method (CPM) scheduling for project task networks.
//!
//! Given a flat list of tasks with dates and dependency edges, this crate
//! computes earliest/latest start and finish dates, total and free float,
//! and the set of critical tasks via the classic forward-pass/backward-pass
//! algorithm. The computation is pure and synchronous: no I/O, no state
//! held between calls.
//!
//! The caller owns persistence and display; tasks arrive as plain records
//! ([`TaskRecord`] / [`Task`]) and leave as an enriched map
//! ([`ScheduleResult`]). All day arithmetic is calendar-day arithmetic;
//! business-day adjustment, if wanted, happens upstream in the caller's
//! duration values.

pub mod cpm;
mod config;
mod dates;
mod error;
mod format;
pub mod logging;
mod models;

pub use config::ScheduleConfig;
pub use cpm::{calculate_critical_path, sort_critical_path, Scheduler};
pub use dates::{add_days, day_count};
pub use error::ScheduleError;
pub use format::{format_float, FloatSeverity};
pub use models::{ScheduleResult, Task, TaskRecord, TaskSchedule};
