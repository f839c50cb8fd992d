//! Core data types for the scheduling engine.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::dates::day_count;
use crate::error::ScheduleError;

/// A raw task record as supplied by the caller's record store.
///
/// Dates arrive as ISO-8601 strings; [`Task::from_record`] validates them
/// and fails fast naming the offending task and field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub duration: Option<i64>,
}

/// A validated task ready for scheduling.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, the key for all graph references.
    pub id: String,
    /// Display label, not used in computation.
    pub title: String,
    /// Planned start date (date-only, midnight-normalized).
    pub start_date: NaiveDate,
    /// Planned due date.
    pub due_date: NaiveDate,
    /// Ids of tasks that must finish before this task can start.
    pub dependencies: Vec<String>,
    /// Explicit duration in days; derived from the dates when absent.
    pub duration: Option<i64>,
}

impl Task {
    /// Creates a task with the given id and date range.
    pub fn new(id: impl Into<String>, start_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            start_date,
            due_date,
            dependencies: Vec::new(),
            duration: None,
        }
    }

    /// Sets the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a dependency on another task id.
    pub fn with_dependency(mut self, dep: impl Into<String>) -> Self {
        self.dependencies.push(dep.into());
        self
    }

    /// Sets an explicit duration in days, overriding the date-derived one.
    pub fn with_duration(mut self, days: i64) -> Self {
        self.duration = Some(days);
        self
    }

    /// Validates a raw record, parsing its ISO-8601 dates.
    pub fn from_record(record: &TaskRecord) -> Result<Self, ScheduleError> {
        let start_date = parse_date(&record.id, "start_date", record.start_date.as_deref())?;
        let due_date = parse_date(&record.id, "due_date", record.due_date.as_deref())?;
        Ok(Self {
            id: record.id.clone(),
            title: record.title.clone(),
            start_date,
            due_date,
            dependencies: record.dependencies.clone(),
            duration: record.duration,
        })
    }

    /// Duration in days: the explicit value, or the count of days between
    /// the start and due dates.
    pub fn duration_days(&self) -> i64 {
        self.duration
            .unwrap_or_else(|| day_count(self.start_date, self.due_date))
    }
}

fn parse_date(
    task_id: &str,
    field: &'static str,
    value: Option<&str>,
) -> Result<NaiveDate, ScheduleError> {
    let value = value.ok_or_else(|| ScheduleError::MissingDate {
        task_id: task_id.to_string(),
        field,
    })?;
    value.parse().map_err(|_| ScheduleError::InvalidDate {
        task_id: task_id.to_string(),
        field,
        value: value.to_string(),
    })
}

/// A task enriched with the computed schedule fields.
#[derive(Clone, Debug, Serialize)]
pub struct TaskSchedule {
    pub id: String,
    pub title: String,
    pub dependencies: Vec<String>,
    /// Planned start date carried over from the input task.
    pub start_date: NaiveDate,
    /// Planned due date carried over from the input task.
    pub due_date: NaiveDate,
    /// Resolved duration in days.
    pub duration: i64,
    /// Earliest this task can begin given its dependencies.
    pub early_start: NaiveDate,
    /// Earliest this task can end.
    pub early_finish: NaiveDate,
    /// Latest this task can begin without delaying the project.
    pub late_start: NaiveDate,
    /// Latest this task can end without delaying the project.
    pub late_finish: NaiveDate,
    /// Slack without affecting the project end date, in days.
    pub total_float: i64,
    /// Slack without delaying any immediate successor, in days.
    pub free_float: i64,
    /// True when total float is non-positive.
    pub is_critical: bool,
}

/// Consolidated output of a critical path computation.
#[derive(Clone, Debug, Serialize)]
pub struct ScheduleResult {
    /// Per-task schedules keyed by task id.
    pub tasks: FxHashMap<String, TaskSchedule>,
    /// Ids of critical tasks, in dependency traversal order.
    pub critical_path: Vec<String>,
    /// Earliest start date across all tasks.
    pub project_start_date: NaiveDate,
    /// Latest early finish across all tasks.
    pub project_end_date: NaiveDate,
    /// Whole days from project start to project end.
    pub project_duration: i64,
}
