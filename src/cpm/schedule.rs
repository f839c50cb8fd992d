//! Schedule orchestration: builds the task map, sequences the passes, and
//! assembles the consolidated result.

use chrono::Local;
use rustc_hash::FxHashMap;

use crate::config::ScheduleConfig;
use crate::dates::day_count;
use crate::error::ScheduleError;
use crate::models::{ScheduleResult, Task, TaskSchedule};
use crate::{log_changes, log_checks, log_debug};

use super::analysis::analyze;
use super::backward::backward_pass;
use super::forward::forward_pass;
use super::graph::{build_successor_map, check_references, topological_order};

/// Critical path scheduler over a set of tasks.
///
/// Holds an id-keyed copy of the input; the caller's tasks are never
/// mutated, and nothing is cached between [`calculate`](Self::calculate)
/// calls.
pub struct Scheduler {
    tasks: FxHashMap<String, Task>,
    config: ScheduleConfig,
}

impl Scheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self::with_config(tasks, ScheduleConfig::default())
    }

    /// Creates a scheduler with an explicit configuration.
    pub fn with_config(tasks: Vec<Task>, config: ScheduleConfig) -> Self {
        let tasks: FxHashMap<String, Task> =
            tasks.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self { tasks, config }
    }

    /// Runs the forward pass, backward pass, and float analysis, returning
    /// the enriched task map, the critical path, and the project bounds.
    pub fn calculate(&self) -> Result<ScheduleResult, ScheduleError> {
        let Some(project_start) = self.tasks.values().map(|t| t.start_date).min() else {
            // No tasks: a zero-length project anchored at the current date.
            let today = Local::now().date_naive();
            return Ok(ScheduleResult {
                tasks: FxHashMap::default(),
                critical_path: Vec::new(),
                project_start_date: today,
                project_end_date: today,
                project_duration: 0,
            });
        };

        if self.config.strict_dependencies {
            check_references(&self.tasks)?;
        }

        let successors = build_successor_map(&self.tasks);
        let topo = topological_order(&self.tasks, &successors)?;

        log_checks!(self.config.verbosity, "project start: {project_start}");

        let mut timings = forward_pass(&self.tasks, &topo, project_start);

        let project_end = timings
            .values()
            .map(|t| t.early_finish)
            .max()
            .unwrap_or(project_start);
        log_checks!(self.config.verbosity, "project end: {project_end}");

        backward_pass(&self.tasks, &successors, &topo, project_end, &mut timings);

        let (schedules, critical_path) = analyze(&self.tasks, &successors, &topo, &timings);
        log_debug!(self.config.verbosity, "critical path: {critical_path:?}");

        let project_duration = day_count(project_start, project_end);
        log_changes!(
            self.config.verbosity,
            "scheduled {} tasks over {} days, {} critical",
            schedules.len(),
            project_duration,
            critical_path.len()
        );

        Ok(ScheduleResult {
            tasks: schedules,
            critical_path,
            project_start_date: project_start,
            project_end_date: project_end,
            project_duration,
        })
    }
}

/// Computes the critical path for a task list with the default
/// configuration.
pub fn calculate_critical_path(tasks: Vec<Task>) -> Result<ScheduleResult, ScheduleError> {
    Scheduler::new(tasks).calculate()
}

/// Stable sort of critical path ids by ascending early start.
///
/// The key is `Option<NaiveDate>` so the order stays total when known and
/// unknown ids mix: ids not present in the schedule map compare equal to
/// each other and sort ahead of scheduled ones, stably.
pub fn sort_critical_path(ids: &[String], tasks: &FxHashMap<String, TaskSchedule>) -> Vec<String> {
    let mut sorted = ids.to_vec();
    sorted.sort_by_key(|id| tasks.get(id).map(|t| t.early_start));
    sorted
}
