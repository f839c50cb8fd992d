//! Float analysis and critical task collection.

use rustc_hash::FxHashMap;

use crate::dates::day_count;
use crate::models::{Task, TaskSchedule};

use super::graph::SuccessorMap;
use super::types::Timing;

/// Derives total float, free float, and criticality for every task, and
/// collects the critical ids in traversal order.
///
/// Total float is measured between the early and late start; free float is
/// bounded by the earliest successor start, and a terminal task's free
/// float equals its total float. Non-positive total float marks a task
/// critical, which absorbs any rounding artifacts from the date math.
pub(crate) fn analyze(
    tasks: &FxHashMap<String, Task>,
    successors: &SuccessorMap<'_>,
    topo: &[&str],
    timings: &FxHashMap<String, Timing>,
) -> (FxHashMap<String, TaskSchedule>, Vec<String>) {
    let mut schedules: FxHashMap<String, TaskSchedule> =
        FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
    let mut critical_path: Vec<String> = Vec::new();

    for &id in topo {
        let task = &tasks[id];
        let timing = &timings[id];

        let total_float = day_count(timing.early_start, timing.late_start);

        let min_successor_start = successors.get(id).and_then(|succs| {
            succs
                .iter()
                .filter_map(|succ| timings.get(*succ))
                .map(|t| t.early_start)
                .min()
        });
        let free_float = match min_successor_start {
            Some(start) => day_count(timing.early_finish, start),
            None => total_float,
        };

        let is_critical = total_float <= 0;
        if is_critical {
            critical_path.push(id.to_string());
        }

        schedules.insert(
            id.to_string(),
            TaskSchedule {
                id: id.to_string(),
                title: task.title.clone(),
                dependencies: task.dependencies.clone(),
                start_date: task.start_date,
                due_date: task.due_date,
                duration: task.duration_days(),
                early_start: timing.early_start,
                early_finish: timing.early_finish,
                late_start: timing.late_start,
                late_finish: timing.late_finish,
                total_float,
                free_float,
                is_critical,
            },
        );
    }

    (schedules, critical_path)
}
