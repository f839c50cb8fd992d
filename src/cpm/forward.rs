//! Forward pass: earliest start and finish dates.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::dates::add_days;
use crate::models::Task;

use super::types::Timing;

/// Assigns early start/finish to every task.
///
/// `topo` lists dependencies before dependents, so every dependency's
/// timing is already present when its dependents are visited. A task's
/// early start is the latest early finish among its dependencies, or the
/// project start when none resolve.
pub(crate) fn forward_pass(
    tasks: &FxHashMap<String, Task>,
    topo: &[&str],
    project_start: NaiveDate,
) -> FxHashMap<String, Timing> {
    let mut timings: FxHashMap<String, Timing> =
        FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());

    for &id in topo {
        let task = &tasks[id];

        let mut early_start = project_start;
        for dep in &task.dependencies {
            // Dangling references resolve to nothing and carry no constraint.
            if let Some(dep_timing) = timings.get(dep.as_str()) {
                if dep_timing.early_finish > early_start {
                    early_start = dep_timing.early_finish;
                }
            }
        }

        let early_finish = add_days(early_start, task.duration_days());
        timings.insert(
            id.to_string(),
            Timing {
                early_start,
                early_finish,
                // Placeholders until the backward pass runs.
                late_start: early_start,
                late_finish: early_finish,
            },
        );
    }

    timings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpm::graph::{build_successor_map, topological_order};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn run(tasks: FxHashMap<String, Task>, project_start: NaiveDate) -> FxHashMap<String, Timing> {
        let successors = build_successor_map(&tasks);
        let topo = topological_order(&tasks, &successors).unwrap();
        forward_pass(&tasks, &topo, project_start)
    }

    #[test]
    fn test_no_dependency_starts_at_project_start() {
        let task = Task::new("a", d(2024, 1, 5), d(2024, 1, 8));
        let tasks = FxHashMap::from_iter([("a".to_string(), task)]);
        let timings = run(tasks, d(2024, 1, 1));

        assert_eq!(timings["a"].early_start, d(2024, 1, 1));
        assert_eq!(timings["a"].early_finish, d(2024, 1, 4));
    }

    #[test]
    fn test_chain_propagation() {
        // a -> b -> c, each 2 days
        let tasks: FxHashMap<String, Task> = [
            Task::new("a", d(2024, 1, 1), d(2024, 1, 3)),
            Task::new("b", d(2024, 1, 3), d(2024, 1, 5)).with_dependency("a"),
            Task::new("c", d(2024, 1, 5), d(2024, 1, 7)).with_dependency("b"),
        ]
        .into_iter()
        .map(|t| (t.id.clone(), t))
        .collect();

        let timings = run(tasks, d(2024, 1, 1));
        assert_eq!(timings["b"].early_start, timings["a"].early_finish);
        assert_eq!(timings["c"].early_start, timings["b"].early_finish);
        assert_eq!(timings["c"].early_finish, d(2024, 1, 7));
    }

    #[test]
    fn test_early_start_is_max_over_dependencies() {
        let tasks: FxHashMap<String, Task> = [
            Task::new("short", d(2024, 1, 1), d(2024, 1, 2)),
            Task::new("long", d(2024, 1, 1), d(2024, 1, 6)),
            Task::new("join", d(2024, 1, 6), d(2024, 1, 7))
                .with_dependency("short")
                .with_dependency("long"),
        ]
        .into_iter()
        .map(|t| (t.id.clone(), t))
        .collect();

        let timings = run(tasks, d(2024, 1, 1));
        assert_eq!(timings["join"].early_start, d(2024, 1, 6));
    }

    #[test]
    fn test_dangling_dependency_contributes_nothing() {
        let task = Task::new("x", d(2024, 1, 1), d(2024, 1, 4)).with_dependency("missing");
        let tasks = FxHashMap::from_iter([("x".to_string(), task)]);
        let timings = run(tasks, d(2024, 1, 1));
        assert_eq!(timings["x"].early_start, d(2024, 1, 1));
    }
}
