//! Dependency graph construction, ordering, and validation.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use crate::error::ScheduleError;
use crate::models::Task;

/// Reverse dependency map: task id -> ids of tasks that depend on it.
///
/// Keys may include dangling dependency targets; values are always tasks
/// present in the input map.
pub(crate) type SuccessorMap<'a> = FxHashMap<&'a str, Vec<&'a str>>;

/// Builds the successor map for all tasks.
///
/// Tasks are visited in sorted-id order so the successor lists come out
/// the same on every run.
pub(crate) fn build_successor_map(tasks: &FxHashMap<String, Task>) -> SuccessorMap<'_> {
    let mut ids: Vec<&str> = tasks.keys().map(String::as_str).collect();
    ids.sort_unstable();

    let mut successors: SuccessorMap =
        FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
    for id in ids {
        for dep in &tasks[id].dependencies {
            successors.entry(dep.as_str()).or_default().push(id);
        }
    }
    successors
}

/// Topological order over the tasks, dependencies before dependents.
///
/// Kahn's algorithm with a deterministic seed: ids enter the queue in
/// sorted order, so equal-rank tasks always come out in the same order.
/// A dependency that does not resolve to a task in the map carries no
/// edge, preserving lenient dangling-reference behavior.
pub(crate) fn topological_order<'a>(
    tasks: &'a FxHashMap<String, Task>,
    successors: &SuccessorMap<'a>,
) -> Result<Vec<&'a str>, ScheduleError> {
    let mut ids: Vec<&str> = tasks.keys().map(String::as_str).collect();
    ids.sort_unstable();

    let mut in_degree: FxHashMap<&str, usize> =
        FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
    for &id in &ids {
        let degree = tasks[id]
            .dependencies
            .iter()
            .filter(|dep| tasks.contains_key(dep.as_str()))
            .count();
        in_degree.insert(id, degree);
    }

    let mut queue: VecDeque<&str> = ids
        .iter()
        .copied()
        .filter(|id| in_degree[id] == 0)
        .collect();

    let mut order: Vec<&str> = Vec::with_capacity(tasks.len());
    while let Some(id) = queue.pop_front() {
        order.push(id);
        if let Some(succs) = successors.get(id) {
            for &succ in succs {
                if let Some(degree) = in_degree.get_mut(succ) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(succ);
                    }
                }
            }
        }
    }

    if order.len() != tasks.len() {
        return Err(ScheduleError::CyclicDependency(name_cycle(tasks, &order)));
    }
    Ok(order)
}

/// Walks the unresolved remainder of a failed topological sort to name the
/// members of one cycle.
///
/// Every unresolved task has at least one unresolved dependency, so
/// following any such edge must revisit a task within |remaining| steps.
fn name_cycle(tasks: &FxHashMap<String, Task>, resolved: &[&str]) -> Vec<String> {
    let resolved: FxHashSet<&str> = resolved.iter().copied().collect();
    let mut remaining: Vec<&str> = tasks
        .keys()
        .map(String::as_str)
        .filter(|id| !resolved.contains(id))
        .collect();
    remaining.sort_unstable();
    let remaining_set: FxHashSet<&str> = remaining.iter().copied().collect();

    let Some(&start) = remaining.first() else {
        return Vec::new();
    };

    let mut path: Vec<&str> = Vec::new();
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    let mut current = start;
    loop {
        if let Some(&pos) = seen.get(current) {
            return path[pos..].iter().map(|s| s.to_string()).collect();
        }
        seen.insert(current, path.len());
        path.push(current);

        match tasks[current]
            .dependencies
            .iter()
            .map(String::as_str)
            .find(|dep| remaining_set.contains(dep))
        {
            Some(next) => current = next,
            // Unreachable for a genuinely stuck sort; report what we have.
            None => return path.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Strict-mode validation: every dependency id must name a task in the map.
pub(crate) fn check_references(tasks: &FxHashMap<String, Task>) -> Result<(), ScheduleError> {
    let mut ids: Vec<&str> = tasks.keys().map(String::as_str).collect();
    ids.sort_unstable();
    for id in ids {
        for dep in &tasks[id].dependencies {
            if !tasks.contains_key(dep.as_str()) {
                return Err(ScheduleError::UnknownDependency {
                    task_id: id.to_string(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn make_tasks(entries: Vec<(&str, Vec<&str>)>) -> FxHashMap<String, Task> {
        entries
            .into_iter()
            .map(|(id, deps)| {
                let mut task = Task::new(id, d(2024, 1, 1), d(2024, 1, 2));
                for dep in deps {
                    task = task.with_dependency(dep);
                }
                (task.id.clone(), task)
            })
            .collect()
    }

    #[test]
    fn test_successor_map() {
        let tasks = make_tasks(vec![("a", vec![]), ("b", vec!["a"]), ("c", vec!["a", "b"])]);
        let successors = build_successor_map(&tasks);
        assert_eq!(successors["a"], vec!["b", "c"]);
        assert_eq!(successors["b"], vec!["c"]);
        assert!(!successors.contains_key("c"));
    }

    #[test]
    fn test_topological_order_chain() {
        let tasks = make_tasks(vec![("c", vec!["b"]), ("a", vec![]), ("b", vec!["a"])]);
        let successors = build_successor_map(&tasks);
        let order = topological_order(&tasks, &successors).unwrap();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_topological_order_skips_dangling_references() {
        let tasks = make_tasks(vec![("a", vec!["ghost"]), ("b", vec!["a"])]);
        let successors = build_successor_map(&tasks);
        let order = topological_order(&tasks, &successors).unwrap();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_cycle_is_detected_and_named() {
        let tasks = make_tasks(vec![("a", vec!["b"]), ("b", vec!["a"]), ("c", vec![])]);
        let successors = build_successor_map(&tasks);
        let err = topological_order(&tasks, &successors).unwrap_err();
        match err {
            ScheduleError::CyclicDependency(members) => {
                assert_eq!(members.len(), 2);
                assert!(members.contains(&"a".to_string()));
                assert!(members.contains(&"b".to_string()));
            }
            other => panic!("expected CyclicDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let tasks = make_tasks(vec![("a", vec!["a"])]);
        let successors = build_successor_map(&tasks);
        let err = topological_order(&tasks, &successors).unwrap_err();
        assert_eq!(err, ScheduleError::CyclicDependency(vec!["a".to_string()]));
    }

    #[test]
    fn test_check_references() {
        let tasks = make_tasks(vec![("a", vec![]), ("b", vec!["a"])]);
        assert!(check_references(&tasks).is_ok());

        let tasks = make_tasks(vec![("a", vec!["ghost"])]);
        assert_eq!(
            check_references(&tasks).unwrap_err(),
            ScheduleError::UnknownDependency {
                task_id: "a".to_string(),
                dependency: "ghost".to_string(),
            }
        );
    }
}
