//! Backward pass: latest start and finish dates.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::dates::add_days;
use crate::models::Task;

use super::graph::SuccessorMap;
use super::types::Timing;

/// Assigns late start/finish to every task, walking the topological order
/// in reverse so every successor's timing is final before its dependencies
/// are visited.
///
/// A task's late finish is the earliest late start among its successors,
/// or the project end when it has none. The project end is a correct upper
/// bound for any late start, so it doubles as the fold seed.
pub(crate) fn backward_pass(
    tasks: &FxHashMap<String, Task>,
    successors: &SuccessorMap<'_>,
    topo: &[&str],
    project_end: NaiveDate,
    timings: &mut FxHashMap<String, Timing>,
) {
    for &id in topo.iter().rev() {
        let mut late_finish = project_end;
        if let Some(succs) = successors.get(id) {
            for &succ in succs {
                if let Some(succ_timing) = timings.get(succ) {
                    if succ_timing.late_start < late_finish {
                        late_finish = succ_timing.late_start;
                    }
                }
            }
        }

        let duration = tasks[id].duration_days();
        if let Some(timing) = timings.get_mut(id) {
            timing.late_finish = late_finish;
            timing.late_start = add_days(late_finish, -duration);
        }
    }
}
