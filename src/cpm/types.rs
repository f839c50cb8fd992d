//! Pass state for critical path computation.

use chrono::NaiveDate;

/// Per-task timing populated by the two passes.
///
/// The late fields hold placeholder copies of the early fields until the
/// backward pass overwrites them.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Timing {
    /// Earliest possible start date (forward pass).
    pub early_start: NaiveDate,
    /// Earliest possible finish date (forward pass).
    pub early_finish: NaiveDate,
    /// Latest allowable start date (backward pass).
    pub late_start: NaiveDate,
    /// Latest allowable finish date (backward pass).
    pub late_finish: NaiveDate,
}
