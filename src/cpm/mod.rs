//! Critical path method (CPM) computation.
//!
//! The classic two-pass algorithm over the dependency DAG: a forward pass
//! assigns earliest start/finish dates, a backward pass assigns latest
//! start/finish dates, and the float analysis derives slack and the
//! critical task set from the four dates.

mod analysis;
mod backward;
mod forward;
mod graph;
mod schedule;
mod types;

pub use schedule::{calculate_critical_path, sort_critical_path, Scheduler};
