//! Error types for schedule computation.

use thiserror::Error;

/// Errors raised while validating input or computing a schedule.
///
/// All errors surface synchronously before or during the passes; a failed
/// computation yields no schedule, never a partial one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A task record is missing a required date field.
    #[error("task '{task_id}' is missing required field '{field}'")]
    MissingDate {
        task_id: String,
        field: &'static str,
    },

    /// A task record carries a date that is not a valid ISO-8601 date.
    #[error("task '{task_id}' has invalid {field} '{value}': expected an ISO-8601 date")]
    InvalidDate {
        task_id: String,
        field: &'static str,
        value: String,
    },

    /// A task references a dependency id not present in the input set.
    /// Raised only in strict mode; lenient mode skips the reference.
    #[error("task '{task_id}' depends on unknown task '{dependency}'")]
    UnknownDependency {
        task_id: String,
        dependency: String,
    },

    /// The dependency graph contains a cycle; members are listed in walk
    /// order.
    #[error("circular dependency detected: {}", .0.join(" -> "))]
    CyclicDependency(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_dependency_names_members() {
        let err = ScheduleError::CyclicDependency(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "circular dependency detected: a -> b");
    }

    #[test]
    fn test_invalid_date_names_task_and_field() {
        let err = ScheduleError::InvalidDate {
            task_id: "t1".into(),
            field: "start_date",
            value: "not-a-date".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("t1"));
        assert!(msg.contains("start_date"));
        assert!(msg.contains("not-a-date"));
    }
}
