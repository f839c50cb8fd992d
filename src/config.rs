//! Configuration for schedule computation.

/// Options controlling validation strictness and log output.
#[derive(Clone, Debug)]
pub struct ScheduleConfig {
    /// When true, a dependency id not present in the task set is an error.
    /// When false (the default), unknown references are skipped and carry
    /// no constraint, which keeps partial graphs schedulable during
    /// incremental edits.
    pub strict_dependencies: bool,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            strict_dependencies: false,
            verbosity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_lenient_and_silent() {
        let config = ScheduleConfig::default();
        assert!(!config.strict_dependencies);
        assert_eq!(config.verbosity, 0);
    }
}
