//! Presentation helpers for float values.
//!
//! These live next to the engine because they consume its output directly;
//! actual rendering happens in the caller's UI layer.

/// Formats a float (slack) day count for display: "0 dias", "1 dia",
/// "7 dias".
pub fn format_float(days: i64) -> String {
    if days == 1 {
        "1 dia".to_string()
    } else {
        format!("{days} dias")
    }
}

/// Severity band for a task's total float.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatSeverity {
    /// No slack (or negative): the task is critical.
    Critical,
    /// 1-2 days of slack.
    NearCritical,
    /// 3-5 days of slack.
    Caution,
    /// 6 or more days of slack.
    Comfortable,
}

impl FloatSeverity {
    /// Classifies a total float value into its severity band.
    pub fn from_total_float(days: i64) -> Self {
        match days {
            d if d <= 0 => Self::Critical,
            1..=2 => Self::NearCritical,
            3..=5 => Self::Caution,
            _ => Self::Comfortable,
        }
    }

    /// Color token used by the timeline UI.
    pub fn color_token(self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::NearCritical => "orange",
            Self::Caution => "yellow",
            Self::Comfortable => "green",
        }
    }
}
