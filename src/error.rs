use thiserror::Error;

use crate::time::TimeParseError;

/// Errors for input that cannot describe a generation run at all.
///
/// Finding no valid combination is not an error; it yields an empty result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Program must not be empty")]
    EmptyProgram,

    #[error("Invalid {field} limit {value:?}: {source}")]
    InvalidTimeLimit {
        field: &'static str,
        value: String,
        #[source]
        source: TimeParseError,
    },

    #[error("Invalid {field} count {value:?}: expected \"Any\" or a non-negative integer")]
    InvalidCount { field: &'static str, value: String },

    #[error("Batch size must be greater than zero")]
    ZeroBatchSize,

    #[error("Combination limit must be greater than zero")]
    ZeroCombinationLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program_display() {
        assert_eq!(PlannerError::EmptyProgram.to_string(), "Program must not be empty");
    }

    #[test]
    fn invalid_time_limit_display_includes_cause() {
        let e = PlannerError::InvalidTimeLimit {
            field: "earliest start",
            value: "soon".to_string(),
            source: TimeParseError::MalformedClock("soon".to_string()),
        };
        let s = e.to_string();
        assert!(s.contains("earliest start"));
        assert!(s.contains("Unrecognised clock time"));
    }

    #[test]
    fn invalid_count_display() {
        let e = PlannerError::InvalidCount {
            field: "days per week",
            value: "three".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid days per week count \"three\": expected \"Any\" or a non-negative integer"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(PlannerError::ZeroBatchSize, PlannerError::ZeroBatchSize);
        assert_ne!(PlannerError::ZeroBatchSize, PlannerError::ZeroCombinationLimit);
    }
}
