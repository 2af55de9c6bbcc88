//! Planning error types.

use std::error::Error;
use std::fmt;

/// Errors a planning request can fail with before planning starts.
///
/// Planning itself has no fallible steps; internal faults (impossible
/// lookups, index errors) are bugs and propagate as panics.
#[derive(Debug)]
pub enum PlanError {
    /// `start_date` did not parse as "YYYY-MM-DD".
    MalformedDate {
        /// The rejected input.
        value: String,
        /// The underlying parse failure.
        source: chrono::format::ParseError,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::MalformedDate { value, .. } => {
                write!(f, "start_date {value:?} is not a valid YYYY-MM-DD date")
            }
        }
    }
}

impl Error for PlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlanError::MalformedDate { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_input() {
        let source = chrono::NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d")
            .expect_err("should not parse");
        let err = PlanError::MalformedDate {
            value: "not-a-date".into(),
            source,
        };
        let text = err.to_string();
        assert!(text.contains("not-a-date"));
        assert!(err.source().is_some());
    }
}
