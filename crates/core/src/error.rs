use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One unmet field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field path, e.g. `name` or `contacts[2].value`
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldViolation {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A candidate record failed validation before any write was attempted.
///
/// Violations are kept in check order, so [`ValidationError::first`] is the
/// first constraint that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Returns `None` when there is nothing to report.
    #[must_use]
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        if violations.is_empty() { None } else { Some(Self { violations }) }
    }

    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// The first unmet constraint.
    #[must_use]
    pub fn first(&self) -> &FieldViolation {
        // from_violations never builds an empty error
        &self.violations[0]
    }

    /// Whether any violation names `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_violation_list_is_not_an_error() {
        assert!(ValidationError::from_violations(Vec::new()).is_none());
    }

    #[test]
    fn display_lists_every_violation_in_order() {
        let err = ValidationError::from_violations(vec![
            FieldViolation::new("name", "missing"),
            FieldViolation::new("address", "missing"),
        ])
        .unwrap();
        assert_eq!(err.to_string(), "validation failed: name: missing; address: missing");
        assert_eq!(err.first().field, "name");
        assert!(err.has_field("address"));
        assert!(!err.has_field("description"));
    }
}
