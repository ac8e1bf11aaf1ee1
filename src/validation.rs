use std::fmt;

use serde::Serialize;

/// A single advisory finding about user input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Name of the offending field.
    pub field: &'static str,

    /// Position in the input list, for batch validations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "item {}: {}", i + 1, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Errors block submission; warnings are informational only.
///
/// Validation never blocks normalization or conversion itself, callers
/// decide what to do with the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, field: &'static str, index: Option<usize>, message: String) {
        self.errors.push(ValidationIssue {
            field,
            index,
            message,
        });
    }

    pub fn push_warning(&mut self, field: &'static str, index: Option<usize>, message: String) {
        self.warnings.push(ValidationIssue {
            field,
            index,
            message,
        });
    }

    /// Append another report's findings to this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_validity_ignores_warnings() {
        let mut report = ValidationReport::new();
        report.push_warning("price", None, "Price looks high".to_string());
        assert!(report.is_valid());

        report.push_error("quantity", Some(2), "Quantity must be greater than zero".to_string());
        assert!(!report.is_valid());
        assert_eq!(
            report.errors[0].to_string(),
            "item 3: Quantity must be greater than zero"
        );
    }

    #[test]
    fn test_merge() {
        let mut a = ValidationReport::new();
        a.push_error("unitMeasure", None, "Unit is required".to_string());
        let mut b = ValidationReport::new();
        b.push_warning("price", None, "High".to_string());

        a.merge(b);
        assert_eq!(a.errors.len(), 1);
        assert_eq!(a.warnings.len(), 1);
    }
}
