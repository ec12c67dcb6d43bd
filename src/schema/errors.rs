//! Validation error types
//!
//! A failed validation carries every violation found, each attached to
//! the field it concerns, so the HTTP layer can return them as a list.

use std::fmt;

use serde::Serialize;

/// A single rule violation on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name (`body` when the payload itself is unusable)
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "Required")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &str, actual: &str) -> Self {
        Self::new(field, format!("Expected {}, received {}", expected, actual))
    }

    pub fn out_of_range(field: impl Into<String>) -> Self {
        Self::new(field, "Integer out of range")
    }

    pub fn too_short(field: impl Into<String>, min: usize) -> Self {
        let field = field.into();
        let message = format!("{} must be at least {} characters.", capitalize(&field), min);
        Self::new(field, message)
    }

    pub fn invalid_email(field: impl Into<String>) -> Self {
        Self::new(field, "Invalid email")
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All violations found while validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Shorthand for a single violation
    pub fn single(violation: FieldViolation) -> Self {
        Self::new(vec![violation])
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if any violation concerns `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (i, violation) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result of a validation pass
pub type SchemaResult<T> = Result<T, ValidationErrors>;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
