//! Schema validator for request payloads
//!
//! Validation semantics:
//! - The document must be a JSON object
//! - All required fields are present
//! - Field types exactly match schema types (no coercion)
//! - `null` is a type mismatch, never "absent"
//! - Constraints run only on values of the right type
//! - Undeclared fields are ignored
//!
//! Every violation is collected; validation does not stop at the first one.

use email_address::{EmailAddress, Options};
use serde_json::{Map, Value};

use super::errors::{FieldViolation, SchemaResult, ValidationErrors};
use super::types::{Constraint, FieldDef, FieldType, Schema};

/// Schema validator that enforces schema rules on documents.
///
/// Validator does not mutate documents and is deterministic.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a document against the schema.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing every violated rule, in field
    /// declaration order.
    pub fn validate_document(&self, document: &Value) -> SchemaResult<()> {
        let obj = match document.as_object() {
            Some(obj) => obj,
            None => {
                return Err(ValidationErrors::single(FieldViolation::type_mismatch(
                    "body",
                    "object",
                    json_type_name(document),
                )))
            }
        };

        let violations = self.validate_object(obj);
        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                schema = %self.schema.name,
                violations = violations.len(),
                "document rejected"
            );
            Err(ValidationErrors::new(violations))
        }
    }

    fn validate_object(&self, obj: &Map<String, Value>) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for field in &self.schema.fields {
            match obj.get(&field.name) {
                Some(value) => {
                    if let Err(v) = validate_value(&field.name, &field.def, value) {
                        violations.push(v);
                    }
                }
                None if field.def.required => {
                    violations.push(FieldViolation::missing_field(&field.name));
                }
                None => {}
            }
        }

        violations
    }
}

/// Validates one present value: type first, then constraints.
fn validate_value(name: &str, def: &FieldDef, value: &Value) -> Result<(), FieldViolation> {
    let type_ok = match def.field_type {
        FieldType::String => value.is_string(),
        FieldType::Int => value.is_i64(),
        FieldType::Bool => value.is_boolean(),
        // Accept both integers and floats as float
        FieldType::Float => value.is_number(),
    };
    if !type_ok {
        if def.field_type == FieldType::Int && value.is_u64() {
            return Err(FieldViolation::out_of_range(name));
        }
        return Err(FieldViolation::type_mismatch(
            name,
            def.field_type.type_name(),
            json_type_name(value),
        ));
    }

    for constraint in &def.constraints {
        check_constraint(name, constraint, value)?;
    }

    Ok(())
}

fn check_constraint(name: &str, constraint: &Constraint, value: &Value) -> Result<(), FieldViolation> {
    let Some(s) = value.as_str() else {
        // String constraints on non-string types are schema bugs; nothing to check.
        return Ok(());
    };

    match constraint {
        Constraint::MinLength { min } => {
            if s.chars().count() < *min {
                return Err(FieldViolation::too_short(name, *min));
            }
        }
        Constraint::Email => {
            if !is_valid_email(s) {
                return Err(FieldViolation::invalid_email(name));
            }
        }
    }

    Ok(())
}

/// Bare addresses only, on a dotted domain whose last label is two or more
/// letters.
fn is_valid_email(s: &str) -> bool {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();

    match EmailAddress::parse_with_options(s, options) {
        Ok(address) => address
            .domain()
            .rsplit('.')
            .next()
            .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())),
        Err(_) => false,
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_like_schema() -> Schema {
        Schema::new("client")
            .field(
                "name",
                FieldDef::required_string().with_constraint(Constraint::MinLength { min: 2 }),
            )
            .field(
                "email",
                FieldDef::required_string().with_constraint(Constraint::Email),
            )
            .field("status", FieldDef::optional_bool())
    }

    #[test]
    fn test_valid_document_passes() {
        let schema = client_like_schema();
        let validator = SchemaValidator::new(&schema);

        let doc = json!({ "name": "Alice", "email": "alice@example.com" });
        assert!(validator.validate_document(&doc).is_ok());
    }

    #[test]
    fn test_optional_field_present_passes() {
        let schema = client_like_schema();
        let validator = SchemaValidator::new(&schema);

        let doc = json!({ "name": "Alice", "email": "alice@example.com", "status": false });
        assert!(validator.validate_document(&doc).is_ok());
    }

    #[test]
    fn test_collects_all_violations_in_order() {
        let schema = client_like_schema();
        let validator = SchemaValidator::new(&schema);

        let doc = json!({ "name": "A", "email": "not-an-email", "status": "yes" });
        let err = validator.validate_document(&doc).unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "status"]);
        assert_eq!(err.violations()[2].message, "Expected boolean, received string");
    }

    #[test]
    fn test_missing_required_field_fails() {
        let schema = client_like_schema();
        let validator = SchemaValidator::new(&schema);

        let err = validator
            .validate_document(&json!({ "email": "alice@example.com" }))
            .unwrap_err();
        assert_eq!(err.violations(), &[FieldViolation::missing_field("name")]);
    }

    #[test]
    fn test_null_is_type_mismatch() {
        let schema = client_like_schema();
        let validator = SchemaValidator::new(&schema);

        let doc = json!({ "name": "Alice", "email": "alice@example.com", "status": null });
        let err = validator.validate_document(&doc).unwrap_err();
        assert_eq!(err.violations()[0].message, "Expected boolean, received null");
    }

    #[test]
    fn test_undeclared_fields_ignored() {
        let schema = client_like_schema();
        let validator = SchemaValidator::new(&schema);

        let doc = json!({ "name": "Alice", "email": "alice@example.com", "id": 42 });
        assert!(validator.validate_document(&doc).is_ok());
    }

    #[test]
    fn test_non_object_body_fails() {
        let schema = client_like_schema();
        let validator = SchemaValidator::new(&schema);

        let err = validator.validate_document(&json!([1, 2])).unwrap_err();
        assert_eq!(err.violations()[0].field, "body");
        assert_eq!(err.violations()[0].message, "Expected object, received array");
    }

    #[test]
    fn test_min_length_counts_characters() {
        let schema = Schema::new("t").field(
            "name",
            FieldDef::required_string().with_constraint(Constraint::MinLength { min: 2 }),
        );
        let validator = SchemaValidator::new(&schema);

        // Two characters, four bytes
        assert!(validator.validate_document(&json!({ "name": "Çã" })).is_ok());
        assert!(validator.validate_document(&json!({ "name": "Ç" })).is_err());
    }

    #[test]
    fn test_int_rejects_fractional_and_float_accepts_int() {
        let schema = Schema::new("asset")
            .field("value", FieldDef::required_float())
            .field("clientId", FieldDef::required_int());
        let validator = SchemaValidator::new(&schema);

        assert!(validator
            .validate_document(&json!({ "value": 10, "clientId": 1 }))
            .is_ok());

        let err = validator
            .validate_document(&json!({ "value": "10", "clientId": 1.5 }))
            .unwrap_err();
        assert_eq!(err.violations()[0].message, "Expected number, received string");
        assert_eq!(err.violations()[1].message, "Expected integer, received number");
    }

    #[test]
    fn test_int_above_i64_is_out_of_range() {
        let schema = Schema::new("asset").field("clientId", FieldDef::required_int());
        let validator = SchemaValidator::new(&schema);

        let err = validator
            .validate_document(&json!({ "clientId": u64::MAX }))
            .unwrap_err();
        assert_eq!(err.violations(), &[FieldViolation::out_of_range("clientId")]);
        assert_eq!(err.violations()[0].message, "Integer out of range");
    }

    #[test]
    fn test_email_requires_dotted_domain_with_tld() {
        for email in ["a@b", "user@localhost", "x@y.z", "x@y.c0m", "Maria <m@example.com>"] {
            assert!(!is_valid_email(email), "accepted {:?}", email);
        }
        for email in ["m@example.com", "first.last@mail.example.com.br"] {
            assert!(is_valid_email(email), "rejected {:?}", email);
        }
    }

    #[test]
    fn test_validation_is_deterministic() {
        let schema = client_like_schema();
        let validator = SchemaValidator::new(&schema);
        let doc = json!({ "email": 3 });

        let first = validator.validate_document(&doc).unwrap_err();
        for _ in 0..50 {
            assert_eq!(validator.validate_document(&doc).unwrap_err(), first);
        }
    }
}
