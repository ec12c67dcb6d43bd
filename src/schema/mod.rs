//! Request schema validation for clientfolio
//!
//! Every payload is checked against a declarative schema before any
//! persistence call is made.
//!
//! # Design Principles
//!
//! - Declarative field rules (type, required, constraints)
//! - All violations reported together, keyed by field name
//! - No coercion; `null` is never treated as absent
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{FieldViolation, SchemaResult, ValidationErrors};
pub use types::{Constraint, FieldDef, FieldType, Schema, SchemaField};
pub use validator::SchemaValidator;
