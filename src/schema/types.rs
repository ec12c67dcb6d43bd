//! Schema type definitions
//!
//! Supported types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer
//! - bool: Boolean
//! - float: 64-bit floating point

use serde::{Deserialize, Serialize};

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "integer",
            FieldType::Bool => "boolean",
            FieldType::Float => "number",
        }
    }
}

/// Value-level rule applied once the type check has passed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Constraint {
    /// Minimum number of characters in a string
    MinLength { min: usize },
    /// String must be a syntactically valid email address
    Email,
}

/// Field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
    /// Rules evaluated in order after the type check
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

impl FieldDef {
    fn new(field_type: FieldType, required: bool) -> Self {
        Self {
            field_type,
            required,
            constraints: Vec::new(),
        }
    }

    /// Create a required string field
    pub fn required_string() -> Self {
        Self::new(FieldType::String, true)
    }

    /// Create a required int field
    pub fn required_int() -> Self {
        Self::new(FieldType::Int, true)
    }

    /// Create an optional bool field
    pub fn optional_bool() -> Self {
        Self::new(FieldType::Bool, false)
    }

    /// Create a required float field
    pub fn required_float() -> Self {
        Self::new(FieldType::Float, true)
    }

    /// Attach a constraint to this field
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// A named field inside a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(flatten)]
    pub def: FieldDef,
}

/// Complete schema definition for one entity payload.
///
/// Fields keep their declaration order so violations are reported
/// deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Entity name, used in log output
    pub name: String,
    /// Field definitions in declaration order
    pub fields: Vec<SchemaField>,
}

impl Schema {
    /// Create an empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field
    pub fn field(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            def,
        });
        self
    }

    /// Look up a field definition by name
    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.def)
    }
}
