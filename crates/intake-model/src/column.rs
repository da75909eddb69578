//! Target column definitions supplied by the host application.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Primitive type tag for a target column.
///
/// Drives the built-in type checks during validation. Columns without an
/// explicit type are treated as free-form strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free-form text, never type-checked.
    #[default]
    String,
    /// Must parse as a numeric literal.
    Number,
    /// Must parse as a calendar date.
    Date,
    /// Must look like `local@domain.tld`.
    Email,
    /// Must be one of true/false/1/0/yes/no (case-insensitive).
    Boolean,
}

/// Outcome of a custom column validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    /// Invalid, with a human-readable message for the issue list.
    Invalid(String),
}

/// Validator callback a host may attach to a column.
///
/// Runs in addition to the built-in type check whenever a non-empty value
/// is present.
pub type ColumnValidator = Arc<dyn Fn(&str) -> Validity + Send + Sync>;

/// A field the host application expects to receive, independent of how
/// the source file names it.
#[derive(Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Stable key used in transformed records and mapping lookups.
    pub key: String,
    /// Display label shown to the user and cited in validation issues.
    pub label: String,
    /// Required columns must be mapped and non-empty in every row.
    #[serde(default)]
    pub required: bool,
    /// Type tag for built-in value checks.
    #[serde(default, rename = "type")]
    pub column_type: ColumnType,
    /// Optional custom validator. Not serializable; hosts attach it in code.
    #[serde(skip)]
    pub validator: Option<ColumnValidator>,
}

impl ColumnDef {
    /// Creates an optional string column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: false,
            column_type: ColumnType::String,
            validator: None,
        }
    }

    /// Marks the column as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the column type.
    #[must_use]
    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    /// Attaches a custom validator.
    #[must_use]
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Validity + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("column_type", &self.column_type)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_def_from_json_defaults() {
        let def: ColumnDef =
            serde_json::from_str(r#"{"key": "email", "label": "Email"}"#).unwrap();
        assert_eq!(def.key, "email");
        assert!(!def.required);
        assert_eq!(def.column_type, ColumnType::String);
        assert!(def.validator.is_none());
    }

    #[test]
    fn column_type_wire_names_are_lowercase() {
        let def: ColumnDef = serde_json::from_str(
            r#"{"key": "qty", "label": "Quantity", "required": true, "type": "number"}"#,
        )
        .unwrap();
        assert!(def.required);
        assert_eq!(def.column_type, ColumnType::Number);
    }
}
