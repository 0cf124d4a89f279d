//! # Validation Module
//!
//! Runtime type guards for untyped (`serde_json::Value`) menu input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shape guards (THIS MODULE)                                   │
//! │  ├── expect_object / expect_array / expect_non_empty_array             │
//! │  └── text_field / number_field / bool_field / text_list_field          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Validated construction (Thali::from_value_with)              │
//! │  └── Only the fields in RequiredFields must pass                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Typed operations (describe, stats, search, build_receipt)    │
//! │  └── Never see malformed data                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No coercion happens here: `"250"` is not a number and `1` is not a boolean.
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use thali_core::validation::{expect_object, text_field};
//!
//! let value = json!({ "name": "Rajasthani Thali" });
//! let object = expect_object(&value, "thali").unwrap();
//! assert_eq!(text_field(object, "name").unwrap(), "Rajasthani Thali");
//! ```

use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_LABEL_LEN;

/// JSON object type used by the field guards.
pub type Object = Map<String, Value>;

// =============================================================================
// Required Fields
// =============================================================================

/// Which record fields an operation needs to be present and well-typed.
///
/// ## Per-operation Requirements
/// ```text
/// ┌──────────────────┬──────┬───────┬───────┬───────┐
/// │ operation        │ name │ items │ price │ isVeg │
/// ├──────────────────┼──────┼───────┼───────┼───────┤
/// │ describe         │  ✓   │   ✓   │   ✓   │   ✓   │
/// │ stats            │  ✓   │       │   ✓   │   ✓   │
/// │ search           │  ✓   │   ✓   │       │       │
/// │ build_receipt    │  ✓   │       │   ✓   │       │
/// └──────────────────┴──────┴───────┴───────┴───────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFields {
    pub name: bool,
    pub items: bool,
    pub price: bool,
    pub is_veg: bool,
}

impl RequiredFields {
    /// Every field; a full record.
    pub const ALL: Self = RequiredFields {
        name: true,
        items: true,
        price: true,
        is_veg: true,
    };

    /// Fields read by the aggregator.
    pub const STATS: Self = RequiredFields {
        name: true,
        items: false,
        price: true,
        is_veg: true,
    };

    /// Fields read by the searcher.
    pub const SEARCH: Self = RequiredFields {
        name: true,
        items: true,
        price: false,
        is_veg: false,
    };

    /// Fields read by the receipt builder.
    pub const RECEIPT: Self = RequiredFields {
        name: true,
        items: false,
        price: true,
        is_veg: false,
    };
}

impl Default for RequiredFields {
    fn default() -> Self {
        RequiredFields::ALL
    }
}

// =============================================================================
// Container Guards
// =============================================================================

/// Requires `value` to be a JSON object (not null, not an array).
pub fn expect_object<'a>(value: &'a Value, field: &str) -> ValidationResult<&'a Object> {
    value.as_object().ok_or_else(|| ValidationError::NotAnObject {
        field: field.to_string(),
    })
}

/// Requires `value` to be a JSON array (possibly empty).
pub fn expect_array<'a>(value: &'a Value, field: &str) -> ValidationResult<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::NotAnArray {
            field: field.to_string(),
        })
}

/// Requires `value` to be a JSON array with at least one element.
pub fn expect_non_empty_array<'a>(value: &'a Value, field: &str) -> ValidationResult<&'a [Value]> {
    let entries = expect_array(value, field)?;

    if entries.is_empty() {
        return Err(ValidationError::EmptyCollection {
            field: field.to_string(),
        });
    }

    Ok(entries)
}

/// Requires `value` to be a JSON string.
pub fn expect_text<'a>(value: &'a Value, field: &str) -> ValidationResult<&'a str> {
    value.as_str().ok_or_else(|| ValidationError::WrongType {
        field: field.to_string(),
        expected: "a string",
    })
}

// =============================================================================
// Field Guards
// =============================================================================

fn field<'a>(object: &'a Object, name: &str) -> ValidationResult<&'a Value> {
    object.get(name).ok_or_else(|| ValidationError::Missing {
        field: name.to_string(),
    })
}

/// Reads a string field.
pub fn text_field<'a>(object: &'a Object, name: &str) -> ValidationResult<&'a str> {
    expect_text(field(object, name)?, name)
}

/// Reads a numeric field as `f64`.
///
/// Integers and floats are both accepted; a JSON `null` is not.
pub fn number_field(object: &Object, name: &str) -> ValidationResult<f64> {
    field(object, name)?
        .as_f64()
        .ok_or_else(|| ValidationError::WrongType {
            field: name.to_string(),
            expected: "a number",
        })
}

/// Reads a boolean field.
pub fn bool_field(object: &Object, name: &str) -> ValidationResult<bool> {
    field(object, name)?
        .as_bool()
        .ok_or_else(|| ValidationError::WrongType {
            field: name.to_string(),
            expected: "a boolean",
        })
}

/// Reads an array-of-strings field, keeping element order.
pub fn text_list_field(object: &Object, name: &str) -> ValidationResult<Vec<String>> {
    let entries = expect_array(field(object, name)?, name)?;

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| ValidationError::WrongType {
                    field: name.to_string(),
                    expected: "an array of strings",
                })
        })
        .collect()
}

// =============================================================================
// Config Validators
// =============================================================================

/// Validates a display label from the menu config.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most `MAX_LABEL_LEN` (32) characters
///
/// ## Example
/// ```rust
/// use thali_core::validation::validate_label;
///
/// assert!(validate_label("currency_prefix", "Rs.").is_ok());
/// assert!(validate_label("currency_prefix", "").is_err());
/// ```
pub fn validate_label(field: &str, label: &str) -> ValidationResult<()> {
    if label.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if label.chars().count() > MAX_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_LABEL_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_object() {
        assert!(expect_object(&json!({}), "thali").is_ok());

        assert!(expect_object(&Value::Null, "thali").is_err());
        assert!(expect_object(&json!([]), "thali").is_err());
        assert!(expect_object(&json!("thali"), "thali").is_err());
    }

    #[test]
    fn test_expect_non_empty_array() {
        assert_eq!(expect_non_empty_array(&json!([1]), "thalis").unwrap().len(), 1);

        assert!(matches!(
            expect_non_empty_array(&json!([]), "thalis"),
            Err(ValidationError::EmptyCollection { .. })
        ));
        assert!(matches!(
            expect_non_empty_array(&json!("not an array"), "thalis"),
            Err(ValidationError::NotAnArray { .. })
        ));
    }

    #[test]
    fn test_number_field_does_not_coerce() {
        let object = json!({ "a": 250, "b": 99.5, "c": "250", "d": null });
        let object = object.as_object().unwrap();

        assert_eq!(number_field(object, "a").unwrap(), 250.0);
        assert_eq!(number_field(object, "b").unwrap(), 99.5);
        assert!(number_field(object, "c").is_err());
        assert!(number_field(object, "d").is_err());
        assert!(matches!(
            number_field(object, "e"),
            Err(ValidationError::Missing { .. })
        ));
    }

    #[test]
    fn test_bool_field_does_not_coerce() {
        let object = json!({ "yes": true, "one": 1 });
        let object = object.as_object().unwrap();

        assert!(bool_field(object, "yes").unwrap());
        assert!(bool_field(object, "one").is_err());
    }

    #[test]
    fn test_text_list_field() {
        let object = json!({ "ok": ["dal", "churma"], "mixed": ["dal", 3], "flat": "dal" });
        let object = object.as_object().unwrap();

        assert_eq!(text_list_field(object, "ok").unwrap(), vec!["dal", "churma"]);
        assert!(text_list_field(object, "mixed").is_err());
        assert!(text_list_field(object, "flat").is_err());
    }

    #[test]
    fn test_validate_label() {
        assert!(validate_label("veg_label", "Veg").is_ok());
        assert!(validate_label("veg_label", "").is_err());
        assert!(validate_label("veg_label", &"V".repeat(33)).is_err());
    }
}
