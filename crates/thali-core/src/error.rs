//! # Error Types
//!
//! Domain-specific error types for thali-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError           - General failures (config parsing)               │
//! │  └── ValidationError - Untyped input rejected by a type guard          │
//! │                                                                         │
//! │  Flow: ValidationError → sentinel ("" / None / [])  in *_value fns     │
//! │        ValidationError → Err(..)                    in try_* fns        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field (and element index) in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu config text could not be parsed as TOML.
    #[error("Invalid menu config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the type guards in [`crate::validation`] when an untyped value
/// does not have the shape an operation needs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The value is not a JSON object (null, array, scalar).
    #[error("{field} must be an object")]
    NotAnObject { field: String },

    /// The value is not a JSON array.
    #[error("{field} must be an array")]
    NotAnArray { field: String },

    /// A required field is absent.
    #[error("{field} is required")]
    Missing { field: String },

    /// A field is present but has the wrong JSON type.
    #[error("{field} must be {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    /// A collection was empty where at least one entry is needed.
    #[error("{field} must not be empty")]
    EmptyCollection { field: String },

    /// One element of a collection failed validation.
    #[error("entry {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },

    /// A config label is empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A config label is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// Wraps this error with the index of the collection element it came from.
    pub fn at_index(self, index: usize) -> Self {
        ValidationError::InvalidEntry {
            index,
            source: Box::new(self),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::WrongType {
            field: "price".to_string(),
            expected: "a number",
        };
        assert_eq!(err.to_string(), "price must be a number");

        let err = ValidationError::Missing {
            field: "isVeg".to_string(),
        };
        assert_eq!(err.to_string(), "isVeg is required");
    }

    #[test]
    fn test_entry_index_in_message() {
        let err = ValidationError::Missing {
            field: "name".to_string(),
        }
        .at_index(2);
        assert_eq!(err.to_string(), "entry 2: name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotAnArray {
            field: "thalis".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
