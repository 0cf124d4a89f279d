//! # Formatter
//!
//! One-line description of a single thali.
//!
//! ```text
//! RAJASTHANI THALI (Veg) - Items: dal, churma - Rs.250.00
//! └──── name ────┘ └tag┘          └─ items ─┘      └price┘
//!     uppercased                  joined ", "      two decimals
//! ```

use serde_json::Value;
use tracing::debug;

use crate::config::MenuConfig;
use crate::error::ValidationResult;
use crate::types::Thali;

/// Describes a thali using the default labels.
///
/// ## Example
/// ```rust
/// use thali_core::{describe, Thali};
///
/// let thali = Thali::new("Rajasthani Thali", ["dal", "churma"], 250.0, true);
/// assert_eq!(
///     describe(&thali),
///     "RAJASTHANI THALI (Veg) - Items: dal, churma - Rs.250.00"
/// );
/// ```
pub fn describe(thali: &Thali) -> String {
    describe_with(thali, &MenuConfig::default())
}

/// Describes a thali using the labels in `config`.
pub fn describe_with(thali: &Thali, config: &MenuConfig) -> String {
    format!(
        "{} ({}) - Items: {} - {}{}",
        thali.name.to_uppercase(),
        config.food_label(thali.is_veg),
        thali.items.join(config.item_separator.as_str()),
        config.currency_prefix,
        thali.price.to_fixed_2(),
    )
}

/// Validates an untyped record, then describes it.
///
/// The record must carry all four fields with their exact types.
pub fn try_describe(value: &Value) -> ValidationResult<String> {
    try_describe_with(value, &MenuConfig::default())
}

/// [`try_describe`] with custom labels.
pub fn try_describe_with(value: &Value, config: &MenuConfig) -> ValidationResult<String> {
    let thali = Thali::from_value(value)?;
    Ok(describe_with(&thali, config))
}

/// Describes an untyped record, or returns `""` if it is malformed.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use thali_core::describe_value;
///
/// assert_eq!(describe_value(&json!({"name": "No Price", "items": [], "isVeg": true})), "");
/// assert_eq!(describe_value(&json!(null)), "");
/// ```
pub fn describe_value(value: &Value) -> String {
    describe_value_with(value, &MenuConfig::default())
}

/// [`describe_value`] with custom labels.
pub fn describe_value_with(value: &Value, config: &MenuConfig) -> String {
    try_describe_with(value, config).unwrap_or_else(|err| {
        debug!(operation = "describe", error = %err, "Rejected thali record");
        String::new()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
