//! # Receipt Builder
//!
//! Plain-text receipt for a customer's thali order.
//!
//! ## Receipt Layout
//! ```text
//! ┌──────────────────────────────┐
//! │ THALI RECEIPT                │  ← title
//! │ ---                          │  ← section rule
//! │ Customer: ASHA               │  ← name uppercased
//! │ - Thali A x Rs.100           │  ← one line per thali,
//! │ - Thali B x Rs.150           │    price in natural form
//! │ ---                          │
//! │ Total: Rs.250                │  ← raw sum, natural form
//! │ Items: 2                     │  ← number of thalis
//! └──────────────────────────────┘
//! ```
//!
//! Unlike descriptions, receipt prices are not padded to two decimals:
//! `12.5` prints as `Rs.12.5`.

use serde_json::Value;
use tracing::debug;

use crate::config::MenuConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::price::Price;
use crate::types::Thali;
use crate::validation::{expect_non_empty_array, expect_text, RequiredFields};

/// Renders a receipt, or `None` for an empty order.
///
/// ## Example
/// ```rust
/// use thali_core::{build_receipt, Thali};
///
/// let order = [
///     Thali::new("Thali A", Vec::<String>::new(), 100.0, true),
///     Thali::new("Thali B", Vec::<String>::new(), 150.0, false),
/// ];
///
/// let receipt = build_receipt("Asha", &order).unwrap();
/// assert!(receipt.contains("Customer: ASHA"));
/// assert!(receipt.ends_with("Total: Rs.250\nItems: 2"));
///
/// assert!(build_receipt("X", &[]).is_none());
/// ```
pub fn build_receipt(customer_name: &str, thalis: &[Thali]) -> Option<String> {
    build_receipt_with(customer_name, thalis, &MenuConfig::default())
}

/// [`build_receipt`] with custom labels.
pub fn build_receipt_with(
    customer_name: &str,
    thalis: &[Thali],
    config: &MenuConfig,
) -> Option<String> {
    if thalis.is_empty() {
        return None;
    }

    let total: Price = thalis.iter().map(|thali| thali.price).sum();

    let line_items = thalis
        .iter()
        .map(|thali| format!("- {} x {}{}", thali.name, config.currency_prefix, thali.price))
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        "{title}\n{rule}\nCustomer: {customer}\n{line_items}\n{rule}\nTotal: {currency}{total}\nItems: {count}",
        title = config.receipt_title,
        rule = config.section_rule,
        customer = customer_name.to_uppercase(),
        currency = config.currency_prefix,
        count = thalis.len(),
    ))
}

/// Validates an untyped customer name and order, then renders a receipt.
///
/// Every entry must carry `name` and `price`.
pub fn try_build_receipt(customer_name: &Value, thalis: &Value) -> ValidationResult<String> {
    try_build_receipt_with(customer_name, thalis, &MenuConfig::default())
}

/// [`try_build_receipt`] with custom labels.
pub fn try_build_receipt_with(
    customer_name: &Value,
    thalis: &Value,
    config: &MenuConfig,
) -> ValidationResult<String> {
    let customer_name = expect_text(customer_name, "customerName")?;
    let order = parse_order(thalis)?;

    build_receipt_with(customer_name, &order, config)
        .ok_or_else(|| ValidationError::EmptyCollection {
            field: "thalis".to_string(),
        })
}

/// Renders a receipt for untyped input, or `""` if the input is malformed.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use thali_core::build_receipt_value;
///
/// assert_eq!(build_receipt_value(&json!("X"), &json!([])), "");
/// assert_eq!(build_receipt_value(&json!(42), &json!([{"name": "A", "price": 1}])), "");
/// ```
pub fn build_receipt_value(customer_name: &Value, thalis: &Value) -> String {
    build_receipt_value_with(customer_name, thalis, &MenuConfig::default())
}

/// [`build_receipt_value`] with custom labels.
pub fn build_receipt_value_with(
    customer_name: &Value,
    thalis: &Value,
    config: &MenuConfig,
) -> String {
    try_build_receipt_with(customer_name, thalis, config).unwrap_or_else(|err| {
        debug!(operation = "build_receipt", error = %err, "Rejected thali order");
        String::new()
    })
}

fn parse_order(value: &Value) -> ValidationResult<Vec<Thali>> {
    expect_non_empty_array(value, "thalis")?
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Thali::from_value_with(entry, RequiredFields::RECEIPT)
                .map_err(|err| err.at_index(index))
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order() -> Vec<Thali> {
        vec![
            Thali::new("Thali A", ["dal"], 100.0, true),
            Thali::new("Thali B", ["fish"], 150.0, false),
        ]
    }

    #[test]
    fn test_receipt_layout() {
        let receipt = build_receipt("Asha", &order()).unwrap();
        assert_eq!(
            receipt,
            "THALI RECEIPT\n---\nCustomer: ASHA\n- Thali A x Rs.100\n- Thali B x Rs.150\n---\nTotal: Rs.250\nItems: 2"
        );
    }

    #[test]
    fn test_receipt_natural_prices() {
        let order = [
            Thali::new("Half Plate", ["rice"], 12.5, true),
            Thali::new("Mini Plate", ["roti"], 10.25, true),
            Thali::new("Chai", ["tea"], 0.1, true),
        ];
        let receipt = build_receipt("ravi", &order).unwrap();

        assert!(receipt.contains("- Half Plate x Rs.12.5\n"));
        assert!(receipt.contains("- Mini Plate x Rs.10.25\n"));
        assert!(receipt.contains("- Chai x Rs.0.1\n"));
        assert!(receipt.contains("Total: Rs.22.85\n"));
    }

    #[test]
    fn test_receipt_raw_sum_is_not_rounded() {
        let order = [
            Thali::new("Chai", ["tea"], 0.1, true),
            Thali::new("Biscuit", ["glucose"], 0.2, true),
        ];
        let receipt = build_receipt("ravi", &order).unwrap();
        assert!(receipt.contains("Total: Rs.0.30000000000000004\n"));
    }

    #[test]
    fn test_receipt_count_is_thalis_not_dishes() {
        let order = [Thali::new("Big Thali", ["a", "b", "c", "d"], 500.0, true)];
        let receipt = build_receipt("Meera", &order).unwrap();
        assert!(receipt.ends_with("Items: 1"));
    }

    #[test]
    fn test_receipt_empty_order() {
        assert!(build_receipt("X", &[]).is_none());
    }

    #[test]
    fn test_receipt_with_config() {
        let config = MenuConfig {
            currency_prefix: "INR ".to_string(),
            receipt_title: "BILL".to_string(),
            section_rule: "===".to_string(),
            ..MenuConfig::default()
        };
        let receipt = build_receipt_with("Asha", &order(), &config).unwrap();
        assert!(receipt.starts_with("BILL\n===\nCustomer: ASHA\n- Thali A x INR 100\n"));
        assert!(receipt.contains("\n===\nTotal: INR 250\n"));
    }

    #[test]
    fn test_try_build_receipt_partial_records() {
        let thalis = json!([
            {"name": "Thali A", "price": 100},
            {"name": "Thali B", "price": 150}
        ]);
        let receipt = try_build_receipt(&json!("Asha"), &thalis).unwrap();

        assert!(receipt.contains("Customer: ASHA\n"));
        assert!(receipt.contains("Total: Rs.250\n"));
        assert!(receipt.ends_with("Items: 2"));
    }

    #[test]
    fn test_try_build_receipt_rejects_bad_input() {
        let thalis = json!([{"name": "Thali A", "price": 100}]);

        assert!(matches!(
            try_build_receipt(&json!(null), &thalis),
            Err(ValidationError::WrongType { .. })
        ));
        assert!(matches!(
            try_build_receipt(&json!("Asha"), &json!([])),
            Err(ValidationError::EmptyCollection { .. })
        ));
        assert!(matches!(
            try_build_receipt(&json!("Asha"), &json!([{"name": "Thali A"}])),
            Err(ValidationError::InvalidEntry { index: 0, .. })
        ));
    }

    #[test]
    fn test_build_receipt_value_sentinel() {
        assert_eq!(build_receipt_value(&json!("X"), &json!([])), "");
        assert_eq!(build_receipt_value(&json!("X"), &json!({"name": "A", "price": 1})), "");
        assert_eq!(build_receipt_value(&json!(["X"]), &json!([{"name": "A", "price": 1}])), "");
    }
}
