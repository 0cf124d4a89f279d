//! # Domain Types
//!
//! Core domain types used throughout thali-core.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────┐                   │
//! │  │     Thali       │        │     ThaliStats       │                   │
//! │  │  ─────────────  │ stats  │  ──────────────────  │                   │
//! │  │  name           │ ─────► │  totalThalis         │                   │
//! │  │  items []       │        │  vegCount/nonVegCount│                   │
//! │  │  price (Price)  │        │  avgPrice ("0.00")   │                   │
//! │  │  isVeg          │        │  cheapest/costliest  │                   │
//! │  └─────────────────┘        │  names []            │                   │
//! │                             └──────────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records carry no identity: two thalis with the same fields are the same
//! value, and collections are plain slices whose order is preserved.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::price::Price;
use crate::validation::{
    bool_field, expect_object, number_field, text_field, text_list_field, RequiredFields,
};

// =============================================================================
// Thali
// =============================================================================

/// One combo platter on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Thali {
    /// Display name, e.g. "Rajasthani Thali".
    pub name: String,

    /// Dish names in serving order. May be empty.
    pub items: Vec<String>,

    /// Price in rupees.
    pub price: Price,

    /// Vegetarian classification.
    pub is_veg: bool,
}

impl Thali {
    /// Creates a record from its parts.
    ///
    /// ## Example
    /// ```rust
    /// use thali_core::Thali;
    ///
    /// let thali = Thali::new("Rajasthani Thali", ["dal baati", "churma"], 250.0, true);
    /// assert_eq!(thali.items.len(), 2);
    /// ```
    pub fn new<I, S>(
        name: impl Into<String>,
        items: I,
        price: impl Into<Price>,
        is_veg: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Thali {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
            price: price.into(),
            is_veg,
        }
    }

    /// Parses a full record from an untyped value.
    ///
    /// All four fields must be present with the exact JSON types
    /// (string, array of strings, number, boolean).
    ///
    /// ## Example
    /// ```rust
    /// use serde_json::json;
    /// use thali_core::Thali;
    ///
    /// let ok = json!({"name": "Bengali Thali", "items": ["fish"], "price": 300, "isVeg": false});
    /// assert!(Thali::from_value(&ok).is_ok());
    ///
    /// let partial = json!({"name": "Bengali Thali", "price": 300});
    /// assert!(Thali::from_value(&partial).is_err());
    /// ```
    pub fn from_value(value: &Value) -> ValidationResult<Self> {
        Self::from_value_with(value, RequiredFields::ALL)
    }

    /// Parses a record, requiring only the fields in `required`.
    ///
    /// A field that is not required is still read when it is well-typed;
    /// otherwise it takes a neutral default (`[]`, `0`, `false`) that the
    /// requesting operation never looks at.
    pub fn from_value_with(value: &Value, required: RequiredFields) -> ValidationResult<Self> {
        let object = expect_object(value, "thali")?;

        let name = if required.name {
            text_field(object, "name")?.to_string()
        } else {
            text_field(object, "name").map(str::to_string).unwrap_or_default()
        };

        let items = if required.items {
            text_list_field(object, "items")?
        } else {
            text_list_field(object, "items").unwrap_or_default()
        };

        let price = if required.price {
            number_field(object, "price")?
        } else {
            number_field(object, "price").unwrap_or_default()
        };

        let is_veg = if required.is_veg {
            bool_field(object, "isVeg")?
        } else {
            bool_field(object, "isVeg").unwrap_or_default()
        };

        Ok(Thali {
            name,
            items,
            price: Price::new(price),
            is_veg,
        })
    }

    /// Case-insensitive substring match against the name or any item.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .items
                .iter()
                .any(|item| item.to_lowercase().contains(needle))
    }
}

// =============================================================================
// Thali Stats
// =============================================================================

/// Summary statistics over a non-empty menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ThaliStats {
    /// Number of records.
    pub total_thalis: usize,

    /// Records with `is_veg == true`.
    pub veg_count: usize,

    /// Records with `is_veg == false`.
    pub non_veg_count: usize,

    /// Mean price, two decimals (e.g. "216.67").
    pub avg_price: String,

    /// Lowest price.
    pub cheapest: f64,

    /// Highest price.
    pub costliest: f64,

    /// Names in menu order.
    pub names: Vec<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_record() {
        let value = json!({
            "name": "Rajasthani Thali",
            "items": ["dal", "churma"],
            "price": 250,
            "isVeg": true
        });

        let thali = Thali::from_value(&value).unwrap();
        assert_eq!(thali, Thali::new("Rajasthani Thali", ["dal", "churma"], 250.0, true));
    }

    #[test]
    fn test_from_value_rejects_each_bad_field() {
        let bad = [
            json!({"items": [], "price": 1, "isVeg": true}),
            json!({"name": 7, "items": [], "price": 1, "isVeg": true}),
            json!({"name": "a", "items": "dal", "price": 1, "isVeg": true}),
            json!({"name": "a", "items": [], "price": "1", "isVeg": true}),
            json!({"name": "a", "items": [], "price": 1, "isVeg": "yes"}),
            json!({"name": "a", "items": [], "price": 1}),
            json!(null),
            json!([]),
        ];

        for value in &bad {
            assert!(Thali::from_value(value).is_err(), "accepted {value}");
        }
    }

    #[test]
    fn test_from_value_with_receipt_fields() {
        let value = json!({"name": "Thali A", "price": 100});

        let thali = Thali::from_value_with(&value, RequiredFields::RECEIPT).unwrap();
        assert_eq!(thali.name, "Thali A");
        assert_eq!(thali.price.value(), 100.0);
        assert!(thali.items.is_empty());
        assert!(!thali.is_veg);

        assert!(Thali::from_value_with(&value, RequiredFields::SEARCH).is_err());
    }

    #[test]
    fn test_optional_fields_are_read_when_well_typed() {
        let value = json!({"name": "Thali A", "price": 100, "isVeg": true, "items": ["rice"]});

        let thali = Thali::from_value_with(&value, RequiredFields::RECEIPT).unwrap();
        assert!(thali.is_veg);
        assert_eq!(thali.items, vec!["rice"]);
    }

    #[test]
    fn test_matches_lowercase() {
        let thali = Thali::new("Punjabi Thali", ["Dal Makhani", "naan"], 300.0, true);

        assert!(thali.matches_lowercase("punjabi"));
        assert!(thali.matches_lowercase("dal"));
        assert!(thali.matches_lowercase(""));
        assert!(!thali.matches_lowercase("fish"));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let thali = Thali::new("Goan Thali", ["fish curry"], 350.0, false);
        let value = serde_json::to_value(&thali).unwrap();

        assert_eq!(value["isVeg"], json!(false));
        assert_eq!(Thali::from_value(&value).unwrap(), thali);
    }
}
