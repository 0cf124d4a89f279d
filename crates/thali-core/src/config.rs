//! # Menu Configuration
//!
//! Display labels used when rendering descriptions and receipts.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. TOML text handed in by the caller (MenuConfig::from_toml_str)      │
//! │     Missing keys fall back individually                                │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     Rs. / Veg / Non-Veg / ", " / THALI RECEIPT / ---                   │
//! │                                                                         │
//! │  Reading the text from disk or the environment is the caller's job:    │
//! │  this crate does no I/O.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # menu.toml
//! currency_prefix = "Rs."
//! veg_label = "Veg"
//! non_veg_label = "Non-Veg"
//! item_separator = ", "
//! receipt_title = "THALI RECEIPT"
//! section_rule = "---"
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreResult, ValidationResult};
use crate::validation::validate_label;
use crate::DEFAULT_CURRENCY_PREFIX;

/// Labels and separators for rendered output.
///
/// `MenuConfig::default()` reproduces the standard menu formats exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuConfig {
    /// Printed before every price ("Rs.250.00").
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,

    /// Tag for vegetarian thalis, shown in parentheses.
    #[serde(default = "default_veg_label")]
    pub veg_label: String,

    /// Tag for non-vegetarian thalis, shown in parentheses.
    #[serde(default = "default_non_veg_label")]
    pub non_veg_label: String,

    /// Placed between dish names in a description.
    #[serde(default = "default_item_separator")]
    pub item_separator: String,

    /// First line of a receipt.
    #[serde(default = "default_receipt_title")]
    pub receipt_title: String,

    /// Line separating receipt sections.
    #[serde(default = "default_section_rule")]
    pub section_rule: String,
}

fn default_currency_prefix() -> String {
    DEFAULT_CURRENCY_PREFIX.to_string()
}

fn default_veg_label() -> String {
    "Veg".to_string()
}

fn default_non_veg_label() -> String {
    "Non-Veg".to_string()
}

fn default_item_separator() -> String {
    ", ".to_string()
}

fn default_receipt_title() -> String {
    "THALI RECEIPT".to_string()
}

fn default_section_rule() -> String {
    "---".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            currency_prefix: default_currency_prefix(),
            veg_label: default_veg_label(),
            non_veg_label: default_non_veg_label(),
            item_separator: default_item_separator(),
            receipt_title: default_receipt_title(),
            section_rule: default_section_rule(),
        }
    }
}

impl MenuConfig {
    /// Parses and validates a TOML document.
    ///
    /// ## Example
    /// ```rust
    /// use thali_core::MenuConfig;
    ///
    /// let config = MenuConfig::from_toml_str(r#"currency_prefix = "INR ""#).unwrap();
    /// assert_eq!(config.currency_prefix, "INR ");
    /// assert_eq!(config.veg_label, "Veg");
    ///
    /// assert!(MenuConfig::from_toml_str(r#"veg_label = """#).is_err());
    /// ```
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: MenuConfig = toml::from_str(text)?;
        config.validate()?;

        debug!(
            currency_prefix = %config.currency_prefix,
            receipt_title = %config.receipt_title,
            "Parsed menu config"
        );

        Ok(config)
    }

    /// Checks every label against [`validate_label`].
    ///
    /// `item_separator` may be empty (items run together); every other
    /// label must be non-empty.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_label("currency_prefix", &self.currency_prefix)?;
        validate_label("veg_label", &self.veg_label)?;
        validate_label("non_veg_label", &self.non_veg_label)?;
        validate_label("receipt_title", &self.receipt_title)?;
        validate_label("section_rule", &self.section_rule)?;

        if !self.item_separator.is_empty() {
            validate_label("item_separator", &self.item_separator)?;
        }

        Ok(())
    }

    /// Tag for a thali's classification, without parentheses.
    pub fn food_label(&self, is_veg: bool) -> &str {
        if is_veg {
            &self.veg_label
        } else {
            &self.non_veg_label
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.currency_prefix, "Rs.");
        assert_eq!(config.food_label(true), "Veg");
        assert_eq!(config.food_label(false), "Non-Veg");
        assert_eq!(config.item_separator, ", ");
        assert_eq!(config.receipt_title, "THALI RECEIPT");
        assert_eq!(config.section_rule, "---");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = MenuConfig::from_toml_str("").unwrap();
        assert_eq!(config, MenuConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = MenuConfig::from_toml_str(
            r#"
            veg_label = "Shakahari"
            section_rule = "==="
            "#,
        )
        .unwrap();

        assert_eq!(config.veg_label, "Shakahari");
        assert_eq!(config.section_rule, "===");
        assert_eq!(config.non_veg_label, "Non-Veg");
    }

    #[test]
    fn test_rejects_bad_labels() {
        let err = MenuConfig::from_toml_str(r#"receipt_title = """#).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));

        let long = format!("currency_prefix = \"{}\"", "R".repeat(40));
        let err = MenuConfig::from_toml_str(&long).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TooLong { max: 32, .. })
        ));
    }

    #[test]
    fn test_empty_separator_allowed() {
        let config = MenuConfig::from_toml_str(r#"item_separator = """#).unwrap();
        assert_eq!(config.item_separator, "");
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = MenuConfig::from_toml_str("currency_prefix = ").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));

        let err = MenuConfig::from_toml_str("veg_label = 5").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }
}
