//! # thali-core: Pure Menu Logic for the Thali Counter
//!
//! Formats, aggregates, searches, and renders receipts for an in-memory
//! menu of combo platters ("thalis"). Every function is pure: no I/O, no
//! shared state, same input = same output.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        thali-core (THIS CRATE)                          │
//! │                                                                         │
//! │   untyped JSON ──► validation ──► Thali ──┬──► describe      → String   │
//! │   (serde_json)     type guards    records ├──► stats         → Stats    │
//! │                                           ├──► search        → [Thali]  │
//! │                                           └──► build_receipt → String   │
//! │                                                                         │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Three Ways to Call Each Operation
//!
//! | Level    | Input                 | Failure shows up as              |
//! |----------|-----------------------|----------------------------------|
//! | typed    | `&Thali`, `&[Thali]`  | `Option` (empty menu only)       |
//! | `try_*`  | `&serde_json::Value`  | `Err(ValidationError)`           |
//! | `*_value`| `&serde_json::Value`  | `""`, `None`, or `vec![]`        |
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Thali, ThaliStats)
//! - [`price`] - Price type with two-decimal and natural formatting
//! - [`validation`] - Runtime type guards for untyped input
//! - [`config`] - Display labels (MenuConfig)
//! - [`describe`], [`stats`], [`search`], [`receipt`] - The four operations
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use thali_core::{build_receipt_value, describe_value};
//!
//! let thali = json!({
//!     "name": "Rajasthani Thali",
//!     "items": ["dal", "churma"],
//!     "price": 250,
//!     "isVeg": true
//! });
//! assert_eq!(
//!     describe_value(&thali),
//!     "RAJASTHANI THALI (Veg) - Items: dal, churma - Rs.250.00"
//! );
//!
//! let receipt = build_receipt_value(&json!("Asha"), &json!([thali]));
//! assert!(receipt.starts_with("THALI RECEIPT\n---\nCustomer: ASHA\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod describe;
pub mod error;
pub mod price;
pub mod receipt;
pub mod search;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::MenuConfig;
pub use describe::{
    describe, describe_value, describe_value_with, describe_with, try_describe, try_describe_with,
};
pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use price::Price;
pub use receipt::{
    build_receipt, build_receipt_value, build_receipt_value_with, build_receipt_with,
    try_build_receipt, try_build_receipt_with,
};
pub use search::{search, search_value, try_search};
pub use stats::{stats, stats_value, try_stats};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency prefix printed before every price.
pub const DEFAULT_CURRENCY_PREFIX: &str = "Rs.";

/// Maximum length (in characters) of a configurable display label.
pub const MAX_LABEL_LEN: usize = 32;
