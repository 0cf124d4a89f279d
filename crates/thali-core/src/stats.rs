//! # Aggregator
//!
//! Summary statistics over a menu.
//!
//! ## Computation
//! ```text
//! thalis ──┬── len ─────────────────────────► totalThalis
//!          ├── partition by is_veg ─────────► vegCount / nonVegCount
//!          ├── prices ──┬── sum / len ──────► avgPrice  ("216.67")
//!          │            ├── min ────────────► cheapest  (raw number)
//!          │            └── max ────────────► costliest (raw number)
//!          └── names ───────────────────────► names     (menu order)
//! ```
//!
//! An empty menu has no statistics: the result is `None`, never a
//! zero-filled struct.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{ValidationError, ValidationResult};
use crate::price::Price;
use crate::types::{Thali, ThaliStats};
use crate::validation::{expect_non_empty_array, RequiredFields};

/// Computes statistics for a non-empty menu.
///
/// ## Example
/// ```rust
/// use thali_core::{stats, Thali};
///
/// let menu = [
///     Thali::new("Rajasthani Thali", ["dal baati"], 250.0, true),
///     Thali::new("Goan Thali", ["fish curry"], 350.0, false),
/// ];
///
/// let summary = stats(&menu).unwrap();
/// assert_eq!(summary.total_thalis, 2);
/// assert_eq!(summary.avg_price, "300.00");
/// assert_eq!(summary.cheapest, 250.0);
///
/// assert!(stats(&[]).is_none());
/// ```
pub fn stats(thalis: &[Thali]) -> Option<ThaliStats> {
    if thalis.is_empty() {
        return None;
    }

    let total_thalis = thalis.len();
    let veg_count = thalis.iter().filter(|thali| thali.is_veg).count();

    let total: Price = thalis.iter().map(|thali| thali.price).sum();
    let avg_price = Price::new(total.value() / total_thalis as f64).to_fixed_2();

    let prices = thalis.iter().map(|thali| thali.price.value());
    let cheapest = prices.clone().fold(f64::INFINITY, nan_aware_min);
    let costliest = prices.fold(f64::NEG_INFINITY, nan_aware_max);

    trace!(total_thalis, veg_count, "Computed menu stats");

    Some(ThaliStats {
        total_thalis,
        veg_count,
        non_veg_count: total_thalis - veg_count,
        avg_price,
        cheapest,
        costliest,
        names: thalis.iter().map(|thali| thali.name.clone()).collect(),
    })
}

/// Validates an untyped menu, then computes its statistics.
///
/// Every entry must carry `name`, `price`, and `isVeg`; one malformed
/// entry rejects the whole menu.
pub fn try_stats(value: &Value) -> ValidationResult<ThaliStats> {
    let thalis = parse_menu(value)?;

    stats(&thalis).ok_or_else(|| ValidationError::EmptyCollection {
        field: "thalis".to_string(),
    })
}

/// Computes statistics for an untyped menu, or `None` if it is empty or
/// malformed.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use thali_core::stats_value;
///
/// assert!(stats_value(&json!([])).is_none());
/// assert!(stats_value(&json!("not an array")).is_none());
/// ```
pub fn stats_value(value: &Value) -> Option<ThaliStats> {
    match try_stats(value) {
        Ok(summary) => Some(summary),
        Err(err) => {
            debug!(operation = "stats", error = %err, "Rejected thali menu");
            None
        }
    }
}

fn parse_menu(value: &Value) -> ValidationResult<Vec<Thali>> {
    expect_non_empty_array(value, "thalis")?
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Thali::from_value_with(entry, RequiredFields::STATS)
                .map_err(|err| err.at_index(index))
        })
        .collect()
}

/// `Math.min` semantics: a NaN anywhere makes the result NaN.
fn nan_aware_min(acc: f64, price: f64) -> f64 {
    if acc.is_nan() || price.is_nan() {
        f64::NAN
    } else if price < acc {
        price
    } else {
        acc
    }
}

fn nan_aware_max(acc: f64, price: f64) -> f64 {
    if acc.is_nan() || price.is_nan() {
        f64::NAN
    } else if price > acc {
        price
    } else {
        acc
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
