//! # Searcher
//!
//! Case-insensitive menu search over names and dish names.
//!
//! A thali matches when the lowercased query is a substring of its
//! lowercased name, or of any one of its lowercased items. Results keep
//! menu order. The empty query matches everything.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::ValidationResult;
use crate::types::Thali;
use crate::validation::{expect_array, expect_text, RequiredFields};

/// Returns the thalis matching `query`, in menu order.
///
/// ## Example
/// ```rust
/// use thali_core::{search, Thali};
///
/// let menu = [
///     Thali::new("Rajasthani Thali", ["dal baati", "churma"], 250.0, true),
///     Thali::new("Goan Thali", ["fish curry"], 350.0, false),
/// ];
///
/// let hits = search(&menu, "DAL");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Rajasthani Thali");
/// ```
pub fn search<'a>(thalis: &'a [Thali], query: &str) -> Vec<&'a Thali> {
    let needle = query.to_lowercase();

    let hits: Vec<&Thali> = thalis
        .iter()
        .filter(|thali| thali.matches_lowercase(&needle))
        .collect();

    trace!(query, hits = hits.len(), "Searched thali menu");
    hits
}

/// Validates an untyped menu and query, then searches.
///
/// Every entry must carry `name` and `items`. Matching entries are returned
/// as clones of the caller's values, so fields this crate does not know
/// about are kept.
pub fn try_search(thalis: &Value, query: &Value) -> ValidationResult<Vec<Value>> {
    let entries = expect_array(thalis, "thalis")?;
    let query = expect_text(query, "query")?;
    let needle = query.to_lowercase();

    let mut hits = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let thali = Thali::from_value_with(entry, RequiredFields::SEARCH)
            .map_err(|err| err.at_index(index))?;

        if thali.matches_lowercase(&needle) {
            hits.push(entry.clone());
        }
    }

    Ok(hits)
}

/// Searches an untyped menu, or returns `[]` if the menu or query is
/// malformed.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use thali_core::search_value;
///
/// let menu = json!([{"name": "Dal Thali", "items": []}]);
/// assert!(search_value(&menu, &json!(5)).is_empty());
/// assert!(search_value(&json!([]), &json!("x")).is_empty());
/// assert_eq!(search_value(&menu, &json!("dal")).len(), 1);
/// ```
pub fn search_value(thalis: &Value, query: &Value) -> Vec<Value> {
    try_search(thalis, query).unwrap_or_else(|err| {
        debug!(operation = "search", error = %err, "Rejected thali search");
        Vec::new()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
