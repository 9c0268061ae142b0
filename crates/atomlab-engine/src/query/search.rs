//! Free-text search combined with a category filter.
//!
//! The result is always a subsequence of the registry in registry order.
//! With 118 rows a full scan per keystroke is cheap, so nothing is cached.

use crate::assets::category::NO_FILTER_LABEL;
use crate::assets::element::Element;
use crate::assets::registry::ElementRegistry;

/// Case-insensitive match on name, symbol, or the decimal atomic number.
/// `term_lower` must already be lowercased.
fn matches_search(el: &Element, term_lower: &str) -> bool {
    term_lower.is_empty()
        || el.name.to_lowercase().contains(term_lower)
        || el.symbol.to_lowercase().contains(term_lower)
        || el.number.to_string().contains(term_lower)
}

/// `filter_label` is either [`NO_FILTER_LABEL`] or a category label.
/// Labels that no category produces match nothing.
fn matches_filter(el: &Element, filter_label: &str) -> bool {
    filter_label == NO_FILTER_LABEL || el.category.label() == filter_label
}

/// Elements matching both the search term and the filter label.
pub fn query<'a>(registry: &'a ElementRegistry, term: &str, filter_label: &str) -> Vec<&'a Element> {
    let term_lower = term.to_lowercase();
    let results: Vec<&Element> = registry
        .iter()
        .filter(|el| matches_search(el, &term_lower) && matches_filter(el, filter_label))
        .collect();
    log::debug!(
        "query term={:?} filter={:?}: {} matches",
        term,
        filter_label,
        results.len()
    );
    results
}
