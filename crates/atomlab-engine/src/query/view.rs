use crate::assets::category::{Category, NO_FILTER_LABEL};
use crate::assets::element::Element;
use crate::assets::registry::ElementRegistry;
use crate::query::search::query;

/// Per-session state of the periodic-table page: the current search term,
/// the active category filter, and the element opened in the detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicTableView {
    search_term: String,
    active_filter: String,
    selected: Option<u32>,
}

impl PeriodicTableView {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            active_filter: NO_FILTER_LABEL.to_string(),
            selected: None,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn update_search(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Set the active filter. Labels that no category produces are kept
    /// (they simply match nothing) but logged.
    pub fn set_active_filter(&mut self, label: &str) {
        let known = label == NO_FILTER_LABEL || Category::ALL.iter().any(|c| c.label() == label);
        if !known {
            log::warn!("Unknown filter label {:?}; no element will match", label);
        }
        self.active_filter = label.to_string();
    }

    /// Open the detail panel for `number`. Returns false and leaves the
    /// selection unchanged when the registry has no such element.
    pub fn select_element(&mut self, registry: &ElementRegistry, number: u32) -> bool {
        if registry.get(number).is_none() {
            return false;
        }
        self.selected = Some(number);
        true
    }

    pub fn close_selection(&mut self) {
        self.selected = None;
    }

    /// The selected element, if any.
    pub fn selected<'a>(&self, registry: &'a ElementRegistry) -> Option<&'a Element> {
        self.selected.and_then(|n| registry.get(n))
    }

    /// Current search results, recomputed from scratch on every call.
    pub fn filtered<'a>(&self, registry: &'a ElementRegistry) -> Vec<&'a Element> {
        query(registry, &self.search_term, &self.active_filter)
    }
}

impl Default for PeriodicTableView {
    fn default() -> Self {
        Self::new()
    }
}
