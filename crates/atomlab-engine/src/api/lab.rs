use std::collections::HashSet;

use serde::Deserialize;

use crate::api::error::{LabError, Result};
use crate::assets::category::NO_FILTER_LABEL;
use crate::assets::registry::ElementRegistry;
use crate::bond::atom::{BondAtom, BondCatalog};
use crate::bond::workspace::{Placement, Workspace};
use crate::bridge::snapshot::{ElementDetails, ElementRow, WorkspaceSummary};
use crate::input::queue::{LabEvent, LabEventQueue};
use crate::query::view::PeriodicTableView;

/// Session configuration, provided by the host page as JSON.
/// Every field is optional; `{}` yields the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Console log level for the web bridge (default: "info").
    pub log_level: String,
    /// Search term applied before the first event (default: empty).
    pub initial_search: String,
    /// Filter label applied before the first event (default: "All").
    pub initial_filter: String,
    /// Replaces the built-in bonding palette when present.
    pub bond_atoms: Option<Vec<BondAtom>>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            initial_search: String::new(),
            initial_filter: NO_FILTER_LABEL.to_string(),
            bond_atoms: None,
        }
    }
}

impl LabConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// What happened to an applied event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// State changed as requested.
    Applied,
    /// The request was valid but refused (e.g. the workspace is full).
    Rejected,
    /// The event referred to something that does not exist.
    Ignored,
}

/// One user session: the periodic-table view and the bonding workspace,
/// over an immutable registry and bond catalog.
pub struct Lab {
    registry: ElementRegistry,
    catalog: BondCatalog,
    view: PeriodicTableView,
    workspace: Workspace,
}

impl Lab {
    /// Load the embedded registry and build a session from `config`.
    pub fn new(config: &LabConfig) -> Result<Self> {
        let registry = ElementRegistry::load()?;
        Self::with_registry(registry, config)
    }

    /// Build a session over an already-loaded registry.
    pub fn with_registry(registry: ElementRegistry, config: &LabConfig) -> Result<Self> {
        let catalog = match &config.bond_atoms {
            Some(atoms) => {
                validate_bond_atoms(atoms)?;
                BondCatalog::from_atoms(atoms.clone())
            }
            None => BondCatalog::default_atoms(),
        };

        let mut view = PeriodicTableView::new();
        view.update_search(&config.initial_search);
        view.set_active_filter(&config.initial_filter);

        log::info!(
            "Lab session ready: {} elements, {} bonding atoms",
            registry.len(),
            catalog.len()
        );

        Ok(Self {
            registry,
            catalog,
            view,
            workspace: Workspace::new(),
        })
    }

    /// Apply a single UI event.
    pub fn apply(&mut self, event: &LabEvent) -> EventOutcome {
        match event {
            LabEvent::SearchChanged(term) => {
                self.view.update_search(term);
                EventOutcome::Applied
            }
            LabEvent::FilterSelected(label) => {
                self.view.set_active_filter(label);
                EventOutcome::Applied
            }
            LabEvent::SelectElement(number) => {
                if self.view.select_element(&self.registry, *number) {
                    EventOutcome::Applied
                } else {
                    log::warn!("No element with atomic number {}", number);
                    EventOutcome::Ignored
                }
            }
            LabEvent::CloseSelection => {
                self.view.close_selection();
                EventOutcome::Applied
            }
            LabEvent::AtomDropped(symbol) => {
                let Some(atom) = self.catalog.get(symbol) else {
                    log::warn!("Dropped unknown atom {:?}", symbol);
                    return EventOutcome::Ignored;
                };
                match self.workspace.add_occupant(atom.clone()) {
                    Placement::Placed => EventOutcome::Applied,
                    Placement::Rejected => EventOutcome::Rejected,
                }
            }
            LabEvent::ClearWorkspace => {
                self.workspace.clear();
                EventOutcome::Applied
            }
        }
    }

    /// Drain the queue and apply every event in arrival order.
    pub fn apply_all(&mut self, queue: &mut LabEventQueue) -> Vec<EventOutcome> {
        queue.drain().iter().map(|event| self.apply(event)).collect()
    }

    // ---- Read side ----

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &BondCatalog {
        &self.catalog
    }

    pub fn view(&self) -> &PeriodicTableView {
        &self.view
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Current search results as display rows.
    pub fn results(&self) -> Vec<ElementRow> {
        self.view
            .filtered(&self.registry)
            .into_iter()
            .map(ElementRow::from_element)
            .collect()
    }

    pub fn selected_details(&self) -> Option<ElementDetails> {
        self.view.selected(&self.registry).map(ElementDetails::from_element)
    }

    pub fn workspace_summary(&self) -> WorkspaceSummary {
        WorkspaceSummary::from_workspace(&self.workspace)
    }
}

fn validate_bond_atoms(atoms: &[BondAtom]) -> Result<()> {
    let mut seen = HashSet::new();
    for atom in atoms {
        if atom.symbol.trim().is_empty() {
            return Err(LabError::InvalidBondAtom {
                symbol: atom.symbol.clone(),
                reason: "empty symbol",
            });
        }
        if !atom.electronegativity.is_finite() || atom.electronegativity < 0.0 {
            return Err(LabError::InvalidBondAtom {
                symbol: atom.symbol.clone(),
                reason: "electronegativity must be a non-negative number",
            });
        }
        if !seen.insert(atom.symbol.as_str()) {
            return Err(LabError::InvalidBondAtom {
                symbol: atom.symbol.clone(),
                reason: "duplicate symbol",
            });
        }
    }
    Ok(())
}
