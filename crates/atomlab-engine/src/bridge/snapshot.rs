//! Display DTOs handed to the UI.
//! Must stay in sync with the TypeScript `LabSnapshot` types.
//!
//! Every derived value (neutrons, shells, labels, style tokens) is computed
//! here so the UI never re-implements domain rules. Field names are
//! camelCase on the wire.

use serde::Serialize;

use crate::assets::element::Element;
use crate::bond::atom::BondAtom;
use crate::bond::classifier::BondType;
use crate::bond::workspace::{Workspace, WorkspaceState, WORKSPACE_CAPACITY};
use crate::query::derive::{electron_shell_distribution, neutron_count};

/// One tile in the periodic-table grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRow {
    pub number: u32,
    pub symbol: String,
    pub name: String,
    /// Dataset key, e.g. `"noble"`.
    pub category: &'static str,
    pub category_label: &'static str,
    pub color_token: &'static str,
    pub mass: f64,
    pub neutrons: u32,
}

impl ElementRow {
    pub fn from_element(el: &Element) -> Self {
        Self {
            number: el.number,
            symbol: el.symbol.clone(),
            name: el.name.clone(),
            category: el.category.key(),
            category_label: el.category.label(),
            color_token: el.category.color_token(),
            mass: el.mass,
            neutrons: neutron_count(el),
        }
    }
}

/// Everything the detail panel shows for the selected element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDetails {
    #[serde(flatten)]
    pub row: ElementRow,
    pub electron_config: String,
    pub density: f64,
    pub desc: String,
    /// Simplified capacity-filling shell counts.
    pub shells: Vec<u32>,
}

impl ElementDetails {
    pub fn from_element(el: &Element) -> Self {
        Self {
            row: ElementRow::from_element(el),
            electron_config: el.electron_config.clone(),
            density: el.density,
            desc: el.desc.clone(),
            shells: electron_shell_distribution(el.number),
        }
    }
}

/// The bonding workspace after the latest mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub occupants: Vec<BondAtom>,
    pub state: WorkspaceState,
    pub capacity: usize,
    pub delta_e: f64,
    pub bond_type: BondType,
}

impl WorkspaceSummary {
    pub fn from_workspace(ws: &Workspace) -> Self {
        Self {
            occupants: ws.occupants().to_vec(),
            state: ws.state(),
            capacity: WORKSPACE_CAPACITY,
            delta_e: ws.delta_e(),
            bond_type: ws.bond_type(),
        }
    }
}
