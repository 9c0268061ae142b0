use serde::Serialize;

use crate::bond::atom::BondAtom;
use crate::bond::classifier::{electronegativity_gap, BondType};

/// Maximum number of atoms the workspace holds.
pub const WORKSPACE_CAPACITY: usize = 2;

/// Occupancy state of the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceState {
    Empty,
    Single,
    Full,
}

/// Result of dropping an atom into the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed,
    /// The workspace was already full; nothing changed.
    Rejected,
}

/// Two-atom bonding sandbox.
///
/// Atoms are only ever appended or cleared all at once; there is no way to
/// remove a single occupant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    occupants: Vec<BondAtom>,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            occupants: Vec::with_capacity(WORKSPACE_CAPACITY),
        }
    }

    /// Append an atom. A full workspace is left untouched.
    pub fn add_occupant(&mut self, atom: BondAtom) -> Placement {
        if self.is_full() {
            log::warn!("Workspace full; dropping {}", atom.symbol);
            return Placement::Rejected;
        }
        log::debug!("Workspace: placed {}", atom.symbol);
        self.occupants.push(atom);
        Placement::Placed
    }

    pub fn clear(&mut self) {
        self.occupants.clear();
    }

    pub fn occupants(&self) -> &[BondAtom] {
        &self.occupants
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.occupants.len() >= WORKSPACE_CAPACITY
    }

    pub fn state(&self) -> WorkspaceState {
        match self.occupants.len() {
            0 => WorkspaceState::Empty,
            1 => WorkspaceState::Single,
            _ => WorkspaceState::Full,
        }
    }

    /// Electronegativity difference of the pair; 0 until both slots are filled.
    pub fn delta_e(&self) -> f64 {
        match self.occupants.as_slice() {
            [a, b] => electronegativity_gap(a.electronegativity, b.electronegativity),
            _ => 0.0,
        }
    }

    pub fn bond_type(&self) -> BondType {
        BondType::classify(self.delta_e())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::atom::{AtomKind, BondCatalog};
    use proptest::prelude::*;

    fn atom(symbol: &str) -> BondAtom {
        BondCatalog::default_atoms().get(symbol).cloned().unwrap()
    }

    #[test]
    fn starts_empty() {
        let ws = Workspace::new();
        assert_eq!(ws.state(), WorkspaceState::Empty);
        assert_eq!(ws.delta_e(), 0.0);
        assert_eq!(ws.bond_type(), BondType::NonPolarCovalent);
    }

    #[test]
    fn single_occupant_is_non_polar() {
        let mut ws = Workspace::new();
        assert_eq!(ws.add_occupant(atom("F")), Placement::Placed);
        assert_eq!(ws.state(), WorkspaceState::Single);
        assert_eq!(ws.delta_e(), 0.0);
        assert_eq!(ws.bond_type(), BondType::NonPolarCovalent);
    }

    #[test]
    fn sodium_chloride_is_ionic() {
        let mut ws = Workspace::new();
        ws.add_occupant(atom("Na"));
        ws.add_occupant(atom("Cl"));
        assert_eq!(ws.state(), WorkspaceState::Full);
        assert!((ws.delta_e() - 2.1).abs() < 1e-9);
        assert_eq!(ws.bond_type(), BondType::Ionic);
    }

    #[test]
    fn chlorine_oxygen_is_polar() {
        let mut ws = Workspace::new();
        ws.add_occupant(atom("Cl"));
        ws.add_occupant(atom("O"));
        assert_eq!(ws.bond_type(), BondType::PolarCovalent);
    }

    #[test]
    fn same_atom_twice_is_non_polar() {
        let mut ws = Workspace::new();
        ws.add_occupant(atom("O"));
        ws.add_occupant(atom("O"));
        assert_eq!(ws.delta_e(), 0.0);
        assert_eq!(ws.bond_type(), BondType::NonPolarCovalent);
    }

    #[test]
    fn gap_of_exactly_point_four_is_non_polar() {
        let mut ws = Workspace::new();
        ws.add_occupant(BondAtom::new("A", "Alpha", "+1", 0.5, AtomKind::Metal));
        ws.add_occupant(BondAtom::new("B", "Beta", "-1", 0.9, AtomKind::NonMetal));
        assert_eq!(ws.delta_e(), 0.4);
        assert_eq!(ws.bond_type(), BondType::NonPolarCovalent);
    }

    #[test]
    fn third_atom_is_rejected() {
        let mut ws = Workspace::new();
        ws.add_occupant(atom("Na"));
        ws.add_occupant(atom("Cl"));
        let before = ws.clone();

        assert_eq!(ws.add_occupant(atom("F")), Placement::Rejected);
        assert_eq!(ws, before);
        assert_eq!(ws.len(), 2);
        assert_eq!(ws.occupants()[0].symbol, "Na");
        assert_eq!(ws.occupants()[1].symbol, "Cl");
    }

    #[test]
    fn clear_resets_any_state() {
        let mut ws = Workspace::new();
        ws.clear();
        assert!(ws.is_empty());

        ws.add_occupant(atom("Mg"));
        ws.clear();
        assert_eq!(ws.len(), 0);

        ws.add_occupant(atom("Mg"));
        ws.add_occupant(atom("O"));
        ws.clear();
        assert_eq!(ws.state(), WorkspaceState::Empty);
        assert_eq!(ws.add_occupant(atom("F")), Placement::Placed);
    }

    proptest! {
        #[test]
        fn delta_is_order_independent(a in 0.5f64..4.5, b in 0.5f64..4.5) {
            let mut ab = Workspace::new();
            ab.add_occupant(BondAtom::new("A", "A", "0", a, AtomKind::Metal));
            ab.add_occupant(BondAtom::new("B", "B", "0", b, AtomKind::NonMetal));

            let mut ba = Workspace::new();
            ba.add_occupant(BondAtom::new("B", "B", "0", b, AtomKind::NonMetal));
            ba.add_occupant(BondAtom::new("A", "A", "0", a, AtomKind::Metal));

            prop_assert_eq!(ab.delta_e(), ba.delta_e());
            prop_assert_eq!(ab.bond_type(), ba.bond_type());
            prop_assert!(ab.delta_e() >= 0.0);
        }
    }
}
