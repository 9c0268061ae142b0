use serde::{Deserialize, Serialize};

/// Metal / non-metal tag of a bonding atom. Not used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AtomKind {
    Metal,
    NonMetal,
}

/// An atom that can be dropped into the bond workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondAtom {
    pub symbol: String,
    pub name: String,
    /// Typical ionic charge, display only (e.g. `"+1"`, `"-2"`).
    pub charge: String,
    /// Pauling electronegativity.
    pub electronegativity: f64,
    #[serde(rename = "type")]
    pub kind: AtomKind,
}

impl BondAtom {
    pub fn new(symbol: &str, name: &str, charge: &str, electronegativity: f64, kind: AtomKind) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            charge: charge.to_string(),
            electronegativity,
            kind,
        }
    }
}

/// Atoms offered in the bonding palette.
#[derive(Debug, Clone, PartialEq)]
pub struct BondCatalog {
    atoms: Vec<BondAtom>,
}

impl BondCatalog {
    /// The built-in palette: two metals and three non-metals.
    pub fn default_atoms() -> Self {
        Self {
            atoms: vec![
                BondAtom::new("Na", "Sodium", "+1", 0.9, AtomKind::Metal),
                BondAtom::new("Mg", "Magnesium", "+2", 1.2, AtomKind::Metal),
                BondAtom::new("Cl", "Chlorine", "-1", 3.0, AtomKind::NonMetal),
                BondAtom::new("O", "Oxygen", "-2", 3.5, AtomKind::NonMetal),
                BondAtom::new("F", "Fluorine", "-1", 4.0, AtomKind::NonMetal),
            ],
        }
    }

    /// Wrap a custom palette. Entries are checked by `Lab::new`.
    pub fn from_atoms(atoms: Vec<BondAtom>) -> Self {
        Self { atoms }
    }

    /// Look up an atom by its symbol (case-sensitive).
    pub fn get(&self, symbol: &str) -> Option<&BondAtom> {
        self.atoms.iter().find(|a| a.symbol == symbol)
    }

    pub fn atoms(&self) -> &[BondAtom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl Default for BondCatalog {
    fn default() -> Self {
        Self::default_atoms()
    }
}
