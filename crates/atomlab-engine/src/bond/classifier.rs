//! Pure bond-type prediction from an electronegativity difference.

use serde::Serialize;

/// At or above this difference the bond is ionic.
pub const IONIC_THRESHOLD: f64 = 1.7;

/// Strictly above this difference (and below ionic) the bond is polar.
pub const POLAR_THRESHOLD: f64 = 0.4;

/// Predicted bond character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BondType {
    /// Difference <= 0.4
    #[serde(rename = "Non-polar Covalent")]
    NonPolarCovalent,
    /// Difference in (0.4, 1.7)
    #[serde(rename = "Polar Covalent")]
    PolarCovalent,
    /// Difference >= 1.7
    #[serde(rename = "Ionic")]
    Ionic,
}

impl BondType {
    pub fn classify(delta: f64) -> Self {
        if delta >= IONIC_THRESHOLD {
            Self::Ionic
        } else if delta > POLAR_THRESHOLD {
            Self::PolarCovalent
        } else {
            Self::NonPolarCovalent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NonPolarCovalent => "Non-polar Covalent",
            Self::PolarCovalent => "Polar Covalent",
            Self::Ionic => "Ionic",
        }
    }
}

/// Absolute electronegativity difference between two atoms.
pub fn electronegativity_gap(a: f64, b: f64) -> f64 {
    (a - b).abs()
}
