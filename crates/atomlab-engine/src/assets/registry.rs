use std::collections::HashMap;

use crate::assets::element::{Element, ElementTable};

/// Embed the element dataset at compile time.
const ELEMENTS_JSON: &str = include_str!("../../data/elements.json");

/// Number of elements the registry must hold (H through Og).
pub const ELEMENT_COUNT: usize = 118;

/// Dataset problems detected while building the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Malformed element dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Expected {expected} elements, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("Element at position {position} has atomic number {found}, expected {expected}")]
    OutOfOrder { position: usize, expected: u32, found: u32 },

    #[error("Element {number} has an empty {field}")]
    EmptyField { number: u32, field: &'static str },

    #[error("Element {number} has invalid mass {mass}")]
    InvalidMass { number: u32, mass: f64 },

    #[error("Element {number} has mass {mass} below its atomic number")]
    MassBelowNumber { number: u32, mass: f64 },

    #[error("Element {number} has invalid density {density}")]
    InvalidDensity { number: u32, density: f64 },

    #[error("Symbol {symbol} is used by more than one element")]
    DuplicateSymbol { symbol: String },
}

/// Immutable catalog of all elements, ordered by atomic number.
///
/// Built once per session; every invariant the query and derivation code
/// relies on is checked here so bad rows never reach the UI.
#[derive(Debug, Clone)]
pub struct ElementRegistry {
    elements: Vec<Element>,
    by_symbol: HashMap<String, usize>,
}

impl ElementRegistry {
    /// Load the registry from the embedded dataset.
    pub fn load() -> Result<Self, RegistryError> {
        Self::from_json(ELEMENTS_JSON)
    }

    /// Parse and validate a registry from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let table: ElementTable = serde_json::from_str(json)?;
        Self::from_elements(table.elements)
    }

    /// Validate an already-parsed element list.
    pub fn from_elements(elements: Vec<Element>) -> Result<Self, RegistryError> {
        if elements.len() != ELEMENT_COUNT {
            return Err(RegistryError::WrongCount {
                expected: ELEMENT_COUNT,
                found: elements.len(),
            });
        }

        let mut by_symbol = HashMap::with_capacity(elements.len());
        for (position, el) in elements.iter().enumerate() {
            validate_element(position, el)?;
            if by_symbol.insert(el.symbol.clone(), position).is_some() {
                return Err(RegistryError::DuplicateSymbol {
                    symbol: el.symbol.clone(),
                });
            }
        }

        log::info!("Element registry loaded: {} elements", elements.len());
        Ok(Self { elements, by_symbol })
    }

    /// All elements in ascending atomic-number order.
    pub fn all(&self) -> &[Element] {
        &self.elements
    }

    /// Get element by atomic number.
    pub fn get(&self, number: u32) -> Option<&Element> {
        // Numbers are validated to be contiguous from 1.
        let index = (number as usize).checked_sub(1)?;
        self.elements.get(index)
    }

    /// Get element by symbol (case-sensitive, e.g. `"Fe"`).
    pub fn get_by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.by_symbol.get(symbol).map(|&i| &self.elements[i])
    }

    /// Iterate over all elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn validate_element(position: usize, el: &Element) -> Result<(), RegistryError> {
    let expected = position as u32 + 1;
    if el.number != expected {
        return Err(RegistryError::OutOfOrder {
            position,
            expected,
            found: el.number,
        });
    }
    if el.symbol.trim().is_empty() {
        return Err(RegistryError::EmptyField { number: el.number, field: "symbol" });
    }
    if el.name.trim().is_empty() {
        return Err(RegistryError::EmptyField { number: el.number, field: "name" });
    }
    if !el.mass.is_finite() || el.mass <= 0.0 {
        return Err(RegistryError::InvalidMass { number: el.number, mass: el.mass });
    }
    // A lighter-than-Z mass would produce a negative neutron count.
    if el.mass < f64::from(el.number) {
        return Err(RegistryError::MassBelowNumber { number: el.number, mass: el.mass });
    }
    if !el.density.is_finite() || el.density < 0.0 {
        return Err(RegistryError::InvalidDensity {
            number: el.number,
            density: el.density,
        });
    }
    Ok(())
}
