use serde::{Deserialize, Serialize};

use crate::assets::category::Category;

/// A periodic-table entry as stored in the embedded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Atomic number, unique key (1..=118).
    pub number: u32,
    pub symbol: String,
    pub name: String,
    pub category: Category,
    /// Standard atomic mass in u.
    pub mass: f64,
    /// Electron configuration, display only (e.g. `"[Ne] 3s¹"`).
    #[serde(rename = "electronConfig")]
    pub electron_config: String,
    /// Density in g/cm³.
    pub density: f64,
    pub desc: String,
}

/// Root structure of the dataset JSON.
#[derive(Debug, Deserialize)]
pub struct ElementTable {
    pub elements: Vec<Element>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_entry() {
        let json = r#"{
            "number": 11, "symbol": "Na", "name": "Sodium", "category": "alkali",
            "mass": 22.99, "electronConfig": "[Ne] 3s¹", "density": 0.968,
            "desc": "Reactive metal found in table salt."
        }"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.number, 11);
        assert_eq!(el.category, Category::Alkali);
        assert_eq!(el.electron_config, "[Ne] 3s¹");
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{ "number": 1, "symbol": "H", "name": "Hydrogen" }"#;
        assert!(serde_json::from_str::<Element>(json).is_err());
    }
}
