use atomlab_engine::{EventOutcome, Lab, LabConfig, LabEvent, LabEventQueue, Result};

/// Owns one lab session on behalf of the browser.
///
/// wasm-bindgen cannot export a struct with borrowed views, so the crate
/// root keeps a `thread_local!` LabRunner and exposes free functions.
/// Results are serialized to JSON strings for the page to parse.
pub struct LabRunner {
    lab: Lab,
    input: LabEventQueue,
    config: LabConfig,
}

impl LabRunner {
    pub fn new(config: LabConfig) -> Result<Self> {
        let lab = Lab::new(&config)?;
        Ok(Self {
            lab,
            input: LabEventQueue::new(),
            config,
        })
    }

    /// Parse a JSON config and build the session.
    pub fn from_config_json(json: &str) -> Result<Self> {
        let config = if json.trim().is_empty() {
            LabConfig::default()
        } else {
            LabConfig::from_json(json)?
        };
        Self::new(config)
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn lab(&self) -> &Lab {
        &self.lab
    }

    /// Queue an event and apply everything pending. Derived display values
    /// are recomputed on the next read, so every mutation is visible at once.
    pub fn dispatch(&mut self, event: LabEvent) -> EventOutcome {
        self.input.push(event);
        self.lab
            .apply_all(&mut self.input)
            .pop()
            .unwrap_or(EventOutcome::Ignored)
    }

    // ---- JSON accessors for the page ----

    pub fn results_json(&self) -> String {
        to_json(&self.lab.results())
    }

    pub fn result_count(&self) -> u32 {
        self.lab.view().filtered(self.lab.registry()).len() as u32
    }

    pub fn workspace_json(&self) -> String {
        to_json(&self.lab.workspace_summary())
    }

    /// `null` when nothing is selected.
    pub fn selected_json(&self) -> String {
        to_json(&self.lab.selected_details())
    }

    pub fn bond_atoms_json(&self) -> String {
        to_json(self.lab.catalog().atoms())
    }

    pub fn delta_e(&self) -> f64 {
        self.lab.workspace().delta_e()
    }

    pub fn bond_type(&self) -> &'static str {
        self.lab.workspace().bond_type().label()
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("Failed to serialize snapshot: {}", err);
        "null".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let runner = LabRunner::from_config_json("").unwrap();
        assert_eq!(runner.config(), &LabConfig::default());
        assert_eq!(runner.result_count(), 118);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(LabRunner::from_config_json("{ nope").is_err());
    }

    #[test]
    fn dispatch_reports_outcome() {
        let mut runner = LabRunner::new(LabConfig::default()).unwrap();
        assert_eq!(runner.dispatch(LabEvent::AtomDropped("Na".into())), EventOutcome::Applied);
        assert_eq!(runner.dispatch(LabEvent::AtomDropped("Cl".into())), EventOutcome::Applied);
        assert_eq!(runner.dispatch(LabEvent::AtomDropped("O".into())), EventOutcome::Rejected);
        assert_eq!(runner.bond_type(), "Ionic");
        assert!((runner.delta_e() - 2.1).abs() < 1e-9);

        runner.dispatch(LabEvent::ClearWorkspace);
        assert_eq!(runner.delta_e(), 0.0);
        assert_eq!(runner.bond_type(), "Non-polar Covalent");
    }

    #[test]
    fn json_accessors() {
        let mut runner = LabRunner::new(LabConfig::default()).unwrap();
        runner.dispatch(LabEvent::SearchChanged("fe".into()));
        let rows: serde_json::Value = serde_json::from_str(&runner.results_json()).unwrap();
        assert!(rows.as_array().unwrap().iter().any(|r| r["symbol"] == "Fe"));

        assert_eq!(runner.selected_json(), "null");
        runner.dispatch(LabEvent::SelectElement(26));
        let selected: serde_json::Value = serde_json::from_str(&runner.selected_json()).unwrap();
        assert_eq!(selected["name"], "Iron");

        let atoms: serde_json::Value = serde_json::from_str(&runner.bond_atoms_json()).unwrap();
        assert_eq!(atoms.as_array().unwrap().len(), 5);

        let ws: serde_json::Value = serde_json::from_str(&runner.workspace_json()).unwrap();
        assert_eq!(ws["state"], "empty");
    }
}
