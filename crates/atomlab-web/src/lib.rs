//! WASM bridge for AtomLab.
//!
//! The page calls `lab_init` once, then forwards UI events through the
//! `lab_*` functions and reads display data back through the `get_*`
//! accessors. Structured data crosses the boundary as JSON strings.

pub mod runner;

pub use runner::LabRunner;

use std::cell::RefCell;
use std::str::FromStr;

use atomlab_engine::{EventOutcome, LabConfig, LabEvent};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<LabRunner>> = RefCell::new(None);
}

/// Run `f` against the session, creating a default one if `lab_init` was
/// never called.
fn with_runner<R>(f: impl FnOnce(&mut LabRunner) -> R) -> Result<R, JsValue> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        if borrow.is_none() {
            log::warn!("atomlab: used before lab_init(); starting with defaults");
            let runner = LabRunner::new(LabConfig::default())
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            *borrow = Some(runner);
        }
        match borrow.as_mut() {
            Some(runner) => Ok(f(runner)),
            None => Err(JsValue::from_str("atomlab: session unavailable")),
        }
    })
}

#[wasm_bindgen]
pub fn lab_init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let runner = LabRunner::from_config_json(config_json)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let level = log::Level::from_str(&runner.config().log_level).unwrap_or(log::Level::Info);
    // A second init keeps the logger installed by the first.
    let _ = console_log::init_with_level(level);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("atomlab: initialized");
    Ok(())
}

// ---- UI events ----

#[wasm_bindgen]
pub fn lab_search(term: &str) -> Result<(), JsValue> {
    with_runner(|r| {
        r.dispatch(LabEvent::SearchChanged(term.to_string()));
    })
}

#[wasm_bindgen]
pub fn lab_filter(label: &str) -> Result<(), JsValue> {
    with_runner(|r| {
        r.dispatch(LabEvent::FilterSelected(label.to_string()));
    })
}

/// Returns true when the atom was placed, false when the workspace was full
/// or the symbol is not in the bonding palette.
#[wasm_bindgen]
pub fn lab_drop_atom(symbol: &str) -> Result<bool, JsValue> {
    with_runner(|r| r.dispatch(LabEvent::AtomDropped(symbol.to_string())) == EventOutcome::Applied)
}

#[wasm_bindgen]
pub fn lab_clear_workspace() -> Result<(), JsValue> {
    with_runner(|r| {
        r.dispatch(LabEvent::ClearWorkspace);
    })
}

#[wasm_bindgen]
pub fn lab_select_element(number: u32) -> Result<bool, JsValue> {
    with_runner(|r| r.dispatch(LabEvent::SelectElement(number)) == EventOutcome::Applied)
}

#[wasm_bindgen]
pub fn lab_close_selection() -> Result<(), JsValue> {
    with_runner(|r| {
        r.dispatch(LabEvent::CloseSelection);
    })
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_results_json() -> Result<String, JsValue> {
    with_runner(|r| r.results_json())
}

#[wasm_bindgen]
pub fn get_result_count() -> Result<u32, JsValue> {
    with_runner(|r| r.result_count())
}

#[wasm_bindgen]
pub fn get_workspace_json() -> Result<String, JsValue> {
    with_runner(|r| r.workspace_json())
}

#[wasm_bindgen]
pub fn get_selected_json() -> Result<String, JsValue> {
    with_runner(|r| r.selected_json())
}

#[wasm_bindgen]
pub fn get_bond_atoms_json() -> Result<String, JsValue> {
    with_runner(|r| r.bond_atoms_json())
}

/// Filter chip labels; these never depend on session state.
#[wasm_bindgen]
pub fn get_filter_options() -> js_sys::Array {
    atomlab_engine::filter_options()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

#[wasm_bindgen]
pub fn get_delta_e() -> Result<f64, JsValue> {
    with_runner(|r| r.delta_e())
}

#[wasm_bindgen]
pub fn get_bond_type() -> Result<String, JsValue> {
    with_runner(|r| r.bond_type().to_string())
}
