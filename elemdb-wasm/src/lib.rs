//! WASM bindings for elemdb.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p elemdb-wasm
//! ```

use wasm_bindgen::prelude::*;

use elemdb::{Element, ElementDb, Orbital};

fn db() -> ElementDb {
    ElementDb::new()
}

fn to_js(e: elemdb::ElemDbError) -> JsError {
    JsError::new(&e.to_string())
}

fn element(id: &str) -> Result<Element, JsError> {
    let z = db().resolve_element(id).map_err(to_js)?;
    Element::from_atomic_number(u32::from(z)).map_err(to_js)
}

// ── Element lookups ──

#[wasm_bindgen]
pub fn atomic_number(element: &str) -> Result<u8, JsError> {
    db().atomic_number(element).map_err(to_js)
}

#[wasm_bindgen]
pub fn symbol(element: &str) -> Result<String, JsError> {
    db().symbol(element).map(|s| s.to_string()).map_err(to_js)
}

#[wasm_bindgen]
pub fn atomic_name(element: &str) -> Result<String, JsError> {
    db().atomic_name(element).map(|s| s.to_string()).map_err(to_js)
}

/// Returns the standard atomic mass in u.
#[wasm_bindgen]
pub fn atomic_mass(element: &str) -> Result<f64, JsError> {
    db().atomic_mass(element).map_err(to_js)
}

/// Returns the standard atomic mass in kg.
#[wasm_bindgen]
pub fn atomic_mass_kg(id: &str) -> Result<f64, JsError> {
    element(id).map(|e| e.atomic_mass().kilograms())
}

// ── Electron shells ──

/// Returns electrons per orbital (1s, 2s, 2p, ...) up to the last occupied one.
#[wasm_bindgen]
pub fn electron_distribution(atomic_number: u32) -> Result<Vec<u32>, JsError> {
    elemdb::electron_distribution(atomic_number)
        .map(|d| d.as_slice().to_vec())
        .map_err(to_js)
}

/// Returns a configuration string such as "1s2 2s2 2p4".
#[wasm_bindgen]
pub fn electron_configuration(id: &str) -> Result<String, JsError> {
    element(id).map(|e| e.electron_distribution().to_string())
}

/// Returns the array index of an orbital label such as "2p".
#[wasm_bindgen]
pub fn orbital_index(label: &str) -> Result<usize, JsError> {
    label.parse::<Orbital>().map(Orbital::index).map_err(to_js)
}
