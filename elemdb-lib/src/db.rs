use std::collections::HashMap;
use std::sync::OnceLock;

use elemdb_data::{ELEMENTS, ElementRecord};

use crate::error::{ElemDbError, Result};

struct ElementIndex {
    symbol_to_z: HashMap<&'static str, u8>,
    name_to_z: HashMap<String, u8>,
}

static INDEX: OnceLock<ElementIndex> = OnceLock::new();

fn index() -> &'static ElementIndex {
    INDEX.get_or_init(|| {
        let mut symbol_to_z = HashMap::with_capacity(ELEMENTS.len());
        let mut name_to_z = HashMap::with_capacity(ELEMENTS.len());
        for elem in &ELEMENTS {
            symbol_to_z.insert(elem.symbol, elem.atomic_number);
            name_to_z.insert(elem.name.to_lowercase(), elem.atomic_number);
        }
        log::debug!("indexed {} element records", ELEMENTS.len());

        ElementIndex {
            symbol_to_z,
            name_to_z,
        }
    })
}

/// Handle to the static element tables.
///
/// Cheap to create: the symbol and name indices are built once, on first use,
/// and shared by every handle.
#[derive(Clone, Copy)]
pub struct ElementDb {
    index: &'static ElementIndex,
}

impl ElementDb {
    pub fn new() -> Self {
        ElementDb { index: index() }
    }

    /// Access the raw table, ordered by atomic number.
    pub fn raw(&self) -> &'static [ElementRecord] {
        &ELEMENTS
    }

    /// Returns the record for atomic number `z`.
    pub fn record(&self, z: u32) -> Result<&'static ElementRecord> {
        usize::try_from(z)
            .ok()
            .and_then(|z| z.checked_sub(1))
            .and_then(|i| ELEMENTS.get(i))
            .ok_or_else(|| {
                log::trace!("no element record for Z={z}");
                ElemDbError::UnknownAtomicNumber(i64::from(z))
            })
    }

    /// Resolve an exact, case-sensitive element symbol to Z.
    pub fn z_from_symbol(&self, symbol: &str) -> Result<u8> {
        self.index
            .symbol_to_z
            .get(symbol)
            .copied()
            .ok_or_else(|| {
                log::trace!("no element with symbol {symbol:?}");
                ElemDbError::UnknownElement(symbol.to_string())
            })
    }

    /// Resolve an element name (case-insensitive) to Z.
    pub fn z_from_name(&self, name: &str) -> Result<u8> {
        self.index
            .name_to_z
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| {
                log::trace!("no element named {name:?}");
                ElemDbError::UnknownElement(name.to_string())
            })
    }

    /// Resolve an element identifier (atomic number, symbol, or name) to Z.
    pub fn resolve_element(&self, element: &str) -> Result<u8> {
        // Try as atomic number first
        if let Ok(z) = element.parse::<u32>() {
            if let Ok(record) = self.record(z) {
                return Ok(record.atomic_number);
            }
        }
        if let Some(&z) = self.index.symbol_to_z.get(element) {
            return Ok(z);
        }
        if let Some(&z) = self.index.name_to_z.get(&element.to_lowercase()) {
            return Ok(z);
        }
        Err(ElemDbError::UnknownElement(element.to_string()))
    }

    fn element_record(&self, element: &str) -> Result<&'static ElementRecord> {
        let z = self.resolve_element(element)?;
        self.record(u32::from(z))
    }

    pub fn atomic_number(&self, element: &str) -> Result<u8> {
        self.resolve_element(element)
    }

    pub fn symbol(&self, element: &str) -> Result<&'static str> {
        Ok(self.element_record(element)?.symbol)
    }

    pub fn atomic_name(&self, element: &str) -> Result<&'static str> {
        Ok(self.element_record(element)?.name)
    }

    /// Standard relative atomic mass in u, as a plain number.
    ///
    /// Use [`crate::Element::atomic_mass`] for a dimensioned [`crate::units::Mass`].
    pub fn atomic_mass(&self, element: &str) -> Result<f64> {
        Ok(self.element_record(element)?.atomic_mass)
    }
}

impl Default for ElementDb {
    fn default() -> Self {
        Self::new()
    }
}
