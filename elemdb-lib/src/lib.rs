//! Atomic data and electron-shell occupancy for hydrogen through krypton.
//!
//! ```
//! use elemdb::{Element, Orbital};
//!
//! let fe = Element::from_symbol("Fe").unwrap();
//! assert_eq!(fe.z(), 26);
//! assert_eq!(fe.electron_distribution()[Orbital::D3], 8);
//! ```

pub mod constants;
pub mod db;
pub mod distribution;
pub mod element;
pub mod error;
pub mod orbital;
pub mod units;

pub use db::ElementDb;
pub use distribution::{ElectronDistribution, electron_distribution};
pub use element::{Element, ElementId, IntoElementId};
pub use error::{ElemDbError, Result};
pub use orbital::{Orbital, orbital_index};
pub use units::{ATOMIC_MASS_UNIT, Mass};
pub use elemdb_data;
