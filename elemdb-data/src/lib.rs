#![no_std]

use serde::Serialize;

/// Highest atomic number covered by [`ELEMENTS`].
pub const MAX_ATOMIC_NUMBER: u8 = 36;

/// One row of the static element table.
///
/// Symbol, name and mass live in the same record, so every atomic number
/// that has a symbol also has a name and a mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementRecord {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Standard relative atomic mass (dimensionless, in units of u).
    pub atomic_mass: f64,
}

const fn rec(
    atomic_number: u8,
    symbol: &'static str,
    name: &'static str,
    atomic_mass: f64,
) -> ElementRecord {
    ElementRecord {
        atomic_number,
        symbol,
        name,
        atomic_mass,
    }
}

/// Elements 1-36 (H through Kr), ordered by atomic number.
pub static ELEMENTS: [ElementRecord; MAX_ATOMIC_NUMBER as usize] = [
    // Period 1
    rec(1, "H", "Hydrogen", 1.008),
    rec(2, "He", "Helium", 4.002602),
    // Period 2
    rec(3, "Li", "Lithium", 6.94),
    rec(4, "Be", "Beryllium", 9.0121831),
    rec(5, "B", "Boron", 10.81),
    rec(6, "C", "Carbon", 12.011),
    rec(7, "N", "Nitrogen", 14.007),
    rec(8, "O", "Oxygen", 15.999),
    rec(9, "F", "Fluorine", 18.998403163),
    rec(10, "Ne", "Neon", 20.1797),
    // Period 3
    rec(11, "Na", "Sodium", 22.98976928),
    rec(12, "Mg", "Magnesium", 24.305),
    rec(13, "Al", "Aluminum", 26.9815385),
    rec(14, "Si", "Silicon", 28.085),
    rec(15, "P", "Phosphorus", 30.973761998),
    rec(16, "S", "Sulfur", 32.06),
    rec(17, "Cl", "Chlorine", 35.45),
    rec(18, "Ar", "Argon", 39.948),
    // Period 4
    rec(19, "K", "Potassium", 39.0983),
    rec(20, "Ca", "Calcium", 40.078),
    rec(21, "Sc", "Scandium", 44.955908),
    rec(22, "Ti", "Titanium", 47.867),
    rec(23, "V", "Vanadium", 50.9415),
    rec(24, "Cr", "Chromium", 51.9961),
    rec(25, "Mn", "Manganese", 54.938044),
    rec(26, "Fe", "Iron", 55.845),
    rec(27, "Co", "Cobalt", 58.933194),
    rec(28, "Ni", "Nickel", 58.6934),
    rec(29, "Cu", "Copper", 63.546),
    rec(30, "Zn", "Zinc", 65.38),
    rec(31, "Ga", "Gallium", 69.723),
    rec(32, "Ge", "Germanium", 72.63),
    rec(33, "As", "Arsenic", 74.921595),
    rec(34, "Se", "Selenium", 78.971),
    rec(35, "Br", "Bromine", 79.904),
    rec(36, "Kr", "Krypton", 83.798),
];
