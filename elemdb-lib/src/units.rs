//! A small mass quantity type.
//!
//! [`Mass`] stores kilograms internally and converts on access, so masses
//! built from different units compare and add correctly.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{ATOMIC_MASS_CONSTANT_KG, AVOGADRO, ELECTRON_MASS_KG};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mass {
    kg: f64,
}

/// One atomic mass constant, m_u = 1 u = 1 Da.
pub const ATOMIC_MASS_UNIT: Mass = Mass::from_kilograms(ATOMIC_MASS_CONSTANT_KG);

/// Electron rest mass.
pub const ELECTRON_MASS: Mass = Mass::from_kilograms(ELECTRON_MASS_KG);

impl Mass {
    pub const fn from_kilograms(kg: f64) -> Self {
        Mass { kg }
    }

    pub fn from_grams(g: f64) -> Self {
        Mass { kg: g * 1e-3 }
    }

    pub fn from_daltons(da: f64) -> Self {
        da * ATOMIC_MASS_UNIT
    }

    pub fn kilograms(self) -> f64 {
        self.kg
    }

    pub fn grams(self) -> f64 {
        self.kg * 1e3
    }

    /// Mass in units of the atomic mass constant (u, Da).
    pub fn daltons(self) -> f64 {
        self.kg / ATOMIC_MASS_CONSTANT_KG
    }

    /// Mass of one mole of particles of this mass, in g/mol.
    pub fn molar_mass(self) -> f64 {
        self.grams() * AVOGADRO
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass { kg: self.kg * rhs }
    }
}

impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass { kg: self.kg / rhs }
    }
}

/// Ratio of two masses (dimensionless).
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.kg / rhs.kg
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass {
            kg: self.kg + rhs.kg,
        }
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass {
            kg: self.kg - rhs.kg,
        }
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} u", p, self.daltons()),
            None => write!(f, "{} u", self.daltons()),
        }
    }
}
