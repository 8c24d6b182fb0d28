use std::fmt;
use std::str::FromStr;

use crate::error::ElemDbError;

/// Number of orbitals in the fixed layout (1s through 4f).
pub const ORBITAL_COUNT: usize = 10;

/// Total electron capacity of shells n = 1..4 (2 + 8 + 18 + 32).
pub const SHELL_CAPACITY: u32 = 60;

/// An electron subshell, identified by its quantum numbers (n, l).
///
/// Variants are declared in the nested enumeration order used by the
/// filling engine: for n = 1..4, for l = 0..n-1. This is not the Madelung
/// order; 3d comes before 4s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orbital {
    S1,
    S2,
    P2,
    S3,
    P3,
    D3,
    S4,
    P4,
    D4,
    F4,
}

impl Orbital {
    pub const ALL: [Orbital; ORBITAL_COUNT] = [
        Orbital::S1,
        Orbital::S2,
        Orbital::P2,
        Orbital::S3,
        Orbital::P3,
        Orbital::D3,
        Orbital::S4,
        Orbital::P4,
        Orbital::D4,
        Orbital::F4,
    ];

    /// Principal quantum number.
    pub const fn n(self) -> u32 {
        match self {
            Orbital::S1 => 1,
            Orbital::S2 | Orbital::P2 => 2,
            Orbital::S3 | Orbital::P3 | Orbital::D3 => 3,
            Orbital::S4 | Orbital::P4 | Orbital::D4 | Orbital::F4 => 4,
        }
    }

    /// Azimuthal quantum number.
    pub const fn l(self) -> u32 {
        match self {
            Orbital::S1 | Orbital::S2 | Orbital::S3 | Orbital::S4 => 0,
            Orbital::P2 | Orbital::P3 | Orbital::P4 => 1,
            Orbital::D3 | Orbital::D4 => 2,
            Orbital::F4 => 3,
        }
    }

    /// Maximum number of electrons, 2(2l + 1).
    pub const fn capacity(self) -> u32 {
        2 * (2 * self.l() + 1)
    }

    /// Position of this orbital in the fixed-layout array.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Orbital::S1 => "1s",
            Orbital::S2 => "2s",
            Orbital::P2 => "2p",
            Orbital::S3 => "3s",
            Orbital::P3 => "3p",
            Orbital::D3 => "3d",
            Orbital::S4 => "4s",
            Orbital::P4 => "4p",
            Orbital::D4 => "4d",
            Orbital::F4 => "4f",
        }
    }

    pub fn from_quantum_numbers(n: u32, l: u32) -> Option<Orbital> {
        Orbital::ALL
            .into_iter()
            .find(|orb| orb.n() == n && orb.l() == l)
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Orbital {
    type Err = ElemDbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Orbital::ALL
            .into_iter()
            .find(|orb| orb.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| ElemDbError::UnknownOrbital(s.to_string()))
    }
}

/// Maps an orbital label such as `"2p"` to its index in the fixed layout.
///
/// ```
/// assert_eq!(elemdb::orbital::orbital_index("1s"), Some(0));
/// assert_eq!(elemdb::orbital::orbital_index("3d"), Some(5));
/// assert_eq!(elemdb::orbital::orbital_index("5s"), None);
/// ```
pub fn orbital_index(label: &str) -> Option<usize> {
    label.parse::<Orbital>().ok().map(Orbital::index)
}
