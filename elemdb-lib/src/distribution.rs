use std::fmt;
use std::ops::Index;

use crate::error::{ElemDbError, Result};
use crate::orbital::{ORBITAL_COUNT, Orbital, SHELL_CAPACITY};

/// Electron occupancy per orbital for a neutral atom.
///
/// Backed by the fixed 1s..4f layout. Only the leading orbitals up to the
/// last one that received electrons are considered occupied; the rest of the
/// array is zero.
///
/// Serializes as the occupancy sequence; deserialization goes through
/// `TryFrom<Vec<u32>>` and only accepts sequences that
/// [`electron_distribution`] could have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
pub struct ElectronDistribution {
    counts: [u32; ORBITAL_COUNT],
    len: usize,
}

impl ElectronDistribution {
    /// Occupancy of each visited orbital, in enumeration order.
    pub fn as_slice(&self) -> &[u32] {
        &self.counts[..self.len]
    }

    /// The full fixed-layout array, zero-padded past the last occupied orbital.
    pub fn to_array(&self) -> [u32; ORBITAL_COUNT] {
        self.counts
    }

    /// Number of orbitals visited while filling.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of electrons placed.
    pub fn total(&self) -> u32 {
        self.as_slice().iter().sum()
    }

    pub fn get(&self, orbital: Orbital) -> u32 {
        self.counts[orbital.index()]
    }

    /// The last orbital that received electrons.
    pub fn outermost(&self) -> Option<Orbital> {
        self.len.checked_sub(1).map(|i| Orbital::ALL[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Orbital, u32)> + '_ {
        Orbital::ALL.into_iter().zip(self.as_slice().iter().copied())
    }
}

impl TryFrom<&[u32]> for ElectronDistribution {
    type Error = ElemDbError;

    fn try_from(counts: &[u32]) -> Result<Self> {
        let invalid = || ElemDbError::InvalidOccupancy(counts.to_vec());
        let total = counts
            .iter()
            .try_fold(0u32, |acc, &n| acc.checked_add(n))
            .ok_or_else(invalid)?;
        let dist = electron_distribution(total).map_err(|_| invalid())?;
        if dist.as_slice() == counts {
            Ok(dist)
        } else {
            Err(invalid())
        }
    }
}

impl TryFrom<Vec<u32>> for ElectronDistribution {
    type Error = ElemDbError;

    fn try_from(counts: Vec<u32>) -> Result<Self> {
        Self::try_from(counts.as_slice())
    }
}

impl From<ElectronDistribution> for Vec<u32> {
    fn from(dist: ElectronDistribution) -> Self {
        dist.as_slice().to_vec()
    }
}

impl Index<Orbital> for ElectronDistribution {
    type Output = u32;

    fn index(&self, orbital: Orbital) -> &u32 {
        &self.counts[orbital.index()]
    }
}

impl fmt::Display for ElectronDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (orbital, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{orbital}{count}")?;
        }
        Ok(())
    }
}

/// Returns the number of electrons in each orbital for a neutral atom with
/// the given atomic number.
///
/// Orbitals are filled strictly in the nested order n = 1..4, l = 0..n-1,
/// each taking up to 2(2l + 1) electrons. Filling stops at the orbital that
/// takes the last electron. This is a plain shell enumeration, not the
/// Madelung rule: from Z = 19 on, 3d fills before 4s.
///
/// Fails with [`ElemDbError::ShellCapacityExceeded`] above 60 electrons.
///
/// ```
/// use elemdb::electron_distribution;
///
/// assert_eq!(electron_distribution(1).unwrap().as_slice(), &[1]);
/// assert_eq!(electron_distribution(10).unwrap().as_slice(), &[2, 2, 6]);
/// assert!(electron_distribution(61).is_err());
/// ```
pub fn electron_distribution(atomic_number: u32) -> Result<ElectronDistribution> {
    if atomic_number > SHELL_CAPACITY {
        log::debug!("cannot place {atomic_number} electrons in shells n=1..4");
        return Err(ElemDbError::ShellCapacityExceeded {
            atomic_number,
            capacity: SHELL_CAPACITY,
        });
    }

    let mut dist = ElectronDistribution::default();
    let mut remaining = atomic_number;

    for orbital in Orbital::ALL {
        if remaining == 0 {
            break;
        }
        let placed = remaining.min(orbital.capacity());
        dist.counts[orbital.index()] = placed;
        dist.len += 1;
        remaining -= placed;
    }

    Ok(dist)
}
