use std::any::{Any, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use elemdb_data::ElementRecord;

use crate::db::ElementDb;
use crate::distribution::{ElectronDistribution, electron_distribution};
use crate::error::{ElemDbError, Result};
use crate::units::{ATOMIC_MASS_UNIT, Mass};

/// How an [`Element`] is identified at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementId<'a> {
    /// Exact chemical symbol, e.g. `"Fe"`.
    Symbol(&'a str),
    AtomicNumber(u32),
}

/// Conversion into an [`ElementId`], accepted by [`Element::new`].
///
/// Integers of any primitive type are taken as atomic numbers. Values that
/// cannot be an atomic number (negative, or above `u32::MAX`) fail with
/// [`ElemDbError::UnknownAtomicNumber`].
pub trait IntoElementId<'a> {
    fn into_element_id(self) -> Result<ElementId<'a>>;
}

impl<'a> IntoElementId<'a> for ElementId<'a> {
    fn into_element_id(self) -> Result<ElementId<'a>> {
        Ok(self)
    }
}

impl<'a> IntoElementId<'a> for &'a str {
    fn into_element_id(self) -> Result<ElementId<'a>> {
        Ok(ElementId::Symbol(self))
    }
}

macro_rules! impl_into_element_id {
    ($($int:ty),*) => {
        $(
            impl<'a> IntoElementId<'a> for $int {
                fn into_element_id(self) -> Result<ElementId<'a>> {
                    u32::try_from(self)
                        .map(ElementId::AtomicNumber)
                        .map_err(|_| {
                            ElemDbError::UnknownAtomicNumber(
                                i64::try_from(self).unwrap_or(i64::MAX),
                            )
                        })
                }
            }
        )*
    };
}

impl_into_element_id!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A chemical element with its tabulated data and derived electron
/// distribution.
///
/// Two elements are equal when their atomic numbers are equal. Equality is
/// only defined between elements:
///
/// ```compile_fail
/// let h = elemdb::Element::from_atomic_number(1).unwrap();
/// let _ = h == 1;
/// ```
#[derive(Clone, Copy)]
pub struct Element {
    record: &'static ElementRecord,
    electron_distribution: ElectronDistribution,
}

impl Element {
    /// Builds an element from a symbol or an atomic number.
    ///
    /// ```
    /// use elemdb::Element;
    ///
    /// let o = Element::new("O").unwrap();
    /// assert_eq!(o.z(), 8);
    /// assert_eq!(Element::new(8).unwrap(), o);
    /// assert!(Element::new(-1).is_err());
    /// ```
    pub fn new<'a>(id: impl IntoElementId<'a>) -> Result<Self> {
        match id.into_element_id()? {
            ElementId::Symbol(symbol) => Self::from_symbol(symbol),
            ElementId::AtomicNumber(z) => Self::from_atomic_number(z),
        }
    }

    pub fn from_atomic_number(z: u32) -> Result<Self> {
        let record = ElementDb::new().record(z)?;
        Self::from_record(record)
    }

    pub fn from_symbol(symbol: &str) -> Result<Self> {
        let db = ElementDb::new();
        let z = db.z_from_symbol(symbol)?;
        Self::from_record(db.record(u32::from(z))?)
    }

    /// Looks the element up by its English name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        let db = ElementDb::new();
        let z = db.z_from_name(name)?;
        Self::from_record(db.record(u32::from(z))?)
    }

    fn from_record(record: &'static ElementRecord) -> Result<Self> {
        Ok(Element {
            record,
            electron_distribution: electron_distribution(u32::from(record.atomic_number))?,
        })
    }

    /// All tabulated elements, in order of atomic number.
    pub fn all() -> impl Iterator<Item = Element> {
        ElementDb::new()
            .raw()
            .iter()
            .filter_map(|record| Self::from_record(record).ok())
    }

    /// Atomic number Z.
    pub fn z(&self) -> u32 {
        u32::from(self.record.atomic_number)
    }

    pub fn symbol(&self) -> &'static str {
        self.record.symbol
    }

    pub fn name(&self) -> &'static str {
        self.record.name
    }

    /// Standard atomic mass as a dimensioned quantity.
    pub fn atomic_mass(&self) -> Mass {
        self.record.atomic_mass * ATOMIC_MASS_UNIT
    }

    pub fn electron_distribution(&self) -> &ElectronDistribution {
        &self.electron_distribution
    }

    /// Compares against a value of any type.
    ///
    /// Returns [`ElemDbError::UnsupportedComparison`] instead of `Ok(false)`
    /// when `other` is not an [`Element`].
    ///
    /// ```
    /// use elemdb::Element;
    ///
    /// let h = Element::new(1u32).unwrap();
    /// assert_eq!(h.try_eq(&h), Ok(true));
    /// assert!(h.try_eq(&1).is_err());
    /// ```
    pub fn try_eq<T: Any>(&self, other: &T) -> Result<bool> {
        match (other as &dyn Any).downcast_ref::<Element>() {
            Some(other) => Ok(self == other),
            None => Err(ElemDbError::UnsupportedComparison {
                left: type_name::<Element>(),
                right: type_name::<T>(),
            }),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.record.atomic_number == other.record.atomic_number
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.atomic_number.hash(state);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Element {} ({}) Z={}",
            self.record.name, self.record.symbol, self.record.atomic_number
        )
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Element {
    type Err = ElemDbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_symbol(s)
    }
}

impl TryFrom<u32> for Element {
    type Error = ElemDbError;

    fn try_from(z: u32) -> Result<Self> {
        Self::from_atomic_number(z)
    }
}
