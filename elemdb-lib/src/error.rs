use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElemDbError {
    UnknownElement(String),
    UnknownAtomicNumber(i64),
    UnknownOrbital(String),
    InvalidOccupancy(Vec<u32>),
    ShellCapacityExceeded { atomic_number: u32, capacity: u32 },
    UnsupportedComparison { left: &'static str, right: &'static str },
}

pub type Result<T> = std::result::Result<T, ElemDbError>;

impl fmt::Display for ElemDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(e) => write!(f, "unknown element: {e}"),
            Self::UnknownAtomicNumber(z) => write!(f, "unknown atomic number: {z}"),
            Self::UnknownOrbital(label) => write!(f, "unknown orbital: {label}"),
            Self::InvalidOccupancy(counts) => {
                write!(f, "occupancy {counts:?} is not a neutral-atom filling")
            }
            Self::ShellCapacityExceeded {
                atomic_number,
                capacity,
            } => write!(
                f,
                "{atomic_number} electrons exceed the capacity of shells n=1..4 ({capacity})"
            ),
            Self::UnsupportedComparison { left, right } => {
                write!(f, "cannot compare {left} to an object of type {right}")
            }
        }
    }
}

impl std::error::Error for ElemDbError {}
