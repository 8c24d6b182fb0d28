/// Avogadro's number (mol^-1)
pub const AVOGADRO: f64 = 6.02214076e23;

/// Atomic mass constant m_u = 1 u (kg), CODATA 2018
pub const ATOMIC_MASS_CONSTANT_KG: f64 = 1.66053906660e-27;

/// Electron rest mass (kg), CODATA 2018
pub const ELECTRON_MASS_KG: f64 = 9.1093837015e-31;
