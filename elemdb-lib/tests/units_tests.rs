use approx::assert_relative_eq;
use elemdb::constants::{ATOMIC_MASS_CONSTANT_KG, AVOGADRO};
use elemdb::units::ELECTRON_MASS;
use elemdb::{ATOMIC_MASS_UNIT, Element, Mass};

#[test]
fn test_atomic_mass_unit() {
    assert_relative_eq!(ATOMIC_MASS_UNIT.daltons(), 1.0);
    assert_relative_eq!(ATOMIC_MASS_UNIT.kilograms(), ATOMIC_MASS_CONSTANT_KG);
    assert_relative_eq!(ATOMIC_MASS_UNIT.grams(), 1.66053906660e-24, max_relative = 1e-12);
}

#[test]
fn test_scalar_times_unit() {
    let m = 12.011 * ATOMIC_MASS_UNIT;
    assert_eq!(m, ATOMIC_MASS_UNIT * 12.011);
    assert_relative_eq!(m.daltons(), 12.011, epsilon = 1e-9);
    assert_relative_eq!((m / 12.011).daltons(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_molar_mass_is_numerically_the_relative_mass() {
    // 1 u * N_A = 1 g/mol up to the 2019 SI redefinition (~1e-9)
    assert_relative_eq!(ATOMIC_MASS_UNIT.molar_mass(), 1.0, max_relative = 1e-8);
    let fe = Element::from_symbol("Fe").unwrap();
    assert_relative_eq!(fe.atomic_mass().molar_mass(), 55.845, max_relative = 1e-8);
    assert_relative_eq!(
        fe.atomic_mass().grams() * AVOGADRO,
        fe.atomic_mass().molar_mass()
    );
}

#[test]
fn test_mass_arithmetic() {
    let h = Element::new("H").unwrap().atomic_mass();
    let o = Element::new("O").unwrap().atomic_mass();
    let water = 2.0 * h + o;
    assert_relative_eq!(water.daltons(), 18.015, epsilon = 1e-9);
    assert_relative_eq!((water - o).daltons(), 2.016, epsilon = 1e-9);
    assert_relative_eq!(o / h, 15.999 / 1.008, max_relative = 1e-12);
    assert!(o > h);
}

#[test]
fn test_unit_conversions() {
    let m = Mass::from_grams(1.0);
    assert_relative_eq!(m.kilograms(), 1e-3);
    assert_relative_eq!(Mass::from_daltons(4.0).daltons(), 4.0, epsilon = 1e-12);
    assert_relative_eq!(Mass::from_kilograms(2.5).grams(), 2500.0);
}

#[test]
fn test_electron_mass() {
    assert_relative_eq!(ELECTRON_MASS.daltons(), 5.48579909065e-4, max_relative = 1e-8);
    let p_over_e = Element::new("H").unwrap().atomic_mass() / ELECTRON_MASS;
    assert!(p_over_e > 1800.0 && p_over_e < 1900.0);
}

#[test]
fn test_display() {
    assert_eq!(format!("{:.3}", 12.011 * ATOMIC_MASS_UNIT), "12.011 u");
    assert_eq!(format!("{:.1}", Mass::from_daltons(2.0)), "2.0 u");
}
