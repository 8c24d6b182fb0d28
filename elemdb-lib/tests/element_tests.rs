use std::collections::HashSet;
use std::thread;

use approx::assert_relative_eq;
use elemdb::{ElemDbError, Element, ElementDb, ElementId, electron_distribution};

#[test]
fn test_element_count() {
    let db = ElementDb::new();
    assert_eq!(db.raw().len(), 36);
    assert_eq!(Element::all().count(), 36);
}

#[test]
fn test_table_is_ordered_by_atomic_number() {
    let db = ElementDb::new();
    for (i, record) in db.raw().iter().enumerate() {
        assert_eq!(record.atomic_number as usize, i + 1);
    }
}

#[test]
fn test_symbols_and_names_are_unique() {
    let db = ElementDb::new();
    let symbols: HashSet<_> = db.raw().iter().map(|r| r.symbol).collect();
    let names: HashSet<_> = db.raw().iter().map(|r| r.name).collect();
    assert_eq!(symbols.len(), 36);
    assert_eq!(names.len(), 36);
}

#[test]
fn test_round_trip_through_symbol() {
    for z in 1..=36u32 {
        let by_z = Element::from_atomic_number(z).unwrap();
        assert_eq!(by_z.z(), z);
        let by_symbol = Element::from_symbol(by_z.symbol()).unwrap();
        assert_eq!(by_symbol.z(), z);
        assert_eq!(by_symbol.name(), by_z.name());
    }
}

#[test]
fn test_oxygen() {
    assert_eq!(Element::new("O").unwrap().z(), 8);
    let o = Element::new(8u32).unwrap();
    assert_eq!(o.symbol(), "O");
    assert_eq!(o.name(), "Oxygen");
}

#[test]
fn test_tagged_identifier() {
    let by_symbol = Element::new(ElementId::Symbol("Fe")).unwrap();
    let by_z = Element::new(ElementId::AtomicNumber(26)).unwrap();
    assert_eq!(by_symbol, by_z);
    assert_eq!(Element::new(26u8).unwrap(), by_z);
    assert_eq!(Element::new(26u16).unwrap(), by_z);
}

#[test]
fn test_any_integer_type_is_an_atomic_number() {
    let o = Element::new(8).unwrap();
    assert_eq!(o.symbol(), "O");
    assert_eq!(Element::new(8i64).unwrap(), o);
    assert_eq!(Element::new(8usize).unwrap(), o);
    assert_eq!(Element::new(8u64).unwrap(), o);

    assert_eq!(
        Element::new(-1).unwrap_err(),
        ElemDbError::UnknownAtomicNumber(-1)
    );
    assert_eq!(
        Element::new(37).unwrap_err(),
        ElemDbError::UnknownAtomicNumber(37)
    );
    assert_eq!(
        Element::new(u64::MAX).unwrap_err(),
        ElemDbError::UnknownAtomicNumber(i64::MAX)
    );
    assert_eq!(
        Element::new(i64::from(u32::MAX) + 1).unwrap_err(),
        ElemDbError::UnknownAtomicNumber(i64::from(u32::MAX) + 1)
    );
}

#[test]
fn test_from_name_ignores_case() {
    assert_eq!(Element::from_name("iron").unwrap().z(), 26);
    assert_eq!(Element::from_name("KRYPTON").unwrap().z(), 36);
    assert_eq!(Element::from_name("Aluminum").unwrap().symbol(), "Al");
    assert!(matches!(
        Element::from_name("Unobtainium"),
        Err(ElemDbError::UnknownElement(_))
    ));
}

#[test]
fn test_parse_and_try_from() {
    let cu: Element = "Cu".parse().unwrap();
    assert_eq!(cu.z(), 29);
    assert_eq!(Element::try_from(29u32).unwrap(), cu);
}

#[test]
fn test_unknown_symbol() {
    assert_eq!(
        Element::new("Xx").unwrap_err(),
        ElemDbError::UnknownElement("Xx".to_string())
    );
    // symbols are matched exactly
    assert!(Element::from_symbol("fe").is_err());
    assert!(Element::from_symbol("").is_err());
}

#[test]
fn test_unknown_atomic_number() {
    assert_eq!(
        Element::new(0u32).unwrap_err(),
        ElemDbError::UnknownAtomicNumber(0)
    );
    assert_eq!(
        Element::new(37u32).unwrap_err(),
        ElemDbError::UnknownAtomicNumber(37)
    );
    assert!(Element::from_atomic_number(u32::MAX).is_err());
}

#[test]
fn test_atomic_mass() {
    let c = Element::new(6u32).unwrap();
    assert_relative_eq!(c.atomic_mass().daltons(), 12.011, epsilon = 1e-9);
    assert_relative_eq!(
        c.atomic_mass().kilograms(),
        12.011 * 1.66053906660e-27,
        max_relative = 1e-12
    );

    let fe = Element::from_symbol("Fe").unwrap();
    assert_relative_eq!(fe.atomic_mass().daltons(), 55.845, epsilon = 1e-9);
    assert!(fe.atomic_mass() > c.atomic_mass());
}

#[test]
fn test_atomic_mass_matches_table() {
    let db = ElementDb::new();
    for elem in Element::all() {
        let tabulated = db.atomic_mass(elem.symbol()).unwrap();
        assert_relative_eq!(elem.atomic_mass().daltons(), tabulated, max_relative = 1e-12);
    }
}

#[test]
fn test_distribution_matches_free_function() {
    for elem in Element::all() {
        let expected = electron_distribution(elem.z()).unwrap();
        assert_eq!(*elem.electron_distribution(), expected);
        assert_eq!(elem.electron_distribution().total(), elem.z());
    }
}

#[test]
fn test_equality_by_atomic_number() {
    let h = Element::new(1u32).unwrap();
    assert_eq!(h, Element::new(1u32).unwrap());
    assert_eq!(h, Element::new("H").unwrap());
    assert_ne!(h, Element::new(2u32).unwrap());

    let set: HashSet<Element> = ["H", "He", "H"]
        .into_iter()
        .map(|s| Element::new(s).unwrap())
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_try_eq() {
    let h = Element::new(1u32).unwrap();
    let he = Element::new(2u32).unwrap();
    assert_eq!(h.try_eq(&h), Ok(true));
    assert_eq!(h.try_eq(&he), Ok(false));
    assert!(matches!(
        h.try_eq(&1i32),
        Err(ElemDbError::UnsupportedComparison { right: "i32", .. })
    ));
    assert!(h.try_eq(&"H").is_err());
}

#[test]
fn test_display() {
    let o = Element::new("O").unwrap();
    assert_eq!(o.to_string(), "Element Oxygen (O) Z=8");
    assert_eq!(format!("{o:?}"), "Element Oxygen (O) Z=8");
}

#[test]
fn test_db_resolve_element() {
    let db = ElementDb::new();
    assert_eq!(db.atomic_number("Fe").unwrap(), 26);
    assert_eq!(db.atomic_number("iron").unwrap(), 26);
    assert_eq!(db.atomic_number("26").unwrap(), 26);
    assert_eq!(db.symbol("8").unwrap(), "O");
    assert_eq!(db.atomic_name("Kr").unwrap(), "Krypton");
    assert!(matches!(
        db.atomic_number("0"),
        Err(ElemDbError::UnknownElement(_))
    ));
    assert!(matches!(
        db.atomic_number("37"),
        Err(ElemDbError::UnknownElement(_))
    ));
}

#[test]
fn test_concurrent_element_construction() {
    let mut handles = Vec::new();
    for _ in 0..8 {
        handles.push(thread::spawn(|| {
            for z in 1..=36u32 {
                let elem = Element::new(z).unwrap();
                assert_eq!(Element::new(elem.symbol()).unwrap(), elem);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_record_serializes_with_postcard() {
    let hydrogen = &ElementDb::new().raw()[0];
    let bytes = postcard::to_allocvec(hydrogen).unwrap();
    // Z byte, "H", "Hydrogen", f64 mass
    assert_eq!(bytes.len(), 1 + 2 + 9 + 8);
    assert_eq!(&bytes[bytes.len() - 8..], &1.008f64.to_le_bytes());
}
