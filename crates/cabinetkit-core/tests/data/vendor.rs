use cabinetkit_core::VendorSpecs;

#[test]
fn test_vendor_defaults() {
    let specs = VendorSpecs::with_defaults();
    assert_eq!(specs.get("boardThickness"), Some("18mm"));
    assert_eq!(specs.get("backPanel"), Some("9mm"));
    assert_eq!(specs.notes(), None);

    // Notes are never listed with the other pairs
    assert!(specs.listed().all(|(k, _)| k != "notes"));
}

#[test]
fn test_set_keeps_position() {
    let mut specs: VendorSpecs = [("a", "1"), ("b", "2")].into_iter().collect();
    specs.set("a", "3");
    specs.set("c", "4");

    let keys: Vec<(&str, &str)> = specs.iter().collect();
    assert_eq!(keys, vec![("a", "3"), ("b", "2"), ("c", "4")]);
}

#[test]
fn test_merge_and_notes() {
    let mut specs = VendorSpecs::with_defaults();
    let stored: VendorSpecs = [("hardware", "Blum soft-close"), ("notes", "Handleless fronts")]
        .into_iter()
        .collect();
    specs.merge(&stored);

    assert_eq!(specs.get("hardware"), Some("Blum soft-close"));
    assert_eq!(specs.notes(), Some("Handleless fronts"));
}

#[test]
fn test_blank_values_are_not_listed() {
    let specs: VendorSpecs = [("boardThickness", "18mm"), ("edgeBanding", " ")]
        .into_iter()
        .collect();
    let listed: Vec<_> = specs.listed().collect();
    assert_eq!(listed, vec![("boardThickness", "18mm")]);
}
