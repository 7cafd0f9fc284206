use cabinetkit_core::{ImportError, MaterialZone};
use cabinetkit_designer::serialization::{parse_document, FORMAT_TAG};
use cabinetkit_designer::{
    export_design, import_design, AccessoryKind, AccessoryType, Archetype, Design, DesignFile,
    FloorFinish, Hinge, FORMAT_VERSION,
};

fn sample_design() -> Design {
    let mut design = Design::new("Kitchen");
    design.floor = FloorFinish::WoodDark;
    design.set_material(MaterialZone::Door, "white oak");

    let shelf = design.add_accessory(0, AccessoryType::Shelf).unwrap();
    design.set_accessory_y(0, shelf, 100.0).unwrap();
    let drawer = design.add_accessory(0, AccessoryType::Drawer).unwrap();
    design.set_accessory_y(0, drawer, 180.0).unwrap();

    let index = design.add_cabinet(80.0, 200.0);
    design.set_archetype(index, Archetype::Split).unwrap();
    let door = design.add_accessory(index, AccessoryType::Door).unwrap();
    design.set_door_width(index, door, Some(40.0)).unwrap();
    design.set_door_hinge(index, door, Some(Hinge::Right)).unwrap();
    design.add_accessory(index, AccessoryType::Divider).unwrap();
    design
}

#[test]
fn test_export_import_round_trip() {
    let design = sample_design();
    let json = export_design(&design).unwrap();
    let imported = import_design(&json).unwrap();
    assert_eq!(imported, design);
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kitchen.json");

    let design = sample_design();
    DesignFile::from_design(&design).save_to_file(&path).unwrap();

    let file = DesignFile::load_from_file(&path).unwrap();
    assert_eq!(file.format, FORMAT_TAG);
    assert_eq!(file.version, FORMAT_VERSION);
    assert_eq!(file.metadata.name, "Kitchen");
    assert_eq!(file.into_design().unwrap(), design);
}

#[test]
fn test_import_legacy_door_variants() {
    let json = r#"{
        "format": "cabinetkit-design",
        "version": 2,
        "metadata": {
            "name": "Hall",
            "created": "2024-05-01T10:00:00Z",
            "modified": "2024-05-01T10:00:00Z"
        },
        "ceiling_height": 240,
        "cabinets": [{
            "id": "7d2a3c1e-9a57-4b0e-8f5a-2f4c6f1d0a11",
            "name": "Cabinet 1",
            "width": 60,
            "archetype": "tall",
            "height": 220,
            "accessories": [
                {"id": "0c6f1a8e-58a4-4d1b-9a0e-1f0f1d1e2a01", "type": "door-left", "y": 0, "height": 220},
                {"id": "0c6f1a8e-58a4-4d1b-9a0e-1f0f1d1e2a02", "type": "door-right", "y": 0, "height": 220, "width": 25},
                {"id": "0c6f1a8e-58a4-4d1b-9a0e-1f0f1d1e2a03", "type": "door", "y": 0, "height": 220, "opening": "right"}
            ]
        }]
    }"#;

    let design = import_design(json).unwrap();
    let hinges: Vec<Option<Hinge>> = design.cabinets()[0]
        .accessories
        .iter()
        .map(|a| match a.kind {
            AccessoryKind::Door { hinge, .. } => hinge,
            _ => panic!("expected a door, got {:?}", a.kind),
        })
        .collect();
    assert_eq!(
        hinges,
        vec![Some(Hinge::Left), Some(Hinge::Right), Some(Hinge::Right)]
    );
    assert!(matches!(
        design.cabinets()[0].accessories[1].kind,
        AccessoryKind::Door {
            width: Some(w),
            ..
        } if w == 25.0
    ));
}

#[test]
fn test_import_version_one() {
    let json = r#"{
        "name": "Old hallway",
        "ceilingH": 250,
        "materials": {"door": "walnut", "drawer": "  "},
        "cabinets": [
            {"id": 1, "width": 60, "height": 230, "accessories": [
                {"id": 10, "type": "shelf", "y": 100, "height": 2},
                {"id": 11, "type": "door-right", "y": 0, "height": 230}
            ]},
            {"id": 2, "width": 200, "height": 180}
        ]
    }"#;

    let file = parse_document(json).unwrap();
    assert_eq!(file.version, FORMAT_VERSION);
    assert_eq!(file.metadata.name, "Old hallway");

    let design = file.into_design().unwrap();
    assert_eq!(design.name, "Old hallway");
    assert_eq!(design.ceiling_height(), 250.0);
    assert_eq!(design.materials.get(MaterialZone::Door), Some("walnut"));
    assert_eq!(design.materials.get(MaterialZone::Drawer), None);

    let cabinets = design.cabinets();
    assert_eq!(cabinets[0].name, "Cabinet 1");
    assert_eq!(cabinets[0].archetype(), Archetype::Tall);
    assert_eq!(cabinets[0].accessories.len(), 2);
    assert_ne!(cabinets[0].accessories[0].id, cabinets[0].accessories[1].id);
    // Out of range values are clamped on import
    assert_eq!(cabinets[1].width, 120.0);
    assert_eq!(cabinets[1].name, "Cabinet 2");
}

#[test]
fn test_import_clamps_to_ceiling() {
    let mut design = Design::new("Hall");
    design.set_ceiling_height(300.0);
    design.set_cabinet_height(0, 290.0).unwrap();
    let mut value: serde_json::Value =
        serde_json::from_str(&export_design(&design).unwrap()).unwrap();
    value["ceiling_height"] = serde_json::json!(220);

    let imported = import_design(&value.to_string()).unwrap();
    assert_eq!(imported.cabinets()[0].height(), 220.0);
}

#[test]
fn test_import_rejects_invalid_documents() {
    assert!(matches!(
        import_design("{ not json"),
        Err(ImportError::ParseError(_))
    ));

    let mut value: serde_json::Value =
        serde_json::from_str(&export_design(&Design::new("Hall")).unwrap()).unwrap();

    let mut empty = value.clone();
    empty["cabinets"] = serde_json::json!([]);
    assert!(matches!(
        import_design(&empty.to_string()),
        Err(ImportError::Invalid { .. })
    ));

    let cabinet = value["cabinets"][0].clone();
    value["cabinets"] = serde_json::json!([cabinet.clone(), cabinet]);
    assert!(matches!(
        import_design(&value.to_string()),
        Err(ImportError::Invalid { .. })
    ));
}

#[test]
fn test_missing_fields_are_parse_errors() {
    let json = r#"{"format": "cabinetkit-design", "version": 2, "cabinets": []}"#;
    assert!(matches!(
        import_design(json),
        Err(ImportError::ParseError(_))
    ));
}
