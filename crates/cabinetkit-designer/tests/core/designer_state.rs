use cabinetkit_core::{DesignError, ViewSettings};
use cabinetkit_designer::designer_state::DesignerState;
use cabinetkit_designer::{AccessoryType, Archetype, Design, EditOutcome};

#[test]
fn test_designer_state_new() {
    let state = DesignerState::new();
    assert_eq!(state.design.cabinet_count(), 1);
    assert_eq!(state.selected_cabinet(), 0);
    assert_eq!(state.selected_accessory(), None);
    assert!(!state.is_modified);
    assert!(state.current_file_path.is_none());
}

#[test]
fn test_edits_target_selected_cabinet() {
    let mut state = DesignerState::new();
    state.add_cabinet(60.0, 200.0);
    state.select_cabinet(0).unwrap();

    state.set_cabinet_width(90.0).unwrap();
    state.rename_cabinet("Pantry").unwrap();
    assert_eq!(state.design.cabinets()[0].width, 90.0);
    assert_eq!(state.design.cabinets()[0].name, "Pantry");
    assert_eq!(state.design.cabinets()[1].width, 60.0);
}

#[test]
fn test_clamped_edit_is_reported() {
    let mut state = DesignerState::new();
    let outcome = state.set_cabinet_height(500.0).unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Adjusted {
            requested: 500.0,
            applied: 240.0
        }
    );
    assert!(state.is_modified);
}

#[test]
fn test_select_missing_cabinet() {
    let mut state = DesignerState::new();
    assert!(matches!(
        state.select_cabinet(5),
        Err(DesignError::CabinetIndexOutOfRange { .. })
    ));
    assert_eq!(state.selected_cabinet(), 0);
}

#[test]
fn test_removing_selected_accessory_clears_selection() {
    let mut state = DesignerState::new();
    let shelf = state.add_accessory(AccessoryType::Shelf).unwrap();
    assert_eq!(state.accessory().map(|a| a.id), Some(shelf));

    state.remove_accessory(shelf).unwrap();
    assert_eq!(state.selected_accessory(), None);
    assert!(state.accessory().is_none());
}

#[test]
fn test_select_accessory_of_other_cabinet_fails() {
    let mut state = DesignerState::new();
    let shelf = state.add_accessory(AccessoryType::Shelf).unwrap();
    state.add_cabinet(60.0, 200.0);

    assert!(matches!(
        state.select_accessory(Some(shelf)),
        Err(DesignError::AccessoryNotFound { .. })
    ));
    state.select_accessory(None).unwrap();
}

#[test]
fn test_select_at_accessory() {
    let mut state = DesignerState::new();
    let drawer = state.add_accessory(AccessoryType::Drawer).unwrap();
    state.select_accessory(None).unwrap();

    let layout = state.viewport.layouts(&state.design)[0].clone();
    let cabinet = &state.design.cabinets()[0];
    let rect = state
        .viewport
        .accessory_rect(&layout, cabinet, cabinet.accessory(drawer).unwrap());

    assert!(state.select_at(rect.center_x(), rect.center_y()));
    assert_eq!(state.selected_accessory(), Some(drawer));
}

#[test]
fn test_split_edits_through_state() {
    let mut state = DesignerState::new();
    state.set_archetype(Archetype::Split).unwrap();
    state.set_backsplash(false).unwrap();
    state.set_lower_height(90.0).unwrap();
    assert_eq!(state.cabinet().archetype(), Archetype::Split);

    state.set_archetype(Archetype::Tall).unwrap();
    assert!(state.set_upper_height(60.0).is_err());
}

#[test]
fn test_render_matches_surface_size() {
    let mut design = Design::new("Hall");
    design.add_cabinet(90.0, 200.0);
    let state = DesignerState::with_design(design, ViewSettings::default());

    let (width, height) = state.viewport.surface_size(&state.design);
    let image = state.render();
    assert_eq!(image.dimensions(), (width, height));
    assert_eq!(state.render_export().dimensions(), (width, height));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hall.json");

    let mut state = DesignerState::new();
    state.set_design_name("Hall");
    state.add_accessory(AccessoryType::Shelf).unwrap();
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    assert_eq!(state.current_file_path.as_deref(), Some(path.as_path()));

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.design, state.design);
    assert_eq!(loaded.display_name(), "Hall");
}

#[test]
fn test_failed_load_keeps_design() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"format\": 3 }").unwrap();

    let mut state = DesignerState::new();
    state.add_cabinet(90.0, 200.0);
    let before = state.design.clone();

    assert!(state.load_from_file(&path).is_err());
    assert!(state.load_from_file(dir.path().join("missing.json")).is_err());
    assert_eq!(state.design, before);
}

#[test]
fn test_import_and_export_json() {
    let mut source = DesignerState::new();
    source.add_cabinet(45.0, 180.0);
    let json = source.export_json().unwrap();

    let mut state = DesignerState::new();
    state.import_json(&json).unwrap();
    assert_eq!(state.design, source.design);
    assert!(state.is_modified);
    assert_eq!(state.selected_cabinet(), 0);
}
