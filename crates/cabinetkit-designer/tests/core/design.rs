use cabinetkit_core::DesignError;
use cabinetkit_designer::constraints::has_drawer_overlap;
use cabinetkit_designer::{Accessory, AccessoryKind, AccessoryType, Archetype, Design, EditOutcome};

#[test]
fn test_lowering_ceiling_lowers_cabinets() {
    let mut design = Design::new("Hall");
    design.add_cabinet(90.0, 180.0);
    assert_eq!(design.cabinets()[0].height(), 220.0);

    assert_eq!(design.set_ceiling_height(200.0), EditOutcome::Applied);
    assert_eq!(design.ceiling_height(), 200.0);
    assert_eq!(design.cabinets()[0].height(), 200.0);
    assert_eq!(design.cabinets()[1].height(), 180.0);
}

#[test]
fn test_ceiling_is_clamped() {
    let mut design = Design::new("Hall");
    assert_eq!(
        design.set_ceiling_height(150.0),
        EditOutcome::Adjusted {
            requested: 150.0,
            applied: 200.0
        }
    );
    assert_eq!(design.ceiling_height(), 200.0);

    design.set_ceiling_height(400.0);
    assert_eq!(design.ceiling_height(), 300.0);
}

#[test]
fn test_last_cabinet_cannot_be_removed() {
    let mut design = Design::new("Hall");
    design.add_cabinet(90.0, 200.0);

    let removed = design.remove_cabinet(0).unwrap();
    assert_eq!(removed.name, "Cabinet 1");
    assert_eq!(design.remove_cabinet(0).unwrap_err(), DesignError::LastCabinet);
    assert_eq!(design.cabinet_count(), 1);
}

#[test]
fn test_width_is_clamped() {
    let mut design = Design::new("Hall");
    let outcome = design.set_cabinet_width(0, 130.0).unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Adjusted {
            requested: 130.0,
            applied: 120.0
        }
    );
    design.set_cabinet_width(0, 10.0).unwrap();
    assert_eq!(design.cabinets()[0].width, 30.0);
}

#[test]
fn test_unknown_cabinet() {
    let mut design = Design::new("Hall");
    assert_eq!(
        design.set_cabinet_width(3, 60.0).unwrap_err(),
        DesignError::CabinetIndexOutOfRange { index: 3, count: 1 }
    );
}

#[test]
fn test_drawer_height_clamps_at_next_drawer() {
    let mut design = Design::new("Hall");
    let top = design.add_accessory(0, AccessoryType::Drawer).unwrap();
    design.set_accessory_y(0, top, 0.0).unwrap();
    let below = design.add_accessory(0, AccessoryType::Drawer).unwrap();
    design.set_accessory_y(0, below, 50.0).unwrap();

    let outcome = design.set_accessory_height(0, top, 80.0).unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Adjusted {
            requested: 80.0,
            applied: 50.0
        }
    );
    let cabinet = &design.cabinets()[0];
    assert_eq!(cabinet.accessory(top).unwrap().height, 50.0);
    assert!(!has_drawer_overlap(cabinet));
}

#[test]
fn test_drawer_snaps_and_jumps() {
    let mut design = Design::new("Hall");
    let a = design.add_accessory(0, AccessoryType::Drawer).unwrap();
    design.set_accessory_y(0, a, 0.0).unwrap();
    let b = design.add_accessory(0, AccessoryType::Drawer).unwrap();
    design.set_accessory_y(0, b, 50.0).unwrap();

    // Short of the neighbor's top edge: stops against it
    design.set_accessory_y(0, a, 40.0).unwrap();
    assert_eq!(design.cabinets()[0].accessory(a).unwrap().y, 30.0);

    // Past the neighbor's top edge: lands below it
    design.set_accessory_y(0, a, 55.0).unwrap();
    assert_eq!(design.cabinets()[0].accessory(a).unwrap().y, 70.0);

    // Moving back up stops at the neighbor's bottom edge
    design.set_accessory_y(0, a, 60.0).unwrap();
    assert_eq!(design.cabinets()[0].accessory(a).unwrap().y, 70.0);
    assert!(!has_drawer_overlap(&design.cabinets()[0]));
}

#[test]
fn test_full_drawer_stack_has_no_room() {
    let mut design = Design::new("Hall");
    let mut added = 0;
    let err = loop {
        match design.add_accessory(0, AccessoryType::Drawer) {
            Ok(_) => added += 1,
            Err(e) => break e,
        }
        assert!(added <= 11, "more drawers than fit");
    };

    assert!(matches!(err, DesignError::NoRoom { .. }));
    assert!(added >= 9);
    assert_eq!(design.cabinets()[0].accessories.len(), added);
    assert!(!has_drawer_overlap(&design.cabinets()[0]));
}

#[test]
fn test_accessory_clamped_into_cabinet() {
    let mut design = Design::new("Hall");
    let shelf = design.add_accessory(0, AccessoryType::Shelf).unwrap();

    let outcome = design.set_accessory_y(0, shelf, 300.0).unwrap();
    assert!(outcome.is_adjusted());
    let accessory = design.cabinets()[0].accessory(shelf).unwrap();
    assert_eq!(accessory.bottom(), 220.0);

    design.set_accessory_y(0, shelf, -20.0).unwrap();
    assert_eq!(design.cabinets()[0].accessory(shelf).unwrap().y, 0.0);
}

#[test]
fn test_shrinking_cabinet_revalidates_accessories() {
    let mut design = Design::new("Hall");
    let rod = design.add_accessory(0, AccessoryType::HangingRod).unwrap();
    design.set_accessory_y(0, rod, 210.0).unwrap();

    design.set_cabinet_height(0, 120.0).unwrap();
    let rod = design.cabinets()[0].accessory(rod).unwrap();
    assert!(rod.bottom() <= 120.0);
}

#[test]
fn test_split_profile_clamping() {
    let mut design = Design::new("Kitchen");
    design.set_archetype(0, Archetype::Split).unwrap();
    assert_eq!(design.cabinets()[0].height(), 220.0);

    assert_eq!(design.set_lower_height(0, 160.0).unwrap(), EditOutcome::Applied);
    let outcome = design.set_upper_elevation(0, 100.0).unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Adjusted {
            requested: 100.0,
            applied: 160.0
        }
    );

    // Upper unit cannot poke through the ceiling
    let outcome = design.set_upper_height(0, 120.0).unwrap();
    assert!(outcome.is_adjusted());
    assert!(design.cabinets()[0].height() <= design.ceiling_height());
}

#[test]
fn test_split_fields_rejected_on_tall() {
    let mut design = Design::new("Hall");
    assert!(matches!(
        design.set_lower_height(0, 90.0),
        Err(DesignError::ArchetypeMismatch { .. })
    ));
    assert!(matches!(
        design.set_backsplash(0, true),
        Err(DesignError::ArchetypeMismatch { .. })
    ));
}

#[test]
fn test_door_has_no_horizontal_position() {
    let mut design = Design::new("Hall");
    let door = design.add_accessory(0, AccessoryType::Door).unwrap();
    assert!(matches!(
        design.set_accessory_x(0, door, 10.0),
        Err(DesignError::UnsupportedField { .. })
    ));

    let shelf = design.add_accessory(0, AccessoryType::Shelf).unwrap();
    assert!(matches!(
        design.set_door_width(0, shelf, Some(30.0)),
        Err(DesignError::UnsupportedField { .. })
    ));
}

#[test]
fn test_door_width_clamped_to_cabinet() {
    let mut design = Design::new("Hall");
    let door = design.add_accessory(0, AccessoryType::Door).unwrap();
    let outcome = design.set_door_width(0, door, Some(80.0)).unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Adjusted {
            requested: 80.0,
            applied: 60.0
        }
    );
    assert_eq!(design.set_door_width(0, door, None).unwrap(), EditOutcome::Applied);
}

#[test]
fn test_summary() {
    let mut design = Design::new("Hall");
    design.add_cabinet(90.0, 200.0);
    assert_eq!(
        design.summary(),
        "2 cabinets side by side | ceiling 240cm | total width 150cm"
    );
}

#[test]
fn test_shrinking_cabinet_removes_drawers_without_room() {
    let mut design = Design::new("Hall");
    for y in [0.0, 50.0, 100.0, 150.0] {
        design
            .insert_accessory(0, Accessory::new(AccessoryKind::Drawer { x: 0.0 }, y, 50.0))
            .unwrap();
    }

    let outcome = design.set_cabinet_height(0, 100.0).unwrap();
    assert_eq!(
        outcome,
        EditOutcome::DrawersRemoved {
            requested: 100.0,
            applied: 100.0,
            removed: 2
        }
    );
    let cabinet = &design.cabinets()[0];
    assert_eq!(cabinet.accessories.len(), 2);
    assert!(cabinet.accessories.iter().all(|a| a.height > 0.0));
    assert!(cabinet.accessories.iter().all(|a| a.bottom() <= 100.0));
    assert!(!has_drawer_overlap(cabinet));
}

#[test]
fn test_lowering_ceiling_reports_removed_drawers() {
    let mut design = Design::new("Hall");
    design.set_ceiling_height(300.0);
    design.set_cabinet_height(0, 300.0).unwrap();
    for y in [0.0, 100.0, 200.0] {
        design
            .insert_accessory(0, Accessory::new(AccessoryKind::Drawer { x: 0.0 }, y, 100.0))
            .unwrap();
    }

    let outcome = design.set_ceiling_height(200.0);
    assert_eq!(outcome.removed_drawers(), 1);
    assert!(outcome.is_adjusted());
    assert_eq!(design.cabinets()[0].accessories.len(), 2);
}

#[test]
fn test_split_accessories_stay_out_of_the_gap() {
    let mut design = Design::new("Kitchen");
    design.set_archetype(0, Archetype::Split).unwrap();
    // Wall unit bay 0..70, base unit bay 135..220

    let door = design.add_accessory(0, AccessoryType::Door).unwrap();
    let door = design.cabinets()[0].accessory(door).unwrap();
    assert_eq!((door.y, door.height), (135.0, 85.0));

    let shelf = design.add_accessory(0, AccessoryType::Shelf).unwrap();
    let outcome = design.set_accessory_y(0, shelf, 95.0).unwrap();
    assert!(outcome.is_adjusted());
    assert_eq!(design.cabinets()[0].accessory(shelf).unwrap().y, 68.0);

    design.set_accessory_y(0, shelf, 110.0).unwrap();
    assert_eq!(design.cabinets()[0].accessory(shelf).unwrap().y, 135.0);

    let outcome = design.set_accessory_height(0, shelf, 200.0).unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Adjusted {
            requested: 200.0,
            applied: 85.0
        }
    );
}

#[test]
fn test_drawer_moves_between_split_units() {
    let mut design = Design::new("Kitchen");
    design.set_archetype(0, Archetype::Split).unwrap();
    let drawer = design.add_accessory(0, AccessoryType::Drawer).unwrap();
    assert_eq!(design.cabinets()[0].accessory(drawer).unwrap().y, 186.0);

    assert_eq!(
        design.set_accessory_y(0, drawer, 10.0).unwrap(),
        EditOutcome::Applied
    );

    // Dragged into the gap: lands at the bottom of the wall unit
    design.set_accessory_y(0, drawer, 80.0).unwrap();
    let moved = design.cabinets()[0].accessory(drawer).unwrap();
    assert_eq!((moved.y, moved.bottom()), (50.0, 70.0));
}

#[test]
fn test_drawer_shifted_into_full_column_stays_put() {
    let mut design = Design::new("Hall");
    design
        .insert_accessory(0, Accessory::new(AccessoryKind::Divider { x: 30.0 }, 0.0, 220.0))
        .unwrap();
    design
        .insert_accessory(0, Accessory::new(AccessoryKind::Drawer { x: 40.0 }, 0.0, 220.0))
        .unwrap();
    let drawer = design
        .insert_accessory(0, Accessory::new(AccessoryKind::Drawer { x: 10.0 }, 0.0, 50.0))
        .unwrap();

    let outcome = design.set_accessory_x(0, drawer, 45.0).unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Adjusted {
            requested: 45.0,
            applied: 10.0
        }
    );
    let cabinet = &design.cabinets()[0];
    assert_eq!(cabinet.accessory(drawer).unwrap().anchor_x(), 10.0);
    assert!(!has_drawer_overlap(cabinet));
}
