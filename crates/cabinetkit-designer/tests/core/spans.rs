use cabinetkit_designer::constraints::has_drawer_overlap;
use cabinetkit_designer::{Accessory, AccessoryKind, AccessoryType, Design, Span};

#[test]
fn test_divider_splits_shelf_spans() {
    let mut design = Design::new("Hall");
    let divider = design.add_accessory(0, AccessoryType::Divider).unwrap();
    let left = design.add_accessory(0, AccessoryType::Shelf).unwrap();
    let right = design.add_accessory(0, AccessoryType::Shelf).unwrap();
    design.set_accessory_x(0, right, 40.0).unwrap();

    assert_eq!(design.accessory_span(0, divider).unwrap(), Span::new(0.0, 60.0));
    assert_eq!(design.accessory_span(0, left).unwrap(), Span::new(0.0, 30.0));
    assert_eq!(design.accessory_span(0, right).unwrap(), Span::new(30.0, 60.0));
}

#[test]
fn test_shelf_below_short_divider_spans_full_width() {
    let mut design = Design::new("Hall");
    let divider = design.add_accessory(0, AccessoryType::Divider).unwrap();
    design.set_accessory_height(0, divider, 100.0).unwrap();

    let shelf = design.add_accessory(0, AccessoryType::Shelf).unwrap();
    design.set_accessory_y(0, shelf, 150.0).unwrap();
    assert_eq!(design.accessory_span(0, shelf).unwrap(), Span::new(0.0, 60.0));

    design.set_accessory_y(0, shelf, 50.0).unwrap();
    assert_eq!(design.accessory_span(0, shelf).unwrap(), Span::new(0.0, 30.0));
}

#[test]
fn test_door_ignores_dividers() {
    let mut design = Design::new("Hall");
    design.add_accessory(0, AccessoryType::Divider).unwrap();
    let door = design.add_accessory(0, AccessoryType::Door).unwrap();
    assert_eq!(design.accessory_span(0, door).unwrap(), Span::new(0.0, 60.0));
}

#[test]
fn test_drawers_side_by_side_across_divider() {
    let mut design = Design::new("Hall");
    let divider = design.add_accessory(0, AccessoryType::Divider).unwrap();
    let left = design
        .insert_accessory(0, Accessory::new(AccessoryKind::Drawer { x: 0.0 }, 0.0, 20.0))
        .unwrap();
    let right = design
        .insert_accessory(0, Accessory::new(AccessoryKind::Drawer { x: 40.0 }, 0.0, 20.0))
        .unwrap();

    let cabinet = &design.cabinets()[0];
    assert_eq!(cabinet.accessory(left).unwrap().y, 0.0);
    assert_eq!(cabinet.accessory(right).unwrap().y, 0.0);
    assert!(!has_drawer_overlap(cabinet));

    // Without the divider both drawers share one column
    design.remove_accessory(0, divider).unwrap();
    let cabinet = &design.cabinets()[0];
    assert_eq!(cabinet.accessory(left).unwrap().y, 0.0);
    assert_eq!(cabinet.accessory(right).unwrap().y, 20.0);
    assert!(!has_drawer_overlap(cabinet));
}

#[test]
fn test_moving_divider_reflows_spans() {
    let mut design = Design::new("Hall");
    let divider = design.add_accessory(0, AccessoryType::Divider).unwrap();
    let rod = design.add_accessory(0, AccessoryType::HangingRod).unwrap();
    assert_eq!(design.accessory_span(0, rod).unwrap(), Span::new(0.0, 30.0));

    design.set_accessory_x(0, divider, 45.0).unwrap();
    assert_eq!(design.accessory_span(0, rod).unwrap(), Span::new(0.0, 45.0));
}

#[test]
fn test_full_height_divider_splits_shelves_by_anchor() {
    let mut design = Design::new("Hall");
    assert_eq!(design.cabinets()[0].width, 60.0);
    assert_eq!(design.cabinets()[0].height(), 220.0);

    let upper = design
        .insert_accessory(0, Accessory::new(AccessoryKind::Shelf { x: 10.0 }, 50.0, 2.0))
        .unwrap();
    let lower = design
        .insert_accessory(0, Accessory::new(AccessoryKind::Shelf { x: 45.0 }, 150.0, 2.0))
        .unwrap();
    let divider = design
        .insert_accessory(0, Accessory::new(AccessoryKind::Divider { x: 30.0 }, 0.0, 220.0))
        .unwrap();

    assert_eq!(design.accessory_span(0, upper).unwrap(), Span::new(0.0, 30.0));
    assert_eq!(design.accessory_span(0, lower).unwrap(), Span::new(30.0, 60.0));
    assert_eq!(design.accessory_span(0, divider).unwrap(), Span::new(0.0, 60.0));

    // Swapping sides follows the anchor, not the shelf height
    design.set_accessory_x(0, upper, 59.0).unwrap();
    design.set_accessory_x(0, lower, 0.0).unwrap();
    assert_eq!(design.accessory_span(0, upper).unwrap(), Span::new(30.0, 60.0));
    assert_eq!(design.accessory_span(0, lower).unwrap(), Span::new(0.0, 30.0));
}
