use cabinetkit_designer::renderer::scene::palette;
use cabinetkit_designer::renderer::{scene_to_svg, Primitive};
use cabinetkit_designer::{
    build_scene, render_design, AccessoryType, Archetype, Design, LedPlacement, RenderOptions,
    Viewport,
};

fn sample_design() -> Design {
    let mut design = Design::new("Hall");
    design.add_accessory(0, AccessoryType::Shelf).unwrap();
    design.add_accessory(0, AccessoryType::Drawer).unwrap();
    let index = design.add_cabinet(90.0, 200.0);
    design.set_archetype(index, Archetype::Split).unwrap();
    design.add_accessory(index, AccessoryType::Divider).unwrap();
    let led = design.add_accessory(index, AccessoryType::Led).unwrap();
    design.set_led_placement(index, led, LedPlacement::Left).unwrap();
    design
}

#[test]
fn test_dimension_labels() {
    let design = sample_design();
    let scene = build_scene(&design, &Viewport::default(), &RenderOptions::export());
    let texts: Vec<&str> = scene.texts().collect();

    for label in ["60cm", "220cm", "90cm", "#1", "#2", "Cabinet 1", "Cabinet 2"] {
        assert!(texts.contains(&label), "missing label {}", label);
    }
    assert!(texts.contains(&"Total 150cm"));
}

#[test]
fn test_height_label_is_rotated() {
    let design = Design::new("Hall");
    let scene = build_scene(&design, &Viewport::default(), &RenderOptions::export());
    let rotated = scene.primitives.iter().any(|p| {
        matches!(p, Primitive::Text { text, rotation, .. } if text == "220cm" && *rotation != 0.0)
    });
    assert!(rotated);
}

#[test]
fn test_led_draws_glow() {
    let design = sample_design();
    let scene = build_scene(&design, &Viewport::default(), &RenderOptions::export());
    assert!(scene
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::Gradient { .. })));
}

#[test]
fn test_accessories_inside_cabinet() {
    let design = sample_design();
    let viewport = Viewport::default();
    for layout in viewport.layouts(&design) {
        let cabinet = &design.cabinets()[layout.index];
        for accessory in &cabinet.accessories {
            let rect = viewport.accessory_rect(&layout, cabinet, accessory);
            let inner = layout.inner.inflate(2.0);
            assert!(inner.contains(rect.x, rect.y), "{:?} outside {:?}", rect, inner);
            assert!(inner.contains(rect.right(), rect.bottom()));
        }
    }
}

#[test]
fn test_raster_and_svg_agree() {
    let design = sample_design();
    let viewport = Viewport::default();
    let options = RenderOptions::export();
    let scene = build_scene(&design, &viewport, &options);

    let image = render_design(&design, &viewport, &options);
    assert_eq!(image.dimensions(), (scene.width, scene.height));

    let svg = scene_to_svg(&scene);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(&format!("width=\"{}\"", scene.width)));
    assert!(svg.contains("Cabinet 2"));
    assert!(svg.contains(&palette::BACKGROUND.hex()));
}

#[test]
fn test_selected_accessory_highlighted() {
    let mut design = Design::new("Hall");
    let shelf = design.add_accessory(0, AccessoryType::Shelf).unwrap();
    let viewport = Viewport::default();

    let plain = build_scene(&design, &viewport, &RenderOptions::interactive(Some(0), None));
    let selected = build_scene(
        &design,
        &viewport,
        &RenderOptions::interactive(Some(0), Some(shelf)),
    );
    assert!(selected.len() > plain.len());
}

#[test]
fn test_split_accessories_clear_the_backsplash() {
    let mut design = Design::new("Kitchen");
    design.set_archetype(0, Archetype::Split).unwrap();
    design.add_accessory(0, AccessoryType::Door).unwrap();
    design.add_accessory(0, AccessoryType::Drawer).unwrap();
    let shelf = design.add_accessory(0, AccessoryType::Shelf).unwrap();
    design.set_accessory_y(0, shelf, 20.0).unwrap();

    let viewport = Viewport::default();
    let layout = viewport.cabinet_layout(&design, 0, 64.0).unwrap();
    let splash = layout.backsplash.unwrap();
    let cabinet = &design.cabinets()[0];

    for accessory in &cabinet.accessories {
        let rect = viewport.accessory_rect(&layout, cabinet, accessory);
        let clear = rect.bottom() <= splash.y || rect.y >= splash.bottom();
        assert!(clear, "{:?} crosses the backsplash {:?}", rect, splash);
    }
}
