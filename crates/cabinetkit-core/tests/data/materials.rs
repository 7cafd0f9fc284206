use cabinetkit_core::data::materials::{
    is_valid_texture_file_name, CATEGORY_ALL,
};
use cabinetkit_core::{CatalogError, MaterialAssignments, MaterialCatalog, MaterialZone, TextureLibrary};

#[test]
fn test_texture_file_name_pattern() {
    assert!(is_valid_texture_file_name("kitchen-oak-01.png"));
    assert!(is_valid_texture_file_name("wardrobe-walnut-3.JPG"));
    assert!(is_valid_texture_file_name("bath-marble-white-2.jpeg"));
    assert!(is_valid_texture_file_name("-a-b-c.png"));
    assert!(is_valid_texture_file_name("a-b-c-.png"));
    assert!(is_valid_texture_file_name("a-b-c.tar.jpg"));

    assert!(!is_valid_texture_file_name("oak.png"));
    assert!(!is_valid_texture_file_name("kitchen-oak.png"));
    assert!(!is_valid_texture_file_name("kitchen--01.png"));
    assert!(!is_valid_texture_file_name("-oak-01.png"));
    assert!(!is_valid_texture_file_name("kitchen-oak-.png"));
    assert!(!is_valid_texture_file_name("kitchen-oak-01.gif"));
    assert!(!is_valid_texture_file_name("kitchen-oak-01"));
}

#[test]
fn test_add_texture_derives_name_and_category() {
    let mut library = TextureLibrary::new();
    let id = library
        .add_texture("kitchen-oak-01.png", "image/png", vec![1, 2, 3])
        .unwrap();

    let entry = library.get_texture(id).unwrap();
    assert_eq!(entry.name, "kitchen-oak-01");
    assert_eq!(entry.category, "oak");
    assert_eq!(entry.image_data, vec![1, 2, 3]);
}

#[test]
fn test_add_texture_with_dashed_segments() {
    let mut library = TextureLibrary::new();
    let id = library
        .add_texture("-walnut-dark-2.jpg", "image/jpeg", Vec::new())
        .unwrap();

    let entry = library.get_texture(id).unwrap();
    assert_eq!(entry.name, "-walnut-dark-2");
    assert_eq!(entry.category, "walnut");
}

#[test]
fn test_add_texture_rejects_bad_uploads() {
    let mut library = TextureLibrary::new();

    let err = library
        .add_texture("oak.png", "image/png", Vec::new())
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidFileName { .. }));

    let err = library
        .add_texture("kitchen-oak-01.png", "text/plain", Vec::new())
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotAnImage { .. }));

    assert!(library.is_empty());
}

#[test]
fn test_list_materials_newest_first_with_filter() {
    let mut library = TextureLibrary::new();
    library
        .add_texture("kitchen-oak-01.png", "image/png", Vec::new())
        .unwrap();
    library
        .add_texture("kitchen-marble-01.jpg", "image/jpeg", Vec::new())
        .unwrap();
    library
        .add_texture("bedroom-oak-02.png", "image/png", Vec::new())
        .unwrap();

    let all = library.list_materials(None);
    let names: Vec<&str> = all.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["bedroom-oak-02", "kitchen-marble-01", "kitchen-oak-01"]
    );

    assert_eq!(library.list_materials(Some(CATEGORY_ALL)).len(), 3);

    let oak = library.list_materials(Some("oak"));
    assert_eq!(oak.len(), 2);
    assert!(oak.iter().all(|t| t.category == "oak"));

    assert!(library.list_materials(Some("glass")).is_empty());
    assert_eq!(library.categories(), vec!["oak", "marble"]);
}

#[test]
fn test_remove_texture() {
    let mut library = TextureLibrary::new();
    let id = library
        .add_texture("kitchen-oak-01.png", "image/png", Vec::new())
        .unwrap();

    assert!(library.remove_texture(id).is_some());
    assert!(library.remove_texture(id).is_none());
    assert_eq!(library.len(), 0);
}

#[test]
fn test_material_assignments() {
    let mut materials = MaterialAssignments::new();
    assert!(materials.is_empty());

    materials.set(MaterialZone::Door, "kitchen-oak-01");
    materials.set(MaterialZone::Exterior, "white matte");
    assert_eq!(materials.get(MaterialZone::Door), Some("kitchen-oak-01"));
    assert_eq!(materials.get(MaterialZone::Drawer), None);

    let zones: Vec<MaterialZone> = materials.iter().map(|(z, _)| z).collect();
    assert_eq!(zones, vec![MaterialZone::Exterior, MaterialZone::Door]);

    // Blank name clears the zone
    materials.set(MaterialZone::Door, "  ");
    assert_eq!(materials.get(MaterialZone::Door), None);
}

#[test]
fn test_material_assignments_json_shape() {
    let mut materials = MaterialAssignments::new();
    materials.set(MaterialZone::Interior, "birch");

    let json = serde_json::to_string(&materials).unwrap();
    assert_eq!(json, r#"{"interior":"birch"}"#);

    let back: MaterialAssignments = serde_json::from_str(&json).unwrap();
    assert_eq!(back, materials);
}
