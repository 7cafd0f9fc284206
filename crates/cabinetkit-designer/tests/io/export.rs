use cabinetkit_designer::export::{write_image, write_svg};
use cabinetkit_designer::{
    encode_jpeg, encode_png, render_design, render_design_svg, AccessoryType, Design,
    RenderOptions, Viewport,
};

fn sample_design() -> Design {
    let mut design = Design::new("Hall");
    design.add_accessory(0, AccessoryType::Door).unwrap();
    design.add_cabinet(90.0, 200.0);
    design
}

#[test]
fn test_export_png_and_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let design = sample_design();
    let image = render_design(&design, &Viewport::default(), &RenderOptions::export());

    let png_path = dir.path().join("out/hall.png");
    write_image(&encode_png(&image).unwrap(), &png_path).unwrap();
    let decoded = image::open(&png_path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), image.dimensions());

    let jpeg_path = dir.path().join("out/hall.jpg");
    write_image(&encode_jpeg(&image, 85).unwrap(), &jpeg_path).unwrap();
    let decoded = image::open(&jpeg_path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), image.dimensions());
}

#[test]
fn test_jpeg_quality_affects_size() {
    let image = render_design(
        &sample_design(),
        &Viewport::default(),
        &RenderOptions::export(),
    );
    let low = encode_jpeg(&image, 20).unwrap();
    let high = encode_jpeg(&image, 95).unwrap();
    assert!(low.bytes.len() < high.bytes.len());
}

#[test]
fn test_export_svg() {
    let dir = tempfile::tempdir().unwrap();
    let svg = render_design_svg(
        &sample_design(),
        &Viewport::default(),
        &RenderOptions::export(),
    );
    let path = dir.path().join("hall.svg");
    write_svg(&svg, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, svg);
    assert!(written.trim_end().ends_with("</svg>"));
    assert!(written.contains("Total 150cm"));
}
