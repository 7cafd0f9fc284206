//! Label font lookup.
//!
//! Dimension and cabinet labels use one sans-serif face from the system font
//! database, loaded on first use. Without a usable face the raster renderer
//! skips labels; SVG output names the family and leaves lookup to the viewer.

use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use rusttype::Font;
use std::sync::OnceLock;

/// Families tried in order for labels
const LABEL_FAMILIES: &[Family<'static>] = &[
    Family::Name("DejaVu Sans"),
    Family::Name("Liberation Sans"),
    Family::Name("Arial"),
    Family::SansSerif,
];

/// The sans-serif face used for drawing labels
pub fn label_font() -> Option<&'static Font<'static>> {
    static LABEL: OnceLock<Option<Font<'static>>> = OnceLock::new();
    LABEL
        .get_or_init(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            tracing::debug!("Loaded {} system font faces", db.len());

            let font = load_label_face(&db);
            if font.is_none() {
                tracing::warn!("No sans-serif system font found, labels will be skipped");
            }
            font
        })
        .as_ref()
}

fn load_label_face(db: &Database) -> Option<Font<'static>> {
    let query = Query {
        families: LABEL_FAMILIES,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    let face = db.face(db.query(&query)?)?;

    let bytes = match &face.source {
        Source::File(path) | Source::SharedFile(path, _) => std::fs::read(path).ok()?,
        Source::Binary(data) => data.as_ref().as_ref().to_vec(),
    };
    Font::try_from_vec_and_index(bytes, face.index)
}
