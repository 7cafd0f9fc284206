//! Exported documents import back to the same design.

use cabinetkit_designer::{export_design, import_design, Design};
use proptest::prelude::*;

use crate::invariants::{apply, edit_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn export_then_import_is_identity(edits in prop::collection::vec(edit_strategy(), 1..40)) {
        let mut design = Design::new("Random");
        for edit in &edits {
            apply(&mut design, edit);
        }

        let json = export_design(&design).unwrap();
        let imported = import_design(&json).unwrap();
        prop_assert_eq!(imported, design);
    }

    #[test]
    fn odd_lengths_survive_export(width in 30.0..120.0f64, height in 30.0..240.0f64, y in 0.0..240.0f64) {
        let mut design = Design::new("Lengths");
        design.set_cabinet_width(0, width).unwrap();
        design.set_cabinet_height(0, height).unwrap();
        let shelf = design
            .add_accessory(0, cabinetkit_designer::AccessoryType::Shelf)
            .unwrap();
        design.set_accessory_y(0, shelf, y).unwrap();

        let imported = import_design(&export_design(&design).unwrap()).unwrap();
        prop_assert_eq!(imported.cabinets()[0].width.to_bits(), width.to_bits());
        prop_assert_eq!(imported, design);
    }
}
