//! Cabinet design data model.
//!
//! A [`Design`] owns an ordered row of [`Cabinet`]s, each owning its
//! [`Accessory`] set. All lengths are centimeters.

pub mod accessory;
pub mod cabinet;
pub mod design;

pub use accessory::{Accessory, AccessoryKind, AccessoryType, Hinge, LedPlacement};
pub use cabinet::{Archetype, Bay, Cabinet, CabinetProfile};
pub use design::{Design, FloorFinish};
