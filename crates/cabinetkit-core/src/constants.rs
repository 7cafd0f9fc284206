//! Dimension bounds and shared tolerances (all lengths in centimeters).

/// Lowest allowed ceiling height.
pub const MIN_CEILING_HEIGHT: f64 = 200.0;
/// Highest allowed ceiling height.
pub const MAX_CEILING_HEIGHT: f64 = 300.0;
/// Ceiling height of a fresh design.
pub const DEFAULT_CEILING_HEIGHT: f64 = 240.0;

/// Narrowest cabinet.
pub const MIN_CABINET_WIDTH: f64 = 30.0;
/// Widest cabinet.
pub const MAX_CABINET_WIDTH: f64 = 120.0;
/// Shortest cabinet body (tall archetype, or either unit of a split cabinet).
pub const MIN_CABINET_HEIGHT: f64 = 30.0;

/// Width of a newly added cabinet.
pub const DEFAULT_CABINET_WIDTH: f64 = 60.0;
/// Height of a newly added tall cabinet.
pub const DEFAULT_CABINET_HEIGHT: f64 = 220.0;

/// Default split cabinet: base unit height.
pub const DEFAULT_LOWER_HEIGHT: f64 = 85.0;
/// Default split cabinet: wall unit height.
pub const DEFAULT_UPPER_HEIGHT: f64 = 70.0;
/// Default split cabinet: floor to underside of the wall unit.
pub const DEFAULT_UPPER_ELEVATION: f64 = 150.0;

/// Doors narrower than this render as a single hinged leaf.
pub const SINGLE_DOOR_MAX_WIDTH: f64 = 30.0;

/// Narrowest explicit door width.
pub const MIN_DOOR_WIDTH: f64 = 10.0;

/// Thinnest accessory an edit may produce.
pub const MIN_ACCESSORY_HEIGHT: f64 = 0.5;

/// Tolerance used when comparing edges; touching ranges count as overlapping.
pub const EDGE_TOLERANCE: f64 = 1e-3;
