//! Constraint resolution for cabinets and their accessories.
//!
//! Everything here clamps or snaps; structural edits never fail. The
//! invariants kept are:
//! - every accessory lies inside one bay of its cabinet, never across the
//!   gap between the units of a split cabinet
//! - drawers whose resolved horizontal spans overlap never overlap vertically
//! - cabinet dimensions stay within their bounds for the current ceiling
//!
//! A drawer that no longer fits anywhere after a cabinet shrinks is removed
//! rather than squashed; callers report it through [`EditOutcome`].
//!
//! Horizontal spans are resolved against dividers: an accessory sees only the
//! nearest divider on each side among those whose vertical range touches its
//! own.

use cabinetkit_core::constants::{
    EDGE_TOLERANCE, MAX_CABINET_WIDTH, MIN_ACCESSORY_HEIGHT, MIN_CABINET_HEIGHT,
    MIN_CABINET_WIDTH, MIN_DOOR_WIDTH,
};
use cabinetkit_core::units::approx_eq;
use uuid::Uuid;

use crate::model::{Accessory, AccessoryKind, Bay, Cabinet, CabinetProfile};

/// Result of an edit that may have been clamped or snapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// The value was applied as requested
    Applied,
    /// The value was changed to keep the design valid
    Adjusted { requested: f64, applied: f64 },
    /// Drawers that no longer fit were removed while applying the value
    DrawersRemoved {
        requested: f64,
        applied: f64,
        removed: usize,
    },
}

impl EditOutcome {
    /// Compare a requested value with the one that ended up in the model
    pub fn from_values(requested: f64, applied: f64) -> Self {
        if approx_eq(requested, applied) {
            EditOutcome::Applied
        } else {
            EditOutcome::Adjusted { requested, applied }
        }
    }

    /// Like [`from_values`](Self::from_values), noting any removed drawers
    pub fn with_removed(requested: f64, applied: f64, removed: usize) -> Self {
        if removed == 0 {
            Self::from_values(requested, applied)
        } else {
            EditOutcome::DrawersRemoved {
                requested,
                applied,
                removed,
            }
        }
    }

    pub fn is_adjusted(&self) -> bool {
        matches!(
            self,
            EditOutcome::Adjusted { .. } | EditOutcome::DrawersRemoved { .. }
        )
    }

    /// Number of drawers removed by the edit
    pub fn removed_drawers(&self) -> usize {
        match self {
            EditOutcome::DrawersRemoved { removed, .. } => *removed,
            _ => 0,
        }
    }
}

/// Horizontal interval in cabinet-local centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub right: f64,
}

impl Span {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Overlap with positive length
    pub fn overlaps(&self, other: &Span) -> bool {
        self.left < other.right - EDGE_TOLERANCE && other.left < self.right - EDGE_TOLERANCE
    }
}

/// Clamp `value` into `[min, max]`, preferring `min` when the range is empty.
/// Non-finite input collapses to `min`.
pub(crate) fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.min(max).max(min)
}

/// Closed ranges that touch or overlap, within tolerance.
pub fn ranges_touch(a_top: f64, a_bottom: f64, b_top: f64, b_bottom: f64) -> bool {
    a_top <= b_bottom + EDGE_TOLERANCE && b_top <= a_bottom + EDGE_TOLERANCE
}

/// Half-open ranges that share more than the tolerance.
pub fn ranges_overlap(a_top: f64, a_bottom: f64, b_top: f64, b_bottom: f64) -> bool {
    a_top < b_bottom - EDGE_TOLERANCE && b_top < a_bottom - EDGE_TOLERANCE
}

/// Usable horizontal span of an accessory in its cabinet.
///
/// Doors and dividers span the full width. Everything else starts from the
/// full width and narrows to the rightmost divider at or left of its anchor
/// and the leftmost divider right of it, counting only dividers whose
/// vertical range touches the accessory's.
pub fn horizontal_span(cabinet: &Cabinet, accessory: &Accessory) -> Span {
    let mut span = Span::new(0.0, cabinet.width);
    if accessory.spans_full_width() {
        return span;
    }

    let x = accessory.anchor_x();
    for divider in cabinet
        .accessories
        .iter()
        .filter(|a| a.is_divider() && a.id != accessory.id)
    {
        if !ranges_touch(divider.y, divider.bottom(), accessory.y, accessory.bottom()) {
            continue;
        }
        let dx = divider.anchor_x();
        if dx <= x + EDGE_TOLERANCE {
            span.left = span.left.max(dx);
        } else {
            span.right = span.right.min(dx);
        }
    }
    span
}

/// Vertical ranges of the other drawers sharing horizontal space with
/// `cabinet.accessories[index]`.
fn stack_neighbors(cabinet: &Cabinet, index: usize) -> Vec<(f64, f64)> {
    let drawer = &cabinet.accessories[index];
    let span = horizontal_span(cabinet, drawer);
    cabinet
        .accessories
        .iter()
        .enumerate()
        .filter(|(i, a)| *i != index && a.is_drawer())
        .filter(|(_, a)| horizontal_span(cabinet, a).overlaps(&span))
        .map(|(_, a)| (a.y, a.bottom()))
        .collect()
}

/// Resolve a requested `y` for the drawer at `index` within its bay.
///
/// Moving down into the nearest neighbor below stops at its top edge; a
/// drawer dragged past a neighbor's top edge jumps to the neighbor's far
/// side instead. Moving up is symmetric. The result is clamped to the bay.
pub fn resolve_drawer_y(cabinet: &Cabinet, index: usize, requested: f64) -> f64 {
    let drawer = &cabinet.accessories[index];
    let bay = cabinet.bay_of(drawer);
    let height = drawer.height;
    let old_y = drawer.y;
    let max_y = (bay.bottom - height).max(bay.top);
    let mut y = clamp_range(requested, bay.top, max_y);
    let neighbors = stack_neighbors(cabinet, index);

    if y > old_y {
        let old_bottom = old_y + height;
        let mut below: Vec<(f64, f64)> = neighbors
            .into_iter()
            .filter(|(top, _)| *top >= old_bottom - EDGE_TOLERANCE)
            .collect();
        below.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (top, bottom) in below {
            if !ranges_overlap(y, y + height, top, bottom) {
                continue;
            }
            if y >= top - EDGE_TOLERANCE && bottom <= max_y + EDGE_TOLERANCE {
                y = bottom;
                continue;
            }
            y = top - height;
            break;
        }
    } else if y < old_y {
        let mut above: Vec<(f64, f64)> = neighbors
            .into_iter()
            .filter(|(_, bottom)| *bottom <= old_y + EDGE_TOLERANCE)
            .collect();
        above.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (top, bottom) in above {
            if !ranges_overlap(y, y + height, top, bottom) {
                continue;
            }
            if y + height <= bottom + EDGE_TOLERANCE && top - height >= bay.top - EDGE_TOLERANCE
            {
                y = top - height;
                continue;
            }
            y = bottom;
            break;
        }
    }

    clamp_range(y, bay.top, max_y)
}

/// Largest height the drawer at `index` may take without its bottom edge
/// crossing the top of a neighbor below it or the bottom of its bay.
pub fn max_drawer_height(cabinet: &Cabinet, index: usize) -> f64 {
    let drawer = &cabinet.accessories[index];
    let bay = cabinet.bay_of(drawer);
    let bottom = drawer.bottom();
    stack_neighbors(cabinet, index)
        .into_iter()
        .filter(|(top, _)| *top >= bottom - EDGE_TOLERANCE)
        .map(|(top, _)| top - drawer.y)
        .fold(bay.bottom - drawer.y, f64::min)
        .max(0.0)
}

/// Clamp a requested accessory height against `limit`.
pub(crate) fn clamp_height(requested: f64, limit: f64) -> f64 {
    let floor = MIN_ACCESSORY_HEIGHT.min(limit);
    clamp_range(requested, floor, limit)
}

/// Clamp `accessory` into `bay`: height first, then position.
pub(crate) fn clamp_into_bay(accessory: &mut Accessory, bay: Bay) {
    accessory.height = clamp_height(accessory.height, bay.height());
    accessory.y = clamp_range(accessory.y, bay.top, bay.bottom - accessory.height);
}

/// Clamp one accessory into a cabinet of the given width and profile.
///
/// The accessory stays in the bay nearest its vertical center.
pub fn clamp_accessory(accessory: &mut Accessory, cabinet_width: f64, profile: &CabinetProfile) {
    let bay = profile.bay_at(accessory.y + accessory.height / 2.0);
    clamp_into_bay(accessory, bay);

    let x = clamp_range(accessory.anchor_x(), 0.0, cabinet_width);
    accessory.set_anchor_x(x);

    if let AccessoryKind::Door {
        width: Some(width), ..
    } = &mut accessory.kind
    {
        *width = clamp_range(*width, MIN_DOOR_WIDTH.min(cabinet_width), cabinet_width);
    }
}

/// Free gaps of `bay` not covered by `blocked`.
fn free_gaps(blocked: &[(f64, f64)], bay: Bay) -> Vec<(f64, f64)> {
    let mut sorted: Vec<(f64, f64)> = blocked
        .iter()
        .copied()
        .filter(|(top, bottom)| ranges_overlap(*top, *bottom, bay.top, bay.bottom))
        .collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut gaps = Vec::new();
    let mut cursor = bay.top;
    for (top, bottom) in sorted {
        if top > cursor {
            gaps.push((cursor, top.min(bay.bottom)));
        }
        cursor = cursor.max(bottom);
        if cursor >= bay.bottom {
            break;
        }
    }
    if cursor < bay.bottom {
        gaps.push((cursor, bay.bottom));
    }
    gaps.retain(|(top, bottom)| bottom > top);
    gaps
}

/// Place a range of `height` as close to `y` as the free gaps of `bay` allow.
///
/// Returns the new `(y, height)`. The height only shrinks when no gap is tall
/// enough, in which case the largest gap is filled; `None` when even that gap
/// is thinner than the minimum accessory height.
fn fit_in_gaps(blocked: &[(f64, f64)], bay: Bay, y: f64, height: f64) -> Option<(f64, f64)> {
    let gaps = free_gaps(blocked, bay);

    let best = gaps
        .iter()
        .filter(|(top, bottom)| bottom - top >= height)
        .map(|(top, bottom)| clamp_range(y, *top, bottom - height))
        .min_by(|a, b| (a - y).abs().total_cmp(&(b - y).abs()));
    if let Some(best) = best {
        return Some((best, height));
    }

    gaps.iter()
        .max_by(|a, b| (a.1 - a.0).total_cmp(&(b.1 - b.0)))
        .filter(|(top, bottom)| bottom - top >= MIN_ACCESSORY_HEIGHT)
        .map(|(top, bottom)| (*top, bottom - top))
}

/// Find room for a drawer of its full height near its `y`, or `None` when
/// the stack it would join has no gap tall enough in its bay.
pub fn find_drawer_slot(cabinet: &Cabinet, drawer: &Accessory) -> Option<f64> {
    let span = horizontal_span(cabinet, drawer);
    let blocked: Vec<(f64, f64)> = cabinet
        .accessories
        .iter()
        .filter(|a| a.is_drawer() && a.id != drawer.id)
        .filter(|a| horizontal_span(cabinet, a).overlaps(&span))
        .map(|a| (a.y, a.bottom()))
        .collect();

    let bay = cabinet.bay_of(drawer);
    fit_in_gaps(&blocked, bay, drawer.y, drawer.height)
        .filter(|(_, height)| *height >= drawer.height)
        .map(|(y, _)| y)
}

/// One pass of drawer settling. Returns the drawers that found no room.
fn settle_pass(cabinet: &mut Cabinet, moved: Option<Uuid>, respect_spans: bool) -> Vec<Accessory> {
    let mut order: Vec<usize> = cabinet
        .accessories
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_drawer())
        .map(|(i, _)| i)
        .collect();
    order.sort_by(|&a, &b| {
        let (da, db) = (&cabinet.accessories[a], &cabinet.accessories[b]);
        (Some(da.id) == moved)
            .cmp(&(Some(db.id) == moved))
            .then(da.y.total_cmp(&db.y))
    });

    let mut placed: Vec<usize> = Vec::new();
    let mut homeless: Vec<usize> = Vec::new();
    for index in order {
        let span = horizontal_span(cabinet, &cabinet.accessories[index]);
        let blocked: Vec<(f64, f64)> = placed
            .iter()
            .map(|&j| &cabinet.accessories[j])
            .filter(|a| !respect_spans || horizontal_span(cabinet, a).overlaps(&span))
            .map(|a| (a.y, a.bottom()))
            .collect();

        let drawer = &cabinet.accessories[index];
        let clashes = blocked
            .iter()
            .any(|(top, bottom)| ranges_overlap(drawer.y, drawer.bottom(), *top, *bottom));
        if !clashes {
            placed.push(index);
            continue;
        }

        let bay = cabinet.bay_of(drawer);
        match fit_in_gaps(&blocked, bay, drawer.y, drawer.height) {
            Some((y, height)) => {
                tracing::debug!(
                    "Drawer {} moved from y={:.1} h={:.1} to y={:.1} h={:.1}",
                    drawer.id,
                    drawer.y,
                    drawer.height,
                    y,
                    height
                );
                let drawer = &mut cabinet.accessories[index];
                drawer.y = y;
                drawer.height = height;
                placed.push(index);
            }
            None => homeless.push(index),
        }
    }

    homeless.sort_unstable_by(|a, b| b.cmp(a));
    homeless
        .into_iter()
        .map(|index| cabinet.accessories.remove(index))
        .collect()
}

/// Whether two drawers sharing horizontal space overlap vertically.
pub fn has_drawer_overlap(cabinet: &Cabinet) -> bool {
    let drawers: Vec<&Accessory> = cabinet.accessories.iter().filter(|a| a.is_drawer()).collect();
    drawers.iter().enumerate().any(|(i, a)| {
        drawers[i + 1..].iter().any(|b| {
            horizontal_span(cabinet, a).overlaps(&horizontal_span(cabinet, b))
                && ranges_overlap(a.y, a.bottom(), b.y, b.bottom())
        })
    })
}

/// Separate overlapping drawers.
///
/// Drawers keep their place in `y` order; a drawer that clashes with one
/// already placed moves to the nearest free gap of its bay, shrinking only
/// when no gap fits. A drawer left without a usable gap is removed and
/// returned. The `moved` drawer, if any, is placed last so its neighbors stay
/// put. Moving a drawer can change which dividers it sees, so passes repeat;
/// if they do not converge the stack is settled ignoring spans.
pub fn settle_drawers(cabinet: &mut Cabinet, moved: Option<Uuid>) -> Vec<Accessory> {
    let mut removed = Vec::new();
    let mut converged = false;
    for _ in 0..4 {
        removed.extend(settle_pass(cabinet, moved, true));
        if !has_drawer_overlap(cabinet) {
            converged = true;
            break;
        }
    }
    if !converged {
        tracing::debug!("Drawer stack in {} settled as one column", cabinet.name);
        removed.extend(settle_pass(cabinet, moved, false));
    }

    for drawer in &removed {
        tracing::warn!(
            "Removed drawer {} from {}: no room left in its stack",
            drawer.id,
            cabinet.name
        );
    }
    removed
}

/// Clamp the profile to the bounds allowed under `ceiling`.
///
/// Split units are clamped lower first, then upper, then elevation.
pub fn clamp_profile(profile: &mut CabinetProfile, ceiling: f64) {
    match profile {
        CabinetProfile::Tall { height } => {
            *height = clamp_range(*height, MIN_CABINET_HEIGHT, ceiling);
        }
        CabinetProfile::Split {
            lower_height,
            upper_height,
            upper_elevation,
            ..
        } => {
            *lower_height = clamp_range(
                *lower_height,
                MIN_CABINET_HEIGHT,
                ceiling - MIN_CABINET_HEIGHT,
            );
            *upper_height =
                clamp_range(*upper_height, MIN_CABINET_HEIGHT, ceiling - *lower_height);
            *upper_elevation =
                clamp_range(*upper_elevation, *lower_height, ceiling - *upper_height);
        }
    }
}

/// Bring a whole cabinet back within bounds: width, profile, accessories and
/// the drawer stack. Returns the drawers that had to be removed.
pub fn clamp_cabinet(cabinet: &mut Cabinet, ceiling: f64) -> Vec<Accessory> {
    cabinet.width = clamp_range(cabinet.width, MIN_CABINET_WIDTH, MAX_CABINET_WIDTH);
    clamp_profile(&mut cabinet.profile, ceiling);
    revalidate_accessories(cabinet)
}

/// Clamp every accessory to the cabinet's current size and settle drawers.
/// Returns the drawers that had to be removed.
pub fn revalidate_accessories(cabinet: &mut Cabinet) -> Vec<Accessory> {
    let width = cabinet.width;
    for accessory in &mut cabinet.accessories {
        clamp_accessory(accessory, width, &cabinet.profile);
    }
    settle_drawers(cabinet, None)
}
