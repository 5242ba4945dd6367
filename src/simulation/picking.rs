//! Pointer picking for sandbox objects
//!
//! Shape-exhaustive point-containment predicates resolve a click to the
//! topmost object under it. Topmost means most-recently-added: the scan
//! runs in reverse insertion order and stops at the first hit, so one
//! click selects at most one object.

use super::shapes::Shape;
use super::states::{DynamicObject, ObjectId, SimulationState};
use super::vector::{distance_point_to_segment, from_angle, point_in_triangle, NVec2};

/// Pick distance for line shapes, in canvas units
pub const LINE_PICK_TOLERANCE: f64 = 5.0;

/// True when `point` lies on `obj`'s silhouette
pub fn hit_test(obj: &DynamicObject, point: NVec2) -> bool {
    let position = obj.position;
    match obj.shape {
        Shape::Circle { radius } => {
            // squared-distance comparison, no square root needed
            let d = position - point;
            d.norm_squared() <= radius * radius
        }
        Shape::Box { w, h } => {
            // the anchor is the top-left corner; test against the center
            let center = NVec2::new(position.x + w / 2.0, position.y + h / 2.0);
            (point.x - center.x).abs() <= w / 2.0 && (point.y - center.y).abs() <= h / 2.0
        }
        Shape::Line { length, angle } => {
            let start = position;
            let end = position + from_angle(angle) * length;
            distance_point_to_segment(point, start, end) <= LINE_PICK_TOLERANCE
        }
        Shape::Triangle { w, h } => {
            // base (x - w/2, y) -> (x + w/2, y), apex (x, y - h)
            let a = NVec2::new(position.x - w / 2.0, position.y);
            let b = NVec2::new(position.x + w / 2.0, position.y);
            let c = NVec2::new(position.x, position.y - h);
            point_in_triangle(point, a, b, c)
        }
    }
}

/// Resolve `point` to the topmost object containing it
/// No hit leaves the selection untouched; the add is the host's move
pub fn resolve_hit(state: &SimulationState, point: NVec2) -> Option<ObjectId> {
    state
        .objects
        .iter()
        .rev()
        .find(|o| hit_test(o, point))
        .map(|o| o.id)
}
