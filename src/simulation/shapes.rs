//! Shape descriptors for sandbox objects
//!
//! The shape set is closed: circle, axis-aligned box (rect or square,
//! a square is just `w == h`), line segment, and isoceles triangle.
//! Every variant is anchored at the owning object's `position` with a
//! fixed convention that picking and rendering both rely on:
//! - `Circle`: `position` is the center
//! - `Box`: `position` is the top-left corner
//! - `Line`: starts at `position`, extends `length` at `angle` radians
//! - `Triangle`: base centered on `position`, apex at `(x, y - h)`

/// Geometry of a single sandbox object, anchored at its `position`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Box { w: f64, h: f64 },
    Line { length: f64, angle: f64 }, // angle in radians
    Triangle { w: f64, h: f64 },
}
