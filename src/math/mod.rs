//! Small value types shared by the projector and the polygon code.
//!
//! Screen and world geometry here is integer; only the affine transform and
//! query rectangles are floating point, since they come from a rendering
//! backend.

pub mod affine;
pub mod rect;
pub mod vec2;
pub mod vec3;
