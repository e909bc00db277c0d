//! Scene geometry and projection for tile-based 3D worlds.
//!
//! This crate turns entities positioned in a tiled world into 2D screen
//! coordinates for overlay rendering, and provides the geometry needed to
//! draw clipped shapes on top of the 3D view. Everything is integer,
//! deterministic and free of I/O.
//!
//! # Quick Start
//!
//! ```ignore
//! use tilescape::prelude::*;
//!
//! let projector = Projector::new(&camera, viewport);
//! let (xs, ys) = projector.project(center, 0, &model_xs, &model_ys, &model_zs, usize::MAX);
//! let hull = convex_hull(&xs, &ys);
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod clipper;
pub mod coords;
pub mod error;
pub mod height;
pub mod hull;
pub mod math;
pub mod polygon;
pub mod projection;
pub mod trig;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use coords::{InstanceTemplates, LocalPoint, SceneBase, TemplateChunk, WorldPoint};
pub use error::GridError;
pub use height::TileHeights;
pub use hull::{convex_hull, convex_hull_points, convex_hull_screen};
pub use polygon::{Outline, PathSegment, Shape, SimplePolygon};
pub use projection::{Projector, ScreenPoint, Viewport};
pub use trig::TrigTable;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use tilescape::prelude::*;
/// ```
pub mod prelude {
    // Projection
    pub use crate::camera::Camera;
    pub use crate::projection::{Projector, ScreenPoint, Viewport};
    pub use crate::trig::TrigTable;

    // Coordinates
    pub use crate::coords::{InstanceTemplates, LocalPoint, SceneBase, TemplateChunk, WorldPoint};
    pub use crate::height::TileHeights;

    // Geometry
    pub use crate::hull::{convex_hull, convex_hull_points, convex_hull_screen};
    pub use crate::polygon::{PathSegment, Shape, SimplePolygon};

    // Math
    pub use crate::math::affine::AffineTransform;
    pub use crate::math::rect::{Bounds, Rect};
    pub use crate::math::vec2::Point;
    pub use crate::math::vec3::Vec3i;
}
