//! Hit testing and bounds for rendering backends.

use super::{Outline, SimplePolygon};
use crate::math::affine::AffineTransform;
use crate::math::rect::{Bounds, Rect};
use crate::math::vec2::Point;

/// The geometry a rendering backend needs from a closed 2D shape.
pub trait Shape {
    /// Integer bounding box of the vertices.
    fn bounds(&self) -> Bounds;

    /// Bounding box as a floating point rectangle.
    fn bounds_2d(&self) -> Rect {
        self.bounds().to_rect()
    }

    /// Even-odd containment of `(x, y)`.
    fn contains_point(&self, x: f64, y: f64) -> bool;

    fn contains(&self, p: Point) -> bool {
        self.contains_point(p.x as f64, p.y as f64)
    }

    /// Whether the shape's boundary crosses any edge of `rect`.
    fn intersects_rect(&self, rect: &Rect) -> bool;

    /// Whether `rect` lies entirely inside the shape.
    fn contains_rect(&self, rect: &Rect) -> bool {
        self.bounds_2d().contains_rect(rect) && !self.intersects_rect(rect)
    }

    /// Boundary as path segments, optionally mapped through `transform`.
    fn outline(&self, transform: Option<AffineTransform>) -> Outline<'_>;
}

impl Shape for SimplePolygon {
    /// Empty polygons report an inverted box at the integer extremes.
    fn bounds(&self) -> Bounds {
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
        let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
        for p in self.iter() {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Bounds::new(
            min_x,
            min_y,
            max_x.wrapping_sub(min_x),
            max_y.wrapping_sub(min_y),
        )
    }

    /// Points on the minimum-X and maximum-Y edges count as inside, points on
    /// the maximum-X and minimum-Y edges as outside. Fewer than three
    /// vertices contain nothing.
    fn contains_point(&self, x: f64, y: f64) -> bool {
        self.len() >= 3 && self.crossings(x, y, false) & 1 == 1
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);
        // rays along the top and bottom edges, then (transposed) the sides
        self.crossings(x0, y0, false) != self.crossings(x1, y0, false)
            || self.crossings(x0, y1, false) != self.crossings(x1, y1, false)
            || self.crossings(y0, x0, true) != self.crossings(y1, x0, true)
            || self.crossings(y0, x1, true) != self.crossings(y1, x1, true)
    }

    fn outline(&self, transform: Option<AffineTransform>) -> Outline<'_> {
        Outline::new(self, transform)
    }
}

impl SimplePolygon {
    /// Counts edges crossed by a ray from `(px, py)` toward negative X.
    ///
    /// With `transpose` the polygon's axes are swapped, so the ray runs
    /// toward negative Y and `px`/`py` are given in swapped order too.
    /// Horizontal edges never count. An edge straddles the ray when exactly
    /// one endpoint has `py <= y`, so a shared vertex is only counted once.
    fn crossings(&self, px: f64, py: f64, transpose: bool) -> u32 {
        let Some(last) = self.len().checked_sub(1) else {
            return 0;
        };
        let (xs, ys) = if transpose {
            (self.live_ys(), self.live_xs())
        } else {
            (self.live_xs(), self.live_ys())
        };

        let mut count = 0;
        let (mut x0, mut y0) = (xs[last], ys[last]);
        for (&x1, &y1) in xs.iter().zip(ys) {
            if y0 != y1 {
                let (fx0, fy0) = (x0 as f64, y0 as f64);
                let (fx1, fy1) = (x1 as f64, y1 as f64);
                if (py <= fy0) != (py <= fy1) {
                    let left = px < fx0;
                    if left == (px < fx1) {
                        if !left {
                            count += 1;
                        }
                    } else if ((fx1 - fx0) * (py - fy0) - (px - fx0) * (fy1 - fy0) > 0.0)
                        == (fy0 > fy1)
                    {
                        count += 1;
                    }
                }
            }
            x0 = x1;
            y0 = y1;
        }
        count
    }
}
