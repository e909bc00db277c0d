//! Clipping polygons against convex polygons.
//!
//! Sutherland-Hodgman: the subject is cut by each edge of the convex clip
//! polygon in turn, keeping the part on the clip's interior side. Edge sides
//! come from an exact integer cross product and intersections are solved
//! with the integer line-line determinant, so results only depend on the
//! input coordinates (intersections truncate toward zero).

use log::trace;

use crate::math::vec2::Point;
use crate::polygon::SimplePolygon;

/// One directed edge of the clip polygon.
struct ClipEdge {
    from: Point,
    to: Point,
    /// Negates the side test for clip polygons wound the other way.
    flip: bool,
}

impl ClipEdge {
    fn new(from: Point, to: Point, flip: bool) -> Self {
        Self { from, to, flip }
    }

    /// Signed side of `p`; negative is interior, zero counts as exterior.
    fn side(&self, p: Point) -> i128 {
        let (c1, c2) = (self.from, self.to);
        let side = (c2.x as i128 - c1.x as i128) * (p.y as i128 - c1.y as i128)
            - (c2.y as i128 - c1.y as i128) * (p.x as i128 - c1.x as i128);
        if self.flip {
            -side
        } else {
            side
        }
    }

    fn is_inside(&self, p: Point) -> bool {
        self.side(p) < 0
    }

    /// Where the line through `t1`/`t2` meets this edge's line.
    ///
    /// `None` when the lines are parallel.
    fn intersection(&self, t1: Point, t2: Point) -> Option<Point> {
        let (cx1, cy1) = (self.from.x as i128, self.from.y as i128);
        let (cx2, cy2) = (self.to.x as i128, self.to.y as i128);
        let (tx1, ty1) = (t1.x as i128, t1.y as i128);
        let (tx2, ty2) = (t2.x as i128, t2.y as i128);

        let div = (cx1 - cx2) * (ty1 - ty2) - (cy1 - cy2) * (tx1 - tx2);
        if div == 0 {
            trace!("parallel clip edge {:?} -> {:?}, skipping intersection", self.from, self.to);
            return None;
        }
        let c = cx1 * cy2 - cy1 * cx2;
        let t = tx1 * ty2 - ty1 * tx2;
        let x = (c * (tx1 - tx2) - (cx1 - cx2) * t) / div;
        let y = (c * (ty1 - ty2) - (cy1 - cy2) * t) / div;
        Some(Point::new(x as i32, y as i32))
    }
}

/// Twice the signed shoelace area; negative for hull winding.
fn signed_area2(polygon: &SimplePolygon) -> i128 {
    let Some(last) = polygon.len().checked_sub(1) else {
        return 0;
    };
    let mut prev = Point::new(polygon.x(last), polygon.y(last));
    let mut area = 0;
    for p in polygon.iter() {
        area += prev.x as i128 * p.y as i128 - p.x as i128 * prev.y as i128;
        prev = p;
    }
    area
}

impl SimplePolygon {
    /// Clips this polygon in place to the interior of `convex`.
    ///
    /// `convex` may be wound either way. Clipping stops as soon as fewer
    /// than three vertices remain, leaving whatever is left; a disjoint
    /// subject usually ends up empty.
    pub fn intersect_with_convex(&mut self, convex: &SimplePolygon) {
        let Some(last) = convex.len().checked_sub(1) else {
            return;
        };
        let flip = signed_area2(convex) > 0;
        let mut scratch = SimplePolygon::with_capacity(self.len() + convex.len());

        let mut c1 = Point::new(convex.x(last), convex.y(last));
        for (i, c2) in convex.iter().enumerate() {
            if self.len() < 3 {
                trace!("clip stopped at edge {i} with {} vertices left", self.len());
                return;
            }
            let edge = ClipEdge::new(c1, c2, flip);
            scratch.clear();

            let mut t1 = Point::new(self.x(self.len() - 1), self.y(self.len() - 1));
            let mut t1_inside = edge.is_inside(t1);
            for t2 in self.iter() {
                let t2_inside = edge.is_inside(t2);
                if t1_inside && t2_inside {
                    scratch.push_right(t2.x, t2.y);
                } else if t1_inside != t2_inside {
                    if let Some(p) = edge.intersection(t1, t2) {
                        scratch.push_right(p.x, p.y);
                    }
                    if t2_inside {
                        scratch.push_right(t2.x, t2.y);
                    }
                }
                t1 = t2;
                t1_inside = t2_inside;
            }

            std::mem::swap(self, &mut scratch);
            c1 = c2;
        }
    }
}

/// Returns `subject` clipped to the interior of `clip`, leaving both inputs
/// untouched.
pub fn clip_to_convex(subject: &SimplePolygon, clip: &SimplePolygon) -> SimplePolygon {
    let mut clipped = subject.clone();
    clipped.intersect_with_convex(clip);
    clipped
}
