//! Convex hull of projected screen points.
//!
//! Jarvis march (gift wrapping), `O(n * h)` for `n` points and `h` hull
//! vertices.
//!
//! Hull vertices come out starting at the leftmost point (lowest `y` on
//! ties) and have negative shoelace area: on a Y-down screen the walk goes
//! down the left side first. [`SimplePolygon::intersect_with_convex`]
//! accepts either winding.

use log::debug;

use crate::math::vec2::Point;
use crate::polygon::SimplePolygon;
use crate::projection::{ScreenPoint, CULLED};

/// Hull of parallel screen coordinate arrays.
///
/// Entries whose `x` is the culled sentinel are skipped, and only the first
/// `min(xs.len(), ys.len())` entries are read. Returns `None` when fewer
/// than three points remain or the march fails to close. Collinear input
/// yields a two-vertex hull spanning the extremes.
pub fn convex_hull(xs: &[i32], ys: &[i32]) -> Option<SimplePolygon> {
    let points: Vec<Point> = xs
        .iter()
        .zip(ys)
        .filter(|&(&x, _)| x != CULLED)
        .map(|(&x, &y)| Point::new(x, y))
        .collect();
    jarvis(&points)
}

/// Hull of a point list, as a point list.
pub fn convex_hull_points(points: &[Point]) -> Option<Vec<Point>> {
    let valid: Vec<Point> = points.iter().copied().filter(|p| p.x != CULLED).collect();
    jarvis(&valid).map(|hull| hull.to_points())
}

/// Hull of tagged projector output, ignoring culled points.
pub fn convex_hull_screen(points: &[ScreenPoint]) -> Option<SimplePolygon> {
    let valid: Vec<Point> = points.iter().filter_map(ScreenPoint::point).collect();
    jarvis(&valid)
}

fn jarvis(points: &[Point]) -> Option<SimplePolygon> {
    if points.len() < 3 {
        return None;
    }

    let start = leftmost(points);
    let mut current = start;
    let mut hull = SimplePolygon::with_capacity(16);
    loop {
        let c = points[current];
        hull.push_right(c.x, c.y);
        if hull.len() > points.len() {
            debug!(
                "convex hull did not close after {} of {} points",
                hull.len(),
                points.len()
            );
            return None;
        }

        // every other point ends up on one side of current -> next
        let mut next = 0;
        for (i, &p) in points.iter().enumerate().skip(1) {
            let n = points[next];
            let cp = c.cross(p, n);
            if cp > 0 || (cp == 0 && c.distance_squared(p) > c.distance_squared(n)) {
                next = i;
            }
        }

        current = next;
        if current == start {
            return Some(hull);
        }
    }
}

/// Index of the lowest-x point, lowest y breaking ties.
fn leftmost(points: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            best = i;
        }
    }
    best
}
