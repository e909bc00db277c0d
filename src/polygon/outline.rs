//! Boundary iteration for path-drawing backends.

use super::SimplePolygon;
use crate::math::affine::AffineTransform;

/// One step of a polygon outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

impl PathSegment {
    pub fn point(&self) -> (f64, f64) {
        match *self {
            PathSegment::MoveTo { x, y } | PathSegment::LineTo { x, y } => (x, y),
        }
    }
}

/// Lazy outline of a [`SimplePolygon`].
///
/// Starts with a move to the last vertex, then draws a line to every vertex
/// in order, which closes the loop. Paths are even-odd filled. Call
/// [`Shape::outline`](super::Shape::outline) again to restart.
#[derive(Debug, Clone)]
pub struct Outline<'a> {
    polygon: &'a SimplePolygon,
    transform: Option<AffineTransform>,
    /// `None` before the initial move.
    next: Option<usize>,
}

impl<'a> Outline<'a> {
    pub(super) fn new(polygon: &'a SimplePolygon, transform: Option<AffineTransform>) -> Self {
        Self {
            polygon,
            transform,
            next: None,
        }
    }

    fn vertex(&self, index: usize) -> (f64, f64) {
        let x = self.polygon.x(index) as f64;
        let y = self.polygon.y(index) as f64;
        match &self.transform {
            Some(t) => t.apply(x, y),
            None => (x, y),
        }
    }
}

impl Iterator for Outline<'_> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.polygon.len();
        match self.next {
            _ if len == 0 => None,
            None => {
                self.next = Some(0);
                let (x, y) = self.vertex(len - 1);
                Some(PathSegment::MoveTo { x, y })
            }
            Some(i) if i < len => {
                self.next = Some(i + 1);
                let (x, y) = self.vertex(i);
                Some(PathSegment::LineTo { x, y })
            }
            Some(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.polygon.len();
        let remaining = match self.next {
            _ if len == 0 => 0,
            None => len + 1,
            Some(i) => len.saturating_sub(i),
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Outline<'_> {}
