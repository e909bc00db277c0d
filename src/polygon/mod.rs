//! Growable double-ended vertex buffer.
//!
//! [`SimplePolygon`] stores integer vertices in two parallel slabs with a
//! live window `[left, left + len)`. Vertices can be pushed or popped at
//! either end; when the window runs into a slab boundary the slabs are
//! reallocated `GROW` entries larger, and a left-side growth shifts the
//! existing window right to make room.
//!
//! The same type is the hull output, the clip operand and the shape handed
//! to rendering backends (see [`Shape`] and [`Outline`]).

mod outline;
mod shape;

pub use outline::{Outline, PathSegment};
pub use shape::Shape;

use crate::math::vec2::Point;

/// Slots added each time a slab has to grow.
const GROW: usize = 16;

/// Default slab capacity for [`SimplePolygon::new`].
const DEFAULT_CAPACITY: usize = 32;

/// A double-ended sequence of integer vertices.
#[derive(Clone, Debug)]
pub struct SimplePolygon {
    xs: Vec<i32>,
    ys: Vec<i32>,
    /// Slab index of the first live vertex.
    left: usize,
    len: usize,
}

impl SimplePolygon {
    /// Creates an empty polygon with room to push in both directions.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty polygon whose window starts centered in a slab of
    /// `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: vec![0; capacity],
            ys: vec![0; capacity],
            left: capacity / 2,
            len: 0,
        }
    }

    /// Builds a polygon from parallel coordinate arrays.
    ///
    /// Uses the shorter of the two lengths.
    pub fn from_arrays(xs: &[i32], ys: &[i32]) -> Self {
        let len = xs.len().min(ys.len());
        Self {
            xs: xs[..len].to_vec(),
            ys: ys[..len].to_vec(),
            left: 0,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every vertex, keeping the slabs. Later pushes fill the slab
    /// from its start.
    pub fn clear(&mut self) {
        self.left = 0;
        self.len = 0;
    }

    // =========================================================================
    // Push / pop
    // =========================================================================

    pub fn push_left(&mut self, x: i32, y: i32) {
        if self.left == 0 {
            self.expand_left(GROW);
        }
        self.left -= 1;
        self.xs[self.left] = x;
        self.ys[self.left] = y;
        self.len += 1;
    }

    pub fn push_right(&mut self, x: i32, y: i32) {
        let slot = self.left + self.len;
        if slot >= self.xs.len() {
            self.expand_right(GROW);
        }
        self.xs[slot] = x;
        self.ys[slot] = y;
        self.len += 1;
    }

    /// Removes the first vertex. Popping an empty polygon does nothing.
    pub fn pop_left(&mut self) -> Option<Point> {
        let first = self.get(0)?;
        self.left += 1;
        self.len -= 1;
        Some(first)
    }

    /// Removes the last vertex. Popping an empty polygon does nothing.
    pub fn pop_right(&mut self) -> Option<Point> {
        let last = self.get(self.len.checked_sub(1)?)?;
        self.len -= 1;
        Some(last)
    }

    fn expand_left(&mut self, grow: usize) {
        let capacity = self.xs.len() + grow;
        for slab in [&mut self.xs, &mut self.ys] {
            let mut grown = vec![0; capacity];
            grown[grow..].copy_from_slice(&slab[..]);
            *slab = grown;
        }
        self.left += grow;
    }

    fn expand_right(&mut self, grow: usize) {
        let capacity = self.xs.len() + grow;
        self.xs.resize(capacity, 0);
        self.ys.resize(capacity, 0);
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// X of vertex `index`.
    ///
    /// # Panics
    ///
    /// If `index >= len()` in debug builds. Release builds read whatever the
    /// slab holds at that slot, or panic past its end.
    #[inline]
    pub fn x(&self, index: usize) -> i32 {
        debug_assert!(index < self.len, "vertex {index} out of {}", self.len);
        self.xs[self.left + index]
    }

    /// Y of vertex `index`. Same contract as [`SimplePolygon::x`].
    #[inline]
    pub fn y(&self, index: usize) -> i32 {
        debug_assert!(index < self.len, "vertex {index} out of {}", self.len);
        self.ys[self.left + index]
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        (index < self.len).then(|| Point::new(self.x(index), self.y(index)))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.live_xs()
            .iter()
            .zip(self.live_ys())
            .map(|(&x, &y)| Point::new(x, y))
    }

    pub fn to_points(&self) -> Vec<Point> {
        self.iter().collect()
    }

    /// Reverses vertex order in place.
    pub fn reverse(&mut self) {
        let window = self.left..self.left + self.len;
        self.xs[window.clone()].reverse();
        self.ys[window].reverse();
    }

    /// Copies the vertices into `xs`/`ys` starting at `offset`.
    ///
    /// # Panics
    ///
    /// If either destination has fewer than `offset + len()` slots.
    pub fn copy_to(&self, xs: &mut [i32], ys: &mut [i32], offset: usize) {
        let end = offset + self.len;
        xs[offset..end].copy_from_slice(self.live_xs());
        ys[offset..end].copy_from_slice(self.live_ys());
    }

    /// Appends this polygon's vertices to the right end of `other`.
    pub fn append_to(&self, other: &mut SimplePolygon) {
        if self.is_empty() {
            return;
        }
        let end = other.left + other.len;
        if end + self.len > other.xs.len() {
            other.expand_right(self.len);
        }
        self.copy_to(&mut other.xs, &mut other.ys, end);
        other.len += self.len;
    }

    fn live_xs(&self) -> &[i32] {
        &self.xs[self.left..self.left + self.len]
    }

    fn live_ys(&self) -> &[i32] {
        &self.ys[self.left..self.left + self.len]
    }
}

impl Default for SimplePolygon {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertex-wise equality, ignoring where the window sits in the slabs.
impl PartialEq for SimplePolygon {
    fn eq(&self, other: &Self) -> bool {
        self.live_xs() == other.live_xs() && self.live_ys() == other.live_ys()
    }
}

impl Eq for SimplePolygon {}

impl FromIterator<Point> for SimplePolygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut polygon = SimplePolygon::with_capacity(0);
        for p in iter {
            polygon.push_right(p.x, p.y);
        }
        polygon
    }
}
