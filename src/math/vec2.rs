use std::ops::{Add, Sub};

/// An integer 2D point, typically in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, widened so it cannot overflow.
    pub fn distance_squared(&self, other: Point) -> i128 {
        let dx = self.x as i128 - other.x as i128;
        let dy = self.y as i128 - other.y as i128;
        dx * dx + dy * dy
    }

    /// Cross product of `(q - self)` and `(r - q)`.
    ///
    /// Positive when `self -> q -> r` turns clockwise with Y pointing up,
    /// which is counter-clockwise on a Y-down screen.
    pub fn cross(&self, q: Point, r: Point) -> i128 {
        (q.y as i128 - self.y as i128) * (r.x as i128 - q.x as i128)
            - (q.x as i128 - self.x as i128) * (r.y as i128 - q.y as i128)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
