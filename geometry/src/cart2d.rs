//! Two-dimensional cartesian geometry.
//!
//! Points and vectors are distinct types: `Point2d + Vec2d -> Point2d` and
//! `Point2d - Point2d -> Vec2d`. Adding two points does not type-check.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point in a 2-D cartesian coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point2d {
    pub x: i64,
    pub y: i64,
}

/// A displacement between two [`Point2d`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2d {
    pub x: i64,
    pub y: i64,
}

impl Point2d {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Vec2d {
    /// The four unit steps, in the order right, up, left, down.
    pub const ORTHOGONAL: [Self; 4] = [
        Self::new(1, 0),
        Self::new(0, 1),
        Self::new(-1, 0),
        Self::new(0, -1),
    ];

    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// `|x| + |y|`.
    #[must_use]
    pub fn norm_manhattan(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    /// Euclidean length.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn length(self) -> f64 {
        let (x, y) = (self.x as f64, self.y as f64);
        x.hypot(y)
    }
}

impl Add<Vec2d> for Point2d {
    type Output = Point2d;

    fn add(self, rhs: Vec2d) -> Point2d {
        Point2d::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2d {
    type Output = Vec2d;

    fn sub(self, rhs: Point2d) -> Vec2d {
        Vec2d::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Vec2d {
    type Output = Vec2d;

    fn add(self, rhs: Vec2d) -> Vec2d {
        Vec2d::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Vec2d {
    type Output = Vec2d;

    fn neg(self) -> Vec2d {
        Vec2d::new(-self.x, -self.y)
    }
}

impl Mul<Vec2d> for i64 {
    type Output = Vec2d;

    fn mul(self, rhs: Vec2d) -> Vec2d {
        Vec2d::new(self * rhs.x, self * rhs.y)
    }
}

impl fmt::Display for Point2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl fmt::Display for Vec2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.x, self.y)
    }
}

/// The inclusive rectangle `[x0, x1] x [y0, y1]`.
///
/// A rectangle with `x1 < x0` or `y1 < y0` is empty and contains no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    #[must_use]
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The smallest rectangle containing both points.
    #[must_use]
    pub fn from_points(a: Point2d, b: Point2d) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    #[must_use]
    pub fn contains(&self, p: Point2d) -> bool {
        (self.x0..=self.x1).contains(&p.x) && (self.y0..=self.y1).contains(&p.y)
    }

    #[must_use]
    pub fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(&self) -> i64 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// All lattice points of the rectangle, x-major.
    pub fn points(&self) -> impl Iterator<Item = Point2d> {
        let Self { x0, y0, x1, y1 } = *self;
        (x0..=x1).flat_map(move |x| (y0..=y1).map(move |y| Point2d::new(x, y)))
    }
}
