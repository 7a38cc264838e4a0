//! Hexagonal grid geometry in cube coordinates.
//!
//! Every [`HexPoint`] and [`HexVec`] satisfies `x + y + z = 0`. The fields are
//! private so the invariant holds by construction: use [`HexPoint::new`]
//! (checked) or [`HexPoint::axial`] (derives `z`).

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Embedding of the hex lattice into the cartesian plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The x-axis points right, the y-axis points top-right (60 degrees).
    A,
    /// Orientation `A` rotated 30 degrees counter-clockwise.
    B,
}

/// `cos(30 deg)`, the height of one hex row in unit-width layout.
const COS_30_DEG: f64 = 0.866_025_403_784_438_6;

/// A point on the hex lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexPoint {
    x: i64,
    y: i64,
    z: i64,
}

/// The difference between two [`HexPoint`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexVec {
    x: i64,
    y: i64,
    z: i64,
}

macro_rules! cube_coords {
    ($t:ident) => {
        impl $t {
            /// Checked constructor. Returns `None` unless `x + y + z == 0`.
            #[must_use]
            pub const fn new(x: i64, y: i64, z: i64) -> Option<Self> {
                if x + y + z == 0 {
                    Some(Self { x, y, z })
                } else {
                    None
                }
            }

            /// Build from the two axial coordinates; `z = -x - y`.
            #[must_use]
            pub const fn axial(x: i64, y: i64) -> Self {
                Self { x, y, z: -x - y }
            }

            #[must_use]
            pub const fn x(&self) -> i64 {
                self.x
            }

            #[must_use]
            pub const fn y(&self) -> i64 {
                self.y
            }

            #[must_use]
            pub const fn z(&self) -> i64 {
                self.z
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({},{},{})", self.x, self.y, self.z)
            }
        }
    };
}

cube_coords!(HexPoint);
cube_coords!(HexVec);

impl HexPoint {
    pub const ORIGIN: Self = Self::axial(0, 0);

    /// Cartesian position of the hex centre, with unit distance between
    /// neighbouring centres.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_cart2d(self, orientation: Orientation) -> (f64, f64) {
        let (x, y) = (self.x as f64, self.y as f64);
        match orientation {
            Orientation::A => (x + 0.5 * y, COS_30_DEG * y),
            Orientation::B => (COS_30_DEG * x, y + 0.5 * x),
        }
    }
}

impl HexVec {
    /// The six unit directions, counter-clockwise starting along the x-axis.
    /// `UNIT[i] == UNIT[0].rotated(i)`.
    pub const UNIT: [Self; 6] = [
        Self::axial(1, 0),
        Self::axial(0, 1),
        Self::axial(-1, 1),
        Self::axial(-1, 0),
        Self::axial(0, -1),
        Self::axial(1, -1),
    ];

    /// Grid distance: the number of unit steps needed to cover this vector.
    #[must_use]
    pub fn hex_norm(self) -> i64 {
        (self.x.abs() + self.y.abs() + self.z.abs()) / 2
    }

    /// The vector rotated `n` turns of 60 degrees counter-clockwise.
    #[must_use]
    pub fn rotated(self, n: i64) -> Self {
        let sign = if n.rem_euclid(2) == 0 { 1 } else { -1 };
        let v = [sign * self.x, sign * self.y, sign * self.z];
        // Indices are in 0..3, so the casts are lossless.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let at = |k: i64| v[(n + k).rem_euclid(3) as usize];
        Self {
            x: at(0),
            y: at(1),
            z: at(2),
        }
    }
}

impl Add<HexVec> for HexPoint {
    type Output = HexPoint;

    fn add(self, rhs: HexVec) -> HexPoint {
        HexPoint {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for HexPoint {
    type Output = HexVec;

    fn sub(self, rhs: HexPoint) -> HexVec {
        HexVec {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Add for HexVec {
    type Output = HexVec;

    fn add(self, rhs: HexVec) -> HexVec {
        HexVec {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Neg for HexVec {
    type Output = HexVec;

    fn neg(self) -> HexVec {
        HexVec {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<HexVec> for i64 {
    type Output = HexVec;

    fn mul(self, rhs: HexVec) -> HexVec {
        HexVec {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
        }
    }
}
