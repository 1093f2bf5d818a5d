//! Two-dimensional points.
//!
//! Equality and hashing are exact; [`Point::is_basically`] is the tolerant
//! comparison geometric algorithms use once floating error has crept in.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Default relative tolerance for approximate comparisons.
pub const REL_TOL: f64 = 1e-9;
/// Default absolute tolerance for approximate comparisons.
pub const ABS_TOL: f64 = 0.0;

/// `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
pub fn isclose(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    (a - b).abs() <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}

/// A point in the plane. Both coordinates are expected to be finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The origin, `(0, 0)`.
pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point reflected through the origin.
    pub fn inverse(self) -> Self {
        -self
    }

    pub fn distance_to(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Approximate equality with the default tolerances.
    pub fn is_basically(self, other: Point) -> bool {
        self.is_close_to(other, REL_TOL, ABS_TOL)
    }

    /// Approximate equality of both coordinates with explicit tolerances.
    pub fn is_close_to(self, other: Point, rel_tol: f64, abs_tol: f64) -> bool {
        isclose(self.x, other.x, rel_tol, abs_tol) && isclose(self.y, other.y, rel_tol, abs_tol)
    }

    /// Both coordinates strictly less than `other`'s.
    ///
    /// The four `all_*` comparisons test each coordinate independently and
    /// require both to hold, so two points can be incomparable. They are for
    /// bounding checks, never for sorting.
    pub fn all_lt(self, other: Point) -> bool {
        self.x < other.x && self.y < other.y
    }

    pub fn all_le(self, other: Point) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    pub fn all_gt(self, other: Point) -> bool {
        self.x > other.x && self.y > other.y
    }

    pub fn all_ge(self, other: Point) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

// Coordinates are finite, so `==` is reflexive.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Adding 0.0 folds -0.0 into 0.0 so equal points hash equally.
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={})", self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}
