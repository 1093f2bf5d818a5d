//! Infinite lines through two points.
//!
//! A line's slope is a tri-state [`Slope`] rather than a float with
//! infinities or NaN, so vertical and horizontal lines get their own match
//! arms and slope comparisons stay exact.

use crate::point::{isclose, Point, ABS_TOL, ORIGIN, REL_TOL};
use crate::random::RandomSource;
use crate::shape::Figure;
use crate::surface::{Placement, Surface};

/// Largest fraction of a line's length that [`Line::extended`] adds at each end.
const EXTENSION_FRACTION: f64 = 0.05;

/// The slope of a line.
///
/// `Sloped` never holds zero: a computed slope of exactly zero (or negative
/// zero) is `Horizontal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    Vertical,
    Horizontal,
    Sloped(f64),
}

impl Slope {
    /// Slope of the line through `a` and `b`. Coincident points count as vertical.
    pub fn between(a: Point, b: Point) -> Self {
        let dx = a.x - b.x;
        if dx == 0.0 {
            return Slope::Vertical;
        }
        Slope::from_value((a.y - b.y) / dx)
    }

    pub fn from_value(m: f64) -> Self {
        if m == 0.0 {
            Slope::Horizontal
        } else {
            Slope::Sloped(m)
        }
    }

    /// The numeric slope, or `None` for a vertical line.
    pub fn value(self) -> Option<f64> {
        match self {
            Slope::Vertical => None,
            Slope::Horizontal => Some(0.0),
            Slope::Sloped(m) => Some(m),
        }
    }

    /// Slope of a perpendicular line.
    pub fn inverse(self) -> Self {
        match self {
            Slope::Vertical => Slope::Horizontal,
            Slope::Horizontal => Slope::Vertical,
            Slope::Sloped(m) => Slope::from_value(-1.0 / m),
        }
    }
}

/// Slope-intercept data derived once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Form {
    Vertical,
    Horizontal,
    Sloped { m: f64, b: f64 },
}

/// An infinite line through `center` and `to_point`.
///
/// The two points also give the line a direction (from `center` toward
/// `to_point`) and a length, which [`Line::compare`], [`Line::extended`] and
/// drawing use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    center: Point,
    to_point: Point,
    form: Form,
}

impl Line {
    pub fn new(center: Point, to_point: Point) -> Self {
        let form = match Slope::between(center, to_point) {
            Slope::Vertical => Form::Vertical,
            Slope::Horizontal => Form::Horizontal,
            Slope::Sloped(m) => Form::Sloped {
                m,
                b: center.y - center.x * m,
            },
        };
        Self {
            center,
            to_point,
            form,
        }
    }

    /// A line from the origin to `to_point`.
    pub fn from_origin(to_point: Point) -> Self {
        Self::new(ORIGIN, to_point)
    }

    /// A line through `center` with the given slope, one unit long in x
    /// (or in y when vertical), pointing in `direction` (`1.0` or `-1.0`).
    pub fn from_origin_with_slope(center: Point, slope: Slope, direction: f64) -> Self {
        let to_point = match slope {
            Slope::Vertical => Point::new(center.x, center.y + direction),
            Slope::Horizontal => Point::new(center.x + direction, center.y),
            Slope::Sloped(m) => Point::new(center.x + direction, center.y + m * direction),
        };
        Self::new(center, to_point)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn to_point(&self) -> Point {
        self.to_point
    }

    pub fn slope(&self) -> Slope {
        match self.form {
            Form::Vertical => Slope::Vertical,
            Form::Horizontal => Slope::Horizontal,
            Form::Sloped { m, .. } => Slope::Sloped(m),
        }
    }

    /// The y-intercept, or `None` for a vertical line.
    pub fn intercept(&self) -> Option<f64> {
        match self.form {
            Form::Vertical => None,
            Form::Horizontal => Some(self.center.y),
            Form::Sloped { b, .. } => Some(b),
        }
    }

    /// Slope of the perpendicular: horizontal for a vertical line, vertical
    /// for a horizontal one, `-1/slope` otherwise.
    pub fn inverse_slope(&self) -> Slope {
        self.slope().inverse()
    }

    /// True when both lines have exactly the same slope.
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        self.slope() == other.slope()
    }

    pub fn length(&self) -> f64 {
        self.center.distance_to(self.to_point)
    }

    pub fn midpoint(&self) -> Point {
        (self.center + self.to_point) / 2.0
    }

    /// The point `distance` along the line from `center` toward `to_point`.
    ///
    /// Negative distances and distances beyond the length extrapolate. A
    /// zero-length line returns `center`.
    pub fn point_from_center(&self, distance: f64) -> Point {
        let length = self.length();
        if length == 0.0 {
            return self.center;
        }
        let ratio = distance / length;
        self.center * (1.0 - ratio) + self.to_point * ratio
    }

    /// Where the two lines cross, or `None` when their slopes are exactly equal.
    ///
    /// No tolerance is applied to the parallel check. Two sloped lines are
    /// solved in a fixed order, so `a.intersection_with(&b)` and
    /// `b.intersection_with(&a)` return the same bits.
    pub fn intersection_with(&self, other: &Line) -> Option<Point> {
        if self.is_parallel_to(other) {
            return None;
        }
        match (self.form, other.form) {
            (Form::Vertical, Form::Horizontal) => Some(Point::new(self.center.x, other.center.y)),
            (Form::Horizontal, Form::Vertical) => Some(Point::new(other.center.x, self.center.y)),
            (Form::Vertical, Form::Sloped { m, b }) => {
                let x = self.center.x;
                Some(Point::new(x, m * x + b))
            }
            (Form::Sloped { m, b }, Form::Vertical) => {
                let x = other.center.x;
                Some(Point::new(x, m * x + b))
            }
            (Form::Horizontal, Form::Sloped { m, b }) => {
                let y = self.center.y;
                Some(Point::new((y - b) / m, y))
            }
            (Form::Sloped { m, b }, Form::Horizontal) => {
                let y = other.center.y;
                Some(Point::new((y - b) / m, y))
            }
            (Form::Sloped { m: m1, b: b1 }, Form::Sloped { m: m2, b: b2 }) => {
                let ((m1, b1), (m2, b2)) = if m1 < m2 {
                    ((m1, b1), (m2, b2))
                } else {
                    ((m2, b2), (m1, b1))
                };
                let x = (b2 - b1) / (m1 - m2);
                Some(Point::new(x, m1 * x + b1))
            }
            // Same-form pairs are parallel and returned above.
            _ => None,
        }
    }

    /// True when the lines cross at a point this line contains.
    pub fn intersects(&self, other: &Line) -> bool {
        self.intersection_with(other)
            .is_some_and(|point| self.contains(point))
    }

    /// Whether `point` lies on the line, within the default tolerance.
    ///
    /// Vertical and horizontal lines compare the one coordinate that matters.
    /// Otherwise the intercept implied by the point is compared with the
    /// line's intercept, with an absolute floor proportional to the size of
    /// the terms that were subtracted to get there.
    pub fn contains(&self, point: Point) -> bool {
        match self.form {
            Form::Vertical => isclose(self.center.x, point.x, REL_TOL, ABS_TOL),
            Form::Horizontal => isclose(self.center.y, point.y, REL_TOL, ABS_TOL),
            Form::Sloped { m, b } => {
                let implied = point.y - m * point.x;
                let magnitude = point
                    .y
                    .abs()
                    .max((m * point.x).abs())
                    .max(self.center.y.abs())
                    .max((m * self.center.x).abs());
                isclose(b, implied, REL_TOL, REL_TOL * magnitude)
            }
        }
    }

    /// Which side of the line `point` is on: `-1` above/left, `0` on the
    /// line, `1` below/right.
    ///
    /// "Above/left" is as seen travelling from `center` toward `to_point`
    /// when that direction is toward increasing x (or increasing y for a
    /// vertical line). Reversing the line's direction flips the sign, so
    /// `Line::new(a, b).compare(c) == -Line::new(b, a).compare(c)`.
    ///
    /// The on-line test is exact.
    pub fn compare(&self, point: Point) -> i8 {
        let side = match self.form {
            Form::Vertical => order(point.x, self.center.x),
            Form::Horizontal => order(self.center.y, point.y),
            Form::Sloped { m, b } => order(b, point.y - point.x * m),
        };
        side * self.direction()
    }

    fn direction(&self) -> i8 {
        let forward = match self.form {
            Form::Vertical => self.to_point.y >= self.center.y,
            _ => self.to_point.x > self.center.x,
        };
        if forward {
            1
        } else {
            -1
        }
    }

    /// The perpendicular through `point`.
    pub fn line_to(&self, point: Point) -> Line {
        Line::from_origin_with_slope(point, self.inverse_slope(), 1.0)
    }

    /// Perpendicular distance from `point` to the line.
    pub fn distance_to(&self, point: Point) -> f64 {
        self.intersection_with(&self.line_to(point))
            .map_or_else(|| self.center.distance_to(point), |foot| foot.distance_to(point))
    }

    /// A copy of the line with each end pushed outward by a random fraction
    /// (up to 5%) of its length. Draws once for `center`, then for `to_point`.
    pub fn extended(&self, rng: &mut dyn RandomSource) -> Line {
        let length = self.length();
        let behind = rng.next_f64() * EXTENSION_FRACTION * length;
        let beyond = rng.next_f64() * EXTENSION_FRACTION * length;
        Line::new(
            self.point_from_center(-behind),
            self.point_from_center(length + beyond),
        )
    }
}

fn order(a: f64, b: f64) -> i8 {
    if a < b {
        -1
    } else if a > b {
        1
    } else {
        0
    }
}

impl Figure for Line {
    fn center(&self) -> Point {
        self.center
    }

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement) {
        surface.draw_line(self.center, self.to_point, placement);
    }
}
