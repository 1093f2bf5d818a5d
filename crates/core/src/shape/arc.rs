use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use super::Figure;
use crate::line::Line;
use crate::point::Point;
use crate::surface::{Placement, Surface};

/// How an arc is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcStyle {
    /// Just the curved stroke.
    Open,
    /// A pie slice closed back through the center.
    Segment,
}

impl ArcStyle {
    pub fn name(self) -> &'static str {
        match self {
            ArcStyle::Open => "arc",
            ArcStyle::Segment => "segment",
        }
    }
}

/// A circular arc of `radius` around `center`, sweeping `angle` radians
/// counter-clockwise from the positive x axis.
///
/// A full circle is an open arc of `2π`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    radius: f64,
    angle: f64,
    center: Point,
    style: ArcStyle,
}

impl Arc {
    pub fn new(radius: f64, angle: f64, center: Point, style: ArcStyle) -> Self {
        Self {
            radius,
            angle,
            center,
            style,
        }
    }

    pub fn open(radius: f64, angle: f64, center: Point) -> Self {
        Self::new(radius, angle, center, ArcStyle::Open)
    }

    pub fn segment(radius: f64, angle: f64, center: Point) -> Self {
        Self::new(radius, angle, center, ArcStyle::Segment)
    }

    pub fn circle(radius: f64, center: Point) -> Self {
        Self::open(radius, TAU, center)
    }

    pub fn quarter(radius: f64, center: Point) -> Self {
        Self::open(radius, FRAC_PI_2, center)
    }

    pub fn half(radius: f64, center: Point) -> Self {
        Self::open(radius, PI, center)
    }

    pub fn quarter_segment(radius: f64, center: Point) -> Self {
        Self::segment(radius, FRAC_PI_2, center)
    }

    pub fn half_segment(radius: f64, center: Point) -> Self {
        Self::segment(radius, PI, center)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn style(&self) -> ArcStyle {
        self.style
    }

    /// The point on the circle at `angle` radians from the positive x axis.
    pub fn point_at_angle(&self, angle: f64) -> Point {
        Point::new(
            self.radius * angle.cos() + self.center.x,
            self.radius * angle.sin() + self.center.y,
        )
    }

    /// Where `line` crosses the full circle this arc lies on.
    ///
    /// Returns both crossings ordered by x (by y for a vertical line), the
    /// same point twice for a tangent, or `None` when the line misses.
    pub fn intersections_with_line(&self, line: &Line) -> Option<(Point, Point)> {
        let Point { x: h, y: k } = self.center;
        let r2 = self.radius * self.radius;

        let Some(m) = line.slope().value() else {
            let x = line.center().x;
            let dx = x - h;
            let under = r2 - dx * dx;
            if under < 0.0 {
                return None;
            }
            let dy = under.sqrt();
            return Some((Point::new(x, k - dy), Point::new(x, k + dy)));
        };

        // y = m x + b substituted into (x - h)² + (y - k)² = r².
        let b = line.intercept()?;
        let a_coef = 1.0 + m * m;
        let b_coef = 2.0 * (m * (b - k) - h);
        let c_coef = h * h + (b - k) * (b - k) - r2;
        let discriminant = b_coef * b_coef - 4.0 * a_coef * c_coef;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let x1 = (-b_coef - root) / (2.0 * a_coef);
        let x2 = (-b_coef + root) / (2.0 * a_coef);
        Some((Point::new(x1, m * x1 + b), Point::new(x2, m * x2 + b)))
    }
}

impl Figure for Arc {
    fn center(&self) -> Point {
        self.center
    }

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement) {
        match self.style {
            ArcStyle::Open => surface.draw_arc(self.radius, self.angle, self.center, placement),
            ArcStyle::Segment => {
                surface.draw_circular_segment(self.radius, self.angle, self.center, placement)
            }
        }
    }
}
