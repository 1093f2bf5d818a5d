use super::{centroid, paths, snap_point, Figure};
use crate::grid::Snap;
use crate::point::Point;
use crate::surface::{Placement, Surface};

/// A polygon through arbitrary points, drawn closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    pub fn with_snap(points: impl IntoIterator<Item = Point>, snap: Option<&dyn Snap>) -> Self {
        Self {
            points: points
                .into_iter()
                .map(|point| snap_point(point, snap))
                .collect(),
        }
    }

    /// Starts a polygon whose vertices all pass through `snap`.
    pub fn builder(snap: Option<&dyn Snap>) -> PolygonBuilder<'_> {
        PolygonBuilder {
            snap,
            points: Vec::new(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn paths(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        paths(&self.points)
    }
}

impl Figure for Polygon {
    /// The vertex centroid.
    fn center(&self) -> Point {
        centroid(&self.points)
    }

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement) {
        surface.draw_polygon(&self.points, placement);
    }
}

/// Collects vertices one at a time with a fixed snap strategy.
pub struct PolygonBuilder<'g> {
    snap: Option<&'g dyn Snap>,
    points: Vec<Point>,
}

impl PolygonBuilder<'_> {
    pub fn add_point(&mut self, point: Point) -> &mut Self {
        self.points.push(snap_point(point, self.snap));
        self
    }

    pub fn build(self) -> Polygon {
        Polygon {
            points: self.points,
        }
    }
}

/// An axis-aligned rectangle spanned by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    corner: Point,
    opposite: Point,
}

impl Rectangle {
    pub fn new(corner: Point, opposite: Point) -> Self {
        Self { corner, opposite }
    }

    pub fn width(&self) -> f64 {
        (self.opposite.x - self.corner.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.opposite.y - self.corner.y).abs()
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Corners in drawing order, starting from the first corner.
    pub fn points(&self) -> [Point; 4] {
        [
            self.corner,
            Point::new(self.corner.x, self.opposite.y),
            self.opposite,
            Point::new(self.opposite.x, self.corner.y),
        ]
    }

    /// True when `point` is inside or on the boundary.
    pub fn contains(&self, point: Point) -> bool {
        let lo = Point::new(
            self.corner.x.min(self.opposite.x),
            self.corner.y.min(self.opposite.y),
        );
        let hi = Point::new(
            self.corner.x.max(self.opposite.x),
            self.corner.y.max(self.opposite.y),
        );
        point.all_ge(lo) && point.all_le(hi)
    }
}

impl Figure for Rectangle {
    /// The first corner the rectangle was built from.
    fn center(&self) -> Point {
        self.corner
    }

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement) {
        surface.draw_polygon(&self.points(), placement);
    }
}
