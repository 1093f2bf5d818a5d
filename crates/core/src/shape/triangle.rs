use super::{centroid, Figure};
use crate::line::Line;
use crate::point::Point;
use crate::surface::{Placement, Surface};

/// A triangle side together with the vertex across from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub line: Line,
    pub opposite: Point,
}

impl Edge {
    /// True when `point` is on the same side of the edge as the opposite
    /// vertex, or on the edge itself (within the line's tolerance).
    pub fn faces(&self, point: Point) -> bool {
        self.line.contains(point) || self.line.compare(point) == self.line.compare(self.opposite)
    }
}

/// A triangle through any three points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArbitraryTriangle {
    a: Point,
    b: Point,
    c: Point,
}

impl ArbitraryTriangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    pub fn points(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Side from B to A.
    pub fn ab(&self) -> Line {
        Line::new(self.b, self.a)
    }

    /// Side from C to B.
    pub fn bc(&self) -> Line {
        Line::new(self.c, self.b)
    }

    /// Side from A to C.
    pub fn ca(&self) -> Line {
        Line::new(self.a, self.c)
    }

    /// `AB`, `BC` and `CA`, each paired with its opposite vertex.
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge {
                line: self.ab(),
                opposite: self.c,
            },
            Edge {
                line: self.bc(),
                opposite: self.a,
            },
            Edge {
                line: self.ca(),
                opposite: self.b,
            },
        ]
    }

    pub fn area(&self) -> f64 {
        let ab = self.ab();
        0.5 * ab.length() * ab.distance_to(self.c)
    }

    /// Whether `point` lies inside the triangle or on its boundary.
    pub fn contains(&self, point: Point) -> bool {
        self.edges().iter().all(|edge| edge.faces(point))
    }
}

impl Figure for ArbitraryTriangle {
    /// The centroid.
    fn center(&self) -> Point {
        centroid(&self.points())
    }

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement) {
        surface.draw_polygon(&self.points(), placement);
    }
}
