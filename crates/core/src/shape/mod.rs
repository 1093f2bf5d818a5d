//! The shape family.
//!
//! Every shape is a value computed once from its parameters. Drawing hands
//! the geometry to a [`Surface`] together with a [`Placement`]; shapes never
//! rasterize anything themselves.
//!
//! [`Shape`] is the closed set of variants a sketch can mix in one list.
//! Each variant is also usable on its own through the [`Figure`] trait.

mod arc;
mod curve;
mod polygon;
mod regular;
mod triangle;

pub use arc::{Arc, ArcStyle};
pub use curve::Curve;
pub use polygon::{Polygon, PolygonBuilder, Rectangle};
pub use regular::{PolygonKind, RegularPolygon};
pub use triangle::{ArbitraryTriangle, Edge};

use crate::grid::Snap;
use crate::line::Line;
use crate::point::Point;
use crate::spline::SplineCurve;
use crate::surface::{Placement, Surface};

/// Anything that can describe itself to a [`Surface`].
pub trait Figure {
    /// The reference point the shape was built around.
    fn center(&self) -> Point;

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement);
}

/// One of the drawable shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Regular(RegularPolygon),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Triangle(ArbitraryTriangle),
    Arc(Arc),
    Curve(Curve),
    Spline(SplineCurve),
    Line(Line),
}

impl Shape {
    /// Short lowercase name of the variant, used in logs and recordings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Regular(regular) => regular.kind().name(),
            Shape::Polygon(_) => "polygon",
            Shape::Rectangle(_) => "rectangle",
            Shape::Triangle(_) => "triangle",
            Shape::Arc(arc) => arc.style().name(),
            Shape::Curve(_) => "curve",
            Shape::Spline(_) => "spline",
            Shape::Line(_) => "line",
        }
    }
}

impl Figure for Shape {
    fn center(&self) -> Point {
        match self {
            Shape::Regular(s) => s.center(),
            Shape::Polygon(s) => s.center(),
            Shape::Rectangle(s) => s.center(),
            Shape::Triangle(s) => s.center(),
            Shape::Arc(s) => s.center(),
            Shape::Curve(s) => s.center(),
            Shape::Spline(s) => s.center(),
            Shape::Line(s) => s.center(),
        }
    }

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement) {
        match self {
            Shape::Regular(s) => s.draw(surface, placement),
            Shape::Polygon(s) => s.draw(surface, placement),
            Shape::Rectangle(s) => s.draw(surface, placement),
            Shape::Triangle(s) => s.draw(surface, placement),
            Shape::Arc(s) => s.draw(surface, placement),
            Shape::Curve(s) => s.draw(surface, placement),
            Shape::Spline(s) => s.draw(surface, placement),
            Shape::Line(s) => s.draw(surface, placement),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(shape: $ty) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_variant!(
    Regular(RegularPolygon),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Triangle(ArbitraryTriangle),
    Arc(Arc),
    Curve(Curve),
    Spline(SplineCurve),
    Line(Line),
);

/// Each vertex paired with the next, wrapping from the last back to the first.
pub fn paths(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

/// Passes `point` through `snap` when one is given.
pub(crate) fn snap_point(point: Point, snap: Option<&dyn Snap>) -> Point {
    match snap {
        Some(snap) => snap.snap(point),
        None => point,
    }
}

/// Mean of the points, or the origin when there are none.
pub(crate) fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return crate::point::ORIGIN;
    }
    let sum = points.iter().fold(crate::point::ORIGIN, |acc, p| acc + *p);
    sum / points.len() as f64
}


#[cfg(test)]
mod tests {
    use super::testing::{Drawn, Sink};
    use super::*;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn paths_wrap_to_the_first_vertex() {
        let square = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        let edges: Vec<_> = paths(&square).collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], (p(0.0, 0.0), p(0.0, 1.0)));
        assert_eq!(edges[3], (p(1.0, 0.0), p(0.0, 0.0)));
    }

    #[test]
    fn paths_of_nothing_is_empty() {
        assert_eq!(paths(&[]).count(), 0);
    }

    #[test]
    fn mixed_shapes_draw_through_one_list() {
        let shapes: Vec<Shape> = vec![
            RegularPolygon::new(PolygonKind::Square, 2.0, p(0.0, 0.0)).into(),
            Line::new(p(0.0, 0.0), p(1.0, 1.0)).into(),
            Arc::circle(3.0, p(1.0, 1.0)).into(),
            Arc::half_segment(1.0, p(0.0, 0.0)).into(),
        ];
        let mut sink = Sink::default();
        let placement = Placement::at(p(5.0, 5.0));
        for shape in &shapes {
            shape.draw(&mut sink, &placement);
        }
        assert_eq!(sink.drawn.len(), 4);
        assert!(matches!(sink.drawn[0], Drawn::Polygon(ref pts) if pts.len() == 4));
        assert_eq!(sink.drawn[1], Drawn::Line(p(0.0, 0.0), p(1.0, 1.0)));
        assert_eq!(
            sink.drawn[2],
            Drawn::Arc { radius: 3.0, angle: 2.0 * PI, center: p(1.0, 1.0) }
        );
        assert_eq!(
            sink.drawn[3],
            Drawn::Segment { radius: 1.0, angle: PI, center: p(0.0, 0.0) }
        );
        assert!(sink.placements.iter().all(|pl| *pl == placement));
    }

    #[test]
    fn kind_names() {
        let hex: Shape = RegularPolygon::new(PolygonKind::VerticalHexagon, 1.0, p(0.0, 0.0)).into();
        assert_eq!(hex.kind_name(), "vertical-hexagon");
        let segment: Shape = Arc::quarter_segment(1.0, p(0.0, 0.0)).into();
        assert_eq!(segment.kind_name(), "segment");
        let line: Shape = Line::from_origin(p(1.0, 0.0)).into();
        assert_eq!(line.kind_name(), "line");
    }

    #[test]
    fn shape_center_delegates() {
        let shape: Shape = Arc::half(2.0, p(3.0, 4.0)).into();
        assert_eq!(shape.center(), p(3.0, 4.0));
    }

    #[test]
    fn centroid_of_nothing_is_origin() {
        assert_eq!(centroid(&[]), crate::point::ORIGIN);
        assert_eq!(centroid(&[p(0.0, 0.0), p(2.0, 4.0)]), p(1.0, 2.0));
    }
}
