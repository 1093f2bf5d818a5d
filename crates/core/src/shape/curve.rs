use super::Figure;
use crate::point::{Point, ORIGIN};
use crate::surface::{Placement, Surface};

/// A free-form Bézier chain with caller-supplied control points.
///
/// Quadratic when only `control_points` is given, cubic when
/// `cubic_control_points` is non-empty as well. See [`Surface::draw_curve`]
/// for how the lists line up.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Point>,
    control_points: Vec<Point>,
    cubic_control_points: Vec<Point>,
}

impl Curve {
    pub fn quadratic(points: Vec<Point>, control_points: Vec<Point>) -> Self {
        Self::cubic(points, control_points, Vec::new())
    }

    pub fn cubic(
        points: Vec<Point>,
        control_points: Vec<Point>,
        cubic_control_points: Vec<Point>,
    ) -> Self {
        Self {
            points,
            control_points,
            cubic_control_points,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn cubic_control_points(&self) -> &[Point] {
        &self.cubic_control_points
    }

    pub fn is_cubic(&self) -> bool {
        !self.cubic_control_points.is_empty()
    }
}

impl Figure for Curve {
    /// The first on-curve point, or the origin for an empty curve.
    fn center(&self) -> Point {
        self.points.first().copied().unwrap_or(ORIGIN)
    }

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement) {
        surface.draw_curve(
            &self.points,
            &self.control_points,
            &self.cubic_control_points,
            placement,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::testing::{Drawn, Sink};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn quadratic_curve_passes_no_cubic_controls() {
        let curve = Curve::quadratic(vec![p(0.0, 0.0), p(2.0, 0.0)], vec![p(1.0, 1.0)]);
        assert!(!curve.is_cubic());
        let mut sink = Sink::default();
        curve.draw(&mut sink, &Placement::IDENTITY);
        assert_eq!(
            sink.drawn,
            vec![Drawn::Curve {
                points: vec![p(0.0, 0.0), p(2.0, 0.0)],
                cp1: vec![p(1.0, 1.0)],
                cp2: vec![],
            }]
        );
    }

    #[test]
    fn cubic_curve_forwards_both_lists() {
        let curve = Curve::cubic(
            vec![p(0.0, 0.0), p(3.0, 0.0)],
            vec![p(1.0, 1.0)],
            vec![p(2.0, 1.0)],
        );
        assert!(curve.is_cubic());
        assert_eq!(curve.center(), p(0.0, 0.0));
        assert_eq!(curve.cubic_control_points(), &[p(2.0, 1.0)]);
    }

    #[test]
    fn empty_curve_centers_on_origin() {
        let curve = Curve::quadratic(Vec::new(), Vec::new());
        assert_eq!(curve.center(), ORIGIN);
    }
}
