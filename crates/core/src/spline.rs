//! Smooth curves through ordered points.
//!
//! [`SplineCurve`] solves for the Bézier control points of a natural cubic
//! spline: one cubic segment between each pair of neighbouring points, with
//! matching first and second derivatives where segments meet.
//!
//! For points `P0..=PN` the first control points `C1` satisfy a tridiagonal
//! system, solved with the Thomas algorithm in O(N). The right-hand side is
//! point-valued, so x and y are solved together. The second control points
//! then follow from continuity: `C2[i] = 2 P[i+1] - C1[i+1]`, and
//! `C2[N-1] = (P[N] + C1[N-1]) / 2` at the free end.

use crate::error::GeometryError;
use crate::log::debug;
use crate::point::{Point, ORIGIN};
use crate::shape::Figure;
use crate::surface::{Placement, Surface};

/// One row of the tridiagonal system: `a C1[i-1] + b C1[i] + c C1[i+1] = rhs`.
#[derive(Debug, Clone, Copy)]
struct Row {
    a: f64,
    b: f64,
    c: f64,
    rhs: Point,
}

/// A natural cubic spline through `points`.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCurve {
    points: Vec<Point>,
    first_control_points: Vec<Point>,
    second_control_points: Vec<Point>,
}

impl SplineCurve {
    /// Solves the control points for a curve through `points`.
    ///
    /// Fails with [`GeometryError::TooFewSplinePoints`] for fewer than two
    /// points.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewSplinePoints { got: points.len() });
        }
        let (first_control_points, second_control_points) = control_points(&points);
        debug!(
            segments = first_control_points.len(),
            "solved spline control points"
        );
        Ok(Self {
            points,
            first_control_points,
            second_control_points,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first_control_points(&self) -> &[Point] {
        &self.first_control_points
    }

    pub fn second_control_points(&self) -> &[Point] {
        &self.second_control_points
    }

    pub fn segment_count(&self) -> usize {
        self.first_control_points.len()
    }

    /// The cubic Bézier segments, in order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = CubicSegment> + '_ {
        (0..self.segment_count()).map(move |i| CubicSegment {
            start: self.points[i],
            control_1: self.first_control_points[i],
            control_2: self.second_control_points[i],
            end: self.points[i + 1],
        })
    }
}

fn control_points(points: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let n = points.len() - 1;

    if n == 1 {
        let (p0, p1) = (points[0], points[1]);
        let c1 = (2.0 * p0 + p1) / 3.0;
        let c2 = 2.0 * c1 - p0;
        return (vec![c1], vec![c2]);
    }

    let rows: Vec<Row> = (0..n)
        .map(|i| {
            let (here, next) = (points[i], points[i + 1]);
            if i == 0 {
                Row {
                    a: 0.0,
                    b: 2.0,
                    c: 1.0,
                    rhs: here + 2.0 * next,
                }
            } else if i == n - 1 {
                Row {
                    a: 2.0,
                    b: 7.0,
                    c: 0.0,
                    rhs: 8.0 * here + next,
                }
            } else {
                Row {
                    a: 1.0,
                    b: 4.0,
                    c: 1.0,
                    rhs: 4.0 * here + 2.0 * next,
                }
            }
        })
        .collect();

    let first = solve_tridiagonal(rows);

    let second = (0..n)
        .map(|i| {
            if i == n - 1 {
                (points[n] + first[n - 1]) / 2.0
            } else {
                2.0 * points[i + 1] - first[i + 1]
            }
        })
        .collect();

    (first, second)
}

/// Thomas algorithm: forward elimination, then back substitution.
fn solve_tridiagonal(mut rows: Vec<Row>) -> Vec<Point> {
    for j in 1..rows.len() {
        let prev = rows[j - 1];
        let row = &mut rows[j];
        let m = row.a / prev.b;
        row.b -= m * prev.c;
        row.rhs = row.rhs - m * prev.rhs;
    }

    let mut solution = vec![ORIGIN; rows.len()];
    let Some(last) = rows.len().checked_sub(1) else {
        return solution;
    };
    solution[last] = rows[last].rhs / rows[last].b;
    for f in (0..last).rev() {
        let row = rows[f];
        solution[f] = (row.rhs - row.c * solution[f + 1]) / row.b;
    }
    solution
}

impl Figure for SplineCurve {
    /// The first point of the curve.
    fn center(&self) -> Point {
        self.points[0]
    }

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement) {
        surface.draw_curve(
            &self.points,
            &self.first_control_points,
            &self.second_control_points,
            placement,
        );
    }
}

/// A single cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub start: Point,
    pub control_1: Point,
    pub control_2: Point,
    pub end: Point,
}

impl CubicSegment {
    /// Evaluates the segment at `t` in [0, 1].
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.control_1 * (3.0 * u * u * t)
            + self.control_2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::testing::{Drawn, Sink};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.is_close_to(expected, 1e-9, 1e-9),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn fewer_than_two_points_is_an_error() {
        assert!(matches!(
            SplineCurve::new(vec![]),
            Err(GeometryError::TooFewSplinePoints { got: 0 })
        ));
        assert!(matches!(
            SplineCurve::new(vec![p(1.0, 1.0)]),
            Err(GeometryError::TooFewSplinePoints { got: 1 })
        ));
    }

    #[test]
    fn single_segment_closed_form() {
        let spline = SplineCurve::new(vec![p(0.0, 0.0), p(3.0, 0.0)]).unwrap();
        assert_eq!(spline.first_control_points(), &[p(1.0, 0.0)]);
        assert_eq!(spline.second_control_points(), &[p(2.0, 0.0)]);
    }

    #[test]
    fn three_collinear_points_split_into_thirds() {
        let spline = SplineCurve::new(vec![p(0.0, 0.0), p(3.0, 0.0), p(6.0, 0.0)]).unwrap();
        let c1 = spline.first_control_points();
        let c2 = spline.second_control_points();
        assert_close(c1[0], p(1.0, 0.0));
        assert_close(c1[1], p(4.0, 0.0));
        assert_close(c2[0], p(2.0, 0.0));
        assert_close(c2[1], p(5.0, 0.0));
    }

    #[test]
    fn four_collinear_points_split_into_thirds() {
        let points = vec![p(0.0, 0.0), p(3.0, 0.0), p(6.0, 0.0), p(9.0, 0.0)];
        let spline = SplineCurve::new(points).unwrap();
        let c1 = spline.first_control_points();
        assert_close(c1[0], p(1.0, 0.0));
        assert_close(c1[1], p(4.0, 0.0));
        assert_close(c1[2], p(7.0, 0.0));
        assert_close(spline.second_control_points()[2], p(8.0, 0.0));
    }

    #[test]
    fn segments_join_end_to_start() {
        let spline =
            SplineCurve::new(vec![p(0.0, 0.0), p(1.0, 2.0), p(3.0, -1.0), p(4.0, 0.0)]).unwrap();
        let segments: Vec<CubicSegment> = spline.segments().collect();
        assert_eq!(segments.len(), 3);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(segments[0].point_at(0.0), p(0.0, 0.0));
        assert_eq!(segments[2].point_at(1.0), p(4.0, 0.0));
    }

    #[test]
    fn point_at_halfway_on_a_straight_segment() {
        let segment = CubicSegment {
            start: p(0.0, 0.0),
            control_1: p(1.0, 0.0),
            control_2: p(2.0, 0.0),
            end: p(3.0, 0.0),
        };
        assert_eq!(segment.point_at(0.5), p(1.5, 0.0));
    }

    #[test]
    fn draws_as_one_cubic_curve() {
        let spline = SplineCurve::new(vec![p(0.0, 0.0), p(3.0, 0.0)]).unwrap();
        let mut sink = Sink::default();
        spline.draw(&mut sink, &Placement::IDENTITY);
        assert_eq!(
            sink.drawn,
            vec![Drawn::Curve {
                points: vec![p(0.0, 0.0), p(3.0, 0.0)],
                cp1: vec![p(1.0, 0.0)],
                cp2: vec![p(2.0, 0.0)],
            }]
        );
        assert_eq!(spline.center(), p(0.0, 0.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn point() -> impl Strategy<Value = Point> {
            (-100.0_f64..100.0, -100.0_f64..100.0).prop_map(|(x, y)| Point::new(x, y))
        }

        fn residual_tolerance(points: &[Point]) -> f64 {
            let scale = points
                .iter()
                .map(|p| p.x.abs().max(p.y.abs()))
                .fold(1.0, f64::max);
            1e-10 * scale * 10.0
        }

        proptest! {
            #[test]
            fn control_point_counts_match_segments(points in prop::collection::vec(point(), 2..40)) {
                let spline = SplineCurve::new(points.clone()).unwrap();
                prop_assert_eq!(spline.first_control_points().len(), points.len() - 1);
                prop_assert_eq!(spline.second_control_points().len(), points.len() - 1);
                prop_assert_eq!(spline.segments().len(), points.len() - 1);
            }

            #[test]
            fn tangents_are_continuous(points in prop::collection::vec(point(), 3..40)) {
                let spline = SplineCurve::new(points.clone()).unwrap();
                let c1 = spline.first_control_points();
                let c2 = spline.second_control_points();
                let tolerance = residual_tolerance(&points);
                for i in 0..c1.len() - 1 {
                    let expected = 2.0 * points[i + 1] - c1[i + 1];
                    prop_assert!(
                        c2[i].is_close_to(expected, 0.0, tolerance),
                        "segment {i}: {} vs {expected}", c2[i]
                    );
                }
            }

            #[test]
            fn first_control_points_solve_the_system(points in prop::collection::vec(point(), 3..40)) {
                let spline = SplineCurve::new(points.clone()).unwrap();
                let c1 = spline.first_control_points();
                let n = c1.len();
                let tolerance = residual_tolerance(&points);
                for i in 0..n {
                    let (lhs, rhs) = if i == 0 {
                        (2.0 * c1[0] + c1[1], points[0] + 2.0 * points[1])
                    } else if i == n - 1 {
                        (2.0 * c1[i - 1] + 7.0 * c1[i], 8.0 * points[i] + points[i + 1])
                    } else {
                        (
                            c1[i - 1] + 4.0 * c1[i] + c1[i + 1],
                            4.0 * points[i] + 2.0 * points[i + 1],
                        )
                    };
                    prop_assert!(
                        lhs.is_close_to(rhs, 0.0, tolerance),
                        "row {i}: {lhs} vs {rhs}"
                    );
                }
            }

            #[test]
            fn evenly_spaced_collinear_points_give_thirds(
                start in point(),
                step in point(),
                count in 2_usize..30,
            ) {
                let points: Vec<Point> = (0..count).map(|i| start + step * i as f64).collect();
                let spline = SplineCurve::new(points.clone()).unwrap();
                let tolerance = residual_tolerance(&points);
                for (i, c1) in spline.first_control_points().iter().enumerate() {
                    let expected = start + step * (i as f64 + 1.0 / 3.0);
                    prop_assert!(c1.is_close_to(expected, 0.0, tolerance), "C1[{i}] {c1} vs {expected}");
                }
                for (i, c2) in spline.second_control_points().iter().enumerate() {
                    let expected = start + step * (i as f64 + 2.0 / 3.0);
                    prop_assert!(c2.is_close_to(expected, 0.0, tolerance), "C2[{i}] {c2} vs {expected}");
                }
            }
        }
    }
}
