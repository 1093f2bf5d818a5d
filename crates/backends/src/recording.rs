//! A surface that records what it is asked to draw.
//!
//! Every call is kept as a [`Call`] value and rendered as a script-like log
//! line (`canvas.draw_line(...)`). Saving writes the log lines to a file, so a
//! render can be inspected or diffed without any graphics at all.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use geometriq_core::log::trace;
use geometriq_core::{Color, GeometryError, LineCap, LineJoin, Placement, Point, Surface};

use crate::write_file;

/// One call made on a [`Surface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum Call {
    SetStrokeWidth {
        width: f64,
    },
    SetStrokeColor {
        color: Color,
    },
    SetFillColor {
        color: Color,
    },
    SetLineJoin {
        join: LineJoin,
    },
    SetLineCap {
        cap: LineCap,
    },
    SetMiterLimit {
        limit: f64,
    },
    FillBackground,
    DrawLine {
        from: Point,
        to: Point,
        placement: Placement,
    },
    DrawPolygon {
        points: Vec<Point>,
        placement: Placement,
    },
    DrawArc {
        radius: f64,
        angle: f64,
        center: Point,
        placement: Placement,
    },
    DrawCircularSegment {
        radius: f64,
        angle: f64,
        center: Point,
        placement: Placement,
    },
    DrawCurve {
        points: Vec<Point>,
        control_points_1: Vec<Point>,
        control_points_2: Vec<Point>,
        placement: Placement,
    },
}

impl Call {
    /// Makes the same call on another surface.
    pub fn apply(&self, surface: &mut dyn Surface) {
        match self {
            Call::SetStrokeWidth { width } => surface.set_stroke_width(*width),
            Call::SetStrokeColor { color } => surface.set_stroke_color(*color),
            Call::SetFillColor { color } => surface.set_fill_color(*color),
            Call::SetLineJoin { join } => surface.set_line_join(*join),
            Call::SetLineCap { cap } => surface.set_line_cap(*cap),
            Call::SetMiterLimit { limit } => surface.set_miter_limit(*limit),
            Call::FillBackground => surface.fill_background(),
            Call::DrawLine {
                from,
                to,
                placement,
            } => surface.draw_line(*from, *to, placement),
            Call::DrawPolygon { points, placement } => surface.draw_polygon(points, placement),
            Call::DrawArc {
                radius,
                angle,
                center,
                placement,
            } => surface.draw_arc(*radius, *angle, *center, placement),
            Call::DrawCircularSegment {
                radius,
                angle,
                center,
                placement,
            } => surface.draw_circular_segment(*radius, *angle, *center, placement),
            Call::DrawCurve {
                points,
                control_points_1,
                control_points_2,
                placement,
            } => surface.draw_curve(points, control_points_1, control_points_2, placement),
        }
    }

    /// True for the calls that put marks on the surface.
    pub fn is_drawing(&self) -> bool {
        !matches!(
            self,
            Call::SetStrokeWidth { .. }
                | Call::SetStrokeColor { .. }
                | Call::SetFillColor { .. }
                | Call::SetLineJoin { .. }
                | Call::SetLineCap { .. }
                | Call::SetMiterLimit { .. }
        )
    }
}

struct Points<'a>(&'a [Point]);

impl fmt::Display for Points<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{point}")?;
        }
        f.write_str("]")
    }
}

struct PlacementArgs<'a>(&'a Placement);

impl fmt::Display for PlacementArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let placement = self.0;
        if placement.is_identity() {
            return Ok(());
        }
        write!(
            f,
            ", at_point={}, rotation={}, scale_x={}, scale_y={}",
            placement.at_point, placement.rotation, placement.scale_x, placement.scale_y
        )
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::SetStrokeWidth { width } => write!(f, "canvas.set_stroke_width({width})"),
            Call::SetStrokeColor { color } => {
                write!(f, "canvas.set_stroke_color({})", color.to_hex())
            }
            Call::SetFillColor { color } => write!(f, "canvas.set_fill_color({})", color.to_hex()),
            Call::SetLineJoin { join } => write!(f, "canvas.set_line_join({})", join.name()),
            Call::SetLineCap { cap } => write!(f, "canvas.set_line_cap({})", cap.name()),
            Call::SetMiterLimit { limit } => write!(f, "canvas.set_miter_limit({limit})"),
            Call::FillBackground => f.write_str("canvas.fill_background()"),
            Call::DrawLine {
                from,
                to,
                placement,
            } => write!(
                f,
                "canvas.draw_line({from}, {to}{})",
                PlacementArgs(placement)
            ),
            Call::DrawPolygon { points, placement } => write!(
                f,
                "canvas.draw_polygon({}{})",
                Points(points),
                PlacementArgs(placement)
            ),
            Call::DrawArc {
                radius,
                angle,
                center,
                placement,
            } => write!(
                f,
                "canvas.draw_arc({radius}, {angle}, {center}{})",
                PlacementArgs(placement)
            ),
            Call::DrawCircularSegment {
                radius,
                angle,
                center,
                placement,
            } => write!(
                f,
                "canvas.draw_circular_segment({radius}, {angle}, {center}{})",
                PlacementArgs(placement)
            ),
            Call::DrawCurve {
                points,
                control_points_1,
                control_points_2,
                placement,
            } => write!(
                f,
                "canvas.draw_curve({}, {}, {}{})",
                Points(points),
                Points(control_points_1),
                Points(control_points_2),
                PlacementArgs(placement)
            ),
        }
    }
}

/// Records every call; optionally writes the log to a file on save.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: usize,
    height: usize,
    path: Option<PathBuf>,
    stroke_width: f64,
    stroke_color: Color,
    fill_color: Color,
    calls: Vec<Call>,
}

impl RecordingSurface {
    /// An in-memory recorder; `save` does nothing.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            path: None,
            stroke_width: 1.0,
            stroke_color: Color::default(),
            fill_color: Color::default(),
            calls: Vec::new(),
        }
    }

    /// Writes the log to `path` on save.
    pub fn writing_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Number of calls that put marks on the surface.
    pub fn drawing_count(&self) -> usize {
        self.calls.iter().filter(|call| call.is_drawing()).count()
    }

    /// The log: a header line, then one line per call.
    pub fn log_lines(&self) -> Vec<String> {
        std::iter::once(format!(
            "canvas = RecordingSurface({}, {})",
            self.width, self.height
        ))
        .chain(self.calls.iter().map(Call::to_string))
        .collect()
    }

    /// The calls as a JSON array.
    pub fn to_json(&self) -> Result<String, GeometryError> {
        Ok(serde_json::to_string_pretty(&self.calls)?)
    }

    fn record(&mut self, call: Call) {
        trace!(%call, "recorded");
        self.calls.push(call);
    }
}

impl Surface for RecordingSurface {
    fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
        self.record(Call::SetStrokeWidth { width });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
        self.record(Call::SetStrokeColor { color });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.record(Call::SetFillColor { color });
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.record(Call::SetLineJoin { join });
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.record(Call::SetLineCap { cap });
    }

    fn set_miter_limit(&mut self, limit: f64) {
        self.record(Call::SetMiterLimit { limit });
    }

    fn fill_background(&mut self) {
        self.record(Call::FillBackground);
    }

    fn draw_line(&mut self, from: Point, to: Point, placement: &Placement) {
        self.record(Call::DrawLine {
            from,
            to,
            placement: *placement,
        });
    }

    fn draw_polygon(&mut self, points: &[Point], placement: &Placement) {
        self.record(Call::DrawPolygon {
            points: points.to_vec(),
            placement: *placement,
        });
    }

    fn draw_arc(&mut self, radius: f64, angle: f64, center: Point, placement: &Placement) {
        self.record(Call::DrawArc {
            radius,
            angle,
            center,
            placement: *placement,
        });
    }

    fn draw_circular_segment(
        &mut self,
        radius: f64,
        angle: f64,
        center: Point,
        placement: &Placement,
    ) {
        self.record(Call::DrawCircularSegment {
            radius,
            angle,
            center,
            placement: *placement,
        });
    }

    fn draw_curve(
        &mut self,
        points: &[Point],
        control_points_1: &[Point],
        control_points_2: &[Point],
        placement: &Placement,
    ) {
        self.record(Call::DrawCurve {
            points: points.to_vec(),
            control_points_1: control_points_1.to_vec(),
            control_points_2: control_points_2.to_vec(),
            placement: *placement,
        });
    }

    fn save(&mut self) -> Result<(), GeometryError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut contents = self.log_lines().join("\n");
        contents.push('\n');
        write_file(path, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometriq_core::shape::{Arc, PolygonKind, RegularPolygon};
    use geometriq_core::{Figure, Line};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn records_calls_in_order() {
        let mut surface = RecordingSurface::new(100, 100);
        surface.set_stroke_width(2.0);
        Line::new(p(0.0, 0.0), p(1.0, 1.0)).draw(&mut surface, &Placement::IDENTITY);
        surface.fill_background();
        assert_eq!(
            surface.calls(),
            &[
                Call::SetStrokeWidth { width: 2.0 },
                Call::DrawLine {
                    from: p(0.0, 0.0),
                    to: p(1.0, 1.0),
                    placement: Placement::IDENTITY,
                },
                Call::FillBackground,
            ]
        );
        assert_eq!(surface.drawing_count(), 2);
    }

    #[test]
    fn tracks_current_style() {
        let mut surface = RecordingSurface::new(10, 10);
        let red = Color::rgb(1.0, 0.0, 0.0);
        surface.set_stroke_color(red);
        surface.set_fill_color(red.half());
        assert_eq!(surface.stroke_color(), red);
        assert_eq!(surface.fill_color(), red.half());
        assert_eq!(surface.stroke_width(), 1.0);
    }

    #[test]
    fn log_lines_read_like_a_script() {
        let mut surface = RecordingSurface::new(640, 480);
        surface.set_stroke_color(Color::rgb(1.0, 0.0, 0.0));
        surface.draw_line(p(0.0, 0.0), p(1.5, 2.0), &Placement::IDENTITY);
        surface.draw_arc(3.0, 1.5, p(1.0, 1.0), &Placement::at(p(2.0, 0.0)));
        let lines = surface.log_lines();
        assert_eq!(lines[0], "canvas = RecordingSurface(640, 480)");
        assert_eq!(lines[1], "canvas.set_stroke_color(#ff0000)");
        assert_eq!(
            lines[2],
            "canvas.draw_line(Point(x=0, y=0), Point(x=1.5, y=2))"
        );
        assert_eq!(
            lines[3],
            "canvas.draw_arc(3, 1.5, Point(x=1, y=1), at_point=Point(x=2, y=0), rotation=0, scale_x=1, scale_y=1)"
        );
    }

    #[test]
    fn stroke_styles_are_recorded_but_draw_nothing() {
        let mut surface = RecordingSurface::new(1, 1);
        surface.set_miter_limit(15.0);
        surface.set_line_cap(LineCap::Round);
        surface.set_line_join(LineJoin::Miter);
        assert_eq!(surface.drawing_count(), 0);
        assert_eq!(
            &surface.log_lines()[1..],
            [
                "canvas.set_miter_limit(15)",
                "canvas.set_line_cap(round)",
                "canvas.set_line_join(miter)",
            ]
        );
        let json: serde_json::Value = serde_json::from_str(&surface.to_json().unwrap()).unwrap();
        assert_eq!(json[1], serde_json::json!({"call": "set_line_cap", "cap": "round"}));

        let mut copy = RecordingSurface::new(1, 1);
        for call in surface.calls() {
            call.apply(&mut copy);
        }
        assert_eq!(surface.calls(), copy.calls());
    }

    #[test]
    fn polygon_log_lists_every_point() {
        let mut surface = RecordingSurface::new(1, 1);
        surface.draw_polygon(&[p(0.0, 0.0), p(1.0, 0.0)], &Placement::IDENTITY);
        assert_eq!(
            surface.log_lines()[1],
            "canvas.draw_polygon([Point(x=0, y=0), Point(x=1, y=0)])"
        );
    }

    #[test]
    fn replaying_calls_reproduces_the_recording() {
        let mut original = RecordingSurface::new(50, 50);
        original.set_fill_color(Color::rgb(0.0, 0.0, 1.0));
        RegularPolygon::new(PolygonKind::Diamond, 4.0, p(10.0, 10.0))
            .draw(&mut original, &Placement::IDENTITY.rotated(0.5));
        Arc::half_segment(3.0, p(5.0, 5.0)).draw(&mut original, &Placement::IDENTITY);

        let mut copy = RecordingSurface::new(50, 50);
        for call in original.calls() {
            call.apply(&mut copy);
        }
        assert_eq!(original.calls(), copy.calls());
    }

    #[test]
    fn calls_serialize_with_a_tag() {
        let mut surface = RecordingSurface::new(1, 1);
        surface.set_stroke_width(3.0);
        surface.fill_background();
        let json: serde_json::Value = serde_json::from_str(&surface.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["call"], "set_stroke_width");
        assert_eq!(json[0]["width"], 3.0);
        assert_eq!(json[1]["call"], "fill_background");
    }

    #[test]
    fn calls_round_trip_through_json() {
        let call = Call::DrawCurve {
            points: vec![p(0.0, 0.0), p(3.0, 0.0)],
            control_points_1: vec![p(1.0, 0.0)],
            control_points_2: vec![p(2.0, 0.0)],
            placement: Placement::at(p(1.0, 2.0)).scaled(2.0),
        };
        let json = serde_json::to_string(&call).unwrap();
        let back: Call = serde_json::from_str(&json).unwrap();
        assert_eq!(call, back);
    }

    #[test]
    fn save_without_a_path_is_a_no_op() {
        let mut surface = RecordingSurface::new(1, 1);
        surface.fill_background();
        assert!(surface.save().is_ok());
    }

    #[test]
    fn save_writes_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.log");
        let mut surface = RecordingSurface::new(20, 10).writing_to(&path);
        surface.set_stroke_width(4.0);
        surface.fill_background();
        surface.save().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "canvas = RecordingSurface(20, 10)\ncanvas.set_stroke_width(4)\ncanvas.fill_background()\n"
        );
    }

    #[test]
    fn save_reports_io_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sketch.log");
        let mut surface = RecordingSurface::new(1, 1).writing_to(path);
        assert!(matches!(surface.save(), Err(GeometryError::Io(_))));
    }
}
