//! SVG output.
//!
//! Shapes are described in y-up coordinates with the origin at the bottom
//! left. The document wraps every element in a group that flips the y axis,
//! so coordinates are written exactly as the shapes computed them.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;
use std::path::PathBuf;

use geometriq_core::log::debug;
use geometriq_core::{Color, GeometryError, LineCap, LineJoin, Placement, Point, Surface};

use crate::write_file;

/// Builds an SVG document from draw calls.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: usize,
    height: usize,
    path: Option<PathBuf>,
    stroke_width: f64,
    stroke_color: Color,
    fill_color: Color,
    line_join: Option<LineJoin>,
    line_cap: Option<LineCap>,
    miter_limit: Option<f64>,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            path: None,
            stroke_width: 1.0,
            stroke_color: Color::default(),
            fill_color: Color::default(),
            line_join: None,
            line_cap: None,
            miter_limit: None,
            elements: Vec::new(),
        }
    }

    /// Writes the document to `path` on save.
    pub fn writing_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// The drawn elements, one per draw call, in order.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// The complete document.
    pub fn to_svg_string(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        );
        let _ = writeln!(out, "<g transform=\"matrix(1 0 0 -1 0 {h})\">");
        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</g>\n</svg>\n");
        out
    }

    fn stroke_attrs(&self) -> String {
        let mut attrs = paint("stroke", self.stroke_color);
        if self.stroke_color.a > 0.0 {
            let _ = write!(attrs, " stroke-width=\"{}\"", fmt_num(self.stroke_width));
            if let Some(join) = self.line_join {
                let _ = write!(attrs, " stroke-linejoin=\"{}\"", join.name());
            }
            if let Some(cap) = self.line_cap {
                let _ = write!(attrs, " stroke-linecap=\"{}\"", cap.name());
            }
            if let Some(limit) = self.miter_limit {
                let _ = write!(attrs, " stroke-miterlimit=\"{}\"", fmt_num(limit));
            }
        }
        attrs
    }

    fn fill_attrs(&self) -> String {
        paint("fill", self.fill_color)
    }

    fn push_path(&mut self, d: &str, filled: bool, placement: &Placement) {
        let fill = if filled {
            self.fill_attrs()
        } else {
            "fill=\"none\"".to_string()
        };
        let element = format!(
            "<path d=\"{d}\" {fill} {}{}/>",
            self.stroke_attrs(),
            transform_attr(placement)
        );
        self.elements.push(element);
    }

    fn push_circle(&mut self, radius: f64, center: Point, filled: bool, placement: &Placement) {
        let fill = if filled {
            self.fill_attrs()
        } else {
            "fill=\"none\"".to_string()
        };
        let element = format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {fill} {}{}/>",
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            self.stroke_attrs(),
            transform_attr(placement)
        );
        self.elements.push(element);
    }
}

/// `name="#rrggbb"` plus an opacity attribute for translucent colors, or
/// `name="none"` for fully transparent ones.
fn paint(name: &str, color: Color) -> String {
    if color.a <= 0.0 {
        return format!("{name}=\"none\"");
    }
    let mut attr = format!("{name}=\"{}\"", color.alpha(1.0).to_hex());
    if color.a < 1.0 {
        let _ = write!(attr, " {name}-opacity=\"{}\"", fmt_num(color.a));
    }
    attr
}

/// A leading-space `transform` attribute, or nothing for the identity.
fn transform_attr(placement: &Placement) -> String {
    if placement.is_identity() {
        return String::new();
    }
    let affine = placement.to_affine();
    let m = affine.matrix2;
    let t = affine.translation;
    format!(
        " transform=\"matrix({} {} {} {} {} {})\"",
        fmt_num(m.x_axis.x),
        fmt_num(m.x_axis.y),
        fmt_num(m.y_axis.x),
        fmt_num(m.y_axis.y),
        fmt_num(t.x),
        fmt_num(t.y)
    )
}

fn xy(point: Point) -> String {
    format!("{} {}", fmt_num(point.x), fmt_num(point.y))
}

/// The `A` command sweeping `angle` radians from the positive x axis.
fn arc_command(radius: f64, angle: f64, center: Point) -> (Point, String) {
    let start = center + Point::new(radius, 0.0);
    let end = center + Point::new(radius * angle.cos(), radius * angle.sin());
    let large_arc = u8::from(angle.abs() > PI);
    let sweep = u8::from(angle >= 0.0);
    let r = fmt_num(radius);
    (start, format!("A {r} {r} 0 {large_arc} {sweep} {}", xy(end)))
}

/// Six significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(5 - magnitude);
    let rounded = (value * scale).round() / scale;
    if !rounded.is_finite() {
        return value.to_string();
    }
    let decimals = (5 - magnitude).max(0) as usize;
    let s = format!("{rounded:.decimals$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

impl Surface for SvgSurface {
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
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.line_join = Some(join);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = Some(cap);
    }

    /// SVG requires a limit of at least 1; smaller values are dropped.
    fn set_miter_limit(&mut self, limit: f64) {
        self.miter_limit = Some(limit).filter(|limit| *limit >= 1.0);
    }

    fn fill_background(&mut self) {
        let element = format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" {}/>",
            self.width,
            self.height,
            self.fill_attrs()
        );
        self.elements.push(element);
    }

    fn draw_line(&mut self, from: Point, to: Point, placement: &Placement) {
        let d = format!("M {} L {}", xy(from), xy(to));
        self.push_path(&d, false, placement);
    }

    fn draw_polygon(&mut self, points: &[Point], placement: &Placement) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut d = format!("M {}", xy(*first));
        for point in rest {
            let _ = write!(d, " L {}", xy(*point));
        }
        d.push_str(" Z");
        self.push_path(&d, true, placement);
    }

    fn draw_arc(&mut self, radius: f64, angle: f64, center: Point, placement: &Placement) {
        if angle.abs() >= TAU {
            self.push_circle(radius, center, false, placement);
            return;
        }
        let (start, arc) = arc_command(radius, angle, center);
        let d = format!("M {} {arc}", xy(start));
        self.push_path(&d, false, placement);
    }

    fn draw_circular_segment(
        &mut self,
        radius: f64,
        angle: f64,
        center: Point,
        placement: &Placement,
    ) {
        if angle.abs() >= TAU {
            self.push_circle(radius, center, true, placement);
            return;
        }
        let (start, arc) = arc_command(radius, angle, center);
        let d = format!("M {} L {} {arc} Z", xy(center), xy(start));
        self.push_path(&d, true, placement);
    }

    fn draw_curve(
        &mut self,
        points: &[Point],
        control_points_1: &[Point],
        control_points_2: &[Point],
        placement: &Placement,
    ) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let quadratic = control_points_2.is_empty();
        let mut d = format!("M {}", xy(*first));
        for (i, point) in rest.iter().enumerate() {
            match (control_points_1.get(i), control_points_2.get(i)) {
                (Some(c1), _) if quadratic => {
                    let _ = write!(d, " Q {} {}", xy(*c1), xy(*point));
                }
                (Some(c1), Some(c2)) => {
                    let _ = write!(d, " C {} {} {}", xy(*c1), xy(*c2), xy(*point));
                }
                _ => {
                    let _ = write!(d, " L {}", xy(*point));
                }
            }
        }
        self.push_path(&d, false, placement);
    }

    fn save(&mut self) -> Result<(), GeometryError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        debug!(path = %path.display(), elements = self.elements.len(), "writing svg");
        write_file(path, &self.to_svg_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometriq_core::shape::{Arc, Curve, PolygonKind, RegularPolygon};
    use geometriq_core::{Figure, SplineCurve};
    use std::f64::consts::FRAC_PI_2;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn styled(width: usize, height: usize) -> SvgSurface {
        let mut surface = SvgSurface::new(width, height);
        surface.set_stroke_color(Color::rgb(1.0, 0.0, 0.0));
        surface.set_stroke_width(2.0);
        surface
    }

    #[test]
    fn fmt_num_trims_and_rounds() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(-2.25), "-2.25");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
        assert_eq!(fmt_num(1234567.0), "1234570");
    }

    #[test]
    fn document_flips_the_y_axis() {
        let svg = SvgSurface::new(640, 480).to_svg_string();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"640\" height=\"480\""));
        assert!(svg.contains("<g transform=\"matrix(1 0 0 -1 0 480)\">"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn background_uses_the_fill_color() {
        let mut surface = SvgSurface::new(10, 20);
        surface.set_fill_color(Color::rgb(0.0, 0.0, 1.0));
        surface.fill_background();
        assert_eq!(
            surface.elements(),
            ["<rect x=\"0\" y=\"0\" width=\"10\" height=\"20\" fill=\"#0000ff\"/>"]
        );
    }

    #[test]
    fn lines_are_unfilled_paths() {
        let mut surface = styled(10, 10);
        surface.draw_line(p(0.0, 0.0), p(3.0, 4.5), &Placement::IDENTITY);
        assert_eq!(
            surface.elements()[0],
            "<path d=\"M 0 0 L 3 4.5\" fill=\"none\" stroke=\"#ff0000\" stroke-width=\"2\"/>"
        );
    }

    #[test]
    fn polygons_close_and_fill() {
        let mut surface = styled(10, 10);
        surface.set_fill_color(Color::rgb(0.0, 1.0, 0.0).half());
        surface.draw_polygon(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)], &Placement::IDENTITY);
        let element = &surface.elements()[0];
        assert!(element.contains("d=\"M 0 0 L 1 0 L 0 1 Z\""), "{element}");
        assert!(element.contains("fill=\"#00ff00\" fill-opacity=\"0.5\""), "{element}");
    }

    #[test]
    fn empty_polygons_draw_nothing() {
        let mut surface = styled(10, 10);
        surface.draw_polygon(&[], &Placement::IDENTITY);
        surface.draw_curve(&[], &[], &[], &Placement::IDENTITY);
        assert!(surface.elements().is_empty());
    }

    #[test]
    fn stroke_styles_follow_the_stroke() {
        let mut surface = styled(10, 10);
        surface.set_miter_limit(15.0);
        surface.set_line_cap(LineCap::Round);
        surface.set_line_join(LineJoin::Miter);
        surface.draw_line(p(0.0, 0.0), p(1.0, 0.0), &Placement::IDENTITY);
        assert_eq!(
            surface.elements()[0],
            "<path d=\"M 0 0 L 1 0\" fill=\"none\" stroke=\"#ff0000\" stroke-width=\"2\" \
             stroke-linejoin=\"miter\" stroke-linecap=\"round\" stroke-miterlimit=\"15\"/>"
        );

        surface.set_miter_limit(0.5);
        surface.set_stroke_color(Color::default());
        surface.draw_line(p(0.0, 0.0), p(1.0, 0.0), &Placement::IDENTITY);
        let hidden = &surface.elements()[1];
        assert!(!hidden.contains("stroke-line"), "{hidden}");
        assert!(!hidden.contains("miterlimit"), "{hidden}");
    }

    #[test]
    fn transparent_paint_is_none() {
        let mut surface = SvgSurface::new(10, 10);
        surface.draw_line(p(0.0, 0.0), p(1.0, 1.0), &Placement::IDENTITY);
        let element = &surface.elements()[0];
        assert!(element.contains("stroke=\"none\""), "{element}");
        assert!(!element.contains("stroke-width"), "{element}");
    }

    #[test]
    fn placement_becomes_a_matrix() {
        let mut surface = styled(10, 10);
        let placement = Placement::at(p(5.0, 6.0)).scaled_xy(2.0, 3.0);
        surface.draw_line(p(0.0, 0.0), p(1.0, 0.0), &placement);
        assert!(surface.elements()[0].ends_with(" transform=\"matrix(2 0 0 3 5 6)\"/>"));
    }

    #[test]
    fn quarter_arc_uses_the_small_arc_flag() {
        let mut surface = styled(10, 10);
        surface.draw_arc(2.0, FRAC_PI_2, p(1.0, 1.0), &Placement::IDENTITY);
        let element = &surface.elements()[0];
        assert!(element.contains("d=\"M 3 1 A 2 2 0 0 1 1 3\""), "{element}");
        assert!(element.contains("fill=\"none\""), "{element}");
    }

    #[test]
    fn wide_arcs_set_the_large_arc_flag() {
        let mut surface = styled(10, 10);
        surface.draw_arc(1.0, 1.5 * PI, p(0.0, 0.0), &Placement::IDENTITY);
        assert!(surface.elements()[0].contains("A 1 1 0 1 1 "));
        surface.draw_arc(1.0, -FRAC_PI_2, p(0.0, 0.0), &Placement::IDENTITY);
        assert!(surface.elements()[1].contains("A 1 1 0 0 0 "));
    }

    #[test]
    fn full_circles_become_circle_elements() {
        let mut surface = styled(10, 10);
        Arc::circle(4.0, p(5.0, 5.0)).draw(&mut surface, &Placement::IDENTITY);
        let element = &surface.elements()[0];
        assert!(element.starts_with("<circle cx=\"5\" cy=\"5\" r=\"4\" fill=\"none\""), "{element}");
    }

    #[test]
    fn segments_close_through_the_center() {
        let mut surface = styled(10, 10);
        surface.set_fill_color(Color::rgb(1.0, 1.0, 1.0));
        Arc::half_segment(1.0, p(2.0, 2.0)).draw(&mut surface, &Placement::IDENTITY);
        let element = &surface.elements()[0];
        assert!(element.contains("d=\"M 2 2 L 3 2 A 1 1 0 0 1 1 2 Z\""), "{element}");
        assert!(element.contains("fill=\"#ffffff\""), "{element}");
    }

    #[test]
    fn regular_polygons_draw_every_vertex() {
        let mut surface = styled(100, 100);
        RegularPolygon::new(PolygonKind::HorizontalHexagon, 10.0, p(50.0, 50.0))
            .draw(&mut surface, &Placement::IDENTITY);
        assert_eq!(surface.elements()[0].matches(" L ").count(), 5);
    }

    #[test]
    fn splines_become_cubic_segments() {
        let spline = SplineCurve::new(vec![p(0.0, 0.0), p(3.0, 0.0), p(6.0, 0.0)]).unwrap();
        let mut surface = styled(10, 10);
        spline.draw(&mut surface, &Placement::IDENTITY);
        assert_eq!(surface.elements()[0].matches(" C ").count(), 2);
    }

    #[test]
    fn quadratic_curves_use_q_commands() {
        let curve = Curve::quadratic(vec![p(0.0, 0.0), p(2.0, 0.0)], vec![p(1.0, 1.0)]);
        let mut surface = styled(10, 10);
        curve.draw(&mut surface, &Placement::IDENTITY);
        assert!(surface.elements()[0].contains("d=\"M 0 0 Q 1 1 2 0\""));
    }

    #[test]
    fn missing_control_points_fall_back_to_lines() {
        let mut surface = styled(10, 10);
        surface.draw_curve(
            &[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)],
            &[p(0.5, 1.0)],
            &[p(0.5, -1.0)],
            &Placement::IDENTITY,
        );
        assert!(surface.elements()[0].contains("d=\"M 0 0 C 0.5 1 0.5 -1 1 0 L 2 0\""));
    }

    #[test]
    fn save_writes_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let mut surface = styled(32, 32).writing_to(&path);
        surface.draw_line(p(0.0, 0.0), p(32.0, 32.0), &Placement::IDENTITY);
        surface.save().unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, surface.to_svg_string());
        assert!(written.contains("M 0 0 L 32 32"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fmt_num_parses_back_close(value in -1e6f64..1e6) {
                let text = fmt_num(value);
                let parsed: f64 = text.parse().unwrap();
                prop_assert!((parsed - value).abs() <= value.abs() * 1e-5 + 1e-12,
                    "{value} formatted as {text}");
            }

            #[test]
            fn polygons_always_close(n in 1usize..12) {
                let points: Vec<Point> = (0..n).map(|i| p(i as f64, (i * i) as f64)).collect();
                let mut surface = styled(10, 10);
                surface.draw_polygon(&points, &Placement::IDENTITY);
                let element = &surface.elements()[0];
                prop_assert!(element.contains(" Z\""));
                prop_assert_eq!(element.matches(" L ").count(), n - 1);
            }
        }
    }
}
