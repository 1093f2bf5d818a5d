//! The drawing surface contract.
//!
//! Shapes never rasterize anything themselves. They describe their geometry
//! to a [`Surface`], and the surface decides what that means: recording the
//! calls, emitting SVG, or driving a native graphics context.

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::GeometryError;
use crate::point::{Point, ORIGIN};

/// A local transform applied to a single draw call: translate to
/// `at_point`, then rotate by `rotation` radians, then scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub at_point: Point,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Placement {
    pub const IDENTITY: Placement = Placement {
        at_point: ORIGIN,
        rotation: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Identity placement translated to `point`.
    pub fn at(point: Point) -> Self {
        Self {
            at_point: point,
            ..Self::IDENTITY
        }
    }

    pub fn rotated(self, radians: f64) -> Self {
        Self {
            rotation: radians,
            ..self
        }
    }

    /// Uniform scale in both axes.
    pub fn scaled(self, scale: f64) -> Self {
        self.scaled_xy(scale, scale)
    }

    pub fn scaled_xy(self, scale_x: f64, scale_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            ..self
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// The equivalent affine matrix, `translate * rotate * scale`.
    pub fn to_affine(&self) -> DAffine2 {
        DAffine2::from_scale_angle_translation(
            DVec2::new(self.scale_x, self.scale_y),
            self.rotation,
            self.at_point.to_dvec2(),
        )
    }

    /// Maps a point from the shape's local frame into surface coordinates.
    pub fn apply(&self, point: Point) -> Point {
        self.to_affine().transform_point2(point.to_dvec2()).into()
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// How stroked path segments meet at corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn name(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// How open stroked paths end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn name(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Something shapes can be drawn on.
///
/// All angles are radians. Every draw call carries a [`Placement`]; pass
/// [`Placement::IDENTITY`] to draw in surface coordinates.
pub trait Surface {
    fn stroke_width(&self) -> f64;

    fn stroke_color(&self) -> Color;

    fn fill_color(&self) -> Color;

    fn set_stroke_width(&mut self, width: f64);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    /// Surfaces without stroke joins ignore this.
    fn set_line_join(&mut self, _join: LineJoin) {}

    fn set_line_cap(&mut self, _cap: LineCap) {}

    /// Longest miter, as a multiple of the stroke width, before a miter join
    /// falls back to a bevel.
    fn set_miter_limit(&mut self, _limit: f64) {}

    /// Fills the whole surface with the current fill color.
    fn fill_background(&mut self);

    fn draw_line(&mut self, from: Point, to: Point, placement: &Placement);

    /// Draws a polygon. The path is always closed: the last point connects
    /// back to the first.
    fn draw_polygon(&mut self, points: &[Point], placement: &Placement);

    /// Strokes an arc of `radius` around `center`, sweeping `angle` radians
    /// counter-clockwise from the positive x axis.
    fn draw_arc(&mut self, radius: f64, angle: f64, center: Point, placement: &Placement);

    /// Like [`Surface::draw_arc`] but closes the shape back through `center`,
    /// producing a pie slice.
    fn draw_circular_segment(
        &mut self,
        radius: f64,
        angle: f64,
        center: Point,
        placement: &Placement,
    );

    /// Draws a chain of cubic Bézier segments: segment `i` runs from
    /// `points[i]` to `points[i + 1]` with control points
    /// `control_points_1[i]` and `control_points_2[i]`.
    ///
    /// An empty `control_points_2` means quadratic segments.
    fn draw_curve(
        &mut self,
        points: &[Point],
        control_points_1: &[Point],
        control_points_2: &[Point],
        placement: &Placement,
    );

    /// Persists whatever the surface has drawn.
    fn save(&mut self) -> Result<(), GeometryError>;
}

/// Runs `draw` with the stroke width set to `width`, then restores the
/// previous width.
pub fn with_stroke_width<R>(
    surface: &mut dyn Surface,
    width: f64,
    draw: impl FnOnce(&mut dyn Surface) -> R,
) -> R {
    let previous = surface.stroke_width();
    surface.set_stroke_width(width);
    let result = draw(surface);
    surface.set_stroke_width(previous);
    result
}

/// Runs `draw` with the stroke color set to `color`, then restores it.
pub fn with_stroke_color<R>(
    surface: &mut dyn Surface,
    color: Color,
    draw: impl FnOnce(&mut dyn Surface) -> R,
) -> R {
    let previous = surface.stroke_color();
    surface.set_stroke_color(color);
    let result = draw(surface);
    surface.set_stroke_color(previous);
    result
}

/// Runs `draw` with the fill color set to `color`, then restores it.
pub fn with_fill_color<R>(
    surface: &mut dyn Surface,
    color: Color,
    draw: impl FnOnce(&mut dyn Surface) -> R,
) -> R {
    let previous = surface.fill_color();
    surface.set_fill_color(color);
    let result = draw(surface);
    surface.set_fill_color(previous);
    result
}
