//! Horizontal ribbons drawn as smooth splines through noise-perturbed knots.
//!
//! Each ribbon runs left to right across the frame. Its knots are pushed up
//! and down by Perlin noise, then joined by a natural cubic spline. An
//! optional hairline guide from the first knot through the last is extended
//! to a random length behind each ribbon.

use geometriq_core::palette::{BLUE, MAGENTA};
use geometriq_core::surface::{with_stroke_color, with_stroke_width};
use geometriq_core::{
    Color, Contrast, Figure, Frame, GeometryError, Line, Placement, Point, RandomSource,
    SplineCurve, Surface,
};
use noise::{NoiseFn, Perlin};
use serde_json::{json, Value};

use crate::params::SketchParams;
use crate::Sketch;

const DEFAULT_RIBBONS: usize = 8;
const DEFAULT_KNOTS: usize = 7;
const DEFAULT_WOBBLE: f64 = 0.35;
const DEFAULT_NOISE_SCALE: f64 = 0.004;

#[derive(Debug, Clone, PartialEq)]
pub struct SplineRibbons {
    pub ribbons: usize,
    /// Knots per ribbon, at least two.
    pub knots: usize,
    /// Largest vertical displacement, as a fraction of the ribbon spacing.
    pub wobble: f64,
    /// Noise frequency per unit of surface distance.
    pub noise_scale: f64,
    pub guides: bool,
    pub from: Color,
    pub to: Color,
}

impl Default for SplineRibbons {
    fn default() -> Self {
        Self {
            ribbons: DEFAULT_RIBBONS,
            knots: DEFAULT_KNOTS,
            wobble: DEFAULT_WOBBLE,
            noise_scale: DEFAULT_NOISE_SCALE,
            guides: true,
            from: BLUE,
            to: MAGENTA,
        }
    }
}

impl SplineRibbons {
    pub fn from_params(params: &SketchParams<'_>) -> Result<Self, GeometryError> {
        Ok(Self {
            ribbons: params.usize("ribbons", DEFAULT_RIBBONS).max(1),
            knots: params.usize("knots", DEFAULT_KNOTS).max(2),
            wobble: params.f64("wobble", DEFAULT_WOBBLE),
            noise_scale: params.positive_f64("noise_scale", DEFAULT_NOISE_SCALE),
            guides: params.bool("guides", true),
            from: params.color("from", BLUE)?,
            to: params.color("to", MAGENTA)?,
        })
    }

    /// The knots of ribbon `index`, left to right.
    fn knots(&self, noise: &Perlin, frame: &Frame, index: usize) -> Vec<Point> {
        let spacing = frame.height / (self.ribbons + 1) as f64;
        let base = spacing * (index + 1) as f64;
        let last = (self.knots - 1) as f64;
        (0..self.knots)
            .map(|k| {
                let x = frame.width * k as f64 / last;
                let sample = noise
                    .get([x * self.noise_scale, base * self.noise_scale])
                    .clamp(-1.0, 1.0);
                Point::new(x, base + sample * self.wobble * spacing)
            })
            .collect()
    }
}

impl Sketch for SplineRibbons {
    fn draw(
        &self,
        surface: &mut dyn Surface,
        frame: &Frame,
        _contrast: Contrast,
        rng: &mut dyn RandomSource,
    ) -> Result<(), GeometryError> {
        let noise = Perlin::new((rng.next_f64() * f64::from(u32::MAX)) as u32);
        let colors = self.from.gradient_to(&self.to, self.ribbons);

        for (index, color) in colors.iter().enumerate() {
            let spline = SplineCurve::new(self.knots(&noise, frame, index))?;
            if self.guides {
                let points = spline.points();
                let guide = Line::new(points[0], points[points.len() - 1]).extended(rng);
                with_stroke_color(surface, color.hair(), |surface| {
                    with_stroke_width(surface, 1.0, |surface| {
                        guide.draw(surface, &Placement::IDENTITY);
                    });
                });
            }
            with_stroke_color(surface, color, |surface| {
                spline.draw(surface, &Placement::IDENTITY);
            });
        }
        Ok(())
    }

    fn params(&self) -> Value {
        json!({
            "ribbons": self.ribbons,
            "knots": self.knots,
            "wobble": self.wobble,
            "noise_scale": self.noise_scale,
            "guides": self.guides,
            "from": self.from,
            "to": self.to,
        })
    }
}
