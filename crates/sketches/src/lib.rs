#![deny(unsafe_code)]
//! Sketch registry: maps sketch names to implementations and runs a render
//! from a [`Recipe`].
//!
//! This crate sits between `geometriq-core` (shapes, grids, colors and the
//! `Surface` contract) and the binary. A sketch only ever talks to a
//! `&mut dyn Surface`, so the same recipe renders to SVG or to a call log.

pub mod hex_bloom;
pub mod params;
pub mod spline_ribbons;
pub mod triangle_lattice;

pub use hex_bloom::HexBloom;
pub use params::SketchParams;
pub use spline_ribbons::SplineRibbons;
pub use triangle_lattice::TriangleLattice;

use geometriq_core::log::debug;
use geometriq_core::palette::CLEAR;
use geometriq_core::{
    Contrast, Frame, GeometryError, LineCap, LineJoin, RandomSource, Recipe, Surface, Xorshift64,
};
use serde_json::Value;

/// All available sketch names.
const SKETCH_NAMES: &[&str] = &["triangle-lattice", "spline-ribbons", "hex-bloom"];

/// Stroke width every render starts with.
pub const STARTING_STROKE_WIDTH: f64 = 4.0;

/// Miter limit every render starts with.
pub const STARTING_MITER_LIMIT: f64 = 15.0;

/// Something that draws a picture into a frame.
pub trait Sketch {
    /// Draws onto `surface`. All randomness comes from `rng`.
    fn draw(
        &self,
        surface: &mut dyn Surface,
        frame: &Frame,
        contrast: Contrast,
        rng: &mut dyn RandomSource,
    ) -> Result<(), GeometryError>;

    /// The parameters in effect, defaults filled in.
    fn params(&self) -> Value;
}

/// Enumeration of the built-in sketches.
///
/// Use [`SketchKind::from_name`] for string-based construction.
#[derive(Debug, Clone)]
pub enum SketchKind {
    TriangleLattice(TriangleLattice),
    SplineRibbons(SplineRibbons),
    HexBloom(HexBloom),
}

impl SketchKind {
    /// Constructs a sketch by name from a JSON params object.
    ///
    /// Returns `GeometryError::UnknownSketch` if the name is not recognized.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, GeometryError> {
        let params = SketchParams::new(params);
        match name {
            "triangle-lattice" => Ok(SketchKind::TriangleLattice(TriangleLattice::from_params(
                &params,
            )?)),
            "spline-ribbons" => Ok(SketchKind::SplineRibbons(SplineRibbons::from_params(
                &params,
            )?)),
            "hex-bloom" => Ok(SketchKind::HexBloom(HexBloom::from_params(&params)?)),
            _ => Err(GeometryError::UnknownSketch(name.to_string())),
        }
    }

    /// Returns a slice of all recognized sketch names.
    pub fn list_sketches() -> &'static [&'static str] {
        SKETCH_NAMES
    }

    pub fn name(&self) -> &'static str {
        match self {
            SketchKind::TriangleLattice(_) => "triangle-lattice",
            SketchKind::SplineRibbons(_) => "spline-ribbons",
            SketchKind::HexBloom(_) => "hex-bloom",
        }
    }
}

impl Sketch for SketchKind {
    fn draw(
        &self,
        surface: &mut dyn Surface,
        frame: &Frame,
        contrast: Contrast,
        rng: &mut dyn RandomSource,
    ) -> Result<(), GeometryError> {
        match self {
            SketchKind::TriangleLattice(s) => s.draw(surface, frame, contrast, rng),
            SketchKind::SplineRibbons(s) => s.draw(surface, frame, contrast, rng),
            SketchKind::HexBloom(s) => s.draw(surface, frame, contrast, rng),
        }
    }

    fn params(&self) -> Value {
        match self {
            SketchKind::TriangleLattice(s) => s.params(),
            SketchKind::SplineRibbons(s) => s.params(),
            SketchKind::HexBloom(s) => s.params(),
        }
    }
}

/// Sets round caps and miter joins, paints the background for `contrast`
/// and leaves the surface stroking in the contrast color with no fill.
pub fn prepare(surface: &mut dyn Surface, contrast: Contrast) {
    surface.set_miter_limit(STARTING_MITER_LIMIT);
    surface.set_line_cap(LineCap::Round);
    surface.set_line_join(LineJoin::Miter);
    surface.set_stroke_color(CLEAR);
    surface.set_stroke_width(STARTING_STROKE_WIDTH);
    surface.set_fill_color(contrast.background());
    surface.fill_background();
    surface.set_stroke_color(contrast.stroke());
    surface.set_fill_color(CLEAR);
}

/// Renders `recipe` onto `surface` and saves it.
///
/// The recipe's seed drives a fresh [`Xorshift64`], so rendering the same
/// recipe twice produces the same calls.
pub fn render(recipe: &Recipe, surface: &mut dyn Surface) -> Result<SketchKind, GeometryError> {
    recipe.validate()?;
    let sketch = SketchKind::from_name(&recipe.sketch, &recipe.params)?;
    let frame = Frame::new(recipe.width as f64, recipe.height as f64);
    let mut rng = Xorshift64::new(recipe.seed);
    debug!(
        sketch = sketch.name(),
        width = recipe.width,
        height = recipe.height,
        seed = recipe.seed,
        "rendering"
    );
    prepare(surface, recipe.contrast);
    sketch.draw(surface, &frame, recipe.contrast, &mut rng)?;
    surface.save()?;
    Ok(sketch)
}
