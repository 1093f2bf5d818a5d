//! Triangles snapped onto a hexagonal lattice.
//!
//! Every lattice point inside the frame gets a triangle with a random
//! orientation. The vertices are snapped back onto the lattice, so
//! neighbouring triangles share corners. Fill colors are banded through the
//! accent palette by distance from the center of the frame.

use geometriq_core::band::band;
use geometriq_core::palette::ACCENTS;
use geometriq_core::surface::with_fill_color;
use geometriq_core::{
    Contrast, Figure, Frame, GeometryError, Grid, Placement, PolygonKind, RandomSource,
    RegularPolygon, Surface,
};
use serde_json::{json, Value};

use crate::params::SketchParams;
use crate::Sketch;

const DEFAULT_CELL_SIZE: f64 = 80.0;
/// Most cells that may span the longer side of the frame.
const MAX_CELLS_ACROSS: f64 = 400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TriangleLattice {
    /// Side length of each triangle and spacing of the lattice.
    pub cell_size: f64,
    /// Nudge the banded color one step either way at random.
    pub fuzz: bool,
}

impl Default for TriangleLattice {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            fuzz: true,
        }
    }
}

impl TriangleLattice {
    pub fn from_params(params: &SketchParams<'_>) -> Result<Self, GeometryError> {
        Ok(Self {
            cell_size: params.positive_f64("cell_size", DEFAULT_CELL_SIZE),
            fuzz: params.bool("fuzz", true),
        })
    }

    /// A horizontal-hexagon lattice around the frame center, large enough to
    /// cover the whole frame.
    ///
    /// Cells smaller than the longer frame side over [`MAX_CELLS_ACROSS`]
    /// are rejected.
    pub fn lattice(&self, frame: &Frame) -> Result<Grid, GeometryError> {
        let min = frame.width.max(frame.height) / MAX_CELLS_ACROSS;
        if self.cell_size.is_nan() || self.cell_size < min {
            return Err(GeometryError::CellSizeTooSmall {
                size: self.cell_size,
                min,
            });
        }
        let row = self.cell_size * 3.0_f64.sqrt() / 2.0;
        let wide = (frame.width / self.cell_size).ceil() as usize + 1;
        let tall = (frame.height / (4.0 * row)).ceil() as usize + 1;
        Grid::horizontal_hexagon(frame.center(), self.cell_size, wide, tall)
    }
}

impl Sketch for TriangleLattice {
    fn draw(
        &self,
        surface: &mut dyn Surface,
        frame: &Frame,
        _contrast: Contrast,
        rng: &mut dyn RandomSource,
    ) -> Result<(), GeometryError> {
        let grid = self.lattice(frame)?;
        let center = frame.center();
        let reach = frame.longest_distance_from(center);

        for point in grid.sorted_points() {
            if frame.is_outside(point) {
                continue;
            }
            let pick = (rng.next_f64() * PolygonKind::TRIANGLES.len() as f64) as usize;
            let kind = PolygonKind::TRIANGLES[pick.min(PolygonKind::TRIANGLES.len() - 1)];
            let triangle = RegularPolygon::snapped(kind, self.cell_size, point, &grid);

            let distance = point.distance_to(center);
            let accent = if self.fuzz {
                *band(&ACCENTS, distance, reach, 0.0, Some(&mut *rng))?
            } else {
                *band(&ACCENTS, distance, reach, 0.0, None)?
            };
            let fill = accent.tint(rng);
            with_fill_color(surface, fill, |surface| {
                triangle.draw(surface, &Placement::IDENTITY);
            });
        }
        Ok(())
    }

    fn params(&self) -> Value {
        json!({
            "cell_size": self.cell_size,
            "fuzz": self.fuzz,
        })
    }
}
