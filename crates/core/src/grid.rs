//! Mirrored point lattices.
//!
//! A [`Grid`] fills one quadrant with lattice offsets and reflects each offset
//! across both axes through `start`, so the lattice is symmetric about the
//! start point by construction. Grids are built once and never change.
//!
//! Grids double as the snapping strategy for shapes: see [`Snap`].

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::log::debug;
use crate::point::Point;

/// Maps a point onto some lattice.
pub trait Snap {
    fn snap(&self, point: Point) -> Point;
}

/// The lattice arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridKind {
    /// Points at the corners of `size`-sided squares.
    Square,
    /// Squares rotated 45 degrees.
    Diamond,
    /// Equilateral triangles with horizontal rows.
    HorizontalHexagon,
    /// Equilateral triangles with vertical columns.
    VerticalHexagon,
}

impl GridKind {
    /// Base position and vertical offset of quadrant cell `(x, y)`.
    fn cell(self, x: usize, y: usize, size: f64) -> (Point, f64) {
        let (xf, yf) = (x as f64, y as f64);
        let odd = x % 2 == 1;
        match self {
            GridKind::Square => (Point::new(xf * size, yf * size), 0.0),
            GridKind::Diamond => {
                let step = (size * size / 2.0).sqrt();
                let offset = if odd { -step } else { 0.0 };
                (Point::new(xf * step, yf * step), offset)
            }
            GridKind::HorizontalHexagon => {
                let step = (size * size - (size / 2.0).powi(2)).sqrt();
                let offset = yf * step + if odd { step } else { 0.0 };
                (Point::new(xf * size / 2.0, yf * step), offset)
            }
            GridKind::VerticalHexagon => {
                let step = (size * size - (size / 2.0).powi(2)).sqrt();
                let half = size / 2.0;
                let offset = yf * half + if odd { half } else { 0.0 };
                (Point::new(xf * step, yf * half), offset)
            }
        }
    }
}

/// Upper bound on the points one grid may generate.
pub const MAX_POINTS: usize = 1 << 24;

/// A lattice of points mirrored into all four quadrants around `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    kind: GridKind,
    start: Point,
    size: f64,
    iterations_wide: usize,
    iterations_tall: usize,
    points: HashSet<Point>,
}

impl Grid {
    /// Generates the lattice.
    ///
    /// Each requested iteration count that is an exact multiple of `size`
    /// gets one extra iteration, so a count of 0 still yields the start
    /// point. `size` must be finite and positive, and the lattice may hold
    /// at most [`MAX_POINTS`] points.
    pub fn new(
        kind: GridKind,
        start: Point,
        size: f64,
        iterations_wide: usize,
        iterations_tall: usize,
    ) -> Result<Self, GeometryError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(GeometryError::InvalidCellSize(size));
        }
        let (wide, tall) = (iterations_wide, iterations_tall);
        let too_large = || GeometryError::GridTooLarge { wide, tall };
        let iterations_wide = iterations_wide
            .checked_add(usize::from((iterations_wide as f64) % size == 0.0))
            .ok_or_else(too_large)?;
        let iterations_tall = iterations_tall
            .checked_add(usize::from((iterations_tall as f64) % size == 0.0))
            .ok_or_else(too_large)?;
        let capacity = iterations_wide
            .checked_mul(iterations_tall)
            .and_then(|cells| cells.checked_mul(4))
            .filter(|points| *points <= MAX_POINTS)
            .ok_or_else(too_large)?;

        let mut points = HashSet::with_capacity(capacity);
        for y in 0..iterations_tall {
            for x in 0..iterations_wide {
                let (base, offset) = kind.cell(x, y, size);
                let dx = base.x;
                let dy = base.y + offset;
                points.insert(Point::new(start.x + dx, start.y + dy));
                points.insert(Point::new(start.x + dx, start.y - dy));
                points.insert(Point::new(start.x - dx, start.y + dy));
                points.insert(Point::new(start.x - dx, start.y - dy));
            }
        }
        debug!(
            ?kind,
            size,
            iterations_wide,
            iterations_tall,
            points = points.len(),
            "generated grid"
        );

        Ok(Self {
            kind,
            start,
            size,
            iterations_wide,
            iterations_tall,
            points,
        })
    }

    pub fn square(start: Point, size: f64, wide: usize, tall: usize) -> Result<Self, GeometryError> {
        Self::new(GridKind::Square, start, size, wide, tall)
    }

    pub fn diamond(start: Point, size: f64, wide: usize, tall: usize) -> Result<Self, GeometryError> {
        Self::new(GridKind::Diamond, start, size, wide, tall)
    }

    pub fn horizontal_hexagon(
        start: Point,
        size: f64,
        wide: usize,
        tall: usize,
    ) -> Result<Self, GeometryError> {
        Self::new(GridKind::HorizontalHexagon, start, size, wide, tall)
    }

    pub fn vertical_hexagon(
        start: Point,
        size: f64,
        wide: usize,
        tall: usize,
    ) -> Result<Self, GeometryError> {
        Self::new(GridKind::VerticalHexagon, start, size, wide, tall)
    }

    pub fn kind(&self) -> GridKind {
        self.kind
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Iteration counts after the exact-multiple adjustment.
    pub fn iterations(&self) -> (usize, usize) {
        (self.iterations_wide, self.iterations_tall)
    }

    pub fn points(&self) -> &HashSet<Point> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: every grid holds at least its start point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// The points ordered by x, then y. Use this when iteration order
    /// matters, since set order varies between runs.
    pub fn sorted_points(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.points.iter().copied().collect();
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points
    }

    /// The lattice point nearest to `point`.
    ///
    /// Ties go to the smaller x, then the smaller y.
    pub fn closest_point_to(&self, point: Point) -> Point {
        self.points
            .iter()
            .map(|candidate| (candidate.distance_to(point), *candidate))
            .min_by(|(da, a), (db, b)| closest_first(*da, *a, *db, *b))
            .map_or(self.start, |(_, candidate)| candidate)
    }
}

fn closest_first(da: f64, a: Point, db: f64, b: Point) -> Ordering {
    da.total_cmp(&db)
        .then(a.x.total_cmp(&b.x))
        .then(a.y.total_cmp(&b.y))
}

impl Snap for Grid {
    fn snap(&self, point: Point) -> Point {
        self.closest_point_to(point)
    }
}
