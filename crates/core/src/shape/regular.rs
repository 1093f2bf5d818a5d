use serde::{Deserialize, Serialize};

use super::{paths, snap_point, Figure};
use crate::grid::Snap;
use crate::point::Point;
use crate::surface::{Placement, Surface};

/// Which regular figure to build.
///
/// Triangles are named for the direction their apex points. The horizontal
/// hexagon has flat top and bottom edges; the vertical one has points at the
/// top and bottom. The hexagonal rhombus is the upper third of a vertical
/// hexagon, with one vertex at the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolygonKind {
    NorthTriangle,
    EastTriangle,
    SouthTriangle,
    WestTriangle,
    Square,
    Diamond,
    HorizontalHexagon,
    VerticalHexagon,
    HexagonalRhombus,
}

impl PolygonKind {
    pub const ALL: [PolygonKind; 9] = [
        PolygonKind::NorthTriangle,
        PolygonKind::EastTriangle,
        PolygonKind::SouthTriangle,
        PolygonKind::WestTriangle,
        PolygonKind::Square,
        PolygonKind::Diamond,
        PolygonKind::HorizontalHexagon,
        PolygonKind::VerticalHexagon,
        PolygonKind::HexagonalRhombus,
    ];

    pub const TRIANGLES: [PolygonKind; 4] = [
        PolygonKind::NorthTriangle,
        PolygonKind::EastTriangle,
        PolygonKind::SouthTriangle,
        PolygonKind::WestTriangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolygonKind::NorthTriangle => "north-triangle",
            PolygonKind::EastTriangle => "east-triangle",
            PolygonKind::SouthTriangle => "south-triangle",
            PolygonKind::WestTriangle => "west-triangle",
            PolygonKind::Square => "square",
            PolygonKind::Diamond => "diamond",
            PolygonKind::HorizontalHexagon => "horizontal-hexagon",
            PolygonKind::VerticalHexagon => "vertical-hexagon",
            PolygonKind::HexagonalRhombus => "hexagonal-rhombus",
        }
    }

    pub fn vertex_count(self) -> usize {
        match self {
            PolygonKind::NorthTriangle
            | PolygonKind::EastTriangle
            | PolygonKind::SouthTriangle
            | PolygonKind::WestTriangle => 3,
            PolygonKind::Square | PolygonKind::Diamond | PolygonKind::HexagonalRhombus => 4,
            PolygonKind::HorizontalHexagon | PolygonKind::VerticalHexagon => 6,
        }
    }

    /// The unsnapped vertices of a figure of this kind.
    pub fn vertices(self, size: f64, center: Point) -> Vec<Point> {
        let Point { x, y } = center;
        let half = size / 2.0;
        // Height of an equilateral triangle with side `size`.
        let step = (size * size - half * half).sqrt();
        // Inradius, so triangles sit centered on `center`.
        let r = 3.0_f64.sqrt() * size / 6.0;
        let p = Point::new;

        match self {
            PolygonKind::NorthTriangle => vec![
                p(x - half, y - r),
                p(x, y + step - r),
                p(x + half, y - r),
            ],
            PolygonKind::EastTriangle => vec![
                p(x - r, y - half),
                p(x - r, y + half),
                p(x + step - r, y),
            ],
            PolygonKind::SouthTriangle => vec![
                p(x - half, y + r),
                p(x + half, y + r),
                p(x, y - (step - r)),
            ],
            PolygonKind::WestTriangle => vec![
                p(x - (step - r), y),
                p(x + r, y + half),
                p(x + r, y - half),
            ],
            PolygonKind::Square => vec![
                p(x - half, y - half),
                p(x - half, y + half),
                p(x + half, y + half),
                p(x + half, y - half),
            ],
            PolygonKind::Diamond => {
                let step = (size * size / 2.0).sqrt();
                vec![
                    p(x - step, y),
                    p(x, y + step),
                    p(x + step, y),
                    p(x, y - step),
                ]
            }
            PolygonKind::HorizontalHexagon => vec![
                p(x + half, y + step),
                p(x + size, y),
                p(x + half, y - step),
                p(x - half, y - step),
                p(x - size, y),
                p(x - half, y + step),
            ],
            PolygonKind::VerticalHexagon => vec![
                p(x, y + size),
                p(x + step, y + half),
                p(x + step, y - half),
                p(x, y - size),
                p(x - step, y - half),
                p(x - step, y + half),
            ],
            PolygonKind::HexagonalRhombus => vec![
                center,
                p(x - step, y + half),
                p(x, y + size),
                p(x + step, y + half),
            ],
        }
    }
}

/// A regular figure built from `(size, center)` and a [`PolygonKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    kind: PolygonKind,
    size: f64,
    center: Point,
    points: Vec<Point>,
}

impl RegularPolygon {
    pub fn new(kind: PolygonKind, size: f64, center: Point) -> Self {
        Self::with_snap(kind, size, center, None)
    }

    /// Builds the figure with every vertex moved to the nearest lattice point.
    pub fn snapped(kind: PolygonKind, size: f64, center: Point, snap: &dyn Snap) -> Self {
        Self::with_snap(kind, size, center, Some(snap))
    }

    pub fn with_snap(
        kind: PolygonKind,
        size: f64,
        center: Point,
        snap: Option<&dyn Snap>,
    ) -> Self {
        let points = kind
            .vertices(size, center)
            .into_iter()
            .map(|point| snap_point(point, snap))
            .collect();
        Self {
            kind,
            size,
            center,
            points,
        }
    }

    pub fn kind(&self) -> PolygonKind {
        self.kind
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn paths(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        paths(&self.points)
    }
}

impl Figure for RegularPolygon {
    fn center(&self) -> Point {
        self.center
    }

    fn draw(&self, surface: &mut dyn Surface, placement: &Placement) {
        surface.draw_polygon(&self.points, placement);
    }
}
