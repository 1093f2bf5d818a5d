//! Concentric hexagons blooming out from the center of the frame.
//!
//! Rings alternate between horizontal and vertical hexagons and turn a
//! little further each step. Colors run from the contrast stroke color to an
//! accent. Each ring can carry a quarter arc at a random heading.

use std::f64::consts::TAU;

use geometriq_core::palette::ACCENTS;
use geometriq_core::surface::{with_fill_color, with_stroke_color};
use geometriq_core::{
    Arc, Color, Contrast, Figure, Frame, GeometryError, Placement, PolygonKind, RandomSource,
    RegularPolygon, Surface, ORIGIN,
};
use serde_json::{json, Value};

use crate::params::SketchParams;
use crate::Sketch;

const DEFAULT_RINGS: usize = 9;
const DEFAULT_TWIST: f64 = 0.12;

#[derive(Debug, Clone, PartialEq)]
pub struct HexBloom {
    pub rings: usize,
    /// Extra rotation per ring, in radians.
    pub twist: f64,
    pub arcs: bool,
    /// Outermost color. Picked at random from the accents when absent.
    pub accent: Option<Color>,
}

impl Default for HexBloom {
    fn default() -> Self {
        Self {
            rings: DEFAULT_RINGS,
            twist: DEFAULT_TWIST,
            arcs: true,
            accent: None,
        }
    }
}

impl HexBloom {
    pub fn from_params(params: &SketchParams<'_>) -> Result<Self, GeometryError> {
        Ok(Self {
            rings: params.usize("rings", DEFAULT_RINGS).max(1),
            twist: params.f64("twist", DEFAULT_TWIST),
            arcs: params.bool("arcs", true),
            accent: params.maybe_color("accent")?,
        })
    }

    /// Hexagon kind for ring `ring`, alternating outward.
    fn kind(ring: usize) -> PolygonKind {
        if ring % 2 == 0 {
            PolygonKind::VerticalHexagon
        } else {
            PolygonKind::HorizontalHexagon
        }
    }
}

impl Sketch for HexBloom {
    fn draw(
        &self,
        surface: &mut dyn Surface,
        frame: &Frame,
        contrast: Contrast,
        rng: &mut dyn RandomSource,
    ) -> Result<(), GeometryError> {
        let accent = match self.accent {
            Some(color) => color,
            None => {
                let pick = (rng.next_f64() * ACCENTS.len() as f64) as usize;
                ACCENTS[pick.min(ACCENTS.len() - 1)]
            }
        };
        let colors: Vec<Color> = contrast.stroke().gradient_to(&accent, self.rings).iter().collect();
        let step = frame.short_side() / 2.0 / self.rings as f64;
        let center = frame.center();

        // Outermost first so inner rings sit on top.
        for (index, color) in colors.iter().enumerate().rev() {
            let ring = index + 1;
            let size = step * ring as f64;
            let hexagon = RegularPolygon::new(Self::kind(ring), size, ORIGIN);
            let placement = Placement::at(center).rotated(self.twist * ring as f64);
            with_fill_color(surface, color.half(), |surface| {
                hexagon.draw(surface, &placement);
            });

            if self.arcs {
                let heading = rng.next_range(0.0, TAU);
                let arc = Arc::quarter(size, ORIGIN);
                with_stroke_color(surface, *color, |surface| {
                    arc.draw(surface, &Placement::at(center).rotated(heading));
                });
            }
        }
        Ok(())
    }

    fn params(&self) -> Value {
        json!({
            "rings": self.rings,
            "twist": self.twist,
            "arcs": self.arcs,
            "accent": self.accent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometriq_backends::{Call, RecordingSurface};
    use geometriq_core::palette::VIOLET;
    use geometriq_core::Replay;
    use serde_json::json;

    fn draw(sketch: &HexBloom) -> RecordingSurface {
        let mut surface = RecordingSurface::new(500, 400);
        sketch
            .draw(
                &mut surface,
                &Frame::new(500.0, 400.0),
                Contrast::Dark,
                &mut Replay::new(vec![0.5, 0.25, 0.75]),
            )
            .unwrap();
        surface
    }

    #[test]
    fn accent_param_is_optional() {
        let raw = json!({"accent": "violet", "rings": 0});
        let sketch = HexBloom::from_params(&SketchParams::new(&raw)).unwrap();
        assert_eq!(sketch.accent, Some(VIOLET));
        assert_eq!(sketch.rings, 1);

        let raw = json!({});
        assert_eq!(
            HexBloom::from_params(&SketchParams::new(&raw)).unwrap(),
            HexBloom::default()
        );
    }

    #[test]
    fn one_hexagon_and_one_arc_per_ring() {
        let sketch = HexBloom {
            rings: 4,
            ..HexBloom::default()
        };
        let surface = draw(&sketch);
        let hexagons: Vec<_> = surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                Call::DrawPolygon { points, placement } => Some((points.len(), *placement)),
                _ => None,
            })
            .collect();
        assert_eq!(hexagons.len(), 4);
        assert!(hexagons.iter().all(|(n, _)| *n == 6));
        assert!(hexagons
            .iter()
            .all(|(_, placement)| placement.at_point == Frame::new(500.0, 400.0).center()));

        let arcs = surface
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::DrawArc { .. }))
            .count();
        assert_eq!(arcs, 4);
    }

    #[test]
    fn rings_grow_outward_and_draw_largest_first() {
        let sketch = HexBloom {
            rings: 3,
            arcs: false,
            ..HexBloom::default()
        };
        let surface = draw(&sketch);
        let radii: Vec<f64> = surface
            .calls()
            .iter()
            .filter_map(|c| match c {
                Call::DrawPolygon { points, .. } => {
                    Some(points.iter().map(|p| p.distance_to(ORIGIN)).fold(0.0, f64::max))
                }
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 3);
        assert!(radii[0] > radii[1] && radii[1] > radii[2]);
    }

    #[test]
    fn fixed_accent_skips_the_random_pick() {
        let sketch = HexBloom {
            rings: 2,
            arcs: false,
            accent: Some(VIOLET),
            ..HexBloom::default()
        };
        let mut surface = RecordingSurface::new(100, 100);
        let mut rng = Replay::new(vec![0.9]);
        sketch
            .draw(&mut surface, &Frame::new(100.0, 100.0), Contrast::Light, &mut rng)
            .unwrap();
        let first_fill = surface.calls().iter().find_map(|c| match c {
            Call::SetFillColor { color } => Some(*color),
            _ => None,
        });
        let expected = Contrast::Light.stroke().gradient_to(&VIOLET, 2).get(1).unwrap().half();
        assert_eq!(first_fill, Some(expected));
    }

    #[test]
    fn arcs_are_quarter_turns() {
        let surface = draw(&HexBloom::default());
        for call in surface.calls() {
            if let Call::DrawArc { angle, .. } = call {
                assert_eq!(*angle, std::f64::consts::FRAC_PI_2);
            }
        }
    }
}
