#![deny(unsafe_code)]
//! Core geometry for the geometriq generative-art toolkit.
//!
//! Provides `Point`/`Line` primitives with a tri-state `Slope`, the `Shape`
//! family and its `Figure` trait, the `SplineCurve` control-point solver,
//! mirrored `Grid` lattices (which double as the `Snap` strategy), RGBA
//! `Color` with lazy gradients and banding, the Solarized palette and
//! `Contrast` themes, the `Surface` drawing contract with `Placement`, the
//! `Frame` a sketch draws into, injected randomness (`RandomSource`,
//! `Xorshift64`) and `Recipe`.

pub mod band;
pub mod color;
pub mod error;
pub mod frame;
pub mod grid;
pub mod line;
pub mod log;
pub mod palette;
pub mod point;
pub mod random;
pub mod recipe;
pub mod shape;
pub mod spline;
pub mod surface;

pub use band::{band, band_index, remap};
pub use color::{Color, Gradient};
pub use error::GeometryError;
pub use frame::Frame;
pub use grid::{Grid, GridKind, Snap};
pub use line::{Line, Slope};
pub use palette::Contrast;
pub use point::{Point, ORIGIN};
pub use random::{RandomSource, Replay, Xorshift64};
pub use recipe::Recipe;
pub use shape::{
    ArbitraryTriangle, Arc, ArcStyle, Curve, Edge, Figure, Polygon, PolygonKind, Rectangle,
    RegularPolygon, Shape,
};
pub use spline::{CubicSegment, SplineCurve};
pub use surface::{LineCap, LineJoin, Placement, Surface};
