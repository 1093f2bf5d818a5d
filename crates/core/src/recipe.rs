//! Reproducible description of a render.
//!
//! A [`Recipe`] captures everything needed to draw the same picture again:
//! sketch name, surface dimensions, contrast theme, sketch parameters and
//! the random seed.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::palette::Contrast;

/// Named surface sizes accepted wherever dimensions are parsed.
pub const DEVICES: [(&str, usize, usize); 5] = [
    ("ipad", 1668, 2388),
    ("iphone", 1125, 2436),
    ("macbook", 1440, 900),
    ("4k", 3008, 1692),
    ("square", 4096, 4096),
];

/// Everything needed to reproduce a drawing.
///
/// The same recipe rendered by the same binary produces the same drawing
/// call for call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub sketch: String,
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub contrast: Contrast,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
    pub seed: u64,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Recipe {
    /// A recipe with the default (light) contrast and no params.
    pub fn new(sketch: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            sketch: sketch.to_string(),
            width,
            height,
            contrast: Contrast::default(),
            params: empty_params(),
            seed,
        }
    }

    /// Rejects zero dimensions and areas that overflow `usize`.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.width == 0 || self.height == 0 {
            return Err(GeometryError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(GeometryError::InvalidDimensions)?;
        Ok(())
    }

    /// `<sketch>_<width>x<height>_<seed>`, the default output file stem.
    pub fn output_name(&self) -> String {
        format!("{}_{}x{}_{}", self.sketch, self.width, self.height, self.seed)
    }
}

/// Parses `WIDTHxHEIGHT`, `WIDTH_HEIGHT`, or a device name from [`DEVICES`].
pub fn parse_dimensions(text: &str) -> Result<(usize, usize), GeometryError> {
    let text = text.trim();
    if let Some(&(_, width, height)) = DEVICES
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(text))
    {
        return Ok((width, height));
    }
    let (width, height) = text
        .split_once(['x', 'X', '_'])
        .ok_or(GeometryError::InvalidDimensions)?;
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| GeometryError::InvalidDimensions)
    };
    let (width, height) = (parse(width)?, parse(height)?);
    if width == 0 || height == 0 {
        return Err(GeometryError::InvalidDimensions);
    }
    Ok((width, height))
}
