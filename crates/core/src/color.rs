//! RGBA colors and gradients.
//!
//! A [`Color`] is a plain value with components in [0, 1]. Every
//! transformation returns a new color.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GeometryError;
use crate::random::RandomSource;

/// An RGBA color with components in [0, 1].
///
/// Serializes as a hex string: `"#rrggbb"` when opaque, `"#rrggbbaa"`
/// otherwise. The hex form is 8-bit, so a round trip quantizes to 1/255.
///
/// The default is fully transparent black.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Builds a color from 0–255 components.
    pub fn from_full_value(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(r / 255.0, g / 255.0, b / 255.0, a / 255.0)
    }

    pub fn rgba(&self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a)
    }

    /// Components as bytes, truncating rather than rounding.
    pub fn int_rgba(&self) -> [u8; 4] {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// Same color with a random alpha in [0, 0.5).
    pub fn shade(&self, rng: &mut dyn RandomSource) -> Self {
        self.alpha(rng.next_f64() * 0.5)
    }

    /// Same color with a random alpha in (0.5, 1].
    pub fn tint(&self, rng: &mut dyn RandomSource) -> Self {
        self.alpha(1.0 - rng.next_f64() * 0.5)
    }

    pub fn half(&self) -> Self {
        self.alpha(0.5)
    }

    /// A barely-there version for hairlines.
    pub fn hair(&self) -> Self {
        self.alpha(0.1)
    }

    pub fn alpha(&self, a: f64) -> Self {
        Self { a, ..*self }
    }

    /// Euclidean distance in RGB. Alpha is ignored.
    pub fn distance_to(&self, other: &Color) -> f64 {
        ((other.r - self.r).powi(2) + (other.g - self.g).powi(2) + (other.b - self.b).powi(2))
            .sqrt()
    }

    /// `steps` colors starting at `self` and heading toward `other`.
    ///
    /// Step `s` is interpolated at `s / steps`, so the last color stops one
    /// step short of `other`.
    pub fn gradient_to(&self, other: &Color, steps: usize) -> Gradient {
        Gradient {
            from: *self,
            to: *other,
            steps,
        }
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (leading `#` optional, case
    /// insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, GeometryError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(GeometryError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                digits.len()
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GeometryError::InvalidColor(format!("non-hex digit in {hex:?}")));
        }
        let component = |range: std::ops::Range<usize>, name: &str| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(f64::from)
                .ok_or_else(|| GeometryError::InvalidColor(format!("invalid {name} component in {hex:?}")))
        };
        let r = component(0..2, "red")?;
        let g = component(2..4, "green")?;
        let b = component(4..6, "blue")?;
        let a = if digits.len() == 8 {
            component(6..8, "alpha")?
        } else {
            255.0
        };
        Ok(Self::from_full_value(r, g, b, a))
    }

    /// `"#rrggbb"` for opaque colors, `"#rrggbbaa"` otherwise. Components are
    /// clamped and rounded to 8 bits.
    pub fn to_hex(&self) -> String {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (byte(self.r), byte(self.g), byte(self.b), byte(self.a));
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A finite, restartable sequence of interpolated colors.
///
/// Nothing is computed until iterated, and iterating twice yields the same
/// colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    from: Color,
    to: Color,
    steps: usize,
}

impl Gradient {
    pub fn len(&self) -> usize {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    /// The color at step `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Color> {
        if index >= self.steps {
            return None;
        }
        let s = index as f64;
        let n = self.steps as f64;
        let lerp = |from: f64, to: f64| from + ((to - from) * s) / n;
        Some(Color::new(
            lerp(self.from.r, self.to.r),
            lerp(self.from.g, self.to.g),
            lerp(self.from.b, self.to.b),
            lerp(self.from.a, self.to.a),
        ))
    }

    pub fn iter(&self) -> GradientIter {
        GradientIter {
            gradient: *self,
            next: 0,
        }
    }
}

impl IntoIterator for Gradient {
    type Item = Color;
    type IntoIter = GradientIter;

    fn into_iter(self) -> GradientIter {
        self.iter()
    }
}

impl IntoIterator for &Gradient {
    type Item = Color;
    type IntoIter = GradientIter;

    fn into_iter(self) -> GradientIter {
        self.iter()
    }
}

/// Iterator over a [`Gradient`].
#[derive(Debug, Clone)]
pub struct GradientIter {
    gradient: Gradient,
    next: usize,
}

impl Iterator for GradientIter {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        let color = self.gradient.get(self.next)?;
        self.next += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.gradient.steps.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GradientIter {}
