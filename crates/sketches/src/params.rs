//! Typed access to a sketch's JSON parameters.
//!
//! Lookups never fail on a missing or mistyped key: the caller's default is
//! used instead. Only color strings that are present but unparseable are
//! reported, since silently swapping a color would be surprising.

use geometriq_core::palette;
use geometriq_core::{Color, GeometryError};
use serde_json::{Map, Value};

/// Borrowed view over a `{"name": value, ...}` params object.
#[derive(Debug, Clone, Copy)]
pub struct SketchParams<'a> {
    values: Option<&'a Map<String, Value>>,
}

impl<'a> SketchParams<'a> {
    /// Anything other than a JSON object behaves like `{}`.
    pub fn new(params: &'a Value) -> Self {
        Self {
            values: params.as_object(),
        }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.values.and_then(|values| values.get(name))
    }

    /// A number, integers included.
    pub fn f64(&self, name: &str, default: f64) -> f64 {
        self.get(name)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
            .unwrap_or(default)
    }

    /// A number that must be strictly positive; anything else yields `default`.
    pub fn positive_f64(&self, name: &str, default: f64) -> f64 {
        Some(self.f64(name, default))
            .filter(|v| *v > 0.0)
            .unwrap_or(default)
    }

    /// A non-negative integer.
    pub fn usize(&self, name: &str, default: usize) -> usize {
        self.get(name)
            .and_then(Value::as_u64)
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(default)
    }

    pub fn bool(&self, name: &str, default: bool) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(default)
    }

    /// A palette name (`"cyan"`) or a hex string (`"#268bd2"`).
    pub fn color(&self, name: &str, default: Color) -> Result<Color, GeometryError> {
        Ok(self.maybe_color(name)?.unwrap_or(default))
    }

    /// Like [`SketchParams::color`] with no default.
    pub fn maybe_color(&self, name: &str) -> Result<Option<Color>, GeometryError> {
        let Some(text) = self.get(name).and_then(Value::as_str) else {
            return Ok(None);
        };
        match palette::named(text) {
            Some(color) => Ok(Some(color)),
            None => Color::from_hex(text).map(Some),
        }
    }
}
