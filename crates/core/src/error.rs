//! Error types for geometriq.

use thiserror::Error;

/// Errors produced by geometry construction, banding, and drawing surfaces.
///
/// Geometric degeneracies such as parallel lines are not errors; they are
/// reported through `Option` return values instead.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A spline needs at least two points to have a single segment.
    #[error("spline curve needs at least 2 points, got {got}")]
    TooFewSplinePoints { got: usize },

    /// A linear mapping was asked to divide by a zero-width input range.
    #[error("degenerate range: upper bound and lower bound are both {bound}")]
    DegenerateRange { bound: f64 },

    /// `band` was given no items to choose from.
    #[error("cannot band a value into an empty sequence")]
    EmptyBand,

    /// A value that must be finite was NaN or infinite.
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// A grid cell size was zero, negative, or not finite.
    #[error("invalid grid cell size {0}: must be finite and greater than zero")]
    InvalidCellSize(f64),

    /// A grid would hold more points than fit in memory.
    #[error("grid of {wide}x{tall} iterations is too large")]
    GridTooLarge { wide: usize, tall: usize },

    /// A sketch cell size was too small for the frame it has to cover.
    #[error("cell size {size} is too small for the frame: must be at least {min}")]
    CellSizeTooSmall { size: f64, min: f64 },

    /// Width or height was zero when describing a drawing.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A sketch name was not found in the registry.
    #[error("unknown sketch: {0}")]
    UnknownSketch(String),

    /// A contrast theme name was not recognized.
    #[error("unknown contrast theme: {0}")]
    UnknownContrast(String),

    /// Drawing calls could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A drawing surface failed to persist its output.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for GeometryError {
    fn from(e: serde_json::Error) -> Self {
        GeometryError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_spline_points_reports_count() {
        let msg = GeometryError::TooFewSplinePoints { got: 1 }.to_string();
        assert!(msg.contains("at least 2"), "missing minimum in: {msg}");
        assert!(msg.contains('1'), "missing count in: {msg}");
    }

    #[test]
    fn degenerate_range_includes_bound() {
        let msg = GeometryError::DegenerateRange { bound: 42.5 }.to_string();
        assert!(msg.contains("42.5"), "missing bound in: {msg}");
    }

    #[test]
    fn non_finite_names_the_offending_value() {
        let err = GeometryError::NonFinite {
            what: "band value",
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("band value"), "missing subject in: {msg}");
        assert!(msg.contains("NaN"), "missing value in: {msg}");
    }

    #[test]
    fn invalid_cell_size_includes_size() {
        let msg = GeometryError::InvalidCellSize(-3.0).to_string();
        assert!(msg.contains("-3"), "missing size in: {msg}");
    }

    #[test]
    fn unknown_sketch_includes_name() {
        let msg = GeometryError::UnknownSketch("spirograph".into()).to_string();
        assert!(msg.contains("spirograph"), "missing name in: {msg}");
    }

    #[test]
    fn json_errors_are_serialization_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            GeometryError::from(err),
            GeometryError::Serialization(msg) if msg.contains("EOF")
        ));
    }

    #[test]
    fn geometry_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }

    #[test]
    fn geometry_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<GeometryError>();
    }
}
