//! What can fail after the arguments parse, and the exit code for each.
//!
//! Clap exits with 2 on its own for malformed arguments. From there on:
//!
//! | code | cause |
//! |------|-------|
//! | 10 | the sketch cannot be drawn (unknown name, oversized lattice) |
//! | 11 | the output file cannot be written |
//! | 12 | a value typed by the user is unusable (dimensions, contrast, color, cell size, `--params`) |
//! | 13 | the render cannot be encoded |

use geometriq_core::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Geometry(GeometryError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Geometry(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// `--params` was not valid JSON.
    pub fn params(e: serde_json::Error) -> Self {
        CliError::Input(format!("invalid --params JSON: {e}"))
    }
}

impl From<GeometryError> for CliError {
    fn from(e: GeometryError) -> Self {
        match e {
            GeometryError::Io(msg) => CliError::Io(msg),
            GeometryError::Serialization(msg) => CliError::Serialization(msg),
            GeometryError::InvalidDimensions
            | GeometryError::InvalidColor(_)
            | GeometryError::UnknownContrast(_)
            | GeometryError::CellSizeTooSmall { .. } => CliError::Input(e.to_string()),
            other => CliError::Geometry(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometriq_core::recipe::parse_dimensions;
    use geometriq_core::{Color, Contrast};

    fn code(result: Result<impl std::fmt::Debug, GeometryError>) -> i32 {
        CliError::from(result.unwrap_err()).exit_code()
    }

    #[test]
    fn malformed_dimensions_are_input_errors() {
        assert_eq!(code(parse_dimensions("0x100")), 12);
        assert_eq!(code(parse_dimensions("toaster")), 12);
    }

    #[test]
    fn unknown_contrast_is_an_input_error() {
        let err = CliError::from(Contrast::from_name("sepia").unwrap_err());
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn bad_color_param_is_an_input_error() {
        assert_eq!(code(Color::from_hex("#12345")), 12);
    }

    #[test]
    fn undersized_cells_are_input_errors() {
        let err = GeometryError::CellSizeTooSmall { size: 0.01, min: 1.5 };
        assert_eq!(CliError::from(err).exit_code(), 12);
    }

    #[test]
    fn params_that_are_not_json_are_input_errors() {
        let err = CliError::params(serde_json::from_str::<serde_json::Value>("{cell_size: 4").unwrap_err());
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().starts_with("invalid --params JSON"));
    }

    #[test]
    fn undrawable_sketches_exit_with_10() {
        let unknown = CliError::from(GeometryError::UnknownSketch("spirograph".into()));
        assert_eq!(unknown.exit_code(), 10);
        assert_eq!(unknown.to_string(), "unknown sketch: spirograph");

        let huge = GeometryError::GridTooLarge { wide: usize::MAX, tall: 1 };
        assert_eq!(CliError::from(huge).exit_code(), 10);
    }

    #[test]
    fn failed_writes_keep_the_message() {
        let err = CliError::from(GeometryError::Io("out.svg: permission denied".into()));
        assert_eq!(err.exit_code(), 11);
        assert_eq!(err.to_string(), "out.svg: permission denied");
    }

    #[test]
    fn encoding_failures_exit_with_13() {
        let err = CliError::from(GeometryError::Serialization("key must be a string".into()));
        assert_eq!(err.exit_code(), 13);
    }
}
