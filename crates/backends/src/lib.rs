#![deny(unsafe_code)]
//! Reference drawing surfaces for geometriq.
//!
//! [`RecordingSurface`] remembers every call it receives and can write them
//! out as a script-like log; [`SvgSurface`] turns the same calls into an SVG
//! document. Both implement `geometriq_core::Surface`, so any shape or sketch
//! draws on either.

pub mod recording;
pub mod svg;

pub use recording::{Call, RecordingSurface};
pub use svg::SvgSurface;

use std::path::Path;

use geometriq_core::GeometryError;

/// Writes `contents` to `path`, reporting failures as [`GeometryError::Io`].
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), GeometryError> {
    std::fs::write(path, contents)
        .map_err(|e| GeometryError::Io(format!("{}: {e}", path.display())))
}
