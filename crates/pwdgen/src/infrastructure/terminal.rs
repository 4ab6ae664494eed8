//! Screen geometry sources.
//!
//! [`TerminalGeometrySource`] asks the controlling terminal for its size via
//! `crossterm`.  It fails when stdout is not a terminal (e.g. output piped
//! into a file); the use case then falls back to the configured geometry.
//!
//! [`FixedGeometrySource`] always returns the geometry it was built with.  It
//! backs the `--rows/--columns` flags and makes the binary scriptable.

use pwdgen_core::ScreenGeometry;
use tracing::debug;

use crate::application::print_passwords::{GeometryQueryError, ScreenGeometrySource};

/// Queries the live terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalGeometrySource;

impl TerminalGeometrySource {
    pub fn new() -> Self {
        Self
    }
}

impl ScreenGeometrySource for TerminalGeometrySource {
    fn screen_geometry(&self) -> Result<ScreenGeometry, GeometryQueryError> {
        // crossterm reports (columns, rows)
        let (columns, rows) =
            crossterm::terminal::size().map_err(GeometryQueryError::Unavailable)?;
        debug!(rows, columns, "terminal size");
        Ok(ScreenGeometry::new(rows, columns)?)
    }
}

/// Returns the same geometry on every call.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeometrySource {
    geometry: ScreenGeometry,
}

impl FixedGeometrySource {
    pub fn new(geometry: ScreenGeometry) -> Self {
        Self { geometry }
    }
}

impl ScreenGeometrySource for FixedGeometrySource {
    fn screen_geometry(&self) -> Result<ScreenGeometry, GeometryQueryError> {
        Ok(self.geometry)
    }
}
