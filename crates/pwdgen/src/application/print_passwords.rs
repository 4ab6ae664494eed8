//! PrintPasswordsUseCase: fills the screen (or a fixed count) with passwords.

use pwdgen_core::{
    GeometryError, PasswordLength, PasswordSink, PrintSummary, ScreenGeometry, ScreenPrinter,
    WrapPolicy,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for screen geometry queries.
#[derive(Debug, Error)]
pub enum GeometryQueryError {
    /// The terminal could not be asked for its size (e.g. stdout is a pipe).
    #[error("terminal size unavailable: {0}")]
    Unavailable(#[source] std::io::Error),

    /// The terminal answered with a size that cannot hold any text.
    #[error("terminal reported an unusable size: {0}")]
    Invalid(#[from] GeometryError),
}

/// Source of the current screen geometry.
///
/// The infrastructure layer provides a terminal-backed implementation and a
/// fixed one for explicit `--rows/--columns`.
#[cfg_attr(test, mockall::automock)]
pub trait ScreenGeometrySource {
    /// Captures the current screen geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryQueryError`] if the size cannot be determined.
    fn screen_geometry(&self) -> Result<ScreenGeometry, GeometryQueryError>;
}

/// How many passwords to print and how to break lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// Exactly `count` passwords with the given wrap policy.
    Count { count: usize, policy: WrapPolicy },
    /// `pages` full screens, each laid out by column count.
    Pages { pages: u32 },
}

/// Parameters of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintRequest {
    pub length: PasswordLength,
    pub mode: PrintMode,
}

/// The print-passwords use case.
pub struct PrintPasswordsUseCase<'a> {
    geometry_source: &'a dyn ScreenGeometrySource,
    fallback: ScreenGeometry,
}

impl<'a> PrintPasswordsUseCase<'a> {
    /// Creates the use case.  `fallback` is used whenever `geometry_source`
    /// fails.
    pub fn new(geometry_source: &'a dyn ScreenGeometrySource, fallback: ScreenGeometry) -> Self {
        Self {
            geometry_source,
            fallback,
        }
    }

    /// Captures the geometry snapshot for one invocation.
    pub fn resolve_geometry(&self) -> ScreenGeometry {
        match self.geometry_source.screen_geometry() {
            Ok(geometry) => geometry,
            Err(e) => {
                warn!("{e}; using fallback geometry {}", self.fallback);
                self.fallback
            }
        }
    }

    /// Prints passwords according to `request`.
    ///
    /// The geometry is captured once and used for every page.
    ///
    /// # Errors
    ///
    /// Returns the generator's error as soon as it fails.  Output already
    /// written to `sink` stays written.
    pub fn execute<G, E, S>(
        &self,
        request: &PrintRequest,
        mut generator: G,
        sink: &mut S,
    ) -> Result<PrintSummary, E>
    where
        G: FnMut() -> Result<String, E>,
        S: PasswordSink + ?Sized,
    {
        let geometry = self.resolve_geometry();
        let printer = ScreenPrinter::new(geometry, request.length);
        info!(%geometry, length = %request.length, mode = ?request.mode, "generating passwords");

        match request.mode {
            PrintMode::Count { count, policy } => printer.print(count, policy, generator, sink),
            PrintMode::Pages { pages } => {
                let mut total = PrintSummary::default();
                for page in 1..=pages {
                    let summary = printer.print_screen(&mut generator, sink)?;
                    debug!(page, printed = summary.printed, "page complete");
                    total.printed += summary.printed;
                    total.lines += summary.lines;
                }
                Ok(total)
            }
        }
    }
}
