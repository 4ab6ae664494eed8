//! Screen printer: streams generated passwords into space-separated columns.
//!
//! The printer pulls one password at a time from a generator callback and
//! writes it through a [`PasswordSink`].  After each password it decides, per
//! [`WrapPolicy`], whether the line continues (trailing space) or ends
//! (newline).  The generator and the sink are called strictly alternately on
//! the caller's thread.
//!
//! # Two wrap policies
//!
//! - [`WrapPolicy::ByAccumulatedWidth`] measures the characters already used on
//!   the current line against the raw screen width.  It does not consult the
//!   layout calculator.
//! - [`WrapPolicy::ByColumnCount`] counts passwords on the current line and
//!   wraps when the count reaches [`LayoutPlan::columns_per_line`].
//!
//! The two can produce different line breaks for the same geometry, e.g. on a
//! 13-column screen with 5-character passwords the width policy places three
//! passwords per line while the column count allows two.
//!
//! # Failure
//!
//! If the generator returns an error the call stops at once and returns that
//! error unchanged.  Passwords already written stay written.

mod session;
pub mod sink;

use tracing::{debug, warn};

use crate::domain::geometry::{PasswordLength, ScreenGeometry};
use crate::domain::layout::LayoutPlan;
use session::{Placement, PrintSession};

pub use sink::{PasswordSink, RecordingSink};

/// How the printer decides when to end a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    /// Wrap when the accumulated width plus the next password and its
    /// separator reaches the screen width.
    #[default]
    ByAccumulatedWidth,
    /// Wrap when the number of passwords on the line reaches the computed
    /// columns per line.
    ByColumnCount,
}

/// Outcome of a completed print call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintSummary {
    /// Passwords written to the sink.
    pub printed: usize,
    /// Newline-terminated lines written to the sink.
    pub lines: usize,
}

/// Prints passwords of one fixed length onto a screen of one fixed geometry.
#[derive(Debug, Clone, Copy)]
pub struct ScreenPrinter {
    geometry: ScreenGeometry,
    length: PasswordLength,
}

impl ScreenPrinter {
    /// Creates a printer for `geometry` and `length`.
    pub fn new(geometry: ScreenGeometry, length: PasswordLength) -> Self {
        Self { geometry, length }
    }

    /// Computes the layout plan for this printer's geometry and length.
    pub fn plan(&self) -> LayoutPlan {
        LayoutPlan::compute(&self.geometry, self.length)
    }

    /// Prints `count` passwords, wrapping lines according to `policy`.
    ///
    /// Each password is written as its own chunk, followed by either a single
    /// space or a newline.  The last password always ends with a newline.
    ///
    /// # Errors
    ///
    /// Returns the generator's error, unchanged, as soon as the generator
    /// fails.  Passwords emitted before the failure are not retracted and the
    /// remaining passwords are not attempted.
    pub fn print<G, E, S>(
        &self,
        count: usize,
        policy: WrapPolicy,
        mut generator: G,
        sink: &mut S,
    ) -> Result<PrintSummary, E>
    where
        G: FnMut() -> Result<String, E>,
        S: PasswordSink + ?Sized,
    {
        let plan = self.plan();
        debug!(
            geometry = %self.geometry,
            length = %self.length,
            count,
            ?policy,
            columns_per_line = plan.columns_per_line,
            passwords_per_screen = plan.passwords_per_screen,
            "printing passwords"
        );

        let mut session = PrintSession::new(
            policy,
            self.geometry.columns(),
            &plan,
            self.length.with_separator(),
            count,
        );

        let mut printed = 0;
        while session.remaining() > 0 {
            let password = match generator() {
                Ok(password) => password,
                Err(e) => {
                    session.fail();
                    warn!(
                        printed,
                        state = ?session.state(),
                        "password generator failed; aborting print"
                    );
                    return Err(e);
                }
            };

            let chunk = match session.place_next() {
                Placement::Continuing => format!("{password} "),
                Placement::Wrapping => format!("{password}\n"),
            };
            sink.write_chunk(&chunk);
            printed += 1;
        }
        session.finish();

        let summary = PrintSummary {
            printed,
            lines: session.lines(),
        };
        debug!(
            printed = summary.printed,
            lines = summary.lines,
            state = ?session.state(),
            "print finished"
        );
        Ok(summary)
    }

    /// Explicit-count mode: prints exactly `count` passwords, wrapping by
    /// accumulated width against the raw screen columns.
    ///
    /// # Errors
    ///
    /// Returns the generator's error unchanged; see [`ScreenPrinter::print`].
    pub fn print_count<G, E, S>(
        &self,
        count: usize,
        generator: G,
        sink: &mut S,
    ) -> Result<PrintSummary, E>
    where
        G: FnMut() -> Result<String, E>,
        S: PasswordSink + ?Sized,
    {
        self.print(count, WrapPolicy::ByAccumulatedWidth, generator, sink)
    }

    /// Geometry-derived mode: prints one full screen of passwords, wrapping
    /// after [`LayoutPlan::columns_per_line`] passwords.
    ///
    /// # Errors
    ///
    /// Returns the generator's error unchanged; see [`ScreenPrinter::print`].
    pub fn print_screen<G, E, S>(&self, generator: G, sink: &mut S) -> Result<PrintSummary, E>
    where
        G: FnMut() -> Result<String, E>,
        S: PasswordSink + ?Sized,
    {
        let count = self.plan().passwords_per_screen;
        self.print(count, WrapPolicy::ByColumnCount, generator, sink)
    }
}
