//! # pwdgen-core
//!
//! Layout arithmetic and column printing for the `pwdgen` password generator.
//!
//! This crate has zero dependencies on OS APIs or terminals.  It never asks
//! the terminal how large it is and never writes to stdout itself: the screen
//! geometry, the password generator and the output sink are all supplied by
//! the caller.
//!
//! # Architecture overview
//!
//! - **`domain`** – Value objects ([`ScreenGeometry`], [`PasswordLength`]) and
//!   the pure layout calculator that answers "how many passwords fit on one
//!   line, and on one screen?".
//!
//! - **`printer`** – The [`ScreenPrinter`], which pulls passwords one at a time
//!   from a generator callback and writes them through a [`PasswordSink`],
//!   ending each one with a space or a newline according to a [`WrapPolicy`].

pub mod domain;
pub mod printer;

// Re-export the most-used types at the crate root so callers can write
// `pwdgen_core::ScreenPrinter` instead of `pwdgen_core::printer::ScreenPrinter`.
pub use domain::geometry::{GeometryError, PasswordLength, ScreenGeometry};
pub use domain::layout::{columns_per_line, lines_per_password, passwords_per_screen, LayoutPlan};
pub use printer::{PasswordSink, PrintSummary, ScreenPrinter, WrapPolicy};
