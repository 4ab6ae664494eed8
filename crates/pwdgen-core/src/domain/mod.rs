//! Domain entities for pwdgen.
//!
//! Pure business logic with no infrastructure dependencies: nothing in here
//! touches the terminal, the file system or an entropy source, so every
//! function can be unit-tested on any platform without setup.

/// Screen geometry and password length value objects.
pub mod geometry;

/// Layout calculator: columns per line, lines per password, passwords per screen.
///
/// See [`layout::LayoutPlan`] for the bundled result.
pub mod layout;
