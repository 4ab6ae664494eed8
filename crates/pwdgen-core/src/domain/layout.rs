//! Layout calculator.
//!
//! Answers two questions for a given screen and password length: how many
//! passwords fit on one line, and how many fit on one screen.  Passwords on a
//! line are separated by a single space.  When a password is wider than the
//! screen it wraps across several terminal lines; the calculator still
//! guarantees that at least one password is printed per screen.

use crate::domain::geometry::{PasswordLength, ScreenGeometry};

/// Minimum number of passwords per screen, whatever the geometry.
const MIN_PASSWORDS_PER_SCREEN: usize = 1;

/// Number of passwords that fit completely on one line.
///
/// Each password is followed by one separating space, except that a trailing
/// password may use the leftover cells without a separator after it.  Returns
/// `0` when the password is wider than the line; callers must read that as
/// "does not fit", not as an error.
pub fn columns_per_line(geometry: &ScreenGeometry, length: PasswordLength) -> usize {
    let columns = geometry.columns();
    if length.get() > columns {
        return 0;
    }
    let slot = length.with_separator();

    let full_slots = columns / slot;
    let spare = columns % slot;
    if spare >= length.get() {
        full_slots + 1
    } else {
        full_slots
    }
}

/// Number of terminal lines one password occupies.
///
/// `1` whenever the password fits on a line, otherwise `ceil(length / columns)`.
pub fn lines_per_password(geometry: &ScreenGeometry, length: PasswordLength) -> usize {
    let columns = geometry.columns();
    let length = length.get();
    if length <= columns {
        1
    } else {
        length.div_ceil(columns)
    }
}

/// Number of passwords printed for one full screen.
///
/// - Password fits on a line: `columns_per_line * rows`.
/// - Password wider than the screen: as many stacked multi-line blocks as fit
///   vertically, `rows / lines_per_password`.
///
/// The result is clamped to at least one password.
pub fn passwords_per_screen(geometry: &ScreenGeometry, length: PasswordLength) -> usize {
    let count = if length.get() <= geometry.columns() {
        columns_per_line(geometry, length) * geometry.rows()
    } else {
        geometry.rows() / lines_per_password(geometry, length)
    };
    count.max(MIN_PASSWORDS_PER_SCREEN)
}

/// The derived counts for one geometry and password length.
///
/// Not cached anywhere: compute a fresh plan whenever the geometry or the
/// length changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Passwords per line; `0` when a password does not fit on a line.
    pub columns_per_line: usize,
    /// Terminal lines taken by one password (`≥ 1`).
    pub lines_per_password: usize,
    /// Passwords per full screen (`≥ 1`).
    pub passwords_per_screen: usize,
}

impl LayoutPlan {
    /// Computes all three counts for `geometry` and `length`.
    pub fn compute(geometry: &ScreenGeometry, length: PasswordLength) -> Self {
        Self {
            columns_per_line: columns_per_line(geometry, length),
            lines_per_password: lines_per_password(geometry, length),
            passwords_per_screen: passwords_per_screen(geometry, length),
        }
    }
}
