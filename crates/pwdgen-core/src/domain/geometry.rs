//! Screen geometry and password length value objects.
//!
//! Both types are validated once at construction.  After that every layout
//! function can assume strictly positive rows, columns and length and is
//! therefore total.

use std::fmt;
use std::num::NonZeroUsize;

use thiserror::Error;

/// Errors raised when building a geometry or a password length from raw values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// The screen reported zero rows.
    #[error("screen geometry must have at least one row")]
    ZeroRows,

    /// The screen reported zero columns.
    #[error("screen geometry must have at least one column")]
    ZeroColumns,

    /// A password length of zero was requested.
    #[error("password length must be at least 1")]
    ZeroLength,
}

/// A snapshot of the terminal's visible size in character cells.
///
/// Immutable: one value is captured before a print call and used for the
/// whole call, even if the terminal is resized meanwhile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenGeometry {
    rows: u16,
    columns: u16,
}

impl ScreenGeometry {
    /// Creates a geometry of `rows` × `columns` character cells.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroRows`] or [`GeometryError::ZeroColumns`]
    /// if either dimension is zero.
    pub fn new(rows: u16, columns: u16) -> Result<Self, GeometryError> {
        if rows == 0 {
            return Err(GeometryError::ZeroRows);
        }
        if columns == 0 {
            return Err(GeometryError::ZeroColumns);
        }
        Ok(Self { rows, columns })
    }

    /// Number of visible text rows.
    pub fn rows(&self) -> usize {
        usize::from(self.rows)
    }

    /// Number of visible text columns.
    pub fn columns(&self) -> usize {
        usize::from(self.columns)
    }
}

impl fmt::Display for ScreenGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// The fixed character length of every password produced in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PasswordLength(NonZeroUsize);

impl PasswordLength {
    /// Creates a password length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLength`] when `length` is zero.
    pub fn new(length: usize) -> Result<Self, GeometryError> {
        NonZeroUsize::new(length)
            .map(Self)
            .ok_or(GeometryError::ZeroLength)
    }

    /// The length in characters.
    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// Width of one password plus the single separating space.
    ///
    /// Saturates at `usize::MAX`, which is wider than any screen.
    pub fn with_separator(&self) -> usize {
        self.get().saturating_add(1)
    }
}

impl fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
