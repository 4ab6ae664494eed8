//! pwdgen library entry point.
//!
//! Re-exports all public modules so that the binary entry point in `main.rs`
//! and the tests share the same module tree.
//!
//! # What does pwdgen do?
//!
//! `pwdgen` prints random passwords in tidy columns.  By default it prints
//! exactly one screenful: it asks the terminal for its size, lets
//! `pwdgen-core` work out how many passwords of the requested length fit, and
//! streams that many to stdout.  With `--count` it prints a fixed number
//! instead, and with `--pages` several screenfuls back to back.

/// Application layer: the print-passwords use case and its ports.
pub mod application;

/// Infrastructure layer: terminal query, entropy, config file and stdout adapters.
pub mod infrastructure;
