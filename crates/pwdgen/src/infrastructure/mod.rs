//! Infrastructure layer for the pwdgen binary.
//!
//! Contains OS-facing adapters.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `pwdgen_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`config`** – TOML configuration file lookup and parsing.
//! - **`generator`** – Password generator backed by the OS entropy source.
//! - **`sink`** – Adapter from any `io::Write` (normally stdout) to the
//!   printer's infallible sink interface.
//! - **`terminal`** – Screen geometry sources: the live terminal via
//!   `crossterm`, and a fixed size for explicit `--rows/--columns`.

pub mod config;
pub mod generator;
pub mod sink;
pub mod terminal;
