//! Application layer use cases.
//!
//! - **`print_passwords`** – Resolves the screen geometry (falling back to a
//!   configured size when the terminal cannot be queried), then drives the
//!   `pwdgen-core` printer in explicit-count or paged mode.  The geometry
//!   source, the generator and the sink are all injected, so the use case runs
//!   in tests without a terminal.

pub mod print_passwords;
