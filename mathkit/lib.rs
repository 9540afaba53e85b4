#![warn(clippy::disallowed_types)]
#![warn(missing_docs)]

//! mathkit - Elementary arithmetic utilities shared across my projects.

mod prelude;

/// Elementary arithmetic operations.
pub mod arith;
/// Error handling utilities.
pub mod errors;
/// Logging utilities
pub mod log;
#[cfg(any(test, feature = "test"))]
/// Test utilities, only compiled in with the `test` feature.
pub mod test;

#[allow(unused_imports)]
pub use error_stack::{Report, Result, ResultExt};
#[allow(unused_imports)]
pub use tracing::{debug, error, info, warn};

#[allow(unused_imports)]
pub use crate::errors::prelude::*;
