//! Lazily evaluated linear algebra.
//!
//! This crate re-exports [`lazul_linalg`] as [`linalg`], and adds the pieces needed by
//! applications and benchmarks: logger setup and timing helpers.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log filter installed by [`init_logger!`].
//! * `LAZUL_ITERATIONS`: number of matrix products computed by the `lazul` timing binary.

use log::LevelFilter;

pub use lazul_linalg as linalg;

pub mod timer;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("lazul_linalg"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and the lazul crates will log at *debug* level, unless overridden by
/// `RUST_LOG`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
