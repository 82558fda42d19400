//! # Shared Foundations
//!
//! Types and helpers shared by every `revadd` crate.
//!
//! ## Contents
//! * **[`candidates`]**: Candidate selection from seeds, ranges, and named sweeps.
//! * **[`config`]**: Runtime options threaded from the CLI into the engine.
//! * **[`utils`]**: Small shared utilities (keyboard interrupt listener).
//!
//! The crate also exports the logging vocabulary ([`info!`], [`success!`],
//! [`warn!`], [`error!`]) used across the workspace, so every crate emits
//! events the terminal formatter knows how to render.

pub mod candidates;
pub mod config;
pub mod utils;

#[doc(hidden)]
pub use tracing;

/// Event target the terminal formatter renders with the success symbol.
pub const SUCCESS_TARGET: &str = "revadd::success";

/// Informational event, rendered as `[+]`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::tracing::info!($($arg)*) };
}

/// Milestone event, rendered as `[✓]`.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => { $crate::tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*) };
}

/// Recoverable oddity, rendered as `[*]`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::tracing::warn!($($arg)*) };
}

/// Failure worth surfacing, rendered as `[-]`.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::tracing::error!($($arg)*) };
}
