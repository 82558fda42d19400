//! # Exploration Engine
//!
//! Drives the reverse-and-add process: one candidate at a time in
//! [`explore`], whole candidate sets in [`sweep`].
//!
//! ## Contents
//! * **[`explore`]**: The per-candidate iteration loop and its tagged
//!   [`explore::Outcome`].
//! * **[`report`]**: Per-candidate reports and sweep tallies.
//! * **[`sweep`]**: Batch execution across sequential or parallel
//!   strategies.

pub mod explore;
pub mod report;
pub mod sweep;
