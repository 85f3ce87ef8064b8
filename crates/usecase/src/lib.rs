// crates/usecase/src/lib.rs
//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`brush`]: Translates a brush gesture into filter or time-range changes
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod brush;
pub mod dto;

pub use brush::ApplyBrush;
pub use dto::{BrushOutcome, BrushTransition, IgnoreReason};
