// crates/ports/src/lib.rs
//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`time_range`]: The shared dashboard time window
//! - [`formatting`]: Display formatting of field values
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod formatting;
pub mod time_range;
