// crates/domain/src/lib.rs
//! # Domain
//!
//! Typed models for brush gestures, search filters and time windows.
//!
//! - [`event`]: brush events, axis fields and range samples
//! - [`filtering`]: filters and the dashboard filter state
//! - [`time`]: absolute and relative time windows

#![allow(clippy::multiple_crate_versions)]

pub mod event;
pub mod filtering;
pub mod time;
