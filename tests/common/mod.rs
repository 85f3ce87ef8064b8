// tests/common/mod.rs
//! Shared fixtures for the binary-level tests.

pub mod fixtures;
pub mod temp;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use temp::TempWorkspace;
