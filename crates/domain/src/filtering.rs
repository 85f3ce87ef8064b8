// crates/domain/src/filtering.rs
pub mod filter;
pub mod state;
mod wire;

pub use filter::{Filter, FilterMeta, FilterQuery, RangeBounds, RangeFormat, ScriptSpec};
pub use state::FilterState;
