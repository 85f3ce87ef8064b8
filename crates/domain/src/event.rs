// crates/domain/src/event.rs
pub mod axis_field;
pub mod brush_event;
pub mod brush_range;

pub use axis_field::{AxisField, FieldType};
pub use brush_event::{BrushEvent, IndexPattern};
pub use brush_range::{BrushRange, BrushValue};
