// crates/shared-kernel/src/value_objects/mod.rs
pub mod bound;
pub mod epoch;
pub mod field_name;

pub use bound::Bound;
pub use epoch::EpochMillis;
pub use field_name::FieldName;
