// crates/ports/src/formatting.rs
use brushfilter_domain::event::FieldType;
use brushfilter_shared_kernel::Bound;

/// Renders field values for filter pill labels.
pub trait FieldFormatter: Send + Sync {
    fn format(&self, field_type: FieldType, value: Bound) -> String;

    fn format_range(&self, field_type: FieldType, gte: Bound, lt: Bound) -> String {
        format!("{} to {}", self.format(field_type, gte), self.format(field_type, lt))
    }
}
