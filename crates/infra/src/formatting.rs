// crates/infra/src/formatting.rs
use brushfilter_domain::event::FieldType;
use brushfilter_ports::formatting::FieldFormatter;
use brushfilter_shared_kernel::Bound;

/// Dates as ISO-8601 UTC timestamps, everything else as plain numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFieldFormatter;

impl FieldFormatter for DefaultFieldFormatter {
    fn format(&self, field_type: FieldType, value: Bound) -> String {
        if field_type.is_date() {
            if let Ok(iso) = value.to_epoch_millis().and_then(|millis| millis.to_iso_string()) {
                return iso;
            }
        }
        value.to_string()
    }
}
