// tests/common/fixtures.rs
#![allow(dead_code)]

use serde_json::{Value, json};

pub const DAY_IN_MS: i64 = 24 * 60 * 60 * 1000;
pub const JAN_01_2014: i64 = 1_388_559_600_000;

/// Brush callback payload over `field`, against the `logstash-*` pattern whose time field is `time`.
pub fn brush_event(field: Option<(&str, &str)>, range: Value) -> String {
    let mut data = json!({
        "fieldFormatter": {},
        "indexPattern": { "id": "logstash-*", "timeFieldName": "time" }
    });
    if let Some((name, kind)) = field {
        data["xAxisField"] = json!({ "name": name, "type": kind });
    }
    json!({ "data": data, "range": range }).to_string()
}

pub fn range_filter(field: &str, gte: i64, lt: i64) -> Value {
    json!({
        "meta": { "key": field },
        "range": { field: { "gte": gte, "lt": lt } }
    })
}

pub fn scripted_filter(field: &str, gte: i64, lt: i64) -> Value {
    json!({
        "meta": { "key": field },
        "script": { "script": { "lang": "painless", "params": { "gte": gte, "lt": lt } } }
    })
}

pub fn filter_state(filters: Vec<Value>) -> String {
    json!({ "filters": filters }).to_string()
}
