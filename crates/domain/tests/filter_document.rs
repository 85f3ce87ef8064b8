// crates/domain/tests/filter_document.rs
use brushfilter_domain::filtering::{Filter, FilterQuery, FilterState, RangeFormat};
use serde_json::json;

#[test]
fn decodes_plain_range_filter() {
    let filter: Filter = serde_json::from_value(json!({
        "meta": { "key": "bytes", "index": "logstash-*" },
        "range": { "bytes": { "gte": 1, "lt": 4 } }
    }))
    .expect("valid filter");

    assert_eq!(filter.key(), "bytes");
    assert!(!filter.is_scripted());
    assert_eq!(filter.bounds().gte, 1.0);
    assert_eq!(filter.bounds().lt, 4.0);
    assert_eq!(filter.meta.index.as_deref(), Some("logstash-*"));
}

#[test]
fn decodes_scripted_range_filter() {
    let filter: Filter = serde_json::from_value(json!({
        "meta": { "key": "numberField" },
        "script": { "script": { "lang": "painless", "params": { "gte": 1, "lt": 4 } } }
    }))
    .expect("valid filter");

    assert!(filter.is_scripted());
    match &filter.query {
        FilterQuery::ScriptedRange { script } => assert_eq!(script.lang.as_deref(), Some("painless")),
        FilterQuery::Range { .. } => panic!("expected scripted filter"),
    }
}

#[test]
fn encodes_range_keyed_by_field_with_format() {
    let filter: Filter = serde_json::from_value(json!({
        "meta": { "key": "anotherTimeField" },
        "range": { "anotherTimeField": { "gte": 1388559600000_i64, "lt": 1388646000000_i64, "format": "epoch_millis" } }
    }))
    .unwrap();

    let encoded = serde_json::to_value(&filter).unwrap();
    assert_eq!(encoded["range"]["anotherTimeField"]["format"], RangeFormat::EPOCH_MILLIS);
    assert_eq!(encoded["range"]["anotherTimeField"]["gte"], json!(1388559600000_i64));
    assert_eq!(encoded["meta"]["disabled"], json!(false));
}

#[test]
fn rejects_filters_without_a_clause() {
    let result: Result<Filter, _> = serde_json::from_value(json!({ "meta": { "key": "bytes" } }));
    assert!(result.is_err());
}

#[test]
fn rejects_multi_field_range_clause() {
    let result: Result<Filter, _> = serde_json::from_value(json!({
        "meta": { "key": "a" },
        "range": { "a": { "gte": 1, "lt": 2 }, "b": { "gte": 1, "lt": 2 } }
    }));
    assert!(result.is_err());
}

#[test]
fn state_omits_absent_pending_list() {
    let state: FilterState = serde_json::from_value(json!({ "filters": [] })).unwrap();
    assert!(state.new_filters.is_none());
    let encoded = serde_json::to_value(&state).unwrap();
    assert!(encoded.get("$newFilters").is_none());
}

#[test]
fn bare_range_clause_ranges_over_meta_key() {
    let state: FilterState = serde_json::from_value(json!({
        "filters": [{ "meta": { "key": "numberField" }, "range": { "gte": 1, "lt": 4 } }]
    }))
    .expect("bare range clause decodes");

    match &state.filters[0].query {
        FilterQuery::Range { field, bounds } => {
            assert_eq!(field, "numberField");
            assert_eq!(bounds.gte, 1.0);
            assert_eq!(bounds.lt, 4.0);
        }
        FilterQuery::ScriptedRange { .. } => panic!("expected range clause"),
    }

    let encoded = serde_json::to_value(&state.filters[0]).unwrap();
    assert_eq!(encoded["range"], json!({ "numberField": { "gte": 1, "lt": 4 } }));
}
