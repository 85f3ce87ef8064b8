// tests/integration/end_to_end.rs
use std::path::PathBuf;

use brushfilter::{
    app::execute,
    config::{AppConfig, AppConfigBuilder},
};
use brushfilter_domain::{filtering::FilterQuery, time::TimeMode};
use brushfilter_usecase::{BrushOutcome, IgnoreReason};
use serde_json::json;

#[path = "../common/mod.rs"]
mod common;
use common::{
    DAY_IN_MS, JAN_01_2014, TempWorkspace, brush_event, filter_state, range_filter, scripted_filter,
};

fn config(event: PathBuf, state: Option<PathBuf>) -> AppConfig {
    AppConfigBuilder::default().event(event).state(state).build().unwrap()
}

#[test]
fn missing_axis_field_leaves_state_alone() {
    let ws = TempWorkspace::new();
    let event = ws.write_file("event.json", &brush_event(None, json!([1, 2])));

    let report = execute(&config(event, None)).unwrap();

    assert_eq!(report.outcome, BrushOutcome::Ignored { reason: IgnoreReason::MissingAxisField });
    assert!(report.state.new_filters.is_none());
    assert_eq!(report.time.from, "now-24h");
    assert_eq!(report.refresh_interval.display, "Off");
}

#[test]
fn time_field_brush_moves_timefilter() {
    let ws = TempWorkspace::new();
    let event = ws.write_file(
        "event.json",
        &brush_event(Some(("time", "date")), json!([JAN_01_2014, JAN_01_2014 + DAY_IN_MS])),
    );

    let report = execute(&config(event, None)).unwrap();

    assert_eq!(report.time.mode, TimeMode::Absolute);
    assert_eq!(report.time.from, "2014-01-01T07:00:00.000Z");
    assert_eq!(report.time.to, "2014-01-02T07:00:00.000Z");
    assert!(report.state.new_filters.is_none());
}

#[test]
fn zero_span_time_brush_is_ignored() {
    let ws = TempWorkspace::new();
    let event = ws.write_file("event.json", &brush_event(Some(("time", "date")), json!([JAN_01_2014, JAN_01_2014])));

    let report = execute(&config(event, None)).unwrap();

    assert_eq!(report.outcome, BrushOutcome::Ignored { reason: IgnoreReason::ZeroSpan });
    assert_eq!(report.time.mode, TimeMode::Quick);
}

#[test]
fn date_strings_and_millis_agree() {
    let ws = TempWorkspace::new();
    let millis = ws.write_file(
        "millis.json",
        &brush_event(Some(("anotherTimeField", "date")), json!([JAN_01_2014, JAN_01_2014 + DAY_IN_MS])),
    );
    let dates = ws.write_file(
        "dates.json",
        &brush_event(
            Some(("anotherTimeField", "date")),
            json!(["2014-01-01T07:00:00.000Z", "2014-01-02T07:00:00Z"]),
        ),
    );

    let from_millis = execute(&config(millis, None)).unwrap();
    let from_dates = execute(&config(dates, None)).unwrap();

    assert_eq!(from_millis.state.pending(), from_dates.state.pending());
    let bounds = from_dates.state.pending()[0].bounds();
    assert_eq!(bounds.gte, JAN_01_2014 as f64);
    assert_eq!(bounds.lt, (JAN_01_2014 + DAY_IN_MS) as f64);
}

#[test]
fn existing_scripted_filter_is_updated() {
    let ws = TempWorkspace::new();
    let event = ws.write_file("event.json", &brush_event(Some(("numberField", "number")), json!([7, 3])));
    let state = ws.write_file("state.json", &filter_state(vec![scripted_filter("numberField", 1, 4)]));

    let report = execute(&config(event, Some(state))).unwrap();

    assert!(report.state.new_filters.is_none());
    assert_eq!(report.state.filters.len(), 1);
    match &report.state.filters[0].query {
        FilterQuery::ScriptedRange { script } => {
            assert_eq!(script.params.gte, 3.0);
            assert_eq!(script.params.lt, 7.0);
            assert_eq!(script.lang.as_deref(), Some("painless"));
        }
        FilterQuery::Range { .. } => panic!("scripted filter was replaced"),
    }
}

#[test]
fn commit_moves_new_filter_into_filters() {
    let ws = TempWorkspace::new();
    let event = ws.write_file("event.json", &brush_event(Some(("bytes", "number")), json!([1, 2, 3, 4])));
    let state = ws.write_file("state.json", &filter_state(vec![range_filter("other", 0, 1)]));

    let mut cfg = config(event, Some(state));
    cfg.commit = true;
    let report = execute(&cfg).unwrap();

    assert_eq!(report.committed, Some(1));
    assert!(report.state.new_filters.is_none());
    assert_eq!(report.state.filters.len(), 2);
    assert_eq!(report.state.filters[1].key(), "bytes");
}

#[test]
fn malformed_state_is_reported_with_path() {
    let ws = TempWorkspace::new();
    let event = ws.write_file("event.json", &brush_event(Some(("bytes", "number")), json!([1, 2])));
    let state = ws.write_file("state.json", r#"{"filters": [{"meta": {"key": "bytes"}}]}"#);

    let err = execute(&config(event, Some(state))).unwrap_err();
    assert!(format!("{err:#}").contains("state.json"));
}

#[test]
fn bare_range_filter_is_rewritten_under_axis_field() {
    let ws = TempWorkspace::new();
    let bare = json!({ "meta": { "key": "numberField" }, "range": { "gte": 1, "lt": 4 } });
    let state = ws.write_file("state.json", &filter_state(vec![bare]));
    let event = ws.write_file("event.json", &brush_event(Some(("numberField", "number")), json!([3, 7])));

    let report = execute(&config(event, Some(state))).unwrap();
    let encoded = serde_json::to_value(&report.state).unwrap();

    assert_eq!(encoded["filters"][0]["range"], json!({ "numberField": { "gte": 3, "lt": 7 } }));
    assert!(encoded.get("$newFilters").is_none());
}
