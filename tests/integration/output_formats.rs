// tests/integration/output_formats.rs
use brushfilter::{app::run, config::AppConfigBuilder};
use brushfilter_infra::io::DocumentFormat;
use serde_json::{Value, json};

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, brush_event};

#[test]
fn json_report_contains_outcome_state_and_time() {
    let ws = TempWorkspace::new();
    let event = ws.write_file("event.json", &brush_event(Some(("bytes", "number")), json!([1, 4])));
    let output = ws.path().join("report.json");

    let config = AppConfigBuilder::default()
        .event(event)
        .output(Some(output))
        .build()
        .unwrap();
    run(&config).unwrap();

    let report: Value = serde_json::from_str(&ws.read_file("report.json")).unwrap();
    assert_eq!(report["outcome"]["kind"], "filter_added");
    assert_eq!(report["state"]["$newFilters"][0]["range"]["bytes"], json!({ "gte": 1, "lt": 4 }));
    assert_eq!(report["state"]["$newFilters"][0]["meta"]["value"], "1 to 4");
    assert_eq!(report["time"]["mode"], "quick");
    assert!(report.get("committed").is_none());
}

#[test]
fn yaml_event_and_report() {
    let ws = TempWorkspace::new();
    let event = ws.write_file(
        "event.yaml",
        "data:\n  xAxisField:\n    name: latency\n    type: number\nrange: [5, 2]\n",
    );
    let output = ws.path().join("report.yaml");

    let config = AppConfigBuilder::default()
        .event(event)
        .format(DocumentFormat::Yaml)
        .output(Some(output))
        .build()
        .unwrap();
    run(&config).unwrap();

    let text = ws.read_file("report.yaml");
    assert!(text.contains("kind: filter_added"));
    assert!(text.contains("latency"));
}
