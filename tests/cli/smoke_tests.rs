// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, brush_event, filter_state, range_filter};

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_brushfilter"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("brushfilter"));
}

#[test]
fn updates_existing_filter_from_stdin_event() {
    let ws = TempWorkspace::new();
    let state = ws.write_file("state.json", &filter_state(vec![range_filter("numberField", 1, 4)]));

    Command::new(env!("CARGO_BIN_EXE_brushfilter"))
        .args(["--event", "-", "--state"])
        .arg(&state)
        .write_stdin(brush_event(Some(("numberField", "number")), json!([3, 7])))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"filter_updated\""))
        .stdout(predicate::str::contains("$newFilters").not());
}

#[test]
fn bad_event_fails_with_message() {
    Command::new(env!("CARGO_BIN_EXE_brushfilter"))
        .args(["--event", "-"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"));
}

#[test]
fn directory_output_is_rejected() {
    let ws = TempWorkspace::new();

    Command::new(env!("CARGO_BIN_EXE_brushfilter"))
        .args(["--event", "-", "--output"])
        .arg(ws.path())
        .write_stdin(brush_event(Some(("numberField", "number")), json!([3, 7])))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output destination"));
}
