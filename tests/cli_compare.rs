mod common;

use common::{API_PATH, PRE_ONLY_INSPECTIONS, SAMPLE_INSPECTIONS, TestContext};
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;
use std::fs;

const REPORT: &str = "## Room 1\n\n- Wall height dropped from 10.0 ft to 9.8 ft.\n- 2 new cracks reported.";

#[test]
fn compare_prints_model_report() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", API_PATH)
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({"model": "gpt-4o-mini", "temperature": 0.0})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TestContext::completion_body(REPORT))
        .expect(1)
        .create();
    ctx.write_config(&server.url());
    ctx.write_inspections(SAMPLE_INSPECTIONS);

    ctx.cli()
        .args(["compare", "--input", "inspections.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(REPORT));

    mock.assert();
}

#[test]
fn compare_sends_every_field_in_the_prompt() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", API_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Pre-Earthquake Data".to_string()),
            Matcher::Regex("Post-Earthquake Data".to_string()),
            Matcher::Regex("Height_of_the_wall_in_feet: 10.0".to_string()),
            Matcher::Regex("Total_number_of_new_cracks_in_the_wall: 2.0".to_string()),
            Matcher::Regex("Maximum_width_of_any_crack_observed_in_inches: 0.25".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TestContext::completion_body("ok"))
        .expect(1)
        .create();
    ctx.write_config(&server.url());
    ctx.write_inspections(SAMPLE_INSPECTIONS);

    ctx.cli().args(["compare", "--input", "inspections.toml"]).assert().success();

    mock.assert();
}

#[test]
fn compare_with_empty_post_list_warns_without_calling_model() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", API_PATH).expect(0).create();
    ctx.write_config(&server.url());
    ctx.write_inspections(PRE_ONLY_INSPECTIONS);

    ctx.cli()
        .args(["compare", "--input", "inspections.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please submit both Pre-Earthquake and Post-Earthquake data before comparing",
        ));

    mock.assert();
}

#[test]
fn missing_credential_surfaces_at_call_time() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", API_PATH).expect(0).create();
    ctx.write_config(&server.url());
    ctx.write_inspections(SAMPLE_INSPECTIONS);

    ctx.cli()
        .args(["compare", "--input", "inspections.toml"])
        .env_remove("OPENAI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));

    mock.assert();
}

#[test]
fn model_failure_is_reported_once_without_retry() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", API_PATH)
        .with_status(503)
        .with_body("overloaded")
        .expect(1)
        .create();
    ctx.write_config(&server.url());
    ctx.write_inspections(SAMPLE_INSPECTIONS);

    ctx.cli()
        .args(["compare", "--input", "inspections.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Model invocation failed").and(predicate::str::contains("503")));

    mock.assert();
}

#[test]
fn prompt_preview_prints_prompt_without_calling_model() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", API_PATH).expect(0).create();
    ctx.write_config(&server.url());
    ctx.write_inspections(SAMPLE_INSPECTIONS);

    ctx.cli()
        .args(["compare", "--input", "inspections.toml", "--prompt-preview"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("=== System ===")
                .and(predicate::str::contains("Compare the form values based on room number."))
                .and(predicate::str::contains("Current_height_of_the_wall_in_feet: 9.8")),
        );

    mock.assert();
}

#[test]
fn save_writes_report_verbatim() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", API_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TestContext::completion_body(REPORT))
        .create();
    ctx.write_config(&server.url());
    ctx.write_inspections(SAMPLE_INSPECTIONS);

    ctx.cli()
        .args(["compare", "--input", "inspections.toml", "--save", "reports/room1.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved report to"));

    let saved = fs::read_to_string(ctx.work_dir().join("reports/room1.md")).unwrap();
    assert_eq!(saved, REPORT);
}

#[test]
fn explicit_missing_config_fails() {
    let ctx = TestContext::new();
    ctx.write_inspections(SAMPLE_INSPECTIONS);

    ctx.cli()
        .args(["--config", "nowhere.toml", "compare", "--input", "inspections.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_inspection_file_fails() {
    let ctx = TestContext::new();
    ctx.write_inspections(&SAMPLE_INSPECTIONS.replace("Room 1", "Room 7"));

    ctx.cli()
        .args(["compare", "--input", "inspections.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn help_lists_commands() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("session").and(predicate::str::contains("compare")));
}

#[test]
fn session_without_terminal_reports_interaction_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("session")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Damage Estimate Analysis Report Generator"))
        .stderr(predicate::str::contains("Interaction failed"));
}
