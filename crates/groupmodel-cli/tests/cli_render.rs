use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use groupmodel_testing::{SampleWorkspace, unknown_control_item};
use groupmodel_types::Form;
use predicates::prelude::*;

fn groupmodel(workspace: &SampleWorkspace) -> Command {
    let mut cmd = cargo_bin_cmd!("groupmodel");
    // Point at a file that does not exist so defaults apply regardless of the host.
    cmd.env("GROUPMODEL_CONFIG", workspace.dir().join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_render_text_outline() {
    let workspace = SampleWorkspace::new().unwrap();

    groupmodel(&workspace)
        .arg("render")
        .arg("--form")
        .arg(&workspace.form)
        .arg("--context")
        .arg(&workspace.context)
        .arg("--store")
        .arg(&workspace.store)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Company [CompanyDetails]"))
        .stdout(predicate::str::contains("  Name [CompanyDetails.0]"))
        .stdout(predicate::str::contains("    Name: Anthropic"))
        .stdout(predicate::str::contains("Contacts [CompanyDetails.2#0]"))
        .stdout(predicate::str::contains("ViewName: MapView"));
}

#[test]
fn test_render_json_output() {
    let workspace = SampleWorkspace::new().unwrap();

    let output = groupmodel(&workspace)
        .args(["render", "--format", "json", "--form"])
        .arg(&workspace.form)
        .arg("--context")
        .arg(&workspace.context)
        .arg("--store")
        .arg(&workspace.store)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = json["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 5);
    assert_eq!(groups[0]["kind"], "multiline");
    assert_eq!(groups[4]["fields"][0]["value"], "MapView");
    assert_eq!(json["controllers"][2]["state"], "finished");
}

#[test]
fn test_render_without_store_reports_unresolved_configuration() {
    let workspace = SampleWorkspace::new().unwrap();

    groupmodel(&workspace)
        .arg("render")
        .arg("--form")
        .arg(&workspace.form)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to render form 'CompanyDetails'"))
        .stderr(predicate::str::contains(
            "Unresolved search and list configuration: KP",
        ));
}

#[test]
fn test_render_reports_missing_view_reference() {
    let workspace = SampleWorkspace::new().unwrap();
    let form = Form {
        name: "Broken".to_string(),
        label: String::new(),
        items: vec![unknown_control_item("Calendar", "Calendar", None)],
    };
    let form_path = workspace.dir().join("broken.json");
    std::fs::write(&form_path, serde_json::to_string(&form).unwrap()).unwrap();

    groupmodel(&workspace)
        .arg("render")
        .arg("--form")
        .arg(&form_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing view reference for group 'Broken.0'",
        ));
}

#[test]
fn test_render_unrecognised_control_type_as_diagnostic_group() {
    let workspace = SampleWorkspace::new().unwrap();
    let form_path = workspace.dir().join("agenda.json");
    std::fs::write(
        &form_path,
        r#"{
            "name": "Agenda",
            "label": "Agenda",
            "items": [{
                "label": "Week",
                "control": {"type": "calendar"},
                "view_reference": {
                    "name": "CalendarView",
                    "arguments": [{"name": "range", "value": "week"}]
                }
            }]
        }"#,
    )
    .unwrap();

    groupmodel(&workspace)
        .arg("render")
        .arg("--form")
        .arg(&form_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("  Week [Agenda.0]"))
        .stdout(predicate::str::contains("    ViewName: CalendarView"))
        .stdout(predicate::str::contains("    range: week"));
}

#[test]
fn test_render_missing_form_file() {
    let workspace = SampleWorkspace::new().unwrap();

    groupmodel(&workspace)
        .args(["render", "--form"])
        .arg(workspace.dir().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_config_prints_defaults() {
    let workspace = SampleWorkspace::new().unwrap();

    groupmodel(&workspace)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("label_separator = \";\""))
        .stdout(predicate::str::contains("view_name_label = \"ViewName\""));
}

#[test]
fn test_config_file_changes_rendering() {
    let workspace = SampleWorkspace::new().unwrap();
    let config_path = workspace.dir().join("custom.toml");
    std::fs::write(&config_path, "view_name_label = \"Ansicht\"\n").unwrap();

    groupmodel(&workspace)
        .arg("--config")
        .arg(&config_path)
        .arg("render")
        .arg("--form")
        .arg(&workspace.form)
        .arg("--context")
        .arg(&workspace.context)
        .arg("--store")
        .arg(&workspace.store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ansicht: MapView"));
}
