use groupmodel_engine::{
    ControllerFactory, EngineConfig, FormRenderer, GroupIdentity, GroupModelController,
    render_form, resolve_config_path,
};
use groupmodel_testing::{
    assert_child_labels, assert_fields, assert_unique_identifiers, child_at, sample_context,
    sample_form, sample_store, static_text_item, unknown_control_item,
};
use groupmodel_types::{
    ConfigurationStore, ControllerState, Error, Form, PresentationNode, RenderContext,
    TabIdentifier,
};
use std::rc::Rc;

fn store() -> Rc<dyn ConfigurationStore> {
    Rc::new(sample_store())
}

#[test]
fn test_sample_form_renders_every_item_in_order() {
    let rendered = render_form(
        &sample_form(),
        &sample_context(),
        store(),
        EngineConfig::default(),
    )
    .unwrap();

    assert_eq!(rendered.identifier.as_str(), "CompanyDetails");
    assert_eq!(rendered.label, "Company");

    let labels: Vec<&str> = rendered.groups.iter().map(|g| g.label()).collect();
    assert_eq!(labels, vec!["Name", "Company", "Related", "Timeline", "Map"]);

    assert_fields(&rendered.groups[0], &[("Name", "Anthropic")]).unwrap();
    assert_fields(&rendered.groups[1], &[("Company", "Headquarters")]).unwrap();
    assert_child_labels(&rendered.groups[2], &["Contacts", "Related"]).unwrap();
    assert_child_labels(child_at(&rendered.groups[3], &[0]).unwrap(), &["Call", "Visit"])
        .unwrap();
    assert_fields(&rendered.groups[4], &[("ViewName", "MapView"), ("zoom", "3")]).unwrap();

    for (index, group) in rendered.groups.iter().enumerate() {
        assert_eq!(group.identifier().as_str(), format!("CompanyDetails.{}", index));
        assert_unique_identifiers(group).unwrap();
    }

    assert!(
        rendered
            .controllers
            .iter()
            .all(|report| report.state == ControllerState::Finished)
    );
    assert_eq!(
        rendered.controllers[4].tab_identifier,
        TabIdentifier::new("CompanyDetails.4")
    );
}

#[test]
fn test_rendering_twice_gives_equal_trees() {
    let form = sample_form();
    let context = sample_context();

    let first = render_form(&form, &context, store(), EngineConfig::default()).unwrap();
    let second = render_form(&form, &context, store(), EngineConfig::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_engine_config_reaches_controllers() {
    let config = EngineConfig {
        label_separator: '=',
        view_name_label: "View".to_string(),
    };
    let form = Form {
        name: "F".to_string(),
        label: "Root".to_string(),
        items: vec![
            static_text_item("Key=Value"),
            static_text_item("Name;Value"),
            unknown_control_item(
                "",
                "Chart",
                Some(groupmodel_testing::view_reference("ChartView", &[])),
            ),
        ],
    };

    let rendered = render_form(&form, &RenderContext::new(), store(), config).unwrap();

    assert_fields(&rendered.groups[0], &[("Key", "Value")]).unwrap();
    // no '=' present: label inherited from the form
    assert_fields(&rendered.groups[1], &[("Root", "Name;Value")]).unwrap();
    assert_fields(&rendered.groups[2], &[("View", "ChartView")]).unwrap();
}

#[test]
fn test_unknown_control_without_view_reference_aborts_render() {
    let form = Form {
        name: "F".to_string(),
        label: String::new(),
        items: vec![
            static_text_item("A;B"),
            unknown_control_item("Broken", "Calendar", None),
        ],
    };

    let result = render_form(&form, &RenderContext::new(), store(), EngineConfig::default());

    match result {
        Err(Error::MissingViewReference(id)) => assert_eq!(id.as_str(), "F.1"),
        other => panic!("expected missing view reference, got {:?}", other),
    }
}

#[test]
fn test_build_controllers_links_form_as_root() {
    let renderer = FormRenderer::new(ControllerFactory::new(store(), EngineConfig::default()));
    let form = sample_form();
    let root = GroupIdentity::new(TabIdentifier::new("CompanyDetails"), "Company");

    let mut controllers = renderer.build_controllers(&form, &root).unwrap();
    assert_eq!(controllers.len(), form.items.len());
    assert!(
        controllers
            .iter()
            .all(|controller| controller.state() == ControllerState::Initial)
    );

    // The hierarchy relabels the root before the pass.
    root.set_tab_label("Renamed");
    let node = controllers[1].apply_context(&RenderContext::new()).unwrap();

    match node {
        PresentationNode::Multiline(group) => {
            assert_eq!(group.label, "Renamed");
            assert_eq!(group.field.value, "Headquarters");
        }
        other => panic!("expected multiline group, got {:?}", other),
    }
}

#[test]
fn test_config_roundtrip_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    assert_eq!(EngineConfig::load_from(&path).unwrap(), EngineConfig::default());

    let config = EngineConfig {
        label_separator: '|',
        view_name_label: "Ansicht".to_string(),
    };
    config.save_to(&path).unwrap();

    assert_eq!(EngineConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_config_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "view_name_label = \"Ansicht\"\n").unwrap();

    let config = EngineConfig::load_from(&path).unwrap();

    assert_eq!(config.label_separator, ';');
    assert_eq!(config.view_name_label, "Ansicht");
}

#[test]
fn test_config_invalid_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "label_separator = \"too long\"\n").unwrap();

    assert!(matches!(
        EngineConfig::load_from(&path),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_explicit_config_path_wins() {
    let path = resolve_config_path(Some("/etc/groupmodel.toml")).unwrap();
    assert_eq!(path, std::path::PathBuf::from("/etc/groupmodel.toml"));
}

#[test]
fn test_record_identification_does_not_shape_the_tree() {
    let with_record = sample_context();
    let mut without_record = with_record.clone();
    without_record.record_identification = None;

    let first = render_form(&sample_form(), &with_record, store(), EngineConfig::default()).unwrap();
    let second =
        render_form(&sample_form(), &without_record, store(), EngineConfig::default()).unwrap();

    assert_eq!(with_record.record_identification.as_deref(), Some("FI.1"));
    assert_eq!(first, second);
}

#[test]
fn test_form_with_unrecognised_control_type_renders_diagnostic_group() {
    let form: Form = serde_json::from_str(
        r#"{
            "name": "Agenda",
            "items": [
                {"label": "Title;Weekly", "control": {"type": "static_text"}},
                {"label": "Week", "control": {"type": "calendar"},
                 "view_reference": {"name": "CalendarView",
                    "arguments": [{"name": "range", "value": "week"}]}}
            ]
        }"#,
    )
    .unwrap();

    let rendered = render_form(&form, &RenderContext::new(), store(), EngineConfig::default()).unwrap();

    assert_eq!(rendered.groups.len(), 2);
    assert_eq!(rendered.groups[1].label(), "Week");
    assert_fields(
        &rendered.groups[1],
        &[("ViewName", "CalendarView"), ("range", "week")],
    )
    .unwrap();
    assert_eq!(rendered.controllers[1].state, ControllerState::Finished);
}
