use groupmodel_types::*;

fn leaf(id: &str, label: &str) -> PresentationNode {
    PresentationNode::Standard(StandardGroup::new(TabIdentifier::new(id), label))
}

#[test]
fn test_state_only_moves_forward() {
    let mut state = ControllerState::default();
    assert_eq!(state, ControllerState::Initial);

    assert!(state.advance(ControllerState::Pending));
    assert!(state.advance(ControllerState::Finished));
    assert!(state.is_finished());

    assert!(!state.advance(ControllerState::Initial));
    assert!(!state.advance(ControllerState::Pending));
    assert!(!state.advance(ControllerState::Finished));
    assert_eq!(state, ControllerState::Finished);
}

#[test]
fn test_state_can_skip_pending() {
    let mut state = ControllerState::Initial;
    assert!(state.advance(ControllerState::Finished));
    assert_eq!(state.to_string(), "finished");
}

#[test]
fn test_walk_is_depth_first_in_child_order() {
    let mut b = StandardGroup::new(TabIdentifier::new("b"), "B");
    b.children = vec![leaf("b1", "B1"), leaf("b2", "B2")];

    let mut root = StandardGroup::new(TabIdentifier::new("root"), "Root");
    root.children = vec![leaf("a", "A"), PresentationNode::Standard(b), leaf("c", "C")];
    let root = PresentationNode::Standard(root);

    let visited: Vec<(usize, &str)> = root
        .walk()
        .map(|(depth, node)| (depth, node.label()))
        .collect();

    assert_eq!(
        visited,
        vec![(0, "Root"), (1, "A"), (1, "B"), (2, "B1"), (2, "B2"), (1, "C")]
    );
}

#[test]
fn test_multiline_node_exposes_its_field() {
    let node = PresentationNode::Multiline(MultilineGroup {
        identifier: TabIdentifier::new("Form.0"),
        label: "Name".to_string(),
        field: FieldNode::new("Name", "Value"),
    });

    assert_eq!(node.fields(), &[FieldNode::new("Name", "Value")]);
    assert!(node.children().is_empty());
    assert!(node.as_standard().is_none());

    insta::assert_json_snapshot!(node, @r###"
    {
      "kind": "multiline",
      "identifier": "Form.0",
      "label": "Name",
      "field": {
        "label": "Name",
        "value": "Value"
      }
    }
    "###);
}

#[test]
fn test_records_for_matches_link_and_configuration() {
    let context = RenderContext::for_record("FI.1")
        .with_linked_records(1, "Contacts", vec![Record::new("KP.1")])
        .with_linked_records(2, "Contacts", vec![Record::new("KP.2"), Record::new("KP.3")]);

    assert_eq!(context.records_for(2, "Contacts").len(), 2);
    assert_eq!(context.records_for(1, "Contacts")[0].record_id, "KP.1");
    assert!(context.records_for(1, "Activities").is_empty());
    assert!(context.records_for(3, "Contacts").is_empty());
}

#[test]
fn test_view_reference_argument_lookup_takes_first_match() {
    let view = ViewReference::new("DetailView")
        .with_argument("recordId", "42")
        .with_argument("mode", "edit")
        .with_argument("mode", "view");

    assert_eq!(view.argument_value("mode"), Some("edit"));
    assert_eq!(view.argument_value("missing"), None);
}

#[test]
fn test_form_item_deserializes_control_kinds() {
    let json = r#"[
        {"label": "Contacts", "control": {"type": "child_list", "list_style": "table",
            "child_lists": [{"link_id": 0, "configuration_name": "KP"}]}},
        {"label": "Name;Value", "control": {"type": "static_text"}},
        {"label": "Map", "control": {"type": "geo_map"},
         "view_reference": {"name": "MapView", "arguments": [{"name": "zoom", "value": "3"}]}}
    ]"#;

    let items: Vec<FormItem> = serde_json::from_str(json).unwrap();

    match &items[0].control {
        ControlKind::ChildList(control) => {
            assert_eq!(control.list_style, ListStyle::Table);
            assert!(!control.disable_paging);
            assert_eq!(control.child_lists, vec![ChildListDefinition::new(0, "KP")]);
        }
        other => panic!("unexpected control {:?}", other),
    }
    assert_eq!(items[1].control, ControlKind::StaticText);
    assert_eq!(
        items[2].control,
        ControlKind::Other {
            name: "geo_map".to_string()
        }
    );
    assert_eq!(
        items[2].view_reference.as_ref().and_then(|v| v.argument_value("zoom")),
        Some("3")
    );
}

#[test]
fn test_unrecognised_control_type_is_kept_as_other() {
    let json = r#"{"label": "Agenda", "control": {"type": "calendar", "week_start": "monday"},
        "view_reference": {"name": "CalendarView"}}"#;

    let item: FormItem = serde_json::from_str(json).unwrap();
    assert_eq!(
        item.control,
        ControlKind::Other {
            name: "calendar".to_string()
        }
    );

    let reparsed: FormItem = serde_json::from_str(&serde_json::to_string(&item).unwrap()).unwrap();
    assert_eq!(reparsed, item);
    insta::assert_json_snapshot!(item.control, @r###"
    {
      "type": "calendar"
    }
    "###);
}

#[test]
fn test_malformed_known_control_is_still_rejected() {
    let missing_tag = serde_json::from_str::<ControlKind>(r#"{"list_style": "table"}"#);
    assert!(missing_tag.is_err());

    let bad_child_lists =
        serde_json::from_str::<ControlKind>(r#"{"type": "child_list", "child_lists": 3}"#);
    assert!(bad_child_lists.is_err());
}

#[test]
fn test_in_memory_store_resolves_by_name() {
    let store: InMemoryConfigurationStore = vec![
        SearchAndListConfiguration::new("KP"),
        SearchAndListConfiguration::new("MA"),
    ]
    .into_iter()
    .collect();

    assert_eq!(store.len(), 2);
    assert!(store.search_and_list("KP").is_some());
    assert!(store.search_and_list("FI").is_none());
}
