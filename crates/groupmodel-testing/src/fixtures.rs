//! Fixtures for configuration and context data.
//!
//! Provides:
//! - Short builders for form items and field controls
//! - A sample configuration store and matching render context
//! - JSON files of a sample form for CLI tests

use anyhow::Result;
use groupmodel_types::{
    ChildListDefinition, ControlKind, FieldControl, Form, FormItem, InMemoryConfigurationStore,
    ListStyle, Record, RenderContext, SearchAndListConfiguration, ViewReference,
};
use std::path::{Path, PathBuf};

pub fn static_text_item(label: &str) -> FormItem {
    FormItem::new(label, ControlKind::StaticText)
}

pub fn unknown_control_item(label: &str, control: &str, view: Option<ViewReference>) -> FormItem {
    let item = FormItem::new(
        label,
        ControlKind::Other {
            name: control.to_string(),
        },
    );
    match view {
        Some(view) => item.with_view_reference(view),
        None => item,
    }
}

/// View reference from a name and `(argument, value)` pairs, in order.
pub fn view_reference(name: &str, arguments: &[(&str, &str)]) -> ViewReference {
    arguments
        .iter()
        .fold(ViewReference::new(name), |view, (arg, value)| {
            view.with_argument(*arg, *value)
        })
}

/// Field control listing `(link_id, configuration_name)` children in order.
pub fn field_control(
    list_style: ListStyle,
    disable_paging: bool,
    children: &[(i32, &str)],
) -> FieldControl {
    FieldControl {
        list_style,
        disable_paging,
        child_lists: children
            .iter()
            .map(|(link_id, name)| ChildListDefinition::new(*link_id, *name))
            .collect(),
    }
}

pub fn record(record_id: &str, fields: &[(&str, &str)]) -> Record {
    fields
        .iter()
        .fold(Record::new(record_id), |record, (name, value)| {
            record.with_field(*name, *value)
        })
}

/// Store with a contact list (`KP`), an activity list grouped by `Type`
/// (`MA`) and an opportunity list without label (`PR`).
pub fn sample_store() -> InMemoryConfigurationStore {
    let mut contacts = SearchAndListConfiguration::new("KP");
    contacts.label = "Contacts".to_string();
    contacts.field_names = vec!["LastName".to_string(), "Phone".to_string()];
    contacts.page_size = Some(2);

    let mut activities = SearchAndListConfiguration::new("MA");
    activities.label = "Activities".to_string();
    activities.field_names = vec!["Subject".to_string()];
    activities.group_by = Some("Type".to_string());

    let opportunities = SearchAndListConfiguration::new("PR");

    [contacts, activities, opportunities].into_iter().collect()
}

/// Context for record `FI.1` with data for every list of [`sample_store`].
pub fn sample_context() -> RenderContext {
    RenderContext::for_record("FI.1")
        .with_linked_records(
            0,
            "KP",
            vec![
                record("KP.1", &[("LastName", "Lovelace"), ("Phone", "111")]),
                record("KP.2", &[("LastName", "Hopper"), ("Phone", "222")]),
                record("KP.3", &[("LastName", "Turing"), ("Phone", "333")]),
            ],
        )
        .with_linked_records(
            0,
            "MA",
            vec![
                record("MA.1", &[("Type", "Call"), ("Subject", "Intro")]),
                record("MA.2", &[("Type", "Visit"), ("Subject", "Demo")]),
                record("MA.3", &[("Type", "Call"), ("Subject", "Follow-up")]),
            ],
        )
        .with_linked_records(1, "PR", vec![record("PR.1", &[("Amount", "1000")])])
}

/// Form exercising every control type the engine knows.
pub fn sample_form() -> Form {
    Form {
        name: "CompanyDetails".to_string(),
        label: "Company".to_string(),
        items: vec![
            static_text_item("Name;Anthropic"),
            static_text_item("Headquarters"),
            FormItem::new(
                "Related",
                ControlKind::ChildList(field_control(
                    ListStyle::Table,
                    false,
                    &[(0, "KP"), (1, "PR")],
                )),
            ),
            FormItem::new(
                "Timeline",
                ControlKind::ChildMultiMap(field_control(ListStyle::Card, true, &[(0, "MA")])),
            ),
            unknown_control_item(
                "Map",
                "GeoMap",
                Some(view_reference("MapView", &[("zoom", "3")])),
            ),
        ],
    }
}

/// Write the sample form, context and store as JSON files into `dir`.
///
/// Returns `(form, context, store)` paths.
pub fn write_sample_files(dir: &Path) -> Result<(PathBuf, PathBuf, PathBuf)> {
    let form_path = dir.join("form.json");
    let context_path = dir.join("context.json");
    let store_path = dir.join("store.json");

    std::fs::write(&form_path, serde_json::to_string_pretty(&sample_form())?)?;
    std::fs::write(&context_path, serde_json::to_string_pretty(&sample_context())?)?;
    std::fs::write(&store_path, serde_json::to_string_pretty(&sample_store())?)?;

    Ok((form_path, context_path, store_path))
}

/// Temporary directory holding [`write_sample_files`] output
pub struct SampleWorkspace {
    temp_dir: tempfile::TempDir,
    pub form: PathBuf,
    pub context: PathBuf,
    pub store: PathBuf,
}

impl SampleWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::TempDir::new()?;
        let (form, context, store) = write_sample_files(temp_dir.path())?;
        Ok(Self {
            temp_dir,
            form,
            context,
            store,
        })
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}
