//! Form configuration as handed over by the configuration layer.
//!
//! Everything here is assumed already parsed and validated; the engine reads
//! these values but never checks them against a schema.

mod control;
mod view;

pub use control::{ChildListDefinition, FieldControl, ListStyle};
pub use view::{ViewArgument, ViewReference};

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Control type a form item asks for.
///
/// Serialized internally tagged by `type`. A tag the engine has no
/// dedicated controller for is kept verbatim as [`ControlKind::Other`], so
/// `{"type": "calendar"}` reads back as `Other { name: "calendar" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// Flat list of linked records per child definition
    ChildList(FieldControl),
    /// Linked records grouped by a facet
    ChildMultiMap(FieldControl),
    /// Label/value pair composed from the item label
    StaticText,
    /// Any control type the engine has no dedicated controller for
    Other { name: String },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum KnownControlRef<'a> {
    ChildList(&'a FieldControl),
    ChildMultiMap(&'a FieldControl),
    StaticText,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum KnownControl {
    ChildList(FieldControl),
    ChildMultiMap(FieldControl),
    StaticText,
}

impl From<KnownControl> for ControlKind {
    fn from(known: KnownControl) -> Self {
        match known {
            KnownControl::ChildList(control) => ControlKind::ChildList(control),
            KnownControl::ChildMultiMap(control) => ControlKind::ChildMultiMap(control),
            KnownControl::StaticText => ControlKind::StaticText,
        }
    }
}

impl Serialize for ControlKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ControlKind::ChildList(control) => {
                KnownControlRef::ChildList(control).serialize(serializer)
            }
            ControlKind::ChildMultiMap(control) => {
                KnownControlRef::ChildMultiMap(control).serialize(serializer)
            }
            ControlKind::StaticText => KnownControlRef::StaticText.serialize(serializer),
            ControlKind::Other { name } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", name)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ControlKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let name = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?
            .to_string();

        match name.as_str() {
            "child_list" | "child_multi_map" | "static_text" => KnownControl::deserialize(value)
                .map(ControlKind::from)
                .map_err(de::Error::custom),
            _ => Ok(ControlKind::Other { name }),
        }
    }
}

/// One configured item of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormItem {
    #[serde(default)]
    pub label: String,

    pub control: ControlKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_reference: Option<ViewReference>,
}

impl FormItem {
    pub fn new(label: impl Into<String>, control: ControlKind) -> Self {
        Self {
            label: label.into(),
            control,
            view_reference: None,
        }
    }

    pub fn with_view_reference(mut self, view_reference: ViewReference) -> Self {
        self.view_reference = Some(view_reference);
        self
    }
}

/// A named, labelled, ordered collection of form items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub name: String,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub items: Vec<FormItem>,
}
