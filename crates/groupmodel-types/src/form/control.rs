use serde::{Deserialize, Serialize};

/// Presentation hint for list-shaped groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    #[default]
    Default,
    Table,
    Card,
}

/// One child list the group should show, scoped to a relational link of
/// the current record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildListDefinition {
    pub link_id: i32,
    pub configuration_name: String,
    #[serde(default)]
    pub swipe_detail_records: bool,
}

impl ChildListDefinition {
    pub fn new(link_id: i32, configuration_name: impl Into<String>) -> Self {
        Self {
            link_id,
            configuration_name: configuration_name.into(),
            swipe_detail_records: false,
        }
    }
}

/// Styling and child configuration for list-style groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldControl {
    #[serde(default)]
    pub list_style: ListStyle,

    #[serde(default)]
    pub disable_paging: bool,

    #[serde(default)]
    pub child_lists: Vec<ChildListDefinition>,
}
