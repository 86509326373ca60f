use serde::{Deserialize, Serialize};

/// Named value of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordField {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// A linked record, already fetched by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub record_id: String,

    /// Fields in source order
    #[serde(default)]
    pub fields: Vec<RecordField>,
}

impl Record {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(RecordField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

/// Records of one child list, keyed by link and configuration name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedRecords {
    pub link_id: i32,
    pub configuration_name: String,
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Runtime data a rendering pass applies to its controllers.
///
/// `linked_records` feeds the child lists. `record_identification` names the
/// record the form is rendered for; the engine only attaches it to the
/// render span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_identification: Option<String>,

    #[serde(default)]
    pub linked_records: Vec<LinkedRecords>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_record(record_identification: impl Into<String>) -> Self {
        Self {
            record_identification: Some(record_identification.into()),
            linked_records: Vec::new(),
        }
    }

    pub fn with_linked_records(
        mut self,
        link_id: i32,
        configuration_name: impl Into<String>,
        records: Vec<Record>,
    ) -> Self {
        self.linked_records.push(LinkedRecords {
            link_id,
            configuration_name: configuration_name.into(),
            records,
        });
        self
    }

    /// Records for a child list; empty when the host supplied none.
    pub fn records_for(&self, link_id: i32, configuration_name: &str) -> &[Record] {
        self.linked_records
            .iter()
            .find(|set| set.link_id == link_id && set.configuration_name == configuration_name)
            .map(|set| set.records.as_slice())
            .unwrap_or(&[])
    }
}
