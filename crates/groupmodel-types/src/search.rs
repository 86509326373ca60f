use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named sub-configuration describing how a child list shows its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAndListConfiguration {
    pub name: String,

    /// Header label of the list; empty means "inherit from the root group"
    #[serde(default)]
    pub label: String,

    /// Field projection in display order; empty shows every record field
    #[serde(default)]
    pub field_names: Vec<String>,

    /// Field whose value groups records into facets (multi-map lists)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,

    /// Records on the first page when paging is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl SearchAndListConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            field_names: Vec::new(),
            group_by: None,
            page_size: None,
        }
    }
}

/// Resolution of search-and-list configurations by name.
///
/// Owned by the configuration layer; the engine only looks names up.
pub trait ConfigurationStore {
    fn search_and_list(&self, name: &str) -> Option<&SearchAndListConfiguration>;
}

/// Configuration store backed by an in-memory map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryConfigurationStore {
    configurations: BTreeMap<String, SearchAndListConfiguration>,
}

impl InMemoryConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, configuration: SearchAndListConfiguration) {
        self.configurations
            .insert(configuration.name.clone(), configuration);
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}

impl FromIterator<SearchAndListConfiguration> for InMemoryConfigurationStore {
    fn from_iter<I: IntoIterator<Item = SearchAndListConfiguration>>(iter: I) -> Self {
        let mut store = Self::new();
        for configuration in iter {
            store.insert(configuration);
        }
        store
    }
}

impl ConfigurationStore for InMemoryConfigurationStore {
    fn search_and_list(&self, name: &str) -> Option<&SearchAndListConfiguration> {
        self.configurations.get(name)
    }
}
