//! Child result controllers.
//!
//! These are the children of a child list group: each one shows the linked
//! records of one relational link, shaped by a named search-and-list
//! configuration. Records are never fetched here; they come in with the
//! render context.

mod list;
mod multimap;

pub use list::ListResultController;
pub use multimap::MultiMapResultController;

use crate::controller::{ChildControllerRequest, RootRef};
use groupmodel_types::{
    ConfigurationStore, ControllerState, Error, FieldNode, ListStyle, PresentationNode, Record,
    RenderContext, Result, SearchAndListConfiguration, StandardGroup, TabIdentifier,
};
use std::rc::Rc;

/// Parameters a child inherits from, or is handed by, its parent group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildControllerParams {
    pub list_style: ListStyle,
    pub disable_paging: bool,
    pub swipe_detail_records: bool,
    pub link_id: i32,
    pub configuration_name: String,
}

/// State shared by every child result controller: where it sits in the
/// tree, what it was asked to show and how far it got.
pub struct ResultCore {
    identifier: TabIdentifier,
    params: ChildControllerParams,
    root: RootRef,
    store: Rc<dyn ConfigurationStore>,
    state: ControllerState,
}

impl ResultCore {
    pub fn new(request: ChildControllerRequest) -> Self {
        Self {
            identifier: request.identifier,
            params: request.params,
            root: request.root,
            store: request.store,
            state: ControllerState::Initial,
        }
    }

    pub fn identifier(&self) -> &TabIdentifier {
        &self.identifier
    }

    pub fn params(&self) -> &ChildControllerParams {
        &self.params
    }

    pub fn root(&self) -> &RootRef {
        &self.root
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn advance(&mut self, next: ControllerState) {
        self.state.advance(next);
    }

    /// The named search-and-list configuration this child renders.
    pub fn configuration(&self) -> Result<&SearchAndListConfiguration> {
        resolve(self.store.as_ref(), &self.params.configuration_name)
    }

    /// Linked records of this child's link, cut to the first page.
    pub fn visible_records<'a>(
        &self,
        context: &'a RenderContext,
        configuration: &SearchAndListConfiguration,
    ) -> &'a [Record] {
        visible_records(
            context.records_for(self.params.link_id, &self.params.configuration_name),
            configuration,
            &self.params,
        )
    }

    /// Empty list group carrying this child's identifier, label and style.
    pub fn list_group(&self, configuration: &SearchAndListConfiguration) -> StandardGroup {
        let mut group = StandardGroup::new(
            self.identifier.clone(),
            list_label(configuration, &self.root),
        );
        group.list_style = Some(self.params.list_style);
        group
    }
}

/// Controller rendering one child list of a group.
pub trait ChildResultController {
    fn core(&self) -> &ResultCore;

    fn apply_context(&mut self, context: &RenderContext) -> Result<PresentationNode>;

    fn identifier(&self) -> &TabIdentifier {
        self.core().identifier()
    }

    fn params(&self) -> &ChildControllerParams {
        self.core().params()
    }

    fn state(&self) -> ControllerState {
        self.core().state()
    }

    /// Back-reference to the group that created this child
    fn root(&self) -> &RootRef {
        self.core().root()
    }
}

fn resolve<'a>(
    store: &'a dyn ConfigurationStore,
    name: &str,
) -> Result<&'a SearchAndListConfiguration> {
    store
        .search_and_list(name)
        .ok_or_else(|| Error::UnresolvedConfiguration(name.to_string()))
}

/// Records on screen: the first page unless paging is disabled.
fn visible_records<'a>(
    records: &'a [Record],
    configuration: &SearchAndListConfiguration,
    params: &ChildControllerParams,
) -> &'a [Record] {
    match configuration.page_size {
        Some(page_size) if !params.disable_paging => &records[..page_size.min(records.len())],
        _ => records,
    }
}

/// Configuration label, or the root group's label when the configuration
/// leaves it empty.
fn list_label(configuration: &SearchAndListConfiguration, root: &RootRef) -> String {
    if !configuration.label.is_empty() {
        return configuration.label.clone();
    }
    root.upgrade()
        .map(|identity| identity.tab_label())
        .unwrap_or_default()
}

fn record_group(
    identifier: TabIdentifier,
    record: &Record,
    configuration: &SearchAndListConfiguration,
) -> PresentationNode {
    let mut group = StandardGroup::new(identifier, record.record_id.clone());

    group.fields = if configuration.field_names.is_empty() {
        record
            .fields
            .iter()
            .map(|field| FieldNode::new(field.name.clone(), field.value.clone()))
            .collect()
    } else {
        configuration
            .field_names
            .iter()
            .map(|name| FieldNode::new(name.clone(), record.field_value(name).unwrap_or_default()))
            .collect()
    };

    PresentationNode::Standard(group)
}
