use super::{ControllerCore, GroupModelController, RootRef};
use crate::config::DEFAULT_VIEW_NAME_LABEL;
use groupmodel_types::{
    Error, FieldNode, FormItem, PresentationNode, RenderContext, Result, StandardGroup,
    TabIdentifier, ViewReference,
};
use tracing::debug;

/// Diagnostic group for control types the engine has no controller for.
///
/// Lists the view reference name followed by each of its arguments, so a
/// configuration gap shows up on screen instead of as an empty group.
pub struct UnknownControlGroupModelController {
    core: ControllerCore,
    form_item: FormItem,
    view_reference: ViewReference,
    view_name_label: String,
}

impl UnknownControlGroupModelController {
    /// Fails with [`Error::MissingViewReference`] when the item carries no
    /// view reference.
    pub fn new(
        tab_identifier: TabIdentifier,
        form_item: FormItem,
        root: Option<RootRef>,
    ) -> Result<Self> {
        let view_reference = form_item
            .view_reference
            .clone()
            .ok_or_else(|| Error::MissingViewReference(tab_identifier.clone()))?;

        Ok(Self {
            core: ControllerCore::new(tab_identifier, form_item.label.clone(), root),
            form_item,
            view_reference,
            view_name_label: DEFAULT_VIEW_NAME_LABEL.to_string(),
        })
    }

    pub fn with_view_name_label(mut self, label: impl Into<String>) -> Self {
        self.view_name_label = label.into();
        self
    }

    pub fn form_item(&self) -> &FormItem {
        &self.form_item
    }

    pub fn view_reference(&self) -> &ViewReference {
        &self.view_reference
    }
}

impl GroupModelController for UnknownControlGroupModelController {
    fn core(&self) -> &ControllerCore {
        &self.core
    }

    fn apply_context(&mut self, _context: &RenderContext) -> Result<PresentationNode> {
        let mut group = StandardGroup::new(
            self.core.identity().tab_identifier().clone(),
            self.core.identity().tab_label(),
        );

        group.fields.push(FieldNode::new(
            self.view_name_label.clone(),
            self.view_reference.name.clone(),
        ));
        group.fields.extend(
            self.view_reference
                .arguments
                .iter()
                .map(|arg| FieldNode::new(arg.name.clone(), arg.value.clone())),
        );

        debug!(
            tab_identifier = %group.identifier,
            view = %self.view_reference.name,
            arguments = self.view_reference.arguments.len(),
            "unknown control rendered as diagnostic group"
        );

        Ok(self.core.finish(PresentationNode::Standard(group)))
    }
}
