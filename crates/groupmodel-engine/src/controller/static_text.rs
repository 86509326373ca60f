use super::{ControllerCore, GroupModelController, RootRef};
use crate::config::DEFAULT_LABEL_SEPARATOR;
use groupmodel_types::{
    FieldNode, FormItem, MultilineGroup, PresentationNode, RenderContext, Result, TabIdentifier,
};
use tracing::debug;

/// Label/value group composed from a single `label;value` string.
///
/// Without a separator the value stays local and the label is taken from
/// the root controller, or from this controller when there is no root.
pub struct StaticTextGroupModelController {
    core: ControllerCore,
    form_item: FormItem,
    separator: char,
}

impl StaticTextGroupModelController {
    pub fn new(tab_identifier: TabIdentifier, form_item: FormItem, root: Option<RootRef>) -> Self {
        Self {
            core: ControllerCore::new(tab_identifier, form_item.label.clone(), root),
            form_item,
            separator: DEFAULT_LABEL_SEPARATOR,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn form_item(&self) -> &FormItem {
        &self.form_item
    }

    fn split_label(&self) -> (String, String) {
        let tab_label = self.core.identity().tab_label();
        let mut parts = tab_label.split(self.separator);
        let first = parts.next().unwrap_or_default();

        // Parts beyond the second are dropped.
        match parts.next() {
            Some(second) => (first.to_string(), second.to_string()),
            None => match self.core.root_identity() {
                Some(root) => (root.tab_label(), tab_label.clone()),
                None => (tab_label.clone(), String::new()),
            },
        }
    }
}

impl GroupModelController for StaticTextGroupModelController {
    fn core(&self) -> &ControllerCore {
        &self.core
    }

    fn apply_context(&mut self, _context: &RenderContext) -> Result<PresentationNode> {
        let (label_text, field_text) = self.split_label();

        debug!(
            tab_identifier = %self.core.identity().tab_identifier(),
            label = %label_text,
            "static text group composed"
        );

        let node = PresentationNode::Multiline(MultilineGroup {
            identifier: self.core.identity().tab_identifier().clone(),
            field: FieldNode::new(label_text.clone(), field_text),
            label: label_text,
        });

        Ok(self.core.finish(node))
    }
}
