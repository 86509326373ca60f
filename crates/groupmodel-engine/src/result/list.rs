use super::{ChildResultController, ResultCore, record_group};
use crate::controller::ChildControllerRequest;
use groupmodel_types::{ControllerState, PresentationNode, RenderContext, Result};
use tracing::debug;

/// Flat list: one record group per linked record, in context order.
pub struct ListResultController {
    core: ResultCore,
}

impl ListResultController {
    pub fn new(request: ChildControllerRequest) -> Self {
        Self {
            core: ResultCore::new(request),
        }
    }
}

impl ChildResultController for ListResultController {
    fn core(&self) -> &ResultCore {
        &self.core
    }

    fn apply_context(&mut self, context: &RenderContext) -> Result<PresentationNode> {
        let configuration = self.core.configuration()?;
        let records = self.core.visible_records(context, configuration);
        let identifier = self.core.identifier();

        let mut group = self.core.list_group(configuration);
        group.children = records
            .iter()
            .enumerate()
            .map(|(index, record)| record_group(identifier.child(index), record, configuration))
            .collect();

        debug!(
            identifier = %identifier,
            configuration = %configuration.name,
            link_id = self.core.params().link_id,
            records = group.children.len(),
            "list result built"
        );

        self.core.advance(ControllerState::Finished);
        Ok(PresentationNode::Standard(group))
    }
}
