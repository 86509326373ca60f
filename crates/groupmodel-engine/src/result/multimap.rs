use super::{ChildResultController, ResultCore, record_group};
use crate::controller::ChildControllerRequest;
use groupmodel_types::{
    ControllerState, PresentationNode, Record, RenderContext, Result, StandardGroup,
};
use tracing::debug;

/// Faceted list: records grouped by the configuration's `group_by` field.
///
/// Facets appear in the order their value is first seen. Records without
/// the field land in a facet with an empty label; without `group_by` every
/// record shares one facet.
pub struct MultiMapResultController {
    core: ResultCore,
}

impl MultiMapResultController {
    pub fn new(request: ChildControllerRequest) -> Self {
        Self {
            core: ResultCore::new(request),
        }
    }
}

fn facets<'a>(records: &'a [Record], group_by: Option<&str>) -> Vec<(String, Vec<&'a Record>)> {
    let mut facets: Vec<(String, Vec<&Record>)> = Vec::new();

    for record in records {
        let key = group_by
            .and_then(|field| record.field_value(field))
            .unwrap_or_default();

        match facets.iter_mut().find(|(facet, _)| facet.as_str() == key) {
            Some((_, members)) => members.push(record),
            None => facets.push((key.to_string(), vec![record])),
        }
    }

    facets
}

impl ChildResultController for MultiMapResultController {
    fn core(&self) -> &ResultCore {
        &self.core
    }

    fn apply_context(&mut self, context: &RenderContext) -> Result<PresentationNode> {
        let configuration = self.core.configuration()?;
        let records = self.core.visible_records(context, configuration);
        let identifier = self.core.identifier();

        let mut group = self.core.list_group(configuration);
        for (facet_index, (facet, members)) in facets(records, configuration.group_by.as_deref())
            .into_iter()
            .enumerate()
        {
            let facet_identifier = identifier.child(facet_index);
            let mut facet_group = StandardGroup::new(facet_identifier.clone(), facet);
            facet_group.children = members
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    record_group(facet_identifier.child(index), record, configuration)
                })
                .collect();
            group.children.push(PresentationNode::Standard(facet_group));
        }

        debug!(
            identifier = %identifier,
            configuration = %configuration.name,
            link_id = self.core.params().link_id,
            facets = group.children.len(),
            "multi-map result built"
        );

        self.core.advance(ControllerState::Finished);
        Ok(PresentationNode::Standard(group))
    }
}
