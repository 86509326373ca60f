use crate::controller::{GroupIdentity, GroupModelController};
use crate::factory::ControllerFactory;
use groupmodel_types::{
    ControllerState, Form, PresentationNode, RenderContext, Result, TabIdentifier,
};
use serde::Serialize;
use std::rc::Rc;
use tracing::{debug, debug_span};

/// Final state of one controller after a rendering pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerReport {
    pub tab_identifier: TabIdentifier,
    pub state: ControllerState,
}

/// Output of a rendering pass over a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedForm {
    pub identifier: TabIdentifier,
    pub label: String,
    /// One node per form item, in item order
    pub groups: Vec<PresentationNode>,
    pub controllers: Vec<ControllerReport>,
}

/// Parent of the controllers of one form.
///
/// The form itself acts as the root every controller inherits labels from.
pub struct FormRenderer {
    factory: ControllerFactory,
}

impl FormRenderer {
    pub fn new(factory: ControllerFactory) -> Self {
        Self { factory }
    }

    /// One controller per form item, identified as `<form>.<index>`.
    pub fn build_controllers(
        &self,
        form: &Form,
        root: &Rc<GroupIdentity>,
    ) -> Result<Vec<Box<dyn GroupModelController>>> {
        form.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.factory.create(
                    item,
                    TabIdentifier::new(format!("{}.{}", form.name, index)),
                    Some(Rc::downgrade(root)),
                )
            })
            .collect()
    }

    /// Apply `context` to every item of `form`, in item order.
    ///
    /// The first failing controller aborts the pass and its error is
    /// returned unchanged.
    pub fn render(&self, form: &Form, context: &RenderContext) -> Result<RenderedForm> {
        let _span = debug_span!(
            "render_form",
            form = %form.name,
            record = context.record_identification.as_deref().unwrap_or_default()
        )
        .entered();

        let root = GroupIdentity::new(TabIdentifier::new(form.name.clone()), form.label.clone());
        let mut controllers = self.build_controllers(form, &root)?;

        let mut groups = Vec::with_capacity(controllers.len());
        for controller in &mut controllers {
            groups.push(controller.apply_context(context)?);
        }

        debug!(groups = groups.len(), "form rendered");

        Ok(RenderedForm {
            identifier: root.tab_identifier().clone(),
            label: root.tab_label(),
            groups,
            controllers: controllers
                .iter()
                .map(|controller| ControllerReport {
                    tab_identifier: controller.tab_identifier().clone(),
                    state: controller.state(),
                })
                .collect(),
        })
    }
}
