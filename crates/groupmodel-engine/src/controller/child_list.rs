use super::{ControllerCore, GroupModelController, RootRef};
use crate::result::{
    ChildControllerParams, ChildResultController, ListResultController, MultiMapResultController,
};
use groupmodel_types::{
    ConfigurationStore, ControllerState, FieldControl, PresentationNode, RenderContext, Result,
    StandardGroup, TabIdentifier,
};
use std::rc::Rc;
use tracing::debug;

/// Everything a factory needs to build one child result controller
pub struct ChildControllerRequest {
    pub identifier: TabIdentifier,
    pub params: ChildControllerParams,
    pub root: RootRef,
    pub store: Rc<dyn ConfigurationStore>,
}

/// Creation point for the children of a child list group.
pub trait ChildControllerFactory {
    fn create(&self, request: ChildControllerRequest) -> Box<dyn ChildResultController>;
}

/// Produces flat list children
#[derive(Debug, Clone, Copy, Default)]
pub struct ListChildFactory;

impl ChildControllerFactory for ListChildFactory {
    fn create(&self, request: ChildControllerRequest) -> Box<dyn ChildResultController> {
        Box::new(ListResultController::new(request))
    }
}

/// Produces children that group their records by a facet
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiMapChildFactory;

impl ChildControllerFactory for MultiMapChildFactory {
    fn create(&self, request: ChildControllerRequest) -> Box<dyn ChildResultController> {
        Box::new(MultiMapResultController::new(request))
    }
}

/// Group owning an ordered list of child result controllers.
///
/// The factory decides what kind of child gets built; everything else
/// (parameter forwarding, ordering, composing the node) lives here.
pub struct ChildListGroupModelController<F = ListChildFactory> {
    core: ControllerCore,
    field_control: FieldControl,
    store: Rc<dyn ConfigurationStore>,
    factory: F,
    children: Vec<Box<dyn ChildResultController>>,
}

/// Child list group whose children are multi-map result controllers
pub type ChildMultiMapGroupModelController = ChildListGroupModelController<MultiMapChildFactory>;

impl<F: ChildControllerFactory + Default> ChildListGroupModelController<F> {
    /// Build the group and one child per configured child list, in order.
    pub fn new(
        tab_identifier: TabIdentifier,
        label: impl Into<String>,
        field_control: FieldControl,
        store: Rc<dyn ConfigurationStore>,
        root: Option<RootRef>,
    ) -> Self {
        Self::with_factory(tab_identifier, label, field_control, store, root, F::default())
    }
}

impl<F: ChildControllerFactory> ChildListGroupModelController<F> {
    pub fn with_factory(
        tab_identifier: TabIdentifier,
        label: impl Into<String>,
        field_control: FieldControl,
        store: Rc<dyn ConfigurationStore>,
        root: Option<RootRef>,
        factory: F,
    ) -> Self {
        let definitions = field_control.child_lists.clone();
        let mut controller = Self {
            core: ControllerCore::new(tab_identifier, label, root),
            field_control,
            store,
            factory,
            children: Vec::new(),
        };

        for definition in definitions {
            controller.add_child_controller(
                definition.swipe_detail_records,
                definition.link_id,
                &definition.configuration_name,
            );
        }

        controller
    }

    /// Create (but do not add) the next child controller.
    ///
    /// The child inherits this group's list style and paging flag and gets
    /// this group as its root. The configuration name is not checked here;
    /// the child resolves it when context is applied.
    pub fn create_child_controller(
        &self,
        swipe_detail_records: bool,
        link_id: i32,
        search_and_list_configuration_name: &str,
    ) -> Box<dyn ChildResultController> {
        let params = ChildControllerParams {
            list_style: self.field_control.list_style,
            disable_paging: self.field_control.disable_paging,
            swipe_detail_records,
            link_id,
            configuration_name: search_and_list_configuration_name.to_string(),
        };

        self.factory.create(ChildControllerRequest {
            identifier: self.core.identity().tab_identifier().child(self.children.len()),
            params,
            root: self.core.handle(),
            store: Rc::clone(&self.store),
        })
    }

    pub fn add_child_controller(
        &mut self,
        swipe_detail_records: bool,
        link_id: i32,
        search_and_list_configuration_name: &str,
    ) {
        let child = self.create_child_controller(
            swipe_detail_records,
            link_id,
            search_and_list_configuration_name,
        );
        self.children.push(child);
    }

    pub fn children(&self) -> &[Box<dyn ChildResultController>] {
        &self.children
    }

    pub fn field_control(&self) -> &FieldControl {
        &self.field_control
    }
}

impl<F: ChildControllerFactory> GroupModelController for ChildListGroupModelController<F> {
    fn core(&self) -> &ControllerCore {
        &self.core
    }

    fn apply_context(&mut self, context: &RenderContext) -> Result<PresentationNode> {
        self.core.advance(ControllerState::Pending);

        let mut nodes = Vec::with_capacity(self.children.len());
        for child in &mut self.children {
            nodes.push(child.apply_context(context)?);
        }

        debug!(
            tab_identifier = %self.core.identity().tab_identifier(),
            children = nodes.len(),
            "child list group composed"
        );

        let mut group = StandardGroup::new(
            self.core.identity().tab_identifier().clone(),
            self.core.identity().tab_label(),
        );
        group.list_style = Some(self.field_control.list_style);
        group.children = nodes;

        Ok(self.core.finish(PresentationNode::Standard(group)))
    }
}
