// Engine module - turns form configuration plus a render context into a
// presentation tree. Sits between the configuration layer (types) and the
// rendering layer, which only ever sees the returned nodes.

pub mod config;
pub mod controller;
pub mod factory;
pub mod renderer;
pub mod result;

pub use config::{EngineConfig, resolve_config_path};
pub use controller::{
    ChildControllerFactory, ChildControllerRequest, ChildListGroupModelController,
    ChildMultiMapGroupModelController, ControllerCore, GroupIdentity, GroupModelController,
    ListChildFactory, MultiMapChildFactory, RootRef, StaticTextGroupModelController,
    UnknownControlGroupModelController,
};
pub use factory::ControllerFactory;
pub use renderer::{ControllerReport, FormRenderer, RenderedForm};
pub use result::{
    ChildControllerParams, ChildResultController, ListResultController, MultiMapResultController,
    ResultCore,
};

use groupmodel_types::{ConfigurationStore, Form, RenderContext, Result};
use std::rc::Rc;

// Façade API - one call for hosts that do not need the controllers themselves

/// Render every item of `form` against `context` with the given configuration.
pub fn render_form(
    form: &Form,
    context: &RenderContext,
    store: Rc<dyn ConfigurationStore>,
    config: EngineConfig,
) -> Result<RenderedForm> {
    FormRenderer::new(ControllerFactory::new(store, config)).render(form, context)
}
