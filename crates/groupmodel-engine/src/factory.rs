use crate::config::EngineConfig;
use crate::controller::{
    ChildListGroupModelController, ChildMultiMapGroupModelController, GroupModelController,
    ListChildFactory, RootRef, StaticTextGroupModelController, UnknownControlGroupModelController,
};
use groupmodel_types::{ConfigurationStore, ControlKind, FormItem, Result, TabIdentifier};
use std::rc::Rc;
use tracing::warn;

/// Builds the controller matching a form item's control type.
pub struct ControllerFactory {
    store: Rc<dyn ConfigurationStore>,
    config: EngineConfig,
}

impl ControllerFactory {
    pub fn new(store: Rc<dyn ConfigurationStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Unsupported control types fall back to the diagnostic controller,
    /// which needs the item's view reference.
    pub fn create(
        &self,
        item: &FormItem,
        tab_identifier: TabIdentifier,
        root: Option<RootRef>,
    ) -> Result<Box<dyn GroupModelController>> {
        let controller: Box<dyn GroupModelController> = match &item.control {
            ControlKind::ChildList(field_control) => {
                Box::new(ChildListGroupModelController::<ListChildFactory>::new(
                    tab_identifier,
                    item.label.clone(),
                    field_control.clone(),
                    Rc::clone(&self.store),
                    root,
                ))
            }
            ControlKind::ChildMultiMap(field_control) => {
                Box::new(ChildMultiMapGroupModelController::new(
                    tab_identifier,
                    item.label.clone(),
                    field_control.clone(),
                    Rc::clone(&self.store),
                    root,
                ))
            }
            ControlKind::StaticText => Box::new(
                StaticTextGroupModelController::new(tab_identifier, item.clone(), root)
                    .with_separator(self.config.label_separator),
            ),
            ControlKind::Other { name } => {
                warn!(
                    tab_identifier = %tab_identifier,
                    control = %name,
                    "unsupported control type, rendering diagnostic group"
                );
                Box::new(
                    UnknownControlGroupModelController::new(tab_identifier, item.clone(), root)?
                        .with_view_name_label(self.config.view_name_label.clone()),
                )
            }
        };

        Ok(controller)
    }
}
