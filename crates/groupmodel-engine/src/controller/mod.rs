//! Group model controllers.
//!
//! Every controller owns an identity (tab identifier and label), a lifecycle
//! state and, once context has been applied, the presentation node it built.
//! Concrete controllers differ only in how they interpret their
//! configuration and shape the node.

mod child_list;
mod static_text;
mod unknown_control;

pub use child_list::{
    ChildControllerFactory, ChildControllerRequest, ChildListGroupModelController,
    ChildMultiMapGroupModelController, ListChildFactory, MultiMapChildFactory,
};
pub use static_text::StaticTextGroupModelController;
pub use unknown_control::UnknownControlGroupModelController;

use groupmodel_types::{ControllerState, PresentationNode, RenderContext, Result, TabIdentifier};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::trace;

/// Identity shared between a controller and the controllers below it.
///
/// The owning controller holds the only strong reference; descendants keep a
/// [`RootRef`] and only read labels through it.
#[derive(Debug)]
pub struct GroupIdentity {
    tab_identifier: TabIdentifier,
    explicit_label: String,
    tab_label: RefCell<String>,
}

impl GroupIdentity {
    pub fn new(tab_identifier: TabIdentifier, explicit_label: impl Into<String>) -> Rc<Self> {
        let explicit_label = explicit_label.into();
        Rc::new(Self {
            tab_identifier,
            tab_label: RefCell::new(explicit_label.clone()),
            explicit_label,
        })
    }

    pub fn tab_identifier(&self) -> &TabIdentifier {
        &self.tab_identifier
    }

    pub fn explicit_label(&self) -> &str {
        &self.explicit_label
    }

    /// Effective label: the explicit label unless the hierarchy replaced it.
    pub fn tab_label(&self) -> String {
        self.tab_label.borrow().clone()
    }

    pub fn set_tab_label(&self, label: impl Into<String>) {
        *self.tab_label.borrow_mut() = label.into();
    }
}

/// Non-owning back-reference to a root/parent controller's identity
pub type RootRef = Weak<GroupIdentity>;

/// State shared by every controller variant.
#[derive(Debug)]
pub struct ControllerCore {
    identity: Rc<GroupIdentity>,
    root: Option<RootRef>,
    state: ControllerState,
    group: Option<PresentationNode>,
}

impl ControllerCore {
    pub fn new(
        tab_identifier: TabIdentifier,
        explicit_label: impl Into<String>,
        root: Option<RootRef>,
    ) -> Self {
        Self {
            identity: GroupIdentity::new(tab_identifier, explicit_label),
            root,
            state: ControllerState::Initial,
            group: None,
        }
    }

    pub fn identity(&self) -> &GroupIdentity {
        &self.identity
    }

    /// Root identity, if a root was given and is still alive
    pub fn root_identity(&self) -> Option<Rc<GroupIdentity>> {
        self.root.as_ref().and_then(Weak::upgrade)
    }

    /// Back-reference handed to controllers created below this one
    pub fn handle(&self) -> RootRef {
        Rc::downgrade(&self.identity)
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn group(&self) -> Option<&PresentationNode> {
        self.group.as_ref()
    }

    pub fn advance(&mut self, next: ControllerState) {
        let previous = self.state;
        if self.state.advance(next) {
            trace!(
                tab_identifier = %self.identity.tab_identifier,
                from = %previous,
                to = %next,
                "controller state transition"
            );
        }
    }

    /// Finish a context application: cache the node and enter `Finished`.
    ///
    /// A repeated application replaces the cached node; the state stays
    /// `Finished`.
    pub fn finish(&mut self, node: PresentationNode) -> PresentationNode {
        debug_assert_eq!(node.identifier(), &self.identity.tab_identifier);
        self.advance(ControllerState::Finished);
        self.group = Some(node.clone());
        node
    }
}

/// Context-application contract shared by every group model controller.
pub trait GroupModelController {
    fn core(&self) -> &ControllerCore;

    /// Build this controller's presentation node from its configuration and
    /// `context`.
    ///
    /// The returned node carries this controller's tab identifier and is
    /// cached on the controller. Calling it again re-derives a structurally
    /// equal node.
    fn apply_context(&mut self, context: &RenderContext) -> Result<PresentationNode>;

    fn tab_identifier(&self) -> &TabIdentifier {
        self.core().identity().tab_identifier()
    }

    fn explicit_label(&self) -> &str {
        self.core().identity().explicit_label()
    }

    fn tab_label(&self) -> String {
        self.core().identity().tab_label()
    }

    fn set_tab_label(&self, label: &str) {
        self.core().identity().set_tab_label(label);
    }

    fn state(&self) -> ControllerState {
        self.core().state()
    }

    /// Node built by the last context application
    fn group(&self) -> Option<&PresentationNode> {
        self.core().group()
    }

    fn handle(&self) -> RootRef {
        self.core().handle()
    }
}
