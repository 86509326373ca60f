//! Shared data types for the groupmodel engine.
//!
//! This crate only holds schemas: configuration inputs handed over by the
//! configuration layer, the typed render context, the presentation tree
//! handed to the rendering layer, and the controller lifecycle state.
//! Controllers that turn one into the other live in `groupmodel-engine`.

pub mod context;
pub mod error;
pub mod form;
pub mod identifier;
pub mod presentation;
pub mod search;
pub mod state;

pub use context::{LinkedRecords, Record, RecordField, RenderContext};
pub use error::{Error, Result};
pub use form::*;
pub use identifier::TabIdentifier;
pub use presentation::{FieldNode, MultilineGroup, PresentationNode, StandardGroup, Walk};
pub use search::{ConfigurationStore, InMemoryConfigurationStore, SearchAndListConfiguration};
pub use state::ControllerState;
