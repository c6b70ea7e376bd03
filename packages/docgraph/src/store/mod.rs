//! The document-store collaborator boundary.
//!
//! A store exposes its models through [`DocumentModel`]; everything the
//! GraphQL layer knows about a model comes from its [`ModelSchema`].

pub mod document;
pub mod meta;
pub mod model;
pub mod model_builder;
pub mod query;

pub(self) mod self_prelude {
    pub use super::super::self_prelude::*;
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};
    pub use std::fmt;
}

pub use document::*;
pub use meta::*;
pub use model::*;
pub use model_builder::*;
pub use query::*;
