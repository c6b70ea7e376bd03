//! Conversion of document models into `async_graphql::dynamic` types.
//!
//! [`build_object_type`] converts a model's fields and registers the result
//! in a [`Registry`]; [`ListField`] and [`ConnectionField`] expose registered
//! types as resolvable root fields; [`DocSchemaBuilder`] assembles everything
//! into an executable schema.

pub mod connection;
pub mod converter;
pub mod field;
pub mod filter;
pub mod node;
pub mod object_type;
pub mod registry;
pub mod resolver;
pub mod resolver_context;
pub mod schema_builder;

pub(self) mod self_prelude {
    pub use super::super::self_prelude::*;
    pub use crate::spec::*;
    pub use crate::store::*;
    pub use crate::{ConfigurationError, NotFoundError, TypeMismatchError};
    pub use async_graphql::dynamic::*;
    pub use indexmap::IndexMap;
    pub use serde_json::Value as JsonValue;
    pub use std::fmt;
    pub use std::sync::Arc;
    pub use tracing::{debug, trace, warn};
}

pub use connection::*;
pub use converter::*;
pub use field::*;
pub use filter::*;
pub use node::*;
pub use object_type::*;
pub use registry::*;
pub use resolver::*;
pub use resolver_context::*;
pub use schema_builder::*;
