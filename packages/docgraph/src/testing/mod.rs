//! An in-memory document store with fixture models, for tests and demos.

pub mod models;
pub mod schema;
pub mod store;

pub(self) mod self_prelude {
    pub use super::super::self_prelude::*;
    pub use crate::schema::*;
    pub use crate::store::*;
    pub use async_graphql::dynamic::*;
    pub use indexmap::IndexMap;
    pub use serde_json::{json, Value as JsonValue};
    pub use std::sync::Arc;
}

pub use models::*;
pub use schema::*;
pub use store::*;

pub mod prelude {
    pub use super::*;
    pub use crate::schema::*;
    pub use crate::store::*;
    pub use docgraph_lib::config::SchemaConfig;
}
