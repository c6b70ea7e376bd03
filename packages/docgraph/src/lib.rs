//! # docgraph
//!
//! Exposes document-store models through an `async_graphql::dynamic` schema:
//! model fields are converted into GraphQL fields, list and connection fields
//! resolve against the store, and result sets are embedded into the relay
//! connection protocol.

pub mod schema;
pub mod spec;
pub mod store;
pub mod testing;

use thiserror::Error;

pub(self) mod self_prelude {
    pub use anyhow::anyhow;
    pub use async_trait::async_trait;
    pub use extension_trait::extension_trait;
}

pub type GraphqlResult<T> = Result<T, GraphqlError>;

#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("Error building dynamic schema: {0:?}")]
    DynamicSchemaBuildError(#[from] async_graphql::dynamic::SchemaError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Schema-build time failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("You need to pass a valid document model to {0}, received {1:?}: {2}")]
    InvalidModel(String, String, String),
    #[error("The connection of {0} must wrap {0} as its node, received {1:?}")]
    InvalidConnection(String, String),
    #[error("The type {0} doesn't have a connection")]
    MissingConnection(String),
}

/// Raised when a resolved value is not an instance of any document model.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Received incompatible instance {0:?}")]
pub struct TypeMismatchError(pub String);

/// Raised when a node lookup finds no document.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0} {1:?} not found")]
pub struct NotFoundError(pub String, pub String);
