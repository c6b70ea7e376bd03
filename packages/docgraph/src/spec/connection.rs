//! `async_graphql::dynamic` extensions for handling GraphQL connections.
//! See: https://relay.dev/graphql/connections.htm#sec-Connection-Types

use super::paging::*;
use super::self_prelude::*;

#[extension_trait]
pub impl ConnectionTypeRef for TypeRef {
    fn connection(node_name: impl Into<String>) -> String {
        format!("{}Connection", node_name.into())
    }
    /// Edge types are named after the connection, minus its `Connection`
    /// suffix.
    fn connection_edge(connection_name: impl AsRef<str>) -> String {
        let connection_name = connection_name.as_ref();
        let base = connection_name
            .strip_suffix("Connection")
            .unwrap_or(connection_name);
        format!("{}Edge", base)
    }
}

#[extension_trait]
pub impl ConnectionObject for Object {
    fn new_connection<Resolver: ConnectionResolver>(
        connection_name: impl Into<String>,
        node_name: impl Into<String>,
    ) -> Self {
        let connection_name = connection_name.into();
        let node_name = node_name.into();
        Self::new(connection_name.clone())
            .field(Field::new(
                "totalCount",
                TypeRef::named_nn(TypeRef::INT),
                Resolver::resolve_total_count,
            ))
            .field(Field::new(
                "nodes",
                TypeRef::named_nn_list_nn(node_name),
                Resolver::resolve_nodes,
            ))
            .field(Field::new(
                "edges",
                TypeRef::named_nn_list_nn(TypeRef::connection_edge(&connection_name)),
                Resolver::resolve_edges,
            ))
            .field(Field::new(
                "pageInfo",
                TypeRef::named_nn(TypeRef::PAGE_INFO),
                Resolver::resolve_page_info,
            ))
    }
}

pub trait ConnectionResolver: Send + Sync + 'static {
    fn resolve_total_count(ctx: ResolverContext) -> FieldFuture;
    fn resolve_nodes(ctx: ResolverContext) -> FieldFuture;
    fn resolve_edges(ctx: ResolverContext) -> FieldFuture;
    fn resolve_page_info(ctx: ResolverContext) -> FieldFuture;
}

/// See: https://relay.dev/graphql/connections.htm#sec-Edge-Types
#[extension_trait]
pub impl ConnectionEdgeObject for Object {
    fn new_connection_edge<Resolver: ConnectionEdgeResolver>(
        connection_name: impl AsRef<str>,
        node_name: impl Into<String>,
    ) -> Self {
        Self::new(TypeRef::connection_edge(connection_name))
            .field(Field::new(
                "node",
                TypeRef::named_nn(node_name.into()),
                Resolver::resolve_node,
            ))
            .field(Field::new(
                "cursor",
                TypeRef::named_nn(TypeRef::CURSOR),
                Resolver::resolve_cursor,
            ))
    }
}

pub trait ConnectionEdgeResolver: Send + Sync + 'static {
    fn resolve_node(ctx: ResolverContext) -> FieldFuture;
    fn resolve_cursor(ctx: ResolverContext) -> FieldFuture;
}

#[extension_trait]
pub impl ConnectionFieldExt for Field {
    /// See: https://relay.dev/graphql/connections.htm#sec-Arguments
    fn connection_arguments(self) -> Self {
        self.pagination_arguments()
    }
}
