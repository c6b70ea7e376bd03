//! `async_graphql::dynamic` extensions for handling GraphQL nodes.
//! See: https://graphql.org/learn/global-object-identification/#node-interface

use super::self_prelude::*;

#[extension_trait]
pub impl NodeTypeRef for TypeRef {
    const NODE: &'static str = "Node";
}

#[extension_trait]
pub impl NodeInterface for Interface {
    fn new_node() -> Self {
        Self::new(TypeRef::NODE)
            .description("An object with a globally unique ID.")
            .field(InterfaceField::new("id", TypeRef::named_nn(TypeRef::ID)))
    }
}

#[extension_trait]
pub impl NodeObject for Object {
    /// Implement the `Node` interface, exposing `id` as a global ID.
    fn node_id_field<Resolver: NodeResolver>(self) -> Self {
        self.implement(TypeRef::NODE).field(
            Field::new("id", TypeRef::named_nn(TypeRef::ID), Resolver::resolve_global_id)
                .description("The ID of the object."),
        )
    }
}

pub trait NodeResolver: Send + Sync + 'static {
    fn resolve_global_id(ctx: ResolverContext) -> FieldFuture;
}

#[extension_trait]
pub impl NodeSchemaBuilder for SchemaBuilder {
    fn register_node_types(self) -> Self {
        self.register(Interface::new_node())
    }
}
