//! Root fields for refetching objects by global ID.
//! See: https://graphql.org/learn/global-object-identification/#node-root-field

use super::node::*;
use super::self_prelude::*;

#[extension_trait]
pub impl NodeQueryObject for Object {
    fn node_by_id_field<Resolver: NodeQueryResolver>(self) -> Self {
        self.field(
            Field::new(
                "node",
                TypeRef::named(TypeRef::NODE),
                Resolver::resolve_node_by_id,
            )
            .argument(
                InputValue::new("id", TypeRef::named_nn(TypeRef::ID))
                    .description("ID of the node."),
            ),
        )
    }
    /// See: https://graphql.org/learn/global-object-identification/#plural-identifying-root-fields
    fn node_by_ids_field<Resolver: NodeQueryResolver>(self) -> Self {
        self.field(
            Field::new(
                "nodes",
                TypeRef::named_nn_list_nn(TypeRef::NODE),
                Resolver::resolve_nodes_by_id,
            )
            .argument(
                InputValue::new("ids", TypeRef::named_nn_list_nn(TypeRef::ID))
                    .description("IDs of the nodes."),
            ),
        )
    }
}

pub trait NodeQueryResolver: Send + Sync + 'static {
    fn resolve_node_by_id(ctx: ResolverContext) -> FieldFuture;
    fn resolve_nodes_by_id(ctx: ResolverContext) -> FieldFuture;
}
