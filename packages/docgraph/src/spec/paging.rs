//! `async_graphql::dynamic` extensions for handling pagination.
//! See: https://graphql.org/learn/pagination/

use super::self_prelude::*;

pub type Cursor = String;

#[extension_trait]
pub impl PagingTypeRef for TypeRef {
    const CURSOR: &'static str = "String";
    const PAGE_INFO: &'static str = "PageInfo";
}

#[extension_trait]
pub impl PagingField for Field {
    fn pagination_arguments(self) -> Self {
        self.forward_pagination_arguments()
            .backward_pagination_arguments()
    }
    /// `first`/`after`.
    /// See: https://relay.dev/graphql/connections.htm#sec-Forward-pagination-arguments
    fn forward_pagination_arguments(self) -> Self {
        self.argument(
            InputValue::new("first", TypeRef::named(TypeRef::INT))
                .description("Return at most this many documents from the start of the window."),
        )
        .argument(
            InputValue::new("after", TypeRef::named(TypeRef::CURSOR))
                .description("Start the window after the document at this cursor."),
        )
    }
    /// `last`/`before`.
    /// See: https://relay.dev/graphql/connections.htm#sec-Backward-pagination-arguments
    fn backward_pagination_arguments(self) -> Self {
        self.argument(
            InputValue::new("last", TypeRef::named(TypeRef::INT))
                .description("Return at most this many documents from the end of the window."),
        )
        .argument(
            InputValue::new("before", TypeRef::named(TypeRef::CURSOR))
                .description("End the window before the document at this cursor."),
        )
    }
}

/// See: https://relay.dev/graphql/connections.htm#sec-PageInfo
#[extension_trait]
pub impl PageInfoObject for Object {
    fn new_page_info<Resolver: PageInfoResolver>() -> Self {
        Self::new(TypeRef::PAGE_INFO)
            .description("Information about pagination in a connection.")
            .field(Field::new(
                "hasNextPage",
                TypeRef::named_nn(TypeRef::BOOLEAN),
                Resolver::resolve_has_next_page,
            ))
            .field(Field::new(
                "hasPreviousPage",
                TypeRef::named_nn(TypeRef::BOOLEAN),
                Resolver::resolve_has_previous_page,
            ))
            .field(Field::new(
                "startCursor",
                TypeRef::named(TypeRef::CURSOR),
                Resolver::resolve_start_cursor,
            ))
            .field(Field::new(
                "endCursor",
                TypeRef::named(TypeRef::CURSOR),
                Resolver::resolve_end_cursor,
            ))
    }
}

pub trait PageInfoResolver: Send + Sync + 'static {
    fn resolve_has_next_page(ctx: ResolverContext) -> FieldFuture;
    fn resolve_has_previous_page(ctx: ResolverContext) -> FieldFuture;
    fn resolve_start_cursor(ctx: ResolverContext) -> FieldFuture;
    fn resolve_end_cursor(ctx: ResolverContext) -> FieldFuture;
}

#[extension_trait]
pub impl PagingSchemaBuilder for SchemaBuilder {
    fn register_paging_types<Resolver: PageInfoResolver>(self) -> Self {
        self.register(Object::new_page_info::<Resolver>())
    }
}
