use super::connection::*;
use super::converter::*;
use super::node::*;
use super::object_type::*;
use super::resolver_context::*;
use super::self_prelude::*;
use async_graphql::Value;

/// Schema data shared by every generated resolver: the output types the
/// schema was assembled from, keyed by model.
pub struct DocResolver {
    types: IndexMap<ModelId, ObjectType>,
}

#[derive(thiserror::Error, Debug)]
pub enum DocResolverError {
    #[error("Invalid global ID {0:?}")]
    InvalidGlobalId(String),
    #[error("No output type is named {0}")]
    UnknownType(String),
    #[error(transparent)]
    ResolverContext(#[from] DocResolverContextError),
    #[error(transparent)]
    Node(#[from] NodeError),
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type DocResolverResult<T> = Result<T, DocResolverError>;

impl DocResolver {
    pub fn new(types: impl IntoIterator<Item = ObjectType>) -> Self {
        Self {
            types: types
                .into_iter()
                .map(|object_type| (object_type.model_id(), object_type))
                .collect(),
        }
    }

    pub fn object_type(&self, model: &str) -> Option<&ObjectType> {
        self.types.get(model)
    }
    pub fn object_type_by_name(&self, name: &str) -> Option<&ObjectType> {
        self.types
            .values()
            .find(|object_type| object_type.name() == name)
    }

    /// The output type a document resolves to.
    pub fn type_for(&self, document: &Document) -> DocResolverResult<&ObjectType> {
        for object_type in self.types.values() {
            if object_type.is_type_of(document)? {
                return Ok(object_type);
            }
        }
        Err(DocResolverError::UnknownType(document.model().clone()))
    }

    /// Load the document a global ID points to, tagged with its type.
    pub async fn load_node(&self, global_id: &str) -> DocResolverResult<FieldValue<'static>> {
        let (type_name, id) = from_global_id(global_id)
            .ok_or_else(|| DocResolverError::InvalidGlobalId(global_id.to_string()))?;
        let object_type = self
            .object_type_by_name(&type_name)
            .filter(|object_type| object_type.is_node())
            .ok_or(DocResolverError::UnknownType(type_name))?;
        let document = object_type.get_node(&id).await?;
        let type_name = self.type_for(&document)?.name().to_string();
        trace!("Loaded node {} as {}", global_id, type_name);
        Ok(FieldValue::owned_any(document).with_type(type_name))
    }

    async fn referenced_documents(
        &self,
        target: &ObjectType,
        ids: Option<&JsonValue>,
    ) -> DocResolverResult<Vec<Document>> {
        let ids = match ids {
            Some(JsonValue::Array(ids)) => ids.iter().filter_map(document_id).collect::<Vec<_>>(),
            _ => return Ok(Vec::new()),
        };
        let documents = target.model().get_many(&ids).await?;
        Ok(documents.into_iter().flatten().collect())
    }
}

fn to_field_value(value: &JsonValue) -> DocResolverResult<FieldValue<'static>> {
    Ok(FieldValue::value(Value::from_json(value.clone())?))
}

fn embedded_document(target: &ObjectType, value: &JsonValue) -> Option<Document> {
    value
        .is_object()
        .then(|| Document::new(target.model_id(), value.clone()))
}

impl DocResolver {
    pub fn resolve_data(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let document = ctx.parent_document()?;
            let field = ctx.parent_field()?;
            match document.get(&field.source) {
                Some(value) => Ok(Some(to_field_value(value)?)),
                None => Ok(None),
            }
        })
    }

    pub fn resolve_reference(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let document = ctx.parent_document()?;
            let field = ctx.parent_field()?;
            let target = ctx.target_type(field)?;
            let id = match document.get(&field.source).and_then(document_id) {
                Some(id) => id,
                None => return Ok(None),
            };
            let referenced = target.model().get(&id).await?;
            Ok(referenced.map(FieldValue::owned_any))
        })
    }

    pub fn resolve_reference_list(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let document = ctx.parent_document()?;
            let field = ctx.parent_field()?;
            let target = ctx.target_type(field)?;
            let documents = ctx
                .resolver()?
                .referenced_documents(target, document.get(&field.source))
                .await?;
            Ok(Some(FieldValue::list(
                documents.into_iter().map(FieldValue::owned_any),
            )))
        })
    }

    /// Referenced documents, narrowed by the filter arguments and sliced
    /// into a connection.
    pub fn resolve_reference_connection(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let document = ctx.parent_document()?;
            let field = ctx.parent_field()?;
            let target = ctx.target_type(field)?;
            let filter = target.filter_arguments().to_filter(&ctx.arguments_json()?);
            let paging = ctx.connection_args()?;

            let mut documents = ctx
                .resolver()?
                .referenced_documents(target, document.get(&field.source))
                .await?;
            documents.retain(|document| filter.matches(document));
            let envelope = connection_from_slice(documents, &paging)?;
            Ok(Some(FieldValue::owned_any(envelope)))
        })
    }

    pub fn resolve_embedded(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let document = ctx.parent_document()?;
            let field = ctx.parent_field()?;
            let target = ctx.target_type(field)?;
            let embedded = document
                .get(&field.source)
                .and_then(|value| embedded_document(target, value));
            Ok(embedded.map(FieldValue::owned_any))
        })
    }

    pub fn resolve_embedded_list(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let document = ctx.parent_document()?;
            let field = ctx.parent_field()?;
            let target = ctx.target_type(field)?;
            let values = match document.get(&field.source) {
                Some(JsonValue::Array(values)) => values,
                _ => return Ok(None),
            };
            let embedded = values
                .iter()
                .filter_map(|value| embedded_document(target, value))
                .map(FieldValue::owned_any);
            Ok(Some(FieldValue::list(embedded)))
        })
    }
}

impl NodeResolver for DocResolver {
    fn resolve_global_id(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let document = ctx.parent_document()?;
            let object_type = ctx.parent_type()?;
            Ok(object_type.global_id(document).map(FieldValue::value))
        })
    }
}

impl NodeQueryResolver for DocResolver {
    fn resolve_node_by_id(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let id = ctx
                .get_arg_string("id")?
                .ok_or_else(|| DocResolverContextError::Argument("id".into(), "missing".into()))?;
            let node = ctx.resolver()?.load_node(&id).await?;
            Ok(Some(node))
        })
    }
    fn resolve_nodes_by_id(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let resolver = ctx.resolver()?;
            let mut nodes = Vec::new();
            for id in ctx.get_arg_string_list("ids")? {
                match resolver.load_node(&id).await {
                    Ok(node) => nodes.push(node),
                    Err(DocResolverError::Node(NodeError::NotFound(e))) => {
                        debug!("Skipping node {}: {}", id, e)
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Ok(Some(FieldValue::list(nodes)))
        })
    }
}

impl ConnectionResolver for DocResolver {
    fn resolve_total_count(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<ConnectionEnvelope<Document>>()?;
            Ok(Some(FieldValue::value(parent.length)))
        })
    }
    fn resolve_nodes(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<ConnectionEnvelope<Document>>()?;
            let nodes = parent
                .edges
                .iter()
                .map(|edge| FieldValue::owned_any(edge.node.clone()))
                .collect::<Vec<_>>();
            Ok(Some(FieldValue::list(nodes)))
        })
    }
    fn resolve_edges(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<ConnectionEnvelope<Document>>()?;
            let edges = parent
                .edges
                .iter()
                .map(|edge| FieldValue::owned_any(edge.clone()))
                .collect::<Vec<_>>();
            Ok(Some(FieldValue::list(edges)))
        })
    }
    fn resolve_page_info(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<ConnectionEnvelope<Document>>()?;
            Ok(Some(FieldValue::owned_any(parent.page_info.clone())))
        })
    }
}

impl ConnectionEdgeResolver for DocResolver {
    fn resolve_node(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<Edge<Document>>()?;
            Ok(Some(FieldValue::owned_any(parent.node.clone())))
        })
    }
    fn resolve_cursor(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<Edge<Document>>()?;
            Ok(Some(FieldValue::value(parent.cursor.clone())))
        })
    }
}

impl PageInfoResolver for DocResolver {
    fn resolve_has_next_page(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<PageInfo>()?;
            Ok(Some(FieldValue::value(parent.has_next_page)))
        })
    }
    fn resolve_has_previous_page(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<PageInfo>()?;
            Ok(Some(FieldValue::value(parent.has_previous_page)))
        })
    }
    fn resolve_start_cursor(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<PageInfo>()?;
            Ok(parent.start_cursor.clone().map(FieldValue::value))
        })
    }
    fn resolve_end_cursor(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let parent = ctx.parent::<PageInfo>()?;
            Ok(parent.end_cursor.clone().map(FieldValue::value))
        })
    }
}
