use super::connection::*;
use super::object_type::*;
use super::resolver_context::*;
use super::self_prelude::*;
use futures::future::BoxFuture;
use std::collections::HashSet;
use std::future::Future;

/// What an upstream resolver is given.
#[derive(Clone, Debug, Default)]
pub struct ResolveParams {
    /// The document the field is resolved on, if any.
    pub parent: Option<Document>,
    /// Field arguments, as JSON.
    pub args: IndexMap<String, JsonValue>,
}

/// A caller-supplied resolver. `None` (or, for connections, an empty result)
/// means the caller did not narrow the result set.
pub type ResolveFn = Arc<
    dyn Fn(ResolveParams) -> BoxFuture<'static, async_graphql::Result<Option<QuerySet>>>
        + Send
        + Sync,
>;

fn boxed_resolver<F, Fut>(resolver: F) -> ResolveFn
where
    F: Fn(ResolveParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = async_graphql::Result<Option<QuerySet>>> + Send + 'static,
{
    Arc::new(move |params| Box::pin(resolver(params)))
}

/// Query the model's collection with the given predicates. An empty filter
/// selects every document.
pub async fn get_query(
    model: &Arc<dyn DocumentModel>,
    filter: &Filter,
) -> StoreResult<QuerySet> {
    trace!("Querying {} with {:?}", model.schema().id(), filter);
    model.query(filter).await
}

/// Intersect a caller-resolved set with the default query: a document is
/// kept when both sets hold it. Order follows `queryset`.
pub fn merge_querysets(default: QuerySet, queryset: QuerySet, schema: &ModelSchema) -> QuerySet {
    let primary_key = schema.primary_key();
    let default_ids = default
        .materialize()
        .iter()
        .filter_map(|document| Some((document.model().clone(), document.primary_id(primary_key)?)))
        .collect::<HashSet<_>>();
    queryset
        .materialize()
        .into_iter()
        .filter(|document| match document.primary_id(primary_key) {
            Some(id) => default_ids.contains(&(document.model().clone(), id)),
            None => false,
        })
        .collect::<Vec<_>>()
        .into()
}

/// Arguments a field accepts: the filter table of `node`, pagination
/// arguments when paginated, then declared base arguments, which replace
/// same-named ones.
fn merged_arguments(
    node: &ObjectType,
    paginated: bool,
    base_arguments: &IndexMap<String, TypeRef>,
) -> IndexMap<String, TypeRef> {
    let mut arguments = node.filter_arguments().type_refs().collect::<IndexMap<_, _>>();
    if paginated {
        arguments.insert("first".into(), TypeRef::named(TypeRef::INT));
        arguments.insert("after".into(), TypeRef::named(TypeRef::CURSOR));
        arguments.insert("last".into(), TypeRef::named(TypeRef::INT));
        arguments.insert("before".into(), TypeRef::named(TypeRef::CURSOR));
    }
    for (name, type_ref) in base_arguments {
        arguments.insert(name.clone(), type_ref.clone());
    }
    arguments
}

/// A field resolving to a plain list of documents.
#[derive(Clone)]
pub struct ListField {
    node: ObjectType,
    base_arguments: IndexMap<String, TypeRef>,
    resolver: Option<ResolveFn>,
    description: Option<String>,
}

impl ListField {
    pub fn new(node: &ObjectType) -> Self {
        Self {
            node: node.clone(),
            base_arguments: IndexMap::new(),
            resolver: None,
            description: None,
        }
    }

    pub fn argument(mut self, name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        self.base_arguments.insert(name.into(), type_ref.into());
        self
    }
    pub fn resolver<F, Fut>(mut self, resolver: F) -> Self
    where
        F: Fn(ResolveParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = async_graphql::Result<Option<QuerySet>>> + Send + 'static,
    {
        self.resolver = Some(boxed_resolver(resolver));
        self
    }
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn arguments(&self) -> IndexMap<String, TypeRef> {
        merged_arguments(&self.node, false, &self.base_arguments)
    }

    /// Resolve into a materialised list.
    pub async fn resolve(&self, params: ResolveParams) -> async_graphql::Result<Vec<Document>> {
        let filter = self.node.filter_arguments().to_filter(&params.args);
        let resolved = match &self.resolver {
            Some(resolver) => resolver(params).await?,
            None => None,
        };
        let query_set = match resolved {
            Some(query_set) => query_set,
            None => get_query(self.node.model(), &filter).await?,
        };
        Ok(query_set.materialize())
    }

    pub fn into_field(self, name: impl Into<String>) -> Field {
        let arguments = self.arguments();
        let type_ref = TypeRef::named_nn_list(self.node.name());
        let description = self.description.clone();
        let list = Arc::new(self);
        let field = Field::new(name, type_ref, move |ctx| {
            let list = list.clone();
            FieldFuture::new(async move {
                let params = ctx.resolve_params()?;
                let documents = list.resolve(params).await?;
                Ok(Some(FieldValue::list(
                    documents.into_iter().map(FieldValue::owned_any),
                )))
            })
        });
        finish_field(field, arguments, description)
    }
}

/// A field resolving to a `<Node>Connection`.
#[derive(Clone)]
pub struct ConnectionField {
    node: ObjectType,
    base_arguments: IndexMap<String, TypeRef>,
    resolver: Option<ResolveFn>,
    description: Option<String>,
}

impl ConnectionField {
    pub fn new(node: &ObjectType) -> Self {
        Self {
            node: node.clone(),
            base_arguments: IndexMap::new(),
            resolver: None,
            description: None,
        }
    }

    pub fn argument(mut self, name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        self.base_arguments.insert(name.into(), type_ref.into());
        self
    }
    pub fn resolver<F, Fut>(mut self, resolver: F) -> Self
    where
        F: Fn(ResolveParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = async_graphql::Result<Option<QuerySet>>> + Send + 'static,
    {
        self.resolver = Some(boxed_resolver(resolver));
        self
    }
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn node(&self) -> &ObjectType {
        &self.node
    }
    pub fn arguments(&self) -> IndexMap<String, TypeRef> {
        merged_arguments(&self.node, true, &self.base_arguments)
    }

    /// Resolve one page. The upstream resolver runs first; when it yields
    /// nothing the collection is queried with the filter arguments. The
    /// whole result set is materialised and sliced in memory.
    pub async fn resolve(
        &self,
        params: ResolveParams,
        paging: &ConnectionArgs,
    ) -> async_graphql::Result<ConnectionEnvelope<Document>> {
        let filter = self.node.filter_arguments().to_filter(&params.args);
        let resolved = match &self.resolver {
            Some(resolver) => resolver(params).await?,
            None => None,
        };
        let documents = match resolved.map(QuerySet::materialize) {
            Some(documents) if !documents.is_empty() => documents,
            _ => get_query(self.node.model(), &filter).await?.materialize(),
        };
        Ok(connection_from_slice(documents, paging)?)
    }

    pub fn into_field(self, name: impl Into<String>) -> Result<Field, ConfigurationError> {
        let connection = self
            .node
            .connection()
            .ok_or_else(|| ConfigurationError::MissingConnection(self.node.name().to_string()))?;
        let type_ref = TypeRef::named(connection.name());
        let arguments = self.arguments();
        let description = self.description.clone();
        let connection_field = Arc::new(self);
        let field = Field::new(name, type_ref, move |ctx| {
            let connection_field = connection_field.clone();
            FieldFuture::new(async move {
                let params = ctx.resolve_params()?;
                let paging = ctx.connection_args()?;
                let envelope = connection_field.resolve(params, &paging).await?;
                Ok(Some(FieldValue::owned_any(envelope)))
            })
        });
        Ok(finish_field(field, arguments, description))
    }
}

fn finish_field(
    field: Field,
    arguments: IndexMap<String, TypeRef>,
    description: Option<String>,
) -> Field {
    let field = arguments
        .into_iter()
        .fold(field, |field, (name, type_ref)| {
            field.argument(InputValue::new(name, type_ref))
        });
    match description {
        Some(description) => field.description(description),
        None => field,
    }
}
