use super::converter::*;
use super::filter::*;
use super::node::*;
use super::registry::*;
use super::resolver::*;
use super::self_prelude::*;
use std::any::Any;

/// An interface an output type implements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectInterface {
    /// The relay `Node` interface. Implementing it requires a connection.
    Node,
    /// An interface registered with the schema by the caller.
    Named(String),
}

/// The `<Node>Connection` type wrapping an output type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionType {
    name: String,
    node: String,
}

impl ConnectionType {
    pub fn new(node: impl Into<String>) -> Self {
        let node = node.into();
        Self {
            name: TypeRef::connection(node.clone()),
            node,
        }
    }
    pub fn named(name: impl Into<String>, node: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: node.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn node(&self) -> &str {
        &self.node
    }
    pub fn edge_name(&self) -> String {
        TypeRef::connection_edge(&self.name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjectTypeOptions {
    /// Defaults to the global registry.
    pub registry: Option<Registry>,
    pub skip_registry: bool,
    /// Fields to expose. Empty means all of them.
    pub only_fields: Vec<String>,
    /// Fields to leave out. Wins over `only_fields`.
    pub exclude_fields: Vec<String>,
    /// Fields usable as filter arguments. `None` means every scalar field.
    pub filter_fields: Option<Vec<String>>,
    pub interfaces: Vec<ObjectInterface>,
    pub use_connection: bool,
    pub connection: Option<ConnectionType>,
    pub connection_name: Option<String>,
    pub description: Option<String>,
}

impl ObjectTypeOptions {
    pub fn with_registry(registry: &Registry) -> Self {
        Self {
            registry: Some(registry.clone()),
            ..Default::default()
        }
    }
    pub fn node(registry: &Registry) -> Self {
        Self {
            interfaces: vec![ObjectInterface::Node],
            ..Self::with_registry(registry)
        }
    }
}

/// An output type bound to a document model.
#[derive(Clone)]
pub struct ObjectType {
    name: String,
    description: Option<String>,
    model: Arc<dyn DocumentModel>,
    fields: IndexMap<String, ConvertedField>,
    filter_arguments: FilterArgumentTable,
    interfaces: Vec<ObjectInterface>,
    connection: Option<ConnectionType>,
    registry: WeakRegistry,
}

#[derive(thiserror::Error, Debug)]
pub enum NodeError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Build the output type of `model` and register it, unless
/// `options.skip_registry` is set.
pub fn build_object_type(
    name: impl Into<String>,
    model: Arc<dyn DocumentModel>,
    options: ObjectTypeOptions,
) -> Result<ObjectType, ConfigurationError> {
    let name = name.into();
    let registry = options.registry.unwrap_or_else(global_registry);
    let schema = model.schema();
    validate_model(&name, schema)?;

    let fields = schema
        .fields()
        .iter()
        .filter(|(_, field)| is_selected(field, &options.only_fields, &options.exclude_fields))
        .filter_map(|(id, field)| {
            convert_model_field(field, id == schema.primary_key(), &registry)
        })
        .map(|field| (field.name.clone(), field))
        .collect::<IndexMap<_, _>>();
    let filter_arguments =
        FilterArgumentTable::derive(&fields, options.filter_fields.as_deref());

    let needs_connection =
        options.use_connection || options.interfaces.contains(&ObjectInterface::Node);
    let connection = match options.connection {
        Some(connection) if connection.node() != name => {
            return Err(ConfigurationError::InvalidConnection(
                name,
                connection.node().to_string(),
            ))
        }
        Some(connection) => Some(connection),
        None if needs_connection => Some(match options.connection_name {
            Some(connection_name) => ConnectionType::named(connection_name, &name),
            None => ConnectionType::new(&name),
        }),
        None => None,
    };

    let object_type = ObjectType {
        name,
        description: options.description,
        model,
        fields,
        filter_arguments,
        interfaces: options.interfaces,
        connection,
        registry: registry.downgrade(),
    };
    if !options.skip_registry {
        registry.register(object_type.clone());
    }
    Ok(object_type)
}

fn validate_model(name: &str, schema: &ModelSchema) -> Result<(), ConfigurationError> {
    let invalid =
        |reason: String| ConfigurationError::InvalidModel(name.to_string(), schema.id(), reason);
    if name.is_empty() {
        return Err(invalid("the type name is empty".to_string()));
    }
    if schema.name.is_empty() {
        return Err(invalid("the model has no name".to_string()));
    }
    if schema.field(schema.primary_key()).is_none() {
        return Err(invalid(format!(
            "primary key {:?} is not one of its fields",
            schema.primary_key()
        )));
    }
    Ok(())
}

fn is_selected(field: &ModelField, only_fields: &[String], exclude_fields: &[String]) -> bool {
    let listed = |names: &[String]| {
        names
            .iter()
            .any(|name| name == field.name.as_str() || *name == field.name.to_camel_string())
    };
    (only_fields.is_empty() || listed(only_fields)) && !listed(exclude_fields)
}

impl ObjectType {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn model(&self) -> &Arc<dyn DocumentModel> {
        &self.model
    }
    pub fn model_id(&self) -> ModelId {
        self.model.schema().id()
    }
    pub fn fields(&self) -> &IndexMap<String, ConvertedField> {
        &self.fields
    }
    pub fn field(&self, name: &str) -> Option<&ConvertedField> {
        self.fields.get(name)
    }
    pub fn filter_arguments(&self) -> &FilterArgumentTable {
        &self.filter_arguments
    }
    pub fn interfaces(&self) -> &[ObjectInterface] {
        &self.interfaces
    }
    pub fn is_node(&self) -> bool {
        self.interfaces.contains(&ObjectInterface::Node)
    }
    pub fn connection(&self) -> Option<&ConnectionType> {
        self.connection.as_ref()
    }
    /// The registry the type was built against, while it is alive.
    pub fn registry(&self) -> Option<Registry> {
        self.registry.upgrade()
    }

    /// The external identifier of a document: its primary identifier as a
    /// string.
    pub fn resolve_id(&self, document: &Document) -> Option<String> {
        document.primary_id(self.model.schema().primary_key())
    }

    pub fn global_id(&self, document: &Document) -> Option<String> {
        self.resolve_id(document)
            .map(|id| to_global_id(&self.name, &id))
    }

    /// Whether a runtime value is an instance of the bound model. Values that
    /// are not documents at all are an error rather than a mismatch.
    pub fn is_type_of(&self, value: &dyn Any) -> Result<bool, TypeMismatchError> {
        match value.downcast_ref::<Document>() {
            Some(document) => Ok(document.model() == &self.model_id()),
            None => Err(TypeMismatchError(format!(
                "{:?} for type {}",
                value.type_id(),
                self.name
            ))),
        }
    }

    pub async fn get_node(&self, id: &str) -> Result<Document, NodeError> {
        let document = self.model.get(&id.to_string()).await?;
        document.ok_or_else(|| NotFoundError(self.name.clone(), id.to_string()).into())
    }

    /// The `async_graphql` object of this type. Deferred fields are resolved
    /// now; those whose target was never registered are left out.
    pub fn to_object(&self) -> Object {
        let mut object = Object::new(&self.name);
        if let Some(description) = &self.description {
            object = object.description(description);
        }
        for interface in &self.interfaces {
            object = match interface {
                ObjectInterface::Node => object.node_id_field::<DocResolver>(),
                ObjectInterface::Named(name) => object.implement(name),
            };
        }
        for field in self.fields.values() {
            if self.is_node() && field.name == "id" {
                continue;
            }
            match self.field_definition(field) {
                Some(definition) => object = object.field(definition),
                None => debug!(
                    "Omitting field {}.{}: type {} is not registered",
                    self.name,
                    field.name,
                    field.lazy_type().map(LazyType::target).map_or("?", String::as_str)
                ),
            }
        }
        object
    }

    fn field_definition(&self, field: &ConvertedField) -> Option<Field> {
        let type_ref = |name: &str| {
            if field.non_null {
                TypeRef::named_nn(name)
            } else {
                TypeRef::named(name)
            }
        };
        let definition = match &field.ty {
            FieldType::Scalar(kind) => Field::new(
                &field.name,
                type_ref(scalar_type_name(*kind)),
                DocResolver::resolve_data,
            ),
            FieldType::ScalarList(kind) => Field::new(
                &field.name,
                TypeRef::named_list(scalar_type_name(*kind)),
                DocResolver::resolve_data,
            ),
            FieldType::Reference(lazy) => {
                let target = lazy.resolve()?;
                Field::new(
                    &field.name,
                    type_ref(target.name()),
                    DocResolver::resolve_reference,
                )
            }
            FieldType::ReferenceList(lazy) => {
                let target = lazy.resolve()?;
                match target.connection() {
                    Some(connection) => target
                        .filter_arguments()
                        .type_refs()
                        .fold(
                            Field::new(
                                &field.name,
                                TypeRef::named(connection.name()),
                                DocResolver::resolve_reference_connection,
                            ),
                            |definition, (name, type_ref)| {
                                definition.argument(InputValue::new(name, type_ref))
                            },
                        )
                        .connection_arguments(),
                    None => Field::new(
                        &field.name,
                        TypeRef::named_list(target.name()),
                        DocResolver::resolve_reference_list,
                    ),
                }
            }
            FieldType::Embedded(lazy) => {
                let target = lazy.resolve()?;
                Field::new(
                    &field.name,
                    type_ref(target.name()),
                    DocResolver::resolve_embedded,
                )
            }
            FieldType::EmbeddedList(lazy) => {
                let target = lazy.resolve()?;
                Field::new(
                    &field.name,
                    TypeRef::named_list(target.name()),
                    DocResolver::resolve_embedded_list,
                )
            }
        };
        Some(definition)
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("model", &self.model_id())
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("interfaces", &self.interfaces)
            .field("connection", &self.connection)
            .finish()
    }
}
