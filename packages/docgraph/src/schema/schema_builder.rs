use super::object_type::*;
use super::registry::*;
use super::resolver::*;
use super::self_prelude::*;
use crate::GraphqlResult;
use docgraph_lib::config::SchemaConfig;

/// Assembles the types of a [`Registry`] and caller root fields into an
/// executable schema.
pub struct DocSchemaBuilder {
    registry: Registry,
    config: SchemaConfig,
    object_types: Vec<ObjectType>,
    query_fields: Vec<Field>,
    mutation_fields: Vec<Field>,
    types: Vec<Type>,
}

impl DocSchemaBuilder {
    pub fn new(registry: &Registry) -> Self {
        Self {
            registry: registry.clone(),
            config: SchemaConfig::default(),
            object_types: Vec::new(),
            query_fields: Vec::new(),
            mutation_fields: Vec::new(),
            types: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: &SchemaConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Include a type that was built with `skip_registry`.
    pub fn object_type(mut self, object_type: &ObjectType) -> Self {
        self.object_types.push(object_type.clone());
        self
    }
    /// Register an extra GraphQL type, such as an interface named by
    /// [`ObjectInterface::Named`].
    pub fn register(mut self, ty: impl Into<Type>) -> Self {
        self.types.push(ty.into());
        self
    }

    pub fn query_field(mut self, field: Field) -> Self {
        self.query_fields.push(field);
        self
    }
    pub fn mutation_field(mut self, field: Field) -> Self {
        self.mutation_fields.push(field);
        self
    }

    pub fn finish(self) -> GraphqlResult<Schema> {
        let Self {
            registry,
            config,
            object_types,
            query_fields,
            mutation_fields,
            types,
        } = self;

        let mut all_types = registry
            .types()
            .into_iter()
            .map(|object_type| (object_type.model_id(), object_type))
            .collect::<IndexMap<_, _>>();
        for object_type in object_types {
            all_types.entry(object_type.model_id()).or_insert(object_type);
        }
        let has_nodes = all_types.values().any(ObjectType::is_node);

        let mutation_type = (!mutation_fields.is_empty()).then(|| config.mutation_type.clone());
        let mut schema = Schema::build(&config.query_type, mutation_type.as_deref(), None)
            .register_paging_types::<DocResolver>()
            .register(Scalar::new_date_time());
        if has_nodes {
            schema = schema.register_node_types();
        }

        for object_type in all_types.values() {
            schema = schema.register(object_type.to_object());
            if let Some(connection) = object_type.connection() {
                schema = schema
                    .register(Object::new_connection::<DocResolver>(
                        connection.name(),
                        object_type.name(),
                    ))
                    .register(Object::new_connection_edge::<DocResolver>(
                        connection.name(),
                        object_type.name(),
                    ));
            }
        }
        for ty in types {
            schema = schema.register(ty);
        }

        let mut query = Object::new(&config.query_type);
        if has_nodes && config.node_field {
            query = query
                .node_by_id_field::<DocResolver>()
                .node_by_ids_field::<DocResolver>();
        }
        query = query_fields
            .into_iter()
            .fold(query, |query, field| query.field(field));
        schema = schema.register(query);

        if let Some(mutation_type) = mutation_type {
            let mutation = mutation_fields
                .into_iter()
                .fold(Object::new(mutation_type), |mutation, field| mutation.field(field));
            schema = schema.register(mutation);
        }

        if let Some(depth) = config.limit_depth {
            schema = schema.limit_depth(depth);
        }
        if let Some(complexity) = config.limit_complexity {
            schema = schema.limit_complexity(complexity);
        }
        if !config.introspection {
            schema = schema.disable_introspection();
        }

        debug!(
            "Assembled schema with {} document types and root {}",
            all_types.len(),
            config.query_type
        );
        let resolver = DocResolver::new(all_types.into_values());
        Ok(schema.data(resolver).finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::*;
    use crate::testing::*;

    #[test]
    fn test_sdl_contains_protocol_types() {
        let store = MemoryStore::default();
        let registry = Registry::new();
        let schema = build_test_schema(&store, &registry).unwrap();
        let sdl = schema.sdl();

        for expected in [
            "interface Node",
            "type PageInfo",
            "scalar DateTime",
            "type EditorConnection",
            "type EditorEdge",
            "type ReporterConnection",
            "type ArticleConnection",
            "type EmbeddedArticle",
            "type Mutation",
        ] {
            assert!(sdl.contains(expected), "missing {expected:?} in\n{sdl}");
        }
    }

    #[test]
    fn test_pagination_arguments_are_documented() {
        let store = MemoryStore::default();
        let registry = Registry::new();
        let schema = build_test_schema(&store, &registry).unwrap();
        let sdl = schema.sdl();

        for expected in [
            "Return at most this many documents from the start of the window.",
            "Start the window after the document at this cursor.",
            "Return at most this many documents from the end of the window.",
            "End the window before the document at this cursor.",
        ] {
            assert!(sdl.contains(expected), "missing {expected:?} in\n{sdl}");
        }
    }

    #[test]
    fn test_config_renames_roots_and_hides_node_field() {
        let store = MemoryStore::default();
        let registry = Registry::new();
        let types = build_test_types(&store, &registry).unwrap();
        let config = SchemaConfig {
            query_type: "Root".to_string(),
            node_field: false,
            ..SchemaConfig::default()
        };

        let schema = DocSchemaBuilder::new(&registry)
            .with_config(&config)
            .query_field(ListField::new(&types.editor).into_field("editors"))
            .finish()
            .unwrap();
        let sdl = schema.sdl();
        assert!(sdl.contains("type Root"));
        assert!(!sdl.contains("node(id: ID!)"));
    }
}
