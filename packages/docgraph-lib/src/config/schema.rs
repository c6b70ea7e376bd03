use crate::{
    config::{env_or_default, ConfigResult, Env, EnvVar},
    defaults,
};
use serde::Deserialize;

/// Options applied when assembling the GraphQL schema.
#[derive(Clone, Deserialize, Debug)]
#[serde(default)]
pub struct SchemaConfig {
    /// Name of the root query object.
    pub query_type: String,

    /// Name of the root mutation object.
    pub mutation_type: String,

    /// Expose the `node(id: ID!)` root field.
    pub node_field: bool,

    /// Allow introspection queries.
    pub introspection: bool,

    /// Maximum query depth.
    pub limit_depth: Option<usize>,

    /// Maximum query complexity.
    pub limit_complexity: Option<usize>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            query_type: defaults::QUERY_TYPE.into(),
            mutation_type: defaults::MUTATION_TYPE.into(),
            node_field: defaults::NODE_FIELD,
            introspection: defaults::INTROSPECTION,
            limit_depth: None,
            limit_complexity: None,
        }
    }
}

impl Env for SchemaConfig {
    fn inject_opt_env_vars(&mut self) -> ConfigResult<()> {
        self.query_type = env_or_default(EnvVar::QueryType, self.query_type.clone());
        Ok(())
    }
}
