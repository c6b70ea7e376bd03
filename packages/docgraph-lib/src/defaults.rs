pub const LOG_LEVEL: &str = "info";

pub const VERBOSE_LOGGING: bool = false;

pub const HUMAN_LOGGING: bool = true;

/// Name of the root query object.
pub const QUERY_TYPE: &str = "Query";

/// Name of the root mutation object, when mutation fields are supplied.
pub const MUTATION_TYPE: &str = "Mutation";

/// Expose the relay `node(id: ID!)` root field.
pub const NODE_FIELD: bool = true;

pub const INTROSPECTION: bool = true;
