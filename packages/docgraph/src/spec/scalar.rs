use super::self_prelude::*;

#[extension_trait]
pub impl DateTimeTypeRef for TypeRef {
    const DATE_TIME: &'static str = "DateTime";
}

#[extension_trait]
pub impl DateTimeScalar for Scalar {
    /// Dates are passed through as the ISO-8601 strings the store holds.
    fn new_date_time() -> Self {
        Self::new(TypeRef::DATE_TIME)
            .description("An ISO-8601 encoded date and time.")
            .validator(|value| matches!(value, async_graphql::Value::String(_)))
    }
}
