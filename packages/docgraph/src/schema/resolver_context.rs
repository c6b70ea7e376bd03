use super::connection::*;
use super::converter::*;
use super::field::*;
use super::object_type::*;
use super::resolver::*;
use super::self_prelude::*;

#[derive(thiserror::Error, Debug)]
pub enum DocResolverContextError {
    #[error("Schema was built without a document resolver")]
    MissingResolver,
    #[error("Failed to downcast parent value to {0}")]
    Downcast(&'static str),
    #[error("No output type is registered for model {0}")]
    UnknownModel(ModelId),
    #[error("Type {0} has no field {1}")]
    UnknownField(String, String),
    #[error("Failed to read argument {0}: {1}")]
    Argument(String, String),
    #[error(transparent)]
    Paging(#[from] PagingError),
}

pub type DocResolverContextResult<T> = anyhow::Result<T, DocResolverContextError>;

type Error = DocResolverContextError;
type Result<T> = DocResolverContextResult<T>;

#[extension_trait]
pub impl<'a> DocResolverContext<'a> for ResolverContext<'a> {
    fn resolver(&self) -> Result<&'a DocResolver> {
        self.ctx
            .data::<DocResolver>()
            .map_err(|_| Error::MissingResolver)
    }
    fn parent<T: 'static>(&self) -> Result<&'a T> {
        let parent_value: &'a FieldValue<'a> = self.parent_value;
        parent_value
            .try_downcast_ref::<T>()
            .map_err(|_| Error::Downcast(std::any::type_name::<T>()))
    }
    fn parent_document(&self) -> Result<&'a Document> {
        self.parent::<Document>()
    }
    fn parent_type(&self) -> Result<&'a ObjectType> {
        let document = self.parent_document()?;
        self.resolver()?
            .object_type(document.model())
            .ok_or_else(|| Error::UnknownModel(document.model().clone()))
    }
    /// The converted field being resolved on a document.
    fn parent_field(&self) -> Result<&'a ConvertedField> {
        let parent_type = self.parent_type()?;
        let field_name = self.ctx.field().name();
        parent_type.field(field_name).ok_or_else(|| {
            Error::UnknownField(parent_type.name().to_string(), field_name.to_string())
        })
    }
    /// The output type a deferred field points to.
    fn target_type(&self, field: &ConvertedField) -> Result<&'a ObjectType> {
        let target = field
            .lazy_type()
            .map(LazyType::target)
            .ok_or_else(|| Error::UnknownField(String::new(), field.name.clone()))?;
        self.resolver()?
            .object_type(target)
            .ok_or_else(|| Error::UnknownModel(target.clone()))
    }

    // Argument getter methods
    fn get_arg_i64(&self, name: &str) -> Result<Option<i64>> {
        self.args
            .get(name)
            .filter(|arg| !arg.is_null())
            .map(|arg| {
                arg.i64()
                    .map_err(|e| Error::Argument(name.to_string(), e.message))
            })
            .transpose()
    }
    fn get_arg_string(&self, name: &str) -> Result<Option<String>> {
        self.args
            .get(name)
            .filter(|arg| !arg.is_null())
            .map(|arg| {
                arg.string()
                    .map(ToString::to_string)
                    .map_err(|e| Error::Argument(name.to_string(), e.message))
            })
            .transpose()
    }
    fn get_arg_string_list(&self, name: &str) -> Result<Vec<String>> {
        match self.args.get(name) {
            Some(arg) if !arg.is_null() => arg
                .deserialize::<Vec<String>>()
                .map_err(|e| Error::Argument(name.to_string(), e.message)),
            _ => Ok(Vec::new()),
        }
    }
    /// Every argument of the field, as JSON.
    fn arguments_json(&self) -> Result<IndexMap<String, JsonValue>> {
        self.args
            .iter()
            .map(|(name, value)| {
                let json = value
                    .deserialize::<JsonValue>()
                    .map_err(|e| Error::Argument(name.to_string(), e.message))?;
                Ok::<_, Error>((name.to_string(), json))
            })
            .collect()
    }
    fn connection_args(&self) -> Result<ConnectionArgs> {
        Ok(ConnectionArgs {
            first: self.get_arg_i64("first")?,
            last: self.get_arg_i64("last")?,
            after: self.get_arg_string("after")?,
            before: self.get_arg_string("before")?,
        })
    }
    fn resolve_params(&self) -> Result<ResolveParams> {
        Ok(ResolveParams {
            parent: self.parent_document().ok().cloned(),
            args: self.arguments_json()?,
        })
    }
}
