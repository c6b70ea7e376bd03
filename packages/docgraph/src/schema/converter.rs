use super::object_type::*;
use super::registry::*;
use super::self_prelude::*;

/// The GraphQL-facing counterpart of a [`ModelField`].
#[derive(Clone, Debug)]
pub struct ConvertedField {
    /// Exposed name, in camelCase.
    pub name: String,
    /// Store field the value is read from.
    pub source: ModelFieldId,
    pub ty: FieldType,
    pub non_null: bool,
}

#[derive(Clone, Debug)]
pub enum FieldType {
    Scalar(ScalarKind),
    ScalarList(ScalarKind),
    Reference(LazyType),
    ReferenceList(LazyType),
    Embedded(LazyType),
    EmbeddedList(LazyType),
}

/// An output type that is looked up in the registry only when it is needed,
/// so models can reference each other regardless of declaration order.
#[derive(Clone)]
pub struct LazyType {
    registry: WeakRegistry,
    target: ModelId,
}

impl LazyType {
    pub fn new(registry: &Registry, target: impl Into<ModelId>) -> Self {
        Self {
            registry: registry.downgrade(),
            target: target.into(),
        }
    }

    pub fn target(&self) -> &ModelId {
        &self.target
    }

    /// The target's output type, if it has been registered by now.
    pub fn resolve(&self) -> Option<ObjectType> {
        self.registry.upgrade()?.get(&self.target)
    }
}

impl fmt::Debug for LazyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LazyType").field(&self.target).finish()
    }
}

impl ConvertedField {
    /// The scalar a filter argument on this field accepts.
    pub fn filter_scalar(&self) -> Option<ScalarKind> {
        match self.ty {
            FieldType::Scalar(kind) | FieldType::ScalarList(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn lazy_type(&self) -> Option<&LazyType> {
        match &self.ty {
            FieldType::Reference(lazy)
            | FieldType::ReferenceList(lazy)
            | FieldType::Embedded(lazy)
            | FieldType::EmbeddedList(lazy) => Some(lazy),
            _ => None,
        }
    }
}

/// Name of the GraphQL scalar a store scalar is exposed as.
pub fn scalar_type_name(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String | ScalarKind::Email | ScalarKind::Url => TypeRef::STRING,
        ScalarKind::Int | ScalarKind::Long => TypeRef::INT,
        ScalarKind::Float | ScalarKind::Decimal => TypeRef::FLOAT,
        ScalarKind::Boolean => TypeRef::BOOLEAN,
        ScalarKind::ObjectId => TypeRef::ID,
        ScalarKind::DateTime => TypeRef::DATE_TIME,
    }
}

/// Convert one model field. Returns `None` for kinds that have no GraphQL
/// counterpart; those fields are left out of the type.
///
/// References are not looked up here: they become [`LazyType`]s resolved
/// against `registry` when the schema is assembled.
pub fn convert_model_field(
    field: &ModelField,
    primary_key: bool,
    registry: &Registry,
) -> Option<ConvertedField> {
    let ty = match field.kind() {
        FieldKind::Scalar(kind) => FieldType::Scalar(*kind),
        FieldKind::ScalarList(kind) => FieldType::ScalarList(*kind),
        FieldKind::Reference(target) => FieldType::Reference(LazyType::new(registry, target)),
        FieldKind::ReferenceList(target) => {
            FieldType::ReferenceList(LazyType::new(registry, target))
        }
        FieldKind::Embedded(target) => FieldType::Embedded(LazyType::new(registry, target)),
        FieldKind::EmbeddedList(target) => {
            FieldType::EmbeddedList(LazyType::new(registry, target))
        }
        FieldKind::Unsupported(kind) => {
            debug!("Omitting field {} of unsupported kind {}", field.name, kind);
            return None;
        }
    };
    Some(ConvertedField {
        name: field.name.to_camel_string(),
        source: field.name.as_str().to_string(),
        ty,
        non_null: field.required || primary_key,
    })
}
