use super::meta::*;
use super::model::*;
use super::self_prelude::*;

/// Declares a [`ModelSchema`] field by field, in order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelSchemaBuilder {
    pub name: Name,
    pub primary_key: ModelFieldId,
    pub fields: IndexMap<ModelFieldId, ModelField>,
}

impl ModelSchemaBuilder {
    /// Starts a model whose primary key is an integer `id`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new_pascal(name),
            primary_key: "id".to_string(),
            fields: IndexMap::new(),
        }
        .define_field("id", FieldKind::Scalar(ScalarKind::Int))
    }

    pub fn primary_key(mut self, field: impl Into<String>) -> Self {
        self.primary_key = field.into();
        self
    }

    pub fn define_field(self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.define(name, kind, false)
    }
    pub fn define_required_field(self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.define(name, kind, true)
    }

    pub fn define_scalar(self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.define_field(name, FieldKind::Scalar(kind))
    }
    pub fn define_reference(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.define_field(name, FieldKind::Reference(target.into()))
    }
    pub fn define_reference_list(
        self,
        name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.define_field(name, FieldKind::ReferenceList(target.into()))
    }

    /// Redefining a field replaces its kind but keeps its position.
    fn define(mut self, name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        let id: ModelFieldId = name.into();
        self.fields.insert(
            id.clone(),
            ModelField {
                name: Name::new_snake(id),
                kind,
                required,
            },
        );
        self
    }

    pub fn finish(self) -> ModelSchema {
        ModelSchema {
            name: self.name,
            primary_key: self.primary_key,
            fields: self.fields,
        }
    }
}
