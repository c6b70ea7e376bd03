use super::model::*;
use super::self_prelude::*;
use serde_json::Value as JsonValue;

/// String form of a primary identifier.
pub type DocumentId = String;

/// An instance of a model.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document(pub ModelId, pub JsonValue);

impl Document {
    pub fn new(model: impl Into<ModelId>, data: JsonValue) -> Self {
        Self(model.into(), data)
    }

    pub fn model(&self) -> &ModelId {
        &self.0
    }
    pub fn data(&self) -> &JsonValue {
        &self.1
    }
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.1.get(field).filter(|value| !value.is_null())
    }

    /// Identifier stored under the given primary key, coerced to a string.
    pub fn primary_id(&self, primary_key: &str) -> Option<DocumentId> {
        self.get(primary_key).and_then(document_id)
    }

    /// Whether this document and `other` are the same instance of the same model.
    pub fn same_instance(&self, other: &Document, primary_key: &str) -> bool {
        self.model() == other.model()
            && self.primary_id(primary_key).is_some()
            && self.primary_id(primary_key) == other.primary_id(primary_key)
    }
}

/// Coerce a stored identifier into its string form. Strings are taken as is,
/// numbers use their decimal representation.
pub fn document_id(value: &JsonValue) -> Option<DocumentId> {
    match value {
        JsonValue::String(id) => Some(id.clone()),
        JsonValue::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
