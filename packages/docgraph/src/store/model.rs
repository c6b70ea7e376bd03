use super::document::*;
use super::meta::*;
use super::query::*;
use super::self_prelude::*;

/// Identity of a model. Unique within a store.
pub type ModelId = String;

pub type ModelFieldId = String;

/// The value kinds a store can declare for a scalar field.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Email,
    Url,
    Int,
    Long,
    Float,
    Decimal,
    Boolean,
    ObjectId,
    DateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    ScalarList(ScalarKind),
    /// Holds the primary identifier of a document of another model.
    Reference(ModelId),
    /// Holds a list of primary identifiers of another model.
    ReferenceList(ModelId),
    /// Holds a nested document of another model.
    Embedded(ModelId),
    EmbeddedList(ModelId),
    /// A field kind the GraphQL layer has no mapping for (binary, files,
    /// generic references, ...). Carries the store's own kind name.
    Unsupported(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelField {
    pub name: Name,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelSchema {
    pub name: Name,
    pub primary_key: ModelFieldId,
    pub fields: IndexMap<ModelFieldId, ModelField>,
}

impl ModelField {
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Target model of a reference or embedded field.
    pub fn target(&self) -> Option<&ModelId> {
        match &self.kind {
            FieldKind::Reference(id)
            | FieldKind::ReferenceList(id)
            | FieldKind::Embedded(id)
            | FieldKind::EmbeddedList(id) => Some(id),
            _ => None,
        }
    }
}

impl ModelSchema {
    pub fn id(&self) -> ModelId {
        self.name.to_pascal_string()
    }
    pub fn fields(&self) -> &IndexMap<ModelFieldId, ModelField> {
        &self.fields
    }
    pub fn field(&self, id: &str) -> Option<&ModelField> {
        self.fields.get(id)
    }
    pub fn primary_key(&self) -> &ModelFieldId {
        &self.primary_key
    }
}

pub type StoreResult<T> = anyhow::Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A model backed by a document store collection.
///
/// Implementing this trait is what makes a type a recognized document
/// model; the GraphQL layer never probes models any other way.
#[async_trait]
pub trait DocumentModel: Send + Sync {
    /// Returns the schema of the model.
    fn schema(&self) -> &ModelSchema;

    /// Runs a query against the model's collection. An empty filter selects
    /// every document. The result may be lazy.
    async fn query(&self, filter: &Filter) -> StoreResult<QuerySet>;

    /// Gets a single document by its primary identifier.
    async fn get(&self, id: &DocumentId) -> StoreResult<Option<Document>>;

    /// Gets documents by their primary identifiers, preserving order.
    async fn get_many(&self, ids: &[DocumentId]) -> StoreResult<Vec<Option<Document>>> {
        let mut documents = Vec::with_capacity(ids.len());
        for id in ids {
            documents.push(self.get(id).await?);
        }
        Ok(documents)
    }
}

impl fmt::Debug for dyn DocumentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DocumentModel")
            .field(&self.schema().id())
            .finish()
    }
}
