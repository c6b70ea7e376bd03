use super::models::*;
use super::self_prelude::*;
use std::sync::{PoisonError, RwLock};

/// A model whose collection lives in memory, in insertion order.
pub struct MemoryModel {
    schema: ModelSchema,
    documents: RwLock<Vec<Document>>,
}

impl MemoryModel {
    pub fn new(schema: ModelSchema, data: Vec<JsonValue>) -> Self {
        let model = Self {
            schema,
            documents: RwLock::new(Vec::new()),
        };
        for data in data {
            model.insert(data);
        }
        model
    }

    /// Store a document. A missing integer primary key is assigned.
    pub fn insert(&self, mut data: JsonValue) -> Document {
        let mut documents = self
            .documents
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let primary_key = self.schema.primary_key();
        if let Some(fields) = data.as_object_mut() {
            fields
                .entry(primary_key.clone())
                .or_insert_with(|| json!(documents.len() + 1));
        }
        let document = Document::new(self.schema.id(), data);
        documents.push(document.clone());
        document
    }

    pub fn documents(&self) -> Vec<Document> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl DocumentModel for MemoryModel {
    fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    async fn query(&self, filter: &Filter) -> StoreResult<QuerySet> {
        let filter = filter.clone();
        let cursor = self
            .documents()
            .into_iter()
            .filter(move |document| filter.matches(document));
        Ok(QuerySet::cursor(cursor))
    }

    async fn get(&self, id: &DocumentId) -> StoreResult<Option<Document>> {
        let primary_key = self.schema.primary_key();
        Ok(self
            .documents()
            .into_iter()
            .find(|document| document.primary_id(primary_key).as_ref() == Some(id)))
    }
}

/// The fixture collections: two editors, two articles and one reporter.
pub struct MemoryStore {
    models: IndexMap<ModelId, Arc<MemoryModel>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        let editors = vec![
            json!({ "first_name": "Penny", "last_name": "Hardaway" }),
            json!({ "first_name": "Grant", "last_name": "Hill" }),
        ];
        let articles = vec![
            json!({ "headline": "Hello", "pub_date": "2017-10-01T12:00:00Z", "editor": 1 }),
            json!({ "headline": "World", "pub_date": "2017-10-02T12:00:00Z", "editor": 2 }),
        ];
        let reporters = vec![json!({
            "first_name": "Allen",
            "last_name": "Iverson",
            "email": "ai@gmail.com",
            "awards": ["2010-mvp"],
            "articles": [1, 2],
            "embedded_articles": [
                { "id": 1, "headline": "Real" },
                { "id": 2, "headline": "World" }
            ],
            "generic": "opaque",
        })];

        Self::new(vec![
            MemoryModel::new(editor_schema(), editors),
            MemoryModel::new(article_schema(), articles),
            MemoryModel::new(embedded_article_schema(), Vec::new()),
            MemoryModel::new(reporter_schema(), reporters),
        ])
    }
}

impl MemoryStore {
    pub fn new(models: Vec<MemoryModel>) -> Self {
        Self {
            models: models
                .into_iter()
                .map(|model| (model.schema().id(), Arc::new(model)))
                .collect(),
        }
    }

    pub fn memory_model(&self, id: &str) -> Arc<MemoryModel> {
        self.models
            .get(id)
            .cloned()
            .unwrap_or_else(|| panic!("Model not found: {}", id))
    }
    pub fn model(&self, id: &str) -> Arc<dyn DocumentModel> {
        self.memory_model(id)
    }
    pub fn documents(&self, id: &str) -> Vec<Document> {
        self.memory_model(id).documents()
    }
}
