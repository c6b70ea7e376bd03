use super::document::*;
use super::self_prelude::*;
use serde_json::Value as JsonValue;

/// Equality predicates applied by a store query, in argument order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Filter(pub IndexMap<String, JsonValue>);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.insert(field, value);
        self
    }
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<JsonValue>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.0.iter()
    }

    /// A document matches when every predicate holds. A list field matches a
    /// scalar predicate when it contains the value.
    pub fn matches(&self, document: &Document) -> bool {
        self.0.iter().all(|(field, expected)| {
            match (document.data().get(field), expected) {
                (Some(JsonValue::Array(items)), expected) if !expected.is_array() => {
                    items.contains(expected)
                }
                (Some(actual), expected) => actual == expected,
                (None, JsonValue::Null) => true,
                (None, _) => false,
            }
        })
    }
}

/// A lazy store cursor.
pub type DocumentCursor = Box<dyn Iterator<Item = Document> + Send>;

/// The result of a store query: either a cursor the store has not yet
/// realised, or documents already in memory.
pub enum QuerySet {
    Cursor(DocumentCursor),
    Documents(Vec<Document>),
}

impl QuerySet {
    pub fn empty() -> Self {
        Self::Documents(Vec::new())
    }
    pub fn cursor(iter: impl Iterator<Item = Document> + Send + 'static) -> Self {
        Self::Cursor(Box::new(iter))
    }

    /// Realise the result set into an indexable, sized sequence.
    pub fn materialize(self) -> Vec<Document> {
        match self {
            Self::Cursor(cursor) => cursor.collect(),
            Self::Documents(documents) => documents,
        }
    }
}

impl From<Vec<Document>> for QuerySet {
    fn from(documents: Vec<Document>) -> Self {
        Self::Documents(documents)
    }
}

impl fmt::Debug for QuerySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cursor(_) => f.write_str("QuerySet::Cursor(..)"),
            Self::Documents(documents) => {
                f.debug_tuple("QuerySet::Documents").field(documents).finish()
            }
        }
    }
}
