use super::object_type::*;
use super::self_prelude::*;
use lazy_static::lazy_static;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

type RegistryMap = IndexMap<ModelId, ObjectType>;

/// Association table from model identity to its output type.
///
/// A `Registry` is a handle: clones share the same table. Types hold only a
/// [`WeakRegistry`] back to it.
#[derive(Clone, Default)]
pub struct Registry {
    types: Arc<RwLock<RegistryMap>>,
}

/// A non-owning handle to a [`Registry`].
#[derive(Clone, Default)]
pub struct WeakRegistry {
    types: Weak<RwLock<RegistryMap>>,
}

lazy_static! {
    static ref GLOBAL_REGISTRY: Registry = Registry::new();
}

/// The process-wide default registry.
pub fn global_registry() -> Registry {
    GLOBAL_REGISTRY.clone()
}

pub fn reset_global_registry() {
    GLOBAL_REGISTRY.reset();
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryMap> {
        self.types.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn write(&self) -> RwLockWriteGuard<'_, RegistryMap> {
        self.types.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Associate a model with its output type. A second registration of the
    /// same model replaces the first.
    pub fn register(&self, object_type: ObjectType) {
        let model = object_type.model_id();
        let name = object_type.name().to_string();
        if let Some(previous) = self.write().insert(model.clone(), object_type) {
            warn!(
                "Model {} was already registered as {}, replacing it with {}",
                model,
                previous.name(),
                name
            );
        } else {
            debug!("Registered model {} as {}", model, name);
        }
    }

    pub fn get(&self, model: &str) -> Option<ObjectType> {
        self.read().get(model).cloned()
    }

    /// Find an output type by its GraphQL name.
    pub fn get_by_name(&self, name: &str) -> Option<ObjectType> {
        self.read()
            .values()
            .find(|object_type| object_type.name() == name)
            .cloned()
    }

    /// Find the output type a document resolves to.
    pub fn type_for(&self, document: &Document) -> Option<ObjectType> {
        self.read()
            .values()
            .find(|object_type| matches!(object_type.is_type_of(document), Ok(true)))
            .cloned()
    }

    /// Every registered type, in registration order.
    pub fn types(&self) -> Vec<ObjectType> {
        self.read().values().cloned().collect()
    }

    pub fn contains(&self, model: &str) -> bool {
        self.read().contains_key(model)
    }
    pub fn len(&self) -> usize {
        self.read().len()
    }
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn reset(&self) {
        self.write().clear();
    }

    pub fn downgrade(&self) -> WeakRegistry {
        WeakRegistry {
            types: Arc::downgrade(&self.types),
        }
    }
    pub fn ptr_eq(&self, other: &Registry) -> bool {
        Arc::ptr_eq(&self.types, &other.types)
    }
}

impl WeakRegistry {
    pub fn upgrade(&self) -> Option<Registry> {
        self.types.upgrade().map(|types| Registry { types })
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.read().values().map(|object_type| object_type.name()))
            .finish()
    }
}

impl fmt::Debug for WeakRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(registry) => f.debug_tuple("WeakRegistry").field(&registry).finish(),
            None => f.write_str("WeakRegistry(<dropped>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn test_reset_forgets_previous_registrations() {
        let store = MemoryStore::default();
        let registry = Registry::new();

        let first = build_object_type(
            "Editor",
            store.model("Editor"),
            ObjectTypeOptions::with_registry(&registry),
        )
        .unwrap();
        assert_eq!(
            registry.get("Editor").map(|ty| ty.name().to_string()),
            Some(first.name().to_string())
        );

        registry.reset();
        assert!(registry.is_empty());
        assert!(registry.get("Editor").is_none());

        let second = build_object_type(
            "EditorNode",
            store.model("Editor"),
            ObjectTypeOptions::with_registry(&registry),
        )
        .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("Editor").map(|ty| ty.name().to_string()),
            Some(second.name().to_string())
        );
        assert!(registry.get_by_name("Editor").is_none());
    }

    #[test]
    fn test_registries_are_isolated() {
        let store = MemoryStore::default();
        let ours = Registry::new();
        let theirs = Registry::new();

        build_object_type(
            "Editor",
            store.model("Editor"),
            ObjectTypeOptions::with_registry(&ours),
        )
        .unwrap();

        assert!(ours.contains("Editor"));
        assert!(!theirs.contains("Editor"));
        assert!(!ours.ptr_eq(&theirs));
        assert!(ours.ptr_eq(&ours.clone()));
    }

    #[test]
    fn test_weak_handle_does_not_keep_registry_alive() {
        let registry = Registry::new();
        let weak = registry.downgrade();
        assert!(weak.upgrade().is_some());
        drop(registry);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_type_for_matches_document_model() {
        let store = MemoryStore::default();
        let registry = Registry::new();
        for model in ["Editor", "Article"] {
            build_object_type(
                model,
                store.model(model),
                ObjectTypeOptions::with_registry(&registry),
            )
            .unwrap();
        }

        let article = Document::new("Article", serde_json::json!({ "id": 1 }));
        assert_eq!(
            registry.type_for(&article).map(|ty| ty.name().to_string()),
            Some("Article".to_string())
        );
        let unknown = Document::new("Publisher", serde_json::json!({ "id": 1 }));
        assert!(registry.type_for(&unknown).is_none());
    }
}
