use super::store::*;
use super::self_prelude::*;
use crate::GraphqlResult;

pub struct TestTypes {
    pub editor: ObjectType,
    pub article: ObjectType,
    pub reporter: ObjectType,
    pub embedded_article: ObjectType,
}

/// Build and register the fixture output types: `Editor`, `Article` and
/// `Reporter` as nodes, `EmbeddedArticle` as a plain object.
pub fn build_test_types(store: &MemoryStore, registry: &Registry) -> GraphqlResult<TestTypes> {
    let editor =
        build_object_type("Editor", store.model("Editor"), ObjectTypeOptions::node(registry))?;
    let article = build_object_type(
        "Article",
        store.model("Article"),
        ObjectTypeOptions {
            filter_fields: Some(vec!["headline".to_string()]),
            ..ObjectTypeOptions::node(registry)
        },
    )?;
    let reporter = build_object_type(
        "Reporter",
        store.model("Reporter"),
        ObjectTypeOptions::node(registry),
    )?;
    let embedded_article = build_object_type(
        "EmbeddedArticle",
        store.model("EmbeddedArticle"),
        ObjectTypeOptions::with_registry(registry),
    )?;
    Ok(TestTypes {
        editor,
        article,
        reporter,
        embedded_article,
    })
}

/// A root field resolving to the first document of a collection.
pub fn first_document_field(model: Arc<dyn DocumentModel>, name: &str, type_name: &str) -> Field {
    Field::new(name, TypeRef::named(type_name), move |_ctx| {
        let model = model.clone();
        FieldFuture::new(async move {
            let documents = model.query(&Filter::new()).await?.materialize();
            Ok(documents.into_iter().next().map(FieldValue::owned_any))
        })
    })
}

/// The `createArticle(headline:)` mutation and its payload type.
fn create_article(store: &MemoryStore) -> (Object, Field) {
    let payload = Object::new("CreateArticlePayload").field(Field::new(
        "article",
        TypeRef::named("Article"),
        |ctx| {
            FieldFuture::new(async move {
                let article = ctx.parent_value.try_downcast_ref::<Document>()?;
                Ok(Some(FieldValue::owned_any(article.clone())))
            })
        },
    ));
    let articles = store.memory_model("Article");
    let field = Field::new(
        "createArticle",
        TypeRef::named("CreateArticlePayload"),
        move |ctx| {
            let articles = articles.clone();
            FieldFuture::new(async move {
                let headline = ctx.args.try_get("headline")?.string()?.to_string();
                let article = articles.insert(json!({ "headline": headline }));
                Ok(Some(FieldValue::owned_any(article)))
            })
        },
    )
    .argument(InputValue::new("headline", TypeRef::named_nn(TypeRef::STRING)));
    (payload, field)
}

/// The fixture schema: root fields over every fixture type and one
/// mutation.
pub fn build_test_schema(store: &MemoryStore, registry: &Registry) -> GraphqlResult<Schema> {
    let TestTypes {
        editor,
        article,
        reporter,
        ..
    } = build_test_types(store, registry)?;
    let (payload, create) = create_article(store);

    DocSchemaBuilder::new(registry)
        .query_field(first_document_field(store.model("Editor"), "editor", "Editor"))
        .query_field(first_document_field(store.model("Reporter"), "reporter", "Reporter"))
        .query_field(ListField::new(&editor).into_field("editors"))
        .query_field(ConnectionField::new(&editor).into_field("allEditors")?)
        .query_field(ConnectionField::new(&article).into_field("articles")?)
        .query_field(ConnectionField::new(&reporter).into_field("allReporters")?)
        .register(payload)
        .mutation_field(create)
        .finish()
}
