use async_graphql::dynamic::Schema;
use async_graphql::Request;
use docgraph::testing::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

async fn execute(schema: &Schema, query: &str) -> serde_json::Value {
    let response = schema
        .execute(Request::new(query))
        .await
        .into_result()
        .unwrap();
    response.data.into_json().unwrap()
}

/// Every fixture type as a plain object, without the node interface.
fn plain_schema(store: &MemoryStore, registry: &Registry) -> Schema {
    for name in ["Editor", "Article", "EmbeddedArticle"] {
        build_object_type(
            name,
            store.model(name),
            ObjectTypeOptions::with_registry(registry),
        )
        .unwrap();
    }
    let reporter = build_object_type(
        "Reporter",
        store.model("Reporter"),
        ObjectTypeOptions::with_registry(registry),
    )
    .unwrap();
    DocSchemaBuilder::new(registry)
        .query_field(ListField::new(&reporter).into_field("reporters"))
        .finish()
        .unwrap()
}

#[tokio::test]
async fn test_editor_and_editors() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    let schema = build_test_schema(&store, &registry).unwrap();

    let data = execute(
        &schema,
        r#"
        query EditorQuery {
            editor {
                firstName
            }
            editors {
                firstName
                lastName
            }
        }
        "#,
    )
    .await;

    assert_eq!(data["editor"], json!({ "firstName": "Penny" }));
    let editors = data["editors"].as_array().unwrap();
    assert_eq!(editors.len(), 2);
    for expected in [
        json!({ "firstName": "Penny", "lastName": "Hardaway" }),
        json!({ "firstName": "Grant", "lastName": "Hill" }),
    ] {
        assert!(editors.contains(&expected), "missing {expected}");
    }
}

#[tokio::test]
async fn test_reporter_with_plain_lists() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    let schema = plain_schema(&store, &registry);

    let data = execute(
        &schema,
        r#"
        query ReporterQuery {
            reporters {
                id
                firstName
                lastName
                email
                articles {
                    headline
                    editor {
                        lastName
                    }
                }
                awards
                embeddedArticles {
                    headline
                }
            }
        }
        "#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "reporters": [{
                "id": 1,
                "firstName": "Allen",
                "lastName": "Iverson",
                "email": "ai@gmail.com",
                "articles": [
                    { "headline": "Hello", "editor": { "lastName": "Hardaway" } },
                    { "headline": "World", "editor": { "lastName": "Hill" } }
                ],
                "awards": ["2010-mvp"],
                "embeddedArticles": [
                    { "headline": "Real" },
                    { "headline": "World" }
                ]
            }]
        })
    );
}

#[tokio::test]
async fn test_unsupported_fields_are_not_exposed() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    let schema = plain_schema(&store, &registry);

    let sdl = schema.sdl();
    assert!(sdl.contains("embeddedArticles: [EmbeddedArticle]"));
    assert!(sdl.contains("awards: [String]"));
    assert!(sdl.contains("email: String"));
    assert!(!sdl.contains("generic"));
    let document = graphql_parser::parse_schema::<String>(&sdl).unwrap();
    assert!(document.definitions.iter().any(|definition| matches!(
        definition,
        graphql_parser::schema::Definition::TypeDefinition(
            graphql_parser::schema::TypeDefinition::Object(object)
        ) if object.name == "Reporter" && object.fields.len() == 7
    )));

    let response = schema
        .execute(Request::new("{ reporters { generic } }"))
        .await;
    assert_eq!(response.errors.len(), 1);
}

#[tokio::test]
async fn test_dates_are_strings() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    let schema = build_test_schema(&store, &registry).unwrap();

    let data = execute(
        &schema,
        r#"{ articles(first: 1) { nodes { headline pubDate } } }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({
            "articles": {
                "nodes": [{ "headline": "Hello", "pubDate": "2017-10-01T12:00:00Z" }]
            }
        })
    );
}

#[tokio::test]
async fn test_circular_references() {
    let author = ModelSchemaBuilder::new("Author")
        .define_required_field("name", FieldKind::Scalar(ScalarKind::String))
        .define_reference_list("books", "Book")
        .finish();
    let book = ModelSchemaBuilder::new("Book")
        .define_required_field("title", FieldKind::Scalar(ScalarKind::String))
        .define_reference("author", "Author")
        .finish();
    let store = MemoryStore::new(vec![
        MemoryModel::new(author, vec![json!({ "name": "Ursula", "books": [1, 2] })]),
        MemoryModel::new(
            book,
            vec![
                json!({ "title": "Earthsea", "author": 1 }),
                json!({ "title": "The Dispossessed", "author": 1 }),
            ],
        ),
    ]);
    let registry = Registry::new();

    // Book is built while Author is still unknown.
    build_object_type(
        "Book",
        store.model("Book"),
        ObjectTypeOptions::with_registry(&registry),
    )
    .unwrap();
    let author = build_object_type(
        "Author",
        store.model("Author"),
        ObjectTypeOptions::with_registry(&registry),
    )
    .unwrap();
    let schema = DocSchemaBuilder::new(&registry)
        .query_field(ListField::new(&author).into_field("authors"))
        .finish()
        .unwrap();

    let data = execute(
        &schema,
        r#"{ authors { name books { title author { name } } } }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({
            "authors": [{
                "name": "Ursula",
                "books": [
                    { "title": "Earthsea", "author": { "name": "Ursula" } },
                    { "title": "The Dispossessed", "author": { "name": "Ursula" } }
                ]
            }]
        })
    );
}

#[tokio::test]
async fn test_schema_limits_from_config() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    let types = build_test_types(&store, &registry).unwrap();
    let config = SchemaConfig {
        limit_depth: Some(2),
        ..SchemaConfig::default()
    };
    let schema = DocSchemaBuilder::new(&registry)
        .with_config(&config)
        .query_field(ListField::new(&types.reporter).into_field("reporters"))
        .finish()
        .unwrap();

    let shallow = schema
        .execute(Request::new("{ reporters { firstName } }"))
        .await;
    assert!(shallow.errors.is_empty());

    let deep = schema
        .execute(Request::new(
            "{ reporters { articles { edges { node { headline } } } } }",
        ))
        .await;
    assert_eq!(deep.errors.len(), 1);
}
