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

#[tokio::test]
async fn test_reference_lists_to_nodes_are_connections() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    // Only articles and reporters are registered: `Article.editor` and
    // `Reporter.embeddedArticles` have nothing to point to.
    build_object_type("Article", store.model("Article"), ObjectTypeOptions::node(&registry))
        .unwrap();
    build_object_type(
        "Reporter",
        store.model("Reporter"),
        ObjectTypeOptions::node(&registry),
    )
    .unwrap();
    let schema = DocSchemaBuilder::new(&registry)
        .query_field(first_document_field(store.model("Reporter"), "reporter", "Reporter"))
        .finish()
        .unwrap();

    let data = execute(
        &schema,
        r#"
        query ReporterQuery {
            reporter {
                firstName
                articles {
                    edges {
                        node {
                            headline
                        }
                    }
                }
                lastName
                email
            }
        }
        "#,
    )
    .await;
    assert_eq!(
        data,
        json!({
            "reporter": {
                "firstName": "Allen",
                "lastName": "Iverson",
                "articles": {
                    "edges": [
                        { "node": { "headline": "Hello" } },
                        { "node": { "headline": "World" } }
                    ]
                },
                "email": "ai@gmail.com"
            }
        })
    );

    let sdl = schema.sdl();
    assert!(sdl.contains("articles("));
    assert!(!sdl.contains("editor:"));
    assert!(!sdl.contains("embeddedArticles"));
}

#[tokio::test]
async fn test_nested_connection_paging_and_filters() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    let schema = build_test_schema(&store, &registry).unwrap();

    let data = execute(
        &schema,
        r#"{
            reporter {
                firstPage: articles(first: 1) {
                    totalCount
                    edges { node { headline editor { firstName } } }
                    pageInfo { hasNextPage }
                }
                world: articles(headline: "World") {
                    totalCount
                    nodes { headline }
                }
                embeddedArticles { headline }
            }
        }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({
            "reporter": {
                "firstPage": {
                    "totalCount": 2,
                    "edges": [{ "node": { "headline": "Hello", "editor": { "firstName": "Penny" } } }],
                    "pageInfo": { "hasNextPage": true }
                },
                "world": {
                    "totalCount": 1,
                    "nodes": [{ "headline": "World" }]
                },
                "embeddedArticles": [{ "headline": "Real" }, { "headline": "World" }]
            }
        })
    );
}

#[tokio::test]
async fn test_node_root_field() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    let schema = build_test_schema(&store, &registry).unwrap();

    let data = execute(
        &schema,
        r#"{
            node(id: "RWRpdG9yOjE=") {
                id
                ... on Editor { firstName }
            }
            nodes(ids: ["UmVwb3J0ZXI6MQ==", "QXJ0aWNsZToy", "RWRpdG9yOjQwNA=="]) {
                id
                ... on Article { headline }
            }
        }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({
            "node": { "id": "RWRpdG9yOjE=", "firstName": "Penny" },
            "nodes": [
                { "id": "UmVwb3J0ZXI6MQ==" },
                { "id": "QXJ0aWNsZToy", "headline": "World" }
            ]
        })
    );

    let data = execute(&schema, "{ allEditors { edges { node { id } } } }").await;
    assert_eq!(
        data["allEditors"]["edges"],
        json!([
            { "node": { "id": "RWRpdG9yOjE=" } },
            { "node": { "id": "RWRpdG9yOjI=" } }
        ])
    );
}

#[tokio::test]
async fn test_missing_node_is_an_error() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    let schema = build_test_schema(&store, &registry).unwrap();

    let response = schema
        .execute(Request::new(r#"{ node(id: "RWRpdG9yOjQwNA==") { id } }"#))
        .await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, r#"Editor "404" not found"#);

    let response = schema
        .execute(Request::new(r#"{ node(id: "Editor:1") { id } }"#))
        .await;
    assert_eq!(response.errors.len(), 1);
}
