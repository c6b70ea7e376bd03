use async_graphql::dynamic::Schema;
use async_graphql::Request;
use docgraph::testing::prelude::*;
use insta::assert_json_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

const FIRST_CURSOR: &str = "YXJyYXljb25uZWN0aW9uOjA=";

async fn execute(schema: &Schema, query: &str) -> serde_json::Value {
    let response = schema
        .execute(Request::new(query))
        .await
        .into_result()
        .unwrap();
    response.data.into_json().unwrap()
}

fn test_schema() -> Schema {
    let store = MemoryStore::default();
    let registry = Registry::new();
    build_test_schema(&store, &registry).unwrap()
}

#[tokio::test]
async fn test_all_editors_in_insertion_order() {
    let schema = test_schema();
    let data = execute(
        &schema,
        r#"
        query EditorQuery {
            allEditors {
                totalCount
                edges {
                    node {
                        firstName
                        lastName
                    }
                }
                pageInfo {
                    endCursor
                    hasNextPage
                    hasPreviousPage
                    startCursor
                }
            }
        }
        "#,
    )
    .await;

    assert_eq!(
        data["allEditors"]["edges"],
        json!([
            { "node": { "firstName": "Penny", "lastName": "Hardaway" } },
            { "node": { "firstName": "Grant", "lastName": "Hill" } }
        ])
    );
    assert_eq!(data["allEditors"]["totalCount"], json!(2));
    assert_json_snapshot!(data["allEditors"]["pageInfo"], @r###"
    {
      "endCursor": "YXJyYXljb25uZWN0aW9uOjE=",
      "hasNextPage": false,
      "hasPreviousPage": false,
      "startCursor": "YXJyYXljb25uZWN0aW9uOjA="
    }
    "###);
}

#[tokio::test]
async fn test_filter_arguments() {
    let schema = test_schema();
    let data = execute(
        &schema,
        r#"
        query ArticleQuery {
            articles(headline: "World") {
                edges {
                    node {
                        headline
                    }
                }
            }
        }
        "#,
    )
    .await;
    assert_eq!(
        data,
        json!({
            "articles": {
                "edges": [{ "node": { "headline": "World" } }]
            }
        })
    );

    let data = execute(
        &schema,
        r#"{
            mvp: allReporters(awards: "2010-mvp") { totalCount }
            none: allReporters(awards: "2011-mvp") { totalCount }
        }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({ "mvp": { "totalCount": 1 }, "none": { "totalCount": 0 } })
    );
}

#[tokio::test]
async fn test_non_whitelisted_filters_are_rejected() {
    let schema = test_schema();
    let response = schema
        .execute(Request::new(
            r#"{ articles(pubDate: "2017-10-01T12:00:00Z") { totalCount } }"#,
        ))
        .await;
    assert_eq!(response.errors.len(), 1);
}

#[tokio::test]
async fn test_forward_paging() {
    let schema = test_schema();
    let data = execute(
        &schema,
        r#"{
            allEditors(first: 1) {
                edges { cursor node { firstName } }
                pageInfo { hasNextPage hasPreviousPage }
            }
        }"#,
    )
    .await;
    assert_eq!(
        data["allEditors"],
        json!({
            "edges": [{ "cursor": FIRST_CURSOR, "node": { "firstName": "Penny" } }],
            "pageInfo": { "hasNextPage": true, "hasPreviousPage": false }
        })
    );

    let query = format!(
        r#"{{
            allEditors(first: 1, after: "{}") {{
                edges {{ node {{ firstName }} }}
                pageInfo {{ hasNextPage }}
            }}
        }}"#,
        FIRST_CURSOR
    );
    let data = execute(&schema, &query).await;
    assert_eq!(
        data["allEditors"],
        json!({
            "edges": [{ "node": { "firstName": "Grant" } }],
            "pageInfo": { "hasNextPage": false }
        })
    );
}

#[tokio::test]
async fn test_backward_paging() {
    let schema = test_schema();
    let data = execute(
        &schema,
        r#"{
            allEditors(last: 1) {
                totalCount
                nodes { firstName }
                pageInfo { hasNextPage hasPreviousPage }
            }
        }"#,
    )
    .await;
    assert_eq!(
        data["allEditors"],
        json!({
            "totalCount": 2,
            "nodes": [{ "firstName": "Grant" }],
            "pageInfo": { "hasNextPage": false, "hasPreviousPage": true }
        })
    );
}

#[tokio::test]
async fn test_negative_first_is_an_error() {
    let schema = test_schema();
    let response = schema
        .execute(Request::new("{ allEditors(first: -1) { totalCount } }"))
        .await;
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("non-negative"));
}

#[tokio::test]
async fn test_out_of_range_cursor_yields_an_empty_page() {
    let schema = test_schema();
    // base64("arrayconnection:9223372036854775807")
    let data = execute(
        &schema,
        r#"{
            allEditors(after: "YXJyYXljb25uZWN0aW9uOjkyMjMzNzIwMzY4NTQ3NzU4MDc=") {
                totalCount
                edges { node { firstName } }
                pageInfo { hasNextPage hasPreviousPage }
            }
        }"#,
    )
    .await;
    assert_eq!(
        data["allEditors"],
        json!({
            "totalCount": 2,
            "edges": [],
            "pageInfo": { "hasNextPage": false, "hasPreviousPage": false }
        })
    );
}
