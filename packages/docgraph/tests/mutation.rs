use async_graphql::Request;
use async_graphql_value::ConstValue;
use assert_matches::assert_matches;
use docgraph::testing::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_create_article() {
    let store = MemoryStore::default();
    let registry = Registry::new();
    let schema = build_test_schema(&store, &registry).unwrap();

    let response = schema
        .execute(Request::new(
            r#"
            mutation ArticleCreator {
                createArticle(headline: "My Article") {
                    article {
                        id
                        headline
                    }
                }
            }
            "#,
        ))
        .await
        .into_result()
        .unwrap();
    assert_matches!(response.data, ConstValue::Object(_));
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "createArticle": {
                "article": { "id": "QXJ0aWNsZToz", "headline": "My Article" }
            }
        })
    );

    let response = schema
        .execute(Request::new("{ articles { totalCount } }"))
        .await
        .into_result()
        .unwrap();
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "articles": { "totalCount": 3 } })
    );
    assert_eq!(store.documents("Article").len(), 3);
}
