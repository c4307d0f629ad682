#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for wire-format query construction and fetching.

mod common;

use std::sync::Arc;

use common::{BASE_URL, MockFetcher, client_with, entry_json, page_json};
use raccolta_client::{ClientConfig, ClientError, Condition, Entry, Form};
use serde_json::json;

fn config() -> ClientConfig {
    ClientConfig::new(BASE_URL)
        .with_collections(["blog", "pages"])
        .with_taxonomies(["tags"])
        .with_globals(["site"])
        .with_navigations(["main"])
        .with_forms(["contact"])
}

#[tokio::test]
async fn filter_chain_hits_the_expected_url() {
    let fetcher = Arc::new(MockFetcher::new().respond(
        "blog/entries",
        page_json(json!([entry_json("hello", "en", "blog", None)])),
    ));
    let client = client_with(config(), &fetcher);

    let result = client
        .collection("blog")
        .unwrap()
        .filter("title", Condition::Is, "hello")
        .sort("title", false)
        .get::<Vec<Entry>>()
        .await
        .unwrap();

    assert_eq!(result.data[0].slug, "hello");
    assert_eq!(
        fetcher.requests(),
        vec![format!(
            "{BASE_URL}/collections/blog/entries?filter[title:is]=hello&sort=title"
        )]
    );
}

#[tokio::test]
async fn site_spelling_depends_on_endpoint_family() {
    let fetcher = Arc::new(MockFetcher::new());
    let client = client_with(config(), &fetcher);

    let entries_url = client.collection("blog").unwrap().site("en").url();
    assert!(entries_url.ends_with("/collections/blog/entries?filter[site]=en"));

    let terms_url = client.taxonomy("tags").unwrap().site("en").url();
    assert!(terms_url.ends_with("/taxonomies/tags/terms?filter[site]=en"));

    let global_url = client.global("site").unwrap().site("en").url();
    assert!(global_url.ends_with("/globals/site?site=en"));

    let tree_url = client.navigation("main").unwrap().site("en").url();
    assert!(tree_url.ends_with("/navs/main/tree?site=en"));
}

#[tokio::test]
async fn paginate_equals_limit_plus_page() {
    let fetcher = Arc::new(MockFetcher::new());
    let client = client_with(config(), &fetcher);

    let paginated = client.collection("blog").unwrap().paginate(2, 10).url();
    assert!(paginated.ends_with("?limit=10&page=2"));

    let limited = client.collection("blog").unwrap().limit(10).url();
    assert_eq!(format!("{limited}&page=2"), paginated);
}

#[tokio::test]
async fn sorting_reversed_prefixes_minus() {
    let fetcher = Arc::new(MockFetcher::new());
    let client = client_with(config(), &fetcher);

    let url = client.collection("blog").unwrap().sort("title", true).url();
    assert!(url.ends_with("sort=-title"));
}

#[tokio::test]
async fn missing_payload_surfaces_as_no_data() {
    let fetcher = Arc::new(MockFetcher::new());
    let client = client_with(config(), &fetcher);

    let err = client
        .collection("blog")
        .unwrap()
        .get::<Vec<Entry>>()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NoData { .. }));
}

#[tokio::test]
async fn form_fetches_bypass_the_query_chain() {
    let fetcher = Arc::new(
        MockFetcher::new()
            .respond(
                "forms/contact",
                json!({ "data": { "handle": "contact", "title": "Contact" } }),
            )
            .respond(
                "forms",
                json!({ "data": [{ "handle": "contact", "title": "Contact" }] }),
            ),
    );
    let client = client_with(config(), &fetcher);
    let forms = client.forms().unwrap();

    let one: Form = forms.get("contact").await.unwrap().data;
    assert_eq!(one.handle, "contact");

    let all = forms.get_all().await.unwrap().data;
    assert_eq!(all.len(), 1);

    assert_eq!(
        fetcher.requests(),
        vec![
            format!("{BASE_URL}/forms/contact"),
            format!("{BASE_URL}/forms"),
        ]
    );
}

#[tokio::test]
async fn undeclared_kinds_never_reach_the_wire() {
    let fetcher = Arc::new(MockFetcher::new());
    let client = client_with(
        ClientConfig::new(BASE_URL).with_collections(["blog"]),
        &fetcher,
    );

    assert!(matches!(
        client.taxonomy("tags"),
        Err(ClientError::KindNotDeclared(_))
    ));
    assert!(matches!(
        client.collection("recipes"),
        Err(ClientError::UnknownHandle { .. })
    ));
    assert!(fetcher.requests().is_empty());
}
