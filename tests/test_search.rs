#![cfg(feature = "ssr")]

mod common;

use common::{article, product, FakeStore, TestEnv, TEST_PUBLISHABLE_KEY};

fn store() -> FakeStore {
    FakeStore::new()
        .with_products(vec![
            product("prod_kit", "Peptide Starter Kit", "peptide-starter-kit"),
            product("prod_bpc", "BPC-157 5mg", "bpc-157-5mg"),
        ])
        .with_articles(vec![
            article("reconstitution", "Peptide Reconstitution Basics", "Mixing and storage"),
            article("tb500", "TB-500 Overview", "Thymosin beta-4 fragment"),
        ])
}

#[tokio::test]
async fn search_groups_products_pages_then_articles() {
    let env = TestEnv::start(store(), Some(TEST_PUBLISHABLE_KEY)).await;
    let server = env.server();

    let response = server
        .get("/api/search")
        .add_query_param("q", "peptide")
        .add_query_param("country_code", "us")
        .await;

    response.assert_status_ok();
    let results: Vec<serde_json::Value> = response.json();
    let kinds: Vec<&str> = results.iter().map(|r| r["type"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["product", "page", "research"]);

    assert_eq!(results[0]["href"], "/products/peptide-starter-kit");
    assert_eq!(results[1]["href"], "/pages/peptide-guide");
    assert_eq!(results[2]["href"], "/research/reconstitution");
    assert_eq!(results[2]["description"], "Mixing and storage");
}

#[tokio::test]
async fn search_with_blank_query_does_not_reach_the_backend() {
    let env = TestEnv::start(store(), Some(TEST_PUBLISHABLE_KEY)).await;
    let server = env.server();

    let response = server.get("/api/search").add_query_param("q", "   ").await;

    response.assert_status_ok();
    let results: Vec<serde_json::Value> = response.json();
    assert!(results.is_empty());
    assert!(env.store.requests_to("/store/products").is_empty());
    assert!(env.store.requests_to("/store/blog/articles").is_empty());
}

#[tokio::test]
async fn search_resolves_region_for_country() {
    let env = TestEnv::start(store(), Some(TEST_PUBLISHABLE_KEY)).await;
    let server = env.server();

    server
        .get("/api/search")
        .add_query_param("q", "bpc")
        .add_query_param("country_code", "de")
        .await
        .assert_status_ok();

    let requests = env.store.requests_to("/store/products");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query.get("region_id").map(String::as_str), Some("reg_eu"));
    assert_eq!(requests[0].query.get("limit").map(String::as_str), Some("100"));
    assert_eq!(
        requests[0].publishable_key.as_deref(),
        Some(TEST_PUBLISHABLE_KEY)
    );
}

#[tokio::test]
async fn search_without_publishable_key_skips_articles() {
    let env = TestEnv::start(store(), None).await;
    let server = env.server();

    let response = server.get("/api/search").add_query_param("q", "peptide").await;

    response.assert_status_ok();
    let results: Vec<serde_json::Value> = response.json();
    assert!(results.iter().all(|r| r["type"] != "research"));
    assert!(results.iter().any(|r| r["type"] == "product"));
    assert!(env.store.requests_to("/store/blog/articles").is_empty());
}

#[tokio::test]
async fn search_survives_failing_sources() {
    let mut failing = store();
    failing.fail_products = true;
    failing.fail_articles = true;
    let env = TestEnv::start(failing, Some(TEST_PUBLISHABLE_KEY)).await;
    let server = env.server();

    let response = server.get("/api/search").add_query_param("q", "peptide").await;

    response.assert_status_ok();
    let results: Vec<serde_json::Value> = response.json();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["type"], "page");
    assert_eq!(results[0]["title"], "Peptide Guide");
}

#[tokio::test]
async fn search_caps_products_at_ten() {
    let products = (0..25)
        .map(|i| product(&format!("prod_{i}"), &format!("Vial {i}"), &format!("vial-{i}")))
        .collect();
    let env = TestEnv::start(FakeStore::new().with_products(products), Some(TEST_PUBLISHABLE_KEY)).await;
    let server = env.server();

    let response = server.get("/api/search").add_query_param("q", "vial").await;

    let results: Vec<serde_json::Value> = response.json();
    assert_eq!(results.len(), 10);
    assert_eq!(results[0]["id"], "prod_0");
    assert_eq!(results[9]["id"], "prod_9");
}

#[tokio::test]
async fn product_search_returns_matching_products() {
    let env = TestEnv::start(store(), Some(TEST_PUBLISHABLE_KEY)).await;
    let server = env.server();

    let response = server
        .get("/api/search/products")
        .add_query_param("q", "BPC")
        .add_query_param("countryCode", "us")
        .await;

    response.assert_status_ok();
    let products: Vec<serde_json::Value> = response.json();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["handle"], "bpc-157-5mg");

    let requests = env.store.requests_to("/store/products");
    assert_eq!(requests[0].query.get("region_id").map(String::as_str), Some("reg_us"));
}

#[tokio::test]
async fn product_search_reports_unavailable_backend() {
    let mut failing = store();
    failing.fail_products = true;
    let env = TestEnv::start(failing, Some(TEST_PUBLISHABLE_KEY)).await;
    let server = env.server_permissive();

    let response = server.get("/api/search/products").add_query_param("q", "bpc").await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Upstream unavailable"));
}
