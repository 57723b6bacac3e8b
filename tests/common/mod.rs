use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use molecule::api::routes::api_routes;
use molecule::backend::PUBLISHABLE_KEY_HEADER;
use molecule::config::StorefrontConfig;
use molecule::state::AppState;

pub const TEST_PUBLISHABLE_KEY: &str = "pk_test_storefront";

/// A request received by the fake store API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub publishable_key: Option<String>,
}

/// In-memory stand-in for the store API: regions, products and blog articles.
#[derive(Clone, Default)]
pub struct FakeStore {
    pub regions: Vec<Value>,
    pub products: Vec<Value>,
    pub articles: Vec<Value>,
    /// Answer 500 on every blog endpoint.
    pub fail_articles: bool,
    /// Answer 500 on the product listing.
    pub fail_products: bool,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            regions: vec![
                json!({ "id": "reg_us", "name": "United States", "currency_code": "usd", "countries": [{ "iso_2": "us" }] }),
                json!({ "id": "reg_eu", "name": "Europe", "currency_code": "eur", "countries": [{ "iso_2": "de" }, { "iso_2": "fr" }] }),
            ],
            ..Default::default()
        }
    }

    pub fn with_products(mut self, products: Vec<Value>) -> Self {
        self.products = products;
        self
    }

    pub fn with_articles(mut self, articles: Vec<Value>) -> Self {
        self.articles = articles;
        self
    }

    /// Requests received so far for `path`.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }

    fn record(&self, path: &str, query: &HashMap<String, String>, headers: &HeaderMap) {
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.to_string(),
            query: query.clone(),
            publishable_key: headers
                .get(PUBLISHABLE_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });
    }

    fn router(self) -> Router {
        Router::new()
            .route("/store/regions", get(regions))
            .route("/store/products", get(products))
            .route("/store/blog/articles", get(articles))
            .route("/store/blog/articles/{slug}", get(article_by_slug))
            .with_state(self)
    }

    /// Serve on an ephemeral local port and return the base URL.
    pub async fn serve(self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake store API");
        let addr = listener.local_addr().expect("Failed to read local address");
        let router = self.router();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Fake store API crashed");
        });
        format!("http://{addr}")
    }
}

async fn regions(
    State(store): State<FakeStore>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    store.record("/store/regions", &query, &headers);
    Json(json!({ "regions": store.regions }))
}

async fn products(
    State(store): State<FakeStore>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    store.record("/store/products", &query, &headers);
    if store.fail_products {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    let limit = query
        .get("limit")
        .and_then(|l| l.parse::<usize>().ok())
        .unwrap_or(usize::MAX);
    let products: Vec<Value> = store.products.iter().take(limit).cloned().collect();
    Json(json!({ "products": products, "count": store.products.len() })).into_response()
}

async fn articles(
    State(store): State<FakeStore>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    store.record("/store/blog/articles", &query, &headers);
    if store.fail_articles {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    if headers.get(PUBLISHABLE_KEY_HEADER).is_none() {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "missing key" }))).into_response();
    }

    let take = query
        .get("take")
        .and_then(|t| t.parse::<usize>().ok())
        .unwrap_or(usize::MAX);
    let articles: Vec<Value> = store.articles.iter().take(take).cloned().collect();
    Json(json!({ "count": store.articles.len(), "articles": articles })).into_response()
}

async fn article_by_slug(
    State(store): State<FakeStore>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    store.record(&format!("/store/blog/articles/{slug}"), &HashMap::new(), &headers);
    if store.fail_articles {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    match store.articles.iter().find(|a| a["url_slug"] == slug.as_str()) {
        Some(article) => Json(json!({ "article": article })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response(),
    }
}

pub fn product(id: &str, title: &str, handle: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} for laboratory research"),
        "handle": handle,
        "thumbnail": format!("https://cdn.example.com/{handle}.png"),
    })
}

pub fn article(slug: &str, title: &str, subtitle: &str) -> Value {
    json!({
        "id": format!("art_{slug}"),
        "title": title,
        "subtitle": subtitle,
        "author": "Lab Team",
        "tags": ["peptides", "research", "guides", "storage"],
        "url_slug": slug,
        "body": {
            "time": 1712000000000u64,
            "blocks": [
                { "id": "h1", "type": "header", "data": { "text": title, "level": 1 } },
                { "id": "p1", "type": "paragraph", "data": { "text": "Use <b>bacteriostatic</b> water." } },
                { "id": "d1", "type": "delimiter", "data": {} }
            ]
        }
    })
}

/// The API router wired to real backend clients pointed at a [`FakeStore`].
pub struct TestEnv {
    pub router: Router,
    pub store: FakeStore,
}

impl TestEnv {
    /// Start the fake store API and build the storefront API router against it.
    pub async fn start(store: FakeStore, publishable_key: Option<&str>) -> Self {
        let backend_url = store.clone().serve().await;

        let config = StorefrontConfig {
            backend_url,
            publishable_key: publishable_key.map(str::to_string),
            ..Default::default()
        };

        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("molecule")
            .build();

        let app_state =
            AppState::from_config(config, leptos_options).expect("Failed to build AppState");

        Self {
            router: api_routes().with_state(app_state),
            store,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }
}
