use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// JSON API routes. Leptos SSR routes and static files are added in `main`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/search", get(crate::api::search::search_handler))
        .route(
            "/api/search/products",
            get(crate::api::search::product_search_handler),
        )
        .route(
            "/api/articles",
            get(crate::api::articles::list_articles_handler),
        )
        .route(
            "/api/articles/{slug}",
            get(crate::api::articles::get_article_handler),
        )
}
