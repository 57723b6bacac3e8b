use serde::Deserialize;

/// Query parameters accepted by the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default, alias = "countryCode")]
    pub country_code: Option<String>,
}

impl SearchParams {
    pub fn country_code_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.country_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(default)
    }
}

/// Axum handler for `GET /api/search`.
///
/// Always answers 200: failing sources are skipped by the aggregator.
#[cfg(feature = "ssr")]
pub async fn search_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Query(params): axum::extract::Query<SearchParams>,
) -> axum::Json<Vec<crate::models::search::SearchResult>> {
    let country_code = params.country_code_or(&state.config.default_country_code);
    let results = state.search.search(&params.q, country_code).await;
    axum::Json(results)
}

/// Axum handler for `GET /api/search/products`: the product lookup on its own.
#[cfg(feature = "ssr")]
pub async fn product_search_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Query(params): axum::extract::Query<SearchParams>,
) -> Result<axum::Json<Vec<crate::models::product::StoreProduct>>, crate::error::AppError> {
    let country_code = params.country_code_or(&state.config.default_country_code);
    let products = state
        .search
        .search_products(&params.q, country_code)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Product search failed"))?;
    Ok(axum::Json(products))
}
