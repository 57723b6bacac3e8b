use async_trait::async_trait;

use crate::error::AppError;
use crate::models::product::{Region, StoreProduct};

/// Trait for the commerce backend, enabling mock testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommerceClient: Send + Sync {
    /// Find the region serving `country_code`. `None` if no region does.
    async fn get_region(&self, country_code: &str) -> Result<Option<Region>, AppError>;

    /// List up to `limit` products, priced for the region of `country_code`
    /// when one exists. Products come back in backend order.
    async fn list_products(
        &self,
        country_code: &str,
        limit: usize,
    ) -> Result<Vec<StoreProduct>, AppError>;
}

/// Medusa store API implementation of the CommerceClient.
#[cfg(feature = "ssr")]
pub struct MedusaCommerceClient {
    http: crate::backend::BackendHttp,
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
struct RegionsResponse {
    #[serde(default, deserialize_with = "crate::models::lenient::skip_invalid")]
    regions: Vec<Region>,
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
struct ProductsResponse {
    #[serde(default, deserialize_with = "crate::models::lenient::skip_invalid")]
    products: Vec<StoreProduct>,
}

#[cfg(feature = "ssr")]
impl MedusaCommerceClient {
    pub fn new(http: crate::backend::BackendHttp) -> Self {
        Self { http }
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl CommerceClient for MedusaCommerceClient {
    async fn get_region(&self, country_code: &str) -> Result<Option<Region>, AppError> {
        let response: RegionsResponse = self.http.get_json("/store/regions", &[]).await?;

        Ok(response
            .regions
            .into_iter()
            .find(|region| region.serves(country_code)))
    }

    async fn list_products(
        &self,
        country_code: &str,
        limit: usize,
    ) -> Result<Vec<StoreProduct>, AppError> {
        let region = self.get_region(country_code).await?;

        let mut query = vec![("limit", limit.to_string())];
        match &region {
            Some(region) => query.push(("region_id", region.id.clone())),
            None => tracing::debug!(country_code, "No region for country, listing unpriced products"),
        }

        let response: ProductsResponse = self.http.get_json("/store/products", &query).await?;
        Ok(response.products)
    }
}
