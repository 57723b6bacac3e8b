//! Site-wide search: concurrent fan-out over products, static pages and
//! research articles.
//!
//! Each lookup source is fault-tolerant on its own. A failing source is
//! logged at warn level and contributes no results; the aggregate never
//! fails.

use std::sync::Arc;

use crate::commerce::client::CommerceClient;
use crate::config::SearchLimits;
use crate::content::client::ContentClient;
use crate::error::AppError;
use crate::models::product::StoreProduct;
use crate::models::search::{ResultKind, SearchResult};
use crate::search::pages::PageRegistry;

/// Combines the three lookup sources into one ordered result list.
#[derive(Clone)]
pub struct SearchAggregator {
    commerce: Arc<dyn CommerceClient>,
    content: Arc<dyn ContentClient>,
    pages: Arc<PageRegistry>,
    limits: SearchLimits,
}

impl SearchAggregator {
    pub fn new(
        commerce: Arc<dyn CommerceClient>,
        content: Arc<dyn ContentClient>,
        pages: PageRegistry,
        limits: SearchLimits,
    ) -> Self {
        Self {
            commerce,
            content,
            pages: Arc::new(pages),
            limits,
        }
    }

    /// Search all sources for `query`.
    ///
    /// Results are ordered products, then pages, then articles; each group
    /// keeps its source's order. Blank queries return immediately without
    /// touching any backend.
    pub async fn search(&self, query: &str, country_code: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let (products, pages, articles) = futures::join!(
            self.product_results(query, country_code),
            async { self.pages.lookup(query) },
            self.article_results(query),
        );

        let products = products.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Product search failed, skipping products");
            Vec::new()
        });
        let articles = articles.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Article search failed, skipping research articles");
            Vec::new()
        });

        tracing::debug!(
            query,
            products = products.len(),
            pages = pages.len(),
            articles = articles.len(),
            "Search completed"
        );

        let mut results = products;
        results.extend(pages);
        results.extend(articles);
        results
    }

    /// Products matching `query`, capped to the configured result limit.
    ///
    /// The store API can't filter by free text, so a page of products is
    /// fetched and filtered here.
    pub async fn search_products(
        &self,
        query: &str,
        country_code: &str,
    ) -> Result<Vec<StoreProduct>, AppError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let products = self
            .commerce
            .list_products(country_code, self.limits.product_fetch_limit)
            .await?;

        Ok(products
            .into_iter()
            .filter(|product| product.matches(&needle))
            .take(self.limits.product_result_limit)
            .collect())
    }

    async fn product_results(
        &self,
        query: &str,
        country_code: &str,
    ) -> Result<Vec<SearchResult>, AppError> {
        let products = self.search_products(query, country_code).await?;

        Ok(products
            .into_iter()
            .map(|product| SearchResult {
                kind: ResultKind::Product,
                href: product.path(),
                id: product.id,
                title: product.title,
                description: product.description.filter(|d| !d.is_empty()),
                thumbnail: product.thumbnail,
            })
            .collect())
    }

    async fn article_results(&self, query: &str) -> Result<Vec<SearchResult>, AppError> {
        let needle = query.to_lowercase();
        let list = self
            .content
            .list_articles(self.limits.article_fetch_limit)
            .await?;

        Ok(list
            .articles
            .into_iter()
            .filter(|article| article.matches(&needle))
            .map(|article| SearchResult {
                kind: ResultKind::Research,
                href: format!("/research/{}", article.url_slug),
                id: article.id,
                title: article.title,
                description: article.subtitle,
                thumbnail: article.thumbnail_image,
            })
            .collect())
    }
}
