use async_trait::async_trait;

use crate::error::AppError;
use crate::models::article::{Article, ArticleList};

/// Trait for the article (blog) backend, enabling mock testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentClient: Send + Sync {
    /// List up to `take` articles in backend order.
    async fn list_articles(&self, take: usize) -> Result<ArticleList, AppError>;

    /// Fetch one article by its URL slug.
    ///
    /// Returns [`AppError::NotFound`] when no article has this slug.
    async fn get_article(&self, slug: &str) -> Result<Article, AppError>;
}

/// Blog endpoints of the store API.
#[cfg(feature = "ssr")]
pub struct BlogContentClient {
    http: crate::backend::BackendHttp,
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize)]
struct ArticleResponse {
    #[serde(default)]
    article: Option<Article>,
}

#[cfg(feature = "ssr")]
impl BlogContentClient {
    pub fn new(http: crate::backend::BackendHttp) -> Self {
        Self { http }
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl ContentClient for BlogContentClient {
    async fn list_articles(&self, take: usize) -> Result<ArticleList, AppError> {
        if self.http.publishable_key().is_none() {
            return Err(AppError::SourceUnavailable(
                "MEDUSA_PUBLISHABLE_KEY is not set".into(),
            ));
        }

        self.http
            .get_json("/store/blog/articles", &[("take", take.to_string())])
            .await
    }

    async fn get_article(&self, slug: &str) -> Result<Article, AppError> {
        if slug.is_empty() {
            return Err(AppError::BadRequest("Slug cannot be empty".into()));
        }

        let path = format!("/store/blog/articles/{}", urlencoding::encode(slug));
        let response: ArticleResponse = self.http.get_json(&path, &[]).await?;

        response
            .article
            .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", slug)))
    }
}
