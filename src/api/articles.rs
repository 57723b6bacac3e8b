use serde::{Deserialize, Serialize};

use crate::content::client::ContentClient;
use crate::error::AppError;
use crate::models::article::{Article, ArticleList};
use crate::rendering::blocks::{render, RenderNode};

/// Number of articles the index pages and the list endpoint fetch by default.
pub const DEFAULT_ARTICLE_TAKE: usize = 50;

/// An article together with its rendered body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePage {
    pub article: Article,
    pub nodes: Vec<RenderNode>,
}

impl ArticlePage {
    pub fn from_article(article: Article) -> Self {
        let nodes = render(article.body.as_ref()).collect();
        Self { article, nodes }
    }
}

/// Core article listing logic, shared by the API and the server functions.
pub async fn process_list_articles(
    content: &dyn ContentClient,
    take: Option<usize>,
) -> Result<ArticleList, AppError> {
    let take = take.unwrap_or(DEFAULT_ARTICLE_TAKE);
    if take == 0 {
        return Err(AppError::BadRequest("take must be at least 1".into()));
    }

    content.list_articles(take).await
}

/// Fetch one article and render its body.
pub async fn process_get_article(
    content: &dyn ContentClient,
    slug: &str,
) -> Result<ArticlePage, AppError> {
    let article = content.get_article(slug).await?;
    Ok(ArticlePage::from_article(article))
}

#[derive(Debug, Deserialize)]
pub struct ListArticlesParams {
    pub take: Option<usize>,
}

/// Axum handler for `GET /api/articles`.
#[cfg(feature = "ssr")]
pub async fn list_articles_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Query(params): axum::extract::Query<ListArticlesParams>,
) -> Result<axum::Json<ArticleList>, AppError> {
    let list = process_list_articles(state.content.as_ref(), params.take).await?;
    Ok(axum::Json(list))
}

/// Axum handler for `GET /api/articles/{slug}`.
#[cfg(feature = "ssr")]
pub async fn get_article_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Path(slug): axum::extract::Path<String>,
) -> Result<axum::Json<ArticlePage>, AppError> {
    let page = process_get_article(state.content.as_ref(), &slug).await?;
    Ok(axum::Json(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::client::MockContentClient;

    fn article(slug: &str, body: serde_json::Value) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": format!("art_{slug}"),
            "title": "Peptide Reconstitution",
            "url_slug": slug,
            "body": body,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_article_renders_body() {
        let mut content = MockContentClient::new();
        content
            .expect_get_article()
            .withf(|slug| slug == "reconstitution")
            .returning(|slug| {
                Ok(article(
                    slug,
                    serde_json::json!({
                        "blocks": [
                            { "type": "header", "data": { "text": "Steps", "level": 2 } },
                            { "type": "paragraph", "data": { "text": "Use bacteriostatic water." } }
                        ]
                    }),
                ))
            });

        let page = process_get_article(&content, "reconstitution").await.unwrap();
        assert_eq!(page.article.url_slug, "reconstitution");
        assert_eq!(page.nodes.len(), 2);
    }

    #[tokio::test]
    async fn test_get_article_without_body_renders_placeholder() {
        let mut content = MockContentClient::new();
        content
            .expect_get_article()
            .returning(|slug| Ok(article(slug, serde_json::Value::Null)));

        let page = process_get_article(&content, "draft").await.unwrap();
        assert_eq!(page.nodes, vec![RenderNode::placeholder()]);
    }

    #[tokio::test]
    async fn test_get_article_not_found_is_propagated() {
        let mut content = MockContentClient::new();
        content
            .expect_get_article()
            .returning(|slug| Err(AppError::NotFound(format!("Article '{slug}' not found"))));

        match process_get_article(&content, "missing").await {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("missing")),
            other => panic!("Expected NotFound, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_articles_uses_default_take() {
        let mut content = MockContentClient::new();
        content
            .expect_list_articles()
            .withf(|take| *take == DEFAULT_ARTICLE_TAKE)
            .returning(|_| Ok(ArticleList::default()));

        let list = process_list_articles(&content, None).await.unwrap();
        assert_eq!(list.count, 0);
    }

    #[tokio::test]
    async fn test_list_articles_rejects_zero_take() {
        let mut content = MockContentClient::new();
        content.expect_list_articles().never();

        let result = process_list_articles(&content, Some(0)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
