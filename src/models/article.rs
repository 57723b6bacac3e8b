use serde::{Deserialize, Serialize};

use crate::models::lenient::{null_as_default, skip_invalid};
use crate::rendering::blocks::ContentDocument;

/// A research / learn article served by the content backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Free-form tags; the backend sends `null` for untagged articles.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_slug: String,
    /// EditorJS document. `None` when the article has no body yet.
    #[serde(default)]
    pub body: Option<ContentDocument>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub seo_keywords: Option<String>,
}

impl Article {
    /// Title for the page `<title>`: SEO title when set, otherwise the article title.
    pub fn page_title(&self) -> &str {
        self.seo_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.title)
    }

    /// Case-insensitive substring match against title and subtitle.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .subtitle
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(needle))
    }
}

/// Response of `GET /store/blog/articles`.
///
/// Articles that fail to decode are dropped from the list, so one bad
/// record doesn't hide the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "skip_invalid")]
    pub articles: Vec<Article>,
}
