use serde::{Deserialize, Serialize};

/// Which lookup source produced a [`SearchResult`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Product,
    Page,
    Research,
}

impl ResultKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResultKind::Product => "product",
            ResultKind::Page => "page",
            ResultKind::Research => "research",
        }
    }
}

/// One matched item surfaced to the search UI. `id` is unique within its
/// `kind` only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
