use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::search::{ResultKind, SearchResult};

/// A static site page that can be found through search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPage {
    pub title: String,
    pub href: String,
}

impl StaticPage {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

/// Immutable registry of static pages, injected into the search aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRegistry {
    pages: Vec<StaticPage>,
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new(vec![
            StaticPage::new("About Us", "/pages/about-us"),
            StaticPage::new("Contact Us", "/pages/contact"),
            StaticPage::new("Peptide Guide", "/pages/peptide-guide"),
            StaticPage::new("Terms of Service", "/pages/terms-of-service"),
            StaticPage::new("Privacy Policy", "/pages/privacy-policy"),
            StaticPage::new("Returns & Refunds", "/pages/returns-and-refunds"),
        ])
    }
}

impl PageRegistry {
    pub fn new(pages: Vec<StaticPage>) -> Self {
        Self { pages }
    }

    /// Parse a registry from YAML: a list of `{ title, href }` entries.
    pub fn from_yaml(raw: &str) -> Result<Self, AppError> {
        let pages: Vec<StaticPage> = serde_yaml::from_str(raw)
            .map_err(|e| AppError::Config(format!("Invalid page registry: {e}")))?;
        Ok(Self::new(pages))
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read page registry '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml(&raw)
    }

    /// Load from `path` when given, otherwise use the built-in pages.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn pages(&self) -> &[StaticPage] {
        &self.pages
    }

    /// Pages whose title contains `query`, case-insensitively, in registry order.
    pub fn lookup(&self, query: &str) -> Vec<SearchResult> {
        let needle = query.to_lowercase();

        self.pages
            .iter()
            .filter(|page| page.title.to_lowercase().contains(&needle))
            .map(|page| SearchResult {
                kind: ResultKind::Page,
                id: page.href.clone(),
                title: page.title.clone(),
                description: None,
                href: page.href.clone(),
                thumbnail: None,
            })
            .collect()
    }
}
