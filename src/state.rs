use std::sync::Arc;

use crate::backend::BackendHttp;
use crate::commerce::client::{CommerceClient, MedusaCommerceClient};
use crate::config::StorefrontConfig;
use crate::content::client::{BlogContentClient, ContentClient};
use crate::error::AppError;
use crate::search::aggregator::SearchAggregator;
use crate::search::pages::PageRegistry;

/// Shared server state, available to Axum handlers and Leptos server functions.
#[derive(Clone)]
pub struct AppState {
    pub commerce: Arc<dyn CommerceClient>,
    pub content: Arc<dyn ContentClient>,
    pub search: SearchAggregator,
    pub config: StorefrontConfig,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl axum::extract::FromRef<AppState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl AppState {
    /// Wire the given backends into a state, building the search aggregator
    /// from the config's limits and page registry.
    pub fn new(
        commerce: Arc<dyn CommerceClient>,
        content: Arc<dyn ContentClient>,
        pages: PageRegistry,
        config: StorefrontConfig,
        leptos_options: leptos::prelude::LeptosOptions,
    ) -> Self {
        let search = SearchAggregator::new(
            commerce.clone(),
            content.clone(),
            pages,
            config.search_limits,
        );

        Self {
            commerce,
            content,
            search,
            config,
            leptos_options,
        }
    }

    /// Build the state against the real store API described by `config`.
    pub fn from_config(
        config: StorefrontConfig,
        leptos_options: leptos::prelude::LeptosOptions,
    ) -> Result<Self, AppError> {
        let http = BackendHttp::from_config(&config)?;
        let pages = PageRegistry::load(config.pages_file.as_deref())?;

        if config.publishable_key.is_none() {
            tracing::warn!("MEDUSA_PUBLISHABLE_KEY is not set; research articles will be unavailable");
        }

        Ok(Self::new(
            Arc::new(MedusaCommerceClient::new(http.clone())),
            Arc::new(BlogContentClient::new(http)),
            pages,
            config,
            leptos_options,
        ))
    }
}
