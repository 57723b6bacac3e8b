pub mod app;
pub mod config;
pub mod error;
pub mod models {
    pub mod article;
    pub mod lenient;
    pub mod product;
    pub mod search;
}
pub mod rendering {
    pub mod blocks;
}
pub mod search {
    pub mod aggregator;
    pub mod pages;
    pub mod session;
}
pub mod commerce {
    pub mod client;
}
pub mod content {
    pub mod client;
}
pub mod components {
    pub mod articles;
    pub mod content_view;
    pub mod peptide_guide;
    pub mod products;
    pub mod search_modal;
}
pub mod api {
    pub mod articles;
    pub mod errors;
    #[cfg(feature = "ssr")]
    pub mod routes;
    pub mod search;
}
#[cfg(feature = "ssr")]
pub mod backend;
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
