#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use molecule::app::{shell, App};
    use molecule::config::StorefrontConfig;
    use molecule::state::AppState;
    use tower_http::cors::CorsLayer;
    use tower_http::services::ServeDir;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "molecule=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting Molecule storefront...");

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).context("Failed to load Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    let config = StorefrontConfig::from_env()?;
    tracing::info!(
        backend_url = %config.backend_url,
        default_country_code = %config.default_country_code,
        "Store backend configured"
    );

    let app_state = AppState::from_config(config, leptos_options)?;

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    let app = Router::new()
        // API routes
        .merge(molecule::api::routes::api_routes().layer(CorsLayer::permissive()))
        // Leptos SSR routes, with the state available to server functions
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = app_state.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        // Static files
        .fallback_service(ServeDir::new(&site_root))
        .with_state(app_state);

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {}
