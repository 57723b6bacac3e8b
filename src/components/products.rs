use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::localized_href;
use crate::models::product::StoreProduct;

/// Number of products shown on the home page.
pub const FEATURED_PRODUCT_COUNT: usize = 12;

#[server]
pub async fn featured_products(country_code: String) -> Result<Vec<StoreProduct>, ServerFnError> {
    use crate::state::AppState;
    let state = leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    state
        .commerce
        .list_products(&country_code, FEATURED_PRODUCT_COUNT)
        .await
        .map_err(|e| {
            tracing::error!(country_code = %country_code, error = %e, "Failed to list featured products");
            ServerFnError::new(e.to_string())
        })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let params = use_params_map();
    let country_code = Memo::new(move |_| params.get().get("country_code").unwrap_or_default());
    let products = Resource::new(
        move || country_code.get(),
        |cc| async move { featured_products(cc).await },
    );

    view! {
        <section class="max-w-7xl mx-auto px-4 py-12">
            <h1 class="text-4xl font-bold text-gray-900 mb-8">"Featured Products"</h1>
            <Suspense fallback=|| view! { <span class="loading loading-spinner loading-md"></span> }>
                {move || products.get().map(|res| match res {
                    Ok(list) if list.is_empty() => view! {
                        <div class="alert alert-info">
                            <span>"No products available in this region yet."</span>
                        </div>
                    }
                    .into_any(),
                    Ok(list) => view! {
                        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                            {list
                                .into_iter()
                                .map(|product| view! {
                                    <ProductCard product=product country_code=country_code.get_untracked()/>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    Err(e) => view! {
                        <div class="alert alert-error">
                            <span>"Error loading products: " {e.to_string()}</span>
                        </div>
                    }
                    .into_any(),
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn ProductCard(product: StoreProduct, country_code: String) -> impl IntoView {
    let href = localized_href(&country_code, &product.path());

    view! {
        <a href=href class="block group">
            <div class="aspect-square bg-gray-100 rounded-lg overflow-hidden mb-3">
                {product.thumbnail.clone().map(|src| view! {
                    <img src=src alt=product.title.clone() class="w-full h-full object-cover group-hover:scale-105 transition-transform"/>
                })}
            </div>
            <h3 class="text-base font-semibold text-gray-900">{product.title.clone()}</h3>
        </a>
    }
}
