use leptos::prelude::*;

use crate::app::localized_href;
use crate::models::search::SearchResult;
use crate::search::session::{SearchSession, SearchSnapshot, SearchTicket};

/// Server function backing the search box.
#[server]
pub async fn search_site(
    query: String,
    country_code: String,
) -> Result<Vec<SearchResult>, ServerFnError> {
    use crate::state::AppState;
    let state = leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    Ok(state.search.search(&query, &country_code).await)
}

/// Search button plus the overlay with the debounced search box.
#[component]
pub fn SearchModal(#[prop(into)] country_code: Signal<String>) -> impl IntoView {
    let session = StoredValue::new(SearchSession::new());
    let (open, set_open) = signal(false);
    let (snapshot, set_snapshot) = signal(SearchSnapshot::default());

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let session = session.get_value();
        let ticket = session.input(&text);
        set_snapshot.set(session.snapshot());
        if let Some(ticket) = ticket {
            spawn_search(session, ticket, country_code.get_untracked(), set_snapshot);
        }
    };

    // Results are per-region: search again when the country changes.
    Effect::new(move |previous: Option<String>| {
        let country = country_code.get();
        if previous.is_some_and(|previous| previous != country) {
            let session = session.get_value();
            if let Some(ticket) = session.refresh() {
                set_snapshot.set(session.snapshot());
                spawn_search(session, ticket, country.clone(), set_snapshot);
            }
        }
        country
    });

    let close = move || {
        session.with_value(|s| s.close());
        set_snapshot.set(SearchSnapshot::default());
        set_open.set(false);
    };

    view! {
        <button class="p-2 hover:bg-gray-100 rounded-full" aria-label="Search" on:click=move |_| set_open.set(true)>
            "Search"
        </button>
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-[100]">
                <div class="fixed inset-0 bg-black/50 backdrop-blur-sm" on:click=move |_| close()></div>
                <div class="absolute inset-0 flex items-start justify-center pt-20 px-4 pointer-events-none">
                    <div class="relative w-full max-w-2xl bg-white rounded-2xl shadow-2xl overflow-hidden pointer-events-auto">
                        <div class="flex items-center gap-4 p-6 border-b border-gray-200">
                            <input
                                type="text"
                                autofocus
                                placeholder="Search products, pages, and research..."
                                class="flex-1 text-lg outline-none border-none bg-transparent"
                                prop:value=move || snapshot.with(|s| s.query.clone())
                                on:input=on_input
                                on:keydown=move |ev| {
                                    if ev.key() == "Escape" {
                                        close();
                                    }
                                }
                            />
                            <button
                                class="p-2 hover:bg-gray-100 rounded-full"
                                aria-label="Close search"
                                on:click=move |_| close()
                            >
                                "×"
                            </button>
                        </div>
                        <div class="max-h-[60vh] overflow-y-auto">
                            {move || {
                                let snap = snapshot.get();
                                render_results(snap, country_code.get(), close)
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn render_results(
    snap: SearchSnapshot,
    country_code: String,
    close: impl Fn() + Copy + Send + Sync + 'static,
) -> AnyView {
    if snap.loading {
        return view! { <div class="p-8 text-center text-gray-500">"Searching..."</div> }.into_any();
    }
    if snap.query.trim().is_empty() {
        return view! { <div class="p-8 text-center text-gray-500">"Start typing to search..."</div> }
            .into_any();
    }
    if snap.is_empty_result() {
        return view! {
            <div class="p-8 text-center text-gray-500">
                {format!("No results found for \"{}\"", snap.query)}
            </div>
        }
        .into_any();
    }

    view! {
        <div class="divide-y divide-gray-100">
            {snap
                .results
                .into_iter()
                .map(|result| {
                    let href = localized_href(&country_code, &result.href);
                    view! {
                        <a href=href class="block p-4 hover:bg-gray-50" on:click=move |_| close()>
                            <div class="flex items-start gap-4">
                                {result.thumbnail.clone().map(|src| view! {
                                    <div class="w-16 h-16 rounded-lg overflow-hidden flex-shrink-0 bg-gray-100">
                                        <img src=src alt=result.title.clone() class="w-full h-full object-cover"/>
                                    </div>
                                })}
                                <div class="flex-1 min-w-0">
                                    <div class="flex items-center gap-2 mb-1">
                                        <span class="text-xs px-2 py-1 bg-gray-100 text-gray-600 rounded-full uppercase">
                                            {result.kind.label()}
                                        </span>
                                        <h3 class="text-base font-semibold text-gray-900 truncate">
                                            {result.title.clone()}
                                        </h3>
                                    </div>
                                    {result.description.clone().map(|d| view! {
                                        <p class="text-sm text-gray-600 line-clamp-2">{d}</p>
                                    })}
                                </div>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// Run the debounced search in the browser. On the server there is no
/// input to react to.
fn spawn_search(
    session: SearchSession,
    ticket: SearchTicket,
    country_code: String,
    set_snapshot: WriteSignal<SearchSnapshot>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session
            .run(
                ticket,
                crate::search::session::DEFAULT_DEBOUNCE,
                |delay| gloo_timers::future::sleep(delay),
                |query| async move {
                    search_site(query, country_code).await.unwrap_or_else(|e| {
                        leptos::logging::warn!("Search request failed: {e}");
                        Vec::new()
                    })
                },
            )
            .await;
        set_snapshot.set(session.snapshot());
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (session, ticket, country_code, set_snapshot);
}
