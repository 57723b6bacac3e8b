use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use crate::api::articles::ArticlePage;
use crate::app::localized_href;
use crate::components::content_view::ContentView;
use crate::models::article::{Article, ArticleList};

const EMPTY_INDEX_MESSAGE: &str = "No blog articles available yet. Check back soon!";

/// Articles for the index pages. An unavailable content backend shows as
/// an empty index rather than an error page.
#[server]
pub async fn list_articles() -> Result<ArticleList, ServerFnError> {
    use crate::api::articles::process_list_articles;
    use crate::state::AppState;
    let state = leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    match process_list_articles(state.content.as_ref(), None).await {
        Ok(list) => Ok(list),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to list articles");
            Ok(ArticleList::default())
        }
    }
}

/// One article with its rendered body, or `None` when no article has `slug`.
#[server]
pub async fn get_article_page(slug: String) -> Result<Option<ArticlePage>, ServerFnError> {
    use crate::api::articles::process_get_article;
    use crate::error::AppError;
    use crate::state::AppState;
    let state = leptos::prelude::use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    match process_get_article(state.content.as_ref(), &slug).await {
        Ok(page) => Ok(Some(page)),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => {
            tracing::error!(slug = %slug, error = %e, "Failed to load article");
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

/// Index of articles, mounted under both `/research` and `/learn`.
#[component]
pub fn ArticleIndexPage(heading: &'static str, section: &'static str) -> impl IntoView {
    let params = use_params_map();
    let country_code = move || params.get().get("country_code").unwrap_or_default();
    let articles = Resource::new(|| (), |_| async move { list_articles().await });

    view! {
        <Title text=heading/>
        <div class="max-w-7xl mx-auto px-4 py-12">
            <h1 class="text-4xl font-bold text-gray-900 mb-8">{heading}</h1>
            <Suspense fallback=|| view! { <span class="loading loading-spinner loading-md"></span> }>
                {move || articles.get().map(|res| match res {
                    Ok(list) if !list.articles.is_empty() => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {list.articles
                                .into_iter()
                                .map(|article| view! {
                                    <ArticleCard article=article country_code=country_code() section=section/>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    Ok(_) => view! {
                        <div class="alert alert-info">
                            <span>{EMPTY_INDEX_MESSAGE}</span>
                        </div>
                    }
                    .into_any(),
                    Err(e) => view! {
                        <div class="alert alert-error">
                            <span>"Error: " {e.to_string()}</span>
                        </div>
                    }
                    .into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ArticleCard(article: Article, country_code: String, section: &'static str) -> impl IntoView {
    let href = localized_href(&country_code, &format!("/{section}/{}", article.url_slug));
    let tags = article.tags.iter().take(3).cloned().collect::<Vec<_>>();

    view! {
        <a href=href class="block bg-white rounded-lg shadow-sm hover:shadow-md transition-shadow overflow-hidden">
            {article.thumbnail_image.clone().map(|src| view! {
                <img src=src alt=article.title.clone() class="w-full h-48 object-cover"/>
            })}
            <div class="p-6">
                <div class="flex flex-wrap gap-2 mb-3">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="badge badge-outline">{tag}</span> })
                        .collect_view()}
                </div>
                <h2 class="text-xl font-semibold text-gray-900 mb-2">{article.title.clone()}</h2>
                {article.subtitle.clone().map(|s| view! { <p class="text-gray-600 mb-3">{s}</p> })}
                {article.author.clone().map(|a| view! { <p class="text-sm text-gray-500">"By " {a}</p> })}
            </div>
        </a>
    }
}

/// Full article with its rendered body.
#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.get().get("slug").unwrap_or_default());
    let page = Resource::new(move || slug.get(), |s| async move { get_article_page(s).await });

    view! {
        <Suspense fallback=|| view! { <span class="loading loading-spinner loading-md"></span> }>
            {move || page.get().map(|res| match res {
                Ok(Some(page)) => view! { <ArticleBody page=page/> }.into_any(),
                Ok(None) => view! {
                    <div class="max-w-4xl mx-auto px-4 py-12">
                        <h1 class="text-3xl font-bold text-gray-900 mb-4">"Article not found"</h1>
                        <p class="text-gray-600">"The article you are looking for does not exist."</p>
                    </div>
                }
                .into_any(),
                Err(e) => view! {
                    <div class="alert alert-error">
                        <span>"Error loading article: " {e.to_string()}</span>
                    </div>
                }
                .into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn ArticleBody(page: ArticlePage) -> impl IntoView {
    let ArticlePage { article, nodes } = page;
    let title = article.page_title().to_string();

    view! {
        <Title text=title/>
        {article.seo_description.clone().map(|d| view! { <Meta name="description" content=d/> })}
        {article.seo_keywords.clone().map(|k| view! { <Meta name="keywords" content=k/> })}
        <article class="max-w-4xl mx-auto px-4 py-12">
            <header class="mb-8">
                <div class="flex flex-wrap gap-2 mb-4">
                    {article.tags
                        .iter()
                        .cloned()
                        .map(|tag| view! { <span class="badge badge-outline">{tag}</span> })
                        .collect_view()}
                </div>
                <h1 class="text-4xl font-bold text-gray-900 mb-4">{article.title.clone()}</h1>
                {article.subtitle.clone().map(|s| view! { <p class="text-xl text-gray-600 mb-4">{s}</p> })}
                {article.author.clone().map(|a| view! { <p class="text-sm text-gray-500">"By " {a}</p> })}
            </header>
            {article.thumbnail_image.clone().map(|src| view! {
                <img src=src alt=article.title.clone() class="w-full rounded-lg mb-8"/>
            })}
            <ContentView nodes=nodes/>
        </article>
    }
}
