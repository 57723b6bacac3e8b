use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::articles::{ArticleDetailPage, ArticleIndexPage};
use crate::components::peptide_guide::PeptideGuidePage;
use crate::components::products::HomePage;
use crate::components::search_modal::SearchModal;
use crate::config::DEFAULT_COUNTRY_CODE;

/// Country code from the first segment of a storefront path,
/// e.g. `/de/research` gives `de`.
pub fn country_from_path(path: &str) -> Option<String> {
    let segment = path.trim_start_matches('/').split('/').next()?;
    let valid = segment.len() == 2 && segment.chars().all(|c| c.is_ascii_alphabetic());
    valid.then(|| segment.to_ascii_lowercase())
}

/// Prefix a site path with the country segment.
pub fn localized_href(country_code: &str, path: &str) -> String {
    let country_code = if country_code.is_empty() {
        DEFAULT_COUNTRY_CODE
    } else {
        country_code
    };
    match path.trim_start_matches('/') {
        "" => format!("/{country_code}"),
        rest => format!("/{country_code}/{rest}"),
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/molecule.css"/>
        <Title text="Molecule - Research Peptides"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=|| view! { <Redirect path=format!("/{DEFAULT_COUNTRY_CODE}")/> }/>
                    <Route path=path!("/:country_code") view=HomePage/>
                    <Route
                        path=path!("/:country_code/research")
                        view=|| view! { <ArticleIndexPage heading="Research" section="research"/> }
                    />
                    <Route
                        path=path!("/:country_code/learn")
                        view=|| view! { <ArticleIndexPage heading="Learn" section="learn"/> }
                    />
                    <Route path=path!("/:country_code/research/:slug") view=ArticleDetailPage/>
                    <Route path=path!("/:country_code/learn/:slug") view=ArticleDetailPage/>
                    <Route path=path!("/:country_code/pages/peptide-guide") view=PeptideGuidePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Nav() -> impl IntoView {
    let location = use_location();
    let country_code = Signal::derive(move || {
        country_from_path(&location.pathname.get())
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string())
    });
    let link = move |path: &'static str| move || localized_href(&country_code.get(), path);

    view! {
        <nav class="top-nav flex items-center justify-between px-6 py-4 border-b border-gray-200">
            <a href=link("/") class="logo text-xl font-bold">"Molecule"</a>
            <div class="flex items-center gap-6">
                <a href=link("/research")>"Research"</a>
                <a href=link("/learn")>"Learn"</a>
                <SearchModal country_code=country_code/>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_from_path() {
        assert_eq!(country_from_path("/de/research").as_deref(), Some("de"));
        assert_eq!(country_from_path("/US").as_deref(), Some("us"));
        assert_eq!(country_from_path("/"), None);
        assert_eq!(country_from_path("/api/search"), None);
        assert_eq!(country_from_path("/1x/learn"), None);
    }

    #[test]
    fn test_localized_href() {
        assert_eq!(localized_href("de", "/products/bpc-157"), "/de/products/bpc-157");
        assert_eq!(localized_href("gb", "research/intro"), "/gb/research/intro");
        assert_eq!(localized_href("", "/learn"), "/us/learn");
        assert_eq!(localized_href("us", "/"), "/us");
    }

    #[test]
    fn test_guide_result_links_to_guide_route() {
        let href = localized_href("gb", crate::components::peptide_guide::PEPTIDE_GUIDE_PATH);
        assert_eq!(href, "/gb/pages/peptide-guide");
        assert_eq!(country_from_path(&href).as_deref(), Some("gb"));
    }
}
