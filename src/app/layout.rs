use leptos::prelude::*;
use leptos_router::{
    components::*,
    hooks::{use_location, use_query_map},
};

use super::loading::LoadingDots;
use super::search_box::SearchBox;
use crate::content::OWNER;
use crate::loading::LAYOUT_THRESHOLD;
use crate::search::{current_tab, QueryState, SearchEvent, SUGGESTIONS};

fn tab_name(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Text the search box shows for a page: its keyword, else the query that
/// led to the not-found page.
fn seed_text(pathname: &str, q: Option<String>) -> String {
    current_tab(pathname)
        .map(|tab| tab.text.to_string())
        .or(q)
        .unwrap_or_default()
}

#[component]
pub fn SearchLayout() -> impl IntoView {
    let pathname = use_location().pathname;
    let query = use_query_map();
    let state = RwSignal::new(QueryState::new(seed_text(
        &pathname.get_untracked(),
        query.with_untracked(|q| q.get("q")),
    )));

    Effect::watch(
        move || (pathname.get(), query.with(|q| q.get("q"))),
        move |(pathname, q): &(String, Option<String>), _, _| {
            state
                .write()
                .apply(SearchEvent::Navigated(seed_text(pathname, q.clone())));
        },
        false,
    );

    let placeholder = Signal::derive(move || {
        current_tab(&pathname.get())
            .map(|tab| tab_name(tab.text))
            .unwrap_or_else(|| "Search...".to_string())
    });

    view! {
        <LoadingDots threshold=LAYOUT_THRESHOLD />
        <header class="border-b border-header">
            <div class="flex flex-col md:flex-row md:items-center gap-4 px-4 md:px-8 pt-5">
                <A href="/" attr:class="text-2xl font-bold whitespace-nowrap md:w-32">
                    {OWNER.first_name}
                </A>
                <div class="w-full max-w-2xl">
                    <SearchBox state placeholder />
                </div>
            </div>
            <nav class="flex gap-6 px-4 md:pl-44 mt-4 overflow-x-auto text-sm">
                {SUGGESTIONS
                    .iter()
                    .map(|tab| {
                        let class = move || {
                            let active = current_tab(&pathname.get()) == Some(tab);
                            if active {
                                "pb-3 border-b-2 border-white text-white"
                            } else {
                                "pb-3 text-tab-inactive hover:text-gray-200"
                            }
                        };
                        view! {
                            <A href=tab.href() attr:class=class>
                                {tab_name(tab.text)}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
        <main class="px-4 md:pl-44 md:pr-8 py-6">
            <Outlet />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_name() {
        assert_eq!(tab_name("projects"), "Projects");
        assert_eq!(tab_name(""), "");
    }

    #[test]
    fn test_seed_text() {
        assert_eq!(seed_text("/search/about", None), "about");
        assert_eq!(seed_text("/search/404", Some("xyz".to_string())), "xyz");
        assert_eq!(seed_text("/search/404", None), "");
    }
}
