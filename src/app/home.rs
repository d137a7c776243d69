use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::loading::LoadingDots;
use super::search_box::SearchBox;
use crate::content::{OWNER, SOCIAL_LINKS};
use crate::loading::HOME_THRESHOLD;
use crate::search::QueryState;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(QueryState::default());
    let placeholder = format!("Search {}'s profile", OWNER.first_name);

    view! {
        <Title text="Home" />
        <LoadingDots threshold=HOME_THRESHOLD />
        <div class="flex flex-col min-h-screen bg-home">
            <div class="flex justify-end items-center gap-3 p-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="w-10 h-10 flex items-center justify-center rounded-full bg-suggestion hover:bg-gray-600 text-xl"
                                aria-label=link.label
                            >
                                <i class=link.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <main class="flex flex-col flex-grow items-center justify-center px-4 -mt-16">
                <h1 class="text-6xl md:text-8xl font-medium mb-8 text-center break-words">
                    {OWNER.first_name}
                </h1>
                <div class="w-full max-w-xl mb-8">
                    <SearchBox state placeholder large=true />
                </div>
                <div class="flex flex-col sm:flex-row gap-4 mb-6 w-full max-w-md">
                    <A
                        href="/search/about"
                        attr:class="flex-1 h-12 flex items-center justify-center rounded bg-suggestion hover:shadow-md"
                    >
                        "About Me"
                    </A>
                    <a
                        href="/resume.pdf"
                        download=format!("{}_Resume.pdf", OWNER.first_name)
                        class="flex-1 h-12 flex items-center justify-center gap-2 rounded bg-suggestion hover:shadow-md"
                    >
                        "⬇ Resume Download"
                    </a>
                </div>
                <div class="text-sm text-center text-tab-inactive">
                    {OWNER.first_name} " offered in: "
                    <span class="text-link">"English"</span>
                </div>
            </main>
            <footer class="flex flex-col sm:flex-row justify-between items-center px-6 py-3 text-sm bg-footer text-tab-inactive">
                <div>{OWNER.location.rsplit(", ").next().unwrap_or(OWNER.location)}</div>
                <div>{format!("© {BUILD_YEAR} {}. All rights reserved.", OWNER.full_name)}</div>
            </footer>
        </div>
    }
}
