use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_query_map};

use crate::search::SUGGESTIONS;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let query = use_query_map();
    let q = move || query.with(|q| q.get("q")).unwrap_or_default();

    view! {
        <Title text="No results" />
        <div class="max-w-3xl md:ml-0">
            <p class="text-body mb-6">
                "Your search - " <span class="font-medium text-link">{q}</span>
                " - did not match any documents."
            </p>
            <h3 class="text-body mb-4">"Suggestions:"</h3>
            <ul class="space-y-2 ml-4 mb-8">
                {SUGGESTIONS
                    .iter()
                    .map(|s| {
                        view! {
                            <li class="flex items-start text-body">
                                <span class="mr-2">"•"</span>
                                <div>
                                    "Try searching for "
                                    <A href=s.href() attr:class="text-link hover:underline">
                                        {format!("\"{}\"", s.text)}
                                    </A>
                                    {format!(" to {}", s.description)}
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="flex gap-4">
                <A
                    href="/"
                    attr:class="px-4 py-2 rounded bg-suggestion hover:bg-gray-600"
                >
                    "Home"
                </A>
                <button
                    class="px-4 py-2 rounded bg-suggestion hover:bg-gray-600"
                    on:click=|_| {
                        let _ = window().history().and_then(|h| h.back());
                    }
                >
                    "Go back"
                </button>
            </div>
        </div>
    }
}
