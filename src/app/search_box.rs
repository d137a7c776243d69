use leptos::{
    ev::{KeyboardEvent, SubmitEvent},
    html,
    prelude::*,
};
use leptos_router::{hooks::use_navigate, NavigateOptions};
use leptos_use::on_click_outside;

use crate::search::{QueryState, SearchEvent};

/// Search input with the suggestion dropdown. The owning view holds `state`.
#[component]
pub fn SearchBox(
    state: RwSignal<QueryState>,
    #[prop(into)] placeholder: Signal<String>,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let input_ref = NodeRef::<html::Input>::new();

    let dispatch = move |event: SearchEvent| {
        let target = state.write().apply(event);
        if let Some(target) = target {
            let path = target.to_string();
            log::debug!("search navigating to {path}");
            let navigate = use_navigate();
            navigate(&path, NavigateOptions::default());
        }
    };

    let _ = on_click_outside(container_ref, move |_| {
        if state.with_untracked(|s| s.is_open) {
            dispatch(SearchEvent::ClickOutside);
        }
    });

    let keydown_handler = move |ev: KeyboardEvent| {
        let event = if let Some(event) = SearchEvent::from_key(&ev.key()) {
            event
        } else {
            return;
        };
        if event != SearchEvent::Escape {
            ev.prevent_default();
        }
        dispatch(event);
    };

    let (bar_class, list_class) = if large {
        (
            "flex items-center w-full h-12 px-5 rounded-full border border-gray-600 bg-searchbar hover:bg-searchbar-hover focus-within:bg-searchbar-hover",
            "absolute z-20 w-full mt-1 py-2 rounded-2xl bg-suggestion shadow-lg",
        )
    } else {
        (
            "flex items-center w-full h-11 px-4 rounded-full border border-gray-600 bg-searchbar hover:bg-searchbar-hover focus-within:bg-searchbar-hover",
            "absolute z-20 w-full mt-1 py-2 rounded-xl bg-suggestion shadow-lg",
        )
    };

    view! {
        <div node_ref=container_ref class="relative w-full">
            <form
                role="search"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    dispatch(SearchEvent::Enter);
                }
            >
                <div class=bar_class>
                    <button type="submit" class="mr-3 text-gray-400" aria-label="Search">
                        "🔍"
                    </button>
                    <input
                        type="text"
                        node_ref=input_ref
                        autocomplete="off"
                        autocapitalize="none"
                        class="flex-1 bg-transparent text-gray-100 placeholder-gray-400 focus:outline-none"
                        placeholder=move || placeholder.get()
                        prop:value=move || state.with(|s| s.raw_input.clone())
                        on:input=move |ev| dispatch(SearchEvent::Input(event_target_value(&ev)))
                        on:focus=move |_| dispatch(SearchEvent::Focus)
                        on:blur=move |_| dispatch(SearchEvent::Blur)
                        on:keydown=keydown_handler
                    />
                    {move || {
                        let has_text = state.with(|s| !s.raw_input.is_empty());
                        has_text
                            .then(|| {
                                view! {
                                    <button
                                        type="button"
                                        class="ml-2 text-gray-400 hover:text-white"
                                        aria-label="Clear search"
                                        on:pointerdown=move |_| dispatch(SearchEvent::SuggestionPointerDown)
                                        on:click=move |_| {
                                            dispatch(SearchEvent::Clear);
                                            if let Some(input) = input_ref.get_untracked() {
                                                let _ = input.focus();
                                            }
                                        }
                                    >
                                        "✕"
                                    </button>
                                }
                            })
                    }}
                </div>
            </form>
            {move || {
                let current = state.get();
                let filtered = current.filtered();
                if !current.is_open || filtered.is_empty() {
                    return None;
                }
                let items = filtered
                    .into_iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        let class = if current.is_highlighted(i) {
                            "flex items-center px-5 py-2 cursor-pointer bg-gray-600"
                        } else {
                            "flex items-center px-5 py-2 cursor-pointer hover:bg-gray-600"
                        };
                        view! {
                            <li
                                class=class
                                on:pointerdown=move |_| dispatch(SearchEvent::SuggestionPointerDown)
                                on:click=move |_| dispatch(SearchEvent::SuggestionClick(entry.route))
                            >
                                <span class="mr-3 text-gray-400">"🔍"</span>
                                <span>{entry.text}</span>
                            </li>
                        }
                    })
                    .collect_view();
                Some(view! { <ul class=list_class>{items}</ul> })
            }}
        </div>
    }
}
