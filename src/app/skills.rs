use leptos::prelude::*;
use leptos_meta::Title;

use super::ResultStats;
use crate::content::{toggle_expanded, SkillCategory, SKILL_CATEGORIES};

#[component]
pub fn SkillsPage() -> impl IntoView {
    let expanded = RwSignal::new(None::<&'static str>);

    view! {
        <Title text="Skills" />
        <div class="max-w-3xl">
            <ResultStats count=2_310 seconds=0.37 />
            <div class="space-y-6">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| view! { <Category category expanded /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Category(category: &'static SkillCategory, expanded: RwSignal<Option<&'static str>>) -> impl IntoView {
    let is_open = move || expanded.get() == Some(category.id);

    view! {
        <section class="p-4 rounded-lg border border-card bg-card">
            // clicking the title always opens, the toggle below can close
            <h2
                class="text-lg text-link hover:underline cursor-pointer"
                on:click=move |_| expanded.set(Some(category.id))
            >
                {category.title}
            </h2>
            <p class="text-sm text-body mt-1">{category.description}</p>
            <div class="flex flex-wrap gap-2 mt-3">
                {category
                    .key_skills
                    .iter()
                    .map(|s| view! { <span class="px-2 py-1 text-xs rounded bg-tag text-gray-200">{*s}</span> })
                    .collect_view()}
            </div>
            <button
                class="mt-3 text-sm text-link hover:underline"
                on:click=move |_| expanded.update(|e| *e = toggle_expanded(*e, category.id))
            >
                {move || {
                    if is_open() { "Hide proficiency levels ▲" } else { "Show proficiency levels ▼" }
                }}
            </button>
            {move || {
                is_open()
                    .then(|| {
                        view! {
                            <ul class="mt-4 space-y-3">
                                {category
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <li>
                                                <div class="flex justify-between text-sm text-body">
                                                    <span>{skill.name}</span>
                                                    <span>{format!("{}%", skill.proficiency)}</span>
                                                </div>
                                                <div class="h-1.5 mt-1 rounded bg-progress">
                                                    <div
                                                        class="h-1.5 rounded bg-progress-fill"
                                                        style:width=format!("{}%", skill.proficiency)
                                                    ></div>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })
            }}
        </section>
    }
}
