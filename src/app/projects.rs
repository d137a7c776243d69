use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::overlay::{ImageOverlay, OverlayImage};
use super::ResultStats;
use crate::content::{toggle_expanded, Project, PROJECTS};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let expanded = RwSignal::new(None::<&'static str>);
    let overlay = RwSignal::new(None::<OverlayImage>);

    view! {
        <Title text="Projects" />
        <div class="max-w-3xl">
            <ResultStats count=876 seconds=0.28 />
            <div class="space-y-8">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectResult project expanded overlay /> })
                    .collect_view()}
            </div>
        </div>
        <ImageOverlay image=overlay />
    }
}

#[component]
fn ProjectResult(
    project: &'static Project,
    expanded: RwSignal<Option<&'static str>>,
    overlay: RwSignal<Option<OverlayImage>>,
) -> impl IntoView {
    let is_open = move || expanded.get() == Some(project.id);

    view! {
        <article>
            <p class="text-sm text-url">
                {project.github.unwrap_or_default()}
            </p>
            <h2
                class="text-xl text-link hover:underline cursor-pointer"
                on:click=move |_| expanded.set(Some(project.id))
            >
                {match project.live_demo {
                    Some(href) => {
                        Either::Left(
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer">
                                    {project.title}
                                </a>
                            },
                        )
                    }
                    None => Either::Right(project.title),
                }}
            </h2>
            <p class="text-xs text-muted mt-1">
                {format!("{} · {} · {}", project.date, project.team, project.role)}
            </p>
            <p class="text-body mt-2">{project.description}</p>
            <div class="flex flex-wrap gap-2 mt-3">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! { <span class="px-2 py-1 text-xs rounded bg-tag text-gray-200">{*tech}</span> }
                    })
                    .collect_view()}
            </div>
            <Gallery project overlay />
            <button
                class="mt-3 text-sm text-link hover:underline"
                on:click=move |_| expanded.update(|e| *e = toggle_expanded(*e, project.id))
            >
                {move || if is_open() { "Hide details ▲" } else { "Show details ▼" }}
            </button>
            {move || {
                is_open()
                    .then(|| {
                        view! {
                            <div class="mt-4 p-4 rounded-lg bg-card space-y-3">
                                <p class="text-body leading-relaxed">{project.details}</p>
                                <ul class="list-disc ml-5 text-sm text-body">
                                    {project
                                        .achievements
                                        .iter()
                                        .map(|a| view! { <li>{*a}</li> })
                                        .collect_view()}
                                </ul>
                                {project
                                    .github
                                    .map(|href| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="inline-flex items-center gap-2 text-sm text-link hover:underline"
                                            >
                                                <i class="devicon-github-plain"></i>
                                                "View source"
                                            </a>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </article>
    }
}

#[component]
fn Gallery(project: &'static Project, overlay: RwSignal<Option<OverlayImage>>) -> impl IntoView {
    let (shown, hidden) = project.gallery();
    let last = shown.len().saturating_sub(1);

    view! {
        <div class="grid grid-cols-4 gap-2 mt-3 max-w-sm">
            {shown
                .iter()
                .enumerate()
                .map(|(i, src)| {
                    let src = *src;
                    view! {
                        <div class="relative">
                            <img
                                src=src
                                alt=project.title
                                class="w-full h-16 object-cover rounded cursor-pointer"
                                on:click=move |_| {
                                    overlay
                                        .set(
                                            Some(OverlayImage {
                                                src,
                                                alt: project.title,
                                            }),
                                        )
                                }
                            />
                            {(i == last && hidden > 0)
                                .then(|| {
                                    view! {
                                        <div class="absolute inset-0 flex items-center justify-center rounded bg-black/50 pointer-events-none">
                                            <span class="text-xs font-medium text-white">
                                                {format!("+{hidden}")}
                                            </span>
                                        </div>
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
