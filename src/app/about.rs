use leptos::prelude::*;
use leptos_meta::Title;

use super::overlay::{ImageOverlay, OverlayImage};
use super::ResultStats;
use crate::content::{BIO, EDUCATION, OWNER};

#[component]
pub fn AboutPage() -> impl IntoView {
    let overlay = RwSignal::new(None::<OverlayImage>);

    view! {
        <Title text="About" />
        <div class="max-w-6xl">
            <ResultStats count=1_240 seconds=0.32 />
            <section>
                <h1 class="text-2xl sm:text-3xl text-heading mb-6">
                    {format!("{} - {}", OWNER.full_name, OWNER.headline)}
                </h1>
                <div class="flex flex-col-reverse lg:flex-row gap-6 lg:gap-10">
                    <div class="flex-1 space-y-4 text-body leading-relaxed">
                        {BIO.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                    <button
                        class="flex-shrink-0 self-center w-40 h-40 rounded-full bg-gradient-to-br from-blue-500 to-purple-600 text-5xl font-bold"
                        aria-label="Show profile photo"
                        on:click=move |_| {
                            overlay
                                .set(
                                    Some(OverlayImage {
                                        src: OWNER.photo,
                                        alt: "Profile photo",
                                    }),
                                )
                        }
                    >
                        {OWNER.initial}
                    </button>
                </div>
                <div class="my-8 h-px bg-separator"></div>
            </section>
            <section>
                <h2 class="text-xl text-heading mb-6">"Education & Learning Journey"</h2>
                <div class="space-y-6">
                    {EDUCATION
                        .iter()
                        .map(|edu| {
                            view! {
                                <div class="flex gap-4 items-start">
                                    <div class="flex-1">
                                        <h3 class="text-lg text-link">{edu.title}</h3>
                                        <p class="text-sm text-url">{edu.institution}</p>
                                        <p class="text-sm text-body mt-1">{edu.description}</p>
                                        <p class="text-xs text-muted mt-1">{edu.time_ago}</p>
                                    </div>
                                    <img
                                        src=edu.image
                                        alt=edu.institution
                                        class="w-24 h-24 object-cover rounded-lg cursor-pointer"
                                        on:click=move |_| {
                                            overlay
                                                .set(
                                                    Some(OverlayImage {
                                                        src: edu.image,
                                                        alt: edu.institution,
                                                    }),
                                                )
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
        <ImageOverlay image=overlay />
    }
}
