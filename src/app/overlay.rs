use leptos::{ev::MouseEvent, prelude::*};

/// Image currently shown full screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayImage {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Full-screen lightbox. Clicking the backdrop or the close button clears
/// `image`; clicks on the picture itself are swallowed.
#[component]
pub fn ImageOverlay(image: RwSignal<Option<OverlayImage>>) -> impl IntoView {
    let close = move |_: MouseEvent| image.set(None);
    move || {
        image.get().map(|OverlayImage { src, alt }| {
            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-black/80"
                    on:click=close
                >
                    <button
                        class="absolute top-6 right-6 w-10 h-10 rounded-full bg-gray-800 hover:bg-gray-700"
                        aria-label="Close image"
                        on:click=close
                    >
                        "✕"
                    </button>
                    <div
                        class="max-w-[90vw] max-h-[90vh] p-4"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <img
                            src=src
                            alt=alt
                            class="max-w-full max-h-[85vh] object-contain rounded-lg shadow-2xl"
                        />
                    </div>
                </div>
            }
        })
    }
}
