use std::time::Duration;

use leptos::{ev, leptos_dom::helpers::WindowListenerHandle, prelude::*};
use leptos_router::hooks::use_location;

use crate::loading::LoadingGate;

const DOT_COLORS: [&str; 4] = ["#4285F4", "#EA4335", "#FBBC05", "#34A853"];

#[component]
pub fn LoadingDots(threshold: Duration) -> impl IntoView {
    let gate = RwSignal::new(LoadingGate::new(threshold));
    let pathname = use_location().pathname;
    let load_listener = StoredValue::new_local(None::<WindowListenerHandle>);
    on_cleanup(move || {
        load_listener.update_value(|slot| replace_listener(slot, None, WindowListenerHandle::remove))
    });

    Effect::watch(
        move || pathname.get(),
        move |_, _, _| {
            let mut generation = 0;
            gate.update(|g| generation = g.start());
            set_timeout(
                move || gate.update(|g| g.tick(generation, threshold)),
                threshold,
            );
            let next = if document().ready_state() == "complete" {
                gate.update(|g| g.ready());
                None
            } else {
                Some(window_event_listener(ev::load, move |_| gate.update(|g| g.ready())))
            };
            load_listener.update_value(|slot| replace_listener(slot, next, WindowListenerHandle::remove));
        },
        true,
    );

    move || {
        gate.with(|g| g.is_visible()).then(|| {
            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-page">
                    <div class="flex items-center gap-2">
                        {DOT_COLORS
                            .iter()
                            .enumerate()
                            .map(|(i, color)| {
                                view! {
                                    <div
                                        class="w-3 h-3 rounded-full animate-bounce"
                                        style:background-color=*color
                                        style:animation-delay=format!("{}ms", i * 100)
                                    ></div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
    }
}

/// Store `next`, removing whatever listener it displaces.
fn replace_listener<H>(slot: &mut Option<H>, next: Option<H>, remove: impl FnOnce(H)) {
    if let Some(prev) = std::mem::replace(slot, next) {
        remove(prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_listener_removes_previous() {
        let mut removed = Vec::new();
        let mut slot = None;

        replace_listener(&mut slot, Some(1), |h| removed.push(h));
        assert!(removed.is_empty());

        replace_listener(&mut slot, Some(2), |h| removed.push(h));
        assert_eq!(removed, vec![1]);
        assert_eq!(slot, Some(2));

        replace_listener(&mut slot, None, |h| removed.push(h));
        assert_eq!(removed, vec![1, 2]);
        assert_eq!(slot, None);
    }
}
