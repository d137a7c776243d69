use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};
use leptos_meta::Title;

use super::ResultStats;
use crate::contact::{ContactError, ContactForm, ContactState, Field, SubmitStatus};
use crate::content::{CONTACT_METHODS, OWNER, SOCIAL_LINKS};

/// Deliver a contact message through the configured email sender.
#[server]
pub async fn send_contact_message(form: ContactForm) -> Result<(), ServerFnError> {
    use crate::email::{deliver, EmailJsSender};

    let sender = use_context::<EmailJsSender>()
        .ok_or_else(|| ServerFnError::new("email sender not configured"))?;
    deliver(&sender, &form)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let send = ServerAction::<SendContactMessage>::new();

    Effect::watch(
        move || send.value().get(),
        move |res, _, _| {
            if let Some(res) = res {
                let res = res
                    .clone()
                    .map_err(|e| ContactError::Delivery(e.to_string()));
                state.write().finish(res);
            }
        },
        false,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = state.write().begin_submit();
        if let Some(form) = form {
            send.dispatch(SendContactMessage { form });
        }
    };

    view! {
        <Title text="Contact" />
        <div class="max-w-6xl">
            <ResultStats count=512 seconds=0.41 />
            <section class="mb-8">
                <h1 class="text-xl text-link hover:underline mb-2">
                    {format!("Contact {} - Get In Touch", OWNER.full_name)}
                </h1>
                <p class="text-sm text-url mb-3">{OWNER.email}</p>
                <p class="text-body leading-relaxed">
                    "If you're interested in connecting professionally, reviewing my work, or exploring collaborations, feel free to reach out! Whether you have a project in mind, want to discuss AI/ML opportunities, or just want to say hello, I'd love to hear from you."
                </p>
            </section>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 lg:gap-8">
                <aside class="p-6 rounded-lg bg-card space-y-6">
                    <div class="text-center">
                        <div class="w-20 h-20 mx-auto mb-3 rounded-full bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-2xl font-bold">
                            {OWNER.initial}
                        </div>
                        <h2 class="text-lg text-heading">{OWNER.full_name}</h2>
                        <p class="text-sm text-muted">{OWNER.headline}</p>
                    </div>
                    <ul class="space-y-4">
                        {CONTACT_METHODS
                            .iter()
                            .map(|m| {
                                view! {
                                    <li>
                                        <p class="text-xs text-muted">{m.label}</p>
                                        {match m.href {
                                            Some(href) => {
                                                view! {
                                                    <a href=href class="text-link hover:underline">
                                                        {m.value}
                                                    </a>
                                                }
                                                    .into_any()
                                            }
                                            None => view! { <span class="text-body">{m.value}</span> }.into_any(),
                                        }}
                                        <p class="text-xs text-muted">{m.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <ul class="space-y-3">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-2 text-link hover:underline"
                                        >
                                            <i class=link.icon></i>
                                            {link.label}
                                        </a>
                                        <p class="text-xs text-muted">{link.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </aside>
                <form class="lg:col-span-2 p-6 rounded-lg bg-card space-y-4" on:submit=on_submit>
                    <h2 class="text-lg text-heading">"Send a Message"</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <FormField state field=Field::Name label="Name" />
                        <FormField state field=Field::Email label="Email" input_type="email" />
                    </div>
                    <FormField state field=Field::Subject label="Subject" />
                    <FormField state field=Field::Message label="Message" multiline=true />
                    {move || {
                        state
                            .with(|s| {
                                s.status_message()
                                    .map(|msg| {
                                        let class = if s.status == SubmitStatus::Sent {
                                            "p-3 rounded text-sm bg-green-900/40 text-green-300"
                                        } else {
                                            "p-3 rounded text-sm bg-red-900/40 text-red-300"
                                        };
                                        view! {
                                            <p class=class role="status">
                                                {msg}
                                            </p>
                                        }
                                    })
                            })
                    }}
                    <button
                        type="submit"
                        class="px-6 py-2 rounded bg-link text-black font-medium disabled:opacity-50"
                        disabled=move || state.with(|s| s.is_submitting())
                    >
                        {move || {
                            if state.with(|s| s.is_submitting()) { "Sending..." } else { "Send Message" }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    state: RwSignal<ContactState>,
    field: Field,
    label: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let value = move || state.with(|s| s.form.get(field).to_string());
    let on_input = move |ev: Event| state.write().edit(field, event_target_value(&ev));
    let disabled = move || state.with(|s| s.is_submitting());
    let class = "w-full px-3 py-2 rounded bg-input text-gray-100 border border-input focus:outline-none focus:border-link disabled:opacity-50";

    view! {
        <label class="block">
            <span class="block mb-1 text-sm text-body">{label} " *"</span>
            {if multiline {
                view! { <textarea
                        rows=6
                        class=class
                        prop:value=value
                        disabled=disabled
                        on:input=on_input
                    ></textarea> }
                    .into_any()
            } else {
                view! { <input
                        type=input_type
                        class=class
                        prop:value=value
                        disabled=disabled
                        on:input=on_input
                    /> }
                    .into_any()
            }}
        </label>
    }
}
