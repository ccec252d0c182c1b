use leptos::{ev::Event, prelude::*};
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use super::{
    frame::PageFrame,
    icons::SendIcon,
    text::{BlurText, TextWithPillBadge},
};
use crate::{
    config::SITE,
    contact::{ContactField, ContactForm},
    content::CONTACT_TAGLINE,
};

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Editing,
    Invalid(String),
    Sent,
}

const INPUT_CLASS: &str = "w-full rounded-md border border-[#f5f5f5] bg-white px-3 py-2 text-sm text-gray-900 placeholder:text-[#737373] focus:border-gray-400 focus:outline-none dark:border-[#1f1f1f] dark:bg-[#171717] dark:text-white dark:focus:border-gray-500";

#[component]
pub fn ContactPage() -> impl IntoView {
    // the home page strip passes its draft along
    let draft = use_query_map().with_untracked(|q| q.get("message"));
    let form = RwSignal::new(ContactForm {
        message: draft.unwrap_or_default(),
        ..Default::default()
    });
    let (status, set_status) = signal(Status::Editing);

    // every field shares one handler keyed on its `name` attribute
    let on_input = move |ev: Event| {
        let name = event_target::<web_sys::Element>(&ev).get_attribute("name");
        match name.as_deref().and_then(ContactField::from_name) {
            Some(field) => {
                form.update(|f| f.set(field, event_target_value(&ev)));
                set_status.set(Status::Editing);
            }
            None => log::warn!("input event from unknown field {name:?}"),
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| f.submit()) {
            Ok(()) => {
                form.set(ContactForm::default());
                set_status.set(Status::Sent);
            }
            Err(e) => set_status.set(Status::Invalid(e.to_string())),
        }
    };

    view! {
        <Title text="Contact" />
        <PageFrame>
            <section class="mx-auto max-w-4xl bg-white px-6 pb-12 pt-20 dark:bg-[#171717]">
                <div class="max-w-2xl">
                    <h1 class="hero-title mb-2 text-4xl font-bold text-gray-900 dark:text-white">
                        "Contact Me"
                    </h1>
                    <BlurText text=CONTACT_TAGLINE class="mb-6 text-xl leading-relaxed text-[#737373]" />
                </div>
            </section>

            <section class="section-with-inset-shadow mx-auto max-w-4xl border-t border-[#f5f5f5] bg-white px-6 pb-12 pt-8 dark:border-[#1f1f1f] dark:bg-[#171717]">
                <div class="mx-auto max-w-2xl">
                    <div class="relative z-10 rounded-xl border border-[#f5f5f5] bg-white p-6 shadow-sm dark:border-[#1f1f1f] dark:bg-[#171717]">
                        <div class="mb-6">
                            <TextWithPillBadge words="Send me a message" as_heading=true />
                        </div>
                        <form class="relative z-10 space-y-6" on:submit=on_submit novalidate>
                            <div class="space-y-2">
                                <label for="name" class="text-sm font-medium text-[#737373]">
                                    "Full name"
                                </label>
                                <input
                                    id="name"
                                    name="name"
                                    type="text"
                                    placeholder="John Doe Smith"
                                    autocomplete="name"
                                    class=INPUT_CLASS
                                    prop:value=move || form.get().name
                                    on:input=on_input
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="email" class="text-sm font-medium text-[#737373]">
                                    "Email Address"
                                </label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    placeholder="john@example.com"
                                    autocomplete="email"
                                    class=INPUT_CLASS
                                    prop:value=move || form.get().email
                                    on:input=on_input
                                />
                            </div>
                            <div class="space-y-2">
                                <label for="message" class="text-sm font-medium text-[#737373]">
                                    "Message"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="6"
                                    placeholder="What's on your mind?"
                                    class=format!("{INPUT_CLASS} resize-none")
                                    prop:value=move || form.get().message
                                    on:input=on_input
                                ></textarea>
                            </div>
                            {move || match status.get() {
                                Status::Editing => None,
                                Status::Invalid(msg) => {
                                    Some(
                                        view! {
                                            <p class="text-sm text-red-600 dark:text-red-400" role="alert">
                                                {msg}
                                            </p>
                                        }
                                            .into_any(),
                                    )
                                }
                                Status::Sent => {
                                    Some(
                                        view! {
                                            <p class="text-sm text-green-700 dark:text-green-400" role="status">
                                                "Thanks! I'll get back to you soon."
                                            </p>
                                        }
                                            .into_any(),
                                    )
                                }
                            }}
                            <button
                                type="submit"
                                class="relative z-10 inline-flex w-full cursor-pointer items-center justify-center rounded-md bg-gray-900 px-4 py-2 text-sm font-medium text-white transition-colors duration-200 hover:bg-gray-800 dark:bg-white dark:text-gray-900 dark:hover:bg-gray-100"
                            >
                                <SendIcon class="mr-2 h-4 w-4" />
                                "Send message"
                            </button>
                        </form>
                    </div>

                    <div class="mt-12 text-center">
                        <p class="mb-4 text-sm text-[#737373]">
                            "Prefer to reach out directly? "
                            <a
                                href=format!("mailto:{}", SITE.email)
                                class="text-gray-900 transition-colors hover:underline dark:text-white"
                            >
                                {SITE.email}
                            </a>
                        </p>
                    </div>
                </div>
            </section>
        </PageFrame>
    }
}
