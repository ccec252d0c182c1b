use leptos::{html, prelude::*};
use leptos_use::{
    use_document_visibility, use_interval_fn, use_timeout_fn, UseTimeoutFnReturn,
};
use web_sys::VisibilityState;

use super::{pill_badge::CornerDots, reveal::use_reveal};
use crate::{
    config::SITE,
    interaction::reveal::{word_animation_ms, RevealOptions},
};

const LETTER_STEP_MS: u64 = 25;

/// Heading whose words blur in one after another each time it scrolls into
/// view. Once the last word lands a square badge frames it.
#[component]
pub fn TextWithPillBadge(
    words: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] as_heading: bool,
    #[prop(default = 0.5)] duration_s: f64,
    #[prop(default = 0.15)] stagger_s: f64,
    #[prop(default = true)] show_pill_badge: bool,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target, RevealOptions::heading(), 0);
    let word_list = words.split_whitespace().collect::<Vec<_>>();
    let settle_ms = word_animation_ms(word_list.len(), duration_s, stagger_s);

    let (badge, set_badge) = signal(false);
    let UseTimeoutFnReturn { start, stop, .. } =
        use_timeout_fn(move |_: ()| set_badge.set(true), settle_ms as f64);
    Effect::watch(
        move || revealed.get(),
        move |revealed, _, _| {
            if *revealed {
                start(());
            } else {
                stop();
                set_badge.set(false);
            }
        },
        false,
    );
    let badge_enabled = SITE.text_with_pill_badge && show_pill_badge;

    let text = word_list
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let style = move || {
                let (opacity, blur) = if revealed.get() { (1, 0) } else { (0, 10) };
                format!(
                    "opacity: {opacity}; filter: blur({blur}px); transition: opacity {duration_s}s ease, filter {duration_s}s ease; transition-delay: {:.3}s;",
                    i as f64 * stagger_s,
                )
            };
            view! {
                <span class="inline-block motion-reduce:!opacity-100 motion-reduce:!filter-none" style=style>
                    {word}
                </span>
                " "
            }
        })
        .collect_view();
    let text = if as_heading {
        view! { <h2 class="text-2xl font-bold tracking-tight md:text-3xl">{text}</h2> }
            .into_any()
    } else {
        view! { <div class="text-lg">{text}</div> }.into_any()
    };

    view! {
        <div node_ref=target class=format!("relative inline-block {class}")>
            <div class="relative z-10 inline-block">{text}</div>
            {badge_enabled
                .then(|| {
                    view! {
                        <div
                            class=move || {
                                let opacity = if badge.get() { "opacity-100" } else { "opacity-0" };
                                format!(
                                    "pointer-events-none absolute -top-1 -bottom-1 -left-1.5 -right-1.5 rounded-md border border-[#e5e5e5] bg-[#f5f5f5] shadow-sm transition-opacity duration-200 dark:border-[#2a2a2a] dark:bg-[#1f1f1f] {opacity}",
                                )
                            }
                            aria-hidden="true"
                        >
                            <CornerDots tight=true />
                        </div>
                    }
                })}
        </div>
    }
}

/// Text that sharpens in letter by letter the first time it's seen.
#[component]
pub fn BlurText(text: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target, RevealOptions::card(), 0);

    view! {
        <div node_ref=target class=class aria-label=text>
            {text
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    let letter = if c == ' ' { '\u{a0}' } else { c };
                    let delay = i as u64 * LETTER_STEP_MS;
                    view! {
                        <span
                            aria-hidden="true"
                            class="inline-block motion-reduce:!opacity-100 motion-reduce:!filter-none"
                            style=move || {
                                let (opacity, blur, y) = if revealed.get() { (1, 0, 0) } else { (0, 10, -8) };
                                format!(
                                    "opacity: {opacity}; filter: blur({blur}px); transform: translateY({y}px); transition: opacity 0.35s ease, filter 0.35s ease, transform 0.35s ease; transition-delay: {delay}ms;",
                                )
                            }
                        >
                            {letter.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Static lead text followed by a word that rotates on a timer. The timer
/// pauses while the tab is hidden.
#[component]
pub fn TextFlip(
    text: &'static str,
    words: &'static [&'static str],
    #[prop(default = 2500)] interval_ms: u64,
) -> impl IntoView {
    let (index, set_index) = signal(0usize);
    let len = words.len().max(1);
    let interval = use_interval_fn(
        move || set_index.update(|i| *i = (*i + 1) % len),
        interval_ms,
    );
    let visibility = use_document_visibility();
    Effect::new(move |_| {
        if visibility.get() == VisibilityState::Visible {
            (interval.resume)();
        } else {
            (interval.pause)();
        }
    });

    view! {
        <span class="text-2xl font-bold tracking-tight drop-shadow-lg md:text-4xl">{text}</span>
        <span class="relative inline-block w-fit overflow-hidden rounded-md bg-white px-2 py-0 font-sans text-sm font-medium tracking-tight text-[#737373] shadow-sm ring-1 ring-black/10 dark:bg-neutral-900 dark:ring-white/10 md:-translate-y-1">
            {move || {
                let word = words.get(index.get()).copied().unwrap_or_default();
                view! { <span class="inline-block whitespace-nowrap flip-in">{word}</span> }
            }}
        </span>
    }
}
