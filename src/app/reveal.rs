use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::interaction::reveal::{
    stagger_delay_ms, Reveal, RevealChange, RevealOptions, STAGGER_MS,
};

/// Track whether `target` has scrolled into view.
///
/// `delay_ms` postpones the reveal (not the hide); use it with one-shot
/// options only. One-shot observers disconnect after firing.
pub fn use_reveal(
    target: NodeRef<html::Div>,
    options: RevealOptions,
    delay_ms: u64,
) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let reveal = StoredValue::new(Reveal::new(&options));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let change = reveal
                    .try_update_value(|r| {
                        r.observe(entry.is_intersecting(), entry.intersection_ratio())
                    })
                    .unwrap_or(RevealChange::Unchanged);
                match change {
                    RevealChange::Shown if delay_ms > 0 => set_timeout(
                        move || set_revealed.set(true),
                        Duration::from_millis(delay_ms),
                    ),
                    RevealChange::Shown => set_revealed.set(true),
                    RevealChange::Hidden => set_revealed.set(false),
                    RevealChange::Unchanged => {}
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin.to_string()),
    );

    Effect::new(move |_| {
        if revealed.get() && !reveal.with_value(|r| r.wants_updates()) {
            stop();
        }
    });

    revealed
}

/// Card that fades and lifts in when scrolled to, staggered by `index`.
#[component]
pub fn RevealCard(
    #[prop(optional)] index: usize,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(
        target,
        RevealOptions::card(),
        stagger_delay_ms(index, STAGGER_MS),
    );

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if revealed.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-4"
                };
                format!("transition-all duration-500 ease-out motion-reduce:transition-none motion-reduce:!opacity-100 motion-reduce:!translate-y-0 {state} {class}")
            }
        >
            {children()}
        </div>
    }
}
